//! The display device layer
//!
//! [`DisplayDeviceLayer`] is what orchestration code talks to. It bundles a
//! platform's [`DisplayConfigApi`] and [`DeviceEnumerator`] with the
//! configuration and exposes the outbound operations:
//!
//! ```text
//!            query_topology ──► Topology { paths, modes }
//!                                     │ (per path)
//!          ┌──────────────────┬───────┴──────────┬──────────────────┐
//!          ▼                  ▼                  ▼                  ▼
//! get_monitor_device_path  get_friendly_name  get_display_name  get_device_id
//! ```
//!
//! Every call re-derives its answer from the current OS state; nothing is
//! cached between calls.

use crate::config::DispIdConfig;
use crate::error::Result;
use crate::identity::{self, DeviceIdentity};
use crate::model::{DisplayPath, QueryScope, Topology};
use crate::properties;
use crate::status::StatusCode;
use crate::topology;
use crate::traits::{DeviceEnumerator, DisplayConfigApi};

/// Display topology and identity queries over one platform layer
pub struct DisplayDeviceLayer<A, E> {
    api: A,
    enumerator: E,
    config: DispIdConfig,
}

impl<A, E> DisplayDeviceLayer<A, E>
where
    A: DisplayConfigApi,
    E: DeviceEnumerator,
{
    /// Create a layer, validating the configuration
    pub fn new(api: A, enumerator: E, config: DispIdConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            api,
            enumerator,
            config,
        })
    }

    /// Create a layer with the default configuration
    pub fn with_defaults(api: A, enumerator: E) -> Self {
        Self {
            api,
            enumerator,
            config: DispIdConfig::default(),
        }
    }

    pub fn config(&self) -> &DispIdConfig {
        &self.config
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn enumerator(&self) -> &E {
        &self.enumerator
    }

    /// Current topology, or `None` if it is unavailable right now
    pub fn query_topology(&self, scope: QueryScope) -> Option<Topology> {
        topology::query_topology(&self.api, scope, &self.config.topology)
    }

    /// Stable identity of the path's display; empty if unidentifiable
    pub fn get_device_id(&self, path: &DisplayPath) -> String {
        identity::get_device_id(&self.api, &self.enumerator, path, &self.config.enumeration)
    }

    /// Identity together with the data it was derived from
    pub fn resolve_device_identity(&self, path: &DisplayPath) -> Option<DeviceIdentity> {
        identity::resolve_device_identity(
            &self.api,
            &self.enumerator,
            path,
            &self.config.enumeration,
        )
    }

    pub fn get_monitor_device_path(&self, path: &DisplayPath) -> String {
        properties::get_monitor_device_path(&self.api, path)
    }

    pub fn get_friendly_name(&self, path: &DisplayPath) -> String {
        properties::get_friendly_name(&self.api, path)
    }

    pub fn get_display_name(&self, path: &DisplayPath) -> String {
        properties::get_display_name(&self.api, path)
    }

    pub fn get_error_string(&self, code: StatusCode) -> String {
        self.api.error_string(code)
    }
}
