//! Configuration types for dispid
//!
//! There is no configuration file; outer tooling builds these from its own
//! inputs and hands them to [`DisplayDeviceLayer`](crate::DisplayDeviceLayer).

use serde::{Deserialize, Serialize};

/// Upper bound accepted for `max_buffer_retries`
pub const MAX_BUFFER_RETRIES_LIMIT: usize = 64;

/// Main dispid configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispIdConfig {
    /// Topology query settings
    #[serde(default)]
    pub topology: TopologyConfig,

    /// Device enumeration settings
    #[serde(default)]
    pub enumeration: EnumerationConfig,
}

impl DispIdConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), crate::Error> {
        self.topology.validate()?;
        self.enumeration.validate()?;
        Ok(())
    }
}

/// Topology query settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopologyConfig {
    /// How many times a query is re-sized after the OS reports the buffer
    /// too small, before the topology is declared unavailable
    #[serde(default = "default_max_buffer_retries")]
    pub max_buffer_retries: usize,
}

impl TopologyConfig {
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.max_buffer_retries == 0 {
            return Err(crate::Error::config("max_buffer_retries must be > 0"));
        }
        if self.max_buffer_retries > MAX_BUFFER_RETRIES_LIMIT {
            return Err(crate::Error::config(format!(
                "max_buffer_retries must be <= {}, got {}",
                MAX_BUFFER_RETRIES_LIMIT, self.max_buffer_retries
            )));
        }
        Ok(())
    }
}

impl Default for TopologyConfig {
    fn default() -> Self {
        Self {
            max_buffer_retries: default_max_buffer_retries(),
        }
    }
}

/// Device enumeration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationConfig {
    /// Maximum number of monitor interfaces visited per identity lookup
    #[serde(default = "default_max_interfaces")]
    pub max_interfaces: u32,
}

impl EnumerationConfig {
    pub fn validate(&self) -> Result<(), crate::Error> {
        if self.max_interfaces == 0 {
            return Err(crate::Error::config("max_interfaces must be > 0"));
        }
        Ok(())
    }
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self {
            max_interfaces: default_max_interfaces(),
        }
    }
}

fn default_max_buffer_retries() -> usize {
    8
}

fn default_max_interfaces() -> u32 {
    1024
}
