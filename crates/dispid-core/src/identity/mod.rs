//! Stable device identities
//!
//! A display's identity is derived from the most stable hardware data that
//! can be found for it:
//!
//! 1. Resolve the path's monitor device path. Without it there is no
//!    identity at all.
//! 2. Walk the monitor device interfaces and take the first one whose
//!    device path matches (ASCII case-insensitive).
//! 3. From the matched record, hash EDID bytes followed by the instance id
//!    with its rotating segment removed.
//! 4. If anything in 2-3 fails, hash the monitor device path instead. That
//!    is unique within the session but changes when the display moves to
//!    another port.

pub mod instance_id;
pub mod synthesize;

use crate::config::EnumerationConfig;
use crate::model::DisplayPath;
use crate::properties::monitor_device_path_wide;
use crate::status::StatusCode;
use crate::topology::dump_identity_bytes;
use crate::traits::{DeviceEnumerator, DisplayConfigApi, MonitorInterfaceList};
use crate::wide::WideString;
use serde::Serialize;
use tracing::{debug, error, trace, warn};

pub use instance_id::stable_instance_id;
pub use synthesize::synthesize;

/// Which data an identity was derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentitySource {
    /// EDID bytes plus the stable instance id parts
    EdidAndInstanceId,
    /// The session-scoped monitor device path
    DevicePath,
}

/// A synthesized identity and where it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceIdentity {
    pub id: String,
    pub source: IdentitySource,
}

/// Derive the identity of a path's target display
///
/// Returns `None` only when the monitor device path itself is unavailable.
pub fn resolve_device_identity<A, E>(
    api: &A,
    enumerator: &E,
    path: &DisplayPath,
    config: &EnumerationConfig,
) -> Option<DeviceIdentity>
where
    A: DisplayConfigApi + ?Sized,
    E: DeviceEnumerator + ?Sized,
{
    let device_path = monitor_device_path_wide(api, path);
    if device_path.is_empty() {
        return None;
    }

    let (data, source) = match collect_hardware_data(api, enumerator, &device_path, config) {
        Some(data) => (data, IdentitySource::EdidAndInstanceId),
        None => {
            debug!("Creating device id from path {}", device_path);
            (device_path.to_le_bytes(), IdentitySource::DevicePath)
        }
    };

    let id = synthesize(&data);
    debug!("Created device id: {} -> {}", device_path, id);
    Some(DeviceIdentity { id, source })
}

/// Identity string of a path's target display, empty when unidentifiable
pub fn get_device_id<A, E>(
    api: &A,
    enumerator: &E,
    path: &DisplayPath,
    config: &EnumerationConfig,
) -> String
where
    A: DisplayConfigApi + ?Sized,
    E: DeviceEnumerator + ?Sized,
{
    resolve_device_identity(api, enumerator, path, config)
        .map(|identity| identity.id)
        .unwrap_or_default()
}

/// EDID + stable instance id bytes for the device behind `device_path`
fn collect_hardware_data<A, E>(
    api: &A,
    enumerator: &E,
    device_path: &WideString,
    config: &EnumerationConfig,
) -> Option<Vec<u8>>
where
    A: DisplayConfigApi + ?Sized,
    E: DeviceEnumerator + ?Sized,
{
    let list = match enumerator.monitor_interfaces() {
        Ok(list) => list,
        Err(code) => {
            error!(
                "{} failed to open monitor device interfaces.",
                api.error_string(code)
            );
            return None;
        }
    };

    let record = find_matching_record(api, &list, device_path, config.max_interfaces)?;

    let instance_id = match list.instance_id(&record) {
        Ok(instance_id) if !instance_id.is_empty() => instance_id,
        Ok(_) => {
            error!("Device instance id of {} is empty.", device_path);
            return None;
        }
        Err(code) => {
            error!(
                "{} failed to get device instance id.",
                api.error_string(code)
            );
            return None;
        }
    };

    let Some(stable_id) = stable_instance_id(&instance_id) else {
        error!(
            "Failed to split off the stable part from instance id string {}",
            instance_id
        );
        return None;
    };

    let mut data = match list.edid(&record) {
        Ok(edid) => edid,
        Err(StatusCode::FILE_NOT_FOUND) => {
            debug!("No EDID stored for {}, using instance id only.", instance_id);
            Vec::new()
        }
        Err(code) => {
            error!("{} failed to read device EDID.", api.error_string(code));
            return None;
        }
    };

    data.extend(stable_id.to_le_bytes());
    trace!(
        "Creating device id from EDID + instance ID: {}",
        dump_identity_bytes(&data)
    );
    Some(data)
}

/// First record whose interface path matches `device_path`
///
/// Entries that fail to enumerate or resolve are skipped.
fn find_matching_record<A, L>(
    api: &A,
    list: &L,
    device_path: &WideString,
    max_interfaces: u32,
) -> Option<L::Record>
where
    A: DisplayConfigApi + ?Sized,
    L: MonitorInterfaceList,
{
    for index in 0..max_interfaces {
        let interface = match list.interface(index) {
            Ok(Some(interface)) => interface,
            Ok(None) => {
                debug!("No monitor device interface matches {}", device_path);
                return None;
            }
            Err(code) => {
                warn!(
                    "{} failed to enumerate monitor interface {}.",
                    api.error_string(code),
                    index
                );
                continue;
            }
        };

        let (interface_path, record) = match list.interface_detail(&interface) {
            Ok(detail) => detail,
            Err(code) => {
                warn!(
                    "{} failed to get detail of monitor interface {}.",
                    api.error_string(code),
                    index
                );
                continue;
            }
        };

        if interface_path.eq_ignore_ascii_case(device_path) {
            return Some(record);
        }
    }

    warn!(
        "Gave up looking for {} after {} monitor interfaces",
        device_path, max_interfaces
    );
    None
}
