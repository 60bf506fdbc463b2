//! Per-path device properties
//!
//! Three independent, read-only lookups keyed by a [`DisplayPath`]. Each one
//! logs its own failure and returns an empty value; nothing is propagated.

use crate::model::DisplayPath;
use crate::traits::DisplayConfigApi;
use crate::wide::WideString;
use tracing::{error, trace};

/// Monitor device path of the path's target, in native UTF-16 form
///
/// Empty if the device-info request failed.
pub fn monitor_device_path_wide<A>(api: &A, path: &DisplayPath) -> WideString
where
    A: DisplayConfigApi + ?Sized,
{
    match api.target_device_name(path) {
        Ok(target_name) => target_name.monitor_device_path,
        Err(code) => {
            error!("{} failed to get target device name!", api.error_string(code));
            WideString::new()
        }
    }
}

/// Monitor device path of the path's target
pub fn get_monitor_device_path<A>(api: &A, path: &DisplayPath) -> String
where
    A: DisplayConfigApi + ?Sized,
{
    monitor_device_path_wide(api, path).to_utf8()
}

/// Friendly name of the path's target, only when the OS derived it from EDID
///
/// Names the OS made up itself (generic "Generic PnP Monitor" style names)
/// are never returned.
pub fn get_friendly_name<A>(api: &A, path: &DisplayPath) -> String
where
    A: DisplayConfigApi + ?Sized,
{
    let target_name = match api.target_device_name(path) {
        Ok(target_name) => target_name,
        Err(code) => {
            error!("{} failed to get target device name!", api.error_string(code));
            return String::new();
        }
    };

    trace!(
        "Target {} reports EDID manufacturer 0x{:04X}, product 0x{:04X}, connector {}",
        path.target.id,
        target_name.edid_manufacture_id,
        target_name.edid_product_code_id,
        target_name.connector_instance
    );

    if target_name.friendly_name_from_edid {
        target_name.friendly_name.to_utf8()
    } else {
        String::new()
    }
}

/// GDI device name (e.g. `\\.\DISPLAY1`) of the path's source
pub fn get_display_name<A>(api: &A, path: &DisplayPath) -> String
where
    A: DisplayConfigApi + ?Sized,
{
    match api.source_device_name(path) {
        Ok(source_name) => source_name.gdi_device_name.to_utf8(),
        Err(code) => {
            error!("{} failed to get display name!", api.error_string(code));
            String::new()
        }
    }
}
