//! OS seam for dispid
//!
//! This module defines the interfaces a platform layer implements.
//!
//! - [`DisplayConfigApi`]: topology queries and per-path device-info requests
//! - [`DeviceEnumerator`]: monitor device-interface enumeration
//! - [`MonitorInterfaceList`]: one open enumeration handle

pub mod device_enum;
pub mod display_config;

pub use device_enum::{DeviceEnumerator, MONITOR_INTERFACE_CLASS, MonitorInterfaceList};
pub use display_config::DisplayConfigApi;
