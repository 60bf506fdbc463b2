// # Win32 Display Layer
//
// This crate implements the dispid OS seam on Windows:
//
// - `Win32DisplayConfig`: `GetDisplayConfigBufferSizes`, `QueryDisplayConfig`
//   and `DisplayConfigGetDeviceInfo`
// - `Win32DeviceEnumerator`: SetupAPI monitor interface enumeration, with
//   EDID read from each device's registry key
//
// ## Platform Support
//
// The real implementation only compiles on Windows. Elsewhere the same
// types exist but every OS call reports `ERROR_NOT_SUPPORTED`, which the
// core treats like any other unavailable OS data.

#[cfg(windows)]
mod win32;

#[cfg(windows)]
pub use win32::{Win32DeviceEnumerator, Win32DisplayConfig, Win32InterfaceList};

#[cfg(not(windows))]
mod unsupported;

#[cfg(not(windows))]
pub use unsupported::{Win32DeviceEnumerator, Win32DisplayConfig, Win32InterfaceList};

use dispid_core::{DispIdConfig, DisplayDeviceLayer, Result};

/// Display layer backed by this platform's display APIs
pub type Win32DisplayLayer = DisplayDeviceLayer<Win32DisplayConfig, Win32DeviceEnumerator>;

/// Create a display layer backed by the Windows APIs
pub fn display_layer(config: DispIdConfig) -> Result<Win32DisplayLayer> {
    DisplayDeviceLayer::new(Win32DisplayConfig::new(), Win32DeviceEnumerator::new(), config)
}

/// Whether the OS layer is functional on this build
pub fn is_supported() -> bool {
    cfg!(windows)
}
