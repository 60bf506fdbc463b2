//! Stand-ins for non-Windows builds
//!
//! Every OS call reports `ERROR_NOT_SUPPORTED`.

use dispid_core::model::{
    BufferSizes, DisplayPath, QueryScope, RawTopology, SourceDeviceName, TargetDeviceName,
};
use dispid_core::traits::{DeviceEnumerator, DisplayConfigApi, MonitorInterfaceList};
use dispid_core::{StatusCode, WideString};

#[derive(Debug, Clone, Copy, Default)]
pub struct Win32DisplayConfig;

impl Win32DisplayConfig {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayConfigApi for Win32DisplayConfig {
    fn buffer_sizes(&self, _scope: QueryScope) -> Result<BufferSizes, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn query_display_config(
        &self,
        _scope: QueryScope,
        _sizes: BufferSizes,
    ) -> Result<RawTopology, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn target_device_name(&self, _path: &DisplayPath) -> Result<TargetDeviceName, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn source_device_name(&self, _path: &DisplayPath) -> Result<SourceDeviceName, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Win32DeviceEnumerator;

impl Win32DeviceEnumerator {
    pub fn new() -> Self {
        Self
    }
}

impl DeviceEnumerator for Win32DeviceEnumerator {
    type List = Win32InterfaceList;

    fn monitor_interfaces(&self) -> Result<Win32InterfaceList, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }
}

/// Never constructed off Windows
#[derive(Debug)]
pub struct Win32InterfaceList {
    _private: (),
}

impl MonitorInterfaceList for Win32InterfaceList {
    type Interface = ();
    type Record = ();

    fn interface(&self, _index: u32) -> Result<Option<()>, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn interface_detail(&self, _interface: &()) -> Result<(WideString, ()), StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn instance_id(&self, _record: &()) -> Result<WideString, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }

    fn edid(&self, _record: &()) -> Result<Vec<u8>, StatusCode> {
        Err(StatusCode::NOT_SUPPORTED)
    }
}
