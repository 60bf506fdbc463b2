// # Device Enumeration Trait
//
// Monitor device-interface enumeration, modelled after the OS setup API:
// open a list for the monitor interface class, walk it by index, resolve
// each interface to its device path and device record, then read
// per-record properties.
//
// ## Resource rules
//
// A `MonitorInterfaceList` owns the OS enumeration handle. Implementations
// release it in `Drop`, so every exit path of the collector frees it.
// Registry keys opened while reading a record's EDID are scoped to that
// single call and closed before it returns.

use crate::status::StatusCode;
use crate::wide::WideString;

/// Device-interface class of monitors: `{e6f07b5f-ee97-4a90-b076-33f57bf4eaa7}`
pub const MONITOR_INTERFACE_CLASS: u128 = 0xe6f07b5f_ee97_4a90_b076_33f57bf4eaa7;

/// Opens monitor interface lists
pub trait DeviceEnumerator {
    type List: MonitorInterfaceList;

    /// Open a fresh enumeration of present monitor interfaces
    fn monitor_interfaces(&self) -> Result<Self::List, StatusCode>;
}

/// An open enumeration handle over monitor interfaces
pub trait MonitorInterfaceList {
    /// One enumerated interface entry
    type Interface;
    /// The device record an interface belongs to
    type Record;

    /// Interface at `index`; `Ok(None)` once the list is exhausted
    fn interface(&self, index: u32) -> Result<Option<Self::Interface>, StatusCode>;

    /// Device path of an interface together with its device record
    fn interface_detail(
        &self,
        interface: &Self::Interface,
    ) -> Result<(WideString, Self::Record), StatusCode>;

    /// Instance id of a device record
    fn instance_id(&self, record: &Self::Record) -> Result<WideString, StatusCode>;

    /// Raw `EDID` value from the record's device registry key
    ///
    /// A present but empty value is `Ok` with no bytes.
    fn edid(&self, record: &Self::Record) -> Result<Vec<u8>, StatusCode>;
}

impl<T: DeviceEnumerator + ?Sized> DeviceEnumerator for &T {
    type List = T::List;

    fn monitor_interfaces(&self) -> Result<Self::List, StatusCode> {
        (**self).monitor_interfaces()
    }
}
