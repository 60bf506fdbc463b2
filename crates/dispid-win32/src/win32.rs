//! Windows implementation of the dispid OS seam

use dispid_core::model::{
    AdapterId, BufferSizes, DesktopImageInfo, DisplayMode, DisplayPath, ModeInfo,
    PathSourceInfo, PathTargetInfo, Point, QueryScope, Rational, RawTopology, Rect, Region,
    SourceDeviceName, SourceMode, TargetDeviceName, TargetMode,
};
use dispid_core::traits::{
    DeviceEnumerator, DisplayConfigApi, MONITOR_INTERFACE_CLASS, MonitorInterfaceList,
};
use dispid_core::{StatusCode, WideString};
use std::mem::{offset_of, size_of};
use tracing::error;
use windows::Win32::Devices::DeviceAndDriverInstallation::{
    DIGCF_DEVICEINTERFACE, HDEVINFO, SP_DEVICE_INTERFACE_DATA, SP_DEVICE_INTERFACE_DETAIL_DATA_W,
    SP_DEVINFO_DATA, SetupDiDestroyDeviceInfoList, SetupDiEnumDeviceInterfaces,
    SetupDiGetClassDevsW, SetupDiGetDeviceInstanceIdW, SetupDiGetDeviceInterfaceDetailW,
    SetupDiOpenDevRegKey,
};
use windows::Win32::Devices::Display::{
    DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME, DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME,
    DISPLAYCONFIG_MODE_INFO, DISPLAYCONFIG_MODE_INFO_TYPE_DESKTOP_IMAGE,
    DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE, DISPLAYCONFIG_MODE_INFO_TYPE_TARGET,
    DISPLAYCONFIG_PATH_INFO, DISPLAYCONFIG_RATIONAL, DISPLAYCONFIG_SOURCE_DEVICE_NAME,
    DISPLAYCONFIG_TARGET_DEVICE_NAME, DisplayConfigGetDeviceInfo, GetDisplayConfigBufferSizes,
    QDC_ALL_PATHS, QDC_ONLY_ACTIVE_PATHS, QDC_VIRTUAL_MODE_AWARE, QUERY_DISPLAY_CONFIG_FLAGS,
    QueryDisplayConfig,
};
use windows::Win32::Foundation::{ERROR_SUCCESS, HWND, LUID, RECTL, WIN32_ERROR};
use windows::Win32::System::Registry::{HKEY, KEY_READ, RegCloseKey, RegQueryValueExW};
use windows::core::{GUID, HRESULT, PCWSTR, w};

/// `DICS_FLAG_GLOBAL`: the device's global (not per-profile) key
const DICS_FLAG_GLOBAL: u32 = 0x0000_0001;
/// `DIREG_DEV`: the hardware key, where `Device Parameters\EDID` lives
const DIREG_DEV: u32 = 0x0000_0001;
/// `friendlyNameFromEdid` bit of `DISPLAYCONFIG_TARGET_DEVICE_NAME_FLAGS`
const FRIENDLY_NAME_FROM_EDID: u32 = 0x0000_0001;

fn check(status: WIN32_ERROR) -> Result<(), StatusCode> {
    let status = StatusCode::from(status.0);
    if status.is_success() {
        Ok(())
    } else {
        Err(status)
    }
}

/// Recover the Win32 code wrapped into a `windows::core::Error`
fn status_from_error(err: &windows::core::Error) -> StatusCode {
    let hr = err.code().0 as u32;
    if hr & 0xFFFF_0000 == 0x8007_0000 {
        StatusCode::from(hr & 0xFFFF)
    } else {
        StatusCode(hr as i32)
    }
}

fn scope_flags(scope: QueryScope) -> QUERY_DISPLAY_CONFIG_FLAGS {
    let paths = match scope {
        QueryScope::Active => QDC_ONLY_ACTIVE_PATHS,
        QueryScope::All => QDC_ALL_PATHS,
    };
    // Supported from Windows 10 onwards
    paths | QDC_VIRTUAL_MODE_AWARE
}

fn adapter_id(luid: LUID) -> AdapterId {
    AdapterId::new(luid.HighPart, luid.LowPart)
}

fn luid(id: AdapterId) -> LUID {
    LUID {
        LowPart: id.low_part,
        HighPart: id.high_part,
    }
}

fn rational(value: DISPLAYCONFIG_RATIONAL) -> Rational {
    Rational {
        numerator: value.Numerator,
        denominator: value.Denominator,
    }
}

fn rect(value: RECTL) -> Rect {
    Rect {
        left: value.left,
        top: value.top,
        right: value.right,
        bottom: value.bottom,
    }
}

fn convert_path(info: &DISPLAYCONFIG_PATH_INFO) -> DisplayPath {
    let source = &info.sourceInfo;
    let target = &info.targetInfo;

    DisplayPath {
        source: PathSourceInfo {
            adapter_id: adapter_id(source.adapterId),
            id: source.id,
            mode_info_idx: unsafe { source.Anonymous.modeInfoIdx },
            status_flags: source.statusFlags,
        },
        target: PathTargetInfo {
            adapter_id: adapter_id(target.adapterId),
            id: target.id,
            mode_info_idx: unsafe { target.Anonymous.modeInfoIdx },
            output_technology: target.outputTechnology.0 as u32,
            rotation: target.rotation.0 as u32,
            scaling: target.scaling.0 as u32,
            refresh_rate: rational(target.refreshRate),
            scan_line_ordering: target.scanLineOrdering.0 as u32,
            target_available: target.targetAvailable.as_bool(),
            status_flags: target.statusFlags,
        },
        flags: info.flags,
    }
}

fn convert_mode(mode: &DISPLAYCONFIG_MODE_INFO) -> DisplayMode {
    let info = match mode.infoType {
        DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE => {
            let source = unsafe { mode.Anonymous.sourceMode };
            ModeInfo::Source(SourceMode {
                width: source.width,
                height: source.height,
                pixel_format: source.pixelFormat.0 as u32,
                position: Point {
                    x: source.position.x,
                    y: source.position.y,
                },
            })
        }
        DISPLAYCONFIG_MODE_INFO_TYPE_TARGET => {
            let signal = unsafe { mode.Anonymous.targetMode.targetVideoSignalInfo };
            ModeInfo::Target(TargetMode {
                pixel_rate: signal.pixelRate,
                h_sync_freq: rational(signal.hSyncFreq),
                v_sync_freq: rational(signal.vSyncFreq),
                active_size: Region {
                    cx: signal.activeSize.cx,
                    cy: signal.activeSize.cy,
                },
                total_size: Region {
                    cx: signal.totalSize.cx,
                    cy: signal.totalSize.cy,
                },
                video_standard: unsafe { signal.Anonymous.videoStandard },
                scan_line_ordering: signal.scanLineOrdering.0 as u32,
            })
        }
        DISPLAYCONFIG_MODE_INFO_TYPE_DESKTOP_IMAGE => {
            let image = unsafe { mode.Anonymous.desktopImageInfo };
            ModeInfo::DesktopImage(DesktopImageInfo {
                path_source_size: Point {
                    x: image.PathSourceSize.x,
                    y: image.PathSourceSize.y,
                },
                desktop_image_region: rect(image.DesktopImageRegion),
                desktop_image_clip: rect(image.DesktopImageClip),
            })
        }
        other => ModeInfo::Unknown {
            info_type: other.0 as u32,
        },
    };

    DisplayMode {
        id: mode.id,
        adapter_id: adapter_id(mode.adapterId),
        info,
    }
}

fn convert_target_name(request: &DISPLAYCONFIG_TARGET_DEVICE_NAME) -> TargetDeviceName {
    let flags = unsafe { request.flags.Anonymous.value };
    TargetDeviceName {
        friendly_name: WideString::from_nul_terminated(&request.monitorFriendlyDeviceName),
        friendly_name_from_edid: flags & FRIENDLY_NAME_FROM_EDID != 0,
        monitor_device_path: WideString::from_nul_terminated(&request.monitorDevicePath),
        output_technology: request.outputTechnology.0 as u32,
        edid_manufacture_id: request.edidManufactureId,
        edid_product_code_id: request.edidProductCodeId,
        connector_instance: request.connectorInstance,
    }
}

/// Display configuration calls of `user32`
#[derive(Debug, Clone, Copy, Default)]
pub struct Win32DisplayConfig;

impl Win32DisplayConfig {
    pub fn new() -> Self {
        Self
    }
}

impl DisplayConfigApi for Win32DisplayConfig {
    fn buffer_sizes(&self, scope: QueryScope) -> Result<BufferSizes, StatusCode> {
        let mut sizes = BufferSizes::default();
        check(unsafe {
            GetDisplayConfigBufferSizes(scope_flags(scope), &mut sizes.paths, &mut sizes.modes)
        })?;
        Ok(sizes)
    }

    fn query_display_config(
        &self,
        scope: QueryScope,
        sizes: BufferSizes,
    ) -> Result<RawTopology, StatusCode> {
        let mut path_count = sizes.paths;
        let mut mode_count = sizes.modes;
        let mut paths = vec![DISPLAYCONFIG_PATH_INFO::default(); path_count as usize];
        let mut modes = vec![DISPLAYCONFIG_MODE_INFO::default(); mode_count as usize];

        check(unsafe {
            QueryDisplayConfig(
                scope_flags(scope),
                &mut path_count,
                paths.as_mut_ptr(),
                &mut mode_count,
                modes.as_mut_ptr(),
                None,
            )
        })?;

        // The OS may fill in fewer records than it asked room for
        paths.truncate(path_count as usize);
        modes.truncate(mode_count as usize);

        Ok(RawTopology {
            paths: paths.iter().map(convert_path).collect(),
            modes: modes.iter().map(convert_mode).collect(),
        })
    }

    fn target_device_name(&self, path: &DisplayPath) -> Result<TargetDeviceName, StatusCode> {
        let mut request = DISPLAYCONFIG_TARGET_DEVICE_NAME::default();
        request.header.adapterId = luid(path.target.adapter_id);
        request.header.id = path.target.id;
        request.header.r#type = DISPLAYCONFIG_DEVICE_INFO_GET_TARGET_NAME;
        request.header.size = size_of::<DISPLAYCONFIG_TARGET_DEVICE_NAME>() as u32;

        let status = StatusCode(unsafe { DisplayConfigGetDeviceInfo(&mut request.header) });
        if !status.is_success() {
            return Err(status);
        }

        Ok(convert_target_name(&request))
    }

    fn source_device_name(&self, path: &DisplayPath) -> Result<SourceDeviceName, StatusCode> {
        let mut request = DISPLAYCONFIG_SOURCE_DEVICE_NAME::default();
        request.header.adapterId = luid(path.source.adapter_id);
        request.header.id = path.source.id;
        request.header.r#type = DISPLAYCONFIG_DEVICE_INFO_GET_SOURCE_NAME;
        request.header.size = size_of::<DISPLAYCONFIG_SOURCE_DEVICE_NAME>() as u32;

        let status = StatusCode(unsafe { DisplayConfigGetDeviceInfo(&mut request.header) });
        if !status.is_success() {
            return Err(status);
        }

        Ok(SourceDeviceName {
            gdi_device_name: WideString::from_nul_terminated(&request.viewGdiDeviceName),
        })
    }

    fn error_string(&self, code: StatusCode) -> String {
        let message = HRESULT::from_win32(code.0 as u32).message();
        let message = message.trim_end();
        if message.is_empty() {
            code.to_string()
        } else {
            code.with_message(message)
        }
    }
}

/// SetupAPI enumeration of monitor device interfaces
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
        let class = GUID::from_u128(MONITOR_INTERFACE_CLASS);
        let handle = unsafe {
            SetupDiGetClassDevsW(
                Some(&class as *const GUID),
                PCWSTR::null(),
                HWND::default(),
                DIGCF_DEVICEINTERFACE,
            )
        }
        .map_err(|e| status_from_error(&e))?;

        Ok(Win32InterfaceList { handle, class })
    }
}

/// An open SetupAPI device information set, destroyed on drop
pub struct Win32InterfaceList {
    handle: HDEVINFO,
    class: GUID,
}

impl MonitorInterfaceList for Win32InterfaceList {
    type Interface = SP_DEVICE_INTERFACE_DATA;
    type Record = SP_DEVINFO_DATA;

    fn interface(&self, index: u32) -> Result<Option<SP_DEVICE_INTERFACE_DATA>, StatusCode> {
        let mut interface = SP_DEVICE_INTERFACE_DATA {
            cbSize: size_of::<SP_DEVICE_INTERFACE_DATA>() as u32,
            ..Default::default()
        };

        match unsafe {
            SetupDiEnumDeviceInterfaces(self.handle, None, &self.class, index, &mut interface)
        } {
            Ok(()) => Ok(Some(interface)),
            Err(e) => match status_from_error(&e) {
                StatusCode::NO_MORE_ITEMS => Ok(None),
                status => Err(status),
            },
        }
    }

    fn interface_detail(
        &self,
        interface: &SP_DEVICE_INTERFACE_DATA,
    ) -> Result<(WideString, SP_DEVINFO_DATA), StatusCode> {
        let mut required_bytes = 0u32;
        let probe = unsafe {
            SetupDiGetDeviceInterfaceDetailW(
                self.handle,
                interface,
                None,
                0,
                Some(&mut required_bytes as *mut u32),
                None,
            )
        };
        match probe {
            Ok(()) => {
                error!("\"SetupDiGetDeviceInterfaceDetailW\" did not fail, what?!");
                return Err(StatusCode::GEN_FAILURE);
            }
            Err(e) if required_bytes == 0 => {
                error!(
                    "{} \"SetupDiGetDeviceInterfaceDetailW\" failed while getting size.",
                    status_from_error(&e)
                );
                return Err(status_from_error(&e));
            }
            Err(_) => {}
        }

        let header_size = size_of::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>();
        let byte_len = (required_bytes as usize).max(header_size);
        // u32 storage keeps the detail header aligned
        let mut buffer = vec![0u32; byte_len.div_ceil(size_of::<u32>())];
        let detail = buffer.as_mut_ptr().cast::<SP_DEVICE_INTERFACE_DETAIL_DATA_W>();
        unsafe { (*detail).cbSize = header_size as u32 };

        let mut record = SP_DEVINFO_DATA {
            cbSize: size_of::<SP_DEVINFO_DATA>() as u32,
            ..Default::default()
        };
        unsafe {
            SetupDiGetDeviceInterfaceDetailW(
                self.handle,
                interface,
                Some(detail),
                required_bytes,
                None,
                Some(&mut record as *mut SP_DEVINFO_DATA),
            )
        }
        .map_err(|e| status_from_error(&e))?;

        let path_offset = offset_of!(SP_DEVICE_INTERFACE_DETAIL_DATA_W, DevicePath);
        let path_units = (byte_len - path_offset) / size_of::<u16>();
        let device_path = unsafe {
            let start = buffer.as_ptr().cast::<u8>().add(path_offset).cast::<u16>();
            WideString::from_nul_terminated(std::slice::from_raw_parts(start, path_units))
        };

        if device_path.is_empty() {
            return Err(StatusCode::INVALID_PARAMETER);
        }
        Ok((device_path, record))
    }

    fn instance_id(&self, record: &SP_DEVINFO_DATA) -> Result<WideString, StatusCode> {
        let mut required_chars = 0u32;
        let probe = unsafe {
            SetupDiGetDeviceInstanceIdW(
                self.handle,
                record,
                None,
                Some(&mut required_chars as *mut u32),
            )
        };
        match probe {
            Ok(()) => {
                error!("\"SetupDiGetDeviceInstanceIdW\" did not fail, what?!");
                return Err(StatusCode::GEN_FAILURE);
            }
            Err(e) if required_chars == 0 => {
                error!(
                    "{} \"SetupDiGetDeviceInstanceIdW\" failed while getting size.",
                    status_from_error(&e)
                );
                return Err(status_from_error(&e));
            }
            Err(_) => {}
        }

        let mut instance_id = vec![0u16; required_chars as usize];
        unsafe {
            SetupDiGetDeviceInstanceIdW(self.handle, record, Some(instance_id.as_mut_slice()), None)
        }
        .map_err(|e| status_from_error(&e))?;

        Ok(WideString::from_nul_terminated(&instance_id))
    }

    fn edid(&self, record: &SP_DEVINFO_DATA) -> Result<Vec<u8>, StatusCode> {
        let key = RegKey::open_device_key(self.handle, record)?;

        let mut size = 0u32;
        check(unsafe {
            RegQueryValueExW(
                key.0,
                w!("EDID"),
                None,
                None,
                None,
                Some(&mut size as *mut u32),
            )
        })?;

        let mut edid = vec![0u8; size as usize];
        if size > 0 {
            check(unsafe {
                RegQueryValueExW(
                    key.0,
                    w!("EDID"),
                    None,
                    None,
                    Some(edid.as_mut_ptr()),
                    Some(&mut size as *mut u32),
                )
            })?;
            edid.truncate(size as usize);
        }

        Ok(edid)
    }
}

impl Drop for Win32InterfaceList {
    fn drop(&mut self) {
        if let Err(e) = unsafe { SetupDiDestroyDeviceInfoList(self.handle) } {
            error!(
                "{} \"SetupDiDestroyDeviceInfoList\" failed.",
                status_from_error(&e)
            );
        }
    }
}

/// Device registry key, closed on drop
struct RegKey(HKEY);

impl RegKey {
    fn open_device_key(handle: HDEVINFO, record: &SP_DEVINFO_DATA) -> Result<Self, StatusCode> {
        unsafe { SetupDiOpenDevRegKey(handle, record, DICS_FLAG_GLOBAL, 0, DIREG_DEV, KEY_READ.0) }
            .map(Self)
            .map_err(|e| {
                let status = status_from_error(&e);
                error!("{} \"SetupDiOpenDevRegKey\" failed.", status);
                status
            })
    }
}

impl Drop for RegKey {
    fn drop(&mut self) {
        let status = unsafe { RegCloseKey(self.0) };
        if status != ERROR_SUCCESS {
            error!("{} \"RegCloseKey\" failed.", StatusCode::from(status.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use windows::Win32::Devices::Display::{
        DISPLAYCONFIG_2DREGION, DISPLAYCONFIG_DESKTOP_IMAGE_INFO, DISPLAYCONFIG_MODE_INFO_TYPE,
        DISPLAYCONFIG_PIXELFORMAT, DISPLAYCONFIG_SOURCE_MODE, DISPLAYCONFIG_TARGET_MODE,
        DISPLAYCONFIG_VIDEO_SIGNAL_INFO,
    };
    use windows::Win32::Foundation::{BOOL, POINTL};

    #[test]
    fn test_win32_codes_are_unwrapped_from_hresult() {
        let end_of_list = windows::core::Error::from(HRESULT::from_win32(259));
        assert_eq!(status_from_error(&end_of_list), StatusCode::NO_MORE_ITEMS);

        let missing_value = windows::core::Error::from(HRESULT::from_win32(2));
        assert_eq!(
            status_from_error(&missing_value),
            StatusCode::FILE_NOT_FOUND
        );
    }

    #[test]
    fn test_other_hresults_pass_through() {
        // E_FAIL is not in the Win32 facility
        let failure = windows::core::Error::from(HRESULT(0x8000_4005_u32 as i32));
        assert_eq!(
            status_from_error(&failure),
            StatusCode(0x8000_4005_u32 as i32)
        );
    }

    #[test]
    fn test_check_maps_win32_errors() {
        assert_eq!(check(ERROR_SUCCESS), Ok(()));
        assert_eq!(
            check(WIN32_ERROR(122)),
            Err(StatusCode::INSUFFICIENT_BUFFER)
        );
    }

    #[test]
    fn test_scope_flags_are_virtual_mode_aware() {
        assert_eq!(
            scope_flags(QueryScope::Active),
            QDC_ONLY_ACTIVE_PATHS | QDC_VIRTUAL_MODE_AWARE
        );
        assert_eq!(
            scope_flags(QueryScope::All),
            QDC_ALL_PATHS | QDC_VIRTUAL_MODE_AWARE
        );
    }

    #[test]
    fn test_convert_source_mode() {
        let mut mode = DISPLAYCONFIG_MODE_INFO {
            infoType: DISPLAYCONFIG_MODE_INFO_TYPE_SOURCE,
            id: 3,
            adapterId: LUID {
                LowPart: 51234,
                HighPart: 1,
            },
            ..Default::default()
        };
        mode.Anonymous.sourceMode = DISPLAYCONFIG_SOURCE_MODE {
            width: 2560,
            height: 1440,
            pixelFormat: DISPLAYCONFIG_PIXELFORMAT(4),
            position: POINTL { x: -2560, y: 0 },
        };

        let converted = convert_mode(&mode);
        assert_eq!(converted.id, 3);
        assert_eq!(converted.adapter_id, AdapterId::new(1, 51234));
        assert_eq!(
            converted.info,
            ModeInfo::Source(SourceMode {
                width: 2560,
                height: 1440,
                pixel_format: 4,
                position: Point { x: -2560, y: 0 },
            })
        );
    }

    #[test]
    fn test_convert_target_mode() {
        let mut mode = DISPLAYCONFIG_MODE_INFO {
            infoType: DISPLAYCONFIG_MODE_INFO_TYPE_TARGET,
            ..Default::default()
        };
        mode.Anonymous.targetMode = DISPLAYCONFIG_TARGET_MODE {
            targetVideoSignalInfo: DISPLAYCONFIG_VIDEO_SIGNAL_INFO {
                pixelRate: 241_500_000,
                hSyncFreq: DISPLAYCONFIG_RATIONAL {
                    Numerator: 88_790,
                    Denominator: 1,
                },
                vSyncFreq: DISPLAYCONFIG_RATIONAL {
                    Numerator: 59_950,
                    Denominator: 1000,
                },
                activeSize: DISPLAYCONFIG_2DREGION { cx: 2560, cy: 1440 },
                totalSize: DISPLAYCONFIG_2DREGION { cx: 2720, cy: 1481 },
                ..Default::default()
            },
        };

        let ModeInfo::Target(target) = convert_mode(&mode).info else {
            panic!("expected a target mode");
        };
        assert_eq!(target.pixel_rate, 241_500_000);
        assert_eq!(target.h_sync_freq.numerator, 88_790);
        assert_eq!(target.v_sync_freq.denominator, 1000);
        assert_eq!(target.active_size, Region { cx: 2560, cy: 1440 });
        assert_eq!(target.total_size, Region { cx: 2720, cy: 1481 });
    }

    #[test]
    fn test_convert_desktop_image_mode() {
        let mut mode = DISPLAYCONFIG_MODE_INFO {
            infoType: DISPLAYCONFIG_MODE_INFO_TYPE_DESKTOP_IMAGE,
            ..Default::default()
        };
        mode.Anonymous.desktopImageInfo = DISPLAYCONFIG_DESKTOP_IMAGE_INFO {
            PathSourceSize: POINTL { x: 1920, y: 1080 },
            DesktopImageRegion: RECTL {
                left: 1,
                top: 2,
                right: 3,
                bottom: 4,
            },
            DesktopImageClip: RECTL {
                left: 5,
                top: 6,
                right: 7,
                bottom: 8,
            },
        };

        let ModeInfo::DesktopImage(image) = convert_mode(&mode).info else {
            panic!("expected a desktop image mode");
        };
        assert_eq!(image.path_source_size, Point { x: 1920, y: 1080 });
        assert_eq!(
            image.desktop_image_region,
            Rect {
                left: 1,
                top: 2,
                right: 3,
                bottom: 4,
            }
        );
        assert_eq!(image.desktop_image_clip.bottom, 8);
    }

    #[test]
    fn test_convert_unknown_mode() {
        let mode = DISPLAYCONFIG_MODE_INFO {
            infoType: DISPLAYCONFIG_MODE_INFO_TYPE(99),
            ..Default::default()
        };
        assert_eq!(
            convert_mode(&mode).info,
            ModeInfo::Unknown { info_type: 99 }
        );
    }

    #[test]
    fn test_convert_path_reads_mode_indices() {
        let mut path = DISPLAYCONFIG_PATH_INFO::default();
        path.sourceInfo.id = 1;
        path.sourceInfo.Anonymous.modeInfoIdx = (2 << 16) | 5;
        path.targetInfo.id = 4352;
        path.targetInfo.adapterId = LUID {
            LowPart: 51234,
            HighPart: 0,
        };
        path.targetInfo.Anonymous.modeInfoIdx = (7 << 16) | 6;
        path.targetInfo.targetAvailable = BOOL::from(true);
        path.flags = 0x9;

        let converted = convert_path(&path);
        assert_eq!(converted.source.id, 1);
        assert_eq!(converted.source.clone_group_id(), 5);
        assert_eq!(converted.source.source_mode_info_idx(), 2);
        assert_eq!(converted.target.id, 4352);
        assert_eq!(converted.target.adapter_id, AdapterId::new(0, 51234));
        assert_eq!(converted.target.desktop_mode_info_idx(), 6);
        assert_eq!(converted.target.target_mode_info_idx(), 7);
        assert!(converted.target.target_available);
        assert_eq!(converted.flags, 0x9);
    }

    #[test]
    fn test_friendly_name_flag() {
        let mut request = DISPLAYCONFIG_TARGET_DEVICE_NAME::default();
        for (slot, unit) in request
            .monitorFriendlyDeviceName
            .iter_mut()
            .zip("XB271HU".encode_utf16())
        {
            *slot = unit;
        }
        request.edidManufactureId = 0x7204;

        let generated = convert_target_name(&request);
        assert!(!generated.friendly_name_from_edid);
        assert_eq!(generated.friendly_name.to_utf8(), "XB271HU");
        assert_eq!(generated.edid_manufacture_id, 0x7204);

        request.flags.Anonymous.value = FRIENDLY_NAME_FROM_EDID;
        assert!(convert_target_name(&request).friendly_name_from_edid);
    }

    #[test]
    fn test_error_string_names_the_code() {
        let api = Win32DisplayConfig::new();
        let message = api.error_string(StatusCode::INSUFFICIENT_BUFFER);
        let prefix = "[code: ERROR_INSUFFICIENT_BUFFER, message: ";
        assert!(message.starts_with(prefix), "unexpected message {}", message);
    }
}
