//! Test doubles and common utilities for contract tests
//!
//! These doubles replay scripted OS behavior so the negotiation, fallback
//! and handle-lifetime rules can be verified without a real display stack.

#![allow(dead_code)]

use dispid_core::model::{
    AdapterId, BufferSizes, DisplayMode, DisplayPath, ModeInfo, PathSourceInfo, PathTargetInfo,
    QueryScope, RawTopology, SourceDeviceName, SourceMode, TargetDeviceName,
};
use dispid_core::traits::{DeviceEnumerator, DisplayConfigApi, MonitorInterfaceList};
use dispid_core::{StatusCode, WideString};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const MONITOR_PATH: &str =
    r"\\?\DISPLAY#ACI27EC#5&4fd2de4&5&UID4352#{e6f07b5f-ee97-4a90-b076-33f57bf4eaa7}";
pub const OTHER_MONITOR_PATH: &str =
    r"\\?\DISPLAY#DEL40F9#5&1a2b3c4&0&UID4353#{e6f07b5f-ee97-4a90-b076-33f57bf4eaa7}";
pub const INSTANCE_ID: &str = r"DISPLAY\ACI27EC\5&4FD2DE4&5&UID4352";
pub const STABLE_INSTANCE_ID: &str = r"DISPLAY\ACI27EC\5&5&UID4352";

/// First bytes of a real EDID block
pub const EDID: [u8; 16] = [
    0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x04, 0x69, 0xEC, 0x27, 0x01, 0x01, 0x01, 0x01,
];

/// Route trace-level logs to the test writer for the current thread
///
/// The returned guard must stay alive for the duration of the test.
pub fn trace_logs() -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

/// Build a path whose source and target use the given ids
pub fn path(source_id: u32, target_id: u32) -> DisplayPath {
    let adapter_id = AdapterId::new(0, 51234);
    DisplayPath {
        source: PathSourceInfo {
            adapter_id,
            id: source_id,
            ..Default::default()
        },
        target: PathTargetInfo {
            adapter_id,
            id: target_id,
            target_available: true,
            ..Default::default()
        },
        flags: 0x1,
    }
}

/// A topology of `count` paths, each with one source mode
pub fn raw_topology(count: u32) -> RawTopology {
    RawTopology {
        paths: (0..count).map(|i| path(i, 4352 + i)).collect(),
        modes: (0..count)
            .map(|i| DisplayMode {
                id: i,
                adapter_id: AdapterId::new(0, 51234),
                info: ModeInfo::Source(SourceMode {
                    width: 1920,
                    height: 1080,
                    ..Default::default()
                }),
            })
            .collect(),
    }
}

pub fn target_name(device_path: &str) -> TargetDeviceName {
    TargetDeviceName {
        friendly_name: WideString::from("ACER XB271HU"),
        friendly_name_from_edid: true,
        monitor_device_path: WideString::from(device_path),
        ..Default::default()
    }
}

/// A DisplayConfigApi that replays scripted query outcomes
pub struct ScriptedDisplayConfig {
    /// Outcomes of successive query_display_config() calls
    query_script: Mutex<VecDeque<Result<RawTopology, StatusCode>>>,
    /// Outcome of buffer_sizes() (sizes are echoed back to the query)
    sizes: Result<BufferSizes, StatusCode>,
    /// Device-info replies keyed by target id
    targets: HashMap<u32, Result<TargetDeviceName, StatusCode>>,
    /// Device-info replies keyed by source id
    sources: HashMap<u32, Result<SourceDeviceName, StatusCode>>,
    /// Call counter for buffer_sizes()
    size_call_count: Arc<AtomicUsize>,
    /// Call counter for query_display_config()
    query_call_count: Arc<AtomicUsize>,
    /// Scopes passed to query_display_config()
    scopes: Arc<Mutex<Vec<QueryScope>>>,
}

impl ScriptedDisplayConfig {
    pub fn new() -> Self {
        Self {
            query_script: Mutex::new(VecDeque::new()),
            sizes: Ok(BufferSizes { paths: 1, modes: 1 }),
            targets: HashMap::new(),
            sources: HashMap::new(),
            size_call_count: Arc::new(AtomicUsize::new(0)),
            query_call_count: Arc::new(AtomicUsize::new(0)),
            scopes: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Append one outcome for the next query_display_config() call
    pub fn then_query(self, outcome: Result<RawTopology, StatusCode>) -> Self {
        self.query_script.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_sizes(mut self, sizes: Result<BufferSizes, StatusCode>) -> Self {
        self.sizes = sizes;
        self
    }

    pub fn with_target(
        mut self,
        target_id: u32,
        reply: Result<TargetDeviceName, StatusCode>,
    ) -> Self {
        self.targets.insert(target_id, reply);
        self
    }

    pub fn with_source(
        mut self,
        source_id: u32,
        reply: Result<SourceDeviceName, StatusCode>,
    ) -> Self {
        self.sources.insert(source_id, reply);
        self
    }

    pub fn size_call_count(&self) -> usize {
        self.size_call_count.load(Ordering::SeqCst)
    }

    pub fn query_call_count(&self) -> usize {
        self.query_call_count.load(Ordering::SeqCst)
    }

    pub fn scopes(&self) -> Vec<QueryScope> {
        self.scopes.lock().unwrap().clone()
    }
}

impl DisplayConfigApi for ScriptedDisplayConfig {
    fn buffer_sizes(&self, _scope: QueryScope) -> Result<BufferSizes, StatusCode> {
        self.size_call_count.fetch_add(1, Ordering::SeqCst);
        self.sizes
    }

    fn query_display_config(
        &self,
        scope: QueryScope,
        _sizes: BufferSizes,
    ) -> Result<RawTopology, StatusCode> {
        self.query_call_count.fetch_add(1, Ordering::SeqCst);
        self.scopes.lock().unwrap().push(scope);
        self.query_script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(StatusCode::GEN_FAILURE))
    }

    fn target_device_name(&self, path: &DisplayPath) -> Result<TargetDeviceName, StatusCode> {
        self.targets
            .get(&path.target.id)
            .cloned()
            .unwrap_or(Err(StatusCode::INVALID_PARAMETER))
    }

    fn source_device_name(&self, path: &DisplayPath) -> Result<SourceDeviceName, StatusCode> {
        self.sources
            .get(&path.source.id)
            .cloned()
            .unwrap_or(Err(StatusCode::INVALID_PARAMETER))
    }
}

/// A scripted device record
#[derive(Debug, Clone)]
pub struct FakeRecord {
    pub instance_id: Result<WideString, StatusCode>,
    pub edid: Result<Vec<u8>, StatusCode>,
}

impl FakeRecord {
    pub fn new(instance_id: &str, edid: &[u8]) -> Self {
        Self {
            instance_id: Ok(WideString::from(instance_id)),
            edid: Ok(edid.to_vec()),
        }
    }
}

/// A scripted interface list entry
#[derive(Debug, Clone)]
pub enum FakeInterface {
    /// Enumerates and resolves to this path and record
    Device(WideString, FakeRecord),
    /// Enumeration of this index fails
    EnumFails(StatusCode),
    /// Enumerates but resolving the detail fails
    DetailFails(StatusCode),
}

impl FakeInterface {
    pub fn device(device_path: &str, record: FakeRecord) -> Self {
        Self::Device(WideString::from(device_path), record)
    }
}

/// A DeviceEnumerator over scripted interfaces that counts handle lifetimes
pub struct FakeDeviceEnumerator {
    interfaces: Arc<Vec<FakeInterface>>,
    open_error: Option<StatusCode>,
    /// Reports more items forever instead of ending after `interfaces`
    endless: bool,
    opened: Arc<AtomicUsize>,
    released: Arc<AtomicUsize>,
    /// Instance ids fetched, in order
    instance_id_fetches: Arc<Mutex<Vec<WideString>>>,
    detail_call_count: Arc<AtomicUsize>,
}

impl FakeDeviceEnumerator {
    pub fn new(interfaces: Vec<FakeInterface>) -> Self {
        Self {
            interfaces: Arc::new(interfaces),
            open_error: None,
            endless: false,
            opened: Arc::new(AtomicUsize::new(0)),
            released: Arc::new(AtomicUsize::new(0)),
            instance_id_fetches: Arc::new(Mutex::new(Vec::new())),
            detail_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// An enumerator whose list cannot be opened
    pub fn failing(code: StatusCode) -> Self {
        Self {
            open_error: Some(code),
            ..Self::new(Vec::new())
        }
    }

    /// An enumerator whose every entry fails and which never ends
    pub fn endless_failures(code: StatusCode) -> Self {
        Self {
            endless: true,
            ..Self::new(vec![FakeInterface::EnumFails(code)])
        }
    }

    pub fn opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub fn released(&self) -> usize {
        self.released.load(Ordering::SeqCst)
    }

    pub fn detail_call_count(&self) -> usize {
        self.detail_call_count.load(Ordering::SeqCst)
    }

    pub fn instance_id_fetches(&self) -> Vec<WideString> {
        self.instance_id_fetches.lock().unwrap().clone()
    }
}

impl DeviceEnumerator for FakeDeviceEnumerator {
    type List = FakeInterfaceList;

    fn monitor_interfaces(&self) -> Result<FakeInterfaceList, StatusCode> {
        if let Some(code) = self.open_error {
            return Err(code);
        }
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(FakeInterfaceList {
            interfaces: Arc::clone(&self.interfaces),
            endless: self.endless,
            released: Arc::clone(&self.released),
            instance_id_fetches: Arc::clone(&self.instance_id_fetches),
            detail_call_count: Arc::clone(&self.detail_call_count),
        })
    }
}

/// Open list handed out by FakeDeviceEnumerator
pub struct FakeInterfaceList {
    interfaces: Arc<Vec<FakeInterface>>,
    endless: bool,
    released: Arc<AtomicUsize>,
    instance_id_fetches: Arc<Mutex<Vec<WideString>>>,
    detail_call_count: Arc<AtomicUsize>,
}

impl MonitorInterfaceList for FakeInterfaceList {
    type Interface = FakeInterface;
    type Record = FakeRecord;

    fn interface(&self, index: u32) -> Result<Option<FakeInterface>, StatusCode> {
        let entry = if self.endless {
            self.interfaces.first()
        } else {
            self.interfaces.get(index as usize)
        };
        match entry {
            None => Ok(None),
            Some(FakeInterface::EnumFails(code)) => Err(*code),
            Some(entry) => Ok(Some(entry.clone())),
        }
    }

    fn interface_detail(
        &self,
        interface: &FakeInterface,
    ) -> Result<(WideString, FakeRecord), StatusCode> {
        self.detail_call_count.fetch_add(1, Ordering::SeqCst);
        match interface {
            FakeInterface::Device(path, record) => Ok((path.clone(), record.clone())),
            FakeInterface::EnumFails(code) | FakeInterface::DetailFails(code) => Err(*code),
        }
    }

    fn instance_id(&self, record: &FakeRecord) -> Result<WideString, StatusCode> {
        if let Ok(id) = &record.instance_id {
            self.instance_id_fetches.lock().unwrap().push(id.clone());
        }
        record.instance_id.clone()
    }

    fn edid(&self, record: &FakeRecord) -> Result<Vec<u8>, StatusCode> {
        record.edid.clone()
    }
}

impl Drop for FakeInterfaceList {
    fn drop(&mut self) {
        self.released.fetch_add(1, Ordering::SeqCst);
    }
}

/// Expected identity for EDID bytes followed by a stable instance id
pub fn expected_hardware_id(edid: &[u8], stable_instance_id: &str) -> String {
    let mut data = edid.to_vec();
    data.extend(WideString::from(stable_instance_id).to_le_bytes());
    dispid_core::synthesize(&data)
}

/// Expected identity for the device-path fallback
pub fn expected_path_id(device_path: &str) -> String {
    dispid_core::synthesize(&WideString::from(device_path).to_le_bytes())
}

/// Identity strings look like `{8-4-4-4-12}` lowercase hex
pub fn is_braced_uuid(value: &str) -> bool {
    let Some(inner) = value.strip_prefix('{').and_then(|v| v.strip_suffix('}')) else {
        return false;
    };
    let groups: Vec<&str> = inner.split('-').collect();
    groups.len() == 5
        && groups.iter().zip([8, 4, 4, 4, 12]).all(|(group, len)| {
            group.len() == len
                && group
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
}
