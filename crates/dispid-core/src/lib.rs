// # dispid-core
//
// Stable identities for physical displays, plus a topology query protocol
// over the OS display configuration.
//
// ## Architecture Overview
//
// - **DisplayConfigApi**: Trait for the OS topology and device-info calls
// - **DeviceEnumerator**: Trait for monitor device-interface enumeration
// - **topology**: Buffer-size negotiation for topology queries
// - **properties**: Per-path device path, friendly name and GDI name
// - **identity**: Hardware data collection and identity synthesis
// - **DisplayDeviceLayer**: Facade bundling the above for callers
//
// ## Design Principles
//
// 1. **Platform seam**: Every OS call goes through a trait, so all decision
//    logic builds and tests on any host
// 2. **Sentinel results**: Expected OS failures are logged and turned into
//    empty or absent values, never propagated
// 3. **Scoped handles**: Enumeration lists and registry keys are released
//    on drop
// 4. **No state**: Every call re-derives its answer from the current OS
//    snapshot

pub mod config;
pub mod error;
pub mod identity;
pub mod layer;
pub mod model;
pub mod properties;
pub mod status;
pub mod topology;
pub mod traits;
pub mod wide;

// Re-export core types for convenience
pub use config::{DispIdConfig, EnumerationConfig, TopologyConfig};
pub use error::{Error, Result};
pub use identity::{DeviceIdentity, IdentitySource, synthesize};
pub use layer::DisplayDeviceLayer;
pub use model::{
    AdapterId, BufferSizes, DisplayMode, DisplayPath, ModeInfo, QueryScope, RawTopology,
    SourceDeviceName, TargetDeviceName, Topology,
};
pub use status::StatusCode;
pub use topology::{dump_topology, query_topology};
pub use traits::{DeviceEnumerator, DisplayConfigApi, MonitorInterfaceList};
pub use wide::WideString;
