// # Display Configuration Trait
//
// The raw OS display-configuration calls, one method per call. No retrying,
// no fallback and no logging happen here; the negotiator and the resolver
// own those decisions.
//
// ## Implementations
//
// - Windows: `dispid-win32` crate (`Win32DisplayConfig`)
// - Tests: scripted doubles in `dispid-core/tests/common`

use crate::model::{
    BufferSizes, DisplayPath, QueryScope, RawTopology, SourceDeviceName, TargetDeviceName,
};
use crate::status::StatusCode;

/// Direct access to the OS display-configuration subsystem
///
/// Every method is a single blocking OS call. Implementations report the
/// OS status unchanged so callers can tell the buffer-size race
/// ([`StatusCode::INSUFFICIENT_BUFFER`]) apart from real failures.
pub trait DisplayConfigApi {
    /// Ask how many path and mode records a query of `scope` needs
    fn buffer_sizes(&self, scope: QueryScope) -> Result<BufferSizes, StatusCode>;

    /// Run the topology query with buffers of `sizes`
    ///
    /// Returns at most `sizes` records, truncated to what the OS filled in.
    /// If the display state grew since [`buffer_sizes`](Self::buffer_sizes),
    /// this fails with [`StatusCode::INSUFFICIENT_BUFFER`].
    fn query_display_config(
        &self,
        scope: QueryScope,
        sizes: BufferSizes,
    ) -> Result<RawTopology, StatusCode>;

    /// Device-info request scoped to the path's target adapter and id
    fn target_device_name(&self, path: &DisplayPath) -> Result<TargetDeviceName, StatusCode>;

    /// Device-info request scoped to the path's source adapter and id
    fn source_device_name(&self, path: &DisplayPath) -> Result<SourceDeviceName, StatusCode>;

    /// Human-readable rendering of a status code for logs
    fn error_string(&self, code: StatusCode) -> String {
        code.to_string()
    }
}

impl<T: DisplayConfigApi + ?Sized> DisplayConfigApi for &T {
    fn buffer_sizes(&self, scope: QueryScope) -> Result<BufferSizes, StatusCode> {
        (**self).buffer_sizes(scope)
    }

    fn query_display_config(
        &self,
        scope: QueryScope,
        sizes: BufferSizes,
    ) -> Result<RawTopology, StatusCode> {
        (**self).query_display_config(scope, sizes)
    }

    fn target_device_name(&self, path: &DisplayPath) -> Result<TargetDeviceName, StatusCode> {
        (**self).target_device_name(path)
    }

    fn source_device_name(&self, path: &DisplayPath) -> Result<SourceDeviceName, StatusCode> {
        (**self).source_device_name(path)
    }

    fn error_string(&self, code: StatusCode) -> String {
        (**self).error_string(code)
    }
}
