//! Instance id handling
//!
//! Monitor instance ids look like `DISPLAY\ACI27EC\5&4fd2de4&5&UID4352`.
//! The segment between the first and the second `&` is a counter the OS
//! rotates on driver reinstalls, so it must not reach the identity hash.

use crate::wide::WideString;

/// Instance id with the unstable segment removed
///
/// Keeps everything before the first `&` and everything from the second
/// `&` onward. Returns `None` when the id has fewer than two `&`.
pub fn stable_instance_id(instance_id: &WideString) -> Option<WideString> {
    let first = instance_id.find_from('&', 0)?;
    let second = instance_id.find_from('&', first + 1)?;

    let units = instance_id.as_units();
    let mut stable = Vec::with_capacity(units.len() - (second - first));
    stable.extend_from_slice(&units[..first]);
    stable.extend_from_slice(&units[second..]);
    Some(WideString::from(stable))
}
