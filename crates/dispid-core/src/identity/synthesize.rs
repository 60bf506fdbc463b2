//! Deterministic identity strings from raw hardware bytes

use uuid::Uuid;

/// Name-based (SHA-1, version 5) UUID over `data` in the nil namespace,
/// rendered as `{xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx}`
///
/// The nil namespace means there is no per-installation salt: the same
/// bytes give the same identity on every machine.
pub fn synthesize(data: &[u8]) -> String {
    let uuid = Uuid::new_v5(&Uuid::nil(), data);
    format!("{{{}}}", uuid.hyphenated())
}
