//! OS status codes and their diagnostic rendering
//!
//! Every failed OS call is logged through [`StatusCode`]'s `Display`
//! implementation, which renders `[code: NAME, message: text]`.

use serde::Serialize;
use std::fmt;

/// A Win32 status code as returned by the display and device APIs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StatusCode(pub i32);

impl StatusCode {
    pub const SUCCESS: Self = Self(0);
    pub const FILE_NOT_FOUND: Self = Self(2);
    pub const ACCESS_DENIED: Self = Self(5);
    pub const GEN_FAILURE: Self = Self(31);
    pub const NOT_SUPPORTED: Self = Self(50);
    pub const INVALID_PARAMETER: Self = Self(87);
    pub const INSUFFICIENT_BUFFER: Self = Self(122);
    pub const NO_MORE_ITEMS: Self = Self(259);

    /// Symbolic name for the codes the display layer expects to see
    pub fn name(self) -> Option<&'static str> {
        match self {
            Self::SUCCESS => Some("ERROR_SUCCESS"),
            Self::FILE_NOT_FOUND => Some("ERROR_FILE_NOT_FOUND"),
            Self::ACCESS_DENIED => Some("ERROR_ACCESS_DENIED"),
            Self::GEN_FAILURE => Some("ERROR_GEN_FAILURE"),
            Self::NOT_SUPPORTED => Some("ERROR_NOT_SUPPORTED"),
            Self::INVALID_PARAMETER => Some("ERROR_INVALID_PARAMETER"),
            Self::INSUFFICIENT_BUFFER => Some("ERROR_INSUFFICIENT_BUFFER"),
            Self::NO_MORE_ITEMS => Some("ERROR_NO_MORE_ITEMS"),
            _ => None,
        }
    }

    /// Built-in message text, used when the OS cannot provide one
    pub fn description(self) -> &'static str {
        match self {
            Self::SUCCESS => "The operation completed successfully.",
            Self::FILE_NOT_FOUND => "The system cannot find the file specified.",
            Self::ACCESS_DENIED => "Access is denied.",
            Self::GEN_FAILURE => "A device attached to the system is not functioning.",
            Self::NOT_SUPPORTED => "The request is not supported.",
            Self::INVALID_PARAMETER => "The parameter is incorrect.",
            Self::INSUFFICIENT_BUFFER => {
                "The data area passed to a system call is too small."
            }
            Self::NO_MORE_ITEMS => "No more data is available.",
            _ => "Unknown error.",
        }
    }

    pub fn is_success(self) -> bool {
        self == Self::SUCCESS
    }

    /// Render with a caller-supplied message instead of the built-in one
    pub fn with_message(self, message: &str) -> String {
        match self.name() {
            Some(name) => format!("[code: {}, message: {}]", name, message),
            None => format!("[code: {}, message: {}]", self.0, message),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.with_message(self.description()))
    }
}

impl From<u32> for StatusCode {
    fn from(code: u32) -> Self {
        Self(code as i32)
    }
}
