//! Display topology data model
//!
//! These records mirror the OS display-configuration structures field for
//! field. Paths and modes are correlated through the index fields embedded
//! in each path, never by reference.

use crate::wide::WideString;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which paths a topology query returns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryScope {
    /// Only paths that are currently active
    Active,
    /// Every possible path, including inactive and duplicate entries
    All,
}

impl QueryScope {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryScope::Active => "ACTIVE",
            QueryScope::All => "ALL",
        }
    }
}

/// Locally unique adapter identifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct AdapterId {
    pub high_part: i32,
    pub low_part: u32,
}

impl AdapterId {
    pub fn new(high_part: i32, low_part: u32) -> Self {
        Self {
            high_part,
            low_part,
        }
    }
}

/// A numerator/denominator pair
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Region {
    pub cx: u32,
    pub cy: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

/// Source half of a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathSourceInfo {
    pub adapter_id: AdapterId,
    pub id: u32,
    /// Raw mode-info union; see the accessor methods for the packed form
    pub mode_info_idx: u32,
    pub status_flags: u32,
}

impl PathSourceInfo {
    pub fn clone_group_id(&self) -> u32 {
        self.mode_info_idx & 0xFFFF
    }

    pub fn source_mode_info_idx(&self) -> u32 {
        self.mode_info_idx >> 16
    }
}

/// Target half of a path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PathTargetInfo {
    pub adapter_id: AdapterId,
    pub id: u32,
    /// Raw mode-info union; see the accessor methods for the packed form
    pub mode_info_idx: u32,
    pub output_technology: u32,
    pub rotation: u32,
    pub scaling: u32,
    pub refresh_rate: Rational,
    pub scan_line_ordering: u32,
    pub target_available: bool,
    pub status_flags: u32,
}

impl PathTargetInfo {
    pub fn desktop_mode_info_idx(&self) -> u32 {
        self.mode_info_idx & 0xFFFF
    }

    pub fn target_mode_info_idx(&self) -> u32 {
        self.mode_info_idx >> 16
    }
}

/// One source-to-target connection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DisplayPath {
    pub source: PathSourceInfo,
    pub target: PathTargetInfo,
    pub flags: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SourceMode {
    pub width: u32,
    pub height: u32,
    pub pixel_format: u32,
    pub position: Point,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TargetMode {
    pub pixel_rate: u64,
    pub h_sync_freq: Rational,
    pub v_sync_freq: Rational,
    pub active_size: Region,
    pub total_size: Region,
    pub video_standard: u32,
    pub scan_line_ordering: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DesktopImageInfo {
    pub path_source_size: Point,
    pub desktop_image_region: Rect,
    pub desktop_image_clip: Rect,
}

/// Interpretation of a mode record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ModeInfo {
    Source(SourceMode),
    Target(TargetMode),
    DesktopImage(DesktopImageInfo),
    /// A discriminant this layer does not know about
    Unknown { info_type: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisplayMode {
    pub id: u32,
    pub adapter_id: AdapterId,
    pub info: ModeInfo,
}

/// Buffer sizes the OS asks for before a topology query
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BufferSizes {
    pub paths: u32,
    pub modes: u32,
}

/// Paths and modes exactly as one OS query returned them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTopology {
    pub paths: Vec<DisplayPath>,
    pub modes: Vec<DisplayMode>,
}

/// A topology snapshot taken at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Topology {
    pub scope: QueryScope,
    pub paths: Vec<DisplayPath>,
    pub modes: Vec<DisplayMode>,
    pub captured_at: DateTime<Utc>,
}

impl Topology {
    /// JSON rendering of the snapshot, for tooling that extends it
    pub fn to_json_value(&self) -> crate::Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Target-scoped device-info reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TargetDeviceName {
    pub friendly_name: WideString,
    pub friendly_name_from_edid: bool,
    pub monitor_device_path: WideString,
    pub output_technology: u32,
    pub edid_manufacture_id: u16,
    pub edid_product_code_id: u16,
    pub connector_instance: u32,
}

/// Source-scoped device-info reply
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceDeviceName {
    pub gdi_device_name: WideString,
}
