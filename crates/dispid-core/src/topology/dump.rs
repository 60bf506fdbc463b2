//! Diagnostic text dump of a topology snapshot
//!
//! Output is for logs only and is not meant to be parsed.

use crate::model::{DisplayMode, DisplayPath, ModeInfo, Topology};
use std::fmt::{self, Write};

const SEPARATOR: &str = "----------------------------------------";

/// Render a whole topology snapshot
pub fn dump_topology(topology: &Topology) -> String {
    TopologyDump(topology).to_string()
}

/// Render identity input bytes as `[0xAB 0xCD ...]`
pub fn dump_identity_bytes(data: &[u8]) -> String {
    if data.is_empty() {
        return String::new();
    }

    let mut output = String::with_capacity(data.len() * 5 + 2);
    output.push('[');
    for (i, byte) in data.iter().enumerate() {
        if i > 0 {
            output.push(' ');
        }
        let _ = write!(output, "0x{:02X}", byte);
    }
    output.push(']');
    output
}

/// `Display` adapter for a topology snapshot
pub struct TopologyDump<'a>(pub &'a Topology);

impl fmt::Display for TopologyDump<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let topology = self.0;

        writeln!(f)?;
        write!(f, "Got {} path(s):", topology.paths.len())?;
        for (i, path) in topology.paths.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}[index: {}]", SEPARATOR, i)?;
            write_path(f, path)?;
        }

        if !topology.paths.is_empty() {
            writeln!(f)?;
            writeln!(f)?;
        }

        write!(f, "Got {} mode(s):", topology.modes.len())?;
        for (i, mode) in topology.modes.iter().enumerate() {
            writeln!(f)?;
            writeln!(f, "{}[index: {}]", SEPARATOR, i)?;
            write_mode(f, mode)?;
        }

        Ok(())
    }
}

fn write_path(f: &mut fmt::Formatter<'_>, path: &DisplayPath) -> fmt::Result {
    let source = &path.source;
    let target = &path.target;

    writeln!(f, "sourceInfo:")?;
    writeln!(
        f,
        "    adapterId: [{}, {}]",
        source.adapter_id.high_part, source.adapter_id.low_part
    )?;
    writeln!(f, "    id: {}", source.id)?;
    writeln!(f, "        cloneGroupId: {}", source.clone_group_id())?;
    writeln!(f, "        sourceModeInfoIdx: {}", source.source_mode_info_idx())?;
    writeln!(f, "        modeInfoIdx: {}", source.mode_info_idx)?;
    writeln!(f, "    statusFlags: 0x{:08X}", source.status_flags)?;
    writeln!(f, "targetInfo:")?;
    writeln!(
        f,
        "    adapterId: [{}, {}]",
        target.adapter_id.high_part, target.adapter_id.low_part
    )?;
    writeln!(f, "    id: {}", target.id)?;
    writeln!(f, "        desktopModeInfoIdx: {}", target.desktop_mode_info_idx())?;
    writeln!(f, "        targetModeInfoIdx: {}", target.target_mode_info_idx())?;
    writeln!(f, "        modeInfoIdx: {}", target.mode_info_idx)?;
    writeln!(f, "    outputTechnology: 0x{:08X}", target.output_technology)?;
    writeln!(f, "    rotation: 0x{:08X}", target.rotation)?;
    writeln!(f, "    scaling: 0x{:08X}", target.scaling)?;
    writeln!(
        f,
        "    refreshRate: {}/{}",
        target.refresh_rate.numerator, target.refresh_rate.denominator
    )?;
    writeln!(f, "    scanLineOrdering: 0x{:08X}", target.scan_line_ordering)?;
    writeln!(
        f,
        "    targetAvailable: 0x{:08X}",
        u32::from(target.target_available)
    )?;
    writeln!(f, "    statusFlags: 0x{:08X}", target.status_flags)?;
    write!(f, "flags: 0x{:08X}", path.flags)
}

fn write_mode(f: &mut fmt::Formatter<'_>, mode: &DisplayMode) -> fmt::Result {
    match &mode.info {
        ModeInfo::Source(source) => {
            writeln!(f, "width: {}", source.width)?;
            writeln!(f, "height: {}", source.height)?;
            writeln!(f, "pixelFormat: {}", source.pixel_format)?;
            write!(f, "position: [{}, {}]", source.position.x, source.position.y)
        }
        ModeInfo::Target(target) => {
            writeln!(f, "pixelRate: {}", target.pixel_rate)?;
            writeln!(
                f,
                "hSyncFreq: {}/{}",
                target.h_sync_freq.numerator, target.h_sync_freq.denominator
            )?;
            writeln!(
                f,
                "vSyncFreq: {}/{}",
                target.v_sync_freq.numerator, target.v_sync_freq.denominator
            )?;
            writeln!(
                f,
                "activeSize: [{}, {}]",
                target.active_size.cx, target.active_size.cy
            )?;
            writeln!(
                f,
                "totalSize: [{}, {}]",
                target.total_size.cx, target.total_size.cy
            )?;
            writeln!(f, "videoStandard: {}", target.video_standard)?;
            write!(f, "scanLineOrdering: {}", target.scan_line_ordering)
        }
        ModeInfo::DesktopImage(image) => {
            writeln!(
                f,
                "PathSourceSize: [{}, {}]",
                image.path_source_size.x, image.path_source_size.y
            )?;
            let region = &image.desktop_image_region;
            writeln!(
                f,
                "DesktopImageRegion: [{}, {}, {}, {}]",
                region.bottom, region.left, region.right, region.top
            )?;
            let clip = &image.desktop_image_clip;
            write!(
                f,
                "DesktopImageClip: [{}, {}, {}, {}]",
                clip.bottom, clip.left, clip.right, clip.top
            )
        }
        ModeInfo::Unknown { info_type } => {
            write!(f, "unknown mode info type {}", info_type)
        }
    }
}
