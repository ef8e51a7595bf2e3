use anyhow::Result;
use image::{ImageFormat, RgbaImage};
use std::fs;
use std::path::Path;

use crate::model::icon::IconKind;
use crate::render::draw::CANVAS_SIZE;

/// One line of the hotspot manifest the consuming UI toolkit reads to learn
/// where each cursor's logical tip sits.
#[derive(Debug, Clone)]
pub struct ManifestEntry {
    pub filename: String,
    pub size: u32,
    pub xhot: u32,
    pub yhot: u32,
    pub delay: u32,
}

impl ManifestEntry {
    pub fn for_output(kind: IconKind, filename: &str) -> Self {
        let (xhot, yhot) = kind.hotspot();
        Self {
            filename: filename.to_string(),
            size: CANVAS_SIZE,
            xhot,
            yhot,
            delay: kind.frame_delay_ms(),
        }
    }
}

pub fn write_png(image: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    image.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

pub fn format_manifest_line(entry: &ManifestEntry) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}",
        entry.size, entry.xhot, entry.yhot, entry.filename, entry.delay
    )
}

pub fn write_manifest(path: &Path, entries: &[ManifestEntry]) -> Result<()> {
    use std::io::Write;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut file = fs::File::create(path)?;
    writeln!(file, "#size\txhot\tyhot\tPath to PNG image\tdelay")?;

    for entry in entries {
        writeln!(file, "{}", format_manifest_line(entry))?;
    }
    Ok(())
}
