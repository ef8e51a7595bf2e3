// Pack driver: renders every icon kind in a fixed order and persists the
// results. Each icon gets its own canvas; nothing is shared between kinds, so
// a rerun with unchanged parameters reproduces the pack byte for byte.

use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

use crate::config::GenConfig;
use crate::model::icon::IconKind;
use crate::render::icons;

use super::png_writer::{self, ManifestEntry};

pub const MANIFEST_NAME: &str = "mlp_cursors.conf";

/// Render and write the whole cursor pack into `config.output_dir`, creating
/// it if absent. Returns the written paths in generation order, the manifest
/// last. The first I/O failure aborts the run.
pub fn generate_all(config: &GenConfig) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();
    let mut entries = Vec::new();

    for kind in IconKind::ALL {
        let frames = icons::render(kind, &config.palette);
        let groups = kind.outputs();
        debug_assert_eq!(frames.len(), groups.len());

        for (frame, group) in frames.iter().zip(groups) {
            for &name in *group {
                let path = config.output_dir.join(name);
                png_writer::write_png(frame, &path)
                    .with_context(|| format!("writing {}", path.display()))?;
                info!("Saved {}", path.display());

                entries.push(ManifestEntry::for_output(kind, name));
                written.push(path);
            }
        }
    }

    if config.write_manifest {
        let path = config.output_dir.join(MANIFEST_NAME);
        png_writer::write_manifest(&path, &entries)
            .with_context(|| format!("writing {}", path.display()))?;
        info!("Saved {}", path.display());
        written.push(path);
    }

    Ok(written)
}
