use crate::model::palette::Palette;
use std::path::PathBuf;

#[derive(Clone, Debug)]
pub struct GenConfig {
    pub output_dir: PathBuf,
    pub palette: Palette,
    pub write_manifest: bool,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("assets/UI/Cursors/MLP"),
            palette: Palette::default(),
            write_manifest: true,
        }
    }
}
