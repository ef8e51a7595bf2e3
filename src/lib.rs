// Library exports for mlp-cursorgen

pub mod config;
pub mod model;
pub mod pipeline;
pub mod render;

// Re-export commonly used types
pub use config::GenConfig;
pub use model::icon::IconKind;
pub use model::palette::Palette;
