pub mod icon;
pub mod palette;
