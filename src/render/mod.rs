pub mod draw;
pub mod horn;
pub mod icons;
pub mod star;
