pub mod generator;
pub mod png_writer;
