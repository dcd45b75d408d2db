pub mod sky;

pub use sky::*;
