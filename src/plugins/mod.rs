pub mod sky;
pub mod sky_tint;
pub mod debug_ui;
