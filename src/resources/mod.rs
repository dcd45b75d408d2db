pub mod cli;
pub mod periodic_loop;
pub mod sky_clock;
pub mod sky_settings;
pub mod time_rate;

pub use cli::*;
pub use periodic_loop::*;
pub use sky_clock::*;
pub use sky_settings::*;
pub use time_rate::*;
