pub mod config;
pub mod palette;

pub use config::{AppConfig, GeneticConfig, CONFIG_ENV};
pub use palette::{parse_color, Palette, Role, PALETTE_SIZE};
