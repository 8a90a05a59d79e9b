//! Chromatune - palette search for readable, harmonious interfaces
//!
//! Given a primary brand color, find five role colors
//! `[accent, background, surface, buttonText, mainText]` that score well on
//! text contrast, UI contrast, harmony with the primary, background quality
//! and perceptual separation. Also orders arbitrary color sets into
//! even-stepped sequences.
//!
//! # Quick Start
//!
//! ```
//! use chromatune::models::parse_color;
//! use chromatune::search::{hill_climbing, HillClimbingOptions};
//! use chromatune::seed::{harmony_palette, Harmony};
//!
//! let primary = parse_color("#1e88e5").unwrap();
//! let start = harmony_palette(&primary, Harmony::Complementary);
//! let options = HillClimbingOptions::new().max_iterations(20);
//!
//! let result = hill_climbing(&primary, start.colors(), &options).unwrap();
//! assert!(result.best_fitness >= chromatune::fitness::evaluate(&primary, &start));
//! ```
//!
//! Palette fitness is maximized and path fitness is minimized; see
//! [`search`] for the optimizers and [`fitness`] for the scoring terms.

pub mod accessibility;
pub mod error;
pub mod fitness;
pub mod models;
pub mod search;
pub mod seed;

pub use color_model::Color;
pub use error::{ConfigError, OptimizeError, ParseOptionError};
pub use models::{Palette, Role};
