pub mod config;
pub mod engine;
pub mod screen;

pub use config::{Config, ConfigError};
pub use engine::{compute_bmi, BmiEngine, BmiResult, Category, HeightUnit, Outcome, WeightUnit};

#[cfg(target_arch = "wasm32")]
pub mod wasm;
