pub mod app;
pub mod config;
pub mod logging;
pub mod state;
pub mod views;

pub use app::{FlowOptions, build_registry, run_form};
pub use config::{AppConfig, ConfigOverrides};
