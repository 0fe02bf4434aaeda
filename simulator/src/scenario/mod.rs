pub mod config;
pub mod demo;

pub use config::ScenarioConfig;
pub use demo::build_demo_scenario;
