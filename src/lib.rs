pub mod configuration;
pub mod domain;
pub mod repository;
pub mod session_state;
pub mod telemetry;
pub mod utils;
