pub mod config;
pub mod error;
pub mod export;
pub mod orc;
pub mod telemetry;
