pub mod assets;
pub mod metrics;
