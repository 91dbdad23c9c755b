pub mod assets;
pub mod dashboard;
pub mod export;
