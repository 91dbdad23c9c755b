pub mod action;
pub mod context;
pub mod module;

pub use action::{Action, NavigateTarget, NotifyLevel};
pub use context::{Context, Selected};
pub use module::Module;
