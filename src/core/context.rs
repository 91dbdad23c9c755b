//! Shared context passed to page modules

/// Currently selected item in the UI
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selected {
    #[default]
    None,
    /// An asset, by id
    Asset(String),
}

/// Shared context available to all modules
#[derive(Debug, Default)]
pub struct Context {
    /// Currently selected item
    pub selected: Selected,

    /// Last copied value, mirrored here so modules can reuse it
    pub clipboard: Option<String>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_clipboard(&mut self, content: String) {
        self.clipboard = Some(content);
    }

    pub fn get_clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
