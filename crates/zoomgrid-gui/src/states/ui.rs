use std::path::PathBuf;

/// Overall UI state.
pub struct UIState {
    pub base_path: Option<PathBuf>,
    pub overlay_path: Option<PathBuf>,

    /// Text fields, applied on Enter or button press.
    pub size_text: String,
    pub interval_text: String,

    /// Log messages.
    pub log_messages: Vec<String>,
}

impl Default for UIState {
    fn default() -> Self {
        Self {
            base_path: None,
            overlay_path: None,
            size_text: String::new(),
            interval_text: String::from("100"),
            log_messages: Vec::new(),
        }
    }
}

impl UIState {
    pub fn add_log(&mut self, msg: String) {
        self.log_messages.push(msg);
    }
}
