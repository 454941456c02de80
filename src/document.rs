use std::path::{Path, PathBuf};

const APP_TITLE: &str = "Markdown Editor";

/// Shown when the editor starts without a file.
pub const WELCOME: &str = "# Добро пожаловать в Markdown Editor\n\nНачните редактирование...";

/// The Markdown source being edited and the file it belongs to, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkdownDocument {
    content: String,
    path: Option<PathBuf>,
}

impl MarkdownDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            path: None,
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replace the content. Returns `true` when the text actually changed,
    /// which is the host's cue to re-render.
    pub fn set_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if content == self.content {
            return false;
        }
        self.content = content;
        true
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn set_path(&mut self, path: impl Into<PathBuf>) {
        self.path = Some(path.into());
    }

    /// Window title, with the file name once the document has a path.
    pub fn title(&self) -> String {
        match self.path.as_deref().and_then(Path::file_name) {
            Some(name) => format!("{} - {}", APP_TITLE, name.to_string_lossy()),
            None => APP_TITLE.to_string(),
        }
    }
}
