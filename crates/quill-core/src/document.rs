//! Document identity.
//!
//! The text widget's buffer is the authoritative content; `Document` only
//! tracks where that content lives on disk and what the window should be
//! called. A document with no path is "untitled" and must go through a
//! save-as prompt before it can be written.

use std::path::{Path, PathBuf};

use crate::{CoreError, CoreResult};

/// Suffix of every window title.
pub const APP_TITLE: &str = "Notepad";

/// Display name used while no path is assigned.
pub const UNTITLED_NAME: &str = "Untitled";

/// Identity and location of the buffer being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    /// File path (`None` for untitled documents)
    path: Option<PathBuf>,
}

impl Document {
    /// Creates a new untitled document.
    pub fn new() -> Self {
        Self { path: None }
    }

    /// Returns true if the document has no associated file.
    pub fn is_untitled(&self) -> bool {
        self.path.is_none()
    }

    /// Returns the file path, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Assigns a file path after a successful open or save-as.
    ///
    /// An empty path is rejected; the document is left untouched.
    pub fn set_path(&mut self, path: PathBuf) -> CoreResult<()> {
        if path.as_os_str().is_empty() {
            return Err(CoreError::EmptyPath);
        }
        self.path = Some(path);
        Ok(())
    }

    /// Drops the path, returning the document to the untitled state.
    pub fn reset(&mut self) {
        self.path = None;
    }

    /// Returns the display name: the file basename, or "Untitled".
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| UNTITLED_NAME.to_string())
    }

    /// Returns the window title, always `<name> - Notepad`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.display_name(), APP_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_is_untitled() {
        let doc = Document::new();
        assert!(doc.is_untitled());
        assert_eq!(doc.title(), "Untitled - Notepad");
    }

    #[test]
    fn test_title_uses_basename() {
        let mut doc = Document::new();
        doc.set_path(PathBuf::from("/tmp/notes/todo.txt")).unwrap();
        assert!(!doc.is_untitled());
        assert_eq!(doc.display_name(), "todo.txt");
        assert_eq!(doc.title(), "todo.txt - Notepad");
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let mut doc = Document::new();
        assert!(matches!(
            doc.set_path(PathBuf::new()),
            Err(CoreError::EmptyPath)
        ));
        assert!(doc.is_untitled());
    }

    #[test]
    fn test_reset_returns_to_untitled() {
        let mut doc = Document::new();
        doc.set_path(PathBuf::from("a.txt")).unwrap();
        doc.reset();
        assert!(doc.is_untitled());
        assert_eq!(doc.title(), "Untitled - Notepad");
    }
}
