//! # Quill Core
//!
//! Editor state and command dispatch for the Quill notepad.
//!
//! The UI shell owns the text widget; this crate owns everything that can be
//! reasoned about without one: document identity and titling, view state
//! (font size, theme, status bar), the command/effect dispatch cycle, the
//! find counter, status-line metrics, the scrollbar visibility policy, and
//! the plain-text read/write rules.

pub mod command;
pub mod document;
pub mod fs;
pub mod notepad;
pub mod scrollbar;
pub mod search;
pub mod status;
pub mod theme;
pub mod view;

pub use command::{Command, Effect};
pub use document::Document;
pub use notepad::Notepad;
pub use scrollbar::Viewport;
pub use status::StatusSnapshot;
pub use theme::{Palette, ThemeKind};
pub use view::ViewState;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("document path must not be empty")]
    EmptyPath,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
