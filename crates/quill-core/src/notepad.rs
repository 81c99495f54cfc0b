//! Application state and command dispatch.
//!
//! `Notepad` owns the document record and the view state, and is the single
//! place commands are interpreted. The shell feeds it commands and dialog
//! outcomes; it applies the state change and answers with an [`Effect`]
//! naming the side effect still owed by the shell.

use std::path::PathBuf;

use crate::command::{Command, Effect};
use crate::document::{Document, UNTITLED_NAME};
use crate::view::ViewState;
use crate::CoreResult;

/// The application-state record behind the single editor window.
#[derive(Debug, Clone, Default)]
pub struct Notepad {
    document: Document,
    view: ViewState,
}

impl Notepad {
    /// Creates the startup state: untitled document, default view.
    pub fn new() -> Self {
        Self {
            document: Document::new(),
            view: ViewState::new(),
        }
    }

    /// Returns the document record.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the view state.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Returns the window title for the current document.
    pub fn title(&self) -> String {
        self.document.title()
    }

    // ==================== Command Dispatch ====================

    /// Applies one command and returns the effect left for the shell.
    pub fn apply(&mut self, command: Command) -> Effect {
        tracing::debug!(?command, "dispatch");
        match command {
            Command::New => {
                self.document.reset();
                Effect::ClearBuffer
            }
            Command::Open => Effect::PickOpenFile,
            Command::Save => match self.document.path() {
                Some(path) => Effect::WriteFile {
                    path: path.to_path_buf(),
                },
                None => Effect::PickSavePath {
                    suggested: format!("{UNTITLED_NAME}.txt"),
                },
            },
            Command::Exit => Effect::Quit,

            Command::Cut => Effect::CutSelection,
            Command::Copy => Effect::CopySelection,
            Command::Paste => Effect::PasteClipboard,
            Command::Find => Effect::PromptFind,

            Command::ZoomIn => {
                self.view.zoom_in();
                Effect::None
            }
            Command::ZoomOut => {
                if !self.view.zoom_out() {
                    tracing::debug!(size = self.view.font_size(), "zoom-out at floor");
                }
                Effect::None
            }
            Command::ToggleStatusBar => {
                self.view.toggle_status_bar();
                Effect::None
            }
            Command::ApplyTheme(theme) => {
                self.view.set_theme(theme);
                Effect::None
            }

            Command::About => Effect::ShowAbout,
        }
    }

    // ==================== File Lifecycle ====================

    /// Records a successful open: the document now points at `path`.
    pub fn file_opened(&mut self, path: PathBuf) -> CoreResult<()> {
        self.document.set_path(path)?;
        tracing::info!(title = %self.title(), "opened");
        Ok(())
    }

    /// Records a failed open: any partial path is discarded and the
    /// document goes back to untitled.
    pub fn open_failed(&mut self) {
        self.document.reset();
    }

    /// Records a successful save to `path` (direct save or save-as).
    pub fn file_saved(&mut self, path: PathBuf) -> CoreResult<()> {
        self.document.set_path(path)?;
        tracing::info!(title = %self.title(), "saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeKind;

    #[test]
    fn test_new_clears_document_and_buffer() {
        let mut notepad = Notepad::new();
        notepad.file_opened(PathBuf::from("/tmp/a.txt")).unwrap();
        assert_eq!(notepad.title(), "a.txt - Notepad");

        let effect = notepad.apply(Command::New);
        assert_eq!(effect, Effect::ClearBuffer);
        assert_eq!(notepad.title(), "Untitled - Notepad");
    }

    #[test]
    fn test_save_untitled_prompts_for_a_path() {
        let mut notepad = Notepad::new();
        assert_eq!(
            notepad.apply(Command::Save),
            Effect::PickSavePath {
                suggested: "Untitled.txt".to_string()
            }
        );
        // A cancelled prompt performs no state change at all.
        assert!(notepad.document().is_untitled());
    }

    #[test]
    fn test_save_with_path_writes_directly() {
        let mut notepad = Notepad::new();
        notepad.file_saved(PathBuf::from("/tmp/b.txt")).unwrap();
        assert_eq!(
            notepad.apply(Command::Save),
            Effect::WriteFile {
                path: PathBuf::from("/tmp/b.txt")
            }
        );
    }

    #[test]
    fn test_failed_open_falls_back_to_untitled() {
        let mut notepad = Notepad::new();
        notepad.file_opened(PathBuf::from("/tmp/a.txt")).unwrap();
        notepad.open_failed();
        assert!(notepad.document().is_untitled());
        assert_eq!(notepad.title(), "Untitled - Notepad");
    }

    #[test]
    fn test_view_commands_mutate_in_place() {
        let mut notepad = Notepad::new();
        let before = notepad.view().font_size();

        assert_eq!(notepad.apply(Command::ZoomIn), Effect::None);
        assert_eq!(notepad.view().font_size(), before + 2);

        assert_eq!(notepad.apply(Command::ApplyTheme(ThemeKind::Green)), Effect::None);
        assert_eq!(notepad.view().theme(), ThemeKind::Green);

        let visible = notepad.view().status_bar_visible();
        notepad.apply(Command::ToggleStatusBar);
        assert_ne!(notepad.view().status_bar_visible(), visible);
    }

    #[test]
    fn test_clipboard_and_dialog_commands_defer_to_the_shell() {
        let mut notepad = Notepad::new();
        assert_eq!(notepad.apply(Command::Cut), Effect::CutSelection);
        assert_eq!(notepad.apply(Command::Copy), Effect::CopySelection);
        assert_eq!(notepad.apply(Command::Paste), Effect::PasteClipboard);
        assert_eq!(notepad.apply(Command::Find), Effect::PromptFind);
        assert_eq!(notepad.apply(Command::Open), Effect::PickOpenFile);
        assert_eq!(notepad.apply(Command::About), Effect::ShowAbout);
        assert_eq!(notepad.apply(Command::Exit), Effect::Quit);
    }
}
