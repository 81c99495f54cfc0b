//! The editor's action surface.
//!
//! Every menu entry, shortcut, and wheel gesture resolves to one `Command`
//! variant, and all of them flow through a single dispatcher
//! ([`crate::Notepad::apply`]). The dispatcher mutates core state directly
//! and returns an [`Effect`] naming whatever the shell must do on its side
//! (show a dialog, touch the clipboard, write a file, quit).

use std::path::PathBuf;

use crate::theme::ThemeKind;

/// Everything the user can ask the editor to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File
    New,
    Open,
    Save,
    Exit,

    // Edit
    Cut,
    Copy,
    Paste,
    Find,

    // View
    ZoomIn,
    ZoomOut,
    ToggleStatusBar,

    // Theme
    ApplyTheme(ThemeKind),

    // Help
    About,
}

impl Command {
    /// Returns the command's menu label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Command::New => "New",
            Command::Open => "Open",
            Command::Save => "Save",
            Command::Exit => "Exit",
            Command::Cut => "Cut",
            Command::Copy => "Copy",
            Command::Paste => "Paste",
            Command::Find => "Find",
            Command::ZoomIn => "Zoom In",
            Command::ZoomOut => "Zoom Out",
            Command::ToggleStatusBar => "Status Bar",
            Command::ApplyTheme(theme) => theme.name(),
            Command::About => "About Notepad",
        }
    }

    /// Returns the shortcut shown next to the menu label, or `""`.
    pub fn shortcut(&self) -> &'static str {
        match self {
            Command::New => "Ctrl+N",
            Command::Open => "Ctrl+O",
            Command::Save => "Ctrl+S",
            Command::Cut => "Ctrl+X",
            Command::Copy => "Ctrl+C",
            Command::Paste => "Ctrl+V",
            Command::Find => "Ctrl+F",
            Command::ZoomIn => "Ctrl+Plus",
            Command::ZoomOut => "Ctrl+Minus",
            _ => "",
        }
    }
}

/// What the shell must carry out after a command is dispatched.
///
/// Core state has already been updated by the time one of these is returned;
/// the effect only describes the remaining side of the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing left to do.
    None,
    /// Empty the text widget and recompute the status line.
    ClearBuffer,
    /// Show the open-file dialog, then read the picked file.
    PickOpenFile,
    /// Show the save-as dialog with a suggested file name, then write.
    PickSavePath { suggested: String },
    /// Write the buffer to the document's known path.
    WriteFile { path: PathBuf },
    /// Move the selection to the system clipboard and delete it.
    CutSelection,
    /// Copy the selection to the system clipboard.
    CopySelection,
    /// Insert the system clipboard at the cursor.
    PasteClipboard,
    /// Show the find prompt.
    PromptFind,
    /// Show the about dialog.
    ShowAbout,
    /// Close the application.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names() {
        assert_eq!(Command::Save.display_name(), "Save");
        assert_eq!(Command::ToggleStatusBar.display_name(), "Status Bar");
        assert_eq!(Command::ApplyTheme(ThemeKind::Blue).display_name(), "Blue");
    }

    #[test]
    fn test_shortcuts() {
        assert_eq!(Command::ZoomIn.shortcut(), "Ctrl+Plus");
        assert_eq!(Command::Exit.shortcut(), "");
        assert_eq!(Command::ApplyTheme(ThemeKind::Dark).shortcut(), "");
    }
}
