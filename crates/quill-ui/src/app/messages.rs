use iced::widget::text_editor;
use iced::{keyboard, mouse, Size};
use std::path::PathBuf;

use quill_core::Command;

use crate::app::TopMenu;

#[derive(Debug, Clone)]
pub enum Message {
    /// One of the editor's commands, from a menu item, shortcut, or wheel.
    Command(Command),

    // Editor
    EditorAction(text_editor::Action),

    // Menu bar
    ToggleTopMenu(TopMenu),
    CloseTopMenu,

    // Find prompt
    FindInputChanged(String),
    FindSubmit,
    FindCancel,
    DismissFindReport,

    // Modals
    DismissError,
    HideAbout,

    // Global input
    KeyPressed(keyboard::Key, keyboard::Modifiers),
    WheelScrolled(mouse::ScrollDelta),
    WindowResized(Size),

    // Async dialog results; `None` means the user cancelled.
    FileOpened(Option<Result<(PathBuf, String), String>>),
    FileSaved(Option<Result<PathBuf, String>>),
}
