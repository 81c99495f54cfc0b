//! File dialog and disk tasks.
//!
//! Dialogs run as iced tasks so the event loop keeps painting while they are
//! up. A dismissed dialog resolves to `None`, which the update loop treats
//! as "do nothing at all".

use iced::Task;
use std::path::PathBuf;

use super::Message;

/// Shows the open dialog, then reads the picked file.
pub fn pick_and_load() -> Task<Message> {
    Task::perform(
        async {
            let handle = rfd::AsyncFileDialog::new()
                .add_filter("All Files", &["*"])
                .add_filter("Text Documents", &["txt"])
                .pick_file()
                .await;

            handle.map(|file| read(file.path().to_path_buf()))
        },
        Message::FileOpened,
    )
}

/// Reads a known path without a dialog (startup file argument).
pub fn load(path: PathBuf) -> Task<Message> {
    Task::perform(async move { Some(read(path)) }, Message::FileOpened)
}

/// Shows the save-as dialog, then writes the buffer to the picked path.
pub fn pick_and_save(contents: String, suggested: String) -> Task<Message> {
    Task::perform(
        async move {
            let handle = rfd::AsyncFileDialog::new()
                .set_file_name(suggested)
                .add_filter("Text Documents", &["txt"])
                .add_filter("All Files", &["*"])
                .save_file()
                .await;

            handle.map(|file| write(file.path().to_path_buf(), &contents))
        },
        Message::FileSaved,
    )
}

/// Writes the buffer to the document's known path.
pub fn save(path: PathBuf, contents: String) -> Task<Message> {
    Task::perform(async move { Some(write(path, &contents)) }, Message::FileSaved)
}

fn read(path: PathBuf) -> Result<(PathBuf, String), String> {
    match quill_core::fs::read_document(&path) {
        Ok(text) => Ok((path, text)),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "open failed");
            Err(format!("Could not read file: {err}"))
        }
    }
}

fn write(path: PathBuf, contents: &str) -> Result<PathBuf, String> {
    match quill_core::fs::write_document(&path, contents) {
        Ok(()) => Ok(path),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "save failed");
            Err(format!("Could not save file: {err}"))
        }
    }
}
