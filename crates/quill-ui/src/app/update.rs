use iced::widget::text_editor;
use iced::{keyboard, mouse, Task};

use quill_core::{search, Command, Effect, StatusSnapshot, Viewport};

use super::{file_ops, App, FindReport, Message};
use crate::style::Layout;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Command(command) => return self.run_command(command),

            Message::EditorAction(action) => {
                self.active_menu = None;
                self.content.perform(action);
                self.refresh_status();
                self.refresh_viewport();
            }

            Message::ToggleTopMenu(menu) => {
                self.active_menu = if self.active_menu == Some(menu) {
                    None
                } else {
                    Some(menu)
                };
            }

            Message::CloseTopMenu => {
                self.active_menu = None;
            }

            Message::FindInputChanged(input) => {
                self.find_input = input;
            }

            Message::FindSubmit => {
                self.find_visible = false;
                let query = std::mem::take(&mut self.find_input);
                // An empty query is ignored, matching a dismissed prompt.
                if !query.is_empty() {
                    let count = search::count_occurrences(&self.content.text(), &query);
                    tracing::debug!(%query, count, "find");
                    self.find_report = Some(FindReport { query, count });
                }
            }

            Message::FindCancel => {
                self.find_visible = false;
                self.find_input.clear();
            }

            Message::DismissFindReport => {
                self.find_report = None;
            }

            Message::DismissError => {
                self.error_message = None;
            }

            Message::HideAbout => {
                self.about_visible = false;
            }

            Message::KeyPressed(key, modifiers) => {
                return self.handle_key_pressed(key, modifiers);
            }

            Message::WheelScrolled(delta) => {
                let y = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y,
                };
                // Wheel and shortcut share the same zoom commands.
                if y > 0.0 {
                    return self.run_command(Command::ZoomIn);
                } else if y < 0.0 {
                    return self.run_command(Command::ZoomOut);
                }
            }

            Message::WindowResized(size) => {
                self.window_size = size;
                self.refresh_viewport();
            }

            Message::FileOpened(None) => {
                // Dialog cancelled; nothing happens.
            }

            Message::FileOpened(Some(Ok((path, text)))) => {
                self.content = text_editor::Content::with_text(&text);
                if let Err(err) = self.notepad.file_opened(path) {
                    self.error_message = Some(err.to_string());
                }
                self.refresh_status();
                self.refresh_viewport();
            }

            Message::FileOpened(Some(Err(message))) => {
                self.notepad.open_failed();
                self.error_message = Some(message);
                self.refresh_status();
            }

            Message::FileSaved(None) => {
                // Save-as cancelled; the document stays untitled.
            }

            Message::FileSaved(Some(Ok(path))) => {
                if let Err(err) = self.notepad.file_saved(path) {
                    self.error_message = Some(err.to_string());
                }
                self.refresh_status();
            }

            Message::FileSaved(Some(Err(message))) => {
                self.error_message = Some(message);
            }
        }

        Task::none()
    }

    /// The single dispatch point: apply the command to the core state, then
    /// perform whatever effect it hands back.
    fn run_command(&mut self, command: Command) -> Task<Message> {
        self.active_menu = None;

        let task = match self.notepad.apply(command) {
            Effect::None => Task::none(),

            Effect::ClearBuffer => {
                self.content = text_editor::Content::new();
                self.refresh_status();
                Task::none()
            }

            Effect::PickOpenFile => file_ops::pick_and_load(),

            Effect::PickSavePath { suggested } => {
                file_ops::pick_and_save(self.content.text(), suggested)
            }

            Effect::WriteFile { path } => file_ops::save(path, self.content.text()),

            Effect::CutSelection => {
                if let Some(selected) = self.content.selection() {
                    if let Ok(mut clipboard) = arboard::Clipboard::new() {
                        let _ = clipboard.set_text(&selected);
                    }
                    self.content
                        .perform(text_editor::Action::Edit(text_editor::Edit::Delete));
                    self.refresh_status();
                }
                Task::none()
            }

            Effect::CopySelection => {
                if let Some(selected) = self.content.selection() {
                    if let Ok(mut clipboard) = arboard::Clipboard::new() {
                        let _ = clipboard.set_text(&selected);
                    }
                }
                Task::none()
            }

            Effect::PasteClipboard => {
                if let Ok(mut clipboard) = arboard::Clipboard::new() {
                    if let Ok(clip_text) = clipboard.get_text() {
                        self.content.perform(text_editor::Action::Edit(
                            text_editor::Edit::Paste(std::sync::Arc::new(clip_text)),
                        ));
                        self.refresh_status();
                    }
                }
                Task::none()
            }

            Effect::PromptFind => {
                self.find_visible = true;
                self.find_input.clear();
                Task::none()
            }

            Effect::ShowAbout => {
                self.about_visible = true;
                Task::none()
            }

            Effect::Quit => iced::exit(),
        };

        self.refresh_viewport();
        task
    }

    fn handle_key_pressed(&mut self, key: keyboard::Key, modifiers: keyboard::Modifiers) -> Task<Message> {
        if !modifiers.control() {
            return Task::none();
        }

        let char_key = match &key {
            keyboard::Key::Character(c) => Some(c.to_lowercase()),
            _ => None,
        };

        if let Some(c) = char_key {
            match c.as_str() {
                "=" | "+" => return self.run_command(Command::ZoomIn),
                "-" => return self.run_command(Command::ZoomOut),
                "n" => return self.run_command(Command::New),
                "o" => return self.run_command(Command::Open),
                "s" => return self.run_command(Command::Save),
                "f" => return self.run_command(Command::Find),
                _ => {}
            }
        }

        Task::none()
    }

    /// Recomputes the status line from the widget's text and cursor.
    pub(crate) fn refresh_status(&mut self) {
        let (line, column) = self.content.cursor_position();
        self.status = StatusSnapshot::compute(&self.content.text(), line, column);
    }

    /// Re-derives the visible fraction of content for the scrollbar policy.
    ///
    /// The text widget scrolls internally without exposing its offset, so
    /// the fraction pair is anchored at the top of the buffer: what matters
    /// for visibility is whether the content overflows the viewport at all.
    pub(crate) fn refresh_viewport(&mut self) {
        let total_lines = self.content.line_count().max(1) as f32;
        let line_height = f32::from(self.notepad.view().font_size()) * Layout::LINE_HEIGHT_FACTOR;

        let mut editor_height = self.window_size.height - Layout::MENU_BAR_HEIGHT;
        if self.notepad.view().status_bar_visible() {
            editor_height -= Layout::STATUS_BAR_HEIGHT;
        }
        let editor_height = editor_height.max(line_height);

        let visible_lines = (editor_height / line_height).min(total_lines);
        self.viewport = Viewport::new(0.0, visible_lines / total_lines);
    }
}
