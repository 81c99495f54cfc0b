use iced::widget::text_editor;
use iced::{keyboard, mouse, Size, Subscription, Task};
use std::path::PathBuf;

use quill_core::{Notepad, StatusSnapshot, Viewport};

pub mod file_ops;
pub mod messages;
pub mod update;
pub mod view;

pub use messages::Message;

/// Top-level menus, in bar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopMenu {
    File,
    Edit,
    View,
    Theme,
    Help,
}

/// Outcome of the last find, shown in a result dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindReport {
    pub query: String,
    pub count: usize,
}

/// Launch options handed over from the command line.
#[derive(Debug, Default)]
pub struct Flags {
    /// File to open on startup.
    pub file: Option<PathBuf>,
}

pub struct App {
    pub notepad: Notepad,
    pub content: text_editor::Content,
    pub status: StatusSnapshot,
    pub viewport: Viewport,
    pub window_size: Size,
    pub active_menu: Option<TopMenu>,
    pub find_visible: bool,
    pub find_input: String,
    pub find_report: Option<FindReport>,
    pub error_message: Option<String>,
    pub about_visible: bool,
}

impl App {
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let app = Self {
            notepad: Notepad::new(),
            content: text_editor::Content::new(),
            status: StatusSnapshot::default(),
            viewport: Viewport::FULL,
            window_size: Size::new(644.0, 788.0),
            active_menu: None,
            find_visible: false,
            find_input: String::new(),
            find_report: None,
            error_message: None,
            about_visible: false,
        };

        let task = match flags.file {
            Some(path) => file_ops::load(path),
            None => Task::none(),
        };

        (app, task)
    }

    pub fn title(&self) -> String {
        self.notepad.title()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        // The wheel binding is global; zoom must react wherever the pointer
        // is, and the window resize feeds the scrollbar policy.
        let event_sub = iced::event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                Some(Message::WheelScrolled(delta))
            }
            iced::Event::Window(iced::window::Event::Resized(size)) => {
                Some(Message::WindowResized(size))
            }
            _ => None,
        });

        Subscription::batch([keyboard_sub, event_sub])
    }
}

pub fn run(flags: Flags) -> iced::Result {
    iced::application(App::title, App::update, App::view)
        .subscription(App::subscription)
        .window_size(Size::new(644.0, 788.0))
        .theme(|_| iced::Theme::Dark)
        .antialiasing(true)
        .run_with(move || App::new(flags))
}
