//! # Quill UI
//!
//! The notepad window, built on iced's Elm architecture: the [`app::App`]
//! model, one [`app::Message`] enum, a single `update` dispatcher, and pure
//! `view` functions. All editor semantics live in `quill-core`; this crate
//! renders them and performs the effects the core hands back (dialogs, file
//! I/O, clipboard, quitting).

pub mod app;
pub mod style;

pub use app::{run, App, Flags};
