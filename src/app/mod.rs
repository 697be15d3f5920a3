//! Iced shell for the atlas resizer.
//!
//! This module is split into several submodules:
//! - `app`: App struct and initialization
//! - `styles`: UI styling functions and color palette
//! - `update`: App::update() and message handling
//! - `view`: App::view() and UI building helpers
//! - `preview`: canvas rendering of the original/scaled preview

mod app;
mod preview;
mod styles;
mod update;
mod view;

pub use app::App;

/// Application messages.
#[derive(Debug, Clone)]
pub enum Message {
    /// A runtime event from the subscription (file drops, wheel, modifiers).
    RuntimeEvent(iced::Event),
    /// Scale slider moved.
    ScaleChanged(f32),
    /// SAVE button pressed.
    Save,
}

/// Run the application window.
pub fn run() -> iced::Result {
    iced::application(App::boot, App::update, App::view)
        .title(App::title)
        .subscription(App::subscription)
        .window_size((1280.0, 720.0))
        .run()
}
