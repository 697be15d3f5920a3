//! App struct definition and core initialization.

use iced::widget::canvas::Cache;
use iced::widget::image::Handle as ImageHandle;
use iced::{Subscription, Task, keyboard};

use crate::loader::AtlasState;
use crate::view_state::ViewState;

use super::Message;

/// Application state.
pub struct App {
    pub(crate) atlas: AtlasState,
    pub(crate) view_state: ViewState,
    /// Current keyboard modifiers; Ctrl switches the wheel to the scale.
    pub(crate) modifiers: keyboard::Modifiers,
    /// Iced image handle for the loaded texture.
    pub(crate) atlas_handle: Option<ImageHandle>,
    pub(crate) preview_cache: Cache,
}

impl App {
    pub fn title(_state: &Self) -> String {
        "Sparrow Atlas Resizer".to_string()
    }

    pub fn boot() -> (Self, Task<Message>) {
        (
            App {
                atlas: AtlasState::new(),
                view_state: ViewState::default(),
                modifiers: keyboard::Modifiers::empty(),
                atlas_handle: None,
                preview_cache: Cache::new(),
            },
            Task::none(),
        )
    }

    pub fn subscription(&self) -> Subscription<Message> {
        iced::event::listen().map(Message::RuntimeEvent)
    }

    /// Force the preview canvas to redraw.
    pub(crate) fn invalidate(&mut self) {
        self.preview_cache.clear();
    }
}
