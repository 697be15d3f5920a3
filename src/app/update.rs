//! App::update() and message handling.

use std::path::PathBuf;

use iced::widget::image::Handle as ImageHandle;
use iced::{Event, Task, keyboard, mouse, window};

use crate::{export, loader};

use super::Message;
use super::app::App;

impl App {
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::RuntimeEvent(event) => self.handle_runtime_event(event),
            Message::ScaleChanged(value) => {
                self.view_state.set_scale(value);
                self.invalidate();
            }
            Message::Save => self.handle_save(),
        }

        Task::none()
    }

    // ── Event handlers ──────────────────────────────────────────────────

    fn handle_runtime_event(&mut self, event: Event) {
        match event {
            Event::Window(window::Event::FileDropped(path)) => self.handle_file_dropped(path),
            Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
                let notches = match delta {
                    mouse::ScrollDelta::Lines { y, .. } => y,
                    mouse::ScrollDelta::Pixels { y, .. } => y / 30.0,
                };
                self.view_state.apply_wheel(notches, self.modifiers.control());
                self.invalidate();
            }
            Event::Keyboard(keyboard::Event::ModifiersChanged(modifiers)) => {
                self.modifiers = modifiers;
            }
            _ => {}
        }
    }

    fn handle_file_dropped(&mut self, path: PathBuf) {
        if loader::ingest_dropped(&mut self.atlas, std::slice::from_ref(&path)) {
            self.atlas_handle = self.atlas.texture.as_ref().map(|data| {
                ImageHandle::from_rgba(data.width, data.height, data.pixels.clone())
            });
            self.invalidate();
        }
    }

    fn handle_save(&mut self) {
        let outcome = export::export_scaled(&mut self.atlas, self.view_state.scale);
        if outcome.image_written && outcome.metadata_written {
            tracing::info!(
                "Exported {} and {} at scale {:.2}",
                export::OUTPUT_IMAGE,
                export::OUTPUT_METADATA,
                self.view_state.scale
            );
        }
    }
}
