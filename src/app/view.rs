//! App::view() and UI building helpers.

use iced::widget::canvas::Canvas;
use iced::widget::{button, column, container, row, slider, text};
use iced::{Element, Length};

use crate::view_state::{MAX_SCALE, MIN_SCALE};

use super::Message;
use super::app::App;
use super::preview::AtlasPreview;
use super::styles::{palette, panel_style, save_button_style};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content = row![
            container(self.build_preview())
                .width(Length::FillPortion(4))
                .height(Length::Fill)
                .style(panel_style),
            container(self.build_controls())
                .width(Length::Fixed(280.0))
                .height(Length::Fill)
                .padding(12)
                .style(panel_style),
        ]
        .spacing(8);

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(8)
            .style(|_| container::Style {
                background: Some(iced::Background::Color(palette::WINDOW_BG)),
                ..Default::default()
            })
            .into()
    }

    /// Build the preview canvas, or the drop prompt when nothing is loaded.
    fn build_preview(&self) -> Element<'_, Message> {
        match (&self.atlas_handle, &self.atlas.texture) {
            (Some(handle), Some(texture)) => Canvas::new(AtlasPreview {
                handle,
                width: texture.width as f32,
                height: texture.height as f32,
                frames: &self.atlas.frames,
                scale: self.view_state.scale,
                zoom: self.view_state.zoom,
                cache: &self.preview_cache,
            })
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
            _ => container(
                text("Drag an image to begin.")
                    .size(32)
                    .color(palette::TEXT_PRIMARY),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(iced::alignment::Horizontal::Center)
            .align_y(iced::alignment::Vertical::Center)
            .into(),
        }
    }

    fn build_controls(&self) -> Element<'_, Message> {
        let scale = self.view_state.scale;

        column![
            text(format!("Scale: {:.2}", scale))
                .size(24)
                .color(palette::TEXT_PRIMARY),
            slider(MIN_SCALE..=MAX_SCALE, scale, Message::ScaleChanged).step(0.01),
            text(format!(
                "Camera zoom: {:.1} (mouse wheel)",
                self.view_state.zoom
            ))
            .size(14)
            .color(palette::TEXT_SECONDARY),
            text(format!("Frames: {}", self.atlas.frames.len()))
                .size(14)
                .color(palette::TEXT_SECONDARY),
            button(text("SAVE").size(16))
                .on_press(Message::Save)
                .padding([6, 24])
                .style(save_button_style),
        ]
        .spacing(10)
        .into()
    }
}
