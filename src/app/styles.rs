//! UI style functions and color palette.

use iced::widget::{button, container};
use iced::{Border, Color, Theme};

/// Light editor palette plus the preview overlay colors.
pub mod palette {
    use iced::Color;

    pub const WINDOW_BG: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const CANVAS_BG: Color = Color::from_rgb(0.96, 0.96, 0.96);
    pub const PANEL_BG: Color = Color::from_rgb(0.98, 0.98, 0.98);
    pub const BORDER: Color = Color::from_rgb(0.78, 0.78, 0.78);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.10, 0.10, 0.10);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.35, 0.35, 0.35);
    pub const ACCENT: Color = Color::from_rgb(0.00, 0.45, 0.85);
    pub const ACCENT_LIGHT: Color = Color::from_rgb(0.10, 0.55, 0.95);
    pub const ACCENT_DARK: Color = Color::from_rgb(0.00, 0.35, 0.70);

    /// Outline of the reference underlay at native bounds.
    pub const ORIGINAL_OUTLINE: Color = Color::from_rgb(0.90, 0.16, 0.22);
    /// Outline of the scaled preview bounds.
    pub const SCALED_OUTLINE: Color = Color::from_rgb(0.00, 0.89, 0.19);
    /// Sub-frame grid over the reference underlay.
    pub const FRAME_OVERLAY_FAINT: Color = Color::from_rgba(0.00, 0.47, 0.95, 0.05);
    /// Sub-frame grid over the scaled preview.
    pub const FRAME_OVERLAY: Color = Color::from_rgba(0.00, 0.47, 0.95, 0.10);
}

/// Style for the preview and control panels.
pub fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(palette::PANEL_BG)),
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 4.0.into(),
        },
        ..Default::default()
    }
}

/// Style for the SAVE button.
pub fn save_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    let (bg, text_color) = match status {
        button::Status::Active => (palette::ACCENT, Color::WHITE),
        button::Status::Hovered => (palette::ACCENT_LIGHT, Color::WHITE),
        button::Status::Pressed => (palette::ACCENT_DARK, Color::WHITE),
        button::Status::Disabled => (palette::BORDER, palette::TEXT_SECONDARY),
    };

    button::Style {
        background: Some(iced::Background::Color(bg)),
        text_color,
        border: Border {
            color: palette::BORDER,
            width: 1.0,
            radius: 3.0.into(),
        },
        ..Default::default()
    }
}
