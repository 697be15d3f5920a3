//! Canvas rendering of the original/scaled atlas preview.

use iced::widget::canvas::{self, Cache, Geometry, Image, Path, Stroke};
use iced::widget::image::{FilterMethod, Handle as ImageHandle};
use iced::{Color, Point, Rectangle, Size, Theme, mouse};

use crate::atlas::FrameRect;

use super::Message;
use super::styles::palette;

/// Canvas program drawing the reference underlay and the scaled preview,
/// both inside the zoomed viewport.
pub(crate) struct AtlasPreview<'a> {
    pub handle: &'a ImageHandle,
    /// Native image bounds used for preview rendering.
    pub width: f32,
    pub height: f32,
    pub frames: &'a [FrameRect],
    pub scale: f32,
    pub zoom: f32,
    pub cache: &'a Cache,
}

impl canvas::Program<Message> for AtlasPreview<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self.cache.draw(renderer, bounds.size(), |frame| {
            frame.fill_rectangle(Point::ORIGIN, frame.size(), palette::CANVAS_BG);

            let zoom = self.zoom;
            let scaled = self.scale * zoom;

            // Reference underlay: native size at half opacity, red outline,
            // with the untransformed frame grid over it.
            draw_image(frame, region(self.width * zoom, self.height * zoom), self.handle, 0.5);
            stroke_region(
                frame,
                region(self.width * zoom, self.height * zoom),
                palette::ORIGINAL_OUTLINE,
            );
            for rect in self.frames {
                fill_frame(frame, rect, zoom, palette::FRAME_OVERLAY_FAINT);
            }

            // Scaled preview on top: full opacity, green outline, frame grid
            // at the export scale.
            draw_image(
                frame,
                region(self.width * scaled, self.height * scaled),
                self.handle,
                1.0,
            );
            stroke_region(
                frame,
                region(self.width * scaled, self.height * scaled),
                palette::SCALED_OUTLINE,
            );
            for rect in self.frames {
                fill_frame(frame, rect, scaled, palette::FRAME_OVERLAY);
            }
        });

        vec![geometry]
    }
}

fn region(width: f32, height: f32) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: 0.0,
        width,
        height,
    }
}

/// Draw the atlas image into `bounds` with bilinear filtering.
fn draw_image(frame: &mut canvas::Frame, bounds: Rectangle, handle: &ImageHandle, opacity: f32) {
    let image = Image::new(handle.clone())
        .opacity(opacity)
        .filter_method(FilterMethod::Linear);
    frame.draw_image(bounds, image);
}

fn stroke_region(frame: &mut canvas::Frame, bounds: Rectangle, color: Color) {
    let outline = Path::rectangle(Point::new(bounds.x, bounds.y), bounds.size());
    frame.stroke(&outline, Stroke::default().with_color(color).with_width(1.0));
}

fn fill_frame(frame: &mut canvas::Frame, rect: &FrameRect, factor: f32, color: Color) {
    frame.fill_rectangle(
        Point::new(rect.x * factor, rect.y * factor),
        Size::new(rect.width * factor, rect.height * factor),
        color,
    );
}
