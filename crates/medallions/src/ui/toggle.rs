//! Play/pause button in the window's top-left corner.

use medallions_core::PlaybackState;
use nannou::prelude::*;

const MARGIN: f32 = 16.0;

pub struct PlayToggle {
    width: f32,
    height: f32,
}

impl PlayToggle {
    pub fn new() -> Self {
        Self {
            width: 96.0,
            height: 36.0,
        }
    }

    /// Button area in window coordinates
    pub fn rect(&self, bounds: Rect) -> Rect {
        Rect::from_x_y_w_h(
            bounds.left() + MARGIN + self.width / 2.0,
            bounds.top() - MARGIN - self.height / 2.0,
            self.width,
            self.height,
        )
    }

    pub fn hit(&self, bounds: Rect, point: Point2) -> bool {
        self.rect(bounds).contains(point)
    }

    pub fn draw(&self, draw: &Draw, bounds: Rect, state: PlaybackState) {
        let rect = self.rect(bounds);
        let fill = match state {
            PlaybackState::Running => srgba(30u8, 30u8, 40u8, 200u8),
            PlaybackState::Paused => srgba(20u8, 120u8, 80u8, 220u8),
        };

        draw.rect()
            .xy(rect.xy())
            .wh(rect.wh())
            .color(fill)
            .stroke_weight(1.5)
            .stroke(WHITE);

        draw.text(state.label())
            .xy(rect.xy())
            .wh(rect.wh())
            .color(WHITE)
            .font_size(16);
    }
}

impl Default for PlayToggle {
    fn default() -> Self {
        Self::new()
    }
}
