use flappy_engine::{GameSession, PipePair, Rect as WorldRect};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    widgets::{Block, Widget},
};

use crate::ui::color;

/// Draws the playfield with half-block characters, two pixels per cell.
///
/// The world is scaled to fill the area; [`ArenaDisplay::fit`] gives the area
/// size that keeps the world's aspect ratio.
#[derive(Debug)]
pub struct ArenaDisplay<'a> {
    session: &'a GameSession,
    block: Option<Block<'a>>,
}

impl<'a> ArenaDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            block: None,
        }
    }

    pub fn block(self, block: Block<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    /// Returns the largest `(width, height)` within `area`, block included,
    /// that shows the world undistorted.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn fit(&self, area: Rect) -> (u16, u16) {
        let dummy = Rect::new(0, 0, 100, 100);
        let inner = self.block.as_ref().map_or(dummy, |block| block.inner(dummy));
        let margin_x = dummy.width - inner.width;
        let margin_y = dummy.height - inner.height;

        let max_cols = area.width.saturating_sub(margin_x);
        let max_rows = area.height.saturating_sub(margin_y);
        let config = self.session.config();
        let aspect = config.screen_width / config.screen_height;

        let cols_for_rows = (f32::from(max_rows) * 2.0 * aspect) as u16;
        let (cols, rows) = if cols_for_rows <= max_cols {
            (cols_for_rows, max_rows)
        } else {
            let rows = (f32::from(max_cols) / aspect / 2.0) as u16;
            (max_cols, rows)
        };
        (cols + margin_x, rows + margin_y)
    }
}

/// Pixel canvas in world units, scaled to the output resolution.
struct Canvas {
    width: usize,
    height: usize,
    scale_x: f32,
    scale_y: f32,
    pixels: Vec<Color>,
}

impl Canvas {
    #[expect(clippy::cast_precision_loss)]
    fn new(width: usize, height: usize, world_width: f32, world_height: f32) -> Self {
        Self {
            width,
            height,
            scale_x: width as f32 / world_width,
            scale_y: height as f32 / world_height,
            pixels: vec![color::SKY; width * height],
        }
    }

    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn span(start: f32, end: f32, limit: usize) -> (usize, usize) {
        let limit = limit as f32;
        let start = start.floor().clamp(0.0, limit) as usize;
        let end = end.ceil().clamp(0.0, limit) as usize;
        (start, end)
    }

    fn fill(&mut self, rect: &WorldRect, color: Color) {
        let (x0, x1) = Self::span(
            rect.left() * self.scale_x,
            rect.right() * self.scale_x,
            self.width,
        );
        let (y0, y1) = Self::span(
            rect.top() * self.scale_y,
            rect.bottom() * self.scale_y,
            self.height,
        );
        for y in y0..y1 {
            self.pixels[y * self.width + x0..y * self.width + x1].fill(color);
        }
    }

    fn get(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }
}

impl Widget for ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &ArenaDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.is_empty() {
            return;
        }

        let session = self.session;
        let config = session.config();
        let mut canvas = Canvas::new(
            usize::from(inner.width),
            usize::from(inner.height) * 2,
            config.screen_width,
            config.screen_height,
        );

        let ground = session.ground_rect();
        canvas.fill(&ground, color::GROUND);
        let grass = WorldRect::new(ground.x, ground.y, ground.width, ground.height / 8.0);
        canvas.fill(&grass, color::GRASS);

        let next_id = session.next_pipe().map(PipePair::id);
        for pipe in session.pipes().iter() {
            let color = if Some(pipe.id()) == next_id {
                color::NEXT_PIPE
            } else {
                color::PIPE
            };
            for rect in pipe.rects(config) {
                canvas.fill(&rect, color);
            }
        }

        let show_dead = session.pilot_kind().is_human();
        for bird in session.birds() {
            if !bird.is_alive() && !show_dead {
                continue;
            }
            let c = bird.color();
            let color = if bird.is_alive() {
                Color::Rgb(c.r, c.g, c.b)
            } else {
                color::GRAY
            };
            canvas.fill(&bird.hitbox(config), color);
        }

        for (row, y) in (inner.top()..inner.bottom()).enumerate() {
            for (col, x) in (inner.left()..inner.right()).enumerate() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_char('\u{2580}')
                        .set_fg(canvas.get(col, row * 2))
                        .set_bg(canvas.get(col, row * 2 + 1));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = Canvas::new(10, 10, 100.0, 100.0);
        canvas.fill(&WorldRect::new(-50.0, 90.0, 100.0, 50.0), color::RED);
        assert_eq!(canvas.get(0, 9), color::RED);
        assert_eq!(canvas.get(4, 9), color::RED);
        assert_eq!(canvas.get(5, 9), color::SKY);
        assert_eq!(canvas.get(0, 8), color::SKY);
    }

    #[test]
    fn test_fill_scales_world_units() {
        let mut canvas = Canvas::new(4, 2, 800.0, 100.0);
        canvas.fill(&WorldRect::new(200.0, 50.0, 200.0, 50.0), color::PIPE);
        assert_eq!(canvas.get(0, 1), color::SKY);
        assert_eq!(canvas.get(1, 1), color::PIPE);
        assert_eq!(canvas.get(2, 1), color::SKY);
        assert_eq!(canvas.get(1, 0), color::SKY);
    }
}
