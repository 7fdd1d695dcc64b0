pub use self::{arena_display::*, session_display::*};

mod arena_display;
mod session_display;

mod color {
    use ratatui::style::Color;

    pub const SKY: Color = Color::Rgb(112, 197, 206);
    pub const GROUND: Color = Color::Rgb(222, 216, 149);
    pub const GRASS: Color = Color::Rgb(94, 190, 58);
    pub const PIPE: Color = Color::Rgb(115, 191, 46);
    pub const NEXT_PIPE: Color = Color::Rgb(84, 150, 30);
    pub const MAGENTA: Color = Color::Rgb(255, 0, 255);
    pub const YELLOW: Color = Color::Rgb(255, 255, 0);
    pub const RED: Color = Color::Rgb(255, 0, 0);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::ui::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const LABEL: Style = fg_bg(color::GRAY, color::BLACK);
    pub const HELP: Style = Style::new().fg(Color::DarkGray);
    pub const PAUSED: Style = fg_bg(color::BLACK, color::YELLOW);
    pub const GAME_OVER: Style = fg_bg(color::WHITE, color::RED);
}
