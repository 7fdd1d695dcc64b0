use flappy_engine::{GameSession, SessionState};
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Clear, Padding, Paragraph, Widget},
};

use crate::ui::{ArenaDisplay, color, style};

const STATS_WIDTH: u16 = 36;

/// The playfield next to a statistics panel, framed by the session state.
#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
    best_score: usize,
    turbo: bool,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self {
            session,
            best_score: 0,
            turbo: false,
        }
    }

    /// Best score over all runs so far, kept by the caller.
    pub fn best_score(self, best_score: usize) -> Self {
        Self { best_score, ..self }
    }

    pub fn turbo(self, turbo: bool) -> Self {
        Self { turbo, ..self }
    }

    fn stats_lines(&self) -> Vec<Line<'static>> {
        let session = self.session;
        let stats = session.stats();
        let duration = session.duration();
        let mode = if session.pilot_kind().is_human() {
            "Human"
        } else {
            "Perceptron"
        };
        let rows = [
            ("Mode", mode.to_owned()),
            ("Score", stats.score().to_string()),
            ("Best", self.best_score.max(stats.score()).to_string()),
            ("Run", stats.generation().to_string()),
            (
                "Alive",
                format!("{}/{}", session.live_count(), session.population()),
            ),
            ("Speed", format!("{:.0}", session.params().scroll_speed())),
            ("Frames", stats.frames().to_string()),
            (
                "Time",
                format!(
                    "{:02}:{:02}.{:02}",
                    duration.as_secs() / 60,
                    duration.as_secs() % 60,
                    duration.subsec_millis() / 10
                ),
            ),
        ];
        let mut lines: Vec<_> = rows
            .into_iter()
            .map(|(label, value)| {
                Line::from(vec![
                    Span::styled(format!("{label:<8}"), style::LABEL),
                    Span::styled(format!("{value:>24}"), style::DEFAULT),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Seed", style::LABEL)));
        lines.push(Line::from(Span::styled(
            session.seed().to_string(),
            style::LABEL,
        )));
        lines
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let border_color = match self.session.state() {
            SessionState::Playing if self.turbo => color::MAGENTA,
            SessionState::Playing => color::WHITE,
            SessionState::Paused => color::YELLOW,
            SessionState::GameOver => color::RED,
        };

        let arena = ArenaDisplay::new(self.session)
            .block(Block::bordered().border_style(border_color).style(style::DEFAULT));
        let (arena_width, arena_height) =
            arena.fit(Rect::new(0, 0, area.width.saturating_sub(STATS_WIDTH + 1), area.height));

        let stats = Paragraph::new(self.stats_lines()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::horizontal(1))
                .border_style(border_color)
                .style(style::DEFAULT),
        );

        let [arena_column, stats_column] = Layout::horizontal([
            Constraint::Length(arena_width),
            Constraint::Length(STATS_WIDTH),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);
        let [arena_area] = Layout::vertical([Constraint::Length(arena_height)]).areas(arena_column);
        let [stats_area] = Layout::vertical([Constraint::Length(13)]).areas(stats_column);

        arena.render(arena_area, buf);
        stats.render(stats_area, buf);

        let popup = match self.session.state() {
            SessionState::Playing => None,
            SessionState::Paused => Some(("PAUSED", style::PAUSED)),
            SessionState::GameOver => Some(("GAME OVER!!", style::GAME_OVER)),
        };

        if let Some((text, style)) = popup {
            let block = Block::new().style(style);
            let text = Text::styled(text, style).centered();
            let area = arena_area.centered(Constraint::Length(arena_width), Constraint::Length(3));
            let inner = block.inner(area);
            Clear.render(area, buf);
            block.render(area, buf);
            text.render(inner.centered_vertically(Constraint::Length(1)), buf);
        }
    }
}
