pub mod gallows;

use itertools::Itertools;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Paragraph, Widget, Wrap},
};
use unicode_width::UnicodeWidthStr;

use crate::{game::Status, util, App, AppState};

const HORIZONTAL_MARGIN: u16 = 5;
const VERTICAL_MARGIN: u16 = 1;

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let green_bold_style = Style::default().patch(bold_style).fg(Color::Green);
        let red_bold_style = Style::default().patch(bold_style).fg(Color::Red);
        let dim_style = Style::default().add_modifier(Modifier::DIM);
        let flash_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::ITALIC);

        let game = &self.game;
        let word_line = util::spaced(&game.revealed_string());

        let max_chars_per_line = area.width.saturating_sub(HORIZONTAL_MARGIN * 2).max(1);
        let word_lines = ((word_line.width() as f64 / max_chars_per_line as f64).ceil()).max(1.0) as u16;

        let art = gallows::stage(game.wrong_guesses(), game.max_attempts());

        let body_height = gallows::STAGE_LINES + 1 + word_lines + 1 + 2 + 1 + 1 + 1;
        let pad = area.height.saturating_sub(body_height) / 2;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Length(pad),
                    Constraint::Length(gallows::STAGE_LINES),
                    Constraint::Length(1), // spacer
                    Constraint::Length(word_lines),
                    Constraint::Length(1), // attempts
                    Constraint::Length(2), // hit/miss letter rows
                    Constraint::Length(1), // spacer
                    Constraint::Length(1), // flash / banner
                    Constraint::Length(1), // hints
                ]
                .as_ref(),
            )
            .split(area);

        Paragraph::new(art)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        let word_style = match game.status() {
            Status::Won => green_bold_style,
            Status::Lost => red_bold_style,
            Status::InProgress => bold_style,
        };
        let shown_word = if game.status() == Status::Lost {
            // Reveal what the player failed to find.
            util::spaced(game.secret())
        } else {
            word_line
        };
        Paragraph::new(Span::styled(shown_word, word_style))
            .alignment(if word_lines == 1 {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: true })
            .render(chunks[3], buf);

        let attempts = Paragraph::new(Span::styled(
            format!(
                "attempts left: {}  {}",
                game.attempts_remaining(),
                util::hearts(game.attempts_remaining(), game.max_attempts())
            ),
            dim_style,
        ))
        .alignment(Alignment::Center);
        attempts.render(chunks[4], buf);

        let letter_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)].as_ref())
            .split(chunks[5]);

        if !game.hits().is_empty() {
            Paragraph::new(Span::styled(
                format!("hits:   {}", game.hits().iter().join(" ")),
                green_bold_style,
            ))
            .alignment(Alignment::Center)
            .render(letter_rows[0], buf);
        }
        if !game.misses().is_empty() {
            Paragraph::new(Span::styled(
                format!("misses: {}", game.misses().iter().join(" ")),
                red_bold_style,
            ))
            .alignment(Alignment::Center)
            .render(letter_rows[1], buf);
        }

        match self.state {
            AppState::Playing => {
                if let Some(text) = self.flash_text() {
                    Paragraph::new(Span::styled(text.to_string(), flash_style))
                        .alignment(Alignment::Center)
                        .render(chunks[7], buf);
                }

                Paragraph::new(Span::styled(
                    "type a letter to guess — (esc) quit",
                    dim_style,
                ))
                .alignment(Alignment::Center)
                .render(chunks[8], buf);
            }
            AppState::Results => {
                let banner = match game.status() {
                    Status::Won => Span::styled(
                        format!("you won! the word was '{}'", game.secret()),
                        green_bold_style,
                    ),
                    Status::Lost => Span::styled(
                        format!("you lost — the word was '{}'", game.secret()),
                        red_bold_style,
                    ),
                    Status::InProgress => Span::raw(""),
                };
                Paragraph::new(banner)
                    .alignment(Alignment::Center)
                    .render(chunks[7], buf);

                Paragraph::new(Span::styled(
                    format!(
                        "list: {} | attempts: {} — (l) list (+/-) attempts (n) new game (esc) quit",
                        self.settings.word_list.to_string().to_lowercase(),
                        self.settings.max_attempts,
                    ),
                    dim_style,
                ))
                .alignment(Alignment::Center)
                .render(chunks[8], buf);
            }
        }
    }
}
