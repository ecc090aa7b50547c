//! TUI rendering with ratatui
//!
//! Game board, guess input and the modal final-score dialog.

use super::app::{App, MessageStyle};
use crate::output::formatters::spaced;
use crate::shell::FinalScoreDialog;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui<R>(f: &mut Frame, app: &App<R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if let Some(dialog) = app.shell.dialog() {
        render_dialog(f, &dialog);
    }
}

fn render_header<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let header = Paragraph::new(format!("🔤 {}", app.shell.strings().title.to_uppercase()))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_board<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Word count and score
            Constraint::Min(3),    // Scramble
            Constraint::Length(1), // Instructions
            Constraint::Length(1), // Progress gauge
        ])
        .split(inner);

    let screen = app.shell.screen();
    let max_words = app.shell.session().rules().max_words;

    let counters = Line::from(vec![
        Span::styled(
            app.shell.word_count_label(),
            Style::default().fg(Color::White),
        ),
        Span::raw("   "),
        Span::styled(
            app.shell.score_label(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(counters).alignment(Alignment::Center), chunks[0]);

    let scramble = Paragraph::new(vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced(&screen.scramble),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: false });
    f.render_widget(scramble, chunks[1]);

    let instructions = Paragraph::new(app.shell.strings().instructions.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(instructions, chunks[2]);

    let ratio = if max_words == 0 {
        0.0
    } else {
        (screen.word_count as f64 / max_words as f64).min(1.0)
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(ratio)
        .label(format!("{}/{max_words}", screen.word_count));
    f.render_widget(gauge, chunks[3]);
}

fn render_messages<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let strings = app.shell.strings();
    let (title, color) = match app.shell.error_message() {
        Some(error) => (format!(" {error} "), Color::Red),
        None => (format!(" {} ", strings.enter_word), Color::Yellow),
    };

    let input = Paragraph::new(app.shell.input())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);

    if app.shell.dialog().is_none() {
        let width = u16::try_from(app.shell.input().chars().count()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(width)
            .min(area.right().saturating_sub(2));
        f.set_cursor_position((x, area.y + 1));
    }
}

fn render_status<R>(f: &mut Frame, app: &App<R>, area: Rect) {
    let strings = app.shell.strings();
    let help_text = if app.shell.dialog().is_some() {
        format!("p: {} | e: {}", strings.play_again, strings.exit)
    } else {
        strings.key_help()
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

fn render_dialog(f: &mut Frame, dialog: &FinalScoreDialog) {
    let area = centered_rect(f.area(), 44, 7);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            dialog.message.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[P] ", Style::default().fg(Color::Green)),
            Span::raw(dialog.play_again.clone()),
            Span::raw("     "),
            Span::styled("[E] ", Style::default().fg(Color::Red)),
            Span::raw(dialog.exit.clone()),
        ]),
    ];

    let popup = Paragraph::new(content)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(" 🎉 {} ", dialog.title))
                .title_alignment(Alignment::Center)
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

/// Rectangle of at most `width` x `height` centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [rect] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    rect
}
