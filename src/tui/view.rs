use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::controller::KEY_BINDINGS;
use crate::about;
use crate::models::{DisplayState, PlaybackStatus};

const LABELS: [&str; 7] = [
    "Connected to:",
    "Status:",
    "",
    "Album:",
    "Artist:",
    "Song:",
    "Position:",
];

pub fn status_style(status: PlaybackStatus) -> Style {
    let color = match status {
        PlaybackStatus::Stopped => Color::LightRed,
        PlaybackStatus::Paused => Color::LightBlue,
        PlaybackStatus::Playing => Color::LightGreen,
    };
    Style::default().fg(color)
}

pub fn keys_help() -> String {
    KEY_BINDINGS
        .iter()
        .map(|(key, _, label)| format!("[{key}] {label}"))
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render(f: &mut Frame, state: &DisplayState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(3)])
        .split(f.area());

    let header = Paragraph::new(about::header())
        .style(Style::default().fg(Color::White).bg(Color::Blue));
    f.render_widget(header, chunks[0]);

    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(chunks[1]);
    f.render_widget(block, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    render_fields(f, body[0], state);

    let keys = Paragraph::new(keys_help()).style(Style::default().fg(Color::LightGreen));
    f.render_widget(keys, body[1]);
}

fn render_fields(f: &mut Frame, area: Rect, state: &DisplayState) {
    // Centred vertically, keeping at least one blank row above and below.
    let padded = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(LABELS.len() as u16),
            Constraint::Fill(1),
        ])
        .horizontal_margin(3)
        .vertical_margin(1)
        .split(area)[1];

    let label_width = LABELS.iter().map(|l| l.len()).max().unwrap_or(0) as u16;
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(label_width),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(padded);

    let labels: Vec<Line> = LABELS.iter().map(|l| Line::raw(*l)).collect();
    let labels = Paragraph::new(labels)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Right);
    f.render_widget(labels, columns[0]);

    let value = Style::default().fg(Color::White);
    let values = vec![
        Line::styled(state.connected_uri().to_string(), value),
        Line::from(Span::styled(
            state.status.to_string(),
            status_style(state.status),
        )),
        Line::raw(""),
        Line::styled(state.album.clone(), value),
        Line::styled(state.artist.clone(), value),
        Line::styled(state.title.clone(), value),
        Line::styled(state.position_line(), value),
    ];
    f.render_widget(Paragraph::new(values), columns[2]);
}
