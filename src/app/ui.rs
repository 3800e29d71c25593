//! Rendering
//!
//! Draws the whole page from the session state: banner, rocket, the mood
//! line with its reader control, the input box with its action control,
//! and the blocking alert overlay.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::session::{controls, Control, ControlSet, RocketState, Session};

pub fn render(frame: &mut Frame, session: &Session) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(8),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(frame.area());

    let set = controls(
        session.wallet_connected,
        session.loading,
        session.mood_sent,
    );

    render_banner(frame, layout[0]);
    render_rocket(frame, layout[1], session.rocket);
    render_mood(frame, layout[2], session, &set);
    render_input(frame, layout[3], session);
    render_actions(frame, layout[4], &set);
    render_status(frame, layout[5], session);

    if let Some(alert) = &session.alert {
        render_alert(frame, alert.message());
    }
}

fn render_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new("Skyrocket your dream!")
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(banner, area);
}

fn render_rocket(frame: &mut Frame, area: Rect, state: RocketState) {
    let (art, color) = match state {
        RocketState::Idle => (
            vec!["  /\\", " |==|", " |  |", " |  |", "/----\\"],
            Color::DarkGray,
        ),
        RocketState::Shake => (
            vec![" /\\", "|==|", "|  |", "|  |", " ~~ "],
            Color::Yellow,
        ),
        RocketState::Takeoff => (
            vec!["  /\\", " |==|", " |  |", " \\**/", "  **", "  *"],
            Color::LightRed,
        ),
    };
    let lines: Vec<Line> = art.into_iter().map(Line::from).collect();
    let rocket = Paragraph::new(lines)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center);
    frame.render_widget(rocket, area);
}

fn render_mood(frame: &mut Frame, area: Rect, session: &Session, set: &ControlSet) {
    let text = match &session.mood {
        Some(mood) => format!("Your dream \"{mood}\" is going to the moon."),
        None => "No dream loaded yet.".to_string(),
    };
    let mood = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .title(reader_title(set.reader)),
    );
    frame.render_widget(mood, area);
}

fn render_input(frame: &mut Frame, area: Rect, session: &Session) {
    let style = if session.input_enabled() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(session.input.as_str()).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .title("What's your dream?"),
    );
    frame.render_widget(input, area);

    if session.input_enabled() {
        let x = area.x + 1 + session.input.chars().count() as u16;
        frame.set_cursor_position(Position::new(x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

fn render_actions(frame: &mut Frame, area: Rect, set: &ControlSet) {
    let line = Line::from(vec![
        Span::styled(
            format!("[ {} ]", action_title(set.action)),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled(
            "Enter select · Ctrl-R read · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let actions =
        Paragraph::new(line).block(Block::default().borders(Borders::ALL));
    frame.render_widget(actions, area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let status = session.status.as_deref().unwrap_or("");
    let bar = Paragraph::new(status)
        .style(Style::default().fg(Color::Gray))
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(bar, area);
}

fn render_alert(frame: &mut Frame, message: String) {
    let area = centered_rect(60, frame.area());
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to dismiss",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    let alert = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title("Alert"),
    );
    frame.render_widget(alert, area);
}

fn reader_title(control: Control) -> String {
    match control {
        Control::ConnectWallet => format!("{} (Enter)", control.label()),
        Control::ReadMood => format!("{} (Ctrl-R)", control.label()),
        Control::SendOther => format!("{} (o)", control.label()),
        _ => control.label().to_string(),
    }
}

fn action_title(control: Control) -> String {
    match control {
        Control::Submit => format!("{} (Enter)", control.label()),
        _ => control.label().to_string(),
    }
}

/// Center a fixed-height box of the given percentage width.
fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(5),
            Constraint::Min(1),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
