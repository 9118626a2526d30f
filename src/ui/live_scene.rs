//! Live view of a running simulation.

use crate::constants::PROGRESS_BAR_WIDTH;
use crate::simulator::RunStats;
use crate::ui::progress::progress_line;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

/// Draws the live simulation scene: latest success, running maxima, and
/// overall progress through the trial batch.
pub fn draw_live_scene(frame: &mut Frame, stats: &RunStats, current: u32, total: u32) {
    let outer = Block::default()
        .borders(Borders::ALL)
        .title("Wirefly Hive Simulation");

    let area = frame.size();
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Running statistics
            Constraint::Length(3), // Progress gauge
            Constraint::Length(1), // Progress text
            Constraint::Length(1), // Key hint
        ])
        .split(inner);

    draw_stats(frame, chunks[0], stats);
    draw_gauge(frame, chunks[1], current, total);

    frame.render_widget(
        Paragraph::new(progress_line(current, total, PROGRESS_BAR_WIDTH)),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new("q / Esc / Ctrl+C stops the run and keeps partial results")
            .style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}

fn draw_stats(frame: &mut Frame, area: Rect, stats: &RunStats) {
    let lines = vec![
        Line::from(format!("Successes so far: {}", stats.successes)),
        Line::from(""),
        Line::from(format!("Last success wireflies: {}", stats.last_wireflies)),
        Line::from(format!("Last success flips: {}", stats.last_flips)),
        Line::from(format!("Last successful sequence: {}", stats.last_sequence)),
        Line::from(""),
        Line::from(format!("Max wireflies: {}", stats.max_wireflies)),
        Line::from(format!("Max flips: {}", stats.max_flips)),
        Line::from(format!("Max successful sequence: {}", stats.max_sequence)),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Statistics"))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn draw_gauge(frame: &mut Frame, area: Rect, current: u32, total: u32) {
    let ratio = if total == 0 {
        0.0
    } else {
        (current + 1).min(total) as f64 / total as f64
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title("Progress"))
        .gauge_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label(format!("{}/{}", (current + 1).min(total), total))
        .ratio(ratio);

    frame.render_widget(gauge, area);
}
