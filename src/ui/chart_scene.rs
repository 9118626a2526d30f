//! Terminal bar-chart display for show-mode plots.

use std::collections::BTreeMap;
use std::io;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{
    backend::CrosstermBackend,
    style::{Color, Modifier, Style},
    widgets::{BarChart, Block, Borders},
    Frame, Terminal,
};

/// Render a frequency table as a full-screen bar chart and block until any
/// key is pressed.
pub fn show_histogram(data: &BTreeMap<i32, u32>, title: &str, x_label: &str) -> io::Result<()> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let result = run_chart(&mut terminal, data, title, x_label);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

fn run_chart(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    data: &BTreeMap<i32, u32>,
    title: &str,
    x_label: &str,
) -> io::Result<()> {
    // Bars carry their key as the label, so build the owned labels once
    let bars: Vec<(String, u64)> = data.iter().map(|(k, &v)| (k.to_string(), v as u64)).collect();

    loop {
        terminal.draw(|frame| draw_chart_scene(frame, &bars, title, x_label))?;

        if let Event::Key(_) = event::read()? {
            return Ok(());
        }
    }
}

fn draw_chart_scene(frame: &mut Frame, bars: &[(String, u64)], title: &str, x_label: &str) {
    let labeled: Vec<(&str, u64)> = bars.iter().map(|(k, v)| (k.as_str(), *v)).collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("{} - {} (press any key to continue)", title, x_label)),
        )
        .data(&labeled)
        .bar_width(5)
        .bar_gap(1)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(chart, frame.size());
}
