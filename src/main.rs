//! Terminal entry point for the Wirefly Hive combo simulator.
//!
//! Usage:
//!   wirefly [OPTIONS]
//!
//! Examples:
//!   wirefly                        # 2000 silent trials, PNG histograms
//!   wirefly -n 100000 --seed 42    # reproducible batch
//!   wirefly --progress             # live terminal view

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use wirefly::build_info;
use wirefly::constants::LIVE_POLL_MS;
use wirefly::plot::PlotMode;
use wirefly::simulator::{
    run_simulation, run_simulation_observed, summarize, write_json_report, RunStats, SimConfig,
    TrialControl,
};
use wirefly::ui::live_scene::draw_live_scene;

fn main() -> io::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let (config, write_json) = parse_args(&args)?;

    println!("╔══════════════════════════════════════════════════╗");
    println!("║           WIREFLY HIVE COMBO SIMULATOR           ║");
    println!("╚══════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Trials:          {}", config.num_trials);
    println!("  Flips per trial: {}", config.flips_per_trial);
    println!("  Opponent HP:     {}", config.opponent_hp);
    if let Some(seed) = config.seed {
        println!("  Seed:            {}", seed);
    }
    println!();

    let stats = if config.show_progress {
        run_live(&config)?
    } else {
        run_simulation(&config)
    };

    summarize(&stats, &config)?;

    if write_json {
        let path = write_json_report(&stats)?;
        println!("JSON report saved to: {}", path.display());
    }

    Ok(())
}

/// Run the simulation with the live terminal view attached as the trial
/// observer. A stop request from the keyboard ends the run early; whatever
/// statistics were accumulated flow into the normal summary path.
fn run_live(config: &SimConfig) -> io::Result<RunStats> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let total = config.num_trials;
    let mut ui_error: Option<io::Error> = None;

    let stats = run_simulation_observed(config, |trial_idx, stats| {
        let drawn = terminal.draw(|frame| draw_live_scene(frame, stats, trial_idx, total));
        if let Err(e) = drawn {
            ui_error = Some(e);
            return TrialControl::Stop;
        }

        match stop_requested() {
            Ok(false) => TrialControl::Continue,
            Ok(true) => TrialControl::Stop,
            Err(e) => {
                ui_error = Some(e);
                TrialControl::Stop
            }
        }
    });

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    match ui_error {
        Some(e) => Err(e),
        None => Ok(stats),
    }
}

/// Poll the keyboard without blocking the trial loop.
fn stop_requested() -> io::Result<bool> {
    while event::poll(Duration::from_millis(LIVE_POLL_MS))? {
        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(true)
                }
                KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
                _ => {}
            }
        }
    }
    Ok(false)
}

fn parse_args(args: &[String]) -> io::Result<(SimConfig, bool)> {
    let mut config = SimConfig::default();
    let mut write_json = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--trials" => {
                if i + 1 < args.len() {
                    config.num_trials = args[i + 1].parse().unwrap_or(config.num_trials);
                    i += 1;
                }
            }
            "-f" | "--flips" => {
                if i + 1 < args.len() {
                    config.flips_per_trial = args[i + 1].parse().unwrap_or(config.flips_per_trial);
                    i += 1;
                }
            }
            "--hp" => {
                if i + 1 < args.len() {
                    config.opponent_hp = args[i + 1].parse().unwrap_or(config.opponent_hp);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--progress" => {
                config.show_progress = true;
            }
            "--plot-mode" => {
                if i + 1 < args.len() {
                    config.plot_mode = PlotMode::parse(&args[i + 1])?;
                    i += 1;
                }
            }
            "--log" => {
                if i + 1 < args.len() {
                    config.log_name = args[i + 1].clone();
                    i += 1;
                }
            }
            "--overwrite" => {
                config.overwrite_plots = true;
            }
            "--json" => {
                write_json = true;
            }
            "--version" | "-v" => {
                println!(
                    "wirefly {} ({})",
                    env!("CARGO_PKG_VERSION"),
                    build_info::BUILD_STAMP
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'wirefly --help' for usage.");
                std::process::exit(1);
            }
        }
        i += 1;
    }

    Ok((config, write_json))
}

fn print_help() {
    println!("Wirefly - Monte Carlo simulator for the Wirefly Hive coin-flip combo\n");
    println!("Usage: wirefly [OPTIONS]\n");
    println!("Options:");
    println!("  -n, --trials <N>      Number of combo attempts (default: 2000)");
    println!("  -f, --flips <N>       Flip budget per attempt (default: 150)");
    println!("      --hp <N>          Opponent starting HP (default: 4)");
    println!("  -s, --seed <N>        Seed the RNG for a reproducible run");
    println!("      --progress        Show the live terminal view during the run");
    println!("      --plot-mode <M>   'save' PNG histograms or 'show' them in the");
    println!("                        terminal (default: save)");
    println!("      --log <FILE>      Result log file (default: result_log.txt)");
    println!("      --overwrite       Overwrite existing graph files instead of");
    println!("                        numbering new ones");
    println!("      --json            Also write a timestamped JSON report");
    println!("  -v, --version         Show version information");
    println!("  -h, --help            Show this help message");
}
