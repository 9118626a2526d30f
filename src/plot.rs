//! Histogram rendering and graph-file naming.

use std::collections::BTreeMap;
use std::error::Error;
use std::io;
use std::path::{Path, PathBuf};

use plotters::prelude::*;

use crate::constants::{PLOT_HEIGHT, PLOT_WIDTH};

/// How rendered histograms are delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlotMode {
    /// Write a PNG, deriving a numbered sibling name on collision.
    Save,
    /// Draw the chart in the terminal and wait for a key press.
    Show,
}

impl PlotMode {
    /// Parse a CLI mode string.
    pub fn parse(value: &str) -> io::Result<Self> {
        match value {
            "save" => Ok(Self::Save),
            "show" => Ok(Self::Show),
            other => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!(
                    "plot mode must be either show or save (provided value: {})",
                    other
                ),
            )),
        }
    }
}

/// Derive a path that does not collide with an existing file.
///
/// Probes `name (1).ext`, `name (2).ext`, … until a free name is found;
/// a path with no existing file comes back unchanged.
pub fn next_free_path(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let ext = path.extension().and_then(|s| s.to_str());

    let mut counter = 1u32;
    loop {
        let name = match ext {
            Some(ext) => format!("{} ({}).{}", stem, counter, ext),
            None => format!("{} ({})", stem, counter),
        };
        let candidate = path.with_file_name(name);
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Render a labeled bar chart of `data` to a PNG file.
///
/// Returns the path actually written, which differs from `path` when the
/// target exists and `overwrite` is false.
pub fn save_histogram(
    data: &BTreeMap<i32, u32>,
    title: &str,
    x_label: &str,
    path: &Path,
    overwrite: bool,
) -> io::Result<PathBuf> {
    let target = if overwrite {
        path.to_path_buf()
    } else {
        next_free_path(path)
    };

    draw_histogram(data, title, x_label, &target)
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))?;
    Ok(target)
}

fn draw_histogram(
    data: &BTreeMap<i32, u32>,
    title: &str,
    x_label: &str,
    target: &Path,
) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(target, (PLOT_WIDTH, PLOT_HEIGHT)).into_drawing_area();
    root.fill(&WHITE)?;

    // BTreeMap iteration is key-ordered, so bars come out sorted
    let (x_min, x_max) = match (data.keys().next(), data.keys().next_back()) {
        (Some(&lo), Some(&hi)) => (lo as f64, hi as f64),
        _ => (0.0, 1.0),
    };
    let y_max = data.values().copied().max().unwrap_or(0).max(1) as f64;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min - 1.0)..(x_max + 1.0), 0.0..(y_max * 1.15))?;

    chart
        .configure_mesh()
        .x_desc(x_label)
        .y_desc("Number of occurrences")
        .x_label_formatter(&|x| format!("{:.0}", x))
        .y_label_formatter(&|y| format!("{:.0}", y))
        .draw()?;

    chart.draw_series(data.iter().map(|(&k, &v)| {
        Rectangle::new(
            [(k as f64 - 0.4, 0.0), (k as f64 + 0.4, v as f64)],
            BLUE.filled(),
        )
    }))?;

    // Count annotation above each bar
    chart.draw_series(data.iter().map(|(&k, &v)| {
        Text::new(
            v.to_string(),
            (k as f64 - 0.1, v as f64 + y_max * 0.02),
            ("sans-serif", 16),
        )
    }))?;

    root.present()?;
    Ok(())
}
