//! Chart rendering for the daily S/I/R series.
//!
//! Both the animated and the static renderings draw the same three-series
//! overlay on a fixed axis domain taken from the configuration, so frames
//! never jitter as the plotted prefix grows.

use plotters::coord::Shift;
use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::{DailyRecord, frame_title};
use crate::config::VizConfig;
use crate::error::VizError;

/// Output size of the SIR charts in pixels.
const CHART_SIZE: (u32, u32) = (1000, 600);

/// Render the series as an animated GIF, one frame per sampled prefix.
///
/// Frames are taken every `config.frame_stride` records; the final record is
/// always included so the last frame plots the complete series. An empty
/// series still produces a single frame with empty axes.
pub fn render_animation(records: &[DailyRecord], config: &VizConfig, out_path: &Path) -> Result<(), VizError> {
    render_animation_frames(records, config, out_path).map_err(|e| VizError::Rendering(e.to_string()))
}

fn render_animation_frames(records: &[DailyRecord], config: &VizConfig, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::gif(out_path, CHART_SIZE, config.frame_interval_ms)?.into_drawing_area();

    for frame in frame_indices(records.len(), config.frame_stride) {
        let prefix = if records.is_empty() {
            records
        } else {
            &records[..=frame.min(records.len() - 1)]
        };
        let day = prefix.last().map(|r| r.day).unwrap_or(0);

        draw_sir_series(&root, prefix, &frame_title(day), config)?;
        root.present()?;
    }

    Ok(())
}

/// Render the full series as a single static PNG.
pub fn render_static(records: &[DailyRecord], config: &VizConfig, title: &str, out_path: &Path) -> Result<(), VizError> {
    render_static_chart(records, config, title, out_path).map_err(|e| VizError::Rendering(e.to_string()))
}

fn render_static_chart(records: &[DailyRecord], config: &VizConfig, title: &str, out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    draw_sir_series(&root, records, title, config)?;
    root.present()?;
    Ok(())
}

/// Record indices to sample as animation frames.
///
/// Every `stride`-th index, with the last index appended when the stride
/// does not land on it. An empty series maps to a single frame.
fn frame_indices(len: usize, stride: usize) -> Vec<usize> {
    let stride = stride.max(1);
    if len == 0 {
        return vec![0];
    }

    let mut frames: Vec<usize> = (0..len).step_by(stride).collect();
    if frames.last() != Some(&(len - 1)) {
        frames.push(len - 1);
    }
    frames
}

/// Draw the three-series overlay onto a drawing area.
fn draw_sir_series(root: &DrawingArea<BitMapBackend<'_>, Shift>, records: &[DailyRecord], title: &str, config: &VizConfig) -> Result<(), Box<dyn Error>> {
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(root)
        .caption(title, ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..config.max_day, 0u64..config.population_cap)?;

    chart.configure_mesh().x_desc("Día").y_desc("Población").draw()?;

    if records.is_empty() {
        return Ok(());
    }

    chart
        .draw_series(LineSeries::new(records.iter().map(|r| (r.day, r.susceptible)), &BLUE))?
        .label("Susceptibles")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(LineSeries::new(records.iter().map(|r| (r.day, r.infected)), &RED))?
        .label("Infectados")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));
    chart
        .draw_series(LineSeries::new(records.iter().map(|r| (r.day, r.recovered)), &GREEN))?
        .label("Recuperados")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
