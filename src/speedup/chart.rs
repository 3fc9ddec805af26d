//! Strong-scaling chart rendering.

use plotters::prelude::*;
use std::error::Error;
use std::path::Path;

use super::SpeedupPoint;
use crate::error::VizError;

const CHART_SIZE: (u32, u32) = (800, 600);

/// Render speedup vs core count as a line with circle markers.
///
/// The y-axis is auto-scaled from the data, unlike the SIR charts whose
/// bounds are fixed policy.
pub fn render(points: &[SpeedupPoint], out_path: &Path) -> Result<(), VizError> {
    render_chart(points, out_path).map_err(|e| VizError::Rendering(e.to_string()))
}

fn render_chart(points: &[SpeedupPoint], out_path: &Path) -> Result<(), Box<dyn Error>> {
    let root = BitMapBackend::new(out_path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max_cores = points.iter().map(|p| p.cores).max().unwrap_or(1);
    let max_speedup = points.iter().map(|p| p.speedup).fold(1.0f64, f64::max);

    let mut chart = ChartBuilder::on(&root)
        .caption("Strong Scaling: Speedup vs Cores", ("sans-serif", 24))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0u32..max_cores + 1, 0.0f64..max_speedup * 1.15)?;

    chart.configure_mesh().x_desc("Número de Cores").y_desc("Speedup (T_seq / T_par)").draw()?;

    if !points.is_empty() {
        chart
            .draw_series(LineSeries::new(points.iter().map(|p| (p.cores, p.speedup)), &BLUE))?
            .label("Medido")
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
        chart.draw_series(points.iter().map(|p| Circle::new((p.cores, p.speedup), 4, BLUE.filled())))?;

        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }

    root.present()?;
    Ok(())
}
