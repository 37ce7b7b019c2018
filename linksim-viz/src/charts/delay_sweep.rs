//! Delay-versus-utilization comparison chart

use crate::charts::ChartConfig;
use crate::error::VizError;
use linksim_metrics::delay::Delay;
use linksim_metrics::experiment::{ExperimentRow, ExperimentTable};
use plotters::prelude::*;
use std::path::Path;

/// Create the delay-versus-utilization comparison chart
///
/// Plots the simulated M/M/1 and M/D/1 mean total delay together with the
/// analytic M/M/1 curve (dashed), one point per utilization value. Rows
/// whose delay is infinite or undefined are skipped point-wise.
///
/// # Arguments
/// * `table` - Sweep results to visualize
/// * `output_path` - Output file path (PNG or other bitmap formats)
///
/// # Example
/// ```no_run
/// use linksim_metrics::experiment::{run_sweep, SweepConfig};
/// use linksim_viz::charts::delay_sweep::create_delay_sweep_chart;
///
/// let table = run_sweep(&SweepConfig::default()).unwrap();
/// create_delay_sweep_chart(&table, "sweep.png").unwrap();
/// ```
pub fn create_delay_sweep_chart(
    table: &ExperimentTable,
    output_path: impl AsRef<Path>,
) -> Result<(), VizError> {
    let config = ChartConfig::new("Transmission vs Congestion Delay")
        .x_label("Utilization (rho)")
        .y_label("Average total delay (s)");

    create_delay_sweep_chart_with_config(table, output_path, config)
}

/// Create the delay sweep chart with custom configuration
pub fn create_delay_sweep_chart_with_config(
    table: &ExperimentTable,
    output_path: impl AsRef<Path>,
    config: ChartConfig,
) -> Result<(), VizError> {
    if table.is_empty() {
        return Err(VizError::InvalidConfiguration(
            "No rows available for delay sweep chart".to_string(),
        ));
    }

    let sim_mm1 = finite_series(table, |row| row.sim_total_mm1_s);
    let sim_md1 = finite_series(table, |row| row.sim_total_md1_s);
    let analytic = finite_series(table, |row| row.analytic_mm1_total_s);

    let max_delay = sim_mm1
        .iter()
        .chain(&sim_md1)
        .chain(&analytic)
        .map(|(_, delay)| *delay)
        .fold(0.0f64, f64::max);
    if max_delay <= 0.0 {
        return Err(VizError::InvalidConfiguration(
            "No finite delay values to plot".to_string(),
        ));
    }
    let y_max = max_delay * 1.1;

    let output_path = output_path.as_ref();
    let root = BitMapBackend::new(output_path, (config.width, config.height)).into_drawing_area();

    root.fill(&WHITE)
        .map_err(|e| VizError::RenderingError(format!("Failed to fill background: {e}")))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(10)
        .x_label_area_size(60)
        .y_label_area_size(80)
        .build_cartesian_2d(0.0..1.0, 0.0..y_max)
        .map_err(|e| VizError::RenderingError(format!("Failed to build chart: {e}")))?;

    chart
        .configure_mesh()
        .x_desc(&config.x_label)
        .y_desc(&config.y_label)
        .draw()
        .map_err(|e| VizError::RenderingError(format!("Failed to configure mesh: {e}")))?;

    chart
        .draw_series(LineSeries::new(sim_mm1, &BLUE))
        .map_err(|e| VizError::RenderingError(format!("Failed to draw series: {e}")))?
        .label("Simulated M/M/1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .draw_series(LineSeries::new(sim_md1, &GREEN))
        .map_err(|e| VizError::RenderingError(format!("Failed to draw series: {e}")))?
        .label("Simulated M/D/1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .draw_series(DashedLineSeries::new(analytic, 6, 4, RED.into()))
        .map_err(|e| VizError::RenderingError(format!("Failed to draw series: {e}")))?
        .label("Analytic M/M/1")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(|e| VizError::RenderingError(format!("Failed to draw legend: {e}")))?;

    root.present()
        .map_err(|e| VizError::ExportFailed(format!("Failed to save chart: {e}")))?;

    Ok(())
}

fn finite_series(
    table: &ExperimentTable,
    value: impl Fn(&ExperimentRow) -> Delay,
) -> Vec<(f64, f64)> {
    table
        .rows()
        .iter()
        .filter_map(|row| value(row).as_f64().map(|delay| (row.rho, delay)))
        .collect()
}
