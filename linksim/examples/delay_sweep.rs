//! Runs the utilization sweep, prints the leading rows, and saves the
//! results as CSV plus a comparison chart.
//!
//! ```bash
//! cargo run --example delay_sweep --features viz
//! ```

use linksim::metrics::export::export_csv;
use linksim::prelude::*;
use linksim::viz::charts::delay_sweep::create_delay_sweep_chart;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    linksim::core::init_simulation_logging();

    let config = SweepConfig {
        rho_values: (1..25).map(|i| i as f64 / 25.0).collect(),
        sim_time: 100.0,
        seed: 42,
        ..SweepConfig::default()
    };

    let table = run_sweep(&config)?;

    println!(
        "{:>5}  {:>14}  {:>14}  {:>14}",
        "rho", "sim M/M/1 (s)", "sim M/D/1 (s)", "analytic (s)"
    );
    for row in table.rows().iter().take(10) {
        println!(
            "{:>5.2}  {:>14}  {:>14}  {:>14}",
            row.rho,
            row.sim_total_mm1_s.to_string(),
            row.sim_total_md1_s.to_string(),
            row.analytic_mm1_total_s.to_string()
        );
    }

    export_csv(&table, "transmission_vs_congestion.csv")?;
    create_delay_sweep_chart(&table, "transmission_vs_congestion.png")?;
    println!("Results saved to transmission_vs_congestion.csv");

    Ok(())
}
