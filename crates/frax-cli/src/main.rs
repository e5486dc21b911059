//! Command-line runner: load a JSON configuration, run the simulation,
//! and export the snapshot history as CSV.

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

use frax::prelude::*;
use structopt::StructOpt;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "frax",
    about = "Runs a simplified 1-D hydraulic fracturing simulation"
)]
struct Options {
    /// Path to the JSON simulation configuration.
    config: PathBuf,

    /// Output CSV path.
    #[structopt(short, long, default_value = "results.csv")]
    output: PathBuf,

    /// Number of mesh cells.
    #[structopt(long, default_value = "100")]
    cells: usize,

    /// Fracture half-length covered by the mesh, in metres.
    #[structopt(long, default_value = "50.0")]
    length: f64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let options = Options::from_args();

    // Load and validate the configuration up front.
    let file = File::open(&options.config)?;
    let config: SimConfig = serde_json::from_reader(file)?;
    config.validate()?;

    let mesh = Mesh::new(options.cells, options.length)?;
    let mut engine = SimulationEngine::new(&config, &mesh)?;

    // Run to completion.
    let run_start = Instant::now();
    let summary = engine.run()?;
    let elapsed = run_start.elapsed();

    // Export every recorded snapshot.
    let sink = BufWriter::new(File::create(&options.output)?);
    let mut writer = CsvWriter::new(sink, &mesh)?;
    writer.write_history(engine.history(), config.simulation.time_step_s)?;
    writer.flush()?;

    let metrics = &summary.last_metrics;
    println!(
        "completed {} steps over {} cells in {:.3} s",
        summary.steps_executed,
        mesh.cell_count(),
        elapsed.as_secs_f64()
    );
    println!(
        "last step: {} µs total (leak-off {} µs, proppant {} µs, width {} µs)",
        metrics.total_us, metrics.leakoff_us, metrics.proppant_us, metrics.width_us
    );
    println!(
        "history: {} snapshots, {} bytes; wrote {} rows to {}",
        engine.history().len(),
        metrics.history_bytes,
        writer.rows_written(),
        options.output.display()
    );
    Ok(())
}
