//! Long-format CSV result writer.

use std::io::Write;

use frax_engine::History;
use frax_mesh::Mesh;

use crate::error::OutputError;

/// Writes simulation snapshots to a CSV sink.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`. The header row is written
/// immediately on construction.
///
/// # Examples
///
/// ```
/// use frax_mesh::Mesh;
/// use frax_output::CsvWriter;
///
/// let mesh = Mesh::new(2, 10.0).unwrap();
/// let mut buf = Vec::new();
/// let mut writer = CsvWriter::new(&mut buf, &mesh).unwrap();
/// writer.write_step(1.0, &[0.001, 0.0], &[5100.0, 5000.0]).unwrap();
/// assert_eq!(writer.rows_written(), 2);
/// drop(writer);
///
/// let text = String::from_utf8(buf).unwrap();
/// assert!(text.starts_with("x,time,width,pressure\n"));
/// assert!(text.contains("0,1,0.001,5100\n"));
/// ```
pub struct CsvWriter<W: Write> {
    writer: W,
    centers: Vec<f64>,
    rows_written: u64,
}

impl<W: Write> CsvWriter<W> {
    /// Create a new CSV writer, immediately writing the header row.
    pub fn new(mut writer: W, mesh: &Mesh) -> Result<Self, OutputError> {
        writeln!(writer, "x,time,width,pressure")?;
        Ok(Self {
            writer,
            centers: mesh.centers().to_vec(),
            rows_written: 0,
        })
    }

    /// Write one snapshot: a row per cell at the given time.
    pub fn write_step(
        &mut self,
        time: f64,
        width: &[f64],
        pressure: &[f64],
    ) -> Result<(), OutputError> {
        for slice in [width, pressure] {
            if slice.len() != self.centers.len() {
                return Err(OutputError::CellCountMismatch {
                    expected: self.centers.len(),
                    found: slice.len(),
                });
            }
        }
        for (i, &x) in self.centers.iter().enumerate() {
            writeln!(self.writer, "{x},{time},{},{}", width[i], pressure[i])?;
            self.rows_written += 1;
        }
        Ok(())
    }

    /// Write a full recorded history, step by step.
    ///
    /// The `time` column carries the step start time, so the first
    /// snapshot lands at `0` and the last at `(len - 1) * time_step`.
    pub fn write_history(&mut self, history: &History, time_step: f64) -> Result<(), OutputError> {
        for (k, (width, pressure)) in history
            .width_steps()
            .zip(history.pressure_steps())
            .enumerate()
        {
            let time = k as f64 * time_step;
            self.write_step(time, width, pressure)?;
        }
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), OutputError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Number of data rows written so far (the header is not counted).
    pub fn rows_written(&self) -> u64 {
        self.rows_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
