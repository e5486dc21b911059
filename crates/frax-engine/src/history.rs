//! Bounded, append-only snapshot history.
//!
//! One (width, pressure) snapshot pair per completed step, stored in two
//! flat buffers with a `cell_count` stride. Capacity is reserved from the
//! configured step count up front so the O(n_steps × cell_count) memory
//! cost is a single visible allocation, not unbounded growth inside the
//! loop. The engine only ever appends; history is read back exclusively
//! by output consumers.

/// Per-step width and pressure snapshots in step order.
#[derive(Clone, Debug, PartialEq)]
pub struct History {
    cell_count: usize,
    max_steps: usize,
    width: Vec<f64>,
    pressure: Vec<f64>,
}

impl History {
    /// Allocate history for up to `max_steps` snapshots of `cell_count`
    /// cells each.
    pub fn with_capacity(max_steps: usize, cell_count: usize) -> Self {
        Self {
            cell_count,
            max_steps,
            width: Vec::with_capacity(max_steps * cell_count),
            pressure: Vec::with_capacity(max_steps * cell_count),
        }
    }

    /// Append one snapshot pair. Both slices must be `cell_count` long.
    pub fn record(&mut self, width: &[f64], pressure: &[f64]) {
        debug_assert_eq!(width.len(), self.cell_count);
        debug_assert_eq!(pressure.len(), self.cell_count);
        self.width.extend_from_slice(width);
        self.pressure.extend_from_slice(pressure);
    }

    /// Number of snapshots recorded so far.
    pub fn len(&self) -> usize {
        self.width.len() / self.cell_count.max(1)
    }

    /// Whether no snapshots have been recorded.
    pub fn is_empty(&self) -> bool {
        self.width.is_empty()
    }

    /// Number of cells per snapshot.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Width snapshot for step `k`, or `None` past the recorded range.
    pub fn width_at(&self, k: usize) -> Option<&[f64]> {
        self.slice_at(&self.width, k)
    }

    /// Pressure snapshot for step `k`, or `None` past the recorded range.
    pub fn pressure_at(&self, k: usize) -> Option<&[f64]> {
        self.slice_at(&self.pressure, k)
    }

    /// Width snapshots in step order (index 0 = earliest).
    pub fn width_steps(&self) -> impl Iterator<Item = &[f64]> {
        self.width.chunks_exact(self.cell_count)
    }

    /// Pressure snapshots in step order (index 0 = earliest).
    pub fn pressure_steps(&self) -> impl Iterator<Item = &[f64]> {
        self.pressure.chunks_exact(self.cell_count)
    }

    /// Bytes reserved for snapshot storage: `2 * max_steps * cell_count`
    /// f64 values.
    pub fn memory_bytes(&self) -> usize {
        2 * self.max_steps * self.cell_count * std::mem::size_of::<f64>()
    }

    fn slice_at<'a>(&self, buf: &'a [f64], k: usize) -> Option<&'a [f64]> {
        let start = k.checked_mul(self.cell_count)?;
        let end = start + self.cell_count;
        buf.get(start..end)
    }
}
