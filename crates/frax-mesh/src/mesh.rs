//! The 1-D cell lattice along the fracture.

use crate::error::MeshError;

/// Index of the cell where fluid enters the fracture.
///
/// Injection always happens at the left end of the domain; the pressure
/// balance in the engine updates this cell only.
pub const INJECTION_CELL: usize = 0;

/// A one-dimensional mesh of equal-size cells.
///
/// Cell `i` occupies `[i * dx, (i + 1) * dx)` and its recorded center is
/// the **left edge** `i * dx`, not the midpoint. Downstream consumers
/// (the CSV writer, plotting) assume this convention, so it is part of
/// the contract, not an implementation detail.
///
/// # Examples
///
/// ```
/// use frax_mesh::Mesh;
///
/// let mesh = Mesh::new(10, 50.0).unwrap();
/// assert_eq!(mesh.cell_count(), 10);
/// assert_eq!(mesh.dx(), 5.0);
/// assert_eq!(mesh.centers()[3], 15.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Mesh {
    cell_count: usize,
    length: f64,
    dx: f64,
    centers: Vec<f64>,
}

impl Mesh {
    /// Create a mesh with `cell_count` cells spanning `[0, length)`.
    ///
    /// Returns `Err(MeshError::ZeroCellCount)` if `cell_count == 0`, or
    /// `Err(MeshError::InvalidLength)` if `length` is not positive and
    /// finite.
    pub fn new(cell_count: usize, length: f64) -> Result<Self, MeshError> {
        if cell_count == 0 {
            return Err(MeshError::ZeroCellCount);
        }
        if !length.is_finite() || length <= 0.0 {
            return Err(MeshError::InvalidLength { value: length });
        }
        let dx = length / cell_count as f64;
        let centers = (0..cell_count).map(|i| i as f64 * dx).collect();
        Ok(Self {
            cell_count,
            length,
            dx,
            centers,
        })
    }

    /// Number of cells.
    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// Total fracture length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Cell size, `length / cell_count`.
    pub fn dx(&self) -> f64 {
        self.dx
    }

    /// Left-edge-aligned cell coordinates, one per cell in index order.
    pub fn centers(&self) -> &[f64] {
        &self.centers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn reference_geometry() {
        let mesh = Mesh::new(10, 50.0).unwrap();
        assert_eq!(mesh.dx(), 5.0);
        assert_eq!(
            mesh.centers(),
            &[0.0, 5.0, 10.0, 15.0, 20.0, 25.0, 30.0, 35.0, 40.0, 45.0]
        );
    }

    #[test]
    fn single_cell_mesh() {
        let mesh = Mesh::new(1, 50.0).unwrap();
        assert_eq!(mesh.dx(), 50.0);
        assert_eq!(mesh.centers(), &[0.0]);
    }

    #[test]
    fn zero_cells_rejected() {
        assert_eq!(Mesh::new(0, 50.0), Err(MeshError::ZeroCellCount));
    }

    #[test]
    fn non_positive_length_rejected() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = Mesh::new(10, bad);
            assert!(
                matches!(result, Err(MeshError::InvalidLength { .. })),
                "length {bad} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn injection_cell_is_left_end() {
        let mesh = Mesh::new(10, 50.0).unwrap();
        assert_eq!(mesh.centers()[INJECTION_CELL], 0.0);
    }

    proptest! {
        #[test]
        fn centers_are_left_aligned_and_sorted(
            cell_count in 1usize..500,
            length in 1.0e-3f64..1.0e4,
        ) {
            let mesh = Mesh::new(cell_count, length).unwrap();
            prop_assert_eq!(mesh.centers().len(), cell_count);
            prop_assert_eq!(mesh.centers()[0], 0.0);
            for (i, &x) in mesh.centers().iter().enumerate() {
                prop_assert!((x - i as f64 * mesh.dx()).abs() < 1e-9 * length);
            }
            for pair in mesh.centers().windows(2) {
                prop_assert!(pair[0] < pair[1]);
            }
        }

        #[test]
        fn dx_times_count_recovers_length(
            cell_count in 1usize..500,
            length in 1.0e-3f64..1.0e4,
        ) {
            let mesh = Mesh::new(cell_count, length).unwrap();
            prop_assert!((mesh.dx() * cell_count as f64 - length).abs() < 1e-9 * length);
        }
    }
}
