//! Unit conversions applied at the configuration boundary.
//!
//! All conversions happen here, once, before the physics loop — the
//! engine and models only ever see SI-consistent values. Pressures and
//! moduli stay in psi throughout (the width formula divides one by the
//! other, so the unit cancels).

/// Volume of one oilfield barrel in cubic metres.
pub const BBL_TO_M3: f64 = 0.158987;

/// Convert a volumetric rate from barrels/minute to m³/s.
pub fn bbl_per_min_to_m3_per_s(rate: f64) -> f64 {
    rate * BBL_TO_M3 / 60.0
}
