//! # Density Scale Formulas
//!
//! Empirical relations between specific gravity and the sugar-content scales
//! used by brewers and winemakers, plus the hydrometer temperature correction.
//!
//! ## Notation
//!
//! - `SG` = Specific gravity (relative to water, base of the density category)
//! - `°Bx` = Degrees Brix (g sucrose per 100 g solution, refractometer scale)
//! - `°P` = Degrees Plato (g extract per 100 g wort, ASBC)
//! - `°Bé` = Degrees Baumé, US scale for liquids heavier than water
//! - `T` = Temperature in °F (the published correction fit uses Fahrenheit)
//!
//! ## Valid Range
//!
//! The Brix and Plato polynomials are fitted over roughly 0–40 °Bx
//! (0.980–1.170 SG). Inputs outside that range are still evaluated; the
//! result is an extrapolation, not an error. Because the forward polynomial
//! and the reverse rational approximation are separate fits, a round trip
//! through either scale drifts by up to ~2e-4 SG at the ends of the range.
//!
//! ## References
//!
//! - ASBC Methods of Analysis, Table 1: Extract in Wort and Beer
//! - Lincoln, "Brix/SG approximation", as popularised by Brewer's Friend
//! - Lyons, hydrometer correction fit (HBD archive), 59–100 °F calibration

// =============================================================================
// BRIX
// =============================================================================

/// Specific gravity to degrees Brix
///
/// # Formula
/// °Bx = ((182.4601·SG − 775.6821)·SG + 1262.7794)·SG − 669.5622
///
/// # Example
/// ```rust
/// use brew_core::equations::density::sg_to_brix;
///
/// let brix = sg_to_brix(1.050);
/// assert!((brix - 12.39).abs() < 0.01);
/// ```
#[inline]
pub fn sg_to_brix(sg: f64) -> f64 {
    ((182.4601 * sg - 775.6821) * sg + 1262.7794) * sg - 669.5622
}

/// Degrees Brix to specific gravity
///
/// # Formula
/// SG = 1 + °Bx / (258.6 − (°Bx / 258.2)·227.1)
#[inline]
pub fn brix_to_sg(brix: f64) -> f64 {
    extract_to_sg(brix)
}

// =============================================================================
// PLATO
// =============================================================================

/// Specific gravity to degrees Plato (ASBC cubic)
///
/// # Formula
/// °P = −616.868 + 1111.14·SG − 630.272·SG² + 135.997·SG³
#[inline]
pub fn sg_to_plato(sg: f64) -> f64 {
    -616.868 + 1111.14 * sg - 630.272 * sg.powi(2) + 135.997 * sg.powi(3)
}

/// Degrees Plato to specific gravity
///
/// Shares the rational approximation used for Brix; the two scales agree to
/// within ~0.1° over the brewing range.
#[inline]
pub fn plato_to_sg(plato: f64) -> f64 {
    extract_to_sg(plato)
}

#[inline]
fn extract_to_sg(degrees: f64) -> f64 {
    1.0 + degrees / (258.6 - (degrees / 258.2) * 227.1)
}

// =============================================================================
// BAUMÉ
// =============================================================================

/// Modulus of the US Baumé scale for liquids heavier than water
pub const BAUME_MODULUS: f64 = 145.0;

/// Specific gravity to degrees Baumé
///
/// # Formula
/// °Bé = 145 − 145 / SG
#[inline]
pub fn sg_to_baume(sg: f64) -> f64 {
    BAUME_MODULUS - BAUME_MODULUS / sg
}

/// Degrees Baumé to specific gravity
///
/// # Formula
/// SG = 145 / (145 − °Bé)
#[inline]
pub fn baume_to_sg(baume: f64) -> f64 {
    BAUME_MODULUS / (BAUME_MODULUS - baume)
}

// =============================================================================
// HYDROMETER TEMPERATURE CORRECTION
// =============================================================================

/// Relative expansion term of the hydrometer correction fit
///
/// # Formula
/// f(T) = 1.00130346 − 0.000134722124·T + 0.00000204052596·T² − 0.00000000232820948·T³
///
/// # Arguments
/// * `temp_f` - Temperature in °F
#[inline]
pub fn hydrometer_expansion(temp_f: f64) -> f64 {
    1.00130346 - 0.000134722124 * temp_f + 0.00000204052596 * temp_f.powi(2)
        - 0.00000000232820948 * temp_f.powi(3)
}

/// Correct a specific gravity read at `sample_f` on a hydrometer calibrated at `calibration_f`
///
/// # Formula
/// SG_corr = SG · f(T_sample) / f(T_cal)
///
/// # Arguments
/// * `sg` - Measured specific gravity
/// * `sample_f` - Sample temperature in °F
/// * `calibration_f` - Calibration temperature in °F
///
/// # Returns
/// Specific gravity the hydrometer would show at its calibration temperature
///
/// # Example
/// ```rust
/// use brew_core::equations::density::corrected_gravity;
///
/// // 1.050 read at 100 °F on a 60 °F hydrometer
/// let sg = corrected_gravity(1.050, 100.0, 60.0);
/// assert!((sg - 1.0561).abs() < 0.0001);
/// ```
#[inline]
pub fn corrected_gravity(sg: f64, sample_f: f64, calibration_f: f64) -> f64 {
    sg * hydrometer_expansion(sample_f) / hydrometer_expansion(calibration_f)
}
