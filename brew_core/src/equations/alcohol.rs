//! # Alcohol Content Formulas
//!
//! Published ABV estimates from original and final specific gravity. All
//! functions take gravities as specific gravity (e.g. `1.050`, not `50`).
//!
//! ## Notation
//!
//! - `OG` = Original gravity (before fermentation)
//! - `FG` = Final gravity (after fermentation)
//! - `°` = Gravity points, `(SG − 1)·1000`
//!
//! ## References
//!
//! - Basic: the homebrew rule `ABV = (OG − FG)·131.25`
//! - C.J.J. Berry, *First Steps in Winemaking*: `ABV = (OG° − FG°) / 7.36`
//! - M. Hall, "Brew by the Numbers", *Zymurgy* Summer 1995
//! - HM Revenue & Customs, Excise Notice 226 (beer duty), section 5

/// Relative density of ethanol to water used for ABV → ABW
pub const ETHANOL_RELATIVE_DENSITY: f64 = 0.79336;

/// Multiplier of the basic formula
pub const BASIC_FACTOR: f64 = 131.25;

/// Gravity-point divisor of Berry's formula
pub const BERRY_DIVISOR: f64 = 7.36;

/// HMRC Notice 226 bands: (upper bound of gravity-point difference, factor)
///
/// Differences at or beyond the last bound keep the last factor.
pub const HMRC_BANDS: [(f64, f64); 7] = [
    (7.0, 0.128),
    (10.5, 0.129),
    (17.3, 0.130),
    (26.2, 0.131),
    (36.1, 0.132),
    (46.6, 0.133),
    (57.2, 0.134),
];

/// Convert specific gravity to gravity points
#[inline]
pub fn gravity_points(sg: f64) -> f64 {
    (sg - 1.0) * 1000.0
}

/// Basic ABV estimate
///
/// # Formula
/// ABV = (OG − FG)·131.25
///
/// # Example
/// ```rust
/// use brew_core::equations::alcohol::abv_basic;
///
/// let abv = abv_basic(1.050, 1.010);
/// assert!((abv - 5.25).abs() < 1e-9);
/// ```
#[inline]
pub fn abv_basic(og: f64, fg: f64) -> f64 {
    (og - fg) * BASIC_FACTOR
}

/// Berry's ABV estimate
///
/// # Formula
/// ABV = (OG° − FG°) / 7.36
#[inline]
pub fn abv_berry(og: f64, fg: f64) -> f64 {
    (gravity_points(og) - gravity_points(fg)) / BERRY_DIVISOR
}

/// Hall's ABV estimate, more accurate at high gravity
///
/// # Formulas
/// - ABW = 76.08·(OG − FG) / (1.775 − OG)
/// - ABV = ABW · FG / 0.794
#[inline]
pub fn abv_hall(og: f64, fg: f64) -> f64 {
    let abw = 76.08 * (og - fg) / (1.775 - og);
    abw * fg / 0.794
}

/// HMRC banded factor for a gravity-point difference
#[inline]
pub fn hmrc_factor(point_difference: f64) -> f64 {
    HMRC_BANDS
        .iter()
        .find(|(upper, _)| point_difference < *upper)
        .map(|(_, factor)| *factor)
        .unwrap_or(HMRC_BANDS[HMRC_BANDS.len() - 1].1)
}

/// HMRC ABV
///
/// # Formula
/// ABV = (OG° − FG°) · factor(OG° − FG°)
///
/// The difference is taken to 0.1 point, the resolution HMRC measures at,
/// so a band edge such as 10.5 is not lost to float error.
#[inline]
pub fn abv_hmrc(og: f64, fg: f64) -> f64 {
    let difference = ((gravity_points(og) - gravity_points(fg)) * 10.0).round() / 10.0;
    difference * hmrc_factor(difference)
}

/// Alcohol by weight from alcohol by volume
#[inline]
pub fn abw_from_abv(abv: f64) -> f64 {
    abv * ETHANOL_RELATIVE_DENSITY
}

/// Apparent attenuation in percent
///
/// # Formula
/// AA = (OG − FG) / (OG − 1) · 100
#[inline]
pub fn apparent_attenuation(og: f64, fg: f64) -> f64 {
    (og - fg) / (og - 1.0) * 100.0
}
