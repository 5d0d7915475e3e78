//! # Brewing Equations
//!
//! The empirical formulas the calculators are built on, kept in one place so
//! every coefficient can be checked against its published source.
//!
//! ## Modules
//!
//! - [`density`] - SG ↔ Brix/Plato/Baumé and hydrometer temperature correction
//! - [`alcohol`] - ABV formulas (basic, Berry, Hall, HMRC), ABW, attenuation
//! - [`carbonation`] - Residual CO2 and dextrose priming
//!
//! ## Conventions
//!
//! - Gravities are specific gravity (water = 1.000)
//! - Temperatures are in °F where the published fit is in °F; the
//!   calculators convert from Celsius before calling in
//! - No function validates its input: NaN in, NaN out

pub mod alcohol;
pub mod carbonation;
pub mod density;

pub use alcohol::{
    abv_basic,
    abv_berry,
    abv_hall,
    abv_hmrc,
    abw_from_abv,
    apparent_attenuation,
    ETHANOL_RELATIVE_DENSITY,
};

pub use carbonation::{
    dextrose_for_deficit,
    residual_co2_volumes,
};

pub use density::{
    baume_to_sg,
    brix_to_sg,
    corrected_gravity,
    plato_to_sg,
    sg_to_baume,
    sg_to_brix,
    sg_to_plato,
};
