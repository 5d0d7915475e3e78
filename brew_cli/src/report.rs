//! Human-readable reports for each command.

use std::path::Path;

use anyhow::Result;

use brew_core::calculations::abv::{AbvInput, AbvResult};
use brew_core::calculations::correction::{CorrectionInput, CorrectionResult};
use brew_core::calculations::priming::{PrimingInput, PrimingResult};
use brew_core::registry::CategoryTable;
use brew_core::{convert, BrewSettings, Category, Unit, FORMULAE};

const RULE: &str = "═══════════════════════════════════════";

fn banner(title: &str) {
    println!("{}", RULE);
    println!("  {}", title);
    println!("{}", RULE);
    println!();
}

/// Value formatted with the unit's display precision
fn fmt_value(value: f64, unit: Unit) -> String {
    format!("{:.*} {}", unit.precision() as usize, value, unit.id())
}

pub fn print_units<'a>(tables: impl Iterator<Item = (&'a Category, &'a CategoryTable)>) {
    for (category, table) in tables {
        println!("{} ({}, base: {})", table.label, category, table.base);
        for unit in &table.units {
            println!("  {:<10} {:<20} step {}", unit.id, unit.label, unit.step);
        }
        println!();
    }
}

pub fn print_formulae() {
    println!("{:<12} {:<18} Reference", "Id", "Name");
    println!("{}", "-".repeat(70));
    for (formula, entry) in FORMULAE.iter() {
        println!("{:<12} {:<18} {}", formula.id(), entry.label, entry.reference);
    }
}

pub fn print_conversion(value: f64, from: Unit, to: Unit, result: f64) {
    println!("{} = {}", fmt_value(value, from), fmt_value(result, to));
}

pub fn print_correction(input: &CorrectionInput, result: &CorrectionResult) {
    banner("HYDROMETER CORRECTION");
    println!("Input:");
    println!("  Reading:     {}", fmt_value(input.reading, input.density_unit));
    println!("  Sample:      {}", fmt_value(input.sample_temp, input.temp_unit));
    println!("  Calibration: {}", fmt_value(input.calibration_temp, input.temp_unit));
    println!();
    println!("Result:");
    println!("  Corrected:   {}", fmt_value(result.corrected, input.density_unit));
    println!(
        "  SG {:.4} -> {:.4} ({:+.1} points)",
        result.measured_sg,
        result.corrected_sg,
        result.correction_points()
    );
}

pub fn print_abv(input: &AbvInput, result: &AbvResult) {
    banner("ALCOHOL CONTENT");
    println!("Input:");
    println!("  Original:    {}", fmt_value(input.original_reading, input.density_scale));
    println!("  Final:       {}", fmt_value(input.final_reading, input.density_scale));
    println!("  Formula:     {} ({})", input.formula.label(), input.formula.id());
    println!();
    println!("Gravity used:");
    println!("  OG {:.4}  FG {:.4}", result.original_sg, result.final_sg);
    println!();
    println!("Result:");
    println!("  ABV:         {:.2} %", result.abv);
    println!("  ABW:         {:.2} %", result.abw);
    println!("  Attenuation: {:.1} %", result.apparent_attenuation);
}

pub fn print_priming(input: &PrimingInput, result: &PrimingResult, mass_unit: Unit) -> Result<()> {
    let mass = convert(result.mass_g, Unit::Gram, mass_unit, Category::Mass)?;

    banner("PRIMING SUGAR");
    println!("Input:");
    println!("  Batch:       {}", fmt_value(input.beverage_volume, input.volume_unit));
    println!("  Temperature: {}", fmt_value(input.beverage_temp, input.temp_scale));
    println!("  Target CO2:  {:.2} vol", input.desired_vol_co2);
    println!("  Sugar:       {}", input.sugar_type.label());
    println!();
    println!("Result:");
    println!("  Residual:    {:.2} vol", result.residual_vol_co2);
    println!("  Sugar:       {}", fmt_value(mass, mass_unit));
    println!("  Dissolved:   {:.0} ml", result.volume_ml);
    println!("  New volume:  {:.2} l", result.new_volume_l);
    println!("  Gravity:     +{:.4} SG", result.delta_sg);
    Ok(())
}

pub fn print_settings(settings: &BrewSettings, path: &Path) {
    let source = if path.exists() { "file" } else { "defaults, no file" };
    println!("Settings: {} ({})", path.display(), source);
    println!("  Version:      {}", settings.version);
    println!("  Volume:       {}", settings.units.volume.label());
    println!("  Mass:         {}", settings.units.mass.label());
    println!("  Temperature:  {}", settings.units.temperature.label());
    println!("  Density:      {}", settings.units.density.label());
    println!(
        "  Calibration:  {}",
        fmt_value(settings.calibration_temp, settings.units.temperature)
    );
    println!("  ABV formula:  {}", settings.formula.id());
    println!("  Sugar:        {}", settings.sugar.id());
    println!("  Target CO2:   {:.2} vol", settings.target_vol_co2);
}
