//! # Brewcode CLI
//!
//! Command-line front end for brew_core: unit conversion, hydrometer
//! correction, ABV and priming sugar. Arguments left out fall back to the
//! brewer's settings file (`.brewcfg` in the working directory by default).
//!
//! Every command prints a short report, or the raw result as JSON with
//! `--json`. Logging goes to stderr; `-v` shows calculator debug output and
//! `RUST_LOG` overrides the level entirely.

mod report;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use brew_core::calculations::abv::{self, AbvInput};
use brew_core::calculations::correction::{self, CorrectionInput};
use brew_core::calculations::priming::{self, PrimingInput};
use brew_core::calculations::CalculationItem;
use brew_core::file_io::{load_settings_or_default, save_settings, DEFAULT_SETTINGS_FILE};
use brew_core::{convert, AbvFormula, BrewError, BrewSettings, Category, SugarType, Unit, CONVERSIONS, FORMULAE};

#[derive(Parser)]
#[command(name = "brew")]
#[command(about = "Brewing unit conversions and calculations")]
#[command(version)]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Settings file to read defaults from
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List unit categories and their units
    Units {
        /// Only this category (volume, mass, temperature, density)
        category: Option<Category>,
    },

    /// List the ABV formulas
    Formulae,

    /// Convert a value between two units
    #[command(allow_negative_numbers = true)]
    Convert {
        value: f64,

        /// Unit to convert from (e.g. "gal", "°F", "brix")
        from: Unit,

        /// Unit to convert to
        to: Unit,

        /// Category both units must belong to [default: category of FROM]
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Correct a density reading for sample temperature
    #[command(allow_negative_numbers = true)]
    Correct {
        /// Instrument reading
        reading: f64,

        /// Temperature of the sample
        sample_temp: f64,

        /// Calibration temperature of the instrument
        #[arg(long)]
        calibration: Option<f64>,

        #[arg(long)]
        temp_unit: Option<Unit>,

        #[arg(long)]
        density_unit: Option<Unit>,
    },

    /// Estimate alcohol content from original and final readings
    #[command(allow_negative_numbers = true)]
    Abv {
        /// Original reading (before fermentation)
        original: f64,

        /// Final reading
        #[arg(value_name = "FINAL")]
        final_reading: f64,

        #[arg(short, long)]
        formula: Option<AbvFormula>,

        /// Temperature the original reading was taken at
        #[arg(long)]
        original_temp: Option<f64>,

        /// Temperature the final reading was taken at
        #[arg(long)]
        final_temp: Option<f64>,

        #[arg(long)]
        calibration: Option<f64>,

        #[arg(long)]
        temp_unit: Option<Unit>,

        #[arg(long)]
        density_unit: Option<Unit>,
    },

    /// Priming sugar for bottle conditioning
    #[command(allow_negative_numbers = true)]
    Priming {
        /// Batch volume
        volume: f64,

        /// Highest temperature the batch reached after fermentation
        temp: f64,

        /// Target carbonation, volumes of CO2
        #[arg(long)]
        co2: Option<f64>,

        #[arg(short, long)]
        sugar: Option<SugarType>,

        #[arg(long)]
        volume_unit: Option<Unit>,

        #[arg(long)]
        temp_unit: Option<Unit>,
    },

    /// Run a calculation described as JSON (file, or stdin when omitted)
    Run { input: Option<PathBuf> },

    /// Show or create the settings file
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand)]
enum SettingsAction {
    /// Print the settings in effect
    Show,

    /// Write a settings file with default values
    Init {
        /// Use US customary units (gal, oz, °F, 60 °F hydrometer)
        #[arg(long)]
        us: bool,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "warn,brew_core=debug",
        _ => "debug,brew_core=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", error_text(&err, cli.json));
            ExitCode::FAILURE
        }
    }
}

/// Text written to stderr for a failed command; exactly one form is printed
fn error_text(err: &anyhow::Error, json: bool) -> String {
    if json {
        if let Some(json) = err
            .downcast_ref::<BrewError>()
            .and_then(|brew_err| serde_json::to_string_pretty(brew_err).ok())
        {
            return json;
        }
    }
    format!("Error: {:#}", err)
}

fn run(cli: &Cli) -> Result<()> {
    let settings_path = cli
        .settings
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));

    match &cli.command {
        Commands::Settings { action } => return run_settings(cli, action, &settings_path),
        Commands::Units { category } => {
            return match category {
                Some(category) if cli.json => emit_json(&CONVERSIONS[category]),
                Some(category) => {
                    report::print_units(std::iter::once((category, &CONVERSIONS[category])));
                    Ok(())
                }
                None if cli.json => emit_json(&*CONVERSIONS),
                None => {
                    report::print_units(CONVERSIONS.iter());
                    Ok(())
                }
            };
        }
        Commands::Formulae => {
            if cli.json {
                return emit_json(&*FORMULAE);
            }
            report::print_formulae();
            return Ok(());
        }
        _ => {}
    }

    let settings = load_settings_or_default(&settings_path)?;
    tracing::debug!(path = %settings_path.display(), "using settings");

    match &cli.command {
        Commands::Convert { value, from, to, category } => {
            let category = category.unwrap_or_else(|| from.category());
            let result = convert(*value, *from, *to, category)?;
            if cli.json {
                emit_json(&result)?;
            } else {
                report::print_conversion(*value, *from, *to, result);
            }
        }

        Commands::Correct {
            reading,
            sample_temp,
            calibration,
            temp_unit,
            density_unit,
        } => {
            let temp_unit = temp_unit.unwrap_or(settings.units.temperature);
            let input = CorrectionInput {
                reading: *reading,
                sample_temp: *sample_temp,
                calibration_temp: calibration_temp(&settings, *calibration, temp_unit)?,
                temp_unit,
                density_unit: density_unit.unwrap_or(settings.units.density),
            };
            let result = correction::calculate(&input)?;
            if cli.json {
                emit_json(&result)?;
            } else {
                report::print_correction(&input, &result);
            }
        }

        Commands::Abv {
            original,
            final_reading,
            formula,
            original_temp,
            final_temp,
            calibration,
            temp_unit,
            density_unit,
        } => {
            let temp_unit = temp_unit.unwrap_or(settings.units.temperature);
            let input = AbvInput::new(*original, *final_reading, formula.unwrap_or(settings.formula))
                .with_density_scale(density_unit.unwrap_or(settings.units.density))
                .with_temperatures(
                    *original_temp,
                    *final_temp,
                    calibration_temp(&settings, *calibration, temp_unit)?,
                    temp_unit,
                );
            let result = abv::calculate(&input)?;
            if cli.json {
                emit_json(&result)?;
            } else {
                report::print_abv(&input, &result);
            }
        }

        Commands::Priming {
            volume,
            temp,
            co2,
            sugar,
            volume_unit,
            temp_unit,
        } => {
            let input = PrimingInput {
                beverage_volume: *volume,
                volume_unit: volume_unit.unwrap_or(settings.units.volume),
                beverage_temp: *temp,
                temp_scale: temp_unit.unwrap_or(settings.units.temperature),
                desired_vol_co2: co2.unwrap_or(settings.target_vol_co2),
                sugar_type: sugar.unwrap_or(settings.sugar),
            };
            let result = priming::calculate(&input)?;
            if cli.json {
                emit_json(&result)?;
            } else {
                report::print_priming(&input, &result, settings.units.mass)?;
            }
        }

        Commands::Run { input } => {
            let item = read_item(input.as_deref())?;
            tracing::debug!(calc_type = item.calc_type(), "running calculation");
            let output = item.run()?;
            // Tagged output is only meaningful as JSON
            emit_json(&output)?;
        }

        Commands::Settings { .. } | Commands::Units { .. } | Commands::Formulae => {}
    }

    Ok(())
}

fn run_settings(cli: &Cli, action: &SettingsAction, path: &Path) -> Result<()> {
    match action {
        SettingsAction::Show => {
            let settings = load_settings_or_default(path)?;
            if cli.json {
                emit_json(&settings)?;
            } else {
                report::print_settings(&settings, path);
            }
        }
        SettingsAction::Init { us, force } => {
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            let settings = if *us {
                BrewSettings::us_customary()
            } else {
                BrewSettings::metric()
            };
            save_settings(&settings, path)?;
            println!("Wrote {}", path.display());
        }
    }
    Ok(())
}

/// Calibration temperature in `temp_unit`, falling back to settings
fn calibration_temp(settings: &BrewSettings, explicit: Option<f64>, temp_unit: Unit) -> Result<f64> {
    match explicit {
        Some(t) => Ok(t),
        None => Ok(convert(
            settings.calibration_temp,
            settings.units.temperature,
            temp_unit,
            Category::Temperature,
        )?),
    }
}

fn read_item(path: Option<&Path>) -> Result<CalculationItem> {
    let json = match path {
        Some(path) if path != Path::new("-") => {
            fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?
        }
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };
    serde_json::from_str(&json).context("parsing calculation JSON")
}

fn emit_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
