//! # Turncost CLI Application
//!
//! Terminal front end for the turning cost engine. Prompts for the nine
//! process parameters (Enter keeps the shown default), renders the cost
//! breakdown, and writes the collected estimates as CSV and/or XLSX.
//!
//! Batch use:
//!
//! ```text
//! cost_cli --no-prompt --material al-6061 --raw-diameter 50 --format csv
//! ```

mod args;
mod interactive;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use cost_core::export::ExportRow;
use cost_core::file_io::{save_csv, save_workbook};
use cost_core::materials::StockMaterial;
use cost_core::{calculate, CostBreakdown, CostError, MachiningInput};

use args::{CliArgs, Defaults, ExportFormat};

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cost_cli=debug,cost_core=debug,info"))
    } else {
        // Keep the prompt flow clean unless asked for more
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("cost_cli=warn,cost_core=warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

fn main() {
    let args = CliArgs::parse();
    init_logger(args.verbose);
    tracing::debug!("CLI args: {:?}", args);

    if let Err(error) = run(args) {
        eprintln!("Error: {:#}", error);
        let exit_code = match error.downcast_ref::<CostError>() {
            Some(CostError::MaterialNotFound { .. }) => {
                eprintln!("Known material codes: {}", material_codes());
                2
            }
            Some(CostError::FileError { .. }) => 3,
            _ => 1,
        };
        std::process::exit(exit_code);
    }
}

fn material_codes() -> String {
    StockMaterial::ALL.map(|material| material.code()).join(", ")
}

fn run(args: CliArgs) -> anyhow::Result<()> {
    let material = args.resolve_material()?;

    if args.no_prompt {
        run_batch(&args, material)
    } else {
        run_session(&args, material)
    }
}

/// One estimate from flags, no prompting
fn run_batch(args: &CliArgs, material: Option<StockMaterial>) -> anyhow::Result<()> {
    let defaults = Defaults::for_material(material);
    let input = args.build_input(&defaults);

    if let Err(error) = input.validate() {
        interactive::warn_degenerate(&error);
    }
    let breakdown = calculate(&input);

    if args.json {
        print_json(&input, &breakdown)?;
    } else {
        interactive::render_breakdown(&input, &breakdown);
    }

    if let Some(format) = args.format {
        let rows = vec![ExportRow::new(&input, &breakdown)];
        write_exports(&rows, format, &args.output)?;
    }
    Ok(())
}

/// Interactive loop: estimate, collect, estimate again, export on exit
fn run_session(args: &CliArgs, preset: Option<StockMaterial>) -> anyhow::Result<()> {
    println!("Turncost - Machining Cost Estimator");
    println!("===================================");
    println!();

    let material = preset.or_else(interactive::prompt_material);
    if let Some(material) = material {
        let props = material.properties();
        println!(
            "Using {} defaults: {} g/cm³, Rs {}/kg, {} m/min",
            material, props.density_g_per_cm3, props.cost_per_kg, props.cutting_speed_m_per_min
        );
    }

    let mut defaults = Defaults::for_material(material);
    let mut rows: Vec<ExportRow> = Vec::new();

    loop {
        println!();
        let input = interactive::collect_input(&defaults);

        if let Err(error) = input.validate() {
            interactive::warn_degenerate(&error);
        }
        let breakdown = calculate(&input);
        interactive::render_breakdown(&input, &breakdown);
        if args.json {
            print_json(&input, &breakdown)?;
        }

        println!();
        if interactive::prompt_yes_no("Add this estimate to the export sheet?", true) {
            rows.push(ExportRow::new(&input, &breakdown));
        }
        defaults = Defaults::from_input(&input);

        if !interactive::prompt_yes_no("Estimate another part?", false) {
            break;
        }
    }

    if rows.is_empty() {
        println!("No estimates collected, nothing to export.");
        return Ok(());
    }

    println!();
    let format = match args.format {
        Some(format) => Some(format),
        None => interactive::prompt_format(),
    };
    match format {
        Some(format) => write_exports(&rows, format, &args.output)?,
        None => println!("Export skipped."),
    }
    Ok(())
}

fn print_json(input: &MachiningInput, breakdown: &CostBreakdown) -> anyhow::Result<()> {
    let estimate = serde_json::json!({
        "input": input,
        "breakdown": breakdown,
    });
    println!("{}", serde_json::to_string_pretty(&estimate)?);
    Ok(())
}

fn write_exports(rows: &[ExportRow], format: ExportFormat, basename: &str) -> anyhow::Result<()> {
    if format.includes_csv() {
        let path = PathBuf::from(format!("{basename}.csv"));
        save_csv(rows, &path).with_context(|| format!("saving {}", path.display()))?;
        println!("[OK] Saved {} estimate(s) to {}", rows.len(), path.display());
    }
    if format.includes_xlsx() {
        let path = PathBuf::from(format!("{basename}.xlsx"));
        save_workbook(rows, &path).with_context(|| format!("saving {}", path.display()))?;
        println!("[OK] Saved {} estimate(s) to {}", rows.len(), path.display());
    }
    Ok(())
}
