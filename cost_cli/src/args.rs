//! Command-line arguments and prompt defaults.
//!
//! Every process parameter can be set from a flag; anything left unset falls
//! back to the mild-steel shaft defaults (optionally re-based on a material
//! preset). Flags are authoritative in batch mode and become the starting
//! prompts in interactive mode.

use clap::{Parser, ValueEnum};

use cost_core::errors::CostResult;
use cost_core::materials::StockMaterial;
use cost_core::MachiningInput;

#[derive(Debug, Clone, Parser)]
#[command(name = "cost_cli")]
#[command(about = "Machining cost estimator for turned cylindrical parts")]
#[command(version)]
pub struct CliArgs {
    /// Raw bar diameter (mm)
    #[arg(long)]
    pub raw_diameter: Option<f64>,

    /// Raw bar length (mm)
    #[arg(long)]
    pub raw_length: Option<f64>,

    /// Stock density (g/cm³)
    #[arg(long)]
    pub density: Option<f64>,

    /// Stock price (Rs per kg)
    #[arg(long)]
    pub cost_per_kg: Option<f64>,

    /// Finished part diameter (mm)
    #[arg(long)]
    pub final_diameter: Option<f64>,

    /// Cutting speed (m/min)
    #[arg(long)]
    pub cutting_speed: Option<f64>,

    /// Feed per revolution (mm/rev)
    #[arg(long)]
    pub feed_rate: Option<f64>,

    /// Machine hour rate (Rs per hour)
    #[arg(long)]
    pub machine_hour_rate: Option<f64>,

    /// Chamfer allowance (minutes)
    #[arg(long)]
    pub chamfer_time: Option<f64>,

    /// Material preset pre-filling density, price and cutting speed (e.g. MS, SS-304)
    #[arg(long)]
    pub material: Option<String>,

    /// Export format; in batch mode no file is written when absent
    #[arg(long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Output file basename, extension added per format
    #[arg(long, default_value = "machining_cost_results")]
    pub output: String,

    /// Print input and breakdown as pretty JSON
    #[arg(long)]
    pub json: bool,

    /// Run one estimate from flags without prompting
    #[arg(long)]
    pub no_prompt: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,
}

impl CliArgs {
    /// Parse the material preset flag, if any
    pub fn resolve_material(&self) -> CostResult<Option<StockMaterial>> {
        self.material
            .as_deref()
            .map(StockMaterial::from_str_flexible)
            .transpose()
    }

    /// Build the engine input from flags, falling back to defaults
    pub fn build_input(&self, defaults: &Defaults) -> MachiningInput {
        MachiningInput {
            raw_diameter_mm: self.raw_diameter.unwrap_or(defaults.raw_diameter_mm),
            raw_length_mm: self.raw_length.unwrap_or(defaults.raw_length_mm),
            density_g_per_cm3: self.density.unwrap_or(defaults.density_g_per_cm3),
            cost_per_kg: self.cost_per_kg.unwrap_or(defaults.cost_per_kg),
            final_diameter_mm: self.final_diameter.unwrap_or(defaults.final_diameter_mm),
            cutting_speed_m_per_min: self.cutting_speed.unwrap_or(defaults.cutting_speed_m_per_min),
            feed_rate_mm_per_rev: self.feed_rate.unwrap_or(defaults.feed_rate_mm_per_rev),
            machine_hour_rate: self.machine_hour_rate.unwrap_or(defaults.machine_hour_rate),
            chamfer_time_min: self.chamfer_time.unwrap_or(defaults.chamfer_time_min),
        }
    }
}

/// Export artifact selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values
    Csv,
    /// Single-sheet Excel workbook
    Xlsx,
    /// Both artifacts
    Both,
}

impl ExportFormat {
    pub fn includes_csv(&self) -> bool {
        matches!(self, ExportFormat::Csv | ExportFormat::Both)
    }

    pub fn includes_xlsx(&self) -> bool {
        matches!(self, ExportFormat::Xlsx | ExportFormat::Both)
    }
}

/// Prompt defaults: a mild-steel shaft job.
///
/// A material preset re-bases density, price and cutting speed; in a session
/// the previous estimate's entries become the next round's defaults.
#[derive(Debug, Clone, Copy)]
pub struct Defaults {
    pub raw_diameter_mm: f64,
    pub raw_length_mm: f64,
    pub density_g_per_cm3: f64,
    pub cost_per_kg: f64,
    pub final_diameter_mm: f64,
    pub cutting_speed_m_per_min: f64,
    pub feed_rate_mm_per_rev: f64,
    pub machine_hour_rate: f64,
    pub chamfer_time_min: f64,
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            raw_diameter_mm: 38.0,
            raw_length_mm: 257.0,
            density_g_per_cm3: 7.85,
            cost_per_kg: 55.0,
            final_diameter_mm: 36.0,
            cutting_speed_m_per_min: 20.0,
            feed_rate_mm_per_rev: 0.2,
            machine_hour_rate: 800.0,
            chamfer_time_min: 5.0,
        }
    }
}

impl Defaults {
    /// Defaults with the material figures taken from a preset
    pub fn for_material(material: Option<StockMaterial>) -> Self {
        let mut defaults = Defaults::default();
        if let Some(material) = material {
            let props = material.properties();
            defaults.density_g_per_cm3 = props.density_g_per_cm3;
            defaults.cost_per_kg = props.cost_per_kg;
            defaults.cutting_speed_m_per_min = props.cutting_speed_m_per_min;
        }
        defaults
    }

    /// Carry a completed estimate forward as the next round's defaults
    pub fn from_input(input: &MachiningInput) -> Self {
        Defaults {
            raw_diameter_mm: input.raw_diameter_mm,
            raw_length_mm: input.raw_length_mm,
            density_g_per_cm3: input.density_g_per_cm3,
            cost_per_kg: input.cost_per_kg,
            final_diameter_mm: input.final_diameter_mm,
            cutting_speed_m_per_min: input.cutting_speed_m_per_min,
            feed_rate_mm_per_rev: input.feed_rate_mm_per_rev,
            machine_hour_rate: input.machine_hour_rate,
            chamfer_time_min: input.chamfer_time_min,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_job_is_mild_steel_shaft() {
        let defaults = Defaults::default();
        assert_eq!(defaults.raw_diameter_mm, 38.0);
        assert_eq!(defaults.raw_length_mm, 257.0);
        assert_eq!(defaults.final_diameter_mm, 36.0);

        let steel = StockMaterial::MildSteel.properties();
        assert_eq!(defaults.density_g_per_cm3, steel.density_g_per_cm3);
        assert_eq!(defaults.cost_per_kg, steel.cost_per_kg);
        assert_eq!(defaults.cutting_speed_m_per_min, steel.cutting_speed_m_per_min);
    }

    #[test]
    fn test_material_preset_rebases_three_fields() {
        let defaults = Defaults::for_material(Some(StockMaterial::Aluminium6061));
        assert_eq!(defaults.density_g_per_cm3, 2.70);
        assert_eq!(defaults.cost_per_kg, 190.0);
        assert_eq!(defaults.cutting_speed_m_per_min, 120.0);
        // Geometry defaults are untouched
        assert_eq!(defaults.raw_diameter_mm, 38.0);
        assert_eq!(defaults.raw_length_mm, 257.0);
    }

    #[test]
    fn test_flags_override_defaults() {
        let args = CliArgs::parse_from([
            "cost_cli",
            "--no-prompt",
            "--raw-diameter",
            "50",
            "--final-diameter",
            "45",
        ]);
        let input = args.build_input(&Defaults::default());
        assert_eq!(input.raw_diameter_mm, 50.0);
        assert_eq!(input.final_diameter_mm, 45.0);
        assert_eq!(input.raw_length_mm, 257.0);
        assert_eq!(input.machine_hour_rate, 800.0);
    }

    #[test]
    fn test_no_flags_yield_default_job() {
        let args = CliArgs::parse_from(["cost_cli"]);
        let input = args.build_input(&Defaults::default());
        assert_eq!(input.raw_diameter_mm, 38.0);
        assert_eq!(input.chamfer_time_min, 5.0);
        assert_eq!(args.output, "machining_cost_results");
        assert!(args.format.is_none());
    }

    #[test]
    fn test_format_flag() {
        let args = CliArgs::parse_from(["cost_cli", "--format", "both"]);
        let format = args.format.unwrap();
        assert_eq!(format, ExportFormat::Both);
        assert!(format.includes_csv());
        assert!(format.includes_xlsx());

        let csv_only = CliArgs::parse_from(["cost_cli", "--format", "csv"])
            .format
            .unwrap();
        assert!(csv_only.includes_csv());
        assert!(!csv_only.includes_xlsx());
    }

    #[test]
    fn test_material_flag_resolution() {
        let args = CliArgs::parse_from(["cost_cli", "--material", "ss304"]);
        assert_eq!(
            args.resolve_material().unwrap(),
            Some(StockMaterial::Stainless304)
        );

        let bad = CliArgs::parse_from(["cost_cli", "--material", "unobtainium"]);
        let error = bad.resolve_material().unwrap_err();
        assert_eq!(error.error_code(), "MATERIAL_NOT_FOUND");

        let none = CliArgs::parse_from(["cost_cli"]);
        assert_eq!(none.resolve_material().unwrap(), None);
    }

    #[test]
    fn test_session_defaults_carry_forward() {
        let input = MachiningInput {
            raw_diameter_mm: 60.0,
            raw_length_mm: 300.0,
            density_g_per_cm3: 2.7,
            cost_per_kg: 190.0,
            final_diameter_mm: 55.0,
            cutting_speed_m_per_min: 120.0,
            feed_rate_mm_per_rev: 0.3,
            machine_hour_rate: 950.0,
            chamfer_time_min: 2.0,
        };
        let defaults = Defaults::from_input(&input);
        assert_eq!(defaults.raw_diameter_mm, 60.0);
        assert_eq!(defaults.feed_rate_mm_per_rev, 0.3);
        assert_eq!(defaults.machine_hour_rate, 950.0);
    }
}
