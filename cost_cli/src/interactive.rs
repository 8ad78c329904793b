//! Interactive prompts and terminal rendering.
//!
//! Prompts show the current default in brackets and accept Enter to keep it.
//! Entries outside the supported range are clamped with a printed notice; the
//! ranges live here in the adapter, the engine never assumes them.

use std::io::{self, BufRead, Write};

use cost_core::materials::StockMaterial;
use cost_core::{CostBreakdown, CostError, MachiningInput};

use crate::args::{Defaults, ExportFormat};

/// Parse one prompt entry: Enter, garbage or a non-finite number keeps the
/// default, out-of-range values clamp. Returns the value and whether
/// clamping happened.
fn parse_entry(entry: &str, default: f64, min: f64, max: f64) -> (f64, bool) {
    let parsed = entry
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .unwrap_or(default);
    let clamped = parsed.clamp(min, max);
    (clamped, clamped != parsed)
}

fn prompt_f64(label: &str, default: f64, min: f64, max: f64) -> f64 {
    print!("{} [{}]: ", label, default);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut entry = String::new();
    if io::stdin().lock().read_line(&mut entry).is_err() {
        return default;
    }

    let (value, was_clamped) = parse_entry(&entry, default, min, max);
    if was_clamped {
        println!("  (clamped to {}, supported range {}-{})", value, min, max);
    }
    value
}

pub fn prompt_yes_no(label: &str, default: bool) -> bool {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    print!("{} {}: ", label, hint);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut entry = String::new();
    if io::stdin().lock().read_line(&mut entry).is_err() {
        return default;
    }

    match entry.trim().to_lowercase().as_str() {
        "y" | "yes" => true,
        "n" | "no" => false,
        _ => default,
    }
}

/// Offer the stock material presets. Enter keeps manual entry.
pub fn prompt_material() -> Option<StockMaterial> {
    println!("Stock material presets:");
    for (i, material) in StockMaterial::ALL.iter().enumerate() {
        let props = material.properties();
        println!(
            "  {}. {:<20} {:>5.2} g/cm³  Rs {:>7.2}/kg  {:>5.1} m/min  [{}]",
            i + 1,
            material.display_name(),
            props.density_g_per_cm3,
            props.cost_per_kg,
            props.cutting_speed_m_per_min,
            material.code()
        );
    }
    print!("Select material (number or code, Enter for manual entry): ");
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut entry = String::new();
    if io::stdin().lock().read_line(&mut entry).is_err() {
        return None;
    }
    let entry = entry.trim();
    if entry.is_empty() {
        return None;
    }

    if let Ok(index) = entry.parse::<usize>() {
        if (1..=StockMaterial::ALL.len()).contains(&index) {
            return Some(StockMaterial::ALL[index - 1]);
        }
    }

    match StockMaterial::from_str_flexible(entry) {
        Ok(material) => Some(material),
        Err(_) => {
            println!("  Unknown material '{}', continuing with manual entry", entry);
            None
        }
    }
}

/// Prompt the nine process parameters with the widget ranges as clamps
pub fn collect_input(defaults: &Defaults) -> MachiningInput {
    MachiningInput {
        raw_diameter_mm: prompt_f64(
            "Raw bar diameter (mm)",
            defaults.raw_diameter_mm,
            10.0,
            200.0,
        ),
        raw_length_mm: prompt_f64("Raw bar length (mm)", defaults.raw_length_mm, 50.0, 1000.0),
        density_g_per_cm3: prompt_f64(
            "Material density (g/cm³)",
            defaults.density_g_per_cm3,
            1.0,
            20.0,
        ),
        cost_per_kg: prompt_f64("Material cost (Rs/kg)", defaults.cost_per_kg, 10.0, 3000.0),
        final_diameter_mm: prompt_f64(
            "Final diameter (mm)",
            defaults.final_diameter_mm,
            5.0,
            200.0,
        ),
        cutting_speed_m_per_min: prompt_f64(
            "Cutting speed (m/min)",
            defaults.cutting_speed_m_per_min,
            5.0,
            150.0,
        ),
        feed_rate_mm_per_rev: prompt_f64(
            "Feed rate (mm/rev)",
            defaults.feed_rate_mm_per_rev,
            0.05,
            1.0,
        ),
        machine_hour_rate: prompt_f64(
            "Machine hour rate (Rs/hr)",
            defaults.machine_hour_rate,
            100.0,
            2000.0,
        ),
        chamfer_time_min: prompt_f64("Chamfer time (min)", defaults.chamfer_time_min, 0.0, 30.0),
    }
}

/// Offer the export formats after a session. Enter means CSV, none skips.
pub fn prompt_format() -> Option<ExportFormat> {
    print!("Export results as csv / xlsx / both / none [csv]: ");
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut entry = String::new();
    if io::stdin().lock().read_line(&mut entry).is_err() {
        return None;
    }

    match entry.trim().to_lowercase().as_str() {
        "" | "csv" => Some(ExportFormat::Csv),
        "xlsx" | "excel" => Some(ExportFormat::Xlsx),
        "both" => Some(ExportFormat::Both),
        _ => None,
    }
}

/// Surface a degenerate-geometry warning before rendering the fallback result.
///
/// Goes to stderr so `--json` output on stdout stays parseable.
pub fn warn_degenerate(error: &CostError) {
    eprintln!("[WARN] {} - reporting material cost only", error);
}

/// Render the full breakdown as a boxed terminal block
pub fn render_breakdown(input: &MachiningInput, breakdown: &CostBreakdown) {
    println!();
    println!("═══════════════════════════════════════");
    println!("  MACHINING COST ESTIMATE");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!(
        "  Raw stock:    Ø{:.1} x {:.1} mm",
        input.raw_diameter_mm, input.raw_length_mm
    );
    println!(
        "  Material:     {:.2} g/cm³ @ Rs {:.2}/kg",
        input.density_g_per_cm3, input.cost_per_kg
    );
    println!("  Final dia:    {:.1} mm", input.final_diameter_mm);
    println!(
        "  Cutting:      {:.1} m/min, {:.2} mm/rev",
        input.cutting_speed_m_per_min, input.feed_rate_mm_per_rev
    );
    println!(
        "  Machine:      Rs {:.2}/hr, {:.1} min chamfer",
        input.machine_hour_rate, input.chamfer_time_min
    );
    println!();
    println!("Raw Stock:");
    println!("  Volume:       {:.2} cm³", breakdown.volume_cm3);
    println!("  Weight:       {:.3} kg", breakdown.weight_kg);
    println!("  Material:     Rs {:.2}", breakdown.material_cost);
    println!();
    println!("Machining:");
    println!("  Spindle:      {:.1} RPM", breakdown.spindle_speed_rpm);
    println!("  Cutting time: {:.2} min", breakdown.machining_time_min);
    println!(
        "  Total time:   {:.2} min ({:.3} hr)",
        breakdown.total_time_min, breakdown.total_time_hr
    );
    println!("  Machining:    Rs {:.2}", breakdown.machining_cost);
    println!();
    println!("═══════════════════════════════════════");
    if breakdown.is_material_only() {
        println!("  TOTAL COST: Rs {:.2}  (material only)", breakdown.total_cost);
    } else {
        println!(
            "  TOTAL COST: Rs {:.2}  ({:.0}% machining)",
            breakdown.total_cost,
            breakdown.machining_share() * 100.0
        );
    }
    println!("═══════════════════════════════════════");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_empty_keeps_default() {
        assert_eq!(parse_entry("\n", 38.0, 10.0, 200.0), (38.0, false));
        assert_eq!(parse_entry("   ", 0.2, 0.05, 1.0), (0.2, false));
    }

    #[test]
    fn test_entry_parses_value() {
        assert_eq!(parse_entry(" 42.5 \n", 38.0, 10.0, 200.0), (42.5, false));
    }

    #[test]
    fn test_entry_clamps_out_of_range() {
        assert_eq!(parse_entry("500", 38.0, 10.0, 200.0), (200.0, true));
        assert_eq!(parse_entry("-5", 38.0, 10.0, 200.0), (10.0, true));
    }

    #[test]
    fn test_entry_garbage_keeps_default() {
        assert_eq!(parse_entry("wide", 38.0, 10.0, 200.0), (38.0, false));
    }

    #[test]
    fn test_entry_non_finite_keeps_default() {
        assert_eq!(parse_entry("nan", 38.0, 10.0, 200.0), (38.0, false));
        assert_eq!(parse_entry("inf", 38.0, 10.0, 200.0), (38.0, false));
    }
}
