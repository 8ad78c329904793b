//! # Turning Cost Module
//!
//! Cost estimation for a single-setup turning job on a cylindrical blank:
//! raw-stock material cost from bar geometry and density, machining cost from
//! spindle speed, feed and machine hour rate.
//!
//! ## Design Philosophy
//!
//! - Pure calculation: no I/O, no state, deterministic for a given input
//! - Total function: degenerate inputs produce a zeroed machining block
//!   instead of an error, so a breakdown always exists to display
//! - JSON-first: input and output serialize cleanly for automation
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::turning::{calculate, MachiningInput};
//!
//! let input = MachiningInput {
//!     raw_diameter_mm: 38.0,
//!     raw_length_mm: 257.0,
//!     density_g_per_cm3: 7.85,
//!     cost_per_kg: 55.0,
//!     final_diameter_mm: 36.0,
//!     cutting_speed_m_per_min: 20.0,
//!     feed_rate_mm_per_rev: 0.2,
//!     machine_hour_rate: 800.0,
//!     chamfer_time_min: 5.0,
//! };
//!
//! let breakdown = calculate(&input);
//! assert!(breakdown.total_cost > breakdown.material_cost);
//! ```

use crate::errors::{CostError, CostResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Cubic millimetres per cubic centimetre
const MM3_PER_CM3: f64 = 1000.0;

/// Grams per kilogram
const G_PER_KG: f64 = 1000.0;

/// Minutes per hour
const MIN_PER_HR: f64 = 60.0;

/// Process parameters for one turned part.
///
/// All dimensions are metric; currency fields are rupees. The record is a
/// plain value object, built once per estimate and discarded after the
/// breakdown is computed.
///
/// # JSON Example
///
/// ```json
/// {
///   "raw_diameter_mm": 38.0,
///   "raw_length_mm": 257.0,
///   "density_g_per_cm3": 7.85,
///   "cost_per_kg": 55.0,
///   "final_diameter_mm": 36.0,
///   "cutting_speed_m_per_min": 20.0,
///   "feed_rate_mm_per_rev": 0.2,
///   "machine_hour_rate": 800.0,
///   "chamfer_time_min": 5.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MachiningInput {
    /// Raw bar stock diameter (mm)
    pub raw_diameter_mm: f64,
    /// Raw bar stock length (mm)
    pub raw_length_mm: f64,
    /// Stock material density (g/cm³)
    pub density_g_per_cm3: f64,
    /// Stock material price (Rs per kg)
    pub cost_per_kg: f64,
    /// Finished part diameter (mm), sets the spindle speed
    pub final_diameter_mm: f64,
    /// Cutting speed at the finished diameter (m/min)
    pub cutting_speed_m_per_min: f64,
    /// Feed per spindle revolution (mm/rev)
    pub feed_rate_mm_per_rev: f64,
    /// Machine hour rate (Rs per hour)
    pub machine_hour_rate: f64,
    /// Fixed allowance for chamfering and other secondary cuts (minutes)
    pub chamfer_time_min: f64,
}

impl MachiningInput {
    /// Validate the geometry before costing.
    ///
    /// The engine itself never fails: [`calculate`] substitutes a
    /// material-only breakdown when the finished diameter is degenerate.
    /// Callers that want to warn the user first run this and check
    /// [`CostError::is_recoverable`].
    pub fn validate(&self) -> CostResult<()> {
        if self.final_diameter_mm <= 0.0 {
            return Err(CostError::invalid_input(
                "final_diameter_mm",
                self.final_diameter_mm.to_string(),
                "Final diameter must be greater than 0",
            ));
        }
        Ok(())
    }

    /// Raw stock volume (mm³): π × (D/2)² × L
    pub fn stock_volume_mm3(&self) -> f64 {
        PI * (self.raw_diameter_mm / 2.0).powi(2) * self.raw_length_mm
    }

    /// Raw stock volume (cm³)
    pub fn stock_volume_cm3(&self) -> f64 {
        self.stock_volume_mm3() / MM3_PER_CM3
    }

    /// Raw stock weight (kg)
    pub fn stock_weight_kg(&self) -> f64 {
        self.stock_volume_cm3() * self.density_g_per_cm3 / G_PER_KG
    }

    /// Raw material cost (Rs)
    pub fn material_cost(&self) -> f64 {
        self.stock_weight_kg() * self.cost_per_kg
    }

    /// Spindle speed (RPM): 1000 × Vc / (π × D_final).
    ///
    /// Zero when the finished diameter is not positive.
    pub fn spindle_speed_rpm(&self) -> f64 {
        if self.final_diameter_mm <= 0.0 {
            return 0.0;
        }
        1000.0 * self.cutting_speed_m_per_min / (PI * self.final_diameter_mm)
    }

    /// Single-pass cutting time (minutes): L / (f × N).
    ///
    /// Zero when the spindle speed or feed is not positive, keeping the
    /// division guarded and every output finite.
    pub fn cutting_time_min(&self) -> f64 {
        let spindle_speed_rpm = self.spindle_speed_rpm();
        if spindle_speed_rpm <= 0.0 || self.feed_rate_mm_per_rev <= 0.0 {
            return 0.0;
        }
        self.raw_length_mm / (self.feed_rate_mm_per_rev * spindle_speed_rpm)
    }
}

/// Complete cost breakdown for one turned part.
///
/// Every intermediate of the costing chain is retained so the caller can
/// display or export the full derivation, not just the bottom line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Raw stock volume (cm³)
    pub volume_cm3: f64,
    /// Raw stock weight (kg)
    pub weight_kg: f64,
    /// Raw material cost (Rs)
    pub material_cost: f64,
    /// Spindle speed at the finished diameter (RPM)
    pub spindle_speed_rpm: f64,
    /// Cutting time for the turning pass (minutes)
    pub machining_time_min: f64,
    /// Cutting time plus chamfer allowance (minutes)
    pub total_time_min: f64,
    /// Total machine-occupancy time (hours)
    pub total_time_hr: f64,
    /// Machine time billed at the hour rate (Rs)
    pub machining_cost: f64,
    /// Material plus machining (Rs)
    pub total_cost: f64,
}

impl CostBreakdown {
    /// True when the machining block degenerated and only material was costed
    pub fn is_material_only(&self) -> bool {
        self.machining_cost == 0.0
    }

    /// Machining fraction of the total cost, 0.0 when the total is zero
    pub fn machining_share(&self) -> f64 {
        if self.total_cost <= 0.0 {
            return 0.0;
        }
        self.machining_cost / self.total_cost
    }
}

/// Compute the full cost breakdown for a turned part.
///
/// This function is total. A non-positive finished diameter zeroes the
/// entire machining block (the chamfer allowance included, since there is no
/// machinable part to chamfer); a non-positive feed or spindle speed zeroes
/// only the cutting time, so the chamfer allowance still bills.
pub fn calculate(input: &MachiningInput) -> CostBreakdown {
    // === Raw stock ===
    let volume_cm3 = input.stock_volume_cm3();
    let weight_kg = input.stock_weight_kg();
    let material_cost = input.material_cost();

    // === Machining block ===
    let (spindle_speed_rpm, machining_time_min, total_time_min) =
        if input.final_diameter_mm <= 0.0 {
            (0.0, 0.0, 0.0)
        } else {
            let spindle_speed_rpm = input.spindle_speed_rpm();
            let machining_time_min = input.cutting_time_min();
            (
                spindle_speed_rpm,
                machining_time_min,
                machining_time_min + input.chamfer_time_min,
            )
        };
    let total_time_hr = total_time_min / MIN_PER_HR;
    let machining_cost = total_time_hr * input.machine_hour_rate;

    // === Rollup ===
    let total_cost = material_cost + machining_cost;

    CostBreakdown {
        volume_cm3,
        weight_kg,
        material_cost,
        spindle_speed_rpm,
        machining_time_min,
        total_time_min,
        total_time_hr,
        machining_cost,
        total_cost,
    }
}
