//! # Machining Calculations
//!
//! Calculation modules for machining cost estimation. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Process parameters (JSON-serializable)
//! - `*Breakdown` - Itemized cost result (JSON-serializable)
//! - `calculate(input) -> *Breakdown` - Pure, total calculation function
//!
//! ## Available Calculations
//!
//! - [`turning`] - Single-setup turning of a cylindrical blank

pub mod turning;

// Re-export commonly used types
pub use turning::{calculate, CostBreakdown, MachiningInput};
