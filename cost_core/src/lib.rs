//! # cost_core - Machining Cost Estimation Engine
//!
//! `cost_core` is the computational heart of Turncost, estimating raw-material
//! and machining costs for turned cylindrical parts. All inputs and outputs
//! are JSON-serializable, so the engine drops into terminal front ends,
//! services, and automation alike.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Total**: Degenerate inputs degrade to zeroed figures, never panics
//!
//! ## Quick Start
//!
//! ```rust
//! use cost_core::{calculate, MachiningInput};
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
//! println!("Total cost: Rs {:.2}", breakdown.total_cost);
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - The turning cost calculation
//! - [`materials`] - Bar-stock material presets
//! - [`export`] - Twelve-column sheet row with CSV and XLSX serialization
//! - [`file_io`] - Export file writes with atomic saves
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod export;
pub mod file_io;
pub mod materials;

// Re-export commonly used types at crate root for convenience
pub use calculations::{calculate, CostBreakdown, MachiningInput};
pub use errors::{CostError, CostResult};
pub use export::ExportRow;
pub use materials::{StockMaterial, StockProperties};
