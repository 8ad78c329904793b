//! # File I/O Module
//!
//! Writes the export artifacts with atomic save semantics: write to a `.tmp`
//! sibling, fsync, rename. An interrupted save never leaves a truncated
//! results file behind.
//!
//! ## Example
//!
//! ```rust,no_run
//! use cost_core::calculations::turning::{calculate, MachiningInput};
//! use cost_core::export::ExportRow;
//! use cost_core::file_io::save_csv;
//! use std::path::Path;
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
//! let row = ExportRow::new(&input, &calculate(&input));
//! save_csv(&[row], Path::new("machining_cost_results.csv"))?;
//! # Ok::<(), cost_core::errors::CostError>(())
//! ```

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::errors::{CostError, CostResult};
use crate::export::{csv_string, read_csv, workbook_bytes, ExportRow};

/// Save rows as a CSV file with atomic write semantics
pub fn save_csv(rows: &[ExportRow], path: &Path) -> CostResult<()> {
    let csv = csv_string(rows)?;
    tracing::debug!(
        "Writing CSV export ({} rows) to {}",
        rows.len(),
        path.display()
    );
    atomic_write(path, csv.as_bytes())
}

/// Save rows as a single-sheet XLSX workbook with atomic write semantics
pub fn save_workbook(rows: &[ExportRow], path: &Path) -> CostResult<()> {
    let bytes = workbook_bytes(rows)?;
    tracing::debug!(
        "Writing workbook export ({} bytes) to {}",
        bytes.len(),
        path.display()
    );
    atomic_write(path, &bytes)
}

/// Load rows back from a CSV file
pub fn load_csv(path: &Path) -> CostResult<Vec<ExportRow>> {
    let file = File::open(path)
        .map_err(|e| CostError::file_error("open", path.display().to_string(), e.to_string()))?;
    read_csv(file)
}

/// Get a temp-file sibling for an output path (`results.csv` -> `results.csv.tmp`)
fn tmp_path_for(path: &Path) -> PathBuf {
    let extension = path
        .extension()
        .map(|e| format!("{}.tmp", e.to_string_lossy()))
        .unwrap_or_else(|| "tmp".to_string());
    path.with_extension(extension)
}

/// Write bytes atomically: temp file, fsync, rename.
fn atomic_write(path: &Path, bytes: &[u8]) -> CostResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CostError::file_error(
            "create temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.write_all(bytes).map_err(|e| {
        CostError::file_error(
            "write temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    tmp_file.sync_all().map_err(|e| {
        CostError::file_error(
            "sync temp file",
            tmp_path.display().to_string(),
            e.to_string(),
        )
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CostError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::turning::{calculate, MachiningInput};

    fn shaft_row() -> ExportRow {
        let input = MachiningInput {
            raw_diameter_mm: 38.0,
            raw_length_mm: 257.0,
            density_g_per_cm3: 7.85,
            cost_per_kg: 55.0,
            final_diameter_mm: 36.0,
            cutting_speed_m_per_min: 20.0,
            feed_rate_mm_per_rev: 0.2,
            machine_hour_rate: 800.0,
            chamfer_time_min: 5.0,
        };
        ExportRow::new(&input, &calculate(&input))
    }

    #[test]
    fn test_tmp_path_generation() {
        assert_eq!(
            tmp_path_for(Path::new("/out/results.csv")),
            Path::new("/out/results.csv.tmp")
        );
        assert_eq!(
            tmp_path_for(Path::new("/out/results.xlsx")),
            Path::new("/out/results.xlsx.tmp")
        );
        assert_eq!(tmp_path_for(Path::new("/out/results")), Path::new("/out/results.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("machining_cost_results.csv");

        let rows = vec![shaft_row(), shaft_row()];
        save_csv(&rows, &path).unwrap();

        let loaded = load_csv(&path).unwrap();
        assert_eq!(rows, loaded);
    }

    #[test]
    fn test_atomic_save_leaves_no_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        save_csv(&[shaft_row()], &path).unwrap();

        assert!(path.exists());
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_save_workbook_is_readable_zip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("calculation_results.xlsx");

        save_workbook(&[shaft_row()], &path).unwrap();

        let file = File::open(&path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        assert!(archive.by_name("xl/worksheets/sheet1.xml").is_ok());
        assert!(!tmp_path_for(&path).exists());
    }

    #[test]
    fn test_load_missing_file_is_file_error() {
        let dir = tempfile::tempdir().unwrap();
        let error = load_csv(&dir.path().join("absent.csv")).unwrap_err();
        assert_eq!(error.error_code(), "FILE_ERROR");
    }
}
