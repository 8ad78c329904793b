//! # Export Surface
//!
//! The flat twelve-column sheet row written for each estimate, with CSV and
//! XLSX serialization. Column headers are the exact strings downstream
//! spreadsheets already expect, so they are part of the public contract.
//!
//! An `.xlsx` file is an OOXML zip container; [`workbook_bytes`] packages the
//! five minimal parts of a single-sheet workbook through the `zip` crate
//! rather than pulling in a full spreadsheet dependency.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::calculations::turning::{calculate, MachiningInput};
//! use cost_core::export::{csv_string, ExportRow};
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
//! let csv = csv_string(&[row]).unwrap();
//! assert!(csv.starts_with("D_raw (mm)"));
//! ```

use std::io::{Read, Write};

use serde::{Deserialize, Serialize};
use zip::write::{FileOptions, ZipWriter};

use crate::calculations::turning::{CostBreakdown, MachiningInput};
use crate::errors::{CostError, CostResult};

/// Sheet name used in the workbook
pub const SHEET_NAME: &str = "Results";

/// Column headers in sheet order
pub const COLUMNS: [&str; 12] = [
    "D_raw (mm)",
    "L_raw (mm)",
    "Density (g/cm³)",
    "Cost/kg (Rs)",
    "D_final (mm)",
    "Cutting Speed (m/min)",
    "Feed Rate (mm/rev)",
    "MHR (Rs/hr)",
    "Chamfer Time (min)",
    "Material Cost (Rs)",
    "Machining Cost (Rs)",
    "Total Cost (Rs)",
];

/// One sheet row: the nine inputs followed by the three cost figures.
///
/// Currency columns are rounded to two decimals when the row is built;
/// input columns pass through unrounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportRow {
    #[serde(rename = "D_raw (mm)")]
    pub raw_diameter_mm: f64,
    #[serde(rename = "L_raw (mm)")]
    pub raw_length_mm: f64,
    #[serde(rename = "Density (g/cm³)")]
    pub density_g_per_cm3: f64,
    #[serde(rename = "Cost/kg (Rs)")]
    pub cost_per_kg: f64,
    #[serde(rename = "D_final (mm)")]
    pub final_diameter_mm: f64,
    #[serde(rename = "Cutting Speed (m/min)")]
    pub cutting_speed_m_per_min: f64,
    #[serde(rename = "Feed Rate (mm/rev)")]
    pub feed_rate_mm_per_rev: f64,
    #[serde(rename = "MHR (Rs/hr)")]
    pub machine_hour_rate: f64,
    #[serde(rename = "Chamfer Time (min)")]
    pub chamfer_time_min: f64,
    #[serde(rename = "Material Cost (Rs)")]
    pub material_cost: f64,
    #[serde(rename = "Machining Cost (Rs)")]
    pub machining_cost: f64,
    #[serde(rename = "Total Cost (Rs)")]
    pub total_cost: f64,
}

/// Round a currency figure to two decimals
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl ExportRow {
    /// Build a sheet row from an estimate
    pub fn new(input: &MachiningInput, breakdown: &CostBreakdown) -> Self {
        ExportRow {
            raw_diameter_mm: input.raw_diameter_mm,
            raw_length_mm: input.raw_length_mm,
            density_g_per_cm3: input.density_g_per_cm3,
            cost_per_kg: input.cost_per_kg,
            final_diameter_mm: input.final_diameter_mm,
            cutting_speed_m_per_min: input.cutting_speed_m_per_min,
            feed_rate_mm_per_rev: input.feed_rate_mm_per_rev,
            machine_hour_rate: input.machine_hour_rate,
            chamfer_time_min: input.chamfer_time_min,
            material_cost: round2(breakdown.material_cost),
            machining_cost: round2(breakdown.machining_cost),
            total_cost: round2(breakdown.total_cost),
        }
    }

    /// Cell values in column order
    pub fn values(&self) -> [f64; 12] {
        [
            self.raw_diameter_mm,
            self.raw_length_mm,
            self.density_g_per_cm3,
            self.cost_per_kg,
            self.final_diameter_mm,
            self.cutting_speed_m_per_min,
            self.feed_rate_mm_per_rev,
            self.machine_hour_rate,
            self.chamfer_time_min,
            self.material_cost,
            self.machining_cost,
            self.total_cost,
        ]
    }
}

/// Write rows as CSV (header plus one record per estimate).
///
/// An empty slice still writes the header row so the artifact stays
/// well-formed.
pub fn write_csv<W: Write>(writer: W, rows: &[ExportRow]) -> CostResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        writer
            .write_record(COLUMNS)
            .map_err(|e| CostError::serialization(e.to_string()))?;
    }
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| CostError::serialization(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| CostError::serialization(e.to_string()))?;
    Ok(())
}

/// Render rows as a CSV string
pub fn csv_string(rows: &[ExportRow]) -> CostResult<String> {
    let mut buffer = Vec::new();
    write_csv(&mut buffer, rows)?;
    String::from_utf8(buffer).map_err(|e| CostError::serialization(e.to_string()))
}

/// Parse rows back from CSV (header required)
pub fn read_csv<R: Read>(reader: R) -> CostResult<Vec<ExportRow>> {
    let mut reader = csv::Reader::from_reader(reader);
    let mut rows = Vec::new();
    for record in reader.deserialize() {
        let row: ExportRow = record.map_err(|e| CostError::serialization(e.to_string()))?;
        rows.push(row);
    }
    Ok(rows)
}

/// Package rows as a single-sheet XLSX workbook.
///
/// Emits the five minimal OOXML parts. Header cells are inline strings,
/// data cells are numeric.
pub fn workbook_bytes(rows: &[ExportRow]) -> CostResult<Vec<u8>> {
    let parts: [(&str, String); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", ROOT_RELS_XML.to_string()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS_XML.to_string()),
        ("xl/worksheets/sheet1.xml", sheet_xml(rows)),
    ];

    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, content) in parts {
        zip.start_file::<_, ()>(name, FileOptions::default())
            .map_err(|e| CostError::serialization(e.to_string()))?;
        zip.write_all(content.as_bytes())
            .map_err(|e| CostError::serialization(e.to_string()))?;
    }
    let cursor = zip
        .finish()
        .map_err(|e| CostError::serialization(e.to_string()))?;
    Ok(cursor.into_inner())
}

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/><Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/></Types>"#;

const ROOT_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/></Relationships>"#;

const WORKBOOK_RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/></Relationships>"#;

fn workbook_xml() -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"><sheets><sheet name="{SHEET_NAME}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    )
}

/// Spreadsheet column letter for a zero-based index (single letter, A..L)
fn column_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn sheet_xml(rows: &[ExportRow]) -> String {
    let mut xml = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );

    // Header row: inline strings (none of the fixed headers need XML escaping)
    xml.push_str("<row r=\"1\">");
    for (i, header) in COLUMNS.iter().enumerate() {
        xml.push_str(&format!(
            "<c r=\"{}1\" t=\"inlineStr\"><is><t>{}</t></is></c>",
            column_letter(i),
            header
        ));
    }
    xml.push_str("</row>");

    // Data rows: numeric cells
    for (row_index, row) in rows.iter().enumerate() {
        let sheet_row = row_index + 2;
        xml.push_str(&format!("<row r=\"{sheet_row}\">"));
        for (i, value) in row.values().iter().enumerate() {
            xml.push_str(&format!(
                "<c r=\"{}{}\"><v>{}</v></c>",
                column_letter(i),
                sheet_row,
                value
            ));
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::turning::calculate;

    fn shaft_input() -> MachiningInput {
        MachiningInput {
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

    fn shaft_row() -> ExportRow {
        let input = shaft_input();
        ExportRow::new(&input, &calculate(&input))
    }

    #[test]
    fn test_header_line_matches_columns() {
        let csv = csv_string(&[shaft_row()]).unwrap();
        let header = csv.lines().next().unwrap();
        assert_eq!(header, COLUMNS.join(","));
    }

    #[test]
    fn test_currency_rounded_at_construction() {
        let row = shaft_row();
        assert_eq!(row.material_cost, 125.84);
        assert_eq!(row.machining_cost, 163.55);
        assert_eq!(row.total_cost, 289.39);
        // Input columns pass through unrounded
        assert_eq!(row.feed_rate_mm_per_rev, 0.2);
    }

    #[test]
    fn test_csv_round_trip() {
        let mut degenerate = shaft_input();
        degenerate.final_diameter_mm = 0.0;
        let rows = vec![
            shaft_row(),
            ExportRow::new(&degenerate, &calculate(&degenerate)),
        ];

        let csv = csv_string(&rows).unwrap();
        let parsed = read_csv(csv.as_bytes()).unwrap();
        assert_eq!(rows, parsed);
    }

    #[test]
    fn test_empty_export_keeps_header() {
        let csv = csv_string(&[]).unwrap();
        assert_eq!(csv.trim_end(), COLUMNS.join(","));
        assert!(read_csv(csv.as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn test_values_order_matches_columns() {
        let row = shaft_row();
        let values = row.values();
        assert_eq!(values.len(), COLUMNS.len());
        assert_eq!(values[0], 38.0);
        assert_eq!(values[11], row.total_cost);
    }

    #[test]
    fn test_workbook_contains_five_parts() {
        let bytes = workbook_bytes(&[shaft_row()]).unwrap();
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let mut file_names: Vec<String> = (0..archive.len())
            .map(|i| archive.by_index(i).unwrap().name().to_string())
            .collect();
        file_names.sort();
        assert_eq!(
            file_names,
            vec![
                "[Content_Types].xml",
                "_rels/.rels",
                "xl/_rels/workbook.xml.rels",
                "xl/workbook.xml",
                "xl/worksheets/sheet1.xml",
            ]
        );
    }

    #[test]
    fn test_workbook_sheet_content() {
        let bytes = workbook_bytes(&[shaft_row()]).unwrap();
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let mut workbook = String::new();
        archive
            .by_name("xl/workbook.xml")
            .unwrap()
            .read_to_string(&mut workbook)
            .unwrap();
        assert!(workbook.contains(r#"name="Results""#));

        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        assert!(sheet.contains("<t>D_raw (mm)</t>"));
        assert!(sheet.contains("<v>38</v>"));
        assert!(sheet.contains("<v>289.39</v>"));
    }

    #[test]
    fn test_workbook_row_per_estimate() {
        let rows = vec![shaft_row(), shaft_row(), shaft_row()];
        let bytes = workbook_bytes(&rows).unwrap();
        let cursor = std::io::Cursor::new(bytes);
        let mut archive = zip::ZipArchive::new(cursor).unwrap();

        let mut sheet = String::new();
        archive
            .by_name("xl/worksheets/sheet1.xml")
            .unwrap()
            .read_to_string(&mut sheet)
            .unwrap();
        assert_eq!(sheet.matches("<row ").count(), 4);
        assert!(sheet.contains(r#"<row r="4">"#));
    }
}
