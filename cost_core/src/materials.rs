//! # Stock Materials
//!
//! Bar-stock presets for common turning materials: density for the weight
//! calculation, an indicative market price, and a typical HSS cutting speed.
//!
//! Presets only pre-fill adapter defaults. The engine works from the numbers
//! in [`MachiningInput`](crate::calculations::turning::MachiningInput) and
//! never consults this table, so callers can cost any material by entering
//! its figures directly.
//!
//! ## Example
//!
//! ```rust
//! use cost_core::materials::StockMaterial;
//!
//! let steel = StockMaterial::from_str_flexible("mild steel").unwrap();
//! let props = steel.properties();
//! assert_eq!(props.density_g_per_cm3, 7.85);
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{CostError, CostResult};

/// Common turning bar-stock materials
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockMaterial {
    /// Mild steel (EN3/EN8 class)
    #[serde(rename = "MS")]
    MildSteel,
    /// Chromoly alloy steel 4140
    #[serde(rename = "4140")]
    Alloy4140,
    /// Austenitic stainless 304
    #[serde(rename = "SS-304")]
    Stainless304,
    /// Aluminium 6061
    #[serde(rename = "AL-6061")]
    Aluminium6061,
    /// Free-machining brass C360
    #[serde(rename = "BR-C360")]
    BrassC360,
    /// Grey cast iron
    #[serde(rename = "CI")]
    GreyCastIron,
    /// Electrolytic copper C110
    #[serde(rename = "CU-C110")]
    CopperC110,
    /// Titanium Ti-6Al-4V
    #[serde(rename = "TI-6AL-4V")]
    TitaniumGrade5,
}

impl StockMaterial {
    /// All stock material variants for UI selection
    pub const ALL: [StockMaterial; 8] = [
        StockMaterial::MildSteel,
        StockMaterial::Alloy4140,
        StockMaterial::Stainless304,
        StockMaterial::Aluminium6061,
        StockMaterial::BrassC360,
        StockMaterial::GreyCastIron,
        StockMaterial::CopperC110,
        StockMaterial::TitaniumGrade5,
    ];

    /// Get the short code string (e.g., "MS", "SS-304")
    pub fn code(&self) -> &'static str {
        match self {
            StockMaterial::MildSteel => "MS",
            StockMaterial::Alloy4140 => "4140",
            StockMaterial::Stainless304 => "SS-304",
            StockMaterial::Aluminium6061 => "AL-6061",
            StockMaterial::BrassC360 => "BR-C360",
            StockMaterial::GreyCastIron => "CI",
            StockMaterial::CopperC110 => "CU-C110",
            StockMaterial::TitaniumGrade5 => "TI-6AL-4V",
        }
    }

    /// Parse from common string representations
    pub fn from_str_flexible(s: &str) -> CostResult<Self> {
        match s.to_uppercase().replace([' ', '_'], "-").as_str() {
            "MS" | "MILD-STEEL" | "EN3" | "EN8" | "STEEL" => Ok(StockMaterial::MildSteel),
            "4140" | "EN19" | "ALLOY-4140" => Ok(StockMaterial::Alloy4140),
            "SS-304" | "SS304" | "304" | "STAINLESS" | "STAINLESS-304" => {
                Ok(StockMaterial::Stainless304)
            }
            "AL-6061" | "AL6061" | "6061" | "ALUMINIUM" | "ALUMINUM" => {
                Ok(StockMaterial::Aluminium6061)
            }
            "BR-C360" | "C360" | "BRASS" => Ok(StockMaterial::BrassC360),
            "CI" | "CAST-IRON" | "GREY-CAST-IRON" | "GRAY-CAST-IRON" => {
                Ok(StockMaterial::GreyCastIron)
            }
            "CU-C110" | "C110" | "COPPER" => Ok(StockMaterial::CopperC110),
            "TI-6AL-4V" | "TI6AL4V" | "TITANIUM" | "GRADE-5" => {
                Ok(StockMaterial::TitaniumGrade5)
            }
            _ => Err(CostError::material_not_found(s)),
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            StockMaterial::MildSteel => "Mild Steel",
            StockMaterial::Alloy4140 => "Alloy Steel 4140",
            StockMaterial::Stainless304 => "Stainless Steel 304",
            StockMaterial::Aluminium6061 => "Aluminium 6061",
            StockMaterial::BrassC360 => "Brass C360",
            StockMaterial::GreyCastIron => "Grey Cast Iron",
            StockMaterial::CopperC110 => "Copper C110",
            StockMaterial::TitaniumGrade5 => "Titanium Grade 5",
        }
    }

    /// Look up the preset properties for this material
    pub fn properties(&self) -> StockProperties {
        let (density_g_per_cm3, cost_per_kg, cutting_speed_m_per_min) = match self {
            StockMaterial::MildSteel => (7.85, 55.0, 20.0),
            StockMaterial::Alloy4140 => (7.85, 90.0, 20.0),
            StockMaterial::Stainless304 => (8.00, 220.0, 15.0),
            StockMaterial::Aluminium6061 => (2.70, 190.0, 120.0),
            StockMaterial::BrassC360 => (8.50, 450.0, 90.0),
            StockMaterial::GreyCastIron => (7.20, 60.0, 25.0),
            StockMaterial::CopperC110 => (8.96, 750.0, 40.0),
            StockMaterial::TitaniumGrade5 => (4.43, 2800.0, 10.0),
        };
        StockProperties {
            material: *self,
            density_g_per_cm3,
            cost_per_kg,
            cutting_speed_m_per_min,
        }
    }
}

impl Default for StockMaterial {
    fn default() -> Self {
        StockMaterial::MildSteel
    }
}

impl std::fmt::Display for StockMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Preset figures for one stock material.
///
/// Costs are indicative bar-stock prices (Rs/kg); cutting speeds are
/// conservative HSS single-point turning values (m/min).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StockProperties {
    /// Material this preset belongs to
    pub material: StockMaterial,
    /// Density (g/cm³)
    pub density_g_per_cm3: f64,
    /// Indicative price (Rs per kg)
    pub cost_per_kg: f64,
    /// Typical HSS cutting speed (m/min)
    pub cutting_speed_m_per_min: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mild_steel_matches_engine_defaults() {
        let props = StockMaterial::MildSteel.properties();
        assert_eq!(props.density_g_per_cm3, 7.85);
        assert_eq!(props.cost_per_kg, 55.0);
        assert_eq!(props.cutting_speed_m_per_min, 20.0);
    }

    #[test]
    fn test_material_parsing() {
        assert_eq!(
            StockMaterial::from_str_flexible("MS").unwrap(),
            StockMaterial::MildSteel
        );
        assert_eq!(
            StockMaterial::from_str_flexible("mild steel").unwrap(),
            StockMaterial::MildSteel
        );
        assert_eq!(
            StockMaterial::from_str_flexible("ss304").unwrap(),
            StockMaterial::Stainless304
        );
        assert_eq!(
            StockMaterial::from_str_flexible("aluminum").unwrap(),
            StockMaterial::Aluminium6061
        );
        assert!(StockMaterial::from_str_flexible("unobtainium").is_err());
    }

    #[test]
    fn test_codes_are_unique() {
        for (i, a) in StockMaterial::ALL.iter().enumerate() {
            for b in StockMaterial::ALL.iter().skip(i + 1) {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn test_code_parses_back() {
        for material in StockMaterial::ALL {
            assert_eq!(
                StockMaterial::from_str_flexible(material.code()).unwrap(),
                material
            );
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(StockMaterial::TitaniumGrade5.to_string(), "Titanium Grade 5");
    }

    #[test]
    fn test_serialization() {
        let props = StockMaterial::BrassC360.properties();
        let json = serde_json::to_string(&props).unwrap();
        assert!(json.contains("\"BR-C360\""));
        let roundtrip: StockProperties = serde_json::from_str(&json).unwrap();
        assert_eq!(props, roundtrip);
    }

    #[test]
    fn test_default_is_mild_steel() {
        assert_eq!(StockMaterial::default(), StockMaterial::MildSteel);
    }

    #[test]
    fn test_properties_physically_sane() {
        for material in StockMaterial::ALL {
            let props = material.properties();
            assert!(props.density_g_per_cm3 > 1.0 && props.density_g_per_cm3 < 20.0);
            assert!(props.cost_per_kg > 0.0);
            assert!(props.cutting_speed_m_per_min > 0.0);
        }
    }
}
