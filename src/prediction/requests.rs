//! Wire format of `POST {API_BASE}/predict`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::prediction::models::{AssetKind, Material, SoilType};
use crate::prelude::*;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PredictionRequest {
    #[serde(rename = "type")]
    pub kind: AssetKind,

    pub material: Material,
    pub soil_type: SoilType,
    pub region: Option<String>,

    /// `[latitude, longitude]` pair.
    pub exact_location: Option<(f64, f64)>,

    /// `MM-DD-YYYY`.
    pub last_repair_date: Option<String>,

    /// `MM-DD-YYYY`, the service substitutes today when omitted.
    pub snapshot_date: Option<String>,

    pub install_year: i32,
    pub length_m: Option<f64>,
}

impl PredictionRequest {
    /// The service cannot place the asset without either a region
    /// or an exact location.
    pub fn validate(&self) -> StdResult<(), ValidationError> {
        if self.region.is_none() && self.exact_location.is_none() {
            return Err(ValidationError::MissingLocation);
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("provide either a region or an exact location")]
    MissingLocation,
}

/// Converts a `YYYY-MM-DD` input value into the `MM-DD-YYYY` wire format.
/// Empty and malformed values collapse into `None`.
pub fn format_input_date(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    match value.split('-').collect::<Vec<_>>().as_slice() {
        [year, month, day] => Some(format!("{}-{}-{}", month, day, year)),
        _ => None,
    }
}

/// Formats a parsed date for the wire.
pub fn format_wire_date(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> PredictionRequest {
        PredictionRequest {
            kind: AssetKind::Pipe,
            material: Material::CastIron,
            soil_type: SoilType::Clay,
            region: Some("Santa Clara".to_string()),
            exact_location: None,
            last_repair_date: Some("01-01-2020".to_string()),
            snapshot_date: None,
            install_year: 1987,
            length_m: Some(120.0),
        }
    }

    #[test]
    fn validate_ok() {
        assert_eq!(request().validate(), Ok(()));
    }

    #[test]
    fn validate_requires_some_location() {
        let mut request = request();
        request.region = None;
        assert_eq!(request.validate(), Err(ValidationError::MissingLocation));

        request.exact_location = Some((37.354110, -121.955240));
        assert_eq!(request.validate(), Ok(()));
    }

    #[test]
    fn format_input_date_reorders_components() {
        assert_eq!(format_input_date("2024-03-05").as_deref(), Some("03-05-2024"));
    }

    #[test]
    fn format_input_date_collapses_empty_and_malformed() {
        assert_eq!(format_input_date(""), None);
        assert_eq!(format_input_date("March 5"), None);
    }

    #[test]
    fn format_wire_date_ok() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_wire_date(date), "03-05-2024");
    }

    #[test]
    fn serialize_ok() -> Result {
        let actual = serde_json::to_value(request())?;
        let expected: serde_json::Value = serde_json::from_str(
            // language=JSON
            r#"{
                "type": "pipe",
                "material": "cast_iron",
                "soil_type": "clay",
                "region": "Santa Clara",
                "exact_location": null,
                "last_repair_date": "01-01-2020",
                "snapshot_date": null,
                "install_year": 1987,
                "length_m": 120.0
            }"#,
        )?;
        assert_eq!(actual, expected);
        Ok(())
    }
}
