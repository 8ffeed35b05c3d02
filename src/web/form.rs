//! The asset form as the browser submits it.

use std::str::FromStr;

use serde::Deserialize;

use crate::prediction::requests::{format_input_date, PredictionRequest, ValidationError};
use crate::prelude::*;

/// Raw field values. Everything arrives as text and is only interpreted
/// when the payload is collected, so a failed submission can re-render
/// the form exactly as the user filled it.
#[derive(Deserialize, Default, Clone)]
pub struct AssessmentForm {
    #[serde(rename = "type", default)]
    pub kind: String,

    #[serde(default)]
    pub material: String,

    #[serde(default)]
    pub soil_type: String,

    #[serde(default)]
    pub region: String,

    #[serde(default)]
    pub latitude: String,

    #[serde(default)]
    pub longitude: String,

    #[serde(default)]
    pub last_repair_date: String,

    #[serde(default)]
    pub snapshot_date: String,

    #[serde(default)]
    pub install_year: String,

    #[serde(default)]
    pub length_m: String,
}

impl AssessmentForm {
    /// Interprets the raw fields into a request payload.
    /// Dates are converted from the `YYYY-MM-DD` input format to the
    /// `MM-DD-YYYY` wire format, empty optional fields become `None`.
    pub fn collect(&self) -> StdResult<PredictionRequest, FormError> {
        let latitude = self.latitude.trim();
        let longitude = self.longitude.trim();
        let exact_location = if !latitude.is_empty() && !longitude.is_empty() {
            Some((
                parse_number(latitude, "latitude")?,
                parse_number(longitude, "longitude")?,
            ))
        } else {
            None
        };

        let length_m = match self.length_m.trim() {
            "" => None,
            value => Some(parse_number(value, "length")?),
        };

        let request = PredictionRequest {
            kind: parse_choice(&self.kind, "asset kind")?,
            material: parse_choice(&self.material, "material")?,
            soil_type: parse_choice(&self.soil_type, "soil type")?,
            region: match self.region.trim() {
                "" => None,
                region => Some(region.to_string()),
            },
            exact_location,
            last_repair_date: format_input_date(self.last_repair_date.trim()),
            snapshot_date: format_input_date(self.snapshot_date.trim()),
            install_year: self
                .install_year
                .trim()
                .parse()
                .map_err(|_| FormError::InvalidNumber { field: "installation year" })?,
            length_m,
        };
        request.validate()?;
        Ok(request)
    }
}

fn parse_choice<T: FromStr>(value: &str, field: &'static str) -> StdResult<T, FormError> {
    T::from_str(value).map_err(|_| FormError::UnknownChoice { field })
}

fn parse_number(value: &str, field: &'static str) -> StdResult<f64, FormError> {
    value
        .parse()
        .map_err(|_| FormError::InvalidNumber { field })
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error(transparent)]
    Location(#[from] ValidationError),

    #[error("the {field} choice is not recognised")]
    UnknownChoice { field: &'static str },

    #[error("the {field} value is not a valid number")]
    InvalidNumber { field: &'static str },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prediction::models::{AssetKind, Material, SoilType};

    fn form() -> AssessmentForm {
        AssessmentForm {
            kind: "pipe".to_string(),
            material: "cast_iron".to_string(),
            soil_type: "clay".to_string(),
            region: "Santa Clara".to_string(),
            install_year: "1987".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn collect_ok() -> Result {
        let request = form().collect()?;
        assert_eq!(request.kind, AssetKind::Pipe);
        assert_eq!(request.material, Material::CastIron);
        assert_eq!(request.soil_type, SoilType::Clay);
        assert_eq!(request.region.as_deref(), Some("Santa Clara"));
        assert_eq!(request.exact_location, None);
        assert_eq!(request.install_year, 1987);
        assert_eq!(request.length_m, None);
        Ok(())
    }

    #[test]
    fn collect_converts_dates() -> Result {
        let mut form = form();
        form.last_repair_date = "2020-01-01".to_string();
        let request = form.collect()?;
        assert_eq!(request.last_repair_date.as_deref(), Some("01-01-2020"));
        assert_eq!(request.snapshot_date, None);
        Ok(())
    }

    #[test]
    fn collect_requires_both_coordinates() -> Result {
        let mut form = form();
        form.latitude = "37.354110".to_string();
        assert_eq!(form.collect()?.exact_location, None);

        form.longitude = "-121.955240".to_string();
        assert_eq!(form.collect()?.exact_location, Some((37.354110, -121.955240)));
        Ok(())
    }

    #[test]
    fn collect_requires_some_location() {
        let mut form = form();
        form.region = String::new();
        assert_eq!(
            form.collect().unwrap_err(),
            FormError::Location(ValidationError::MissingLocation),
        );
    }

    #[test]
    fn collect_rejects_malformed_numbers() {
        let mut form = form();
        form.install_year = "unknown".to_string();
        assert_eq!(
            form.collect().unwrap_err(),
            FormError::InvalidNumber { field: "installation year" },
        );
    }
}
