use std::str::FromStr;

use chrono::NaiveDate;

use crate::prediction::models::{AssetKind, Material, SoilType};
use crate::prelude::*;

pub fn asset_kind(value: &str) -> Result<AssetKind> {
    AssetKind::from_str(value)
}

pub fn material(value: &str) -> Result<Material> {
    Material::from_str(value)
}

pub fn soil_type(value: &str) -> Result<SoilType> {
    SoilType::from_str(value)
}

pub fn install_year(value: &str) -> Result<i32> {
    match i32::from_str(value)? {
        year if (1800..=2100).contains(&year) => Ok(year),
        year => Err(anyhow!("{} is an unlikely installation year", year)),
    }
}

pub fn latitude(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        latitude if (-90.0..=90.0).contains(&latitude) => Ok(latitude),
        latitude => Err(anyhow!("{} is out of the latitude range", latitude)),
    }
}

pub fn longitude(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        longitude if (-180.0..=180.0).contains(&longitude) => Ok(longitude),
        longitude => Err(anyhow!("{} is out of the longitude range", longitude)),
    }
}

pub fn length_m(value: &str) -> Result<f64> {
    match f64::from_str(value)? {
        length if length > 0.0 => Ok(length),
        _ => Err(anyhow!("expected a positive length")),
    }
}

pub fn input_date(value: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(value, "%Y-%m-%d")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn install_year_ok() -> Result {
        assert_eq!(install_year("1987")?, 1987);
        assert!(install_year("987").is_err());
        assert!(install_year("pipe").is_err());
        Ok(())
    }

    #[test]
    fn latitude_range_ok() {
        assert!(latitude("37.354110").is_ok());
        assert!(latitude("91.0").is_err());
    }

    #[test]
    fn input_date_ok() -> Result {
        assert_eq!(input_date("2024-03-05")?, NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert!(input_date("03-05-2024").is_err());
        Ok(())
    }
}
