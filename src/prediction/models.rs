//! Asset vocabulary shared by the form, the CLI and the wire format.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::prelude::*;

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Streetlight,

    #[default]
    Pipe,

    Pump,
    AcUnit,
    Generator,
}

impl AssetKind {
    pub const ALL: [Self; 5] =
        [Self::Streetlight, Self::Pipe, Self::Pump, Self::AcUnit, Self::Generator];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Streetlight => "streetlight",
            Self::Pipe => "pipe",
            Self::Pump => "pump",
            Self::AcUnit => "ac_unit",
            Self::Generator => "generator",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Streetlight => "Streetlight",
            Self::Pipe => "Pipe",
            Self::Pump => "Pump",
            Self::AcUnit => "AC unit",
            Self::Generator => "Generator",
        }
    }
}

impl FromStr for AssetKind {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| anyhow!("{} is not a known asset kind", value))
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Material {
    #[default]
    CastIron,

    Concrete,
    Steel,
    Pvc,
    Hdpe,
}

impl Material {
    pub const ALL: [Self; 5] =
        [Self::CastIron, Self::Concrete, Self::Steel, Self::Pvc, Self::Hdpe];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CastIron => "cast_iron",
            Self::Concrete => "concrete",
            Self::Steel => "steel",
            Self::Pvc => "pvc",
            Self::Hdpe => "hdpe",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::CastIron => "Cast iron",
            Self::Concrete => "Concrete",
            Self::Steel => "Steel",
            Self::Pvc => "PVC",
            Self::Hdpe => "HDPE",
        }
    }
}

impl FromStr for Material {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|material| material.as_str() == value)
            .ok_or_else(|| anyhow!("{} is not a known material", value))
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SoilType {
    Clay,
    Sandy,

    #[default]
    Loam,

    Rocky,
}

impl SoilType {
    pub const ALL: [Self; 4] = [Self::Clay, Self::Sandy, Self::Loam, Self::Rocky];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Clay => "clay",
            Self::Sandy => "sandy",
            Self::Loam => "loam",
            Self::Rocky => "rocky",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Clay => "Clay",
            Self::Sandy => "Sandy",
            Self::Loam => "Loam",
            Self::Rocky => "Rocky",
        }
    }
}

impl FromStr for SoilType {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|soil| soil.as_str() == value)
            .ok_or_else(|| anyhow!("{} is not a known soil type", value))
    }
}

impl fmt::Display for SoilType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
