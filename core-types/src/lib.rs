use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

include!("generated_data_types.rs");

/// Errors raised when parsing type or layout names
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unknown data type `{0}`")]
    UnknownDataType(String),
    #[error("unknown format `{0}`")]
    UnknownFormat(String),
    #[error("expected `dtype:format`, got `{0}`")]
    MissingSeparator(String),
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataType {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::from_name(s.trim()).ok_or_else(|| ParseError::UnknownDataType(s.to_string()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Format::from_name(s.trim()).ok_or_else(|| ParseError::UnknownFormat(s.to_string()))
    }
}

/// One (element type, layout) pair, as accepted on a single op port.
///
/// Serializes as the two-element array `["float32", "NC1HWC0"]` used by
/// op-info descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "(DataType, Format)", from = "(DataType, Format)")]
pub struct DtypeFormat {
    pub dtype:  DataType,
    pub format: Format,
}

impl DtypeFormat {
    pub const fn new(dtype: DataType, format: Format) -> Self {
        Self { dtype, format }
    }

    /// Pair for a Rust scalar type
    pub fn of<T: Element>(format: Format) -> Self {
        Self::new(T::DTYPE, format)
    }
}

impl From<(DataType, Format)> for DtypeFormat {
    fn from((dtype, format): (DataType, Format)) -> Self {
        Self::new(dtype, format)
    }
}

impl From<DtypeFormat> for (DataType, Format) {
    fn from(df: DtypeFormat) -> Self {
        (df.dtype, df.format)
    }
}

impl fmt::Display for DtypeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.dtype, self.format)
    }
}

/// Parses `dtype:format`, e.g. `float32:NC1HWC0`, `f32:5HD`
impl FromStr for DtypeFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (dtype, format) = s
            .split_once(':')
            .ok_or_else(|| ParseError::MissingSeparator(s.to_string()))?;
        Ok(Self::new(dtype.parse()?, format.parse()?))
    }
}
