//! Instrument classification for pip conversion.
//!
//! A pip is the smallest standardized price increment of an instrument. The
//! multiplier turns a raw price difference into a pip count:
//! - yen crosses quote to 2 decimals → 100
//! - gold (XAU) is quoted in whole dollars → 1
//! - everything else quotes to 4 decimals → 10000

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentClass {
    Yen,
    Metal,
    Standard,
}

impl InstrumentClass {
    /// Classify a pair symbol. Matching is a case-insensitive substring test,
    /// checked in order: JPY, then XAU/GOLD.
    pub fn from_pair(pair: &str) -> Self {
        let p = pair.to_uppercase();

        if p.contains("JPY") {
            return InstrumentClass::Yen;
        }

        if p.contains("XAU") || p.contains("GOLD") {
            return InstrumentClass::Metal;
        }

        InstrumentClass::Standard
    }

    pub fn multiplier(&self) -> f64 {
        match self {
            InstrumentClass::Yen => 100.0,
            InstrumentClass::Metal => 1.0,
            InstrumentClass::Standard => 10_000.0,
        }
    }
}

impl fmt::Display for InstrumentClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstrumentClass::Yen => write!(f, "yen"),
            InstrumentClass::Metal => write!(f, "metal"),
            InstrumentClass::Standard => write!(f, "standard"),
        }
    }
}
