//! Pollutant species codes as they appear in the `Specie` column.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown pollutant code: {0}")]
pub struct PollutantParseError(pub String);

/// Measured air pollutant species.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pollutant {
    /// Fine particulate matter (<= 2.5 um)
    Pm25,
    /// Coarse particulate matter (<= 10 um)
    Pm10,
    So2,
    No2,
    Co,
    O3,
}

impl Pollutant {
    /// Fixed comparison order.
    pub const ALL: [Pollutant; 6] = [
        Pollutant::Pm25,
        Pollutant::Pm10,
        Pollutant::So2,
        Pollutant::No2,
        Pollutant::Co,
        Pollutant::O3,
    ];

    /// Species code used by the source data.
    pub fn code(&self) -> &'static str {
        match self {
            Pollutant::Pm25 => "pm25",
            Pollutant::Pm10 => "pm10",
            Pollutant::So2 => "so2",
            Pollutant::No2 => "no2",
            Pollutant::Co => "co",
            Pollutant::O3 => "o3",
        }
    }
}

impl fmt::Display for Pollutant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Pollutant {
    type Err = PollutantParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_lowercase();
        Pollutant::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or(PollutantParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_fixed_order() {
        let codes: Vec<&str> = Pollutant::ALL.iter().map(|p| p.code()).collect();
        assert_eq!(codes, vec!["pm25", "pm10", "so2", "no2", "co", "o3"]);
    }

    #[test]
    fn test_parse_known_codes() {
        assert_eq!("pm25".parse::<Pollutant>(), Ok(Pollutant::Pm25));
        assert_eq!(" O3 ".parse::<Pollutant>(), Ok(Pollutant::O3));
    }

    #[test]
    fn test_parse_unknown_code() {
        assert_eq!(
            "aqi".parse::<Pollutant>(),
            Err(PollutantParseError("aqi".to_string()))
        );
    }
}
