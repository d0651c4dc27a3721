use serde::{Deserialize, Serialize};
use std::fmt;
use validator::{Validate, ValidationError};

/// Generation technology of a unit.
///
/// Unknown wire values deserialize to [`UnitType::Unknown`] instead of
/// failing the request; such units are never ranked for dispatch and end up
/// with a zero allocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum UnitType {
    Wind,
    Gas,
    Turbojet,
    Unknown,
}

impl UnitType {
    /// Dispatchable thermal units participate in the merit-order fill.
    pub fn is_thermal(&self) -> bool {
        matches!(self, UnitType::Gas | UnitType::Turbojet)
    }
}

impl From<&str> for UnitType {
    fn from(s: &str) -> Self {
        match s {
            "windturbine" => UnitType::Wind,
            "gasfired" => UnitType::Gas,
            "turbojet" => UnitType::Turbojet,
            _ => UnitType::Unknown,
        }
    }
}

impl From<String> for UnitType {
    fn from(s: String) -> Self {
        s.as_str().into()
    }
}

impl From<UnitType> for String {
    fn from(t: UnitType) -> Self {
        t.to_string()
    }
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitType::Wind => write!(f, "windturbine"),
            UnitType::Gas => write!(f, "gasfired"),
            UnitType::Turbojet => write!(f, "turbojet"),
            UnitType::Unknown => write!(f, "unknown"),
        }
    }
}

/// A power-generating unit as submitted in a plan request.
///
/// `pmin` is the minimum stable output: a thermal unit is either off (0 MW)
/// or running somewhere in `[pmin, pmax]`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_power_band"))]
pub struct GenerationUnit {
    pub name: String,

    #[serde(rename = "type")]
    pub kind: UnitType,

    /// Energy output per unit of fuel energy input. Must be strictly
    /// positive so marginal cost is well defined.
    #[validate(range(exclusive_min = 0.0))]
    pub efficiency: f64,

    pub pmin: u32,
    pub pmax: u32,
}

impl GenerationUnit {
    pub fn pmin_mw(&self) -> f64 {
        f64::from(self.pmin)
    }

    pub fn pmax_mw(&self) -> f64 {
        f64::from(self.pmax)
    }
}

fn validate_power_band(unit: &GenerationUnit) -> Result<(), ValidationError> {
    if unit.pmin > unit.pmax {
        let mut err = ValidationError::new("pmin_above_pmax");
        err.message = Some("pmin must not exceed pmax".into());
        return Err(err);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(kind: &str, efficiency: f64, pmin: u32, pmax: u32) -> GenerationUnit {
        GenerationUnit {
            name: "u1".to_string(),
            kind: kind.into(),
            efficiency,
            pmin,
            pmax,
        }
    }

    #[test]
    fn parses_known_wire_types() {
        assert_eq!(UnitType::from("windturbine"), UnitType::Wind);
        assert_eq!(UnitType::from("gasfired"), UnitType::Gas);
        assert_eq!(UnitType::from("turbojet"), UnitType::Turbojet);
    }

    #[test]
    fn unknown_wire_type_does_not_fail_deserialization() {
        let json = r#"{"name":"x","type":"coalfired","efficiency":0.5,"pmin":0,"pmax":100}"#;
        let unit: GenerationUnit = serde_json::from_str(json).unwrap();
        assert_eq!(unit.kind, UnitType::Unknown);
    }

    #[test]
    fn thermal_classification() {
        assert!(UnitType::Gas.is_thermal());
        assert!(UnitType::Turbojet.is_thermal());
        assert!(!UnitType::Wind.is_thermal());
        assert!(!UnitType::Unknown.is_thermal());
    }

    #[test]
    fn rejects_non_positive_efficiency() {
        assert!(unit("gasfired", 0.0, 0, 100).validate().is_err());
        assert!(unit("gasfired", -0.5, 0, 100).validate().is_err());
        assert!(unit("gasfired", 0.53, 0, 100).validate().is_ok());
    }

    #[test]
    fn rejects_inverted_power_band() {
        assert!(unit("gasfired", 0.5, 200, 100).validate().is_err());
        assert!(unit("gasfired", 0.5, 100, 100).validate().is_ok());
    }
}
