//! User-tunable model settings.
//!
//! Weights and risk tolerance are not range-checked: out-of-range values
//! flow through the arithmetic and can produce negative or inflated scores.

use serde::{Deserialize, Serialize};

/// Which position, if any, gets a priority bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PositionPriority {
    #[default]
    #[serde(rename = "balanced")]
    Balanced,
    #[serde(rename = "RB-heavy")]
    RbHeavy,
    #[serde(rename = "WR-heavy")]
    WrHeavy,
    #[serde(rename = "elite-QB")]
    EliteQb,
}

impl std::fmt::Display for PositionPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PositionPriority::Balanced => write!(f, "balanced"),
            PositionPriority::RbHeavy => write!(f, "RB-heavy"),
            PositionPriority::WrHeavy => write!(f, "WR-heavy"),
            PositionPriority::EliteQb => write!(f, "elite-QB"),
        }
    }
}

/// Coarse label for a risk tolerance value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskProfile {
    Conservative,
    Balanced,
    Aggressive,
}

impl RiskProfile {
    pub fn from_tolerance(risk_tolerance: f64) -> Self {
        if risk_tolerance < 0.3 {
            RiskProfile::Conservative
        } else if risk_tolerance > 0.7 {
            RiskProfile::Aggressive
        } else {
            RiskProfile::Balanced
        }
    }
}

impl std::fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskProfile::Conservative => write!(f, "Conservative (Floor)"),
            RiskProfile::Balanced => write!(f, "Balanced"),
            RiskProfile::Aggressive => write!(f, "Aggressive (Ceiling)"),
        }
    }
}

/// Weights steering the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    /// 0 = floor-weighted, 1 = ceiling-weighted
    #[serde(default = "default_risk_tolerance")]
    pub risk_tolerance: f64,

    #[serde(default)]
    pub position_priority: PositionPriority,

    #[serde(default = "default_vorp_weight")]
    pub vorp_weight: f64,

    #[serde(default = "default_consistency_weight")]
    pub consistency_weight: f64,

    #[serde(default = "default_injury_weight")]
    pub injury_weight: f64,
}

fn default_risk_tolerance() -> f64 {
    0.5
}

fn default_vorp_weight() -> f64 {
    0.7
}

fn default_consistency_weight() -> f64 {
    0.3
}

fn default_injury_weight() -> f64 {
    0.5
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            risk_tolerance: default_risk_tolerance(),
            position_priority: PositionPriority::default(),
            vorp_weight: default_vorp_weight(),
            consistency_weight: default_consistency_weight(),
            injury_weight: default_injury_weight(),
        }
    }
}

impl ModelSettings {
    pub fn risk_profile(&self) -> RiskProfile {
        RiskProfile::from_tolerance(self.risk_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_settings_default() {
        let settings = ModelSettings::default();
        assert_eq!(settings.risk_tolerance, 0.5);
        assert_eq!(settings.position_priority, PositionPriority::Balanced);
        assert_eq!(settings.vorp_weight, 0.7);
        assert_eq!(settings.consistency_weight, 0.3);
        assert_eq!(settings.injury_weight, 0.5);
    }

    #[test]
    fn test_model_settings_wire_format() {
        let json = r#"{"riskTolerance": 0.9, "positionPriority": "elite-QB"}"#;
        let settings: ModelSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.risk_tolerance, 0.9);
        assert_eq!(settings.position_priority, PositionPriority::EliteQb);
        assert_eq!(settings.vorp_weight, 0.7);
    }

    #[test]
    fn test_model_settings_accepts_out_of_range_weights() {
        let json = r#"{"vorpWeight": -2.0, "riskTolerance": 3.5}"#;
        let settings: ModelSettings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.vorp_weight, -2.0);
        assert_eq!(settings.risk_tolerance, 3.5);
    }

    #[test]
    fn test_position_priority_serialization() {
        assert_eq!(
            serde_json::to_string(&PositionPriority::RbHeavy).unwrap(),
            "\"RB-heavy\""
        );
        assert!(serde_json::from_str::<PositionPriority>("\"TE-heavy\"").is_err());
        assert_eq!(PositionPriority::EliteQb.to_string(), "elite-QB");
    }

    #[test]
    fn test_risk_profile_from_tolerance() {
        assert_eq!(RiskProfile::from_tolerance(0.0), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_tolerance(0.29), RiskProfile::Conservative);
        assert_eq!(RiskProfile::from_tolerance(0.3), RiskProfile::Balanced);
        assert_eq!(RiskProfile::from_tolerance(0.7), RiskProfile::Balanced);
        assert_eq!(RiskProfile::from_tolerance(0.71), RiskProfile::Aggressive);
    }

    #[test]
    fn test_risk_profile_display() {
        assert_eq!(
            format!("{}", RiskProfile::Conservative),
            "Conservative (Floor)"
        );
        assert_eq!(format!("{}", RiskProfile::Aggressive), "Aggressive (Ceiling)");
    }
}
