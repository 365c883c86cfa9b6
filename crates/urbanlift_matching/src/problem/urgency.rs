use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::problem::error::ShipmentError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    #[default]
    #[serde(alias = "standard")]
    Normal,
    High,
    Urgent,
    /// Any level outside the four rated ones.
    #[serde(other)]
    Medium,
}

impl Urgency {
    pub const ALL: [Urgency; 4] = [Urgency::Low, Urgency::Normal, Urgency::High, Urgency::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Urgency::Low => "low",
            Urgency::Normal => "normal",
            Urgency::High => "high",
            Urgency::Urgent => "urgent",
            Urgency::Medium => "medium",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Urgency {
    type Err = ShipmentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Urgency::Low),
            "normal" | "standard" => Ok(Urgency::Normal),
            "high" => Ok(Urgency::High),
            "urgent" => Ok(Urgency::Urgent),
            "medium" => Ok(Urgency::Medium),
            _ => Err(ShipmentError::UnknownUrgency(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("Standard".parse::<Urgency>(), Ok(Urgency::Normal));
        assert_eq!("URGENT".parse::<Urgency>(), Ok(Urgency::Urgent));
        assert_eq!(
            "asap".parse::<Urgency>(),
            Err(ShipmentError::UnknownUrgency(String::from("asap")))
        );
    }

    #[test]
    fn test_deserialize_alias() {
        let urgency: Urgency = serde_json::from_str("\"standard\"").unwrap();
        assert_eq!(urgency, Urgency::Normal);
    }

    #[test]
    fn test_deserialize_unrated_level() {
        let urgency: Urgency = serde_json::from_str("\"whenever\"").unwrap();
        assert_eq!(urgency, Urgency::Medium);
        assert_eq!("Medium".parse::<Urgency>(), Ok(Urgency::Medium));
    }
}
