//! Template formats and caller-supplied emodel properties

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use super::resolver::TemplateError;

/// Structural convention a cell template follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateFormat {
    /// Self-contained legacy templates produced by BluePyOpt
    Bluepyopt,
    /// Circuit-style templates that may declare needed attributes
    V6,
}

impl TemplateFormat {
    /// Whether templates of this format can declare `NeededAttributes`,
    /// requiring emodel properties to be injected at instantiation time
    pub fn supports_needed_attributes(self) -> bool {
        matches!(self, TemplateFormat::V6)
    }

    /// Canonical lowercase tag for this format
    pub fn as_str(self) -> &'static str {
        match self {
            TemplateFormat::Bluepyopt => "bluepyopt",
            TemplateFormat::V6 => "v6",
        }
    }
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateFormat {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bluepyopt" => Ok(TemplateFormat::Bluepyopt),
            "v6" => Ok(TemplateFormat::V6),
            other => Err(TemplateError::UnknownFormat {
                value: other.to_string(),
            }),
        }
    }
}

/// Caller-supplied emodel parameters, injected into templates that declare
/// needed attributes
///
/// Both scalers default to `1.0`, matching what templates assume when a
/// recipe leaves them out.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct EmodelProperties {
    /// Spike threshold current, nA
    pub threshold_current: f64,
    /// Holding current, nA
    pub holding_current: f64,
    /// Axon initial segment conductance scaler
    #[serde(rename = "AIS_scaler", default = "default_scaler")]
    pub ais_scaler: f64,
    /// Soma conductance scaler
    #[serde(default = "default_scaler")]
    pub soma_scaler: f64,
}

fn default_scaler() -> f64 {
    1.0
}

impl EmodelProperties {
    /// Create properties from the two currents, with both scalers at `1.0`
    pub fn new(threshold_current: f64, holding_current: f64) -> Self {
        Self {
            threshold_current,
            holding_current,
            ais_scaler: 1.0,
            soma_scaler: 1.0,
        }
    }

    /// Set the AIS conductance scaler
    pub fn with_ais_scaler(mut self, scaler: f64) -> Self {
        self.ais_scaler = scaler;
        self
    }

    /// Set the soma conductance scaler
    pub fn with_soma_scaler(mut self, scaler: f64) -> Self {
        self.soma_scaler = scaler;
        self
    }

    /// Property names and values in the order templates expect them
    pub fn named_values(&self) -> [(&'static str, f64); 4] {
        [
            ("threshold_current", self.threshold_current),
            ("holding_current", self.holding_current),
            ("AIS_scaler", self.ais_scaler),
            ("soma_scaler", self.soma_scaler),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags_round_trip() {
        assert_eq!(
            "bluepyopt".parse::<TemplateFormat>().expect("Should parse"),
            TemplateFormat::Bluepyopt
        );
        assert_eq!(
            "v6".parse::<TemplateFormat>().expect("Should parse"),
            TemplateFormat::V6
        );
        assert_eq!(TemplateFormat::Bluepyopt.to_string(), "bluepyopt");
        assert_eq!(TemplateFormat::V6.to_string(), "v6");
    }

    #[test]
    fn test_unknown_format_tag() {
        let err = "v5".parse::<TemplateFormat>().unwrap_err();
        assert!(matches!(err, TemplateError::UnknownFormat { .. }));
        assert_eq!(err.to_string(), "unknown template format: v5");
    }

    #[test]
    fn test_needed_attributes_support() {
        assert!(TemplateFormat::V6.supports_needed_attributes());
        assert!(!TemplateFormat::Bluepyopt.supports_needed_attributes());
    }

    #[test]
    fn test_scaler_defaults() {
        let props = EmodelProperties::new(0.184, -0.062);
        assert_eq!(props.ais_scaler, 1.0);
        assert_eq!(props.soma_scaler, 1.0);
    }

    #[test]
    fn test_scaler_builders() {
        let props = EmodelProperties::new(0.184, -0.062)
            .with_ais_scaler(1.45)
            .with_soma_scaler(0.97);
        assert_eq!(props.ais_scaler, 1.45);
        assert_eq!(props.soma_scaler, 0.97);
    }

    #[test]
    fn test_named_values_order() {
        let props = EmodelProperties::new(0.184, -0.062).with_ais_scaler(1.45);
        let names: Vec<&str> = props.named_values().iter().map(|(n, _)| *n).collect();
        assert_eq!(
            names,
            vec![
                "threshold_current",
                "holding_current",
                "AIS_scaler",
                "soma_scaler"
            ]
        );
    }
}
