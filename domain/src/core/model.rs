//! Model value object representing a generative-language model

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Available Gemini models (Value Object)
///
/// Every agent in the workflow is backed by one of these. Unknown names are
/// kept verbatim as [`Model::Custom`] so new model ids work without a release.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Model {
    Gemini20FlashExp,
    Gemini20Flash,
    Gemini25Flash,
    Gemini25Pro,
    Custom(String),
}

impl Model {
    /// Get the string identifier for this model
    pub fn as_str(&self) -> &str {
        match self {
            Model::Gemini20FlashExp => "gemini-2.0-flash-exp",
            Model::Gemini20Flash => "gemini-2.0-flash",
            Model::Gemini25Flash => "gemini-2.5-flash",
            Model::Gemini25Pro => "gemini-2.5-pro",
            Model::Custom(s) => s,
        }
    }

    /// Human-friendly name used in "APIs used" listings
    pub fn display_name(&self) -> String {
        match self {
            Model::Gemini20FlashExp | Model::Gemini20Flash => "Gemini 2.0 Flash".to_string(),
            Model::Gemini25Flash => "Gemini 2.5 Flash".to_string(),
            Model::Gemini25Pro => "Gemini 2.5 Pro".to_string(),
            Model::Custom(s) => s.clone(),
        }
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::Gemini20FlashExp
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Model {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // The generative-language API also accepts a "gemini/" routing prefix
        let s = s.trim().trim_start_matches("gemini/");
        Ok(match s {
            "gemini-2.0-flash-exp" => Model::Gemini20FlashExp,
            "gemini-2.0-flash" => Model::Gemini20Flash,
            "gemini-2.5-flash" => Model::Gemini25Flash,
            "gemini-2.5-pro" => Model::Gemini25Pro,
            other => Model::Custom(other.to_string()),
        })
    }
}

impl Serialize for Model {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Model {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let Ok(model) = s.parse::<Model>();
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_models_parse_back() {
        for model in [
            Model::Gemini20FlashExp,
            Model::Gemini20Flash,
            Model::Gemini25Flash,
            Model::Gemini25Pro,
        ] {
            let parsed: Model = model.to_string().parse().unwrap();
            assert_eq!(model, parsed);
        }
    }

    #[test]
    fn test_custom_model() {
        let model: Model = "gemini-3-ultra".parse().unwrap();
        assert_eq!(model, Model::Custom("gemini-3-ultra".to_string()));
        assert_eq!(model.to_string(), "gemini-3-ultra");
    }

    #[test]
    fn test_routing_prefix_is_stripped() {
        let model: Model = "gemini/gemini-2.0-flash-exp".parse().unwrap();
        assert_eq!(model, Model::Gemini20FlashExp);
    }

    #[test]
    fn test_model_default() {
        assert_eq!(Model::default(), Model::Gemini20FlashExp);
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Model::Gemini25Flash).unwrap();
        assert_eq!(json, "\"gemini-2.5-flash\"");
        let model: Model = serde_json::from_str("\"gemini-2.5-pro\"").unwrap();
        assert_eq!(model, Model::Gemini25Pro);
    }
}
