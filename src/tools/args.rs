use adk_core::{AdkError, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

const NEW_YORK: &str = "new york";

/// Arguments shared by both tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CityArgs {
    /// The name of the city, for example "New York"
    pub city: String,
}

impl CityArgs {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }

    /// Decodes the JSON arguments of a tool call.
    pub fn from_value(tool: &str, args: Value) -> Result<Self> {
        serde_json::from_value(args)
            .map_err(|e| AdkError::Tool(format!("invalid arguments for {}: {}", tool, e)))
    }

    /// Case-folded match against the only city with data. No trimming.
    pub fn is_new_york(&self) -> bool {
        self.city.to_lowercase() == NEW_YORK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_from_value() {
        let args = CityArgs::from_value("get_weather", json!({"city": "Paris"})).unwrap();
        assert_eq!(args, CityArgs::new("Paris"));
    }

    #[test]
    fn test_from_value_missing_city() {
        let err = CityArgs::from_value("get_weather", json!({})).unwrap_err();
        assert!(matches!(err, AdkError::Tool(_)));
        assert!(err.to_string().contains("invalid arguments for get_weather"));
    }

    #[test]
    fn test_from_value_wrong_type() {
        let err = CityArgs::from_value("get_current_time", json!({"city": 42})).unwrap_err();
        assert!(err.to_string().contains("get_current_time"));
    }

    #[test]
    fn test_is_new_york_casings() {
        for city in ["new york", "NEW YORK", "New York", "nEw YoRk"] {
            assert!(CityArgs::new(city).is_new_york(), "{city}");
        }
    }

    #[test]
    fn test_is_new_york_no_normalization() {
        for city in [" new york", "new york ", "newyork", "new-york", "New York City", ""] {
            assert!(!CityArgs::new(city).is_new_york(), "{city:?}");
        }
    }

    #[test]
    fn test_schema_has_city_string() {
        let schema = serde_json::to_value(schemars::schema_for!(CityArgs)).unwrap();
        assert_eq!(schema["properties"]["city"]["type"], "string");
        assert_eq!(schema["required"], json!(["city"]));
    }

    proptest! {
        #[test]
        fn prop_any_casing_matches(mask in proptest::collection::vec(any::<bool>(), 8)) {
            let city: String = NEW_YORK
                .chars()
                .zip(mask)
                .map(|(c, upper)| if upper { c.to_ascii_uppercase() } else { c })
                .collect();
            prop_assert!(CityArgs::new(city).is_new_york());
        }

        #[test]
        fn prop_other_cities_do_not_match(city in "\\PC{0,24}") {
            prop_assume!(city.to_lowercase() != NEW_YORK);
            prop_assert!(!CityArgs::new(city).is_new_york());
        }
    }
}
