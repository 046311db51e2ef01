//! Wheel configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use super::{LotteryProfile, Strategy};
use crate::error::Result;

pub const DEFAULT_LOTTERY_TYPE: &str = "megasena";
pub const DEFAULT_WIDTH: f64 = 320.0;
pub const DEFAULT_HEIGHT: f64 = 320.0;
pub const DEFAULT_MARGIN: f64 = 40.0;
pub const DEFAULT_NUMBER_SIZE: f64 = 30.0;

/// Everything one wheel needs to draw itself.
///
/// Deserializes from camelCase JSON or JS objects where every field is
/// optional. A renderer owns its config and replaces it wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WheelConfig {
    /// Key into the profile table
    pub lottery_type: String,
    /// Drawing width in pixels
    pub width: f64,
    /// Drawing height in pixels
    pub height: f64,
    /// Empty border around the grid in pixels
    pub margin: f64,
    /// Nominal marker size; the layout derives the radius from the grid instead.
    pub number_size: f64,
    /// Any integers; those outside the lottery's range match no marker.
    #[serde(deserialize_with = "integers_only")]
    pub highlighted_numbers: BTreeSet<i64>,
    pub strategy: Strategy,
}

/// Keep the integer entries of a list, dropping anything else.
fn integers_only<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let values = Vec::<Value>::deserialize(deserializer)?;
    let mut numbers = BTreeSet::new();
    for value in values {
        match value.as_i64() {
            Some(number) => {
                numbers.insert(number);
            }
            None => console_warn!("Ignoring highlighted number {value}: not an integer"),
        }
    }
    Ok(numbers)
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            lottery_type: DEFAULT_LOTTERY_TYPE.to_string(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            margin: DEFAULT_MARGIN,
            number_size: DEFAULT_NUMBER_SIZE,
            highlighted_numbers: BTreeSet::new(),
            strategy: Strategy::Random,
        }
    }
}

impl WheelConfig {
    /// Default config for `lottery_type` with the given selection.
    pub fn new<I, N>(lottery_type: &str, highlighted_numbers: I, strategy: Strategy) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<i64>,
    {
        Self {
            lottery_type: lottery_type.to_string(),
            highlighted_numbers: highlighted_numbers.into_iter().map(Into::into).collect(),
            strategy,
            ..Self::default()
        }
    }

    /// Parse a config from JSON, filling absent fields with defaults.
    ///
    /// Fields holding unusable values are logged and take their defaults;
    /// only malformed JSON is an error.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let (config, rejected) = Self::from_value(value)?;
        for field in rejected {
            console_warn!("Invalid wheel option {field}, using its default");
        }
        Ok(config)
    }

    /// Build a config from a JSON object, keeping every field that parses.
    ///
    /// Returns the config and the names of the fields that were dropped.
    /// A value that is not an object must deserialize as a whole.
    pub fn from_value(value: Value) -> Result<(Self, Vec<String>)> {
        let Value::Object(fields) = value else {
            return Ok((serde_json::from_value(value)?, Vec::new()));
        };

        let mut kept = Map::new();
        let mut rejected = Vec::new();
        for (name, field) in fields {
            let single = Value::Object(Map::from_iter([(name.clone(), field)]));
            if Self::deserialize(&single).is_err() {
                rejected.push(name);
            } else if let Value::Object(single) = single {
                kept.extend(single);
            }
        }
        Ok((serde_json::from_value(Value::Object(kept))?, rejected))
    }

    pub fn is_highlighted(&self, number: u32) -> bool {
        self.highlighted_numbers.contains(&i64::from(number))
    }

    /// Highlighted numbers that no marker of `profile` can show.
    pub fn out_of_range(&self, profile: &LotteryProfile) -> Vec<i64> {
        self.highlighted_numbers
            .iter()
            .copied()
            .filter(|n| u32::try_from(*n).map_or(true, |n| !profile.contains(n)))
            .collect()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::types::ProfileTable;

    #[test]
    fn test_defaults() {
        let config = WheelConfig::default();
        assert_eq!(config.lottery_type, "megasena");
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, 320.0);
        assert_eq!(config.margin, 40.0);
        assert_eq!(config.number_size, 30.0);
        assert!(config.highlighted_numbers.is_empty());
        assert_eq!(config.strategy, Strategy::Random);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = WheelConfig::from_json(
            r#"{"lotteryType":"quina","highlightedNumbers":[7,3,7],"strategy":"cold_numbers"}"#,
        )
        .unwrap();
        assert_eq!(config.lottery_type, "quina");
        assert_eq!(config.width, 320.0);
        assert_eq!(
            config.highlighted_numbers.iter().copied().collect::<Vec<_>>(),
            vec![3, 7]
        );
        assert_eq!(config.strategy, Strategy::ColdNumbers);
    }

    #[test]
    fn test_out_of_range() {
        let table = ProfileTable::builtin();
        let config = WheelConfig::new("lotofacil", [0, 3, 25, 26], Strategy::Balanced);
        let profile = table.get("lotofacil").unwrap();
        assert_eq!(config.out_of_range(profile), vec![0, 26]);
    }

    #[test]
    fn test_negative_numbers_parse_and_stay_out_of_range() {
        let table = ProfileTable::builtin();
        let config = WheelConfig::from_json(r#"{"highlightedNumbers":[-3,5]}"#).unwrap();
        let profile = table.get("megasena").unwrap();
        assert_eq!(config.out_of_range(profile), vec![-3]);
        assert!(config.is_highlighted(5));
    }

    #[test]
    fn test_non_integer_entries_are_dropped() {
        let config =
            WheelConfig::from_json(r#"{"highlightedNumbers":[1, 2.5, "7", null, 9]}"#).unwrap();
        assert_eq!(
            config.highlighted_numbers.iter().copied().collect::<Vec<_>>(),
            vec![1, 9]
        );
    }

    #[test]
    fn test_bad_fields_fall_back_alone() {
        let (config, rejected) = WheelConfig::from_value(serde_json::json!({
            "lotteryType": "quina",
            "width": "wide",
            "strategy": null,
            "highlightedNumbers": [4],
        }))
        .unwrap();
        assert_eq!(config.lottery_type, "quina");
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.strategy, Strategy::Random);
        assert!(config.is_highlighted(4));
        rejected.iter().for_each(|name| assert!(name == "width" || name == "strategy"));
        assert_eq!(rejected.len(), 2);
    }

    #[test]
    fn test_non_object_must_parse_whole() {
        assert!(WheelConfig::from_value(serde_json::json!([1, 2])).is_err());
        assert!(WheelConfig::from_json("{oops").is_err());
    }
}
