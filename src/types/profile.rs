//! Lottery profiles: static metadata for every supported lottery variant.
//!
//! Profiles are grouped in an immutable [`ProfileTable`] that callers build
//! once and share (usually behind an `Arc`) with every component that needs
//! lottery metadata.

use serde::{Deserialize, Serialize};

use crate::error::{Result, WheelError};

/// Fixed rows × columns used to lay out a lottery's numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridShape {
    pub rows: u32,
    pub cols: u32,
}

impl GridShape {
    pub const fn new(rows: u32, cols: u32) -> Self {
        Self { rows, cols }
    }

    /// Number of cells in the grid.
    pub const fn capacity(self) -> u32 {
        self.rows.saturating_mul(self.cols)
    }
}

/// Static descriptor for one lottery variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotteryProfile {
    /// Lottery-type identifier (e.g. `megasena`)
    pub key: String,
    /// Display name (e.g. `Mega-Sena`)
    pub name: String,
    /// How many numbers a bet picks
    pub number_count: u32,
    /// Inclusive numeric range `[min, max]`
    pub range: (u32, u32),
    /// Size of the secondary draw (the "trevos" of Mais Milionária)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_count: Option<u32>,
    /// Inclusive range of the secondary draw
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_range: Option<(u32, u32)>,
    /// Whether a bet also picks a heart team (Timemania)
    #[serde(default)]
    pub has_team: bool,
    pub grid: GridShape,
}

impl LotteryProfile {
    /// Smallest number in range.
    pub const fn min(&self) -> u32 {
        self.range.0
    }

    /// Largest number in range.
    pub const fn max(&self) -> u32 {
        self.range.1
    }

    /// Count of numbers in range (`max - min + 1`).
    pub const fn total_numbers(&self) -> u32 {
        self.range.1.saturating_sub(self.range.0).saturating_add(1)
    }

    pub const fn contains(&self, number: u32) -> bool {
        number >= self.range.0 && number <= self.range.1
    }

    fn validate(&self) -> Result<()> {
        let (min, max) = self.range;
        if min > max {
            return Err(WheelError::Profile(format!(
                "{}: range {min}-{max} is empty",
                self.key
            )));
        }
        if self.grid.rows == 0 || self.grid.cols == 0 {
            return Err(WheelError::Profile(format!(
                "{}: grid {}x{} has no cells",
                self.key, self.grid.rows, self.grid.cols
            )));
        }
        if self.grid.capacity() < self.total_numbers() {
            return Err(WheelError::Profile(format!(
                "{}: grid {}x{} cannot hold {} numbers",
                self.key,
                self.grid.rows,
                self.grid.cols,
                self.total_numbers()
            )));
        }
        if let Some((extra_min, extra_max)) = self.extra_range {
            if extra_min > extra_max {
                return Err(WheelError::Profile(format!(
                    "{}: extra range {extra_min}-{extra_max} is empty",
                    self.key
                )));
            }
        }
        Ok(())
    }
}

/// Ordered, read-only table of lottery profiles keyed by lottery type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ProfileTable {
    profiles: Vec<LotteryProfile>,
}

impl ProfileTable {
    /// Build a table, rejecting duplicate keys and unusable profiles.
    pub fn new(profiles: Vec<LotteryProfile>) -> Result<Self> {
        for (idx, profile) in profiles.iter().enumerate() {
            profile.validate()?;
            if profiles
                .iter()
                .take(idx)
                .any(|earlier| earlier.key == profile.key)
            {
                return Err(WheelError::Profile(format!(
                    "duplicate lottery type {}",
                    profile.key
                )));
            }
        }
        Ok(Self { profiles })
    }

    /// Parse and validate a table from a JSON array of profiles.
    pub fn from_json(json: &str) -> Result<Self> {
        let profiles: Vec<LotteryProfile> = serde_json::from_str(json)?;
        Self::new(profiles)
    }

    /// The five lotteries the application supports out of the box.
    pub fn builtin() -> Self {
        fn profile(
            key: &str,
            name: &str,
            number_count: u32,
            range: (u32, u32),
            grid: GridShape,
        ) -> LotteryProfile {
            LotteryProfile {
                key: key.to_string(),
                name: name.to_string(),
                number_count,
                range,
                extra_count: None,
                extra_range: None,
                has_team: false,
                grid,
            }
        }

        let mut maismilionaria = profile(
            "maismilionaria",
            "Mais Milionária",
            6,
            (1, 50),
            GridShape::new(5, 10),
        );
        maismilionaria.extra_count = Some(2);
        maismilionaria.extra_range = Some((1, 6));

        let mut timemania = profile("timemania", "Timemania", 10, (1, 80), GridShape::new(8, 10));
        timemania.has_team = true;

        Self {
            profiles: vec![
                profile("megasena", "Mega-Sena", 6, (1, 60), GridShape::new(6, 10)),
                profile("quina", "Quina", 5, (1, 80), GridShape::new(8, 10)),
                profile("lotofacil", "Lotofácil", 15, (1, 25), GridShape::new(5, 5)),
                maismilionaria,
                timemania,
            ],
        }
    }

    /// Look up a profile by lottery type.
    pub fn get(&self, key: &str) -> Option<&LotteryProfile> {
        self.profiles.iter().find(|p| p.key == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &LotteryProfile> {
        self.profiles.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.profiles.iter().map(|p| p.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for ProfileTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl<'de> Deserialize<'de> for ProfileTable {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let profiles = Vec::<LotteryProfile>::deserialize(deserializer)?;
        Self::new(profiles).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        let table = ProfileTable::builtin();
        let rebuilt = ProfileTable::new(table.iter().cloned().collect()).unwrap();
        assert_eq!(rebuilt, table);
        assert_eq!(
            table.keys().collect::<Vec<_>>(),
            ["megasena", "quina", "lotofacil", "maismilionaria", "timemania"]
        );
    }

    #[test]
    fn test_secondary_draws() {
        let table = ProfileTable::builtin();
        let mais = table.get("maismilionaria").unwrap();
        assert_eq!(mais.extra_count, Some(2));
        assert_eq!(mais.extra_range, Some((1, 6)));
        assert!(table.get("timemania").unwrap().has_team);
        assert!(!table.get("quina").unwrap().has_team);
    }

    #[test]
    fn test_grid_too_small_is_rejected() {
        let mut profile = ProfileTable::builtin().get("megasena").unwrap().clone();
        profile.grid = GridShape::new(5, 10);
        let err = ProfileTable::new(vec![profile]).unwrap_err();
        assert!(matches!(err, WheelError::Profile(_)));
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let profile = ProfileTable::builtin().get("quina").unwrap().clone();
        assert!(ProfileTable::new(vec![profile.clone(), profile]).is_err());
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"key":"dupla","name":"Dupla Sena","numberCount":6,"range":[1,50],"grid":{"rows":5,"cols":10}}]"#;
        let table = ProfileTable::from_json(json).unwrap();
        let dupla = table.get("dupla").unwrap();
        assert_eq!(dupla.total_numbers(), 50);
        assert!(!dupla.has_team);
        assert!(dupla.extra_range.is_none());
    }

    #[test]
    fn test_serializes_camel_case() {
        let table = ProfileTable::builtin();
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.contains(r#""numberCount":15"#));
        assert!(json.contains(r#""extraRange":[1,6]"#));
        assert!(json.contains(r#""range":[1,25]"#));
    }
}
