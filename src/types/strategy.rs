//! Number-selection strategies and the colors/labels used to draw them.

use serde::{Deserialize, Serialize};

/// Display name used when a strategy key is not recognized.
pub const UNKNOWN_STRATEGY_NAME: &str = "Desconhecida";

/// A labeled number-selection heuristic. Only selects colors and legend text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Strategy {
    #[default]
    Random,
    HotNumbers,
    ColdNumbers,
    Balanced,
    AiSuggested,
    Last5Avg,
    /// A key with no registered style; drawn with the `random` colors.
    Unknown(String),
}

/// Fill/stroke colors and display name for a strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub display_name: &'static str,
}

const RANDOM_STYLE: StrategyStyle = StrategyStyle {
    fill: "#6c757d",
    stroke: "#495057",
    display_name: "Aleatória",
};

const HOT_NUMBERS_STYLE: StrategyStyle = StrategyStyle {
    fill: "#dc3545",
    stroke: "#c82333",
    display_name: "Números Quentes",
};

const COLD_NUMBERS_STYLE: StrategyStyle = StrategyStyle {
    fill: "#0d6efd",
    stroke: "#0a58ca",
    display_name: "Números Frios",
};

const BALANCED_STYLE: StrategyStyle = StrategyStyle {
    fill: "#fd7e14",
    stroke: "#e76102",
    display_name: "Balanceada",
};

const AI_SUGGESTED_STYLE: StrategyStyle = StrategyStyle {
    fill: "#6f42c1",
    stroke: "#5e37a6",
    display_name: "Sugestão IA",
};

const LAST_5_AVG_STYLE: StrategyStyle = StrategyStyle {
    fill: "#20c997",
    stroke: "#1ba87e",
    display_name: "Média Últimos 5",
};

impl Strategy {
    /// All strategies with a registered style, in menu order.
    pub const KNOWN: [Strategy; 6] = [
        Strategy::Random,
        Strategy::HotNumbers,
        Strategy::ColdNumbers,
        Strategy::Balanced,
        Strategy::AiSuggested,
        Strategy::Last5Avg,
    ];

    /// Parse a strategy key. Unrecognized keys are kept as [`Strategy::Unknown`].
    pub fn from_key(key: &str) -> Self {
        match key {
            "random" => Self::Random,
            "hot_numbers" => Self::HotNumbers,
            "cold_numbers" => Self::ColdNumbers,
            "balanced" => Self::Balanced,
            "ai_suggested" => Self::AiSuggested,
            "last_5_avg" => Self::Last5Avg,
            other => Self::Unknown(other.to_string()),
        }
    }

    pub fn key(&self) -> &str {
        match self {
            Self::Random => "random",
            Self::HotNumbers => "hot_numbers",
            Self::ColdNumbers => "cold_numbers",
            Self::Balanced => "balanced",
            Self::AiSuggested => "ai_suggested",
            Self::Last5Avg => "last_5_avg",
            Self::Unknown(key) => key,
        }
    }

    /// Registered style, or `None` for unknown keys.
    pub fn style(&self) -> Option<&'static StrategyStyle> {
        match self {
            Self::Random => Some(&RANDOM_STYLE),
            Self::HotNumbers => Some(&HOT_NUMBERS_STYLE),
            Self::ColdNumbers => Some(&COLD_NUMBERS_STYLE),
            Self::Balanced => Some(&BALANCED_STYLE),
            Self::AiSuggested => Some(&AI_SUGGESTED_STYLE),
            Self::Last5Avg => Some(&LAST_5_AVG_STYLE),
            Self::Unknown(_) => None,
        }
    }

    /// Colors to draw with; unknown keys borrow the `random` colors.
    pub fn colors(&self) -> (&'static str, &'static str) {
        match self.style() {
            Some(style) => (style.fill, style.stroke),
            None => (RANDOM_STYLE.fill, RANDOM_STYLE.stroke),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self.style() {
            Some(style) => style.display_name,
            None => UNKNOWN_STRATEGY_NAME,
        }
    }

    pub fn is_known(&self) -> bool {
        self.style().is_some()
    }
}

impl From<String> for Strategy {
    fn from(key: String) -> Self {
        match Self::from_key(&key) {
            Self::Unknown(_) => Self::Unknown(key),
            known => known,
        }
    }
}

impl From<&str> for Strategy {
    fn from(key: &str) -> Self {
        Self::from_key(key)
    }
}

impl From<Strategy> for String {
    fn from(strategy: Strategy) -> Self {
        match strategy {
            Strategy::Unknown(key) => key,
            known => known.key().to_string(),
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
