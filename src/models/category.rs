use serde::{Deserialize, Serialize};

/// The fixed set of spending categories. Anything that doesn't fit the
/// first four lands in `Other`; free-form categories are deliberately
/// not supported so limits and statistics stay comparable over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Category {
    Food,
    Transport,
    Entertainment,
    Clothing,
    Other,
}

impl Category {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Transport => "transport",
            Self::Entertainment => "entertainment",
            Self::Clothing => "clothing",
            Self::Other => "other",
        }
    }

    /// Parse a user-supplied token. Returns `None` for anything outside
    /// the fixed set; callers reject, they never guess.
    pub(crate) fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "food" => Some(Self::Food),
            "transport" => Some(Self::Transport),
            "entertainment" => Some(Self::Entertainment),
            "clothing" => Some(Self::Clothing),
            "other" => Some(Self::Other),
            _ => None,
        }
    }

    pub(crate) fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Clothing,
            Self::Other,
        ]
    }

    /// Icon shown next to the category in listings and stats.
    pub(crate) fn icon(&self) -> &'static str {
        match self {
            Self::Food => "🍕",
            Self::Transport => "🚌",
            Self::Entertainment => "🎮",
            Self::Clothing => "👕",
            Self::Other => "📦",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
