use serde::{Deserialize, Serialize};
use std::fmt;

/// Age classification of a video.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "ER")]
    Er,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "10")]
    Age10,
    #[serde(rename = "12")]
    Age12,
    #[serde(rename = "14")]
    Age14,
    #[serde(rename = "16")]
    Age16,
    #[serde(rename = "18")]
    Age18,
}

impl Rating {
    pub const ALL: [Rating; 7] = [
        Rating::Er,
        Rating::L,
        Rating::Age10,
        Rating::Age12,
        Rating::Age14,
        Rating::Age16,
        Rating::Age18,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Rating::Er => "ER",
            Rating::L => "L",
            Rating::Age10 => "10",
            Rating::Age12 => "12",
            Rating::Age14 => "14",
            Rating::Age16 => "16",
            Rating::Age18 => "18",
        }
    }

    /// Looks a rating up by symbol; unknown symbols yield `None`.
    pub fn of(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|rating| rating.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_symbol_resolves() {
        for rating in Rating::ALL {
            assert_eq!(Rating::of(rating.name()), Some(rating));
        }
        assert_eq!(Rating::of("er"), Some(Rating::Er));
    }

    #[test]
    fn test_unknown_symbol_is_none() {
        assert_eq!(Rating::of("AJAJA"), None);
        assert_eq!(Rating::of(""), None);
    }
}
