use serde::{Deserialize, Serialize};

/// Liturgical colors with a display value. Tokens outside the known set map
/// to `Other`, which renders as a neutral grey.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LiturgicalColor {
    White,
    Green,
    Red,
    Purple,
    Pink,
    Black,
    Gold,
    #[serde(other)]
    Other,
}

impl LiturgicalColor {
    /// Display color for unknown tokens.
    pub const FALLBACK_HEX: &'static str = "#cccccc";

    pub fn from_token(token: &str) -> Self {
        match token {
            "WHITE" => Self::White,
            "GREEN" => Self::Green,
            "RED" => Self::Red,
            "PURPLE" => Self::Purple,
            "PINK" => Self::Pink,
            "BLACK" => Self::Black,
            "GOLD" => Self::Gold,
            _ => Self::Other,
        }
    }

    pub fn hex(self) -> &'static str {
        match self {
            Self::White => "#ffffff",
            Self::Green => "#2ecc71",
            Self::Red => "#e74c3c",
            Self::Purple => "#8e44ad",
            Self::Pink => "#ff69b4",
            Self::Black => "#000000",
            Self::Gold => "#ffd700",
            Self::Other => Self::FALLBACK_HEX,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_colors() {
        assert_eq!(LiturgicalColor::from_token("GREEN").hex(), "#2ecc71");
        assert_eq!(LiturgicalColor::from_token("WHITE").hex(), "#ffffff");
        assert_eq!(LiturgicalColor::from_token("GOLD"), LiturgicalColor::Gold);
    }

    #[test]
    fn test_unknown_color_falls_back() {
        let color = LiturgicalColor::from_token("ORANGE");
        assert_eq!(color, LiturgicalColor::Other);
        assert_eq!(color.hex(), LiturgicalColor::FALLBACK_HEX);
        assert_eq!(LiturgicalColor::from_token("").hex(), "#cccccc");
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert_eq!(LiturgicalColor::from_token("green"), LiturgicalColor::Other);
    }

    #[test]
    fn test_serde_fallback() {
        let color: LiturgicalColor = serde_json::from_str("\"ROSE\"").unwrap();
        assert_eq!(color, LiturgicalColor::Other);
        let color: LiturgicalColor = serde_json::from_str("\"PURPLE\"").unwrap();
        assert_eq!(color, LiturgicalColor::Purple);
    }
}
