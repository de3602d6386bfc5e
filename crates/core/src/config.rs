//! Rules configuration for a game session.

/// How a full row is removed during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ClearMode {
    /// Empty the row and leave every row above where it was
    #[default]
    InPlace,
    /// Remove the row and shift every row above it down by one
    Collapse,
}

impl ClearMode {
    /// Parse a clear mode name (case-insensitive)
    ///
    /// Accepts "in-place" | "inplace" and "collapse" | "shift".
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in-place" | "inplace" => Some(ClearMode::InPlace),
            "collapse" | "shift" => Some(ClearMode::Collapse),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearMode::InPlace => "in-place",
            ClearMode::Collapse => "collapse",
        }
    }
}

/// Rule switches fixed for the lifetime of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rules {
    pub clear_mode: ClearMode,
}

impl Rules {
    pub fn new(clear_mode: ClearMode) -> Self {
        Self { clear_mode }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_clear_in_place() {
        assert_eq!(Rules::default().clear_mode, ClearMode::InPlace);
    }

    #[test]
    fn test_clear_mode_from_str() {
        assert_eq!(ClearMode::from_str("in-place"), Some(ClearMode::InPlace));
        assert_eq!(ClearMode::from_str("InPlace"), Some(ClearMode::InPlace));
        assert_eq!(ClearMode::from_str("collapse"), Some(ClearMode::Collapse));
        assert_eq!(ClearMode::from_str("SHIFT"), Some(ClearMode::Collapse));
        assert_eq!(ClearMode::from_str("gravity"), None);

        for mode in [ClearMode::InPlace, ClearMode::Collapse] {
            assert_eq!(ClearMode::from_str(mode.as_str()), Some(mode));
        }
    }
}
