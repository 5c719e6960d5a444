//! Color ownership registry: the first name to claim a color keeps it.
//!
//! One registry is created per namespace (biomes, blocks+variants) for a
//! single rendering pass. Entries are never removed or overwritten.

use rustc_hash::FxHashMap;

use legend_catalog::Color;

/// Outcome of [`ColorRegistry::try_claim`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Claim {
    /// The color was free and now belongs to the claimant.
    Claimed,
    /// The color already belongs to the contained name; nothing changed.
    Conflict(String),
}

/// Maps each claimed color to the first name that claimed it.
///
/// Colors are keyed by [`Color::normalized`], so two values that render to
/// the same swatch are the same color here.
#[derive(Debug, Default)]
pub struct ColorRegistry {
    owners: FxHashMap<Color, String>,
}

impl ColorRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `name` as owner of `color` unless someone already owns it.
    pub fn try_claim(&mut self, color: Color, name: &str) -> Claim {
        let key = color.normalized();
        if let Some(existing) = self.owners.get(&key) {
            return Claim::Conflict(existing.clone());
        }
        self.owners.insert(key, name.to_string());
        Claim::Claimed
    }

    /// Returns the owner of `color`, if claimed.
    pub fn owner(&self, color: Color) -> Option<&str> {
        self.owners.get(&color.normalized()).map(String::as_str)
    }

    /// Number of claimed colors.
    pub fn len(&self) -> usize {
        self.owners.len()
    }

    /// Returns `true` if nothing has been claimed yet.
    pub fn is_empty(&self) -> bool {
        self.owners.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_claim_succeeds() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.try_claim(Color(0x77AD3F), "Plains"), Claim::Claimed);
        assert_eq!(registry.owner(Color(0x77AD3F)), Some("Plains"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_conflict_reports_first_owner_and_keeps_it() {
        let mut registry = ColorRegistry::new();
        registry.try_claim(Color(0x77AD3F), "Plains");

        let claim = registry.try_claim(Color(0x77AD3F), "Meadow");
        assert_eq!(claim, Claim::Conflict("Plains".to_string()));

        let claim = registry.try_claim(Color(0x77AD3F), "Prairie");
        assert_eq!(claim, Claim::Conflict("Plains".to_string()));
        assert_eq!(registry.owner(Color(0x77AD3F)), Some("Plains"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_same_name_different_colors() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.try_claim(Color(0x000000), "Stone"), Claim::Claimed);
        assert_eq!(registry.try_claim(Color(0x000001), "Stone"), Claim::Claimed);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_high_byte_does_not_distinguish_colors() {
        let mut registry = ColorRegistry::new();
        assert_eq!(registry.try_claim(Color(0x0077_AD3F), "Plains"), Claim::Claimed);

        let claim = registry.try_claim(Color(0xFF77_AD3F), "Meadow");
        assert_eq!(claim, Claim::Conflict("Plains".to_string()));
        assert_eq!(registry.owner(Color(0x8077_AD3F)), Some("Plains"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_instances_are_independent() {
        let mut biomes = ColorRegistry::new();
        let mut blocks = ColorRegistry::new();
        biomes.try_claim(Color(0xFFFFFF), "Snowy Tundra");
        assert_eq!(blocks.try_claim(Color(0xFFFFFF), "Snow"), Claim::Claimed);
        assert!(!biomes.is_empty());
        assert_eq!(blocks.owner(Color(0xFFFFFF)), Some("Snow"));
    }
}
