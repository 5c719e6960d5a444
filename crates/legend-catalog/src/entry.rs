//! Catalog entry types: biomes, blocks and block variants.

use serde::{Deserialize, Serialize};

use crate::Color;

/// A biome definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BiomeEntry {
    /// Numeric biome identifier.
    pub id: u32,
    /// Display name (e.g. "Plains").
    pub name: String,
    /// Map color. `None` when the definition does not set one.
    #[serde(default)]
    pub color: Option<Color>,
}

/// A named sub-variant of a block (e.g. one wool color).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantEntry {
    /// Variant key, usually the block data value.
    pub key: u32,
    /// Raw variant name (e.g. "Red Wool").
    pub name: String,
    /// Short label shown next to the parent block name (e.g. "Red").
    #[serde(default)]
    pub label: Option<String>,
    /// Map color of this variant.
    pub color: Color,
}

/// A block definition with its ordered variants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockEntry {
    /// Numeric block identifier.
    pub id: u32,
    /// Display name (e.g. "Wool").
    pub name: String,
    /// Map color. `None` when the definition does not set one.
    #[serde(default)]
    pub color: Option<Color>,
    /// Variants in definition order; empty if the block has none.
    #[serde(default)]
    pub variants: Vec<VariantEntry>,
}

impl BlockEntry {
    /// Returns `true` if the block defines at least one variant.
    pub fn has_variants(&self) -> bool {
        !self.variants.is_empty()
    }

    /// Returns the variant with the given key.
    pub fn variant(&self, key: u32) -> Option<&VariantEntry> {
        self.variants.iter().find(|v| v.key == key)
    }

    /// Presentation name of one of this block's variants.
    ///
    /// A labelled variant reads `"<block> (<label>)"`; an unlabelled one keeps
    /// its raw name.
    pub fn resolve_variant_name(&self, variant: &VariantEntry) -> String {
        match &variant.label {
            Some(label) => format!("{} ({})", self.name, label),
            None => variant.name.clone(),
        }
    }

    /// Presentation name of the variant with `key`.
    ///
    /// Unknown keys read `"<block> (variant <key>)"`.
    pub fn variant_display_name(&self, key: u32) -> String {
        match self.variant(key) {
            Some(variant) => self.resolve_variant_name(variant),
            None => format!("{} (variant {})", self.name, key),
        }
    }
}

/// Full definition catalog: biomes and blocks in source order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    /// Biome definitions.
    pub biomes: Vec<BiomeEntry>,
    /// Block definitions.
    pub blocks: Vec<BlockEntry>,
}

impl Catalog {
    /// Returns `true` if the catalog holds neither biomes nor blocks.
    pub fn is_empty(&self) -> bool {
        self.biomes.is_empty() && self.blocks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wool() -> BlockEntry {
        BlockEntry {
            id: 35,
            name: "Wool".to_string(),
            color: Some(Color(0xFFFFFF)),
            variants: vec![
                VariantEntry {
                    key: 0,
                    name: "White Wool".to_string(),
                    label: Some("White".to_string()),
                    color: Color(0xFFFFFF),
                },
                VariantEntry {
                    key: 14,
                    name: "Red Wool".to_string(),
                    label: None,
                    color: Color(0xFF0000),
                },
            ],
        }
    }

    #[test]
    fn test_labelled_variant_uses_block_name() {
        assert_eq!(wool().variant_display_name(0), "Wool (White)");
    }

    #[test]
    fn test_unlabelled_variant_uses_raw_name() {
        assert_eq!(wool().variant_display_name(14), "Red Wool");
    }

    #[test]
    fn test_unknown_variant_key() {
        assert_eq!(wool().variant_display_name(3), "Wool (variant 3)");
    }

    #[test]
    fn test_has_variants() {
        let mut block = wool();
        assert!(block.has_variants());
        block.variants.clear();
        assert!(!block.has_variants());
    }
}
