//! Catalog walker: turns the catalog into legend cells.
//!
//! Biomes and blocks each get their own [`ColorRegistry`]. Block variants
//! share the block registry. The two namespaces treat a duplicate color
//! differently: a duplicate biome is dropped from the legend, a duplicate
//! block (or variant) is still shown. Both report a warning.

use std::num::NonZeroUsize;

use legend_catalog::{BiomeEntry, BlockEntry, Catalog, Color};

use crate::diagnostics::Diagnostics;
use crate::registry::{Claim, ColorRegistry};

/// Variant swatches per row when nothing else is configured.
pub const DEFAULT_VARIANTS_PER_ROW: NonZeroUsize = match NonZeroUsize::new(8) {
    Some(n) => n,
    None => unreachable!(),
};

/// Knobs for a single legend pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendOptions {
    /// Text of the document `<title>` and `<h1>`.
    pub title: String,
    /// Every `variants_per_row`-th variant swatch starts a new row.
    pub variants_per_row: NonZeroUsize,
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self {
            title: "Color Legend".to_string(),
            variants_per_row: DEFAULT_VARIANTS_PER_ROW,
        }
    }
}

/// One swatch in a block's variant sub-grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantSwatch {
    /// Tooltip text: the variant name resolved against its block.
    pub title: String,
    /// Swatch color.
    pub color: Color,
    /// First swatch of a visual row.
    pub new_row: bool,
}

/// One grid cell of the legend.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LegendCell {
    /// Entry display name.
    pub name: String,
    /// Primary swatch color.
    pub color: Color,
    /// Variant sub-grid, present only for blocks with variants.
    pub variants: Option<Vec<VariantSwatch>>,
}

impl LegendCell {
    /// Returns `true` if the cell carries a variant sub-grid.
    pub fn has_variants(&self) -> bool {
        self.variants.is_some()
    }
}

/// Counters gathered during a walk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkSummary {
    /// Biome cells produced.
    pub biomes_rendered: usize,
    /// Biomes skipped for lacking a color.
    pub biomes_missing_color: usize,
    /// Biomes skipped because their color was already taken.
    pub biome_conflicts: usize,
    /// Block cells produced.
    pub blocks_rendered: usize,
    /// Blocks skipped for lacking a color.
    pub blocks_missing_color: usize,
    /// Blocks whose color was already taken (still rendered).
    pub block_conflicts: usize,
    /// Variant swatches produced.
    pub variants_rendered: usize,
    /// Variants whose color was already taken (still rendered).
    pub variant_conflicts: usize,
}

/// Cells for both namespaces, in catalog order minus skipped entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Legend {
    /// Biome cells.
    pub biomes: Vec<LegendCell>,
    /// Block cells.
    pub blocks: Vec<LegendCell>,
    /// What happened along the way.
    pub summary: WalkSummary,
}

/// Walk biomes then blocks, reporting problems to `diag`.
///
/// Never fails: every defect is reported and the entry skipped or kept per
/// its namespace.
pub fn walk_catalog(
    catalog: &Catalog,
    options: &LegendOptions,
    diag: &mut dyn Diagnostics,
) -> Legend {
    let mut summary = WalkSummary::default();
    let biomes = walk_biomes(&catalog.biomes, &mut summary, diag);
    let blocks = walk_blocks(&catalog.blocks, options.variants_per_row, &mut summary, diag);
    Legend {
        biomes,
        blocks,
        summary,
    }
}

fn walk_biomes(
    biomes: &[BiomeEntry],
    summary: &mut WalkSummary,
    diag: &mut dyn Diagnostics,
) -> Vec<LegendCell> {
    let mut registry = ColorRegistry::new();
    let mut cells = Vec::with_capacity(biomes.len());

    for biome in biomes {
        let Some(color) = biome.color else {
            diag.error(&format!(
                "Biome id:{} name:{} has no color",
                biome.id, biome.name
            ));
            summary.biomes_missing_color += 1;
            continue;
        };

        match registry.try_claim(color, &biome.name) {
            Claim::Conflict(existing) => {
                diag.warn(&format!(
                    "duplicate biome color found, {} and {}",
                    biome.name, existing
                ));
                summary.biome_conflicts += 1;
            }
            Claim::Claimed => {
                cells.push(LegendCell {
                    name: biome.name.clone(),
                    color,
                    variants: None,
                });
                summary.biomes_rendered += 1;
            }
        }
    }

    cells
}

fn walk_blocks(
    blocks: &[BlockEntry],
    per_row: NonZeroUsize,
    summary: &mut WalkSummary,
    diag: &mut dyn Diagnostics,
) -> Vec<LegendCell> {
    let mut registry = ColorRegistry::new();
    let mut cells = Vec::with_capacity(blocks.len());

    for block in blocks {
        let Some(color) = block.color else {
            diag.error(&format!(
                "Block id:{} name:{} has no color",
                block.id, block.name
            ));
            summary.blocks_missing_color += 1;
            continue;
        };

        // Duplicate block colors are reported but the block stays on the page.
        if let Claim::Conflict(existing) = registry.try_claim(color, &block.name) {
            diag.warn(&format!(
                "duplicate block color found, {} and {}",
                block.name, existing
            ));
            summary.block_conflicts += 1;
        }

        let variants = if block.has_variants() {
            Some(variant_swatches(block, per_row, &mut registry, summary, diag))
        } else {
            None
        };

        cells.push(LegendCell {
            name: block.name.clone(),
            color,
            variants,
        });
        summary.blocks_rendered += 1;
    }

    cells
}

fn variant_swatches(
    block: &BlockEntry,
    per_row: NonZeroUsize,
    registry: &mut ColorRegistry,
    summary: &mut WalkSummary,
    diag: &mut dyn Diagnostics,
) -> Vec<VariantSwatch> {
    block
        .variants
        .iter()
        .enumerate()
        .map(|(i, variant)| {
            if let Claim::Conflict(existing) = registry.try_claim(variant.color, &variant.name) {
                diag.warn(&format!(
                    "duplicate block color found, {} and {}",
                    variant.name, existing
                ));
                summary.variant_conflicts += 1;
            }
            summary.variants_rendered += 1;

            VariantSwatch {
                title: block.resolve_variant_name(variant),
                color: variant.color,
                new_row: i % per_row.get() == 0,
            }
        })
        .collect()
}
