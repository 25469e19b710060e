//! Density tiers for variable-length sections.
//!
//! Each section kind owns a breakpoint table sorted by item count. The
//! resolver walks the table and returns the first tier whose upper bound
//! holds the count; anything past the last breakpoint gets the table's
//! overflow tier, so arbitrarily large counts still render.

use serde::Serialize;

/// Discrete density levels, ordered from spaciest to densest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DensityLevel {
    Spacious,
    Comfortable,
    Compact,
    Dense,
}

/// Section kinds whose layout depends on item count.
///
/// Feature pages are not listed: they always hold a fixed two-slot layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Comparison,
    Faq,
    BoxContents,
}

/// Visual preset for one tier. Sizes are in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DensityTier {
    pub level: DensityLevel,
    /// Gap between rows (comparison header padding, list gap).
    pub spacing: u32,
    pub text_size: u32,
    /// Emphasized text: comparison values, box item counts, FAQ answers.
    pub value_text_size: u32,
    /// Icon or thumbnail edge length.
    pub image_size: u32,
    pub container_padding: u32,
    /// Minimum row height (comparison) or vertical row padding (box contents).
    pub row_size: u32,
}

const fn tier(
    level: DensityLevel,
    spacing: u32,
    text_size: u32,
    value_text_size: u32,
    image_size: u32,
    container_padding: u32,
    row_size: u32,
) -> DensityTier {
    DensityTier {
        level,
        spacing,
        text_size,
        value_text_size,
        image_size,
        container_padding,
        row_size,
    }
}

/// A tier used for every count up to and including `max_items`.
#[derive(Debug, Clone, Copy)]
pub struct Breakpoint {
    pub max_items: usize,
    pub tier: DensityTier,
}

/// Sorted breakpoints plus the tier used past the last one.
#[derive(Debug, Clone, Copy)]
pub struct DensityTable {
    pub breakpoints: &'static [Breakpoint],
    pub overflow: DensityTier,
}

impl DensityTable {
    pub fn resolve(&self, item_count: usize) -> DensityTier {
        self.breakpoints
            .iter()
            .find(|bp| item_count <= bp.max_items)
            .map(|bp| bp.tier)
            .unwrap_or(self.overflow)
    }

    /// Every tier in the table, spaciest first.
    pub fn tiers(&self) -> impl Iterator<Item = DensityTier> + '_ {
        self.breakpoints
            .iter()
            .map(|bp| bp.tier)
            .chain(std::iter::once(self.overflow))
    }
}

const COMPARISON: DensityTable = DensityTable {
    breakpoints: &[
        Breakpoint { max_items: 4, tier: tier(DensityLevel::Spacious, 24, 24, 30, 36, 24, 140) },
        Breakpoint { max_items: 6, tier: tier(DensityLevel::Comfortable, 20, 20, 24, 28, 16, 110) },
        Breakpoint { max_items: 8, tier: tier(DensityLevel::Compact, 16, 18, 20, 24, 12, 90) },
    ],
    overflow: tier(DensityLevel::Dense, 12, 16, 18, 20, 8, 70),
};

const BOX_CONTENTS: DensityTable = DensityTable {
    breakpoints: &[
        Breakpoint { max_items: 4, tier: tier(DensityLevel::Spacious, 40, 48, 48, 160, 96, 32) },
        Breakpoint { max_items: 6, tier: tier(DensityLevel::Comfortable, 24, 36, 36, 112, 80, 20) },
        Breakpoint { max_items: 9, tier: tier(DensityLevel::Compact, 16, 30, 30, 80, 64, 12) },
    ],
    overflow: tier(DensityLevel::Dense, 8, 24, 24, 64, 64, 8),
};

// FAQ truncates instead of tightening, so it has a single tier.
const FAQ: DensityTable = DensityTable {
    breakpoints: &[],
    overflow: tier(DensityLevel::Spacious, 24, 24, 20, 0, 28, 0),
};

/// The breakpoint table for a section kind.
pub fn table(kind: SectionKind) -> &'static DensityTable {
    match kind {
        SectionKind::Comparison => &COMPARISON,
        SectionKind::Faq => &FAQ,
        SectionKind::BoxContents => &BOX_CONTENTS,
    }
}

/// Pick the density tier for `item_count` items of `kind`.
pub fn resolve_density(kind: SectionKind, item_count: usize) -> DensityTier {
    table(kind).resolve(item_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_contents_breakpoints() {
        let level = |n| resolve_density(SectionKind::BoxContents, n).level;
        assert_eq!(level(0), DensityLevel::Spacious);
        assert_eq!(level(4), DensityLevel::Spacious);
        assert_eq!(level(5), DensityLevel::Comfortable);
        assert_eq!(level(6), DensityLevel::Comfortable);
        assert_eq!(level(7), DensityLevel::Compact);
        assert_eq!(level(9), DensityLevel::Compact);
        assert_eq!(level(10), DensityLevel::Dense);
        assert_eq!(level(10_000), DensityLevel::Dense);
    }

    #[test]
    fn comparison_breakpoints() {
        let level = |n| resolve_density(SectionKind::Comparison, n).level;
        assert_eq!(level(4), DensityLevel::Spacious);
        assert_eq!(level(6), DensityLevel::Comfortable);
        assert_eq!(level(8), DensityLevel::Compact);
        assert_eq!(level(9), DensityLevel::Dense);
        assert_eq!(level(usize::MAX), DensityLevel::Dense);
    }

    #[test]
    fn faq_has_one_tier() {
        assert_eq!(resolve_density(SectionKind::Faq, 0), resolve_density(SectionKind::Faq, 500));
    }

    #[test]
    fn tables_are_sorted_and_shrink() {
        for kind in [SectionKind::Comparison, SectionKind::Faq, SectionKind::BoxContents] {
            let t = table(kind);
            assert!(t.breakpoints.windows(2).all(|w| w[0].max_items < w[1].max_items));
            let tiers: Vec<_> = t.tiers().collect();
            for w in tiers.windows(2) {
                assert!(w[0].level <= w[1].level);
                assert!(w[0].text_size >= w[1].text_size);
            }
        }
    }
}
