//! View router: the single mapping between the linear view index and the
//! section shown at that index.
//!
//! Layout: view 0 is the main page, views `1..=N` are the N feature pages,
//! then the five fixed sections follow at `N + 1 ..= N + 5`. Everything is
//! derived from the feature page count, so the fixed sections shift whenever
//! features are added or removed.

use serde::Serialize;
use std::fmt;

/// Number of fixed sections after the feature pages.
pub const FIXED_SECTIONS: usize = 5;

/// One logical page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "section", content = "page", rename_all = "kebab-case")]
pub enum SectionRef {
    Main,
    /// 0-based feature page.
    FeaturesPage(usize),
    WhyChoose,
    Comparison,
    Faq,
    BoxContents,
    BuyNow,
}

impl SectionRef {
    /// Offset of a fixed section past the last feature page.
    fn fixed_offset(self) -> Option<usize> {
        match self {
            SectionRef::WhyChoose => Some(1),
            SectionRef::Comparison => Some(2),
            SectionRef::Faq => Some(3),
            SectionRef::BoxContents => Some(4),
            SectionRef::BuyNow => Some(5),
            SectionRef::Main | SectionRef::FeaturesPage(_) => None,
        }
    }

    fn from_fixed_offset(offset: usize) -> Option<Self> {
        match offset {
            1 => Some(SectionRef::WhyChoose),
            2 => Some(SectionRef::Comparison),
            3 => Some(SectionRef::Faq),
            4 => Some(SectionRef::BoxContents),
            5 => Some(SectionRef::BuyNow),
            _ => None,
        }
    }

    /// Short human label, as shown on the view switcher.
    pub fn label(&self) -> String {
        match self {
            SectionRef::Main => "Main".to_string(),
            SectionRef::FeaturesPage(i) => format!("Features {}", i + 1),
            SectionRef::WhyChoose => "Why choose".to_string(),
            SectionRef::Comparison => "Comparison".to_string(),
            SectionRef::Faq => "FAQ".to_string(),
            SectionRef::BoxContents => "Box contents".to_string(),
            SectionRef::BuyNow => "Buy now".to_string(),
        }
    }
}

impl fmt::Display for SectionRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Maps view indices to sections for a given feature page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewRouter {
    features_page_count: usize,
}

impl ViewRouter {
    pub fn new(features_page_count: usize) -> Self {
        Self { features_page_count }
    }

    pub fn features_page_count(&self) -> usize {
        self.features_page_count
    }

    /// `1 (main) + feature pages + 5 fixed sections`.
    pub fn total_views(&self) -> usize {
        1 + self.features_page_count + FIXED_SECTIONS
    }

    /// Clamp a requested view into range.
    pub fn clamp(&self, view: usize) -> usize {
        view.min(self.total_views() - 1)
    }

    pub fn try_section_at(&self, view: usize) -> Option<SectionRef> {
        if view == 0 {
            return Some(SectionRef::Main);
        }
        if view <= self.features_page_count {
            return Some(SectionRef::FeaturesPage(view - 1));
        }
        SectionRef::from_fixed_offset(view - self.features_page_count)
    }

    /// The section at `view`.
    ///
    /// Callers must clamp first: an out-of-range view panics in debug
    /// builds and resolves to the last section in release builds.
    pub fn section_at(&self, view: usize) -> SectionRef {
        match self.try_section_at(view) {
            Some(section) => section,
            None => {
                debug_assert!(
                    false,
                    "view {} out of range (total views {})",
                    view,
                    self.total_views()
                );
                SectionRef::BuyNow
            }
        }
    }

    pub fn try_index_of(&self, section: SectionRef) -> Option<usize> {
        match section {
            SectionRef::Main => Some(0),
            SectionRef::FeaturesPage(page) => (page < self.features_page_count).then_some(page + 1),
            fixed => fixed.fixed_offset().map(|k| self.features_page_count + k),
        }
    }

    /// Canonical view index of `section`.
    ///
    /// A feature page past the page count is a programmer error with the same
    /// debug/release behaviour as [`ViewRouter::section_at`].
    pub fn index_of(&self, section: SectionRef) -> usize {
        match self.try_index_of(section) {
            Some(view) => view,
            None => {
                debug_assert!(
                    false,
                    "{:?} does not exist with {} feature pages",
                    section, self.features_page_count
                );
                self.total_views() - 1
            }
        }
    }

    /// Every section in canonical order.
    pub fn sections(&self) -> impl Iterator<Item = SectionRef> + '_ {
        (0..self.total_views()).map(move |view| self.section_at(view))
    }
}
