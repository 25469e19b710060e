//! Feature pagination: fixed-size pages over the features collection

use crate::model::Feature;

/// Features shown on one page.
pub const FEATURES_PER_PAGE: usize = 2;

/// Number of pages needed for `item_count` items (`ceil(n / page_size)`).
///
/// A zero page size is treated as one.
pub fn page_count(item_count: usize, page_size: usize) -> usize {
    item_count.div_ceil(page_size.max(1))
}

/// A paged view over a features slice.
///
/// Page indices are 0-based here; the view router exposes feature page `i`
/// as view `i + 1`.
#[derive(Debug, Clone, Copy)]
pub struct FeaturePages<'a> {
    features: &'a [Feature],
    page_size: usize,
}

impl<'a> FeaturePages<'a> {
    pub fn new(features: &'a [Feature], page_size: usize) -> Self {
        Self {
            features,
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn page_count(&self) -> usize {
        page_count(self.features.len(), self.page_size)
    }

    /// Items on page `page`; the last page may be short, a page past the end
    /// is empty.
    pub fn page(&self, page: usize) -> &'a [Feature] {
        let start = page.saturating_mul(self.page_size).min(self.features.len());
        let end = start.saturating_add(self.page_size).min(self.features.len());
        &self.features[start..end]
    }

    /// Page holding the item at `index` in the features collection.
    pub fn page_of_index(&self, index: usize) -> Option<usize> {
        (index < self.features.len()).then(|| index / self.page_size)
    }

    /// Page holding the feature with `id`.
    pub fn page_of_id(&self, id: &str) -> Option<usize> {
        self.features
            .iter()
            .position(|f| f.id == id)
            .and_then(|idx| self.page_of_index(idx))
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [Feature]> + '_ {
        self.features.chunks(self.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(ids: &[&str]) -> Vec<Feature> {
        ids.iter()
            .map(|id| Feature {
                id: id.to_string(),
                title: id.to_string(),
                description: String::new(),
                image: None,
            })
            .collect()
    }

    fn ids(page: &[Feature]) -> Vec<&str> {
        page.iter().map(|f| f.id.as_str()).collect()
    }

    #[test]
    fn five_features_make_three_pages() {
        let fs = features(&["A", "B", "C", "D", "E"]);
        let pages = FeaturePages::new(&fs, FEATURES_PER_PAGE);
        assert_eq!(pages.page_count(), 3);
        assert_eq!(ids(pages.page(0)), vec!["A", "B"]);
        assert_eq!(ids(pages.page(1)), vec!["C", "D"]);
        assert_eq!(ids(pages.page(2)), vec!["E"]);
        assert!(pages.page(3).is_empty());
        assert!(pages.page(usize::MAX).is_empty());
    }

    #[test]
    fn empty_features_have_no_pages() {
        let pages = FeaturePages::new(&[], FEATURES_PER_PAGE);
        assert_eq!(pages.page_count(), 0);
        assert!(pages.page(0).is_empty());
        assert_eq!(pages.iter().count(), 0);
    }

    #[test]
    fn page_of_item() {
        let fs = features(&["A", "B", "C"]);
        let pages = FeaturePages::new(&fs, FEATURES_PER_PAGE);
        assert_eq!(pages.page_of_index(0), Some(0));
        assert_eq!(pages.page_of_index(2), Some(1));
        assert_eq!(pages.page_of_index(3), None);
        assert_eq!(pages.page_of_id("B"), Some(0));
        assert_eq!(pages.page_of_id("C"), Some(1));
        assert_eq!(pages.page_of_id("Z"), None);
    }

    #[test]
    fn zero_page_size_is_clamped() {
        let fs = features(&["A", "B"]);
        let pages = FeaturePages::new(&fs, 0);
        assert_eq!(pages.page_size(), 1);
        assert_eq!(pages.page_count(), 2);
        assert_eq!(page_count(3, 0), 3);
    }
}
