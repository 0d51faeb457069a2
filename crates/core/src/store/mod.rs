//! In-memory brand store: an ordered list of brands plus the current selection.
//!
//! The store is owned by a single editing session. The selection is kept as
//! an id into the collection, so the selected record and the record inside
//! the collection can never diverge.

mod update;

pub use update::{FieldPathError, FieldUpdate};

use chrono::Utc;
use tracing::debug;

use crate::model::{BrandConfig, BrandId};

#[derive(Debug, Default)]
pub struct BrandStore {
    brands: Vec<BrandConfig>,
    selected: Option<BrandId>,
    /// Highest numeric id handed out or imported so far.
    last_issued: u64,
}

impl BrandStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn brands(&self) -> &[BrandConfig] {
        &self.brands
    }

    pub fn len(&self) -> usize {
        self.brands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.brands.is_empty()
    }

    pub fn get(&self, id: &BrandId) -> Option<&BrandConfig> {
        self.brands.iter().find(|b| &b.id == id)
    }

    pub fn selected_id(&self) -> Option<&BrandId> {
        self.selected.as_ref()
    }

    pub fn selected(&self) -> Option<&BrandConfig> {
        self.selected.as_ref().and_then(|id| self.get(id))
    }

    /// Append a defaulted brand, select it, and return its id.
    pub fn add_brand(&mut self) -> BrandId {
        let id = self.next_id();
        let brand = BrandConfig::with_defaults(id.clone(), self.brands.len() + 1);
        debug!(id = %id, display_name = %brand.display_name, "Adding brand");
        self.brands.push(brand);
        self.selected = Some(id.clone());
        id
    }

    /// Apply `update` to the selected brand.
    ///
    /// Returns `false` without touching anything when no brand is selected.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        let Some(id) = self.selected.clone() else {
            debug!("Ignoring field update: no brand selected");
            return false;
        };
        match self.brands.iter_mut().find(|b| b.id == id) {
            Some(brand) => {
                debug!(id = %id, path = %update.path(), "Updating brand field");
                update.apply(brand);
                true
            }
            None => false,
        }
    }

    /// Remove the brand with `id`. If it was selected, the selection moves to
    /// the first remaining brand (or none).
    pub fn delete_brand(&mut self, id: &BrandId) -> bool {
        let before = self.brands.len();
        self.brands.retain(|b| &b.id != id);
        let removed = self.brands.len() != before;
        if removed && self.selected.as_ref() == Some(id) {
            self.selected = self.brands.first().map(|b| b.id.clone());
        }
        debug!(id = %id, removed, "Deleted brand");
        removed
    }

    /// Select the brand with `id`. A miss leaves the current selection as is.
    pub fn select_brand(&mut self, id: &BrandId) -> bool {
        if self.get(id).is_some() {
            self.selected = Some(id.clone());
            true
        } else {
            debug!(id = %id, "Select missed; keeping previous selection");
            false
        }
    }

    /// Replace the whole collection (document import). Selects the first brand.
    pub fn replace_all(&mut self, brands: Vec<BrandConfig>) {
        if let Some(max) = brands.iter().filter_map(|b| b.id.as_number()).max() {
            self.last_issued = self.last_issued.max(max);
        }
        self.selected = brands.first().map(|b| b.id.clone());
        self.brands = brands;
    }

    fn next_id(&mut self) -> BrandId {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        let id = now.max(self.last_issued.saturating_add(1));
        self.last_issued = id;
        let candidate = BrandId::from(id);
        if self.get(&candidate).is_none() {
            return candidate;
        }

        // Numeric space exhausted by an imported id; switch to suffixed ids.
        let mut suffix = 1u64;
        loop {
            let candidate = BrandId::from(format!("{id}-{suffix}").as_str());
            if self.get(&candidate).is_none() {
                debug!(id = %candidate, "Numeric ids exhausted; issuing suffixed id");
                return candidate;
            }
            suffix += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ColorKey;

    #[test]
    fn add_selects_new_brand_with_positional_defaults() {
        let mut store = BrandStore::new();
        store.add_brand();
        let second = store.add_brand();
        assert_eq!(store.selected_id(), Some(&second));
        let selected = store.selected().unwrap();
        assert_eq!(selected.app_name, "App 2");
        assert_eq!(selected.package_name, "com.brand2.app");
    }

    #[test]
    fn ids_are_strictly_increasing_even_within_one_millisecond() {
        let mut store = BrandStore::new();
        let ids: Vec<u64> =
            (0..50).map(|_| store.add_brand().as_number().expect("numeric id")).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn update_without_selection_is_a_no_op() {
        let mut store = BrandStore::new();
        assert!(!store.update_field(FieldUpdate::Color(ColorKey::Primary, "#000".into())));
        assert!(store.is_empty());
    }

    #[test]
    fn replace_all_advances_id_generator_past_imported_ids() {
        let mut store = BrandStore::new();
        let far_future = u64::MAX / 2;
        store.replace_all(vec![BrandConfig::with_defaults(BrandId::from(far_future), 1)]);
        let id = store.add_brand();
        assert_eq!(id.as_number(), Some(far_future + 1));
    }

    #[test]
    fn add_after_importing_max_numeric_id_issues_unique_ids() {
        let mut store = BrandStore::new();
        store.replace_all(vec![BrandConfig::with_defaults(BrandId::from(u64::MAX), 1)]);
        let first = store.add_brand();
        let second = store.add_brand();
        assert_ne!(first, BrandId::from(u64::MAX));
        assert_ne!(first, second);
        assert_eq!(first.as_str(), format!("{}-1", u64::MAX));
        assert_eq!(store.len(), 3);
    }
}
