use hmv_catalog::{Enrichment, SharedStore};
use std::cell::Cell;

/// Values for the `hsCode`, `hsName` and `description` inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutofillFields {
    pub hs_code: String,
    pub hs_name: String,
    pub description: String,
}

impl AutofillFields {
    pub fn is_cleared(&self) -> bool {
        self.hs_code.is_empty() && self.hs_name.is_empty() && self.description.is_empty()
    }
}

impl From<&Enrichment> for AutofillFields {
    fn from(e: &Enrichment) -> Self {
        Self {
            hs_code: e.hs_code.clone(),
            hs_name: e.hs_name.clone(),
            description: e.description.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutofillState {
    Bound,
    Responding,
}

/// Maps a product selection onto the dependent form fields.
///
/// Wired before the catalog arrives; until the store is populated every
/// selection clears the fields.
pub struct AutofillController {
    store: SharedStore,
    state: Cell<AutofillState>,
}

impl AutofillController {
    pub fn new(store: SharedStore) -> Self {
        Self {
            store,
            state: Cell::new(AutofillState::Bound),
        }
    }

    pub fn state(&self) -> AutofillState {
        self.state.get()
    }

    /// All three fields are filled from the store, or all three cleared.
    pub fn on_select(&self, product_name: &str) -> AutofillFields {
        self.state.set(AutofillState::Responding);
        let fields = self
            .store
            .get()
            .and_then(|store| store.lookup(product_name))
            .map(AutofillFields::from)
            .unwrap_or_default();
        self.state.set(AutofillState::Bound);
        fields
    }
}
