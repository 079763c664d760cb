// src/domain/providers.rs

use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Provider {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const PROVIDERS: &[Provider] = &[Provider {
    id: "santander",
    name: "Santander Consumer Renting",
    description: "Flexible long-term rental solutions",
}];

pub fn find_provider(id: &str) -> Option<&'static Provider> {
    PROVIDERS.iter().find(|p| p.id == id)
}

/// Set of selected provider ids. Toggling builds a new set; existing values never change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderSelection {
    selected: Arc<BTreeSet<String>>,
}

impl ProviderSelection {
    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn toggled(&self, id: &str) -> Self {
        let mut next = (*self.selected).clone();
        if !next.remove(id) {
            next.insert(id.to_string());
        }
        Self {
            selected: Arc::new(next),
        }
    }
}

/// Holds the current selection and swaps it wholesale on each toggle.
#[derive(Debug, Clone, Default)]
pub struct ProviderStore {
    current: Arc<RwLock<ProviderSelection>>,
}

impl ProviderStore {
    pub fn current(&self) -> ProviderSelection {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the new selection, or `None` for an unknown provider id.
    pub fn toggle(&self, id: &str) -> Option<ProviderSelection> {
        let provider = find_provider(id)?;
        let mut slot = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let next = slot.toggled(provider.id);
        *slot = next.clone();
        Some(next)
    }
}
