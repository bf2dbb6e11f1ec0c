//! Product catalog lookup used when picking recipe ingredients.

use std::collections::BTreeMap;

/// Resolves catalog product ids to display names.
pub trait ProductCatalog {
    fn product_name(&self, id: &str) -> Option<&str>;
}

/// A catalog held in memory, keyed by product id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: BTreeMap<String, String>,
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.products.insert(id.into(), name.into());
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl ProductCatalog for InMemoryCatalog {
    fn product_name(&self, id: &str) -> Option<&str> {
        self.products.get(id).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for InMemoryCatalog {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            products: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}
