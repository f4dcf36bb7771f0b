// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity categories (food vs. exercise).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::error::{FormError, Result};

/// A selectable category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Ordered, read-only list of categories offered by the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCatalog {
    categories: Vec<Category>,
}

impl Default for CategoryCatalog {
    fn default() -> Self {
        Self {
            categories: vec![
                Category {
                    id: 1,
                    name: "Comida".to_string(),
                },
                Category {
                    id: 2,
                    name: "Ejercicio".to_string(),
                },
            ],
        }
    }
}

impl CategoryCatalog {
    /// Build a catalog, rejecting an empty list or duplicate ids.
    pub fn new(categories: Vec<Category>) -> Result<Self> {
        if categories.is_empty() {
            return Err(FormError::Catalog("no categories defined".to_string()));
        }

        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id) {
                return Err(FormError::Catalog(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        Ok(Self { categories })
    }

    /// Load categories from a JSON file containing an array of `{id, name}`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json_data = fs::read_to_string(path.as_ref()).map_err(|e| {
            FormError::Catalog(format!("{}: {}", path.as_ref().display(), e))
        })?;
        Self::load_from_json(&json_data)
    }

    /// Load categories from a JSON string.
    pub fn load_from_json(json_data: &str) -> Result<Self> {
        let categories: Vec<Category> =
            serde_json::from_str(json_data).map_err(|e| FormError::Catalog(e.to_string()))?;
        let catalog = Self::new(categories)?;
        tracing::info!(count = catalog.len(), "Loaded categories");
        Ok(catalog)
    }

    pub fn get(&self, id: u32) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
