//! Row handle registry.
//!
//! Rows that resolve a `row_ref` name are registered here when the view is
//! mounted, so external code can look a mounted row up by name. The
//! registry is rebuilt from scratch on every mount.

use std::collections::HashMap;

use crate::table::TableView;

/// Opaque handle to a mounted row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowHandle {
    pub key: String,
    pub index: usize,
    pub element_id: String,
}

/// Mapping from ref name to mounted row.
#[derive(Debug, Default)]
pub struct RowRegistry {
    handles: HashMap<String, RowHandle>,
}

impl RowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all registrations with the rows of `view`.
    pub fn mount(&mut self, view: &TableView) {
        self.handles.clear();
        for row in &view.body.rows {
            let Some(name) = &row.ref_name else {
                continue;
            };
            let handle = RowHandle {
                key: row.key.clone(),
                index: row.index,
                element_id: row.element_id.clone(),
            };
            if self.handles.insert(name.clone(), handle).is_some() {
                log::warn!("Row ref '{name}' registered twice; keeping the later row");
            }
        }
        log::debug!("Mounted {} row refs", self.handles.len());
    }

    pub fn get(&self, name: &str) -> Option<&RowHandle> {
        self.handles.get(name)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }
}
