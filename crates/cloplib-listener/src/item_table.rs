//! Precomputed item → operation lookup for item-use callbacks.

use cloplib_handler::TypeChecker;
use cloplib_operation::OperationType;
use rustc_hash::FxHashMap;

use crate::classify::{ItemKind, material_name, use_item_type};

/// Maps item ids to the operation using them implies.
///
/// Built once from the host's item registry and rebuilt when special-type
/// data changes. Ids are stored without the default namespace.
#[derive(Clone, Debug, Default)]
pub struct ItemOperationTable {
    items: FxHashMap<String, OperationType>,
}

impl ItemOperationTable {
    /// Classifies every `(item id, kind)` pair, keeping those that imply an
    /// operation.
    pub fn precalculate<I, S>(items: I, checker: &dyn TypeChecker) -> Self
    where
        I: IntoIterator<Item = (S, ItemKind)>,
        S: AsRef<str>,
    {
        let items: FxHashMap<_, _> = items
            .into_iter()
            .filter_map(|(id, kind)| {
                let id = id.as_ref();
                use_item_type(id, kind, checker).map(|t| (item_key(id), t))
            })
            .collect();
        tracing::debug!(items = items.len(), "precalculated item operations");
        Self { items }
    }

    pub fn get(&self, item_id: &str) -> Option<&OperationType> {
        self.items.get(&item_key(item_id))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn item_key(id: &str) -> String {
    material_name(&id.to_lowercase()).to_string()
}
