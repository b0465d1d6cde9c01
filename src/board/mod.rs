//! Skill board orchestration.
//!
//! `SkillBoard` wires the pure ordering operations to the persistence layer:
//! it loads the stored order (seeding from the fallback list when absent),
//! applies reconcile/reorder, and writes back only when the operation
//! actually changed the sequence.

pub mod order;

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::error::Result;
use crate::storage::OrderStore;

/// Result of reconciling the stored order against a canonical list.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub order: Vec<String>,
    pub changed: bool,
    /// Ids the canonical list introduced.
    pub added: Vec<String>,
    /// Ids the canonical list dropped.
    pub removed: Vec<String>,
}

/// Result of a single reorder intent.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    pub order: Vec<String>,
    pub changed: bool,
}

pub struct SkillBoard {
    store: Arc<OrderStore>,
    key: String,
    fallback: Vec<String>,
}

impl SkillBoard {
    pub fn new(store: Arc<OrderStore>, key: impl Into<String>, fallback: Vec<String>) -> Self {
        Self {
            store,
            key: key.into(),
            fallback,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// The current order: the persisted value, or the fallback seed when no
    /// usable value is stored.
    pub fn load(&self) -> Result<Vec<String>> {
        Ok(self
            .store
            .load(&self.key)?
            .unwrap_or_else(|| self.fallback.clone()))
    }

    /// Whether a usable persisted value exists.
    pub fn is_seeded(&self) -> Result<bool> {
        Ok(self.store.load(&self.key)?.is_some())
    }

    /// Persist the fallback seed if nothing usable is stored yet.
    ///
    /// Returns whether a seed was written.
    pub fn seed(&self) -> Result<bool> {
        if self.is_seeded()? {
            return Ok(false);
        }
        self.store.save(&self.key, &self.fallback)?;
        debug!(target: "board", key = %self.key, count = self.fallback.len(), "seeded order");
        Ok(true)
    }

    /// Rewrite the persisted order from the fallback seed.
    pub fn reset(&self) -> Result<Vec<String>> {
        self.store.save(&self.key, &self.fallback)?;
        Ok(self.fallback.clone())
    }

    /// Merge the stored order with `canonical` and persist the result if it
    /// changed.
    pub fn reconcile_with(&self, canonical: &[String]) -> Result<ReconcileOutcome> {
        let current = self.load()?;
        let next = order::reconcile(&current, canonical);

        let changed = matches!(next, Cow::Owned(_));
        if !changed {
            return Ok(ReconcileOutcome {
                order: current,
                changed: false,
                added: Vec::new(),
                removed: Vec::new(),
            });
        }

        let next = next.into_owned();
        let before: HashSet<&String> = current.iter().collect();
        let after: HashSet<&String> = next.iter().collect();
        let added = next
            .iter()
            .filter(|id| !before.contains(id))
            .cloned()
            .collect();
        let removed = current
            .iter()
            .filter(|id| !after.contains(id))
            .cloned()
            .collect();

        self.store.save(&self.key, &next)?;
        debug!(target: "board", key = %self.key, count = next.len(), "order reconciled");

        Ok(ReconcileOutcome {
            order: next,
            changed: true,
            added,
            removed,
        })
    }

    /// Apply one reorder intent and persist the result if it changed.
    ///
    /// Unknown ids are a silent no-op, guarding against stale references
    /// from whatever emitted the intent.
    pub fn apply_move(&self, from_id: &str, to_id: &str) -> Result<MoveOutcome> {
        let current = self.load()?;
        let next = order::reorder(&current, from_id, to_id);

        let changed = matches!(next, Cow::Owned(_));
        if !changed {
            return Ok(MoveOutcome {
                order: current,
                changed: false,
            });
        }

        let next = next.into_owned();
        self.store.save(&self.key, &next)?;
        debug!(target: "board", key = %self.key, from = from_id, to = to_id, "order moved");

        Ok(MoveOutcome {
            order: next,
            changed: true,
        })
    }
}
