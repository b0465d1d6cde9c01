//! Ordered-set reconciliation and reordering.
//!
//! The persisted skill order is merged against each new canonical list:
//! entries the canonical list still contains keep their user-chosen relative
//! order, entries it dropped disappear, and entries it introduced are
//! appended in canonical order. Both operations return `Cow::Borrowed` when
//! nothing changed, so callers can skip redundant writes.

use std::borrow::Cow;
use std::collections::HashSet;

use itertools::Itertools;

/// Merge `current` with a new `canonical` list.
///
/// `preserved` is the subsequence of `current` whose ids are canonical
/// members, in `current`'s order; `missing` is the subsequence of `canonical`
/// not yet preserved, in `canonical`'s order. The result is `preserved`
/// followed by `missing`.
///
/// Returns `Cow::Borrowed(current)` when the merge is element-wise equal to
/// `current`, and also when the merge would be empty while `current` is not
/// (an empty canonical list is treated as transient and must not wipe user
/// state).
pub fn reconcile<'a>(current: &'a [String], canonical: &[String]) -> Cow<'a, [String]> {
    let members: HashSet<&str> = canonical.iter().map(String::as_str).collect();

    let preserved: Vec<&String> = current
        .iter()
        .filter(|id| members.contains(id.as_str()))
        .collect();

    let preserved_set: HashSet<&str> = preserved.iter().map(|id| id.as_str()).collect();

    // Canonical may carry duplicates; the first occurrence wins.
    let missing = canonical
        .iter()
        .unique()
        .filter(|id| !preserved_set.contains(id.as_str()));

    let next: Vec<String> = preserved.iter().copied().chain(missing).cloned().collect();

    if next.is_empty() && !current.is_empty() {
        return Cow::Borrowed(current);
    }
    if next.len() == current.len() && next.iter().zip(current).all(|(a, b)| a == b) {
        return Cow::Borrowed(current);
    }
    Cow::Owned(next)
}

/// Move `from_id` to the slot `to_id` currently occupies.
///
/// Single-element move semantics: `from_id` is removed and reinserted at
/// `to_id`'s original index, shifting the entries in between by one. Not a
/// swap. Unknown ids and `from_id == to_id` are no-ops, returned borrowed.
pub fn reorder<'a>(current: &'a [String], from_id: &str, to_id: &str) -> Cow<'a, [String]> {
    if from_id == to_id {
        return Cow::Borrowed(current);
    }
    let Some(from_idx) = current.iter().position(|id| id == from_id) else {
        return Cow::Borrowed(current);
    };
    let Some(to_idx) = current.iter().position(|id| id == to_id) else {
        return Cow::Borrowed(current);
    };

    let mut next = current.to_vec();
    let moved = next.remove(from_idx);
    next.insert(to_idx, moved);
    Cow::Owned(next)
}
