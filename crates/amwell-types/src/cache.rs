//! List-cache reconciliation applied after mutations.
//!
//! Every resource store holds a `Vec` of records fetched from the
//! backend. After a mutation succeeds the store does NOT refetch: it
//! merges the canonical object from the response into the cached list
//! with the functions here. On failure the list is left untouched; there
//! is no rollback path.

/// A record addressable by its backend identifier.
pub trait Keyed {
    /// The backend `_id` of this record.
    fn key(&self) -> &str;
}

/// Append the canonical object returned by a create.
pub fn append<T: Keyed>(list: &mut Vec<T>, item: T) {
    list.push(item);
}

/// Replace the cached item matching `item.key()` with the canonical
/// object returned by an update or status change.
///
/// This is authoritative full-object replacement, not a field merge:
/// fields the server omitted are gone until the next full refetch.
/// Items with other keys are untouched. Returns whether a match existed.
pub fn replace<T: Keyed>(list: &mut [T], item: T) -> bool {
    match list.iter_mut().find(|cached| cached.key() == item.key()) {
        Some(slot) => {
            *slot = item;
            true
        }
        None => false,
    }
}

/// Merge a freshly fetched record into the cache: replace the cached
/// copy when present, append otherwise. Used when a partial fetch (e.g.
/// the pending-doctors subset) lands on top of an existing list.
pub fn upsert<T: Keyed>(list: &mut Vec<T>, item: T) {
    match list.iter_mut().find(|cached| cached.key() == item.key()) {
        Some(slot) => *slot = item,
        None => list.push(item),
    }
}

/// Remove the cached item with the given key. Returns whether it existed.
pub fn remove<T: Keyed>(list: &mut Vec<T>, key: &str) -> bool {
    let before = list.len();
    list.retain(|cached| cached.key() != key);
    list.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Doctor, DoctorStatus};

    fn doctor(id: &str, status: DoctorStatus) -> Doctor {
        Doctor { id: id.to_string(), status, ..Default::default() }
    }

    #[test]
    fn test_create_appends_canonical_object() {
        let mut list = vec![doctor("1", DoctorStatus::Submitted)];
        append(&mut list, doctor("2", DoctorStatus::Approved));

        assert_eq!(list.len(), 2);
        assert!(list.iter().any(|d| d.key() == "2"));
    }

    #[test]
    fn test_replace_only_touches_the_match() {
        let mut list =
            vec![doctor("1", DoctorStatus::Submitted), doctor("2", DoctorStatus::Approved)];

        let replaced = replace(&mut list, doctor("1", DoctorStatus::Approved));

        assert!(replaced);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].status, DoctorStatus::Approved);
        // The non-matching item is byte-for-byte unchanged.
        assert_eq!(list[1], doctor("2", DoctorStatus::Approved));
    }

    #[test]
    fn test_replace_without_match_changes_nothing() {
        let mut list = vec![doctor("1", DoctorStatus::Submitted)];
        let replaced = replace(&mut list, doctor("9", DoctorStatus::Rejected));

        assert!(!replaced);
        assert_eq!(list, vec![doctor("1", DoctorStatus::Submitted)]);
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut list = vec![doctor("1", DoctorStatus::Submitted)];

        upsert(&mut list, doctor("1", DoctorStatus::Reviewing));
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].status, DoctorStatus::Reviewing);

        upsert(&mut list, doctor("2", DoctorStatus::Submitted));
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].key(), "2");
    }

    #[test]
    fn test_remove_shrinks_by_exactly_one() {
        let mut list =
            vec![doctor("1", DoctorStatus::Submitted), doctor("2", DoctorStatus::Approved)];

        assert!(remove(&mut list, "1"));
        assert_eq!(list.len(), 1);
        assert!(!list.iter().any(|d| d.key() == "1"));

        assert!(!remove(&mut list, "1"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_pending_subset_follows_status_updates() {
        // fetchAll returns one submitted and one approved doctor.
        let mut list =
            vec![doctor("1", DoctorStatus::Submitted), doctor("2", DoctorStatus::Approved)];

        let pending: Vec<&Doctor> = list.iter().filter(|d| d.status.is_pending()).collect();
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].key(), "1");

        // updateStatus("1", "approved") merges the canonical response.
        replace(&mut list, doctor("1", DoctorStatus::Approved));

        let pending: Vec<&Doctor> = list.iter().filter(|d| d.status.is_pending()).collect();
        assert!(pending.is_empty());
    }
}
