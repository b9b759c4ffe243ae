//! In-memory batch registry.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};

use stockpo_core::{DomainError, DomainResult, Entity};

use crate::batch::{Batch, BatchDetails, BatchId};

/// Owns every batch created during the process lifetime.
///
/// Create holds the write lock across the uniqueness scan and the insert, and
/// update holds it across the lookup and the field replacement, so concurrent
/// callers observe both as atomic. Batches are never removed.
#[derive(Debug, Default)]
pub struct BatchRegistry {
    inner: RwLock<BTreeMap<BatchId, Batch>>,
}

impl BatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new batch.
    ///
    /// Fails with `Conflict` if a batch with the same batch number already
    /// exists for the material and plant; the registry is left unchanged.
    pub fn create(&self, details: BatchDetails, created_at: DateTime<Utc>) -> DomainResult<Batch> {
        let details = details.validate()?;

        let mut map = self.write();
        let key = details.key();
        if map.values().any(|existing| existing.key() == key) {
            return Err(DomainError::conflict(
                "Batch number already exists for this material and plant",
            ));
        }

        let batch = Batch {
            id: BatchId::generate(),
            details,
            created_at,
        };
        map.insert(*batch.id(), batch.clone());
        Ok(batch)
    }

    pub fn get(&self, id: &BatchId) -> DomainResult<Batch> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Batch not found"))
    }

    /// Replace every caller-supplied field of an existing batch.
    ///
    /// An unknown id is `NotFound` whatever the details hold; only then are
    /// the details validated. The id and creation timestamp are preserved.
    /// Uniqueness of the (batch number, material, plant) key is not
    /// re-checked here.
    pub fn update(&self, id: &BatchId, details: BatchDetails) -> DomainResult<Batch> {
        let mut map = self.write();
        let batch = map
            .get_mut(id)
            .ok_or_else(|| DomainError::not_found("Batch not found"))?;
        batch.details = details.validate()?;
        Ok(batch.clone())
    }

    /// Every batch whose material code is one of `material_codes`, in id order.
    pub fn list_by_materials<S: AsRef<str>>(&self, material_codes: &[S]) -> Vec<Batch> {
        self.read()
            .values()
            .filter(|batch| {
                material_codes
                    .iter()
                    .any(|code| code.as_ref() == batch.details.material_code)
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // A panic while holding the lock cannot leave a half-written batch: every
    // mutation is a single insert or field assignment.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<BatchId, Batch>> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<BatchId, Batch>> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::NaiveDate;

    use super::*;
    use crate::batch::tests::details;

    #[test]
    fn create_then_get_round_trips() {
        let registry = BatchRegistry::new();
        let now = Utc::now();

        let created = registry.create(details("B-001", "36000330", "GB0"), now).unwrap();
        assert_eq!(created.created_at, now);
        assert_eq!(registry.len(), 1);

        let fetched = registry.get(&created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn duplicate_key_conflicts_and_leaves_registry_unchanged() {
        let registry = BatchRegistry::new();
        registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();

        let mut dup = details("B-001", "36000330", "GB0");
        dup.storage_location = "WH02".to_string();
        let err = registry.create(dup, Utc::now()).unwrap_err();

        assert!(matches!(err, DomainError::Conflict(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn key_match_happens_after_trimming() {
        let registry = BatchRegistry::new();
        registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();

        let err = registry
            .create(details(" B-001", "36000330 ", "GB0"), Utc::now())
            .unwrap_err();
        assert!(matches!(err, DomainError::Conflict(_)));
    }

    #[test]
    fn same_batch_number_is_allowed_for_other_material_or_plant() {
        let registry = BatchRegistry::new();
        registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();
        registry.create(details("B-001", "M0180", "GB0"), Utc::now()).unwrap();
        registry.create(details("B-001", "36000330", "DE1"), Utc::now()).unwrap();

        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn invalid_details_are_rejected_before_insert() {
        let registry = BatchRegistry::new();
        let err = registry.create(details("", "36000330", "GB0"), Utc::now()).unwrap_err();

        assert!(matches!(err, DomainError::Validation(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn get_unknown_is_not_found() {
        let registry = BatchRegistry::new();
        let err = registry.get(&BatchId::generate()).unwrap_err();
        assert_eq!(err, DomainError::not_found("Batch not found"));
    }

    #[test]
    fn update_preserves_id_and_created_at() {
        let registry = BatchRegistry::new();
        let created = registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();

        let mut changes = details("B-002", "M0180", "GB0");
        changes.manufacturing_date = NaiveDate::from_ymd_opt(2025, 9, 15).unwrap();
        changes.additional_info = Some("relabelled".to_string());
        let updated = registry.update(&created.id, changes.clone()).unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_at, created.created_at);
        assert_eq!(updated.details, changes);
        assert_eq!(registry.get(&created.id).unwrap(), updated);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn update_unknown_is_not_found() {
        let registry = BatchRegistry::new();
        let err = registry
            .update(&BatchId::generate(), details("B-001", "36000330", "GB0"))
            .unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert!(registry.is_empty());
    }

    #[test]
    fn update_unknown_with_invalid_details_is_not_found() {
        let registry = BatchRegistry::new();
        let err = registry
            .update(&BatchId::generate(), details("  ", "36000330", "GB0"))
            .unwrap_err();
        assert_eq!(err, DomainError::not_found("Batch not found"));
    }

    #[test]
    fn update_does_not_recheck_uniqueness() {
        let registry = BatchRegistry::new();
        registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();
        let other = registry.create(details("B-002", "36000330", "GB0"), Utc::now()).unwrap();

        let updated = registry
            .update(&other.id, details("B-001", "36000330", "GB0"))
            .unwrap();
        assert_eq!(updated.details.batch_number, "B-001");
    }

    #[test]
    fn update_with_invalid_details_leaves_batch_untouched() {
        let registry = BatchRegistry::new();
        let created = registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();

        let err = registry
            .update(&created.id, details("B-001", "", "GB0"))
            .unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(registry.get(&created.id).unwrap(), created);
    }

    #[test]
    fn list_by_materials_filters_exactly() {
        let registry = BatchRegistry::new();
        let a = registry.create(details("B-001", "36000330", "GB0"), Utc::now()).unwrap();
        let b = registry.create(details("B-002", "M0180", "GB0"), Utc::now()).unwrap();
        registry.create(details("B-003", "99999999", "GB0"), Utc::now()).unwrap();

        let mut found: Vec<BatchId> = registry
            .list_by_materials(&["36000330", "M0180"])
            .into_iter()
            .map(|b| b.id)
            .collect();
        found.sort();
        let mut expected = vec![a.id, b.id];
        expected.sort();
        assert_eq!(found, expected);

        assert!(registry.list_by_materials::<&str>(&[]).is_empty());
    }

    #[test]
    fn concurrent_creates_of_one_key_admit_a_single_winner() {
        let registry = Arc::new(BatchRegistry::new());

        let outcomes: Vec<DomainResult<Batch>> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..16)
                .map(|_| {
                    let registry = Arc::clone(&registry);
                    s.spawn(move || registry.create(details("B-RACE", "36000330", "GB0"), Utc::now()))
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(outcomes.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(outcomes
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, DomainError::Conflict(_))));
        assert_eq!(registry.len(), 1);
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 128,
                ..ProptestConfig::default()
            })]

            /// Property: registry size equals the number of distinct keys offered.
            #[test]
            fn size_tracks_distinct_keys(
                keys in prop::collection::vec(("[A-C]", "[1-3]", "GB[0-1]"), 0..24)
            ) {
                let registry = BatchRegistry::new();
                let mut distinct = std::collections::HashSet::new();

                for (batch, material, plant) in &keys {
                    let fresh = distinct.insert((batch.clone(), material.clone(), plant.clone()));
                    let result = registry.create(details(batch, material, plant), Utc::now());
                    prop_assert_eq!(result.is_ok(), fresh);
                }

                prop_assert_eq!(registry.len(), distinct.len());
            }
        }
    }
}
