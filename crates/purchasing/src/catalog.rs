//! Read-only purchase order catalog.

use std::collections::HashMap;
use std::sync::Arc;

use stockpo_core::{DomainError, DomainResult, Entity};

use crate::order::{PurchaseOrder, PurchaseOrderNumber};
use crate::seed::reference_orders;

/// Lookup-only access to purchase orders.
pub trait CatalogStore: Send + Sync {
    /// Returns the order, or `NotFound` if the catalog has no such number.
    fn lookup(&self, po_number: &PurchaseOrderNumber) -> DomainResult<PurchaseOrder>;
}

impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    fn lookup(&self, po_number: &PurchaseOrderNumber) -> DomainResult<PurchaseOrder> {
        (**self).lookup(po_number)
    }
}

/// In-memory catalog. Fixed at construction; needs no locking.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    orders: HashMap<PurchaseOrderNumber, PurchaseOrder>,
}

impl InMemoryCatalog {
    pub fn new(orders: impl IntoIterator<Item = PurchaseOrder>) -> Self {
        let orders = orders
            .into_iter()
            .map(|order| (order.id().clone(), order))
            .collect();
        Self { orders }
    }

    /// Catalog loaded with the reference dataset.
    pub fn seeded() -> Self {
        Self::new(reference_orders())
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}

impl CatalogStore for InMemoryCatalog {
    fn lookup(&self, po_number: &PurchaseOrderNumber) -> DomainResult<PurchaseOrder> {
        self.orders
            .get(po_number)
            .cloned()
            .ok_or_else(|| DomainError::not_found("Purchase Order not found"))
    }
}
