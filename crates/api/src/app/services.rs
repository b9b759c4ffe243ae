use std::sync::Arc;

use chrono::Utc;

use stockpo_core::DomainResult;
use stockpo_inventory::{Batch, BatchDetails, BatchId, BatchRegistry};
use stockpo_purchasing::{
    CatalogStore, CreateDelivery, Delivery, DeliveryValidator, InMemoryCatalog, PurchaseOrder,
    PurchaseOrderNumber,
};

/// Shared application state: the read-only catalog, the batch registry and
/// the delivery validator. Constructed once per process.
pub struct AppServices {
    catalog: Arc<dyn CatalogStore>,
    batches: BatchRegistry,
    deliveries: DeliveryValidator<Arc<dyn CatalogStore>>,
}

impl core::fmt::Debug for AppServices {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AppServices")
            .field("batches", &self.batches.len())
            .finish_non_exhaustive()
    }
}

/// Services backed by the seeded mock catalog and an empty batch registry.
pub fn build_services() -> AppServices {
    let catalog = InMemoryCatalog::seeded();
    tracing::info!(orders = catalog.len(), "loaded purchase order catalog");
    AppServices::new(Arc::new(catalog))
}

impl AppServices {
    pub fn new(catalog: Arc<dyn CatalogStore>) -> Self {
        Self {
            deliveries: DeliveryValidator::new(Arc::clone(&catalog)),
            catalog,
            batches: BatchRegistry::new(),
        }
    }

    pub fn purchase_order(&self, po_number: &PurchaseOrderNumber) -> DomainResult<PurchaseOrder> {
        self.catalog.lookup(po_number)
    }

    /// Batches for any material on the order's line items.
    pub fn purchase_order_batches(&self, po_number: &PurchaseOrderNumber) -> DomainResult<Vec<Batch>> {
        let order = self.catalog.lookup(po_number)?;
        let materials = order.material_codes();
        Ok(self.batches.list_by_materials(materials.as_slice()))
    }

    pub fn create_batch(&self, details: BatchDetails) -> DomainResult<Batch> {
        let batch = self.batches.create(details, Utc::now())?;
        tracing::info!(
            batch_id = %batch.id,
            batch_number = %batch.details.batch_number,
            material = %batch.details.material_code,
            plant = %batch.details.plant,
            "batch created"
        );
        Ok(batch)
    }

    pub fn get_batch(&self, id: &BatchId) -> DomainResult<Batch> {
        self.batches.get(id)
    }

    pub fn batch_count(&self) -> usize {
        self.batches.len()
    }

    pub fn update_batch(&self, id: &BatchId, details: BatchDetails) -> DomainResult<Batch> {
        let batch = self.batches.update(id, details)?;
        tracing::info!(batch_id = %batch.id, "batch updated");
        Ok(batch)
    }

    pub fn create_delivery(&self, cmd: CreateDelivery) -> DomainResult<Delivery> {
        let delivery = self.deliveries.create(cmd)?;
        tracing::info!(
            delivery_number = %delivery.delivery_number,
            po_number = %delivery.po_number,
            lines = delivery.items.len(),
            "delivery created"
        );
        Ok(delivery)
    }
}
