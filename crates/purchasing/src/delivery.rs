//! Delivery confirmation against a purchase order.
//!
//! A delivery is validated against the catalog and returned to the caller; it
//! is never stored and never reduces the order's open quantities.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockpo_core::{DomainError, DomainResult, Entity};

use crate::catalog::CatalogStore;
use crate::order::{PurchaseOrder, PurchaseOrderItem, PurchaseOrderNumber};
use crate::quantity::Quantity;

/// Requested quantity for one purchase order line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLine {
    pub item_id: i64,
    pub quantity: String,
    pub batch_number: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeliveryStatus {
    Created,
}

/// Confirmed delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub delivery_number: String,
    pub po_number: PurchaseOrderNumber,
    pub items: Vec<DeliveryLine>,
    pub created_at: DateTime<Utc>,
    pub status: DeliveryStatus,
}

/// Command: CreateDelivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateDelivery {
    pub po_number: PurchaseOrderNumber,
    pub items: Vec<DeliveryLine>,
    pub requested_at: DateTime<Utc>,
}

/// Issues `DL<micros>` delivery numbers, strictly increasing per generator.
#[derive(Debug, Default)]
pub struct DeliveryNumberGenerator {
    last_micros: AtomicI64,
}

impl DeliveryNumberGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number for a delivery created at `at`. Two calls in the same
    /// microsecond still get distinct numbers.
    pub fn next(&self, at: DateTime<Utc>) -> String {
        let candidate = at.timestamp_micros();
        let previous = self
            .last_micros
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                Some(candidate.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|last| last);
        format!("DL{}", candidate.max(previous.saturating_add(1)))
    }
}

/// Check every requested line against the order, in input order.
///
/// Fails on the first line that references an unknown item or asks for more
/// than the item's open quantity.
pub fn validate_lines(order: &PurchaseOrder, lines: &[DeliveryLine]) -> DomainResult<()> {
    let items: HashMap<i64, &PurchaseOrderItem> = order
        .items
        .iter()
        .map(|item| (i64::from(*item.id()), item))
        .collect();

    for line in lines {
        let Some(item) = items.get(&line.item_id) else {
            return Err(DomainError::validation(format!(
                "Item {} not found in PO",
                line.item_id
            )));
        };

        let requested: Quantity = line.quantity.parse().map_err(|_| {
            DomainError::validation(format!(
                "Delivery quantity ({}) for item {} is not a whole number",
                line.quantity, line.item_id
            ))
        })?;
        let open = item.open_quantity().map_err(|_| {
            DomainError::validation(format!(
                "Open quantity ({}) for item {} is not a whole number",
                item.open_quantity, line.item_id
            ))
        })?;

        if requested > open {
            return Err(DomainError::validation(format!(
                "Delivery quantity ({}) exceeds open quantity ({}) for item {}",
                line.quantity, item.open_quantity, line.item_id
            )));
        }
    }

    Ok(())
}

/// Validates delivery requests against a catalog and confirms them.
#[derive(Debug)]
pub struct DeliveryValidator<C> {
    catalog: C,
    numbers: DeliveryNumberGenerator,
}

impl<C: CatalogStore> DeliveryValidator<C> {
    pub fn new(catalog: C) -> Self {
        Self {
            catalog,
            numbers: DeliveryNumberGenerator::new(),
        }
    }

    pub fn create(&self, cmd: CreateDelivery) -> DomainResult<Delivery> {
        let order = self.catalog.lookup(&cmd.po_number)?;
        validate_lines(&order, &cmd.items)?;

        Ok(Delivery {
            delivery_number: self.numbers.next(cmd.requested_at),
            po_number: cmd.po_number,
            items: cmd.items,
            created_at: cmd.requested_at,
            status: DeliveryStatus::Created,
        })
    }
}
