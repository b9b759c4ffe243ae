//! Purchasing domain module (purchase orders and delivery confirmation).
//!
//! This crate contains the read-only purchase order catalog and the delivery
//! validation rules, implemented purely as deterministic domain logic (no IO,
//! no HTTP, no storage).

pub mod catalog;
pub mod delivery;
pub mod order;
pub mod quantity;
mod seed;

pub use catalog::{CatalogStore, InMemoryCatalog};
pub use delivery::{
    CreateDelivery, Delivery, DeliveryLine, DeliveryNumberGenerator, DeliveryStatus,
    DeliveryValidator,
};
pub use order::{PurchaseOrder, PurchaseOrderItem, PurchaseOrderNumber, Vendor};
pub use quantity::Quantity;
pub use seed::reference_orders;
