use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockpo_core::{DomainResult, Entity, ValueObject};

use crate::quantity::Quantity;

/// Purchase order number as issued by the ERP system (e.g. `4800000878`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PurchaseOrderNumber(String);

impl PurchaseOrderNumber {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PurchaseOrderNumber {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PurchaseOrderNumber {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Vendor the order was placed with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub code: String,
    pub name: String,
    pub address: String,
}

impl ValueObject for Vendor {}

/// Purchase order line item.
///
/// Quantities stay in their ERP text form; use [`PurchaseOrderItem::open_quantity`]
/// to compare them numerically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrderItem {
    /// Identifier unique within the parent order.
    pub id: u32,
    /// ERP line-item number (`10`, `20`, ...).
    pub item: String,
    pub material_code: String,
    pub material_description: String,
    pub open_quantity: String,
    pub open_quantity_unit: String,
    pub qty_to_be_received: String,
    pub buom_quantity: String,
    pub buom_unit: String,
    pub batch_number: Option<String>,
    /// Goods receipt is posted to quality inspection stock.
    #[serde(rename = "recInQI")]
    pub rec_in_qi: bool,
    pub vendor_material_no: String,
    pub plant: String,
    pub plant_description: String,
    pub storage_location: String,
    pub storage_location_description: String,
    pub hazardous_material: String,
    pub is_hazardous: bool,
}

impl PurchaseOrderItem {
    /// Numeric open quantity.
    pub fn open_quantity(&self) -> DomainResult<Quantity> {
        self.open_quantity.parse()
    }
}

impl Entity for PurchaseOrderItem {
    type Id = u32;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Purchase order as exposed by the catalog. Immutable once seeded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseOrder {
    pub po_number: PurchaseOrderNumber,
    pub supplier_risk: String,
    pub vendor: Vendor,
    pub created_by: String,
    pub created_on: NaiveDate,
    pub company_code: String,
    pub purchase_org: String,
    pub items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrder {
    pub fn item(&self, item_id: u32) -> Option<&PurchaseOrderItem> {
        self.items.iter().find(|i| i.id == item_id)
    }

    /// Material codes referenced by the order's line items, in line order,
    /// without duplicates.
    pub fn material_codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if !codes.contains(&item.material_code.as_str()) {
                codes.push(&item.material_code);
            }
        }
        codes
    }
}

impl Entity for PurchaseOrder {
    type Id = PurchaseOrderNumber;

    fn id(&self) -> &Self::Id {
        &self.po_number
    }
}
