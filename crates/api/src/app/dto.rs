//! Request DTOs and their mapping onto domain inputs.
//!
//! Responses serialize the domain records directly; their field names already
//! follow the ERP's camelCase contract.

use chrono::NaiveDate;
use serde::Deserialize;

use stockpo_inventory::BatchDetails;
use stockpo_purchasing::{CreateDelivery, DeliveryLine, PurchaseOrderNumber};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRequest {
    pub batch_number: String,
    pub manufacturing_date: NaiveDate,
    #[serde(default)]
    pub expiration_date: Option<NaiveDate>,
    #[serde(default)]
    pub vendor_batch: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
    pub material_code: String,
    pub plant: String,
    pub storage_location: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryItemRequest {
    pub item_id: i64,
    pub quantity: String,
    #[serde(default)]
    pub batch_number: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDeliveryRequest {
    pub po_number: String,
    pub items: Vec<DeliveryItemRequest>,
}

// -------------------------
// Mapping helpers
// -------------------------

impl From<BatchRequest> for BatchDetails {
    fn from(req: BatchRequest) -> Self {
        BatchDetails {
            batch_number: req.batch_number,
            manufacturing_date: req.manufacturing_date,
            expiration_date: req.expiration_date,
            vendor_batch: req.vendor_batch,
            additional_info: req.additional_info,
            material_code: req.material_code,
            plant: req.plant,
            storage_location: req.storage_location,
        }
    }
}

impl CreateDeliveryRequest {
    pub fn into_command(self, requested_at: chrono::DateTime<chrono::Utc>) -> CreateDelivery {
        CreateDelivery {
            po_number: PurchaseOrderNumber::new(self.po_number),
            items: self
                .items
                .into_iter()
                .map(|i| DeliveryLine {
                    item_id: i.item_id,
                    quantity: i.quantity,
                    batch_number: i.batch_number,
                })
                .collect(),
            requested_at,
        }
    }
}
