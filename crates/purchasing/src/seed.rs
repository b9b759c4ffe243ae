//! Reference dataset standing in for the ERP purchase order backend.

use chrono::NaiveDate;

use crate::order::{PurchaseOrder, PurchaseOrderItem, PurchaseOrderNumber, Vendor};

struct ItemSeed {
    id: u32,
    item: &'static str,
    material_code: &'static str,
    material_description: &'static str,
    open_quantity: &'static str,
    open_quantity_unit: &'static str,
    buom_quantity: &'static str,
    buom_unit: &'static str,
    vendor_material_no: &'static str,
    hazardous_material: &'static str,
}

impl ItemSeed {
    fn into_item(self) -> PurchaseOrderItem {
        PurchaseOrderItem {
            id: self.id,
            item: self.item.to_string(),
            material_code: self.material_code.to_string(),
            material_description: self.material_description.to_string(),
            open_quantity: self.open_quantity.to_string(),
            open_quantity_unit: self.open_quantity_unit.to_string(),
            qty_to_be_received: self.open_quantity.to_string(),
            buom_quantity: self.buom_quantity.to_string(),
            buom_unit: self.buom_unit.to_string(),
            batch_number: None,
            rec_in_qi: false,
            vendor_material_no: self.vendor_material_no.to_string(),
            plant: "GB0".to_string(),
            plant_description: "2".to_string(),
            storage_location: "WH01".to_string(),
            storage_location_description: "Warehouse EWM".to_string(),
            hazardous_material: self.hazardous_material.to_string(),
            is_hazardous: !self.hazardous_material.is_empty(),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("seed dates are valid calendar dates")
}

/// The two sample purchase orders served by the mock catalog.
pub fn reference_orders() -> Vec<PurchaseOrder> {
    vec![
        PurchaseOrder {
            po_number: PurchaseOrderNumber::new("4800000878"),
            supplier_risk: "N/A".to_string(),
            vendor: Vendor {
                code: "602814".to_string(),
                name: "Fisher Scientific UK".to_string(),
                address: "Bishop Meadow Road, Loughborough, LE11 5RG, LEC, GB".to_string(),
            },
            created_by: "KMURARISETTY".to_string(),
            created_on: date(2025, 9, 26),
            company_code: "3141".to_string(),
            purchase_org: "ZDIR".to_string(),
            items: vec![
                ItemSeed {
                    id: 1,
                    item: "10",
                    material_code: "36000330",
                    material_description: "VIAL 40ML TOC WITH CAP",
                    open_quantity: "99994",
                    open_quantity_unit: "PAK",
                    buom_quantity: "7199568",
                    buom_unit: "EA",
                    vendor_material_no: "15173488",
                    hazardous_material: "FLAMMABLE",
                }
                .into_item(),
                ItemSeed {
                    id: 2,
                    item: "20",
                    material_code: "M0180",
                    material_description: "Pipette, 25mL Poly Serological",
                    open_quantity: "999999",
                    open_quantity_unit: "CS",
                    buom_quantity: "3999996",
                    buom_unit: "PAK",
                    vendor_material_no: "11517752",
                    hazardous_material: "",
                }
                .into_item(),
            ],
        },
        PurchaseOrder {
            po_number: PurchaseOrderNumber::new("4800000912"),
            supplier_risk: "LOW".to_string(),
            vendor: Vendor {
                code: "604127".to_string(),
                name: "VWR International Ltd".to_string(),
                address: "Hunter Boulevard, Magna Park, Lutterworth, LE17 4XN, LEC, GB".to_string(),
            },
            created_by: "KMURARISETTY".to_string(),
            created_on: date(2025, 10, 3),
            company_code: "3141".to_string(),
            purchase_org: "ZDIR".to_string(),
            items: vec![
                ItemSeed {
                    id: 1,
                    item: "10",
                    material_code: "20000145",
                    material_description: "ACETONITRILE HPLC GRADE 2.5L",
                    open_quantity: "120",
                    open_quantity_unit: "BOT",
                    buom_quantity: "120",
                    buom_unit: "BOT",
                    vendor_material_no: "83639.320",
                    hazardous_material: "FLAMMABLE",
                }
                .into_item(),
                ItemSeed {
                    id: 2,
                    item: "20",
                    material_code: "50001234",
                    material_description: "GLOVE NITRILE POWDER FREE M",
                    open_quantity: "400",
                    open_quantity_unit: "BOX",
                    buom_quantity: "40000",
                    buom_unit: "EA",
                    vendor_material_no: "112-2372",
                    hazardous_material: "",
                }
                .into_item(),
            ],
        },
    ]
}
