use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use stockpo_core::{DomainError, DomainResult, Entity, RecordId};

/// Batch identifier (generated, never derived from the batch number).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchId(pub RecordId);

impl BatchId {
    pub fn new(id: RecordId) -> Self {
        Self(id)
    }

    pub fn generate() -> Self {
        Self(RecordId::new())
    }
}

impl core::fmt::Display for BatchId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl core::str::FromStr for BatchId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Business key of a batch: a batch number is unique per material and plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BatchKey<'a> {
    pub batch_number: &'a str,
    pub material_code: &'a str,
    pub plant: &'a str,
}

/// Caller-supplied batch fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetails {
    pub batch_number: String,
    pub manufacturing_date: NaiveDate,
    pub expiration_date: Option<NaiveDate>,
    pub vendor_batch: Option<String>,
    pub additional_info: Option<String>,
    pub material_code: String,
    pub plant: String,
    pub storage_location: String,
}

impl BatchDetails {
    pub fn key(&self) -> BatchKey<'_> {
        BatchKey {
            batch_number: &self.batch_number,
            material_code: &self.material_code,
            plant: &self.plant,
        }
    }

    /// Validate and normalize: trims key fields, drops blank optional text.
    pub fn validate(mut self) -> DomainResult<Self> {
        for (field, value) in [
            ("batchNumber", &mut self.batch_number),
            ("materialCode", &mut self.material_code),
            ("plant", &mut self.plant),
            ("storageLocation", &mut self.storage_location),
        ] {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(DomainError::validation(format!("{field} is required")));
            }
            if trimmed.len() != value.len() {
                *value = trimmed.to_string();
            }
        }

        if let Some(expires) = self.expiration_date {
            if expires < self.manufacturing_date {
                return Err(DomainError::validation(format!(
                    "expirationDate ({expires}) precedes manufacturingDate ({})",
                    self.manufacturing_date
                )));
            }
        }

        self.vendor_batch = non_blank(self.vendor_batch);
        self.additional_info = non_blank(self.additional_info);
        Ok(self)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Batch traceability record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: BatchId,
    #[serde(flatten)]
    pub details: BatchDetails,
    pub created_at: DateTime<Utc>,
}

impl Batch {
    pub fn key(&self) -> BatchKey<'_> {
        self.details.key()
    }
}

impl Entity for Batch {
    type Id = BatchId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn details(batch_number: &str, material_code: &str, plant: &str) -> BatchDetails {
        BatchDetails {
            batch_number: batch_number.to_string(),
            manufacturing_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            expiration_date: NaiveDate::from_ymd_opt(2027, 9, 1),
            vendor_batch: Some("VB-7781".to_string()),
            additional_info: None,
            material_code: material_code.to_string(),
            plant: plant.to_string(),
            storage_location: "WH01".to_string(),
        }
    }

    #[test]
    fn validate_trims_key_fields() {
        let mut input = details(" B-001 ", "36000330", "GB0");
        input.plant = "GB0\t".to_string();

        let valid = input.validate().unwrap();
        assert_eq!(valid.batch_number, "B-001");
        assert_eq!(valid.plant, "GB0");
    }

    #[test]
    fn validate_requires_key_fields() {
        let err = details("  ", "36000330", "GB0").validate().unwrap_err();
        assert_eq!(err, DomainError::validation("batchNumber is required"));

        let mut input = details("B-001", "36000330", "GB0");
        input.storage_location = String::new();
        let err = input.validate().unwrap_err();
        assert_eq!(err, DomainError::validation("storageLocation is required"));
    }

    #[test]
    fn validate_rejects_expiry_before_manufacture() {
        let mut input = details("B-001", "36000330", "GB0");
        input.expiration_date = NaiveDate::from_ymd_opt(2025, 8, 31);

        let err = input.validate().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn validate_allows_same_day_expiry_and_missing_expiry() {
        let mut input = details("B-001", "36000330", "GB0");
        input.expiration_date = Some(input.manufacturing_date);
        assert!(input.clone().validate().is_ok());

        input.expiration_date = None;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn validate_drops_blank_optional_text() {
        let mut input = details("B-001", "36000330", "GB0");
        input.vendor_batch = Some("   ".to_string());
        input.additional_info = Some("kept cold".to_string());

        let valid = input.validate().unwrap();
        assert_eq!(valid.vendor_batch, None);
        assert_eq!(valid.additional_info.as_deref(), Some("kept cold"));
    }

    #[test]
    fn batch_serializes_flat_with_explicit_nulls() {
        let batch = Batch {
            id: BatchId::generate(),
            details: BatchDetails {
                additional_info: None,
                ..details("B-001", "36000330", "GB0")
            },
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&batch).unwrap();

        assert_eq!(json["id"], batch.id.to_string());
        assert_eq!(json["batchNumber"], "B-001");
        assert_eq!(json["manufacturingDate"], "2025-09-01");
        assert_eq!(json["expirationDate"], "2027-09-01");
        assert!(json.get("additionalInfo").unwrap().is_null());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn details_deserialize_from_camel_case_with_optional_fields_absent() {
        let input: BatchDetails = serde_json::from_value(serde_json::json!({
            "batchNumber": "B-9",
            "manufacturingDate": "2025-10-01",
            "materialCode": "M0180",
            "plant": "GB0",
            "storageLocation": "WH01",
        }))
        .unwrap();

        assert_eq!(input.expiration_date, None);
        assert_eq!(input.vendor_batch, None);
    }
}
