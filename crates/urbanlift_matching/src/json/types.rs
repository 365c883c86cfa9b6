use jiff::Timestamp;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    optimizer::smart_match::OptimizationRequest,
    problem::{
        error::ShipmentError,
        goods_category::GoodsCategory,
        shipment::{ShipmentRecord, ShipmentRecordBuilder},
        shipment_status::ShipmentStatus,
        urgency::Urgency,
    },
};

#[derive(Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "OptimizationRequest", rename_all = "camelCase")]
pub struct JsonOptimizationRequest {
    pub shipments: Vec<JsonShipment>,
    pub requested_at: Option<Timestamp>,
}

/// Weights arrive either as numbers or as form text such as `"12"` or `"12 kg"`.
#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum JsonWeight {
    Kilograms(f64),
    Text(String),
}

impl JsonWeight {
    pub fn kilograms(&self) -> Result<f64, ShipmentError> {
        match self {
            JsonWeight::Kilograms(value) => Ok(*value),
            JsonWeight::Text(text) => {
                let trimmed = text.trim();
                let numeric = trimmed
                    .find(|c: char| !(c.is_ascii_digit() || c == '.'))
                    .map_or(trimmed, |end| &trimmed[..end]);

                numeric
                    .parse::<f64>()
                    .map_err(|_| ShipmentError::InvalidWeight(text.clone()))
            }
        }
    }
}

#[derive(Serialize, Deserialize, JsonSchema, Clone, Debug)]
#[serde(deny_unknown_fields, rename = "Shipment", rename_all = "camelCase")]
pub struct JsonShipment {
    pub id: String,
    pub title: Option<String>,
    pub pickup_location: String,
    pub dropoff_location: String,
    pub goods_type: String,
    pub weight: JsonWeight,
    pub cost: u64,
    pub urgency: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<Timestamp>,
    pub description: Option<String>,

    #[serde(alias = "estimatedSavings")]
    pub savings: Option<u64>,
}

impl JsonShipment {
    pub fn into_record(self, now: Timestamp) -> Result<ShipmentRecord, ShipmentError> {
        let mut builder = ShipmentRecordBuilder::default();

        builder
            .set_id(self.id)
            .set_pickup_location(self.pickup_location)
            .set_dropoff_location(self.dropoff_location)
            .set_goods_type(self.goods_type.parse::<GoodsCategory>().unwrap_or(GoodsCategory::Other))
            .set_weight(self.weight.kilograms()?)
            .set_cost(self.cost)
            .set_created_at(self.created_at.unwrap_or(now));

        if let Some(title) = self.title {
            builder.set_title(title);
        }

        if let Some(urgency) = self.urgency {
            let level = urgency.parse::<Urgency>().unwrap_or_else(|_| {
                debug!(%urgency, "Unrated urgency level, scoring it as medium");
                Urgency::Medium
            });
            builder.set_urgency(level);
        }

        if let Some(status) = self.status {
            builder.set_status(status.parse::<ShipmentStatus>()?);
        }

        if let Some(description) = self.description {
            builder.set_description(description);
        }

        if let Some(savings) = self.savings {
            builder.set_savings(savings);
        }

        builder.build()
    }
}

impl JsonOptimizationRequest {
    pub fn build_request(self) -> Result<OptimizationRequest, ShipmentError> {
        let requested_at = self.requested_at.unwrap_or_else(Timestamp::now);
        let shipments = self
            .shipments
            .into_iter()
            .map(|shipment| shipment.into_record(requested_at))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(OptimizationRequest {
            shipments,
            requested_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::compatibility_scorer::timing_score;

    #[test]
    fn test_weight_parsing() {
        assert_eq!(JsonWeight::Kilograms(12.5).kilograms(), Ok(12.5));
        assert_eq!(JsonWeight::Text(String::from("12")).kilograms(), Ok(12.0));
        assert_eq!(JsonWeight::Text(String::from(" 7.5 kg")).kilograms(), Ok(7.5));
        assert!(JsonWeight::Text(String::from("heavy")).kilograms().is_err());
    }

    #[test]
    fn test_build_request() {
        let json = r#"{
            "requestedAt": "2025-06-10T08:00:00Z",
            "shipments": [
                {
                    "id": "nearby-1",
                    "pickupLocation": "Karol Bagh, New Delhi",
                    "dropoffLocation": "Lajpat Nagar, New Delhi",
                    "goodsType": "Electronics",
                    "weight": "15",
                    "cost": 850,
                    "urgency": "high",
                    "estimatedSavings": 320
                },
                {
                    "id": "nearby-2",
                    "title": "Cotton bales",
                    "pickupLocation": "Okhla, New Delhi",
                    "dropoffLocation": "Faridabad Industrial Area",
                    "goodsType": "textiles",
                    "weight": 30,
                    "cost": 650,
                    "status": "Pending"
                }
            ]
        }"#;

        let request: JsonOptimizationRequest = serde_json::from_str(json).unwrap();
        let request = request.build_request().unwrap();

        assert_eq!(request.shipments.len(), 2);

        let first = &request.shipments[0];
        assert_eq!(first.weight(), 15.0);
        assert_eq!(first.urgency(), Urgency::High);
        assert_eq!(first.savings(), Some(320));
        assert_eq!(first.created_at(), request.requested_at);
        assert_eq!(first.title(), "nearby-1");

        let second = &request.shipments[1];
        assert_eq!(second.goods_type(), GoodsCategory::Textiles);
        assert_eq!(second.status(), ShipmentStatus::Pending);
        assert_eq!(second.title(), "Cotton bales");
    }

    #[test]
    fn test_unrated_urgency_falls_back_to_medium() {
        let shipment = JsonShipment {
            id: String::from("1"),
            title: None,
            pickup_location: String::from("a"),
            dropoff_location: String::from("b"),
            goods_type: String::from("Other"),
            weight: JsonWeight::Kilograms(1.0),
            cost: 100,
            urgency: Some(String::from("yesterday")),
            status: None,
            created_at: None,
            description: None,
            savings: None,
        };

        let record = shipment.into_record(Timestamp::UNIX_EPOCH).unwrap();
        assert_eq!(record.urgency(), Urgency::Medium);
    }

    #[test]
    fn test_medium_urgency_request_builds() {
        let json = r#"{
            "shipments": [
                {
                    "id": "7",
                    "pickupLocation": "Okhla, New Delhi",
                    "dropoffLocation": "Noida Sector 62",
                    "goodsType": "Documents",
                    "weight": 12,
                    "cost": 300,
                    "urgency": "Medium"
                }
            ]
        }"#;

        let request: JsonOptimizationRequest = serde_json::from_str(json).unwrap();
        let request = request.build_request().unwrap();

        let shipment = &request.shipments[0];
        assert_eq!(shipment.urgency(), Urgency::Medium);
        assert_eq!(timing_score(shipment.urgency()), 0.7);
    }
}
