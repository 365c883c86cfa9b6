use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::{kilometers::Kilometers, shipment::ShipmentRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Quote {
    pub cost: u64,
    pub savings: u64,
}

/// Prices shipments and shared legs.
///
/// Every monetary figure produced by the optimizers goes through this trait so callers and
/// tests can plug in their own rates.
pub trait PricingModel: Send + Sync {
    /// Price of carrying a shipment of `weight_kg` over `distance` on its own, and the expected
    /// saving when it is shared.
    fn quote(&self, distance: Kilometers, weight_kg: f64) -> Quote;

    /// Share of the stand-alone cost a merchant saves by sharing a vehicle.
    fn savings_ratio(&self) -> f64;

    /// Cost per kilometer of running a dedicated vehicle.
    fn per_km_rate(&self) -> f64;

    /// Fraction of the dedicated cost still paid on a shared route.
    fn shared_cost_ratio(&self) -> f64;

    fn expected_savings(&self, shipment: &ShipmentRecord) -> u64 {
        shipment
            .savings()
            .unwrap_or_else(|| (shipment.cost() as f64 * self.savings_ratio()).floor() as u64)
    }
}

impl<P: PricingModel + ?Sized> PricingModel for std::sync::Arc<P> {
    fn quote(&self, distance: Kilometers, weight_kg: f64) -> Quote {
        (**self).quote(distance, weight_kg)
    }

    fn savings_ratio(&self) -> f64 {
        (**self).savings_ratio()
    }

    fn per_km_rate(&self) -> f64 {
        (**self).per_km_rate()
    }

    fn shared_cost_ratio(&self) -> f64 {
        (**self).shared_cost_ratio()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlatRatePricing {
    pub base_fare: f64,
    pub per_km_rate: f64,
    pub per_kg_rate: f64,
    pub savings_ratio: f64,
    pub shared_cost_ratio: f64,
}

impl Default for FlatRatePricing {
    fn default() -> Self {
        Self {
            base_fare: 200.0,
            per_km_rate: 15.0,
            per_kg_rate: 2.0,
            savings_ratio: 0.3,
            shared_cost_ratio: 0.6,
        }
    }
}

impl PricingModel for FlatRatePricing {
    fn quote(&self, distance: Kilometers, weight_kg: f64) -> Quote {
        let cost = self.base_fare
            + distance * self.per_km_rate
            + weight_kg.max(0.0) * self.per_kg_rate;
        let cost = cost.max(0.0).floor();

        Quote {
            cost: cost as u64,
            savings: (cost * self.savings_ratio).floor() as u64,
        }
    }

    fn savings_ratio(&self) -> f64 {
        self.savings_ratio
    }

    fn per_km_rate(&self) -> f64 {
        self.per_km_rate
    }

    fn shared_cost_ratio(&self) -> f64 {
        self.shared_cost_ratio
    }
}
