//! Fixed catalog of roadside-assistance policy tiers.

use serde::Serialize;

/// Named coverage item shown on a policy card.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PolicyFeature {
    pub name: &'static str,
    pub included: bool,
}

/// A purchasable policy plan.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyTier {
    pub id: &'static str,
    /// Tier name, e.g. "Premium Coverage".
    pub name: &'static str,
    /// Discounted price in whole rupees.
    pub price: u32,
    /// List price in whole rupees.
    pub original_price: u32,
    pub duration: &'static str,
    pub features: &'static [PolicyFeature],
    pub most_popular: bool,
}

impl PolicyTier {
    /// Discount off the list price, rounded down to a whole percent.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price == 0 || self.price >= self.original_price {
            return 0;
        }
        (self.original_price - self.price) * 100 / self.original_price
    }
}

const STANDARD_FEATURES: &[PolicyFeature] = &[
    PolicyFeature {
        name: "24/7 Roadside Assistance",
        included: true,
    },
    PolicyFeature {
        name: "Nation Wide Towing",
        included: true,
    },
    PolicyFeature {
        name: "Flat Tire Assistance",
        included: true,
    },
    PolicyFeature {
        name: "Fuel Delivery",
        included: true,
    },
    PolicyFeature {
        name: "Battery Jump Start",
        included: true,
    },
];

const CATALOG: [PolicyTier; 3] = [
    PolicyTier {
        id: "Kalyan_001",
        name: "Standard Coverage",
        price: 1,
        original_price: 3500,
        duration: "1 Year",
        features: STANDARD_FEATURES,
        most_popular: false,
    },
    PolicyTier {
        id: "Kalyan_002",
        name: "Premium Coverage",
        price: 4499,
        original_price: 6000,
        duration: "2 Year",
        features: STANDARD_FEATURES,
        most_popular: false,
    },
    PolicyTier {
        id: "Kalyan_003",
        name: "Platinum Coverage",
        price: 6499,
        original_price: 10000,
        duration: "3 Year",
        features: STANDARD_FEATURES,
        most_popular: true,
    },
];

/// All tiers in display order.
pub fn catalog() -> &'static [PolicyTier] {
    &CATALOG
}

/// Looks a tier up by its identifier.
pub fn find_tier(id: &str) -> Option<&'static PolicyTier> {
    CATALOG.iter().find(|tier| tier.id == id)
}
