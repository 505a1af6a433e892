//! View models for the policy catalog pages.

use serde::Serialize;

use crate::domain::policy::{PolicyFeature, PolicyTier};

/// A tier prepared for rendering as a card.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PolicyCard {
    pub id: &'static str,
    pub name: &'static str,
    pub price: u32,
    pub original_price: u32,
    pub duration: &'static str,
    pub features: &'static [PolicyFeature],
    pub most_popular: bool,
    pub discount_percent: u32,
}

impl From<&PolicyTier> for PolicyCard {
    fn from(tier: &PolicyTier) -> Self {
        Self {
            id: tier.id,
            name: tier.name,
            price: tier.price,
            original_price: tier.original_price,
            duration: tier.duration,
            features: tier.features,
            most_popular: tier.most_popular,
            discount_percent: tier.discount_percent(),
        }
    }
}
