use crate::domain::policy::{catalog, find_tier};
use crate::dto::policies::PolicyCard;
use crate::services::{ServiceError, ServiceResult};

/// All policy cards in catalog order.
pub fn list_policies() -> Vec<PolicyCard> {
    catalog().iter().map(PolicyCard::from).collect()
}

pub fn get_policy(id: &str) -> ServiceResult<PolicyCard> {
    find_tier(id)
        .map(PolicyCard::from)
        .ok_or(ServiceError::NotFound)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_carry_discount() {
        let cards = list_policies();

        assert_eq!(cards.len(), 3);
        assert_eq!(cards[1].discount_percent, 25);
        assert!(cards[2].most_popular);
    }

    #[test]
    fn unknown_policy_is_not_found() {
        assert!(matches!(get_policy("nope"), Err(ServiceError::NotFound)));
        assert_eq!(get_policy("Kalyan_001").unwrap().price, 1);
    }
}
