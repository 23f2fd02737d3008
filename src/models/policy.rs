use serde::{Deserialize, Serialize};

use super::{error::PolicyError, ticket::TicketType};

pub const MAX_TICKETS_PER_PURCHASE: u32 = 20;

/// Unit price of each ticket type, in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTable {
    pub adult: u32,
    pub child: u32,
    pub infant: u32,
}

impl PriceTable {
    pub fn price(&self, ticket_type: TicketType) -> u32 {
        match ticket_type {
            TicketType::Adult => self.adult,
            TicketType::Child => self.child,
            TicketType::Infant => self.infant,
        }
    }
}

impl Default for PriceTable {
    fn default() -> Self {
        Self {
            adult: 20,
            child: 10,
            infant: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PurchasePolicy {
    pub max_tickets_per_purchase: u32,
    pub prices: PriceTable,
}

impl PurchasePolicy {
    pub fn from_json_str(json: &str) -> Result<Self, PolicyError> {
        let policy: PurchasePolicy = serde_json::from_str(json)?;
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        if self.max_tickets_per_purchase < 1 {
            return Err(PolicyError::Invalid(
                "max_tickets_per_purchase must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for PurchasePolicy {
    fn default() -> Self {
        Self {
            max_tickets_per_purchase: MAX_TICKETS_PER_PURCHASE,
            prices: PriceTable::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_prices() {
        let policy = PurchasePolicy::default();
        assert_eq!(20, policy.max_tickets_per_purchase);
        assert_eq!(20, policy.prices.price(TicketType::Adult));
        assert_eq!(10, policy.prices.price(TicketType::Child));
        assert_eq!(0, policy.prices.price(TicketType::Infant));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let policy = PurchasePolicy::from_json_str(r#"{"max_tickets_per_purchase": 8}"#).unwrap();
        assert_eq!(8, policy.max_tickets_per_purchase);
        assert_eq!(PriceTable::default(), policy.prices);

        let policy = PurchasePolicy::from_json_str(
            r#"{"prices": {"adult": 25, "child": 12, "infant": 1}}"#,
        )
        .unwrap();
        assert_eq!(20, policy.max_tickets_per_purchase);
        assert_eq!(12, policy.prices.price(TicketType::Child));
    }

    #[test]
    fn test_invalid_json_policy() {
        let result = PurchasePolicy::from_json_str(r#"{"max_tickets_per_purchase": 0}"#);
        assert!(matches!(result, Err(PolicyError::Invalid(_))), "{result:?}");

        let result = PurchasePolicy::from_json_str("not json");
        assert!(matches!(result, Err(PolicyError::Parse(_))), "{result:?}");
    }
}
