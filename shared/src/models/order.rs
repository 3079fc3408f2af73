//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Client, Product};

/// Order entity with its associations resolved
///
/// `products` holds each product at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: Uuid,
    /// Set on create and overwritten on every update
    pub ordered_at: DateTime<Utc>,
    pub client: Client,
    pub products: Vec<Product>,
}

impl Order {
    /// Ids of the associated products, in association order
    pub fn product_ids(&self) -> Vec<Uuid> {
        self.products.iter().map(|p| p.product_id).collect()
    }
}

/// Create / update order payload
///
/// `product_ids` may repeat an id; the order keeps it once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderPayload {
    pub client_id: Uuid,
    pub product_ids: Vec<Uuid>,
}

impl OrderPayload {
    pub fn new(client_id: Uuid, product_ids: impl IntoIterator<Item = Uuid>) -> Self {
        Self {
            client_id,
            product_ids: product_ids.into_iter().collect(),
        }
    }

    /// Requested product ids with repeats removed, first occurrence wins
    pub fn distinct_product_ids(&self) -> Vec<Uuid> {
        let mut seen = std::collections::HashSet::with_capacity(self.product_ids.len());
        self.product_ids
            .iter()
            .copied()
            .filter(|id| seen.insert(*id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_wire_names() {
        let client_id = Uuid::new_v4();
        let p = Uuid::new_v4();
        let json = format!(r#"{{"clientId":"{client_id}","productIds":["{p}"]}}"#);
        let payload: OrderPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload.client_id, client_id);
        assert_eq!(payload.product_ids, vec![p]);
    }

    #[test]
    fn test_payload_requires_both_fields() {
        let json = format!(r#"{{"clientId":"{}"}}"#, Uuid::new_v4());
        assert!(serde_json::from_str::<OrderPayload>(&json).is_err());
        assert!(serde_json::from_str::<OrderPayload>(r#"{"productIds":[]}"#).is_err());
    }

    #[test]
    fn test_distinct_product_ids_keeps_first_occurrence() {
        let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
        let payload = OrderPayload::new(Uuid::new_v4(), [b, a, b, a, b]);
        assert_eq!(payload.distinct_product_ids(), vec![b, a]);
    }
}
