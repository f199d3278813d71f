//! Orders as listed by the backend.

use core::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::{
    id::{OrderId, ProductId},
    lenient,
};

/// A customer order.
///
/// `price` and `quantity` are `None` when the backend document is missing
/// them or carries a non-numeric value; such orders contribute nothing to
/// earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    /// Backend identifier (`_id` on the wire; a virtual `id` is ignored).
    #[serde(rename(deserialize = "_id"), default)]
    pub id: Option<OrderId>,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    /// Item name shown in the recent orders table.
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: Option<String>,
    /// Unit price.
    #[serde(default, deserialize_with = "lenient::decimal")]
    pub price: Option<Decimal>,
    #[serde(default, deserialize_with = "lenient::quantity")]
    pub quantity: Option<u32>,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(
        rename = "payment_method",
        default,
        deserialize_with = "lenient::text"
    )]
    pub payment_method: Option<String>,
    #[serde(default, deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// `price × quantity`, with absent values counted as zero.
    ///
    /// Saturates at the bounds of [`Decimal`] instead of overflowing.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        let price = self.price.unwrap_or(Decimal::ZERO);
        let quantity = Decimal::from(self.quantity.unwrap_or(0));
        price.saturating_mul(quantity)
    }
}

/// Order status as reported by the backend.
///
/// Statuses form an open set; only [`OrderStatus::PENDING`] is interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct OrderStatus(String);

impl OrderStatus {
    /// Status of an order that has not been processed yet.
    pub const PENDING: &'static str = "Pending";

    /// Create a status from its string value.
    #[must_use]
    pub fn new(status: impl Into<String>) -> Self {
        Self(status.into())
    }

    /// Returns the status as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact, case-sensitive comparison against `"Pending"`.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.0 == Self::PENDING
    }
}

impl<'de> Deserialize<'de> for OrderStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self(lenient::text(deserializer)?.unwrap_or_default()))
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for OrderStatus {
    fn from(status: &str) -> Self {
        Self::new(status)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn test_decode_backend_order() {
        let order: Order = serde_json::from_value(json!({
            "_id": "66a1",
            "productId": "p-9",
            "name": "Paneer Tikka",
            "price": "249.50",
            "quantity": 2,
            "status": "Pending",
            "payment_method": "UPI",
            "createdAt": "2024-05-01T10:30:00.000Z",
        }))
        .unwrap();

        assert_eq!(order.id, Some(OrderId::new("66a1")));
        assert_eq!(order.product_id, Some(ProductId::new("p-9")));
        assert_eq!(order.price, Some(Decimal::new(24950, 2)));
        assert_eq!(order.quantity, Some(2));
        assert!(order.status.is_pending());
        assert_eq!(order.payment_method.as_deref(), Some("UPI"));
        assert_eq!(
            order.created_at,
            Some(Utc.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap())
        );
        assert_eq!(order.line_total(), Decimal::new(49900, 2));
    }

    #[test]
    fn test_malformed_fields_do_not_fail_decoding() {
        let order: Order = serde_json::from_value(json!({
            "price": "free",
            "quantity": "lots",
            "status": null,
            "createdAt": "not a date",
        }))
        .unwrap();

        assert_eq!(order.price, None);
        assert_eq!(order.quantity, None);
        assert_eq!(order.status.as_str(), "");
        assert_eq!(order.created_at, None);
        assert_eq!(order.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_total_saturates_on_overflow() {
        let order: Order = serde_json::from_value(json!({
            "price": "70000000000000000000000000000",
            "quantity": 2,
        }))
        .unwrap();

        assert_eq!(order.line_total(), Decimal::MAX);
    }

    #[test]
    fn test_id_virtual_alongside_backend_id() {
        let order: Order = serde_json::from_value(json!({
            "_id": "66a1",
            "id": "66a1",
            "price": 10,
            "quantity": 1,
        }))
        .unwrap();

        assert_eq!(order.id, Some(OrderId::new("66a1")));
    }

    #[test]
    fn test_pending_is_case_sensitive() {
        assert!(OrderStatus::new("Pending").is_pending());
        assert!(!OrderStatus::new("pending").is_pending());
        assert!(!OrderStatus::new("Shipped").is_pending());
    }
}
