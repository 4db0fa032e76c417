//! Order lookup placeholder.
//!
//! # Responsibility
//! - Validate order search input and delegate to a pluggable index.
//!
//! # Invariants
//! - Blank ids are rejected before the index is consulted.
//! - No order data source exists yet; `UnindexedOrders` never finds anything.

use crate::model::inventory::ShelfPath;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Order lookup errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderLookupError {
    /// Order id is blank after trim.
    EmptyOrderId,
    /// No order with this id is known.
    NotFound(String),
}

impl Display for OrderLookupError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyOrderId => write!(f, "order id must not be blank"),
            Self::NotFound(id) => write!(f, "order not found: {id}"),
        }
    }
}

impl Error for OrderLookupError {}

/// Located order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRecord {
    pub order_id: String,
    /// Nested shelf the order is stored on, when known.
    pub shelf: Option<ShelfPath>,
}

/// Source of order records.
pub trait OrderIndex {
    fn find(&self, order_id: &str) -> Option<OrderRecord>;
}

/// Index with no data behind it.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnindexedOrders;

impl OrderIndex for UnindexedOrders {
    fn find(&self, _order_id: &str) -> Option<OrderRecord> {
        None
    }
}

/// Order search facade.
#[derive(Debug, Default)]
pub struct OrderLookup<I: OrderIndex = UnindexedOrders> {
    index: I,
}

impl<I: OrderIndex> OrderLookup<I> {
    pub fn new(index: I) -> Self {
        Self { index }
    }

    /// Searches for one order by id.
    pub fn search_order(&self, raw_id: &str) -> Result<OrderRecord, OrderLookupError> {
        let order_id = raw_id.trim();
        if order_id.is_empty() {
            info!("event=order_search module=order status=rejected reason=empty_id");
            return Err(OrderLookupError::EmptyOrderId);
        }

        match self.index.find(order_id) {
            Some(record) => {
                info!("event=order_search module=order status=ok order_id={order_id}");
                Ok(record)
            }
            None => {
                info!("event=order_search module=order status=not_found order_id={order_id}");
                Err(OrderLookupError::NotFound(order_id.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OrderIndex, OrderLookup, OrderLookupError, OrderRecord, UnindexedOrders};

    struct SingleOrder;

    impl OrderIndex for SingleOrder {
        fn find(&self, order_id: &str) -> Option<OrderRecord> {
            (order_id == "SO-1").then(|| OrderRecord {
                order_id: order_id.to_string(),
                shelf: None,
            })
        }
    }

    #[test]
    fn blank_order_id_is_rejected() {
        let lookup = OrderLookup::new(UnindexedOrders);
        assert_eq!(
            lookup.search_order("   "),
            Err(OrderLookupError::EmptyOrderId)
        );
    }

    #[test]
    fn unindexed_orders_never_match() {
        let lookup = OrderLookup::<UnindexedOrders>::default();
        assert_eq!(
            lookup.search_order(" SO-1 "),
            Err(OrderLookupError::NotFound("SO-1".to_string()))
        );
    }

    #[test]
    fn search_trims_id_before_consulting_index() {
        let lookup = OrderLookup::new(SingleOrder);
        let record = lookup.search_order("\tSO-1 ").expect("order should be found");
        assert_eq!(record.order_id, "SO-1");
    }
}
