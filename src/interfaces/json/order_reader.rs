use crate::domain::order::Order;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads orders from a JSON source.
///
/// The source must hold a JSON array of order objects. Monetary fields are
/// accepted in both string (`"100.00"`) and numeric (`100.0`) encodings.
pub struct OrderReader<R: Read> {
    source: R,
}

impl<R: Read> OrderReader<R> {
    /// Creates a new `OrderReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Reads and deserializes the full order list.
    pub fn read_orders(self) -> Result<Vec<Order>> {
        Ok(serde_json::from_reader(BufReader::new(self.source))?)
    }
}
