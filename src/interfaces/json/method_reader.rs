use crate::domain::method::PaymentMethod;
use crate::error::Result;
use std::io::{BufReader, Read};

/// Reads payment methods from a JSON source holding an array of method
/// objects.
pub struct MethodReader<R: Read> {
    source: R,
}

impl<R: Read> MethodReader<R> {
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Reads and deserializes the full method list, in file order.
    pub fn read_methods(self) -> Result<Vec<PaymentMethod>> {
        Ok(serde_json::from_reader(BufReader::new(self.source))?)
    }
}
