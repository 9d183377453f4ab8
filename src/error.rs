use thiserror::Error;

pub type Result<T> = std::result::Result<T, PaymentError>;

#[derive(Error, Debug)]
pub enum PaymentError {
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("cannot pay for order: {0}")]
    UnpayableOrder(String),
    #[error("unknown payment method: {0}")]
    UnknownMethod(String),
}
