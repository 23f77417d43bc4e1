use thiserror::Error;

use crate::models::SeatKey;

/// Ошибки редакторов. `Display` каждой ошибки - это текст уведомления для пользователя.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    #[error("QR Code is required!")]
    QrRequired,

    #[error("Ticket already has a QR code")]
    DuplicateQr,

    #[error("Element {0} not found")]
    ElementNotFound(String),

    #[error("Stage {0} not found")]
    StageNotFound(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Invalid seat key: {0}")]
    InvalidSeatKey(String),

    #[error("Invalid resize handle: {0}")]
    InvalidHandle(String),

    #[error("You can select at most {max} seats per order")]
    SelectionLimit { max: usize },

    #[error("Seat {0} is already sold")]
    SeatSold(SeatKey),

    #[error("Seat {0} is not available")]
    SeatUnavailable(SeatKey),

    #[error("Invalid event payload: {0}")]
    Validation(String),
}

impl From<validator::ValidationErrors> for EditorError {
    fn from(errors: validator::ValidationErrors) -> Self {
        EditorError::Validation(errors.to_string())
    }
}
