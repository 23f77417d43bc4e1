pub mod payload;
pub mod selector;

pub use payload::{EventDraft, SeatingPayload};
pub use selector::{BuyerInfo, OrderRequest, PublicEvent, PublicSeatSelector, SeatState, Toggle};
