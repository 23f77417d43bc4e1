pub mod seat;
pub mod stage;
pub mod tier;
pub mod design;

pub use seat::{SeatCell, SeatDto, SeatGrid, SeatKey};
pub use stage::{RowLabelType, SeatMapConfig, Stage};
pub use tier::{BuyerQuestion, TicketTier};
pub use design::{ElementType, FontWeight, TextAlign, TicketDesign, TicketElement};
