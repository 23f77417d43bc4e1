//! payload.rs
//!
//! Граница с бэкендом: черновик мастера создания события на входе,
//! данные рассадки и дизайна билета на выходе.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::design::EventDetails;
use crate::error::EditorError;
use crate::models::tier::derived_capacity;
use crate::models::{
    BuyerQuestion, SeatCell, SeatDto, SeatGrid, SeatMapConfig, TicketDesign, TicketTier,
};

/// Состояние мастера, из которого поднимаются оба редактора
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub event_date: Option<NaiveDate>,
    #[serde(default = "physical")]
    pub is_physical: bool,
    #[serde(default)]
    pub venue_name: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    #[validate(nested)]
    pub tiers: Vec<TicketTier>,
    #[serde(default)]
    pub is_reserved_seating: bool,
    /// Места редактора, включая еще не размеченные (`tierId: null`)
    #[serde(default)]
    pub seats: Vec<SeatCell>,
    #[serde(default)]
    pub seat_map_config: SeatMapConfig,
    #[serde(default)]
    pub ticket_design: TicketDesign,
    #[serde(default)]
    pub buyer_questions: Vec<BuyerQuestion>,
}

impl EventDraft {
    pub fn capacity(&self) -> u32 {
        derived_capacity(&self.tiers)
    }

    pub fn seat_grid(&self) -> SeatGrid {
        self.seats.iter().cloned().collect()
    }

    pub fn event_details(&self) -> EventDetails {
        EventDetails {
            title: self.title.clone(),
            date: self.event_date,
            location: self.location(),
        }
    }

    /// Площадка, иначе адрес; у онлайн-события своя подпись
    pub fn location(&self) -> String {
        if !self.is_physical {
            return ONLINE_LOCATION.to_string();
        }
        [&self.venue_name, &self.address]
            .into_iter()
            .flatten()
            .find(|value| !value.is_empty())
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            event_date: None,
            is_physical: true,
            venue_name: None,
            address: None,
            tiers: Vec::new(),
            is_reserved_seating: false,
            seats: Vec::new(),
            seat_map_config: SeatMapConfig::default(),
            ticket_design: TicketDesign::default(),
            buyer_questions: Vec::new(),
        }
    }
}

const ONLINE_LOCATION: &str = "Online Event";

fn physical() -> bool {
    true
}

/// Часть тела запроса создания события, за которую отвечают редакторы
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "single_qr"))]
pub struct SeatingPayload {
    pub is_reserved_seating: bool,
    #[validate(nested)]
    pub seats: Vec<SeatDto>,
    pub seat_map_config: SeatMapConfig,
    pub ticket_design: TicketDesign,
}

impl SeatingPayload {
    /// Неразмеченные места не отправляются; без рассадки мест нет вовсе
    pub fn build(is_reserved_seating: bool, grid: &SeatGrid, config: &SeatMapConfig, design: &TicketDesign) -> Self {
        Self {
            is_reserved_seating,
            seats: if is_reserved_seating { grid.to_payload() } else { Vec::new() },
            seat_map_config: config.clone(),
            ticket_design: design.clone(),
        }
    }

    /// Валидация с переводом в ошибку редактора
    pub fn check(&self) -> Result<(), EditorError> {
        self.validate()?;
        Ok(())
    }
}

fn single_qr(payload: &SeatingPayload) -> Result<(), ValidationError> {
    match payload.ticket_design.qr_count() {
        1 => Ok(()),
        _ => Err(ValidationError::new("single_qr").with_message("ticket design must contain exactly one QR code".into())),
    }
}
