pub mod config;
pub mod design;
pub mod error;
pub mod geometry;
pub mod models;
pub mod seat_map;
pub mod services;

use tracing::info;
use validator::Validate;

use crate::config::Config;
use crate::design::{EventDetails, SmartTagContext, TicketDesignEditor};
use crate::error::EditorError;
use crate::models::BuyerQuestion;
use crate::seat_map::SeatMapEditor;
use crate::services::{EventDraft, SeatingPayload};

// Общее состояние шагов "схема зала" и "дизайн билета" мастера создания события
pub struct EditorSession {
    pub config: Config,
    pub seat_map: SeatMapEditor,
    pub design: TicketDesignEditor,
    pub is_reserved_seating: bool,
    event: EventDetails,
    questions: Vec<BuyerQuestion>,
}

impl EditorSession {
    pub fn new(config: Config) -> Self {
        let seat_map = SeatMapEditor::new(&config.seat_map);
        Self {
            config,
            seat_map,
            design: TicketDesignEditor::default(),
            is_reserved_seating: false,
            event: EventDetails::default(),
            questions: Vec::new(),
        }
    }

    /// Поднимает оба редактора из черновика. Пустая схема при рассадке
    /// генерируется по суммарному количеству билетов.
    pub fn from_draft(config: Config, draft: EventDraft) -> Result<Self, EditorError> {
        draft.validate()?;

        let capacity = draft.capacity();
        let event = draft.event_details();
        let grid = draft.seat_grid();

        let mut seat_map = SeatMapEditor::with_state(&config.seat_map, grid, draft.seat_map_config, draft.tiers);
        if draft.is_reserved_seating && seat_map.ensure_generated(capacity) {
            info!("Empty seat map generated for capacity {}", capacity);
        }

        Ok(Self {
            config,
            seat_map,
            design: TicketDesignEditor::new(draft.ticket_design),
            is_reserved_seating: draft.is_reserved_seating,
            event,
            questions: draft.buyer_questions,
        })
    }

    pub fn event(&self) -> &EventDetails {
        &self.event
    }

    pub fn questions(&self) -> &[BuyerQuestion] {
        &self.questions
    }

    /// Контекст предпросмотра билета в редакторе дизайна
    pub fn preview_context(&self) -> SmartTagContext {
        SmartTagContext::preview(&self.event, &self.questions)
    }

    pub fn payload(&self) -> Result<SeatingPayload, EditorError> {
        let payload = SeatingPayload::build(
            self.is_reserved_seating,
            self.seat_map.grid(),
            self.seat_map.config(),
            self.design.design(),
        );
        payload.check()?;
        Ok(payload)
    }
}
