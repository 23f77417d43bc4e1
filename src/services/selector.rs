//! selector.rs
//!
//! Публичный выбор мест покупателем. Та же модель координат, что и в редакторе,
//! но только чтение схемы: проданные места заблокированы, выбор ограничен
//! лимитом билетов на заказ.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use validator::Validate;

use crate::config::SelectorSettings;
use crate::error::EditorError;
use crate::models::tier::{find_tier, NEUTRAL_SEAT_COLOR};
use crate::models::{SeatDto, SeatKey, SeatMapConfig, TicketTier};
use crate::seat_map::labels;

/// Событие в том виде, в каком его отдает публичная ссылка
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicEvent {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub is_reserved_seating: bool,
    #[serde(default)]
    pub tiers: Vec<TicketTier>,
    #[serde(default)]
    pub seats: Vec<SeatDto>,
    #[serde(default)]
    pub seat_map_config: SeatMapConfig,
    /// Ключи в формате "row_col"
    #[serde(default)]
    pub sold_seats: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatState {
    Available,
    Selected,
    Sold,
    /// Место без категории: показывается, но купить нельзя
    Unavailable,
}

#[derive(Debug, Clone, Default, Validate)]
pub struct BuyerInfo {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
}

/// Тело запроса создания заказа
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub event_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub seat_ids: Vec<String>,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_phone: Option<String>,
}

pub struct PublicSeatSelector {
    event_id: String,
    seats: BTreeMap<SeatKey, String>,
    tiers: Vec<TicketTier>,
    config: SeatMapConfig,
    sold: BTreeSet<SeatKey>,
    /// В порядке выбора
    selected: Vec<SeatKey>,
    max_tickets: usize,
    notice: Option<EditorError>,
}

impl PublicSeatSelector {
    pub fn new(
        event_id: impl Into<String>,
        seats: &[SeatDto],
        tiers: Vec<TicketTier>,
        sold_seats: &[String],
        settings: &SelectorSettings,
    ) -> Self {
        let sold = sold_seats
            .iter()
            .filter_map(|raw| match SeatKey::parse(raw) {
                Ok(key) => Some(key),
                Err(e) => {
                    warn!("Skipping sold seat: {}", e);
                    None
                }
            })
            .collect();

        Self {
            event_id: event_id.into(),
            seats: seats.iter().map(|seat| (seat.key(), seat.tier_id.clone())).collect(),
            tiers,
            config: SeatMapConfig::default(),
            sold,
            selected: Vec::new(),
            max_tickets: settings.max_tickets_per_order,
            notice: None,
        }
    }

    pub fn from_event(mut event: PublicEvent, settings: &SelectorSettings) -> Self {
        fill_safe_ids(&mut event.tiers, &event.seats);
        event.seat_map_config.upgrade_legacy();

        let mut selector = Self::new(event.id, &event.seats, event.tiers, &event.sold_seats, settings);
        selector.config = event.seat_map_config;
        info!(
            "Seat selector ready: {} seats, {} sold, limit {}",
            selector.seats.len(),
            selector.sold.len(),
            selector.max_tickets
        );
        selector
    }

    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    pub fn tiers(&self) -> &[TicketTier] {
        &self.tiers
    }

    pub fn selected(&self) -> &[SeatKey] {
        &self.selected
    }

    pub fn max_tickets(&self) -> usize {
        self.max_tickets
    }

    fn tier_of(&self, key: SeatKey) -> Option<&TicketTier> {
        find_tier(&self.tiers, self.seats.get(&key).map(String::as_str))
    }

    /// Повторный клик по выбранному месту снимает выбор.
    /// Отказ оставляет выбор как был и сохраняет уведомление для тоста.
    pub fn toggle_seat(&mut self, key: SeatKey) -> Result<Toggle, EditorError> {
        if let Some(pos) = self.selected.iter().position(|selected| *selected == key) {
            self.selected.remove(pos);
            return Ok(Toggle::Removed);
        }

        let rejection = if self.sold.contains(&key) {
            Some(EditorError::SeatSold(key))
        } else if self.tier_of(key).is_none() {
            Some(EditorError::SeatUnavailable(key))
        } else if self.selected.len() >= self.max_tickets {
            Some(EditorError::SelectionLimit { max: self.max_tickets })
        } else {
            None
        };

        if let Some(err) = rejection {
            debug!("Seat {} rejected: {}", key, err);
            self.notice = Some(err.clone());
            return Err(err);
        }

        self.selected.push(key);
        Ok(Toggle::Added)
    }

    /// Уведомление показывается один раз
    pub fn take_notice(&mut self) -> Option<EditorError> {
        self.notice.take()
    }

    pub fn seat_state(&self, key: SeatKey) -> Option<SeatState> {
        if !self.seats.contains_key(&key) {
            return None;
        }
        let state = if self.sold.contains(&key) {
            SeatState::Sold
        } else if self.selected.contains(&key) {
            SeatState::Selected
        } else if self.tier_of(key).is_none() {
            SeatState::Unavailable
        } else {
            SeatState::Available
        };
        Some(state)
    }

    pub fn seat_color(&self, key: SeatKey) -> Option<&str> {
        if !self.seats.contains_key(&key) {
            return None;
        }
        Some(
            self.tier_of(key)
                .map(|tier| tier.color.as_str())
                .unwrap_or(NEUTRAL_SEAT_COLOR),
        )
    }

    pub fn total_price(&self) -> f64 {
        self.selected
            .iter()
            .filter_map(|key| self.tier_of(*key))
            .map(|tier| tier.price)
            .sum()
    }

    pub fn row_labels(&self) -> BTreeMap<i32, String> {
        labels::row_labels(self.seats.keys().copied(), self.config.row_label_type)
    }

    pub fn seat_numbers(&self) -> BTreeMap<SeatKey, u32> {
        labels::seat_numbers(self.seats.keys().copied())
    }

    pub fn order_request(&self, buyer: &BuyerInfo) -> Result<OrderRequest, EditorError> {
        buyer.validate()?;
        if self.selected.is_empty() {
            return Err(EditorError::Validation("no seats selected".to_string()));
        }

        Ok(OrderRequest {
            event_id: self.event_id.clone(),
            customer_name: format!("{} {}", buyer.first_name.trim(), buyer.last_name.trim()),
            customer_email: buyer.email.trim().to_string(),
            seat_ids: self.selected.iter().map(|key| key.to_wire()).collect(),
            total_amount: self.total_price(),
            customer_phone: buyer.phone.clone().filter(|phone| !phone.trim().is_empty()),
        })
    }
}

/// Публичная ссылка отдает категории без `tierId`, а места ссылаются на него.
/// Недостающий `_safeId` берем из различных `tierId` мест по порядку появления.
fn fill_safe_ids(tiers: &mut [TicketTier], seats: &[SeatDto]) {
    let mut seat_tier_ids: Vec<&str> = Vec::new();
    for seat in seats {
        if !seat.tier_id.is_empty() && !seat_tier_ids.contains(&seat.tier_id.as_str()) {
            seat_tier_ids.push(&seat.tier_id);
        }
    }

    for (index, tier) in tiers.iter_mut().enumerate() {
        if tier.safe_id.is_some() {
            continue;
        }
        tier.safe_id = seat_tier_ids
            .get(index)
            .map(|id| id.to_string())
            .or_else(|| tier.tier_id.clone())
            .or_else(|| tier.id.clone());
    }
}
