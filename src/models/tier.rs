use serde::{Deserialize, Serialize};
use validator::Validate;

/// Категория билета. Владелец - мастер создания события, редакторы только ссылаются на нее.
///
/// Бэкенд исторически отдает идентификатор в трех разных полях (`tierId`, `_safeId`, `id`),
/// поэтому сравнение идет по всем трем.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TicketTier {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier_id: Option<String>,
    #[serde(rename = "_safeId", default, skip_serializing_if = "Option::is_none")]
    pub safe_id: Option<String>,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = 0.0))]
    pub price: f64,
    #[validate(range(min = 1))]
    pub quantity: u32,
    #[serde(default = "default_tier_color")]
    pub color: String,
}

/// Цвет места без категории или с битой ссылкой на категорию
pub const NEUTRAL_SEAT_COLOR: &str = "#94a3b8";

fn default_tier_color() -> String {
    "#3b82f6".to_string()
}

impl TicketTier {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64, quantity: u32, color: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            tier_id: None,
            safe_id: None,
            name: name.into(),
            price,
            quantity,
            color: color.into(),
        }
    }

    /// Идентификатор, которым редактор помечает места
    pub fn reference(&self) -> Option<&str> {
        self.tier_id
            .as_deref()
            .or(self.safe_id.as_deref())
            .or(self.id.as_deref())
    }

    // TODO: убрать, когда бэкенд начнет отдавать только tierId
    pub fn matches(&self, tier_ref: &str) -> bool {
        [&self.tier_id, &self.safe_id, &self.id]
            .into_iter()
            .any(|candidate| candidate.as_deref() == Some(tier_ref))
    }
}

/// Ищет категорию места. Не найдено - место считается неназначенным.
pub fn find_tier<'a>(tiers: &'a [TicketTier], tier_ref: Option<&str>) -> Option<&'a TicketTier> {
    let tier_ref = tier_ref?;
    tiers.iter().find(|tier| tier.matches(tier_ref))
}

/// Вместимость события = сумма количеств по категориям
pub fn derived_capacity(tiers: &[TicketTier]) -> u32 {
    tiers.iter().map(|tier| tier.quantity).sum()
}

/// Вопрос покупателю. Его `label` становится смарт-тегом `{{label}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyerQuestion {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
}
