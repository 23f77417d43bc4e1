use serde::{Deserialize, Serialize};

/// Логический размер холста билета
pub const CANVAS_WIDTH: f64 = 360.0;
pub const CANVAS_HEIGHT: f64 = 640.0;
/// Высота фиксированной шапки бренда. Элементы не могут заехать под нее.
pub const HEADER_HEIGHT: f64 = 70.0;
/// Боковой отступ для выравнивания по левому краю
pub const SIDE_PADDING: f64 = 24.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    Text,
    Qr,
    Image,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketElement {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ElementType,
    pub x: f64,
    pub y: f64,
    pub content: String,
    pub color: String,
    pub font_size: f64,
    #[serde(default)]
    pub font_weight: FontWeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text_align: Option<TextAlign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
}

impl TicketElement {
    pub fn is_qr(&self) -> bool {
        self.kind == ElementType::Qr
    }

    /// Размер, которым управляет ручка ресайза: кегль у текста, ширина у QR и картинок
    pub fn handle_size(&self) -> f64 {
        match self.kind {
            ElementType::Text => self.font_size,
            ElementType::Qr | ElementType::Image => self.width.unwrap_or(self.font_size),
        }
    }
}

/// Дизайн билета целиком. Отправляется на бэкенд одним куском.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketDesign {
    pub bg_color: String,
    #[serde(default)]
    pub bg_image: Option<String>,
    #[serde(default)]
    pub bg_overlay: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_scale: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_offset_x: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bg_offset_y: Option<f64>,
    #[serde(default)]
    pub elements: Vec<TicketElement>,
}

impl TicketDesign {
    pub fn element(&self, id: &str) -> Option<&TicketElement> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut TicketElement> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    pub fn qr_count(&self) -> usize {
        self.elements.iter().filter(|el| el.is_qr()).count()
    }

    pub fn bg_scale(&self) -> f64 {
        self.bg_scale.unwrap_or(100.0)
    }

    pub fn bg_offset(&self) -> (f64, f64) {
        (self.bg_offset_x.unwrap_or(0.0), self.bg_offset_y.unwrap_or(0.0))
    }
}

impl Default for TicketDesign {
    fn default() -> Self {
        crate::design::Template::MinimalDark.build()
    }
}
