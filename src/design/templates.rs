use std::str::FromStr;

use crate::error::EditorError;
use crate::models::design::{CANVAS_WIDTH, SIDE_PADDING};
use crate::models::{ElementType, FontWeight, TextAlign, TicketDesign, TicketElement};

const ARIAL: &str = "Arial, sans-serif";
const GEORGIA: &str = "Georgia, serif";
const COURIER: &str = "\"Courier New\", Courier, monospace";
const IMPACT: &str = "Impact, Charcoal, sans-serif";
/// Короткий стек из пресетов, в списке шрифтов его нет
const TREBUCHET_SHORT: &str = "\"Trebuchet MS\", sans-serif";
const TREBUCHET: &str =
    "\"Trebuchet MS\", \"Lucida Grande\", \"Lucida Sans Unicode\", \"Lucida Sans\", Tahoma, sans-serif";

/// Шрифты, доступные в селекте редактора: (название, значение font-family)
pub const FONTS: [(&str, &str); 7] = [
    ("Inter / Arial", ARIAL),
    ("Helvetica", "Helvetica, sans-serif"),
    ("Georgia (Serif)", GEORGIA),
    ("Palatino", "\"Palatino Linotype\", \"Book Antiqua\", Palatino, serif"),
    ("Courier (Mono)", COURIER),
    ("Impact (Bold)", IMPACT),
    ("Trebuchet MS", TREBUCHET),
];

/// Готовые пресеты билета
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    MinimalDark,
    GoldVip,
    MilliAz,
    CorporateBlue,
}

impl Template {
    pub const ALL: [Template; 4] = [
        Template::MinimalDark,
        Template::GoldVip,
        Template::MilliAz,
        Template::CorporateBlue,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Template::MinimalDark => "minimalDark",
            Template::GoldVip => "goldVip",
            Template::MilliAz => "milliAz",
            Template::CorporateBlue => "corporateBlue",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Template::MinimalDark => "Minimal Dark",
            Template::GoldVip => "Gold VIP",
            Template::MilliAz => "Milli (AZ)",
            Template::CorporateBlue => "Corporate White",
        }
    }

    pub fn build(self) -> TicketDesign {
        match self {
            Template::MinimalDark => design(
                "#09090b",
                vec![
                    qr(120.0, 460.0, "#ffffff", 120.0),
                    text_left("t-1", 100.0, "{{Event_Name}}", "#ffffff", 32.0, FontWeight::Bold, ARIAL),
                    text_left("t-2", 150.0, "{{Event_Date}} • {{Location}}", "#a1a1aa", 14.0, FontWeight::Normal, ARIAL),
                    text_left("t-3", 220.0, "{{Guest_Name}}", "#ffffff", 24.0, FontWeight::Bold, COURIER),
                    text_left("t-4", 260.0, "{{Ticket_Type}} • {{Seat_Info}}", "#3b82f6", 16.0, FontWeight::Bold, ARIAL),
                ],
            ),
            Template::GoldVip => design(
                "#0f172a",
                vec![
                    qr(120.0, 440.0, "#ffffff", 120.0),
                    text_center("t-1", 110.0, "{{Event_Name}}", "#d4af37", 30.0, FontWeight::Bold, GEORGIA),
                    text_center("t-2", 200.0, "V I P   T I C K E T", "#d4af37", 14.0, FontWeight::Bold, ARIAL),
                    text_center("t-3", 240.0, "{{Guest_Name}}", "#ffffff", 26.0, FontWeight::Normal, GEORGIA),
                    text_center("t-4", 280.0, "{{Seat_Info}}", "#94a3b8", 16.0, FontWeight::Normal, ARIAL),
                ],
            ),
            Template::MilliAz => design(
                "#00b5e2",
                vec![
                    qr(120.0, 450.0, "#ffffff", 120.0),
                    text_center("t-1", 110.0, "{{Event_Name}}", "#ffffff", 36.0, FontWeight::Bold, IMPACT),
                    text_center("t-2", 165.0, "{{Event_Date}}", "#509e2f", 20.0, FontWeight::Bold, ARIAL),
                    text_center("t-3", 240.0, "{{Guest_Name}}", "#ffffff", 28.0, FontWeight::Bold, TREBUCHET_SHORT),
                    text_center("t-4", 280.0, "{{Ticket_Type}} | {{Seat_Info}}", "#ef3340", 18.0, FontWeight::Bold, ARIAL),
                ],
            ),
            Template::CorporateBlue => design(
                "#ffffff",
                vec![
                    qr(24.0, 450.0, "#000000", 110.0),
                    text_left("t-1", 100.0, "{{Event_Name}}", "#0f172a", 28.0, FontWeight::Bold, TREBUCHET_SHORT),
                    text_left("t-2", 145.0, "{{Location}}", "#64748b", 14.0, FontWeight::Normal, ARIAL),
                    text_left("t-3", 240.0, "{{Guest_Name}}", "#0f172a", 30.0, FontWeight::Bold, ARIAL),
                    text_left("t-4", 285.0, "{{Ticket_Type}}", "#2563eb", 16.0, FontWeight::Bold, ARIAL),
                ],
            ),
        }
    }
}

impl FromStr for Template {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Template::ALL
            .into_iter()
            .find(|template| template.key() == s)
            .ok_or_else(|| EditorError::UnknownTemplate(s.to_string()))
    }
}

fn design(bg_color: &str, elements: Vec<TicketElement>) -> TicketDesign {
    TicketDesign {
        bg_color: bg_color.to_string(),
        bg_image: None,
        bg_overlay: 0.0,
        bg_scale: Some(100.0),
        bg_offset_x: Some(0.0),
        bg_offset_y: Some(0.0),
        elements,
    }
}

fn qr(x: f64, y: f64, color: &str, size: f64) -> TicketElement {
    TicketElement {
        id: "qr-1".to_string(),
        kind: ElementType::Qr,
        x,
        y,
        content: "QR_CODE".to_string(),
        color: color.to_string(),
        font_size: size,
        font_weight: FontWeight::Normal,
        font_family: None,
        text_align: None,
        width: None,
        height: None,
        src: None,
    }
}

#[allow(clippy::too_many_arguments)]
fn text(
    id: &str,
    x: f64,
    y: f64,
    width: f64,
    align: TextAlign,
    content: &str,
    color: &str,
    font_size: f64,
    weight: FontWeight,
    family: &str,
) -> TicketElement {
    TicketElement {
        id: id.to_string(),
        kind: ElementType::Text,
        x,
        y,
        content: content.to_string(),
        color: color.to_string(),
        font_size,
        font_weight: weight,
        font_family: Some(family.to_string()),
        text_align: Some(align),
        width: Some(width),
        height: None,
        src: None,
    }
}

fn text_left(id: &str, y: f64, content: &str, color: &str, size: f64, weight: FontWeight, family: &str) -> TicketElement {
    text(id, SIDE_PADDING, y, CANVAS_WIDTH - 2.0 * SIDE_PADDING, TextAlign::Left, content, color, size, weight, family)
}

fn text_center(id: &str, y: f64, content: &str, color: &str, size: f64, weight: FontWeight, family: &str) -> TicketElement {
    text(id, 0.0, y, CANVAS_WIDTH, TextAlign::Center, content, color, size, weight, family)
}
