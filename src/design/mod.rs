//! Редактор дизайна билета: холст 360x640 со свободно расположенными
//! элементами (текст, QR, картинка) и фоном.

pub mod interaction;
pub mod smart_tags;
pub mod templates;

pub use interaction::Interaction;
pub use smart_tags::{EventDetails, SmartTagContext};
pub use templates::Template;

use tracing::{info, warn};

use crate::error::EditorError;
use crate::geometry::{Point, ZoomLimits};
use crate::models::design::{CANVAS_WIDTH, SIDE_PADDING};
use crate::models::{ElementType, FontWeight, TextAlign, TicketDesign, TicketElement};

/// Частичное обновление стиля элемента (поля `None` не трогаем)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleUpdate {
    pub content: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<f64>,
    pub font_weight: Option<FontWeight>,
    pub font_family: Option<String>,
    pub text_align: Option<TextAlign>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

impl StyleUpdate {
    pub fn align(align: TextAlign) -> Self {
        Self {
            text_align: Some(align),
            ..Default::default()
        }
    }

    /// Слайдер размера у QR и картинок двигает все три поля разом
    pub fn square(size: f64) -> Self {
        Self {
            font_size: Some(size),
            width: Some(size),
            height: Some(size),
            ..Default::default()
        }
    }
}

pub struct TicketDesignEditor {
    design: TicketDesign,
    selected: Option<String>,
    interaction: Interaction,
    /// Во сколько раз превью холста отрисовано крупнее/мельче логических 360x640
    canvas_scale: f64,
}

impl Default for TicketDesignEditor {
    fn default() -> Self {
        Self::new(TicketDesign::default())
    }
}

impl TicketDesignEditor {
    pub fn new(design: TicketDesign) -> Self {
        Self {
            design,
            selected: None,
            interaction: Interaction::None,
            canvas_scale: 1.0,
        }
    }

    pub fn canvas_scale(&self) -> f64 {
        self.canvas_scale
    }

    pub fn set_canvas_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.canvas_scale = ZoomLimits::DESIGN_CANVAS.clamp(scale);
        }
    }

    /// Точка относительно левого верхнего угла превью -> единицы холста
    pub fn canvas_point(&self, local: Point) -> Point {
        Point::new(local.x / self.canvas_scale, local.y / self.canvas_scale)
    }

    pub fn design(&self) -> &TicketDesign {
        &self.design
    }

    pub fn into_design(self) -> TicketDesign {
        self.design
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_element(&self) -> Option<&TicketElement> {
        self.design.element(self.selected.as_deref()?)
    }

    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        if self.design.element(id).is_none() {
            return Err(EditorError::ElementNotFound(id.to_string()));
        }
        self.selected = Some(id.to_string());
        Ok(())
    }

    /// Клик по пустому холсту
    pub fn deselect(&mut self) {
        self.selected = None;
    }

    /// Добавляет элемент с настройками по умолчанию и выделяет его.
    /// Второй QR не допускается.
    pub fn add_element(&mut self, kind: ElementType, content: impl Into<String>) -> Result<String, EditorError> {
        if kind == ElementType::Qr && self.design.qr_count() > 0 {
            return Err(EditorError::DuplicateQr);
        }

        let element = TicketElement {
            id: format!("el-{}", uuid::Uuid::new_v4()),
            kind,
            x: SIDE_PADDING,
            y: 300.0,
            content: content.into(),
            color: "#ffffff".to_string(),
            font_size: if kind == ElementType::Qr { 100.0 } else { 18.0 },
            font_weight: FontWeight::Normal,
            font_family: Some("Arial, sans-serif".to_string()),
            text_align: Some(TextAlign::Left),
            width: Some(if kind == ElementType::Text {
                CANVAS_WIDTH - 2.0 * SIDE_PADDING
            } else {
                100.0
            }),
            height: None,
            src: None,
        };

        let id = element.id.clone();
        self.design.elements.push(element);
        self.selected = Some(id.clone());
        Ok(id)
    }

    /// Логотип после загрузки картинки
    pub fn add_image(&mut self, src: impl Into<String>) -> Result<String, EditorError> {
        let id = self.add_element(ElementType::Image, "Logo")?;
        if let Some(element) = self.design.element_mut(&id) {
            element.src = Some(src.into());
            element.width = Some(100.0);
            element.height = Some(100.0);
        }
        Ok(id)
    }

    /// Обновляет выделенный элемент; без выделения - ничего не делает
    pub fn update_style(&mut self, update: StyleUpdate) -> Result<(), EditorError> {
        match self.selected.clone() {
            Some(id) => self.update_element_style(&id, update),
            None => Ok(()),
        }
    }

    /// Выравнивание имитируется растягиванием блока по ширине:
    /// center -> x 0, ширина холста; left -> x 24, ширина - 48; right -> x 0, ширина - 24.
    pub fn update_element_style(&mut self, id: &str, mut update: StyleUpdate) -> Result<(), EditorError> {
        match update.text_align {
            Some(TextAlign::Center) => {
                update.x = Some(0.0);
                update.width = Some(CANVAS_WIDTH);
            }
            Some(TextAlign::Left) => {
                update.x = Some(SIDE_PADDING);
                update.width = Some(CANVAS_WIDTH - 2.0 * SIDE_PADDING);
            }
            Some(TextAlign::Right) => {
                update.x = Some(0.0);
                update.width = Some(CANVAS_WIDTH - SIDE_PADDING);
            }
            None => {}
        }

        let element = self
            .design
            .element_mut(id)
            .ok_or_else(|| EditorError::ElementNotFound(id.to_string()))?;

        if let Some(content) = update.content {
            element.content = content;
        }
        if let Some(color) = update.color {
            element.color = color;
        }
        if let Some(font_size) = update.font_size {
            element.font_size = font_size;
        }
        if let Some(weight) = update.font_weight {
            element.font_weight = weight;
        }
        if let Some(family) = update.font_family {
            element.font_family = Some(family);
        }
        if let Some(align) = update.text_align {
            element.text_align = Some(align);
        }
        if let Some(x) = update.x {
            element.x = x;
        }
        if let Some(y) = update.y {
            element.y = y;
        }
        if let Some(width) = update.width {
            element.width = Some(width);
        }
        if let Some(height) = update.height {
            element.height = Some(height);
        }
        Ok(())
    }

    /// Единственный QR удалить нельзя, дизайн без него невалиден
    pub fn delete_element(&mut self, id: &str) -> Result<TicketElement, EditorError> {
        let index = self
            .design
            .elements
            .iter()
            .position(|el| el.id == id)
            .ok_or_else(|| EditorError::ElementNotFound(id.to_string()))?;

        if self.design.elements[index].is_qr() && self.design.qr_count() <= 1 {
            warn!("Refusing to delete the only QR element {}", id);
            return Err(EditorError::QrRequired);
        }

        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        if self.interaction.element_id() == Some(id) {
            self.interaction = Interaction::None;
        }
        Ok(self.design.elements.remove(index))
    }

    pub fn delete_selected(&mut self) -> Result<Option<TicketElement>, EditorError> {
        match self.selected.clone() {
            Some(id) => self.delete_element(&id).map(Some),
            None => Ok(None),
        }
    }

    /// Пресет заменяет дизайн целиком и снимает выделение
    pub fn apply_template(&mut self, name: &str) -> Result<(), EditorError> {
        let template: Template = name.parse()?;
        self.design = template.build();
        self.selected = None;
        self.interaction = Interaction::None;
        info!("Applied ticket template {}", template.key());
        Ok(())
    }

    // === Фон ===

    pub fn set_background_color(&mut self, color: impl Into<String>) {
        self.design.bg_color = color.into();
    }

    /// После загрузки новой картинки сбрасываем масштаб и сдвиг, легкое затемнение
    pub fn set_background_image(&mut self, url: impl Into<String>) {
        self.design.bg_image = Some(url.into());
        self.design.bg_overlay = 0.2;
        self.design.bg_scale = Some(100.0);
        self.design.bg_offset_x = Some(0.0);
        self.design.bg_offset_y = Some(0.0);
    }

    pub fn clear_background_image(&mut self) {
        self.design.bg_image = None;
    }

    /// Масштаб в процентах, 50..=300
    pub fn set_background_scale(&mut self, percent: f64) {
        self.design.bg_scale = Some(percent.clamp(50.0, 300.0));
    }

    pub fn set_background_offset(&mut self, x: f64, y: f64) {
        self.design.bg_offset_x = Some(x.clamp(-300.0, 300.0));
        self.design.bg_offset_y = Some(y.clamp(-300.0, 300.0));
    }

    pub fn set_background_overlay(&mut self, overlay: f64) {
        self.design.bg_overlay = overlay.clamp(0.0, 1.0);
    }
}
