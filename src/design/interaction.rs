use tracing::debug;

use super::TicketDesignEditor;
use crate::error::EditorError;
use crate::geometry::Point;
use crate::models::design::HEADER_HEIGHT;
use crate::models::ElementType;

/// Левая мягкая граница: элемент можно увести за край, но не потерять
pub const MIN_ELEMENT_X: f64 = -200.0;
pub const MIN_ELEMENT_SIZE: f64 = 10.0;
/// Чувствительность ручки ресайза
pub const RESIZE_FACTOR: f64 = 0.8;

/// Жест над элементом билета. Одновременно активен только один.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Interaction {
    #[default]
    None,
    Moving {
        id: String,
        offset: Point,
    },
    Resizing {
        id: String,
        initial_size: f64,
        start_x: f64,
    },
}

impl Interaction {
    pub fn element_id(&self) -> Option<&str> {
        match self {
            Interaction::None => None,
            Interaction::Moving { id, .. } | Interaction::Resizing { id, .. } => Some(id),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, Interaction::None)
    }
}

impl TicketDesignEditor {
    pub fn interaction(&self) -> &Interaction {
        &self.interaction
    }

    /// Нажатие на элемент: выделяем и запоминаем смещение курсора от угла.
    /// Координаты указателя - в единицах холста.
    pub fn begin_move(&mut self, id: &str, pointer: Point) -> Result<(), EditorError> {
        let element = self
            .design
            .element(id)
            .ok_or_else(|| EditorError::ElementNotFound(id.to_string()))?;

        let offset = Point::new(pointer.x - element.x, pointer.y - element.y);
        self.selected = Some(id.to_string());
        self.interaction = Interaction::Moving {
            id: id.to_string(),
            offset,
        };
        Ok(())
    }

    /// Нажатие на ручку в правом нижнем углу
    pub fn begin_resize(&mut self, id: &str, pointer: Point) -> Result<(), EditorError> {
        let element = self
            .design
            .element(id)
            .ok_or_else(|| EditorError::ElementNotFound(id.to_string()))?;

        let initial_size = element.handle_size();
        self.selected = Some(id.to_string());
        self.interaction = Interaction::Resizing {
            id: id.to_string(),
            initial_size,
            start_x: pointer.x,
        };
        debug!("Resize of {} started at size {}", id, initial_size);
        Ok(())
    }

    /// Возвращает true, если что-то изменилось
    pub fn pointer_move(&mut self, pointer: Point) -> bool {
        match &self.interaction {
            Interaction::None => false,
            Interaction::Moving { id, offset } => {
                let Some(element) = self.design.element_mut(id) else {
                    return false;
                };
                element.x = (pointer.x - offset.x).max(MIN_ELEMENT_X);
                element.y = (pointer.y - offset.y).max(HEADER_HEIGHT);
                true
            }
            Interaction::Resizing {
                id,
                initial_size,
                start_x,
            } => {
                let size = resized(*initial_size, pointer.x - start_x);
                let Some(element) = self.design.element_mut(id) else {
                    return false;
                };
                match element.kind {
                    ElementType::Text => element.font_size = size,
                    ElementType::Qr | ElementType::Image => {
                        element.font_size = size;
                        element.width = Some(size);
                        element.height = Some(size);
                    }
                }
                true
            }
        }
    }

    /// Отпускание или уход указателя с холста
    pub fn pointer_up(&mut self) {
        self.interaction = Interaction::None;
    }
}

/// Новый размер по горизонтальному сдвигу ручки, целые пиксели вниз
pub fn resized(initial_size: f64, dx: f64) -> f64 {
    (initial_size + dx * RESIZE_FACTOR).max(MIN_ELEMENT_SIZE).floor()
}
