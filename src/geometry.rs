//! geometry.rs
//!
//! Перевод координат указателя (экран) в логическое пространство сетки/холста и обратно.
//!
//! Прямое преобразование при отрисовке: сначала перенос в центр контейнера плюс `pan`,
//! затем масштаб `zoom`. Обратное делается строго в обратном порядке: вычитаем перенос,
//! потом делим на `zoom`. Иначе при zoom != 1.0 места "уплывают" от курсора.

use serde::{Deserialize, Serialize};

use crate::models::SeatKey;

/// Размер ячейки сетки мест в пикселях при zoom = 1
pub const CELL_SIZE: f64 = 32.0;
/// Шаг зума на один тик колеса
pub const WHEEL_ZOOM_STEP: f64 = 0.05;
/// Шаг зума кнопками +/-
pub const BUTTON_ZOOM_STEP: f64 = 0.2;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn delta_from(self, other: Point) -> (f64, f64) {
        (self.x - other.x, self.y - other.y)
    }
}

/// Прямоугольник контейнера на экране (аналог getBoundingClientRect)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    pub const SEAT_EDITOR: ZoomLimits = ZoomLimits { min: 0.2, max: 3.0 };
    /// У холста билета жестких рамок нет, только защита от нуля и абсурда
    pub const DESIGN_CANVAS: ZoomLimits = ZoomLimits { min: 0.05, max: 20.0 };

    /// Пределы из настроек: перевернутую пару меняем местами,
    /// нечисловые или неположительные значения заменяем пределами редактора схемы
    pub fn new(min: f64, max: f64) -> Self {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && max > 0.0) {
            return Self::SEAT_EDITOR;
        }
        Self {
            min: min.min(max),
            max: min.max(max),
        }
    }

    pub fn clamp(&self, zoom: f64) -> f64 {
        // поля публичны, поэтому f64::clamp с его паникой не используем
        let limits = Self::new(self.min, self.max);
        zoom.max(limits.min).min(limits.max)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::SEAT_EDITOR
    }
}

/// Состояние камеры: смещение в пикселях и масштаб
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pan: Point,
    pub zoom: f64,
    pub limits: ZoomLimits,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(ZoomLimits::default())
    }
}

impl Viewport {
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            pan: Point::ZERO,
            zoom: 1.0,
            limits,
        }
    }

    pub fn reset(&mut self) {
        self.pan = Point::ZERO;
        self.zoom = 1.0;
    }

    pub fn set_zoom(&mut self, zoom: f64) {
        if zoom.is_finite() {
            self.zoom = self.limits.clamp(zoom);
        }
    }

    /// Колесо вниз (delta > 0) - отдаляем
    pub fn zoom_by_wheel(&mut self, delta_y: f64) {
        if delta_y > 0.0 {
            self.set_zoom(self.zoom - WHEEL_ZOOM_STEP);
        } else if delta_y < 0.0 {
            self.set_zoom(self.zoom + WHEEL_ZOOM_STEP);
        }
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + BUTTON_ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - BUTTON_ZOOM_STEP);
    }

    /// Процент для индикатора в тулбаре
    pub fn zoom_percent(&self) -> i64 {
        (self.zoom * 100.0).round() as i64
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.pan.x += dx;
        self.pan.y += dy;
    }

    /// Экранная дельта -> дельта в логических пикселях
    pub fn screen_delta_to_world(&self, dx: f64, dy: f64) -> (f64, f64) {
        (dx / self.zoom, dy / self.zoom)
    }

    /// Контейнер еще не смонтирован - координат нет
    pub fn screen_to_world(&self, client: Point, container: Option<Rect>) -> Option<Point> {
        let rect = container?;
        let origin = rect.center();
        Some(Point::new(
            (client.x - origin.x - self.pan.x) / self.zoom,
            (client.y - origin.y - self.pan.y) / self.zoom,
        ))
    }

    pub fn world_to_screen(&self, world: Point, container: Option<Rect>) -> Option<Point> {
        let rect = container?;
        let origin = rect.center();
        Some(Point::new(
            world.x * self.zoom + self.pan.x + origin.x,
            world.y * self.zoom + self.pan.y + origin.y,
        ))
    }

    /// Ячейка под указателем. Без контейнера - безопасный ноль.
    pub fn screen_to_grid(&self, client: Point, container: Option<Rect>) -> SeatKey {
        match self.screen_to_world(client, container) {
            Some(world) => SeatKey::new(round_half_up(world.y / CELL_SIZE), round_half_up(world.x / CELL_SIZE)),
            None => SeatKey::ORIGIN,
        }
    }

    /// Центр ячейки на экране
    pub fn grid_to_screen(&self, key: SeatKey, container: Option<Rect>) -> Option<Point> {
        self.world_to_screen(cell_center(key), container)
    }
}

/// Центр ячейки в логических пикселях
pub fn cell_center(key: SeatKey) -> Point {
    Point::new(key.col as f64 * CELL_SIZE, key.row as f64 * CELL_SIZE)
}

/// Округление как в браузере: половина всегда вверх (-0.5 -> 0, 0.5 -> 1)
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
