//! Редактор схемы зала: разреженная сетка мест, инструменты, сцены, жесты указателя.
//!
//! Методы `SeatMapEditor` разнесены по файлам модуля:
//! - `tools.rs` - инструменты рисования и их применение к ячейке;
//! - `gesture.rs` - конечный автомат жестов (рисование, панорама, сцены);
//! - `stage.rs` - перетаскивание, ресайз и список сцен;
//! - `generate.rs` - автогенерация сетки по вместимости;
//! - `labels.rs` - подписи рядов и номера мест;
//! - `keyboard.rs` - горячие клавиши.

pub mod generate;
pub mod gesture;
pub mod keyboard;
pub mod labels;
pub mod stage;
pub mod tools;

pub use generate::GridPlan;
pub use gesture::{Gesture, PointerButton, PointerTarget};
pub use keyboard::{FocusTarget, KeyCode, KeyEvent, ShortcutScope};
pub use labels::SeatStats;
pub use stage::ResizeHandle;
pub use tools::Tool;

use tracing::debug;

use crate::config::SeatMapSettings;
use crate::geometry::{Rect, Viewport, ZoomLimits};
use crate::models::{SeatGrid, SeatMapConfig, TicketTier};

/// Значения полей "ряды x колонки" в тулбаре
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridInputs {
    pub rows: u32,
    pub cols: u32,
}

pub struct SeatMapEditor {
    grid: SeatGrid,
    config: SeatMapConfig,
    tiers: Vec<TicketTier>,
    viewport: Viewport,
    container: Option<Rect>,
    tool: Tool,
    gesture: Gesture,
    inputs: GridInputs,
}

impl Default for SeatMapEditor {
    fn default() -> Self {
        Self::new(&SeatMapSettings::default())
    }
}

impl SeatMapEditor {
    pub fn new(settings: &SeatMapSettings) -> Self {
        Self {
            grid: SeatGrid::new(),
            config: SeatMapConfig::default(),
            tiers: Vec::new(),
            viewport: Viewport::new(ZoomLimits::new(settings.min_zoom, settings.max_zoom)),
            container: None,
            tool: Tool::Add,
            gesture: Gesture::Idle,
            inputs: GridInputs {
                rows: settings.default_rows,
                cols: settings.default_cols,
            },
        }
    }

    /// Восстанавливает редактор из черновика мастера
    pub fn with_state(settings: &SeatMapSettings, grid: SeatGrid, mut config: SeatMapConfig, tiers: Vec<TicketTier>) -> Self {
        config.upgrade_legacy();
        let mut editor = Self::new(settings);
        editor.grid = grid;
        editor.config = config;
        editor.tiers = tiers;
        editor
    }

    pub fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    pub fn set_row_label_type(&mut self, kind: crate::models::RowLabelType) {
        self.config.row_label_type = kind;
    }

    pub fn tiers(&self) -> &[TicketTier] {
        &self.tiers
    }

    /// Категории могут прийти позже редактора. Места не трогаем,
    /// а инструмент удаленной категории откатываем на "добавить".
    pub fn set_tiers(&mut self, tiers: Vec<TicketTier>) {
        self.tiers = tiers;
        if let Tool::Tier(id) = &self.tool {
            if !self.tiers.iter().any(|tier| tier.matches(id)) {
                debug!("Active tier {} disappeared, falling back to add tool", id);
                self.tool = Tool::Add;
            }
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Хост сообщает размеры контейнера после монтирования (`None` - размонтирован)
    pub fn set_container(&mut self, container: Option<Rect>) {
        if container.is_none() && !self.gesture.is_idle() {
            debug!("Container unmounted, dropping active gesture");
            self.gesture = Gesture::Idle;
        }
        self.container = container;
    }

    pub fn container(&self) -> Option<Rect> {
        self.container
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn inputs(&self) -> GridInputs {
        self.inputs
    }

    pub fn set_inputs(&mut self, rows: u32, cols: u32) {
        self.inputs = GridInputs { rows, cols };
    }

    /// Кнопка "очистить"
    pub fn clear(&mut self) {
        self.grid.clear();
        self.gesture = Gesture::Idle;
    }

    /// Кнопка "Center"
    pub fn center_view(&mut self) {
        self.viewport.reset();
    }

    pub fn zoom_by_wheel(&mut self, delta_y: f64) {
        self.viewport.zoom_by_wheel(delta_y);
    }

    pub fn zoom_in(&mut self) {
        self.viewport.zoom_in();
    }

    pub fn zoom_out(&mut self) {
        self.viewport.zoom_out();
    }
}
