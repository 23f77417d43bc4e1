use tracing::{info, warn};

use super::gesture::Gesture;
use super::SeatMapEditor;
use crate::geometry::CELL_SIZE;
use crate::models::{SeatGrid, SeatKey, Stage};

/// План сетки: размеры, левый верхний угол и сколько мест реально ставим
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlan {
    pub rows: u32,
    pub cols: u32,
    pub start_row: i32,
    pub start_col: i32,
    pub seats: u32,
}

impl GridPlan {
    fn centered(rows: u32, cols: u32, seats: u32) -> Self {
        Self {
            rows,
            cols,
            start_row: -((rows / 2) as i32),
            start_col: -((cols / 2) as i32),
            seats,
        }
    }

    /// Почти квадратная сетка под вместимость:
    /// cols = ceil(sqrt(capacity * 1.5)), rows = ceil(capacity / cols)
    pub fn for_capacity(capacity: u32) -> Option<Self> {
        if capacity == 0 {
            return None;
        }
        let cols = ((capacity as f64 * 1.5).sqrt().ceil() as u32).max(1);
        let rows = capacity.div_ceil(cols);
        Some(Self::centered(rows, cols, capacity))
    }

    /// Ручная генерация из полей тулбара. Если сетка не вмещает вместимость,
    /// добавляем колонки, а не молча теряем места.
    pub fn for_inputs(rows: u32, cols: u32, capacity: u32) -> Self {
        let rows = rows.max(1);
        let mut cols = cols.max(1);

        if capacity > 0 && rows.saturating_mul(cols) < capacity {
            cols = capacity.div_ceil(rows);
        }

        let total = rows.saturating_mul(cols);
        let seats = if capacity > 0 { capacity.min(total) } else { total };
        Self::centered(rows, cols, seats)
    }

    /// Ячейки построчно, хвост последнего ряда обрезается
    pub fn cells(&self) -> impl Iterator<Item = SeatKey> + '_ {
        (0..self.rows)
            .flat_map(move |r| (0..self.cols).map(move |c| (r, c)))
            .take(self.seats as usize)
            .map(move |(r, c)| SeatKey::new(self.start_row + r as i32, self.start_col + c as i32))
    }
}

impl SeatMapEditor {
    /// Автогенерация при пустой схеме и известной вместимости
    pub fn ensure_generated(&mut self, capacity: u32) -> bool {
        if !self.grid.is_empty() {
            return false;
        }
        match GridPlan::for_capacity(capacity) {
            Some(plan) => {
                self.apply_plan(plan);
                true
            }
            None => false,
        }
    }

    /// Кнопка "Generate". Возвращает примененный план, поля тулбара
    /// приводятся к нему.
    pub fn regenerate(&mut self, capacity: u32) -> GridPlan {
        let requested = self.inputs;
        let plan = GridPlan::for_inputs(requested.rows, requested.cols, capacity);

        if plan.rows != requested.rows || plan.cols != requested.cols {
            warn!(
                "Grid {}x{} corrected to {}x{} to fit capacity {}",
                requested.rows, requested.cols, plan.rows, plan.cols, capacity
            );
        }

        self.apply_plan(plan);
        plan
    }

    fn apply_plan(&mut self, plan: GridPlan) {
        let mut grid = SeatGrid::new();
        for key in plan.cells() {
            grid.insert_unassigned(key);
        }

        self.grid = grid;
        self.inputs.rows = plan.rows;
        self.inputs.cols = plan.cols;
        self.gesture = Gesture::Idle;
        self.viewport.reset();
        self.place_primary_stage(plan.start_row);

        info!("Generated {} seats on a {}x{} grid", plan.seats, plan.rows, plan.cols);
    }

    /// Первая сцена встает над сеткой, остальные не трогаем
    fn place_primary_stage(&mut self, start_row: i32) {
        if self.config.stages.is_empty() {
            self.config.stages.push(Stage::new("STAGE"));
        }
        if let Some(stage) = self.config.stages.first_mut() {
            stage.x = -100.0;
            stage.y = start_row as f64 * CELL_SIZE - 80.0;
            stage.w = 200.0;
            stage.h = 50.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_seven_layout() {
        let plan = GridPlan::for_capacity(7).unwrap();
        assert_eq!((plan.rows, plan.cols), (2, 4));
        assert_eq!((plan.start_row, plan.start_col), (-1, -2));

        let cells: Vec<_> = plan.cells().collect();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0], SeatKey::new(-1, -2));
        assert_eq!(cells[3], SeatKey::new(-1, 1));
        assert_eq!(cells[6], SeatKey::new(0, 0));
        assert!(!cells.contains(&SeatKey::new(0, 1)));
    }

    #[test]
    fn zero_capacity_generates_nothing() {
        assert!(GridPlan::for_capacity(0).is_none());
        let mut editor = SeatMapEditor::default();
        assert!(!editor.ensure_generated(0));
        assert!(editor.grid().is_empty());
    }

    #[test]
    fn manual_grid_grows_columns() {
        let plan = GridPlan::for_inputs(3, 2, 20);
        assert_eq!((plan.rows, plan.cols), (3, 7));
        assert_eq!(plan.cells().count(), 20);
    }

    #[test]
    fn manual_grid_without_capacity_fills_everything() {
        let plan = GridPlan::for_inputs(5, 10, 0);
        assert_eq!(plan.cells().count(), 50);
        assert_eq!((plan.start_row, plan.start_col), (-2, -5));
    }

    #[test]
    fn regenerate_corrects_inputs() {
        let mut editor = SeatMapEditor::default();
        editor.set_inputs(2, 2);
        let plan = editor.regenerate(9);

        assert_eq!(plan.cols, 5);
        assert_eq!(editor.inputs().cols, 5);
        assert_eq!(editor.grid().len(), 9);
    }

    #[test]
    fn ensure_generated_skips_existing_map() {
        let mut editor = SeatMapEditor::default();
        editor.apply_tool(SeatKey::new(10, 10));
        assert!(!editor.ensure_generated(50));
        assert_eq!(editor.grid().len(), 1);
    }

    #[test]
    fn generation_places_stage_above_grid() {
        let mut editor = SeatMapEditor::default();
        editor.ensure_generated(7);
        let stage = &editor.config().stages[0];
        assert_eq!(stage.y, -CELL_SIZE - 80.0);
        assert_eq!(editor.viewport().zoom, 1.0);
    }
}
