use tracing::debug;

use super::stage::ResizeHandle;
use super::tools::Tool;
use super::SeatMapEditor;
use crate::geometry::Point;
use crate::models::SeatKey;

/// Текущий жест. Активен ровно один, новый жест вытесняет предыдущий.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    /// Рисование перетаскиванием: инструмент применяется к каждой новой ячейке
    Drawing { last_cell: SeatKey },
    Panning { last: Point },
    DraggingStage { stage_id: String, last: Point },
    ResizingStage { stage_id: String, handle: ResizeHandle, last: Point },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// Во что попал указатель при нажатии
#[derive(Debug, Clone, PartialEq)]
pub enum PointerTarget {
    Canvas,
    StageBody(String),
    StageHandle(String, ResizeHandle),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Middle,
    Secondary,
}

impl SeatMapEditor {
    pub fn pointer_down(&mut self, target: PointerTarget, button: PointerButton, client: Point) {
        match target {
            PointerTarget::StageHandle(stage_id, handle) if self.config.stage(&stage_id).is_some() => {
                self.gesture = Gesture::ResizingStage { stage_id, handle, last: client };
            }
            PointerTarget::StageBody(stage_id) if self.config.stage(&stage_id).is_some() => {
                self.gesture = Gesture::DraggingStage { stage_id, last: client };
            }
            _ => self.canvas_pointer_down(button, client),
        }
    }

    fn canvas_pointer_down(&mut self, button: PointerButton, client: Point) {
        if button == PointerButton::Middle || self.tool == Tool::Pan {
            self.gesture = Gesture::Panning { last: client };
            return;
        }
        // без контейнера координат нет - ничего не рисуем
        if self.container.is_none() {
            debug!("Pointer down before container is mounted, ignoring");
            self.gesture = Gesture::Idle;
            return;
        }

        let cell = self.viewport.screen_to_grid(client, self.container);
        self.apply_tool(cell);
        self.gesture = Gesture::Drawing { last_cell: cell };
    }

    pub fn pointer_move(&mut self, client: Point) {
        match &mut self.gesture {
            Gesture::Idle => {}
            Gesture::Drawing { last_cell } => {
                if self.container.is_none() {
                    return;
                }
                let cell = self.viewport.screen_to_grid(client, self.container);
                if cell != *last_cell {
                    *last_cell = cell;
                    self.apply_tool(cell);
                }
            }
            Gesture::Panning { last } => {
                let (dx, dy) = client.delta_from(*last);
                *last = client;
                self.viewport.pan_by(dx, dy);
            }
            Gesture::DraggingStage { stage_id, last } => {
                let (dx, dy) = client.delta_from(*last);
                let (dx, dy) = self.viewport.screen_delta_to_world(dx, dy);
                *last = client;
                if let Some(stage) = self.config.stage_mut(stage_id) {
                    stage.translate(dx, dy);
                }
            }
            Gesture::ResizingStage { stage_id, handle, last } => {
                let (dx, dy) = client.delta_from(*last);
                let (dx, dy) = self.viewport.screen_delta_to_world(dx, dy);
                *last = client;
                let handle = *handle;
                if let Some(stage) = self.config.stage_mut(stage_id) {
                    stage.resize(handle, dx, dy);
                }
            }
        }
    }

    pub fn pointer_up(&mut self) {
        self.gesture = Gesture::Idle;
    }

    /// Указатель ушел с холста - сбрасываем жест, чтобы он не "залип"
    pub fn pointer_leave(&mut self) {
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{Rect, CELL_SIZE};
    use crate::models::TicketTier;

    const CENTER: Point = Point { x: 400.0, y: 300.0 };

    fn mounted() -> SeatMapEditor {
        let mut editor = SeatMapEditor::default();
        editor.set_container(Some(Rect::new(0.0, 0.0, 800.0, 600.0)));
        editor
    }

    fn cell_point(row: i32, col: i32) -> Point {
        Point::new(CENTER.x + col as f64 * CELL_SIZE, CENTER.y + row as f64 * CELL_SIZE)
    }

    #[test]
    fn drag_paints_each_new_cell_once() {
        let mut editor = mounted();
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Primary, cell_point(0, 0));
        editor.pointer_move(Point::new(cell_point(0, 0).x + 5.0, CENTER.y));
        editor.pointer_move(cell_point(0, 1));
        editor.pointer_move(cell_point(0, 2));
        editor.pointer_up();

        assert_eq!(editor.grid().len(), 3);
        assert!(editor.gesture().is_idle());
    }

    #[test]
    fn eraser_drag_removes_cells() {
        let mut editor = mounted();
        for col in 0..3 {
            editor.apply_tool(SeatKey::new(0, col));
        }
        editor.set_tool(Tool::Eraser);
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Primary, cell_point(0, 0));
        editor.pointer_move(cell_point(0, 1));
        editor.pointer_leave();

        assert_eq!(editor.grid().keys().collect::<Vec<_>>(), vec![SeatKey::new(0, 2)]);
    }

    #[test]
    fn middle_button_pans_regardless_of_tool() {
        let mut editor = mounted();
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Middle, Point::new(10.0, 10.0));
        editor.pointer_move(Point::new(30.0, 5.0));

        assert!(editor.grid().is_empty());
        assert_eq!(editor.viewport().pan, Point::new(20.0, -5.0));
    }

    #[test]
    fn pan_does_not_move_cells() {
        let mut editor = mounted();
        editor.apply_tool(SeatKey::new(2, 2));
        editor.set_tool(Tool::Pan);
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Primary, Point::ZERO);
        editor.pointer_move(Point::new(100.0, 100.0));
        editor.pointer_up();

        assert!(editor.grid().contains(SeatKey::new(2, 2)));
    }

    #[test]
    fn unmounted_canvas_ignores_drawing() {
        let mut editor = SeatMapEditor::default();
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Primary, Point::new(5.0, 5.0));
        assert!(editor.grid().is_empty());
        assert!(editor.gesture().is_idle());
    }

    #[test]
    fn unmount_mid_drag_paints_nothing() {
        let mut editor = mounted();
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Primary, cell_point(5, 5));
        editor.set_container(None);
        editor.pointer_move(Point::new(10.0, 10.0));
        assert_eq!(editor.grid().keys().collect::<Vec<_>>(), vec![SeatKey::new(5, 5)]);
        assert!(editor.gesture().is_idle());

        // ластик с незавершенным жестом тоже не трогает (0,0)
        editor.apply_tool(SeatKey::ORIGIN);
        editor.set_tool(Tool::Eraser);
        editor.gesture = Gesture::Drawing { last_cell: SeatKey::new(5, 5) };
        editor.pointer_move(Point::new(10.0, 10.0));
        assert!(editor.grid().contains(SeatKey::ORIGIN));
    }

    #[test]
    fn secondary_button_draws_like_primary() {
        let mut editor = mounted();
        editor.pointer_down(PointerTarget::Canvas, PointerButton::Secondary, cell_point(1, 1));
        editor.pointer_move(cell_point(1, 2));
        editor.pointer_up();
        assert_eq!(editor.grid().len(), 2);
    }

    #[test]
    fn stage_drag_is_zoom_compensated() {
        let mut editor = mounted();
        editor.viewport_mut().set_zoom(2.0);
        let stage = editor.config().stages[0].clone();

        editor.pointer_down(PointerTarget::StageBody(stage.id.clone()), PointerButton::Primary, Point::ZERO);
        editor.pointer_move(Point::new(40.0, 20.0));
        editor.pointer_up();

        let moved = editor.config().stage(&stage.id).unwrap();
        assert_eq!(moved.x, stage.x + 20.0);
        assert_eq!(moved.y, stage.y + 10.0);
        assert!(editor.grid().is_empty());
    }

    #[test]
    fn new_gesture_replaces_previous() {
        let mut editor = mounted();
        editor.set_tiers(vec![TicketTier::new("a", "A", 1.0, 1, "#000")]);
        let stage_id = editor.config().stages[0].id.clone();
        editor.pointer_down(PointerTarget::StageBody(stage_id.clone()), PointerButton::Primary, Point::ZERO);
        editor.pointer_down(
            PointerTarget::StageHandle(stage_id, ResizeHandle::Se),
            PointerButton::Primary,
            Point::ZERO,
        );
        assert!(matches!(editor.gesture(), Gesture::ResizingStage { .. }));
    }

    #[test]
    fn stale_stage_target_falls_through_to_canvas() {
        let mut editor = mounted();
        editor.pointer_down(PointerTarget::StageBody("gone".into()), PointerButton::Primary, CENTER);
        assert!(matches!(editor.gesture(), Gesture::Drawing { .. }));
        assert!(editor.grid().contains(SeatKey::ORIGIN));
    }
}
