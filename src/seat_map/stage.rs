use std::str::FromStr;
use tracing::info;

use super::gesture::Gesture;
use super::SeatMapEditor;
use crate::error::EditorError;
use crate::models::Stage;

pub const MIN_STAGE_WIDTH: f64 = 60.0;
pub const MIN_STAGE_HEIGHT: f64 = 30.0;

/// Ручки ресайза сцены по сторонам света
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeHandle {
    Nw,
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Nw,
        ResizeHandle::N,
        ResizeHandle::Ne,
        ResizeHandle::E,
        ResizeHandle::Se,
        ResizeHandle::S,
        ResizeHandle::Sw,
        ResizeHandle::W,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResizeHandle::Nw => "nw",
            ResizeHandle::N => "n",
            ResizeHandle::Ne => "ne",
            ResizeHandle::E => "e",
            ResizeHandle::Se => "se",
            ResizeHandle::S => "s",
            ResizeHandle::Sw => "sw",
            ResizeHandle::W => "w",
        }
    }

    fn north(self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::N | ResizeHandle::Ne)
    }

    fn south(self) -> bool {
        matches!(self, ResizeHandle::Sw | ResizeHandle::S | ResizeHandle::Se)
    }

    fn east(self) -> bool {
        matches!(self, ResizeHandle::Ne | ResizeHandle::E | ResizeHandle::Se)
    }

    fn west(self) -> bool {
        matches!(self, ResizeHandle::Nw | ResizeHandle::W | ResizeHandle::Sw)
    }
}

impl FromStr for ResizeHandle {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResizeHandle::ALL
            .into_iter()
            .find(|handle| handle.as_str() == s)
            .ok_or_else(|| EditorError::InvalidHandle(s.to_string()))
    }
}

impl Stage {
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    /// Дельта уже в логических пикселях. Западная и северная ручки двигают начало,
    /// дельта урезается так, чтобы не пробить минимальный размер.
    pub fn resize(&mut self, handle: ResizeHandle, dx: f64, dy: f64) {
        if handle.east() {
            self.w = (self.w + dx).max(MIN_STAGE_WIDTH);
        }
        if handle.south() {
            self.h = (self.h + dy).max(MIN_STAGE_HEIGHT);
        }
        if handle.west() {
            let dw = dx.min(self.w - MIN_STAGE_WIDTH);
            self.x += dw;
            self.w -= dw;
        }
        if handle.north() {
            let dh = dy.min(self.h - MIN_STAGE_HEIGHT);
            self.y += dh;
            self.h -= dh;
        }
    }
}

impl SeatMapEditor {
    pub fn add_stage(&mut self, label: impl Into<String>) -> String {
        let stage = Stage::new(label);
        let id = stage.id.clone();
        info!("Stage {} added", id);
        self.config.stages.push(stage);
        id
    }

    pub fn remove_stage(&mut self, id: &str) -> Result<Stage, EditorError> {
        let index = self
            .config
            .stages
            .iter()
            .position(|stage| stage.id == id)
            .ok_or_else(|| EditorError::StageNotFound(id.to_string()))?;

        // жест по удаленной сцене продолжать нельзя
        let touches_stage = match &self.gesture {
            Gesture::DraggingStage { stage_id, .. } | Gesture::ResizingStage { stage_id, .. } => stage_id == id,
            _ => false,
        };
        if touches_stage {
            self.gesture = Gesture::Idle;
        }

        info!("Stage {} removed", id);
        Ok(self.config.stages.remove(index))
    }

    pub fn rename_stage(&mut self, id: &str, label: impl Into<String>) -> Result<(), EditorError> {
        let stage = self
            .config
            .stage_mut(id)
            .ok_or_else(|| EditorError::StageNotFound(id.to_string()))?;
        stage.label = label.into();
        Ok(())
    }
}
