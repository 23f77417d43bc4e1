use serde::{Deserialize, Serialize};

/// Сцена - подписанный прямоугольник на схеме зала. Координаты в пикселях сетки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
    #[serde(default = "default_stage_label")]
    pub label: String,
}

fn default_stage_label() -> String {
    "STAGE".to_string()
}

impl Stage {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            id: format!("stage-{}", uuid::Uuid::new_v4()),
            x: -100.0,
            y: -150.0,
            w: 200.0,
            h: 50.0,
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowLabelType {
    #[default]
    Letters,
    Numbers,
}

/// Старый формат: одна сцена без id и подписи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatMapConfig {
    #[serde(default)]
    pub stages: Vec<Stage>,
    #[serde(default)]
    pub row_label_type: RowLabelType,
    #[serde(default, skip_serializing)]
    pub stage_rect: Option<StageRect>,
}

impl Default for SeatMapConfig {
    fn default() -> Self {
        Self {
            stages: vec![Stage::new(default_stage_label())],
            row_label_type: RowLabelType::Letters,
            stage_rect: None,
        }
    }
}

impl SeatMapConfig {
    /// Переносит `stageRect` из старых черновиков в список сцен
    pub fn upgrade_legacy(&mut self) {
        if let Some(rect) = self.stage_rect.take() {
            if self.stages.is_empty() {
                let mut stage = Stage::new(default_stage_label());
                stage.x = rect.x;
                stage.y = rect.y;
                stage.w = rect.w;
                stage.h = rect.h;
                self.stages.push(stage);
            }
        }
    }

    pub fn stage(&self, id: &str) -> Option<&Stage> {
        self.stages.iter().find(|stage| stage.id == id)
    }

    pub fn stage_mut(&mut self, id: &str) -> Option<&mut Stage> {
        self.stages.iter_mut().find(|stage| stage.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_stage_rect_becomes_stage() {
        let mut config: SeatMapConfig = serde_json::from_str(
            r#"{"stageRect":{"x":-100,"y":-150,"w":200,"h":50},"rowLabelType":"numbers"}"#,
        )
        .unwrap();
        config.upgrade_legacy();

        assert_eq!(config.row_label_type, RowLabelType::Numbers);
        assert_eq!(config.stages.len(), 1);
        assert_eq!(config.stages[0].w, 200.0);
        assert_eq!(config.stages[0].label, "STAGE");

        let json = serde_json::to_value(&config).unwrap();
        assert!(json.get("stageRect").is_none());
        assert_eq!(json["rowLabelType"], "numbers");
    }
}
