use tracing::debug;

use super::SeatMapEditor;
use crate::models::SeatKey;

/// Активный инструмент. `Tier` хранит ссылку на категорию билета.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tool {
    Pan,
    Add,
    Eraser,
    Tier(String),
}

impl SeatMapEditor {
    pub fn tool(&self) -> &Tool {
        &self.tool
    }

    /// Инструмент несуществующей категории не выбирается
    pub fn set_tool(&mut self, tool: Tool) -> bool {
        if let Tool::Tier(id) = &tool {
            if !self.tiers.iter().any(|tier| tier.matches(id)) {
                debug!("Ignoring unknown tier tool {}", id);
                return false;
            }
        }
        self.tool = tool;
        true
    }

    /// N-я категория (с нуля), если такая есть
    pub fn select_tier_by_index(&mut self, index: usize) -> bool {
        let reference = self
            .tiers
            .get(index)
            .and_then(|tier| tier.reference())
            .map(str::to_string);

        match reference {
            Some(id) => {
                self.tool = Tool::Tier(id);
                true
            }
            None => false,
        }
    }

    /// Применяет активный инструмент к ячейке. Возвращает true, если сетка изменилась.
    pub fn apply_tool(&mut self, key: SeatKey) -> bool {
        match &self.tool {
            Tool::Pan => false,
            Tool::Add => self.grid.insert_unassigned(key),
            Tool::Eraser => self.grid.remove(key),
            Tool::Tier(id) => {
                // сначала "добавить", потом "назначить"
                if self.grid.tier_of(key) == Some(Some(id.as_str())) {
                    return false;
                }
                let id = id.clone();
                self.grid.assign(key, &id)
            }
        }
    }
}
