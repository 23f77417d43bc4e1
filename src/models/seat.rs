use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::EditorError;

/// Координата места на сетке. Единственный тип ключа для редактора,
/// публичной схемы зала и протокола бэкенда.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeatKey {
    pub row: i32,
    pub col: i32,
}

impl SeatKey {
    pub const ORIGIN: SeatKey = SeatKey { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Внутренний формат редактора: `"{row}-{col}"`
    pub fn to_editor_key(self) -> String {
        format!("{}-{}", self.row, self.col)
    }

    /// Формат бэкенда (`soldSeats`, `seatIds`): `"{row}_{col}"`
    pub fn to_wire(self) -> String {
        format!("{}_{}", self.row, self.col)
    }

    /// Разбирает оба формата. Разделитель ищем после первого символа,
    /// иначе минус отрицательной строки примем за разделитель.
    pub fn parse(raw: &str) -> Result<Self, EditorError> {
        let invalid = || EditorError::InvalidSeatKey(raw.to_string());
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        let split_at = trimmed
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c == '_' || c == '-')
            .map(|(i, _)| i)
            .ok_or_else(invalid)?;

        let row = trimmed[..split_at].parse::<i32>().map_err(|_| invalid())?;
        let col = trimmed[split_at + 1..].parse::<i32>().map_err(|_| invalid())?;
        Ok(Self { row, col })
    }
}

impl fmt::Display for SeatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.row, self.col)
    }
}

impl FromStr for SeatKey {
    type Err = EditorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for SeatKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_wire())
    }
}

impl<'de> Deserialize<'de> for SeatKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        SeatKey::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Место в том виде, в каком его видит UI и бэкенд.
/// `tier_id == None` - место поставлено, но категория не назначена (не продается).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatCell {
    pub row: i32,
    pub col: i32,
    pub tier_id: Option<String>,
}

impl SeatCell {
    pub fn key(&self) -> SeatKey {
        SeatKey::new(self.row, self.col)
    }
}

/// Место в теле запроса создания события. Без категории не отправляется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SeatDto {
    pub row: i32,
    pub col: i32,
    #[validate(length(min = 1))]
    pub tier_id: String,
}

impl SeatDto {
    pub fn key(&self) -> SeatKey {
        SeatKey::new(self.row, self.col)
    }
}

/// Разреженная сетка мест. Ключ и есть координата, поэтому
/// рассинхронизации ключа и содержимого быть не может.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeatGrid {
    cells: BTreeMap<SeatKey, Option<String>>,
}

impl SeatGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, key: SeatKey) -> bool {
        self.cells.contains_key(&key)
    }

    /// `None` - места нет, `Some(None)` - место без категории
    pub fn tier_of(&self, key: SeatKey) -> Option<Option<&str>> {
        self.cells.get(&key).map(|tier| tier.as_deref())
    }

    /// Вставляет место без категории. Существующее место не трогаем.
    pub fn insert_unassigned(&mut self, key: SeatKey) -> bool {
        if self.cells.contains_key(&key) {
            return false;
        }
        self.cells.insert(key, None);
        true
    }

    pub fn remove(&mut self, key: SeatKey) -> bool {
        self.cells.remove(&key).is_some()
    }

    /// Назначает категорию только существующему месту
    pub fn assign(&mut self, key: SeatKey, tier_id: &str) -> bool {
        match self.cells.get_mut(&key) {
            Some(slot) => {
                *slot = Some(tier_id.to_string());
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = SeatKey> + '_ {
        self.cells.keys().copied()
    }

    pub fn cells(&self) -> impl Iterator<Item = SeatCell> + '_ {
        self.cells.iter().map(|(key, tier)| SeatCell {
            row: key.row,
            col: key.col,
            tier_id: tier.clone(),
        })
    }

    pub fn assigned_count(&self) -> usize {
        self.cells.values().filter(|tier| tier.is_some()).count()
    }

    /// Только места с категорией, в формате бэкенда
    pub fn to_payload(&self) -> Vec<SeatDto> {
        self.cells
            .iter()
            .filter_map(|(key, tier)| {
                tier.as_ref().map(|tier_id| SeatDto {
                    row: key.row,
                    col: key.col,
                    tier_id: tier_id.clone(),
                })
            })
            .collect()
    }
}

impl FromIterator<SeatCell> for SeatGrid {
    fn from_iter<I: IntoIterator<Item = SeatCell>>(iter: I) -> Self {
        let cells = iter
            .into_iter()
            .map(|cell| (cell.key(), cell.tier_id))
            .collect();
        Self { cells }
    }
}
