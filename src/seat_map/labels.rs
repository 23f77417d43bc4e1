use std::collections::{BTreeMap, BTreeSet};

use super::SeatMapEditor;
use crate::models::tier::{find_tier, NEUTRAL_SEAT_COLOR};
use crate::models::{RowLabelType, SeatKey};

/// Буквенная подпись ряда: биективная 26-ричная система без "нуля".
/// 0 -> A, 25 -> Z, 26 -> AA, 27 -> AB, 701 -> ZZ, 702 -> AAA
pub fn letters_label(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index;
    loop {
        letters.push(b'A' + (n % 26) as u8);
        if n < 26 {
            break;
        }
        n = n / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

pub fn row_label(index: usize, kind: RowLabelType) -> String {
    match kind {
        RowLabelType::Letters => letters_label(index),
        RowLabelType::Numbers => (index + 1).to_string(),
    }
}

/// Подписи вычисляются по порядку занятых рядов, а не по номеру ряда на сетке
pub fn row_labels<I>(keys: I, kind: RowLabelType) -> BTreeMap<i32, String>
where
    I: IntoIterator<Item = SeatKey>,
{
    let rows: BTreeSet<i32> = keys.into_iter().map(|key| key.row).collect();
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| (row, row_label(index, kind)))
        .collect()
}

/// Номер места в ряду: места ряда по возрастанию колонки, с единицы
pub fn seat_numbers<I>(keys: I) -> BTreeMap<SeatKey, u32>
where
    I: IntoIterator<Item = SeatKey>,
{
    let sorted: BTreeSet<SeatKey> = keys.into_iter().collect();
    let mut numbers = BTreeMap::new();
    let mut current_row = None;
    let mut counter = 0;

    // BTreeSet уже упорядочен по (row, col)
    for key in sorted {
        if current_row != Some(key.row) {
            current_row = Some(key.row);
            counter = 0;
        }
        counter += 1;
        numbers.insert(key, counter);
    }
    numbers
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SeatStats {
    pub total: usize,
    pub assigned: usize,
}

impl SeatMapEditor {
    pub fn row_labels(&self) -> BTreeMap<i32, String> {
        row_labels(self.grid.keys(), self.config.row_label_type)
    }

    pub fn seat_numbers(&self) -> BTreeMap<SeatKey, u32> {
        seat_numbers(self.grid.keys())
    }

    pub fn stats(&self) -> SeatStats {
        SeatStats {
            total: self.grid.len(),
            assigned: self.grid.assigned_count(),
        }
    }

    /// Цвет места: цвет категории или нейтральный, если ссылка битая или ее нет
    pub fn seat_color(&self, key: SeatKey) -> Option<&str> {
        let tier_ref = self.grid.tier_of(key)?;
        Some(
            find_tier(&self.tiers, tier_ref)
                .map(|tier| tier.color.as_str())
                .unwrap_or(NEUTRAL_SEAT_COLOR),
        )
    }

    /// Подпись для смарт-тега `{{Seat_Info}}`
    pub fn seat_info(&self, key: SeatKey) -> Option<String> {
        let labels = self.row_labels();
        let numbers = self.seat_numbers();
        Some(format!("Row {}, Seat {}", labels.get(&key.row)?, numbers.get(&key)?))
    }
}
