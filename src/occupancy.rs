use std::collections::{HashMap, HashSet};

// Занятость одного ряда: множество занятых индексов + счётчик заполнения
#[derive(Debug, Default)]
struct RowOccupancy {
    taken: HashSet<u32>,
    filled: u32,
}

/// Учёт занятых мест на время одного запуска генерации.
///
/// Разреженная карта (zone, row) -> занятость ряда; записи создаются при
/// первом обращении. Инвариант: `filled` каждого ряда равен мощности его
/// множества `taken` и никогда не превышает ширину ряда.
#[derive(Debug)]
pub struct OccupancyTracker {
    rows: HashMap<(u32, u32), RowOccupancy>,
    seats_per_row: u32,
}

impl OccupancyTracker {
    pub fn new(seats_per_row: u32) -> Self {
        Self {
            rows: HashMap::new(),
            seats_per_row,
        }
    }

    /// Быстрая O(1) проверка: поместится ли ещё `count` мест в ряд
    pub fn capacity_ok(&self, zone: u32, row: u32, count: u32) -> bool {
        let filled = self.rows.get(&(zone, row)).map_or(0, |r| r.filled);
        filled + count <= self.seats_per_row
    }

    /// Поиск первого свободного непрерывного блока длины `count`.
    ///
    /// Перебор стартовых позиций 0..=S-count по возрастанию, побеждает
    /// наименьший индекс (first-fit). None - блока нет, это штатный исход.
    pub fn find_free_run(&self, zone: u32, row: u32, count: u32) -> Option<u32> {
        if count == 0 || count > self.seats_per_row {
            return None;
        }
        let occupied = self.rows.get(&(zone, row));
        for start in 0..=(self.seats_per_row - count) {
            let window_free = match occupied {
                Some(r) => (start..start + count).all(|idx| !r.taken.contains(&idx)),
                None => true,
            };
            if window_free {
                return Some(start);
            }
        }
        None
    }

    /// Помечает блок [start, start+count) занятым.
    ///
    /// Непересечение с уже занятыми местами НЕ проверяется - вызывающий
    /// обязан сначала убедиться через `find_free_run`.
    pub fn mark_occupied(&mut self, zone: u32, row: u32, start: u32, count: u32) {
        let entry = self.rows.entry((zone, row)).or_default();
        for idx in start..start + count {
            entry.taken.insert(idx);
        }
        entry.filled += count;
    }

    /// Суммарно занятых мест по всем рядам (для итогового отчёта)
    pub fn total_occupied(&self) -> u64 {
        self.rows.values().map(|r| r.filled as u64).sum()
    }
}
