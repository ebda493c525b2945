use crate::occupancy::OccupancyTracker;

/// Пробное размещение блока `count` мест в ряду.
///
/// Сначала дешёвый отсев по заполненности, потом first-fit поиск свободного
/// блока. Только поиск, без мутации: занятие мест остаётся за вызывающим
/// (`mark_occupied`), что позволяет прощупывать вместимость вхолостую.
pub fn try_place(occupancy: &OccupancyTracker, zone: u32, row: u32, count: u32) -> Option<u32> {
    if !occupancy.capacity_ok(zone, row, count) {
        return None;
    }
    occupancy.find_free_run(zone, row, count)
}
