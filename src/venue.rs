use crate::config::VenueConfig;

// Статичная модель зала на один запуск генерации
#[derive(Debug, Clone, Copy)]
pub struct VenueModel {
    pub zones: u32,
    pub rows_per_zone: u32,
    pub seats_per_row: u32,
}

impl VenueModel {
    pub fn new(zones: u32, rows_per_zone: u32, seats_per_row: u32) -> Self {
        Self {
            zones,
            rows_per_zone,
            seats_per_row,
        }
    }

    pub fn from_config(cfg: &VenueConfig) -> Self {
        Self::new(cfg.zones, cfg.rows_per_zone, cfg.seats_per_row)
    }

    /// Полная вместимость зала
    pub fn total_capacity(&self) -> u64 {
        self.zones as u64 * self.rows_per_zone as u64 * self.seats_per_row as u64
    }
}
