use tracing::{info, warn};

// Итоговая статистика запуска - то, что раньше уходило в stdout
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub target_total_seats: u64,
    pub total_seats: u64,
    pub total_orders: u64,
    pub successful_orders: u64,
    pub failing_orders: u64,
    pub relaxed_fallbacks: u64,
    pub seats_reserved: u64,
    pub venue_capacity: u64,
}

impl GenerationSummary {
    /// Отклонение от целевой суммы мест (задокументированный дрейф квоты)
    pub fn accuracy_delta(&self) -> i64 {
        self.total_seats as i64 - self.target_total_seats as i64
    }

    pub fn over_capacity_ratio(&self) -> f64 {
        self.total_seats as f64 / self.venue_capacity.max(1) as f64
    }

    pub fn reserved_fill_ratio(&self) -> f64 {
        self.seats_reserved as f64 / self.venue_capacity.max(1) as f64
    }

    pub fn log(&self) {
        let orders = self.total_orders.max(1) as f64;
        info!("=== GENERATION COMPLETE ===");
        info!(
            "Generated {} orders, {} seats (target: {})",
            self.total_orders, self.total_seats, self.target_total_seats
        );
        info!(
            "Successful orders: {} ({:.1}%)",
            self.successful_orders,
            self.successful_orders as f64 / orders * 100.0
        );
        info!(
            "Failing orders: {} ({:.1}%)",
            self.failing_orders,
            self.failing_orders as f64 / orders * 100.0
        );
        if self.relaxed_fallbacks > 0 {
            warn!(
                "⚠️ {} bookings accepted via relaxed fallback (overlap not verified)",
                self.relaxed_fallbacks
            );
        }
        info!(
            "Successful seats reserved: {} ({:.1}% of capacity)",
            self.seats_reserved,
            self.reserved_fill_ratio() * 100.0
        );
        info!("Total venue capacity: {} seats", self.venue_capacity);
        info!("Over-capacity ratio: {:.1}%", self.over_capacity_ratio() * 100.0);
        info!("Accuracy: {} seats from target", self.accuracy_delta().abs());
    }
}
