pub mod stats;

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use tracing::info;

use crate::config::GenerationConfig;
use crate::models::BookingRecord;
use crate::occupancy::OccupancyTracker;
use crate::placement;
use crate::sampler::SeatCountSampler;
use crate::venue::VenueModel;

pub use stats::GenerationSummary;

// Внутренняя запись успешной фазы. start и флаг relaxed наружу не выходят.
#[derive(Debug, Clone)]
struct PlacedBooking {
    zone: u32,
    row: u32,
    start: Option<u32>,
    count: u32,
    placement_relaxed: bool,
}

// Запись конфликтной фазы: трекер занятости не трогает
#[derive(Debug, Clone)]
struct ConflictBooking {
    zone: u32,
    row: u32,
    count: u32,
}

// Производный план запуска: сколько заказов и мест на каждую фазу
#[derive(Debug, Clone)]
pub struct GenerationPlan {
    pub target_total_seats: u64,
    pub total_orders: u64,
    pub n_success: u64,
    pub n_failing: u64,
    pub target_successful_seats: u64,
    pub target_failing_seats: u64,
}

impl GenerationPlan {
    pub fn derive(cfg: &GenerationConfig, sampler: &SeatCountSampler) -> Self {
        let avg = sampler.base_table().average();
        let total_orders = (cfg.target_total_seats as f64 / avg) as u64;
        let n_success = ((total_orders as f64 * cfg.success_ratio).round() as u64).min(total_orders);
        let target_successful_seats =
            (cfg.target_total_seats as f64 * cfg.successful_seats_share) as u64;
        Self {
            target_total_seats: cfg.target_total_seats,
            total_orders,
            n_success,
            n_failing: total_orders - n_success,
            target_successful_seats,
            target_failing_seats: cfg.target_total_seats - target_successful_seats,
        }
    }

    fn log(&self, venue: &VenueModel, avg_seats_per_order: f64) {
        info!(
            "Target: {} orders to generate exactly {} seats",
            self.total_orders, self.target_total_seats
        );
        info!("Average seats per order: {:.2}", avg_seats_per_order);
        info!("Available seat capacity: {} seats", venue.total_capacity());
        info!(
            "Target: {} successful orders ({} seats), {} failing orders ({} seats)",
            self.n_success, self.target_successful_seats, self.n_failing, self.target_failing_seats
        );
    }
}

/// Результат запуска: упорядоченный корпус + статистика
#[derive(Debug)]
pub struct GenerationOutcome {
    pub records: Vec<BookingRecord>,
    pub summary: GenerationSummary,
}

/// Оркестратор двух фаз генерации.
///
/// Владеет единственным трекером занятости и единственным ГСЧ на весь
/// запуск: одинаковые конфигурация и SEED дают одинаковый корпус.
pub struct GenerationOrchestrator {
    venue: VenueModel,
    cfg: GenerationConfig,
    sampler: SeatCountSampler,
    rng: StdRng,
}

impl GenerationOrchestrator {
    pub fn new(venue: VenueModel, cfg: GenerationConfig, sampler: SeatCountSampler) -> Self {
        let rng = match cfg.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            venue,
            cfg,
            sampler,
            rng,
        }
    }

    pub fn run(&mut self) -> GenerationOutcome {
        let plan = GenerationPlan::derive(&self.cfg, &self.sampler);
        plan.log(&self.venue, self.sampler.base_table().average());

        let mut occupancy = OccupancyTracker::new(self.venue.seats_per_row);

        info!("Generating successful bookings with controlled seat distribution...");
        let successful = self.generate_successful(&plan, &mut occupancy);
        info!("Generated {} successful bookings", successful.len());

        info!("Generating failing bookings...");
        let failing = self.generate_failing(&plan, &successful);

        let relaxed_fallbacks = successful.iter().filter(|b| b.placement_relaxed).count() as u64;
        let records = compose(&successful, &failing);
        let total_seats = records.iter().map(|r| r.count as u64).sum();

        let summary = GenerationSummary {
            target_total_seats: plan.target_total_seats,
            total_seats,
            total_orders: records.len() as u64,
            successful_orders: successful.len() as u64,
            failing_orders: failing.len() as u64,
            relaxed_fallbacks,
            seats_reserved: occupancy.total_occupied(),
            venue_capacity: self.venue.total_capacity(),
        };

        GenerationOutcome { records, summary }
    }

    /// Фаза 1: брони, которые сервис должен принять.
    ///
    /// До biased_zone_attempts зона берётся из заранее перемешанного цикла
    /// по всем зонам (ранняя равномерность покрытия), дальше - чистая
    /// случайность. Первая удачная попытка размещения фиксируется в трекере.
    fn generate_successful(
        &mut self,
        plan: &GenerationPlan,
        occupancy: &mut OccupancyTracker,
    ) -> Vec<PlacedBooking> {
        let zone_cycle = self.shuffled_zone_cycle(plan.n_success);
        let mut remaining = plan.target_successful_seats;
        let mut bookings = Vec::with_capacity(plan.n_success as usize);

        for i in 0..plan.n_success {
            if i % 5000 == 0 {
                info!(
                    "  Generated {} successful bookings, {} seats remaining...",
                    i, remaining
                );
            }
            let remaining_orders = plan.n_success - i;
            let mut placed = None;

            for attempt in 0..self.cfg.max_placement_attempts {
                let zone = if attempt < self.cfg.biased_zone_attempts {
                    zone_cycle[(i % zone_cycle.len() as u64) as usize]
                } else {
                    self.rng.random_range(1..=self.venue.zones)
                };
                let row = self.rng.random_range(1..=self.venue.rows_per_zone);
                let sampled = self
                    .sampler
                    .controlled_sample(&mut self.rng, remaining, remaining_orders);
                let count = clamp_to_quota(sampled, remaining, remaining_orders);

                if let Some(start) = placement::try_place(occupancy, zone, row, count) {
                    occupancy.mark_occupied(zone, row, start, count);
                    placed = Some(PlacedBooking {
                        zone,
                        row,
                        start: Some(start),
                        count,
                        placement_relaxed: false,
                    });
                    break;
                }
            }

            let booking = match placed {
                Some(b) => b,
                None => {
                    // все попытки исчерпаны: принимаем бронь без проверки
                    // пересечений, трекер не трогаем
                    let zone = self.rng.random_range(1..=self.venue.zones);
                    let row = self.rng.random_range(1..=self.venue.rows_per_zone);
                    let sampled = self
                        .sampler
                        .controlled_sample(&mut self.rng, remaining, remaining_orders);
                    let count = clamp_to_quota(sampled, remaining, remaining_orders);
                    PlacedBooking {
                        zone,
                        row,
                        start: None,
                        count,
                        placement_relaxed: true,
                    }
                }
            };

            remaining = remaining.saturating_sub(booking.count as u64);
            bookings.push(booking);
        }

        bookings
    }

    /// Фаза 2: брони, которые сервис должен отклонить.
    ///
    /// Целимся в (zone, row) уже принятой брони; количество мест не
    /// проверяется на размещаемость - переполнение ряда здесь намеренное.
    fn generate_failing(
        &mut self,
        plan: &GenerationPlan,
        successful: &[PlacedBooking],
    ) -> Vec<ConflictBooking> {
        let mut remaining = plan.target_failing_seats;
        let mut bookings = Vec::with_capacity(plan.n_failing as usize);
        let max_count = self.sampler.max_count() as u64;

        for i in 0..plan.n_failing {
            if i % 2000 == 0 {
                info!(
                    "  Generated {} failing bookings, {} seats remaining...",
                    i, remaining
                );
            }
            let remaining_orders = plan.n_failing - i;

            let (zone, row) = match successful.choose(&mut self.rng) {
                Some(target) => (target.zone, target.row),
                // вырожденный случай: успешных броней нет вообще
                None => (
                    self.rng.random_range(1..=self.venue.zones),
                    self.rng.random_range(1..=self.venue.rows_per_zone),
                ),
            };

            let sampled = self.sampler.sample(&mut self.rng);
            let count = if remaining_orders == 1 {
                remaining.clamp(1, max_count) as u32
            } else if remaining > 0 {
                let per_order = (remaining / remaining_orders).max(1).min(max_count) as u32;
                sampled.min(per_order)
            } else {
                // квота исчерпана, заказы остались: минимальный заказ,
                // задокументированный дрейф от целевой суммы
                1
            };

            remaining = remaining.saturating_sub(count as u64);
            bookings.push(ConflictBooking { zone, row, count });
        }

        bookings
    }

    // Цикл зон, повторённый на все заказы и перемешанный один раз на фазу
    fn shuffled_zone_cycle(&mut self, orders: u64) -> Vec<u32> {
        let repeats = orders / self.venue.zones.max(1) as u64 + 1;
        let mut cycle: Vec<u32> = (0..repeats)
            .flat_map(|_| 1..=self.venue.zones)
            .collect();
        cycle.shuffle(&mut self.rng);
        cycle
    }
}

// Не даём заказу съесть резерв минимум по одному месту на каждый из
// оставшихся заказов: так сумма фазы не промахивается мимо цели вверх,
// а каждый заказ сохраняет не меньше одного места
fn clamp_to_quota(sampled: u32, remaining_seats: u64, remaining_orders: u64) -> u32 {
    if remaining_orders <= 1 {
        return sampled.max(1);
    }
    let headroom = remaining_seats
        .saturating_sub(remaining_orders - 1)
        .min(u32::MAX as u64) as u32;
    sampled.min(headroom).max(1)
}

// Склейка фаз: user_id - позиция в общем порядке, начиная с 1.
// Финальная сортировка делает контракт упорядоченности явным и независимым
// от порядка генерации фаз.
fn compose(successful: &[PlacedBooking], failing: &[ConflictBooking]) -> Vec<BookingRecord> {
    let mut records: Vec<BookingRecord> = successful
        .iter()
        .map(|b| (b.zone, b.row, b.count))
        .chain(failing.iter().map(|b| (b.zone, b.row, b.count)))
        .enumerate()
        .map(|(i, (zone, row, count))| BookingRecord {
            user_id: i as u64 + 1,
            zone,
            row,
            count,
        })
        .collect();
    records.sort_by_key(|r| r.user_id);
    records
}
