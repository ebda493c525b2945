use rand::Rng;

/// Упорядоченная таблица весов: количество мест -> вероятность.
///
/// Вероятности должны быть нормированы (сумма 1.0) - это предусловие,
/// таблица не валидируется.
#[derive(Debug, Clone)]
pub struct WeightTable {
    entries: Vec<(u32, f64)>,
}

impl WeightTable {
    pub fn new(entries: Vec<(u32, f64)>) -> Self {
        Self { entries }
    }

    // Дефолтное распределение: мелкие заказы преобладают
    pub fn base() -> Self {
        Self::new(vec![(1, 0.5), (2, 0.25), (3, 0.15), (4, 0.07), (5, 0.03)])
    }

    // Равномерное распределение - когда нужно разогнать средний размер заказа
    pub fn uniform() -> Self {
        Self::new(vec![(1, 0.2), (2, 0.2), (3, 0.2), (4, 0.2), (5, 0.2)])
    }

    // Умеренный сдвиг от минимальных заказов
    pub fn mid_biased() -> Self {
        Self::new(vec![(1, 0.3), (2, 0.3), (3, 0.2), (4, 0.1), (5, 0.1)])
    }

    pub fn max_count(&self) -> u32 {
        self.entries.iter().map(|&(c, _)| c).max().unwrap_or(1)
    }

    /// Средний размер заказа по таблице
    pub fn average(&self) -> f64 {
        self.entries.iter().map(|&(c, w)| c as f64 * w).sum()
    }

    fn first_count(&self) -> u32 {
        self.entries.first().map_or(1, |&(c, _)| c)
    }
}

/// Взвешенный выбор количества мест на заказ.
pub struct SeatCountSampler {
    base: WeightTable,
    uniform: WeightTable,
    mid_biased: WeightTable,
}

impl SeatCountSampler {
    pub fn new(base: WeightTable) -> Self {
        Self {
            base,
            uniform: WeightTable::uniform(),
            mid_biased: WeightTable::mid_biased(),
        }
    }

    pub fn base_table(&self) -> &WeightTable {
        &self.base
    }

    pub fn max_count(&self) -> u32 {
        self.base.max_count()
    }

    /// Один розыгрыш по базовой таблице
    pub fn sample<R: Rng>(&self, rng: &mut R) -> u32 {
        Self::sample_from(rng, &self.base)
    }

    /// Розыгрыш по произвольной таблице: инверсия кумулятивной вероятности
    /// одним равномерным броском
    pub fn sample_from<R: Rng>(rng: &mut R, table: &WeightTable) -> u32 {
        let draw: f64 = rng.random();
        let mut cumulative = 0.0;
        for &(count, weight) in &table.entries {
            cumulative += weight;
            if draw <= cumulative {
                return count;
            }
        }
        // числовой остаток от неточного суммирования - берём первую запись
        table.first_count()
    }

    /// Розыгрыш с подстройкой под остаток квоты.
    ///
    /// Последний заказ фазы забирает весь остаток (в пределах 1..=max).
    /// Иначе по среднему остатку на заказ выбирается таблица: > 2.5 -
    /// равномерная, > 2.0 - умеренно сдвинутая, иначе базовая. Так сумма
    /// фазы сходится к цели без корректирующего прохода.
    pub fn controlled_sample<R: Rng>(
        &self,
        rng: &mut R,
        remaining_seats: u64,
        remaining_orders: u64,
    ) -> u32 {
        if remaining_orders <= 1 {
            let max = self.max_count() as u64;
            return remaining_seats.clamp(1, max) as u32;
        }

        let target_avg = remaining_seats as f64 / remaining_orders as f64;
        let table = self.table_for_average(target_avg);
        Self::sample_from(rng, table)
    }

    fn table_for_average(&self, target_avg: f64) -> &WeightTable {
        if target_avg > 2.5 {
            &self.uniform
        } else if target_avg > 2.0 {
            &self.mid_biased
        } else {
            &self.base
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn base_table_average_matches_expected() {
        let avg = WeightTable::base().average();
        assert!((avg - 1.88).abs() < 1e-9);
    }

    #[test]
    fn degenerate_table_always_returns_its_count() {
        let table = WeightTable::new(vec![(3, 1.0)]);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(SeatCountSampler::sample_from(&mut rng, &table), 3);
        }
    }

    #[test]
    fn sample_stays_within_table_bounds() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let count = sampler.sample(&mut rng);
            assert!((1..=5).contains(&count));
        }
    }

    #[test]
    fn last_order_is_capped_at_table_max() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        let mut rng = StdRng::seed_from_u64(1);
        // остаток 7 при максимуме 5 - отдаём ровно 5
        assert_eq!(sampler.controlled_sample(&mut rng, 7, 1), 5);
    }

    #[test]
    fn last_order_gets_exact_remainder_when_small() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sampler.controlled_sample(&mut rng, 3, 1), 3);
    }

    #[test]
    fn last_order_never_drops_below_one() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sampler.controlled_sample(&mut rng, 0, 1), 1);
    }

    #[test]
    fn table_switch_follows_remaining_average() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        // средний остаток 2.6 - равномерная таблица
        assert!((sampler.table_for_average(2.6).average() - 3.0).abs() < 1e-9);
        // 2.2 - умеренный сдвиг
        assert!((sampler.table_for_average(2.2).average() - 2.4).abs() < 1e-9);
        // 1.5 - базовая
        assert!((sampler.table_for_average(1.5).average() - 1.88).abs() < 1e-9);
    }

    #[test]
    fn controlled_sample_respects_bounds_across_quotas() {
        let sampler = SeatCountSampler::new(WeightTable::base());
        let mut rng = StdRng::seed_from_u64(99);
        for remaining in [0u64, 1, 10, 1000, 65_000] {
            for orders in [2u64, 10, 500] {
                let count = sampler.controlled_sample(&mut rng, remaining, orders);
                assert!((1..=5).contains(&count));
            }
        }
    }
}
