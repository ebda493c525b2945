use serde::Deserialize;
use std::env;

// Главная структура конфигурации - контейнер для всех настроек генератора
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub app: AppConfig,
    pub venue: VenueConfig,
    pub generation: GenerationConfig,
    pub output: OutputConfig,
}

// Настройки приложения
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub rust_log: String,
}

// Геометрия зала: зоны, ряды, места в ряду
#[derive(Debug, Clone, Deserialize)]
pub struct VenueConfig {
    pub zones: u32,
    pub rows_per_zone: u32,
    pub seats_per_row: u32,
}

// Параметры генерации корпуса
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    pub target_total_seats: u64,
    pub success_ratio: f64,
    pub successful_seats_share: f64,
    pub max_placement_attempts: u32,
    pub biased_zone_attempts: u32,
    pub seed: Option<u64>,
}

// Куда писать готовый корпус
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub path: String,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "ticket_loadgen=info".to_string()),
            },
            venue: VenueConfig {
                zones: env::var("ZONES")
                    .unwrap_or_else(|_| "50".to_string())
                    .parse()
                    .expect("ZONES must be a valid number"),
                rows_per_zone: env::var("ROWS_PER_ZONE")
                    .unwrap_or_else(|_| "20".to_string())
                    .parse()
                    .expect("ROWS_PER_ZONE must be a valid number"),
                seats_per_row: env::var("SEATS_PER_ROW")
                    .unwrap_or_else(|_| "65".to_string())
                    .parse()
                    .expect("SEATS_PER_ROW must be a valid number"),
            },
            generation: GenerationConfig {
                target_total_seats: env::var("TARGET_TOTAL_SEATS")
                    .unwrap_or_else(|_| "65000".to_string())
                    .parse()
                    .expect("TARGET_TOTAL_SEATS must be a valid number"),
                success_ratio: env::var("SUCCESS_RATIO")
                    .unwrap_or_else(|_| "0.75".to_string())
                    .parse()
                    .expect("SUCCESS_RATIO must be a valid number"),
                successful_seats_share: env::var("SUCCESSFUL_SEATS_SHARE")
                    .unwrap_or_else(|_| "0.9".to_string())
                    .parse()
                    .expect("SUCCESSFUL_SEATS_SHARE must be a valid number"),
                max_placement_attempts: env::var("MAX_PLACEMENT_ATTEMPTS")
                    .unwrap_or_else(|_| "200".to_string())
                    .parse()
                    .expect("MAX_PLACEMENT_ATTEMPTS must be a valid number"),
                biased_zone_attempts: env::var("BIASED_ZONE_ATTEMPTS")
                    .unwrap_or_else(|_| "100".to_string())
                    .parse()
                    .expect("BIASED_ZONE_ATTEMPTS must be a valid number"),
                // SEED не задан - каждый запуск даёт новый корпус
                seed: env::var("SEED")
                    .ok()
                    .map(|s| s.parse().expect("SEED must be a valid number")),
            },
            output: OutputConfig {
                path: env::var("OUTPUT_PATH").unwrap_or_else(|_| "testdata.jsonl".to_string()),
            },
        }
    }
}
