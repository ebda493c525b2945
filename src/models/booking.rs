use serde::{Deserialize, Serialize};

// Итоговая запись корпуса - одна строка testdata.jsonl.
// Индексы мест наружу не выходят, это внутренняя деталь размещения.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub user_id: u64,
    pub zone: u32,
    pub row: u32,
    pub count: u32,
}
