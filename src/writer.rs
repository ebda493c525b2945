use std::path::Path;

use thiserror::Error;
use tokio::fs::File;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::models::BookingRecord;

#[derive(Debug, Error)]
pub enum WriterError {
    #[error("Не удалось записать файл корпуса: {0}")]
    Io(#[from] std::io::Error),
    #[error("Не удалось сериализовать запись: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Пишет корпус в NDJSON: одна запись - одна строка JSON
pub async fn write_corpus(
    path: impl AsRef<Path>,
    records: &[BookingRecord],
) -> Result<(), WriterError> {
    let file = File::create(path.as_ref()).await?;
    let mut out = BufWriter::new(file);

    for record in records {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');
        out.write_all(&line).await?;
    }

    out.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_serializes_with_expected_fields() {
        let record = BookingRecord {
            user_id: 1,
            zone: 12,
            row: 3,
            count: 2,
        };
        let line = serde_json::to_string(&record).unwrap();
        assert_eq!(line, r#"{"user_id":1,"zone":12,"row":3,"count":2}"#);
    }

    #[tokio::test]
    async fn writes_one_line_per_record() {
        let path = std::env::temp_dir().join(format!("loadgen_writer_{}.jsonl", std::process::id()));
        let records = vec![
            BookingRecord { user_id: 1, zone: 1, row: 1, count: 3 },
            BookingRecord { user_id: 2, zone: 2, row: 5, count: 1 },
        ];

        write_corpus(&path, &records).await.unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 2);
        for (line, record) in lines.iter().zip(&records) {
            let parsed: BookingRecord = serde_json::from_str(line).unwrap();
            assert_eq!(parsed.user_id, record.user_id);
            assert_eq!(parsed.zone, record.zone);
            assert_eq!(parsed.row, record.row);
            assert_eq!(parsed.count, record.count);
        }

        let _ = std::fs::remove_file(&path);
    }
}
