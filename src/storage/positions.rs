//! Liquidity position record storage

use anyhow::Result;
use chrono::Utc;
use std::fs::OpenOptions;
use std::io::Write;
use tracing::info;
use crate::types::PositionRecord;

pub fn save_position(record: &PositionRecord) -> Result<()> {
    let filename = format!("output/positions/positions_{}.jsonl",
        Utc::now().format("%Y-%m-%d"));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&filename)?;

    writeln!(file, "{}", serde_json::to_string(record)?)?;

    info!(
        position_id = %record.id,
        pool = %record.pool,
        status = ?record.status,
        "Saved liquidity position record"
    );

    Ok(())
}
