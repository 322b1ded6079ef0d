use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use crate::store::blob::FsBlobStore;
use crate::store::records::{LoadOutcome, RecordStore};
use crate::ui::messages;
use crate::utils::table::Table;

/// Render the whole event table, read-only, in submission order.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let blob = FsBlobStore::new(&cfg.bucket);
        let (store, outcome) = RecordStore::open(&blob, &cfg.key);

        if outcome == LoadOutcome::Unreadable {
            messages::warning(format!(
                "Could not read stored events under '{}'; showing an empty table.",
                cfg.key
            ));
        }

        if *json {
            let out = serde_json::to_string_pretty(store.records())
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if store.is_empty() {
            println!("No events recorded.");
            return Ok(());
        }

        println!("{}", render_records(store.records()));
        println!("{} event(s).", store.len());
    }

    Ok(())
}

fn render_records(records: &[EventRecord]) -> String {
    let mut table = Table::new(&["Name", "Date", "Time", "Duration", "Pay Period", "Submitted"]);

    for rec in records {
        table.add_row(vec![
            rec.name.clone(),
            rec.date_str(),
            rec.time.clone(),
            format!("{} min", rec.duration_minutes),
            rec.pay_period_str().to_string(),
            rec.submitted_at.clone(),
        ]);
    }

    table.render()
}
