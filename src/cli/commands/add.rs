use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{RawSubmission, SubmitLogic};
use crate::errors::AppResult;
use crate::models::period::PayPeriodTable;
use crate::store::blob::FsBlobStore;
use crate::store::records::{LoadOutcome, RecordStore};
use crate::ui::messages;

/// Record a new event: validate, bucket, append, persist.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        name,
        time,
        duration,
    } = cmd
    {
        //
        // 1. Generate the pay-period table from config
        //
        let periods = PayPeriodTable::generate(cfg.anchor()?, cfg.period_count)?;

        //
        // 2. Hydrate the event table from the blob store
        //
        let blob = FsBlobStore::new(&cfg.bucket);
        let (mut store, outcome) = RecordStore::open(&blob, &cfg.key);
        if outcome == LoadOutcome::Unreadable {
            messages::warning(format!(
                "Could not read stored events under '{}'; starting from an empty table.",
                cfg.key
            ));
        }

        //
        // 3. Execute logic
        //
        let raw = RawSubmission {
            name: name.clone(),
            date: date.clone(),
            time: time.clone(),
            duration: duration.clone(),
        };

        let record = SubmitLogic::apply(&mut store, &periods, &raw)?;

        match &record.pay_period {
            Some(label) => messages::success(format!(
                "Recorded '{}' on {} (pay period {}).",
                record.name,
                record.date_str(),
                label
            )),
            None => messages::success(format!(
                "Recorded '{}' on {} (outside every pay period).",
                record.name,
                record.date_str()
            )),
        }
    }

    Ok(())
}
