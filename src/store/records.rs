//! Event record store: owns the in-memory event table, hydrates it from the
//! blob store once per process, and rewrites the whole CSV object after every
//! append. No partial or streaming writes.

use crate::errors::{AppError, AppResult};
use crate::models::record::EventRecord;
use crate::store::blob::{BlobError, BlobStore};
use crate::utils::date;
use csv::{ReaderBuilder, WriterBuilder};

/// Column order of the persisted table. The header row must match exactly
/// for a stored object to be considered readable.
pub const CSV_HEADER: [&str; 6] = [
    "Event_Name",
    "Event_Date",
    "Event_Time",
    "Event_Duration",
    "Pay_Period",
    "Form_Submission_Timestamp",
];

/// How hydration went. The table is empty in all but the `Loaded` case, but
/// callers (and tests) can tell a first run from a broken one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Object existed and decoded cleanly; holds the row count.
    Loaded(usize),
    /// No object under the configured key (first run).
    Missing,
    /// Object existed but could not be read or decoded.
    Unreadable,
}

/// In-memory event table plus its synchronization with the blob store.
/// Append-only: records are never mutated or deleted, insertion order is
/// submission order.
pub struct RecordStore<'a> {
    blob: &'a dyn BlobStore,
    key: String,
    records: Vec<EventRecord>,
}

impl<'a> RecordStore<'a> {
    /// Hydrate the table from the configured object. Fail-open: a missing,
    /// unreadable, or undecodable object yields an empty table instead of an
    /// error, and the returned [`LoadOutcome`] says which case it was.
    pub fn open(blob: &'a dyn BlobStore, key: &str) -> (Self, LoadOutcome) {
        let (records, outcome) = match blob.get(key) {
            Ok(bytes) => match decode(&bytes) {
                Ok(records) => {
                    let n = records.len();
                    (records, LoadOutcome::Loaded(n))
                }
                Err(_) => (Vec::new(), LoadOutcome::Unreadable),
            },
            Err(BlobError::NotFound(_)) => (Vec::new(), LoadOutcome::Missing),
            Err(_) => (Vec::new(), LoadOutcome::Unreadable),
        };

        (
            Self {
                blob,
                key: key.to_string(),
                records,
            },
            outcome,
        )
    }

    /// Read-only snapshot for rendering. No filtering, sorting, or pagination.
    pub fn records(&self) -> &[EventRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record and rewrite the full object under the configured key.
    /// If the write fails the in-memory append is kept and the storage error
    /// is propagated to the caller (see DESIGN.md for the policy).
    pub fn append(&mut self, record: EventRecord) -> AppResult<()> {
        self.records.push(record);

        let bytes = encode(&self.records)?;
        self.blob
            .put(&self.key, &bytes)
            .map_err(|e| AppError::Storage(e.to_string()))?;

        Ok(())
    }
}

/// Serialize the whole table: header row plus one row per record, in order.
pub fn encode(records: &[EventRecord]) -> AppResult<Vec<u8>> {
    let mut wtr = WriterBuilder::new().from_writer(Vec::new());

    wtr.write_record(CSV_HEADER)?;

    for rec in records {
        wtr.write_record(&[
            rec.name.clone(),
            rec.date_str(),
            rec.time.clone(),
            rec.duration_minutes.to_string(),
            rec.pay_period_str().to_string(),
            rec.submitted_at.clone(),
        ])?;
    }

    wtr.flush().map_err(AppError::Io)?;
    wtr.into_inner()
        .map_err(|e| AppError::Other(e.to_string()))
}

/// Parse a stored object back into records. Any deviation from the expected
/// schema (wrong header, bad row shape, unparsable date or duration) is an
/// error; the caller downgrades it to an empty table.
pub fn decode(bytes: &[u8]) -> AppResult<Vec<EventRecord>> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(bytes);

    let header = rdr.headers()?.clone();
    if header.iter().ne(CSV_HEADER) {
        return Err(AppError::Storage(format!(
            "unexpected header row: {:?}",
            header
        )));
    }

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        if row.len() != CSV_HEADER.len() {
            return Err(AppError::Storage(format!(
                "expected {} columns, found {}",
                CSV_HEADER.len(),
                row.len()
            )));
        }

        let date = date::parse_date(&row[1])
            .ok_or_else(|| AppError::InvalidDate(row[1].to_string()))?;
        let duration_minutes: i64 = row[3]
            .parse()
            .map_err(|_| AppError::InvalidDuration(row[3].to_string()))?;
        let pay_period = match &row[4] {
            "" => None,
            label => Some(label.to_string()),
        };

        records.push(EventRecord {
            name: row[0].to_string(),
            date,
            time: row[2].to_string(),
            duration_minutes,
            pay_period,
            submitted_at: row[5].to_string(),
        });
    }

    Ok(records)
}
