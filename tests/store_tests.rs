//! Record-store behavior through the library API: CSV round-trips, the
//! fail-open load path, and the write-failure policy.

use chrono::NaiveDate;
use paytrack::models::record::EventRecord;
use paytrack::store::blob::{BlobError, BlobResult, BlobStore, FsBlobStore};
use paytrack::store::records::{self, LoadOutcome, RecordStore};
use std::env;
use std::fs;
use std::path::PathBuf;

const KEY: &str = "event_records.csv";

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

fn temp_bucket(name: &str) -> PathBuf {
    let mut path = env::temp_dir();
    path.push(format!("{}_paytrack_store", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create bucket dir");
    path
}

fn sample_record(name: &str, date: &str, label: Option<&str>) -> EventRecord {
    EventRecord {
        name: name.to_string(),
        date: d(date),
        time: "1330".to_string(),
        duration_minutes: 30,
        pay_period: label.map(str::to_string),
        submitted_at: "2025-03-01 12:00:00".to_string(),
    }
}

#[test]
fn encode_decode_round_trip_preserves_everything() {
    let records = vec![
        sample_record("Lunch", "2025-03-01", Some("2025-02-16 - 2025-03-01")),
        sample_record("Stray, with comma", "2025-04-01", None),
        sample_record("Meeting", "2025-03-05", Some("2025-03-02 - 2025-03-15")),
    ];

    let bytes = records::encode(&records).unwrap();
    let reloaded = records::decode(&bytes).unwrap();

    assert_eq!(reloaded, records);
}

#[test]
fn encoded_table_has_header_then_rows_in_order() {
    let records = vec![
        sample_record("First", "2025-02-16", Some("2025-02-16 - 2025-03-01")),
        sample_record("Second", "2025-02-17", Some("2025-02-16 - 2025-03-01")),
    ];

    let bytes = records::encode(&records).unwrap();
    let text = String::from_utf8(bytes).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "Event_Name,Event_Date,Event_Time,Event_Duration,Pay_Period,Form_Submission_Timestamp"
    );
    assert!(lines[1].starts_with("First,2025-02-16,1330,30,"));
    assert!(lines[2].starts_with("Second,2025-02-17,1330,30,"));
}

#[test]
fn blank_pay_period_round_trips_as_absent() {
    let records = vec![sample_record("Stray", "2025-04-01", None)];

    let bytes = records::encode(&records).unwrap();
    let reloaded = records::decode(&bytes).unwrap();

    assert_eq!(reloaded[0].pay_period, None);
}

#[test]
fn open_on_missing_object_is_empty_with_missing_outcome() {
    let bucket = temp_bucket("missing");
    let blob = FsBlobStore::new(&bucket);

    let (store, outcome) = RecordStore::open(&blob, KEY);

    assert_eq!(outcome, LoadOutcome::Missing);
    assert!(store.is_empty());
}

#[test]
fn open_on_corrupt_object_is_empty_with_unreadable_outcome() {
    let bucket = temp_bucket("corrupt");
    fs::write(bucket.join(KEY), b"definitely not a csv table \x00\xff").unwrap();
    let blob = FsBlobStore::new(&bucket);

    let (store, outcome) = RecordStore::open(&blob, KEY);

    assert_eq!(outcome, LoadOutcome::Unreadable);
    assert!(store.is_empty());
}

#[test]
fn open_on_wrong_header_is_empty_with_unreadable_outcome() {
    let bucket = temp_bucket("wrong_header");
    fs::write(bucket.join(KEY), b"a,b,c\n1,2,3\n").unwrap();
    let blob = FsBlobStore::new(&bucket);

    let (store, outcome) = RecordStore::open(&blob, KEY);

    assert_eq!(outcome, LoadOutcome::Unreadable);
    assert!(store.is_empty());
}

#[test]
fn append_rewrites_full_object_and_reload_equals_memory() {
    let bucket = temp_bucket("append_reload");
    let blob = FsBlobStore::new(&bucket);

    let (mut store, _) = RecordStore::open(&blob, KEY);
    for i in 0..5 {
        store
            .append(sample_record(
                &format!("Event {}", i),
                "2025-02-20",
                Some("2025-02-16 - 2025-03-01"),
            ))
            .unwrap();
    }

    // header + 5 data rows, in submission order
    let text = fs::read_to_string(bucket.join(KEY)).unwrap();
    assert_eq!(text.lines().count(), 6);

    // a fresh hydration (simulated restart) sees the same table
    let (reloaded, outcome) = RecordStore::open(&blob, KEY);
    assert_eq!(outcome, LoadOutcome::Loaded(5));
    assert_eq!(reloaded.records(), store.records());
}

#[test]
fn get_returns_not_found_for_absent_key() {
    let bucket = temp_bucket("not_found");
    let blob = FsBlobStore::new(&bucket);

    assert!(matches!(blob.get("nope.csv"), Err(BlobError::NotFound(_))));
}

#[test]
fn put_overwrites_prior_content() {
    let bucket = temp_bucket("overwrite");
    let blob = FsBlobStore::new(&bucket);

    blob.put(KEY, b"old content").unwrap();
    blob.put(KEY, b"new").unwrap();

    assert_eq!(blob.get(KEY).unwrap(), b"new");
}

/// Blob store whose writes always fail, for exercising the append policy.
struct BrokenPut;

impl BlobStore for BrokenPut {
    fn get(&self, key: &str) -> BlobResult<Vec<u8>> {
        Err(BlobError::NotFound(key.to_string()))
    }

    fn put(&self, _key: &str, _bytes: &[u8]) -> BlobResult<()> {
        Err(BlobError::Io(std::io::Error::other("backend down")))
    }
}

#[test]
fn failed_write_is_surfaced_and_memory_append_is_kept() {
    let blob = BrokenPut;
    let (mut store, _) = RecordStore::open(&blob, KEY);

    let result = store.append(sample_record("Doomed", "2025-02-20", None));

    // the storage error reaches the caller, the in-memory row stays
    assert!(result.is_err());
    assert_eq!(store.len(), 1);
}
