use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Blob-store bucket (a directory for the filesystem backend).
    pub bucket: String,
    /// Object key of the persisted event table inside the bucket.
    #[serde(default = "default_key")]
    pub key: String,
    /// Start date of pay period 0, "YYYY-MM-DD".
    #[serde(default = "default_anchor_date")]
    pub anchor_date: String,
    /// How many 14-day periods to generate from the anchor. The table is
    /// never extended at runtime; dates past the last period stay unbucketed
    /// until this is raised.
    #[serde(default = "default_period_count")]
    pub period_count: usize,
}

fn default_key() -> String {
    "event_records.csv".to_string()
}
fn default_anchor_date() -> String {
    "2025-01-05".to_string()
}
fn default_period_count() -> usize {
    26
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bucket: Self::default_bucket().to_string_lossy().to_string(),
            key: default_key(),
            anchor_date: default_anchor_date(),
            period_count: default_period_count(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("paytrack")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".paytrack")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("paytrack.conf")
    }

    /// Default bucket directory for the filesystem blob store
    pub fn default_bucket() -> PathBuf {
        Self::config_dir().join("bucket")
    }

    /// Load configuration from file, or return defaults if not found.
    /// `PAYTRACK_BUCKET` and `PAYTRACK_KEY` override the file either way.
    pub fn load() -> Self {
        let path = Self::config_file();

        let mut cfg: Config = if path.exists() {
            let content = fs::read_to_string(&path).expect("❌ Failed to read configuration file");
            serde_yaml::from_str(&content).expect("❌ Failed to parse configuration file")
        } else {
            Config::default()
        };

        if let Ok(bucket) = env::var("PAYTRACK_BUCKET") {
            cfg.bucket = bucket;
        }
        if let Ok(key) = env::var("PAYTRACK_KEY") {
            cfg.key = key;
        }

        cfg
    }

    /// Parsed anchor date; a malformed value is a configuration error.
    pub fn anchor(&self) -> AppResult<NaiveDate> {
        date::parse_date(&self.anchor_date).ok_or_else(|| {
            AppError::Config(format!(
                "anchor_date '{}' is not a valid YYYY-MM-DD date",
                self.anchor_date
            ))
        })
    }

    /// Initialize configuration file and bucket directory
    pub fn init_all(custom_bucket: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // Bucket: user provided or default
        let bucket = if let Some(name) = custom_bucket {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            Self::default_bucket()
        };

        let config = Config {
            bucket: bucket.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config).expect("❌ Failed to serialize configuration");
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create the bucket directory if it does not exist
        fs::create_dir_all(&bucket)?;
        println!("✅ Bucket:      {:?}", bucket);

        Ok(())
    }
}
