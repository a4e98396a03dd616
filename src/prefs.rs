//! Preference loading
//!
//! Cache geometry is configurable through named integer settings with
//! dotted keys, e.g. `meter.cache.dynamic.size`. Sources in precedence
//! order:
//!
//! 1. Environment variable (key upper-cased, dots become underscores:
//!    `METER_CACHE_DYNAMIC_SIZE`);
//! 2. An optional TOML file named by the `DIMENSIONAL_PREFS` environment
//!    variable, read once on first use;
//! 3. The caller-supplied default.
//!
//! A missing or malformed setting never fails the caller: it is reported
//! through `tracing` and replaced by the default.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::sync::OnceLock;

use thiserror::Error;

/// Environment variable naming the preferences file.
pub const PREFS_FILE_VAR: &str = "DIMENSIONAL_PREFS";

#[derive(Debug, Error)]
enum PrefsError {
    #[error("failed to read preferences file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse preferences file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

static TABLE: OnceLock<BTreeMap<String, i64>> = OnceLock::new();

/// Look up an integer preference, falling back to `default` when the key
/// is absent or its value does not parse.
pub fn load_int(key: &str, default: i64) -> i64 {
    if let Some(value) = env_override(key) {
        return value;
    }
    table().get(key).copied().unwrap_or(default)
}

fn table() -> &'static BTreeMap<String, i64> {
    TABLE.get_or_init(|| {
        let Some(path) = std::env::var_os(PREFS_FILE_VAR) else {
            return BTreeMap::new();
        };
        match read_table(&path) {
            Ok(table) => table,
            Err(err) => {
                tracing::warn!("ignoring preferences file: {err}");
                BTreeMap::new()
            }
        }
    })
}

fn read_table(path: &OsStr) -> Result<BTreeMap<String, i64>, PrefsError> {
    let display = path.to_string_lossy().into_owned();
    let text = std::fs::read_to_string(path).map_err(|source| PrefsError::Read {
        path: display.clone(),
        source,
    })?;
    let value: toml::Value = toml::from_str(&text).map_err(|source| PrefsError::Parse {
        path: display,
        source,
    })?;
    let mut flat = BTreeMap::new();
    flatten("", &value, &mut flat);
    Ok(flat)
}

/// Collapse nested TOML tables into dotted keys, keeping integer leaves.
fn flatten(prefix: &str, value: &toml::Value, out: &mut BTreeMap<String, i64>) {
    match value {
        toml::Value::Table(table) => {
            for (key, value) in table {
                let key = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&key, value, out);
            }
        }
        toml::Value::Integer(i) => {
            out.insert(prefix.to_string(), *i);
        }
        _ => {
            tracing::warn!("ignoring non-integer preference {prefix}");
        }
    }
}

fn env_override(key: &str) -> Option<i64> {
    let env_key: String = key
        .chars()
        .map(|c| if c == '.' { '_' } else { c.to_ascii_uppercase() })
        .collect();
    let raw = std::env::var(env_key).ok()?;
    parse_int(key, &raw)
}

fn parse_int(key: &str, raw: &str) -> Option<i64> {
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(err) => {
            tracing::warn!("malformed preference {key}={raw:?} ({err}), using default");
            None
        }
    }
}
