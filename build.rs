//! Stamps the binary with the commit and build time shown by `--version`.
//!
//! `THEMEPORT_BUILD_GIT_HASH` and `THEMEPORT_BUILD_TIMESTAMP` override both
//! values. Otherwise the commit comes from `git describe` (suffixed `-dirty`
//! for uncommitted changes) and the time from `SOURCE_DATE_EPOCH` or the
//! current clock, formatted as UTC RFC 3339.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const HASH_VAR: &str = "THEMEPORT_BUILD_GIT_HASH";
const TIME_VAR: &str = "THEMEPORT_BUILD_TIMESTAMP";
const EPOCH_VAR: &str = "SOURCE_DATE_EPOCH";
const UNKNOWN: &str = "unknown";

fn main() {
    // HEAD moves on checkout; the index changes on commit and staging.
    for path in [".git/HEAD", ".git/index"] {
        println!("cargo:rerun-if-changed={path}");
    }
    for var in [HASH_VAR, TIME_VAR, EPOCH_VAR] {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let commit = env_override(HASH_VAR)
        .or_else(describe_commit)
        .unwrap_or_else(|| UNKNOWN.to_string());
    let built = env_override(TIME_VAR).unwrap_or_else(|| rfc3339_utc(build_epoch_secs()));

    println!("cargo:rustc-env={HASH_VAR}={commit}");
    println!("cargo:rustc-env={TIME_VAR}={built}");
}

fn env_override(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

fn describe_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--abbrev=12"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    let described = text.trim();
    (!described.is_empty()).then(|| described.to_string())
}

fn build_epoch_secs() -> u64 {
    if let Some(epoch) = env_override(EPOCH_VAR).and_then(|v| v.parse().ok()) {
        return epoch;
    }
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or(0)
}

/// `YYYY-MM-DDTHH:MM:SSZ` for a Unix timestamp.
fn rfc3339_utc(secs: u64) -> String {
    let days = (secs / 86_400) as i64;
    let of_day = secs % 86_400;
    let (year, month, day) = civil_from_days(days);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}Z",
        of_day / 3600,
        of_day % 3600 / 60,
        of_day % 60
    )
}

/// Proleptic Gregorian date for a day count since 1970-01-01.
fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let shifted = days + 719_468;
    let era = shifted.div_euclid(146_097);
    let day_of_era = shifted.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let month_index = (5 * day_of_year + 2) / 153;
    let day = day_of_year - (153 * month_index + 2) / 5 + 1;
    let month = if month_index < 10 {
        month_index + 3
    } else {
        month_index - 9
    };
    let year = year_of_era + era * 400 + i64::from(month <= 2);
    (year, month, day)
}
