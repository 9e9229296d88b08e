//! Read/modify/write cycle over a profile file.
//!
//! Lines are handled as raw bytes so that everything except the recognized
//! settings survives a save untouched, terminators included.

use crate::error::{Error, Result};
use crate::record::SettingsRecord;
use crate::setting::Setting;
use std::fs;
use std::path::Path;

/// Reads the three settings from the profile at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<SettingsRecord> {
    let path = path.as_ref();
    let content = read(path)?;
    let record = parse(&content, path)?;

    tracing::debug!("Loaded {:?} from {:?}", record, path);
    Ok(record)
}

/// Rewrites the recognized lines of the profile at `path` with the values in
/// `record`. The file is re-read here, so it may have changed since `load`.
pub fn save(path: impl AsRef<Path>, record: &SettingsRecord) -> Result<()> {
    let path = path.as_ref();
    let content = read(path)?;
    let patched = patch(&content, record)?;

    fs::write(path, &patched).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Saved settings to {:?}", path);
    Ok(())
}

fn read(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn lines(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    content.split_inclusive(|&b| b == b'\n')
}

/// Splits a line into its body and its terminator (`\n`, `\r\n` or nothing).
fn split_terminator(line: &[u8]) -> (&[u8], &[u8]) {
    let len = if line.ends_with(b"\r\n") {
        2
    } else if line.ends_with(b"\n") {
        1
    } else {
        0
    };
    line.split_at(line.len() - len)
}

/// Builds a record from profile content. `path` is only used in errors.
pub fn parse(content: &[u8], path: &Path) -> Result<SettingsRecord> {
    let mut record = SettingsRecord::default();

    for (index, line) in lines(content).enumerate() {
        let Some(setting) = Setting::match_line(line) else {
            continue;
        };
        let value = parse_value(line).map_err(|reason| Error::Parse {
            path: path.to_path_buf(),
            line: index + 1,
            key: setting.key(),
            reason,
        })?;

        tracing::trace!("Line {}: {} = {}", index + 1, setting, value);
        record.set(setting, value);
    }

    Ok(record)
}

/// The second whitespace separated token of `line`, as a float.
fn parse_value(line: &[u8]) -> std::result::Result<f64, String> {
    let (body, _) = split_terminator(line);
    let text = std::str::from_utf8(body).map_err(|e| format!("line is not UTF-8: {}", e))?;
    let token = text
        .split_whitespace()
        .nth(1)
        .ok_or_else(|| "missing value".to_string())?;

    token
        .parse::<f64>()
        .map_err(|e| format!("'{}' is not a number: {}", token, e))
}

/// Returns `content` with every recognized line regenerated from `record`.
pub fn patch(content: &[u8], record: &SettingsRecord) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(content.len());

    for line in lines(content) {
        let Some(setting) = Setting::match_line(line) else {
            out.extend_from_slice(line);
            continue;
        };
        let value = record.get(setting).ok_or(Error::MissingValue {
            key: setting.key(),
        })?;

        let (_, terminator) = split_terminator(line);
        out.extend_from_slice(setting_line(setting, value).as_bytes());
        out.extend_from_slice(if terminator.is_empty() { b"\n" } else { terminator });
    }

    Ok(out)
}

/// `<Key> <value>` without terminator.
pub fn setting_line(setting: Setting, value: f64) -> String {
    format!("{} {}", setting.key(), format_value(value))
}

/// Shortest round-tripping text, keeping a trailing `.0` on integral values.
/// Exponents are signed and at least two digits wide (`1e+16`, `1e-07`).
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }

    let text = format!("{:?}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{}e{}{:0>2}", mantissa, sign, digits)
        }
        None => text,
    }
}
