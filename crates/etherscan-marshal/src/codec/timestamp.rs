use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::Value;

use super::{expect_str, strip_hex_prefix};
use crate::{Annotation, UnmarshalError};

/// Calendar date layout used by the daily statistics endpoints.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Width of the big-endian word carrying hex timestamps.
const WORD_SIZE: usize = 32;

/// Wire encodings of a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampCodec {
    /// Unix epoch seconds as decimal digits inside a JSON string.
    Unix,
    /// Epoch seconds as a big-endian word of up to 32 bytes, `0x`-prefixed.
    Hex,
    /// A `YYYY-MM-DD` calendar date at midnight UTC.
    Date,
}

impl TimestampCodec {
    /// `hex` takes precedence over `date`.
    pub fn select(ann: &Annotation<'_>) -> Self {
        if ann.hex {
            TimestampCodec::Hex
        } else if ann.date {
            TimestampCodec::Date
        } else {
            TimestampCodec::Unix
        }
    }

    /// Pre-epoch instants clamp to zero in the hex form.
    pub fn encode(self, value: &DateTime<Utc>) -> String {
        match self {
            TimestampCodec::Unix => value.timestamp().to_string(),
            TimestampCodec::Hex => format!("0x{:064x}", value.timestamp().max(0)),
            TimestampCodec::Date => value.format(DATE_FORMAT).to_string(),
        }
    }

    /// Decode a raw timestamp value.
    pub fn decode(self, raw: &Value) -> Result<DateTime<Utc>, UnmarshalError> {
        let s = expect_str(raw)?;
        match self {
            TimestampCodec::Unix => {
                let digits = s.strip_prefix('-').unwrap_or(s);
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(UnmarshalError::InvalidInteger(s.to_string()));
                }
                let seconds = s
                    .parse::<i64>()
                    .map_err(|_| UnmarshalError::InvalidInteger(s.to_string()))?;
                from_seconds(seconds)
            }
            TimestampCodec::Hex => {
                let word = decode_word(strip_hex_prefix(s)?)?;
                let (high, low) = word.split_at(WORD_SIZE - 8);
                let mut seconds = [0u8; 8];
                seconds.copy_from_slice(low);
                let seconds = u64::from_be_bytes(seconds);
                if high.iter().any(|b| *b != 0) || seconds > i64::MAX as u64 {
                    return Err(UnmarshalError::InvalidTimestamp(format!(
                        "{s} is out of range"
                    )));
                }
                from_seconds(seconds as i64)
            }
            TimestampCodec::Date => {
                let date = NaiveDate::parse_from_str(s, DATE_FORMAT)
                    .map_err(|_| UnmarshalError::InvalidDate(s.to_string()))?;
                let midnight = date
                    .and_hms_opt(0, 0, 0)
                    .ok_or_else(|| UnmarshalError::InvalidDate(s.to_string()))?;
                Ok(Utc.from_utc_datetime(&midnight))
            }
        }
    }
}

/// Left-pad hex digits into a 32-byte big-endian word.
fn decode_word(digits: &str) -> Result<[u8; WORD_SIZE], UnmarshalError> {
    if digits.len() > WORD_SIZE * 2 {
        return Err(UnmarshalError::InvalidLength {
            expected: WORD_SIZE,
            got: digits.len().div_ceil(2),
        });
    }
    let padded = format!("{digits:0>width$}", width = WORD_SIZE * 2);
    let mut word = [0u8; WORD_SIZE];
    hex::decode_to_slice(&padded, &mut word)?;
    Ok(word)
}

fn from_seconds(seconds: i64) -> Result<DateTime<Utc>, UnmarshalError> {
    Utc.timestamp_opt(seconds, 0)
        .single()
        .ok_or_else(|| UnmarshalError::InvalidTimestamp(format!("{seconds} seconds is out of range")))
}
