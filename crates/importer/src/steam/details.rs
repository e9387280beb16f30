//! Decoder for the packed `details` field of a feed entry.
//!
//! The field is a fixed-layout ASCII string of hex byte-pairs. Only two
//! offsets carry data this system uses; everything else is ignored.

use crate::error::{ImporterError, Result};

/// Loadout identifier: 2 hex digits at offset 0.
const LOADOUT_OFFSET: usize = 0;
/// Final level: 2 hex digits at offset 8.
const LEVEL_OFFSET: usize = 8;
const FIELD_WIDTH: usize = 2;

/// Run attributes recovered from one packed details string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunDetails {
    pub loadout_id: i32,
    pub level: i32,
}

pub fn decode(details: &str) -> Result<RunDetails> {
    let loadout_id = field_at(details, LOADOUT_OFFSET)?;
    let level = field_at(details, LEVEL_OFFSET)?;
    Ok(RunDetails { loadout_id, level })
}

fn field_at(details: &str, offset: usize) -> Result<i32> {
    let malformed = |reason: String| ImporterError::MalformedDetails {
        details: details.to_string(),
        reason,
    };

    let field = details
        .get(offset..offset + FIELD_WIDTH)
        .ok_or_else(|| malformed(format!("shorter than {} characters", offset + FIELD_WIDTH)))?;

    i32::from_str_radix(field, 16)
        .map_err(|_| malformed(format!("non-hex field {field:?} at offset {offset}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_loadout_and_level() {
        // loadout 5 at offset 0, six hex digits of padding, level 3 at offset 8
        let decoded = decode("0500000003deadbeef").unwrap();
        assert_eq!(decoded, RunDetails { loadout_id: 5, level: 3 });
    }

    #[test]
    fn test_decode_is_hexadecimal() {
        let decoded = decode("0a0000001f00000000").unwrap();
        assert_eq!(decoded.loadout_id, 10);
        assert_eq!(decoded.level, 31);
    }

    #[test]
    fn test_too_short_details_fail_loudly() {
        let err = decode("05000000").unwrap_err();
        assert!(matches!(err, ImporterError::MalformedDetails { .. }));
    }

    #[test]
    fn test_non_hex_details_fail_loudly() {
        let err = decode("zz00000003000000").unwrap_err();
        assert!(matches!(err, ImporterError::MalformedDetails { .. }));
    }
}
