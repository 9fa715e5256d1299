use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SEGMENT_LENGTH, MAX_SEGMENT_LENGTH};
use crate::error::{Result, SieveError};

/// Tuning knobs for an [`IncrementalSieve`](crate::IncrementalSieve).
///
/// Extending to a large bound walks the new range in windows of `segment_length` integers. Every
/// window resumes the per-base cursors left by the one before it, exactly as separate calls do, so
/// the window size changes memory use but never results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SieveConfig {
    pub segment_length: u64,
}

impl Default for SieveConfig {
    fn default() -> SieveConfig {
        SieveConfig {
            segment_length: DEFAULT_SEGMENT_LENGTH,
        }
    }
}

impl SieveConfig {
    pub fn with_segment_length(segment_length: u64) -> SieveConfig {
        SieveConfig { segment_length }
    }

    pub fn validate(&self) -> Result<()> {
        if self.segment_length == 0 {
            return Err(SieveError::ZeroSegmentLength);
        }
        if self.segment_length > MAX_SEGMENT_LENGTH {
            return Err(SieveError::SegmentLengthTooLarge {
                length: self.segment_length,
                max: MAX_SEGMENT_LENGTH,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_valid() {
        assert_eq!(Ok(()), SieveConfig::default().validate());
        assert_eq!(Ok(()), SieveConfig::with_segment_length(1).validate());
        assert_eq!(
            Ok(()),
            SieveConfig::with_segment_length(MAX_SEGMENT_LENGTH).validate()
        );
    }

    #[test]
    fn invalid_segment_length_rejected() {
        assert_eq!(
            Err(SieveError::ZeroSegmentLength),
            SieveConfig::with_segment_length(0).validate()
        );
        assert_eq!(
            Err(SieveError::SegmentLengthTooLarge {
                length: MAX_SEGMENT_LENGTH + 1,
                max: MAX_SEGMENT_LENGTH,
            }),
            SieveConfig::with_segment_length(MAX_SEGMENT_LENGTH + 1).validate()
        );
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SieveConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(SieveConfig::default(), config);

        let config: SieveConfig = serde_json::from_str(r#"{"segment_length": 4096}"#).unwrap();
        assert_eq!(4096, config.segment_length);
    }
}
