//! Route segments carrying structured state: CBOR, then URL-safe base64.

use std::{fmt::Display, str::FromStr};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use serde::{Deserialize, Serialize};


// The router needs Display, FromStr and Default on every segment type.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq)]
pub struct UrlParam<T>(pub T);

impl<T> UrlParam<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> From<T> for UrlParam<T> {
    fn from(value: T) -> Self {
        UrlParam(value)
    }
}

impl<T: Serialize> Display for UrlParam<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut serialized = Vec::new();
        if ciborium::into_writer(self, &mut serialized).is_ok() {
            write!(f, "{}", URL_SAFE.encode(serialized))?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub enum StateParseError {
    DecodeError(base64::DecodeError),
    CiboriumError(ciborium::de::Error<std::io::Error>),
}

impl std::fmt::Display for StateParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DecodeError(err) => write!(f, "Failed to decode base64: {}", err),
            Self::CiboriumError(err) => write!(f, "Failed to deserialize: {}", err),
        }
    }
}

impl std::error::Error for StateParseError {}

impl<T: for<'de> Deserialize<'de>> FromStr for UrlParam<T> {
    type Err = StateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let decoded = URL_SAFE
            .decode(s.as_bytes())
            .map_err(StateParseError::DecodeError)?;
        ciborium::from_reader(std::io::Cursor::new(decoded))
            .map_err(StateParseError::CiboriumError)
    }
}

#[cfg(test)]
mod tests {
    use common::extraction::ViewPrefs;

    use super::*;

    #[test]
    fn view_prefs_survive_the_url() {
        let prefs = ViewPrefs { is_dark: true, show_full_buttons: true };
        let segment = UrlParam::from(prefs).to_string();
        assert!(!segment.is_empty());
        assert!(segment.chars().all(|c| c.is_ascii_alphanumeric() || "-_=".contains(c)));
        let parsed: UrlParam<ViewPrefs> = segment.parse().unwrap();
        assert_eq!(parsed.into_inner(), prefs);
    }

    #[test]
    fn garbage_segments_are_rejected() {
        assert!(matches!("not base64!".parse::<UrlParam<ViewPrefs>>(), Err(StateParseError::DecodeError(_))));
        let not_cbor = URL_SAFE.encode([0xff, 0x00]);
        assert!(matches!(not_cbor.parse::<UrlParam<ViewPrefs>>(), Err(StateParseError::CiboriumError(_))));
    }
}
