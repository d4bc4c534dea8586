use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::title::value_objects::TitleId;
use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

/// Keyset position in the freshness-ordered title listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleListCursor {
    pub last_content_added: DateTime<Utc>,
    pub title_id: TitleId,
}

impl TitleListCursor {
    pub fn from_parts(last_content_added: DateTime<Utc>, title_id: TitleId) -> Self {
        Self {
            last_content_added,
            title_id,
        }
    }

    pub fn encode(&self) -> String {
        let raw = format!(
            "{}|{}",
            self.last_content_added.to_rfc3339(),
            i64::from(self.title_id)
        );
        URL_SAFE_NO_PAD.encode(raw.as_bytes())
    }

    pub fn decode(token: &str) -> DomainResult<Self> {
        let invalid = || DomainError::Validation("invalid cursor token".into());
        let bytes = URL_SAFE_NO_PAD.decode(token).map_err(|_| invalid())?;
        let raw = String::from_utf8(bytes).map_err(|_| invalid())?;
        let (at, id) = raw.split_once('|').ok_or_else(invalid)?;
        let last_content_added = DateTime::parse_from_rfc3339(at)
            .map_err(|_| invalid())?
            .with_timezone(&Utc);
        let id = id.parse::<i64>().map_err(|_| invalid())?;
        Ok(Self::from_parts(last_content_added, TitleId::new(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn cursor_survives_encoding() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
            + chrono::Duration::microseconds(42);
        let cursor = TitleListCursor::from_parts(at, TitleId::new(7).unwrap());
        let decoded = TitleListCursor::decode(&cursor.encode()).unwrap();
        assert_eq!(decoded, cursor);
    }

    #[test]
    fn garbage_cursor_is_a_validation_error() {
        assert!(matches!(
            TitleListCursor::decode("not-a-cursor"),
            Err(DomainError::Validation(_))
        ));
    }
}
