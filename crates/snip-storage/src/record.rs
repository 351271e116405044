use serde::{Deserialize, Serialize};
use snip_core::ShortId;

/// A persisted unit of the durable log: one identifier-to-URL mapping.
///
/// Records are encoded as one JSON object per line. JSON escapes any
/// line terminator inside the URL, so every JSON-representable string
/// round-trips through the log intact. Field names are stable within a
/// deployment; the decoder rejects anything it cannot parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: ShortId,
    pub url: String,
}

impl Record {
    pub fn new(id: ShortId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
        }
    }

    /// Encodes the record as a single log line, without the trailing
    /// newline.
    pub fn to_line(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Decodes a record from a single log line.
    pub fn from_line(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip() {
        let record = Record::new(ShortId::new(1), "https://stackoverflow.com/");
        let line = record.to_line().unwrap();
        assert_eq!(Record::from_line(&line).unwrap(), record);
    }

    #[test]
    fn encodes_as_flat_json_object() {
        let record = Record::new(ShortId::new(42), "https://hh.ru/");
        assert_eq!(
            record.to_line().unwrap(),
            r#"{"id":42,"url":"https://hh.ru/"}"#
        );
    }

    #[test]
    fn url_with_embedded_newline_stays_on_one_line() {
        let record = Record::new(ShortId::new(1), "not a url\nbut stored anyway");
        let line = record.to_line().unwrap();
        assert!(!line.contains('\n'));
        assert_eq!(Record::from_line(&line).unwrap(), record);
    }

    #[test]
    fn rejects_malformed_line() {
        assert!(Record::from_line("not json").is_err());
        assert!(Record::from_line(r#"{"id":"one","url":"x"}"#).is_err());
        assert!(Record::from_line("").is_err());
    }
}
