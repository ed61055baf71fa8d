//! Purpose: Provide the runtime JSON decode entrypoints for records.
//! Exports: `from_slice`, `from_str`, `ParseFailureCategory`, `categorize_error`, `hint_for_error`.
//! Role: Parser boundary; every response/request body read goes through here.
//! Invariants: The whole input must be a single JSON value (trailing data is an error).
//! Invariants: Decoding is driven by `Unmarshall`, so a non-object top level yields `None`.
//! Notes: Error mapping to `Error` is done by callsites so operation context stays explicit.

use crate::core::unmarshal::Unmarshall;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseFailureCategory {
    Syntax,
    Data,
    Eof,
    Io,
}

impl ParseFailureCategory {
    pub fn label(self) -> &'static str {
        match self {
            ParseFailureCategory::Syntax => "syntax",
            ParseFailureCategory::Data => "data",
            ParseFailureCategory::Eof => "eof",
            ParseFailureCategory::Io => "io",
        }
    }
}

pub fn from_slice<T: Unmarshall>(input: &[u8]) -> Result<Option<T>, serde_json::Error> {
    let mut deserializer = serde_json::Deserializer::from_slice(input);
    let value = T::unmarshall(&mut deserializer)?;
    deserializer.end()?;
    Ok(value)
}

pub fn from_str<T: Unmarshall>(input: &str) -> Result<Option<T>, serde_json::Error> {
    from_slice(input.as_bytes())
}

pub fn categorize_error(err: &serde_json::Error) -> ParseFailureCategory {
    match err.classify() {
        serde_json::error::Category::Syntax => ParseFailureCategory::Syntax,
        serde_json::error::Category::Data => ParseFailureCategory::Data,
        serde_json::error::Category::Eof => ParseFailureCategory::Eof,
        serde_json::error::Category::Io => ParseFailureCategory::Io,
    }
}

pub fn hint_for_error(err: &serde_json::Error, context: &str) -> String {
    format!(
        "parse category: {}; line {} column {}; context: {context}",
        categorize_error(err).label(),
        err.line(),
        err.column()
    )
}

#[cfg(test)]
mod tests {
    use super::{ParseFailureCategory, categorize_error, from_str};

    #[test]
    fn trailing_data_is_rejected() {
        let err = from_str::<String>(r#""a" "b""#).expect_err("trailing");
        assert_eq!(categorize_error(&err), ParseFailureCategory::Syntax);
    }

    #[test]
    fn top_level_null_is_absent() {
        assert_eq!(from_str::<String>("null").expect("null"), None);
    }
}
