//! Optional query parameters accepted by the resource accessors.

use url::form_urlencoded;

/// A single URL query parameter.
///
/// Options are forwarded verbatim: duplicate keys and empty values are kept
/// and left for the server to validate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryOption {
    key: String,
    value: String,
}

impl QueryOption {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Filters a resource to a whole day, `YYYY-MM-DD`.
    pub fn date(value: impl Into<String>) -> Self {
        Self::new("date", value)
    }

    /// Requests the readings in effect at an instant, `YYYY-MM-DDTHH:mm:ss`
    /// (Singapore time).
    pub fn date_time(value: impl Into<String>) -> Self {
        Self::new("date_time", value)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Form-encodes `options` in order. Returns `None` when there are none, so
/// the URL gets no query string at all.
pub fn to_query_string(options: &[QueryOption]) -> Option<String> {
    if options.is_empty() {
        return None;
    }
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for option in options {
        serializer.append_pair(&option.key, &option.value);
    }
    Some(serializer.finish())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_options_no_query() {
        assert_eq!(to_query_string(&[]), None);
    }

    #[test]
    fn date_option() {
        let q = to_query_string(&[QueryOption::new("date", "2020-01-01")]).unwrap();
        assert_eq!(q, "date=2020-01-01");
        assert_eq!(QueryOption::date("2020-01-01"), QueryOption::new("date", "2020-01-01"));
    }

    #[test]
    fn date_time_is_percent_encoded() {
        let q = to_query_string(&[QueryOption::date_time("2020-01-01T12:30:00")]).unwrap();
        assert_eq!(q, "date_time=2020-01-01T12%3A30%3A00");
    }

    #[test]
    fn order_and_duplicates_are_preserved() {
        let q = to_query_string(&[
            QueryOption::new("b", "2"),
            QueryOption::new("a", "1"),
            QueryOption::new("b", "3"),
        ])
        .unwrap();
        assert_eq!(q, "b=2&a=1&b=3");
    }

    #[test]
    fn reserved_characters_and_empty_values() {
        let q = to_query_string(&[QueryOption::new("q", "a&b c"), QueryOption::new("empty", "")])
            .unwrap();
        assert_eq!(q, "q=a%26b+c&empty=");
    }
}
