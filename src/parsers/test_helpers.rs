use crate::parsers::ParseOutcome;

/// Assertion helpers for parse outcomes, used in doc tests and unit tests.
pub trait UnwrapValue {
    /// Whether the outcome is a term that renders as `expected`.
    fn is_value(&self, expected: &str) -> bool;

    /// Whether the outcome is the empty-input result.
    fn is_no_term(&self) -> bool;
}

impl UnwrapValue for ParseOutcome {
    fn is_value(&self, expected: &str) -> bool {
        matches!(self, Ok(Some(term)) if term.to_string() == expected)
    }

    fn is_no_term(&self) -> bool {
        matches!(self, Ok(None))
    }
}

#[cfg(test)]
pub(crate) trait Match {
    /// Whether the outcome renders as `expected` and parsing the rendering
    /// again gives an equal term.
    fn is_exactly(&self, expected: &str) -> bool;
}

#[cfg(test)]
impl Match for ParseOutcome {
    fn is_exactly(&self, expected: &str) -> bool {
        let Ok(Some(term)) = self else {
            return false;
        };
        let rendered = term.to_string();
        rendered == expected
            && matches!(crate::parsers::parse_term(&rendered), Ok(Some(again)) if again == *term)
    }
}
