//! Environment variable validation
//!
//! An invalid `MUWANX_*` value never aborts a command: it is reported with
//! the nearest accepted value, and the setting keeps its default.

use std::io::Write;

/// Accepted values for one environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
    expected: Option<&'a str>,
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
            expected: None,
        }
    }

    /// Describe accepted values that cannot be listed (e.g. a port range)
    pub fn with_expected(mut self, expected: &'a str) -> Self {
        self.expected = Some(expected);
        self
    }

    /// Parse `value`, or warn to `writer` and return `default`
    pub fn parse_or_warn<T, W: Write>(
        &self,
        value: &str,
        parser: impl Fn(&str) -> Option<T>,
        default: T,
        writer: &mut W,
    ) -> T {
        if let Some(parsed) = parser(value) {
            return parsed;
        }

        let _ = write!(writer, "Warning: Invalid {} value '{}'", self.var_name, value);
        match closest(&value.to_lowercase(), self.valid_values) {
            Some(near) if near != value => {
                let _ = writeln!(writer, ". Did you mean '{}'?", near);
            }
            _ => {
                let _ = writeln!(writer);
            }
        }
        if let Some(expected) = self.expected {
            let _ = writeln!(writer, "Expected: {}", expected);
        }
        if !self.valid_values.is_empty() {
            let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        }
        default
    }
}

/// Candidate within two edits of `input`, earliest first on ties
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .map(|&candidate| (candidate, levenshtein(input, candidate)))
        .filter(|&(_, dist)| dist <= 2)
        .min_by_key(|&(_, dist)| dist)
        .map(|(candidate, _)| candidate)
}

/// Edit distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    let b = b.as_bytes();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, &ca) in a.as_bytes().iter().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if ca == cb {
                diagonal
            } else {
                1 + diagonal.min(above).min(row[j])
            };
            diagonal = above;
        }
    }

    row[b.len()]
}
