//! The TOTAL_FORMS counter.
//!
//! The counter lives as text in a hidden input. It is read with the same
//! lenient integer parsing the browser applies to form values, so a garbled
//! field yields [`FormCount::NaN`] instead of an error and the corruption
//! propagates into every later row index.

use std::fmt;

/// A counter value as read from the TOTAL_FORMS field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormCount {
    Number(i64),
    NaN,
}

impl FormCount {
    /// Parse with `parseInt` rules: leading whitespace is skipped, an
    /// optional sign and `0x` prefix are honoured, and the longest run of
    /// digits is taken. Anything after the digits is ignored.
    pub fn parse(text: &str) -> Self {
        let rest = text.trim_start_matches(is_js_whitespace);

        let (negative, rest) = match rest.as_bytes().first() {
            Some(b'-') => (true, &rest[1..]),
            Some(b'+') => (false, &rest[1..]),
            _ => (false, rest),
        };

        let (radix, rest) = if rest.starts_with("0x") || rest.starts_with("0X") {
            (16, &rest[2..])
        } else {
            (10, rest)
        };

        let digits: &str = {
            let end = rest
                .find(|c: char| !c.is_digit(radix))
                .unwrap_or(rest.len());
            &rest[..end]
        };
        if digits.is_empty() {
            return FormCount::NaN;
        }

        let mut value: i64 = 0;
        for c in digits.chars() {
            let Some(d) = c.to_digit(radix) else {
                return FormCount::NaN;
            };
            value = match value
                .checked_mul(i64::from(radix))
                .and_then(|v| v.checked_add(i64::from(d)))
            {
                Some(v) => v,
                None => return FormCount::NaN,
            };
        }

        FormCount::Number(if negative { -value } else { value })
    }

    /// The value written back after one row is appended.
    pub fn next(self) -> Self {
        match self {
            FormCount::Number(n) => n.checked_add(1).map_or(FormCount::NaN, FormCount::Number),
            FormCount::NaN => FormCount::NaN,
        }
    }

    pub fn is_nan(self) -> bool {
        matches!(self, FormCount::NaN)
    }
}

/// WhiteSpace and LineTerminator as the browser's number parsing defines them.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{0009}'
            | '\u{000A}'
            | '\u{000B}'
            | '\u{000C}'
            | '\u{000D}'
            | '\u{0020}'
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

impl fmt::Display for FormCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormCount::Number(n) => write!(f, "{n}"),
            FormCount::NaN => f.write_str("NaN"),
        }
    }
}

/// Counter state owned by a host: the raw text of the TOTAL_FORMS field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalForms {
    raw: String,
}

impl TotalForms {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn read(&self) -> FormCount {
        FormCount::parse(&self.raw)
    }

    /// Write back `read() + 1` and return the value that was read.
    pub fn advance(&mut self) -> FormCount {
        let current = self.read();
        self.raw = current.next().to_string();
        current
    }
}

impl Default for TotalForms {
    fn default() -> Self {
        Self::new("0")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_integers() {
        assert_eq!(FormCount::parse("0"), FormCount::Number(0));
        assert_eq!(FormCount::parse("2"), FormCount::Number(2));
        assert_eq!(FormCount::parse("  17\n"), FormCount::Number(17));
        assert_eq!(FormCount::parse("+5"), FormCount::Number(5));
        assert_eq!(FormCount::parse("-3"), FormCount::Number(-3));
    }

    #[test]
    fn test_parse_skips_only_script_whitespace() {
        assert_eq!(FormCount::parse("\u{a0}\u{feff}\u{2003}7"), FormCount::Number(7));
        assert_eq!(FormCount::parse("\u{2028}\t8"), FormCount::Number(8));
        assert_eq!(FormCount::parse("\u{85}5"), FormCount::NaN);
        assert_eq!(FormCount::parse("\u{180e}5"), FormCount::NaN);
    }

    #[test]
    fn test_parse_ignores_trailing_garbage() {
        assert_eq!(FormCount::parse("12abc"), FormCount::Number(12));
        assert_eq!(FormCount::parse("4.9"), FormCount::Number(4));
        assert_eq!(FormCount::parse("1e3"), FormCount::Number(1));
    }

    #[test]
    fn test_parse_hex_prefix() {
        assert_eq!(FormCount::parse("0x10"), FormCount::Number(16));
        assert_eq!(FormCount::parse("0Xff"), FormCount::Number(255));
        assert_eq!(FormCount::parse("0x"), FormCount::NaN);
    }

    #[test]
    fn test_parse_non_numeric_is_nan() {
        assert_eq!(FormCount::parse("abc"), FormCount::NaN);
        assert_eq!(FormCount::parse(""), FormCount::NaN);
        assert_eq!(FormCount::parse("   "), FormCount::NaN);
        assert_eq!(FormCount::parse("-"), FormCount::NaN);
        assert_eq!(FormCount::parse("NaN"), FormCount::NaN);
    }

    #[test]
    fn test_parse_overflow_is_nan() {
        assert_eq!(FormCount::parse("99999999999999999999"), FormCount::NaN);
    }

    #[test]
    fn test_negative_zero_renders_as_zero() {
        let count = FormCount::parse("-0");
        assert_eq!(count.to_string(), "0");
        assert_eq!(count.next(), FormCount::Number(1));
    }

    #[test]
    fn test_next_and_display() {
        assert_eq!(FormCount::Number(2).next().to_string(), "3");
        assert_eq!(FormCount::NaN.next(), FormCount::NaN);
        assert_eq!(FormCount::NaN.to_string(), "NaN");
        assert_eq!(FormCount::Number(i64::MAX).next(), FormCount::NaN);
    }

    #[test]
    fn test_total_forms_advance() {
        let mut total = TotalForms::new("2");
        assert_eq!(total.advance(), FormCount::Number(2));
        assert_eq!(total.raw(), "3");
        assert_eq!(total.advance(), FormCount::Number(3));
        assert_eq!(total.raw(), "4");
    }

    #[test]
    fn test_total_forms_nan_sticks() {
        let mut total = TotalForms::new("abc");
        assert!(total.advance().is_nan());
        assert_eq!(total.raw(), "NaN");
        assert!(total.advance().is_nan());
        assert_eq!(total.raw(), "NaN");
    }
}
