// Form input checks for the search and filter endpoints
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub msg: String,
}

/// Collects the first failure of each field
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The trimmed value, or `None` after recording `msg` when it is missing or blank
    pub fn required<'a>(
        &mut self,
        field: &'static str,
        value: Option<&'a str>,
        msg: &str,
    ) -> Option<&'a str> {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Some(v),
            _ => {
                self.fail(field, msg);
                None
            }
        }
    }

    pub fn numeric<'a>(&mut self, field: &'static str, value: &'a str, msg: &str) -> Option<&'a str> {
        if is_numeric(value) {
            Some(value)
        } else {
            self.fail(field, msg);
            None
        }
    }

    /// A finite float no smaller than `min`
    pub fn float_min(&mut self, field: &'static str, value: &str, min: f64, msg: &str) -> Option<f64> {
        match parse_float(value) {
            Some(v) if v >= min => Some(v),
            _ => {
                self.fail(field, msg);
                None
            }
        }
    }

    pub fn fail(&mut self, field: &'static str, msg: &str) {
        self.errors.push(FieldError {
            field,
            msg: msg.to_string(),
        });
    }

    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Optional sign, optional integer part with a dot, then at least one digit
pub fn is_numeric(value: &str) -> bool {
    let unsigned = value.strip_prefix(['+', '-']).unwrap_or(value);
    let digits = match unsigned.split_once('.') {
        Some((int, frac)) => int.bytes().all(|b| b.is_ascii_digit()).then_some(frac),
        None => Some(unsigned),
    };
    digits.is_some_and(|d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
}

/// Decimal or exponent notation only; `inf` and `NaN` are rejected
pub fn parse_float(value: &str) -> Option<f64> {
    if !value
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'))
    {
        return None;
    }
    value.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// HTML-escape text echoed back in titles and messages
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}
