use serde_json::Value;

// ── CellValue ─────────────────────────────────────────────────────────────────

/// A spreadsheet cell after best-effort normalisation.
///
/// The workbook is hand-edited: amounts arrive as plain numbers, as
/// `"Rp 1,000"`-style strings, or not at all. Coercion never fails;
/// anything that does not survive numeric parsing is kept as trimmed
/// text and numeric readers fall back through [`CellValue::number_or`].
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Absent cell or a string containing only whitespace.
    Empty,
    /// A finite numeric value, from a JSON number or numeric-looking text.
    Number(f64),
    /// Text that did not parse as a number; holds the trimmed original.
    Text(String),
}

impl CellValue {
    /// Normalise one raw cell.
    ///
    /// Numeric-looking strings are reduced to the characters that can
    /// take part in a number (digits, `.`, a leading `-`) before
    /// parsing, which tolerates currency prefixes and thousands
    /// separators. A string whose residue does not parse stays text.
    pub fn coerce(cell: Option<&Value>) -> Self {
        let Some(value) = cell else {
            return CellValue::Empty;
        };

        match value {
            Value::Null => CellValue::Empty,
            Value::Number(n) => match n.as_f64() {
                Some(f) if f.is_finite() => CellValue::Number(f),
                _ => CellValue::Empty,
            },
            Value::String(s) => Self::coerce_text(s),
            Value::Bool(b) => CellValue::Text(if *b { "TRUE" } else { "FALSE" }.to_string()),
            _ => CellValue::Empty,
        }
    }

    fn coerce_text(s: &str) -> Self {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        let residual = strip_non_numeric(trimmed);
        if let Ok(n) = residual.parse::<f64>() {
            if n.is_finite() {
                return CellValue::Number(n);
            }
        }

        CellValue::Text(trimmed.to_string())
    }

    /// Numeric interpretation with an explicit fallback.
    ///
    /// This is the documented best-effort policy: empty and unparseable
    /// cells yield `default` (callers pass `0.0`) instead of an error
    /// or a NaN.
    pub fn number_or(&self, default: f64) -> f64 {
        match self {
            CellValue::Number(n) => *n,
            _ => default,
        }
    }

    /// Render the cell back to text.
    ///
    /// Integral numbers print without a fractional part so that day
    /// labels round-trip as `"5"`, not `"5.0"`.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Number(n) => {
                if n.fract() == 0.0 && n.abs() < 1e15 {
                    format!("{}", *n as i64)
                } else {
                    n.to_string()
                }
            }
            CellValue::Text(s) => s.clone(),
        }
    }

    /// True for absent and whitespace-only cells.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Keep digits and `.`; a minus survives only when the original text
/// starts with one.
fn strip_non_numeric(s: &str) -> String {
    let digits: String = s
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    if s.starts_with('-') {
        format!("-{}", digits)
    } else {
        digits
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn coerce(v: &Value) -> CellValue {
        CellValue::coerce(Some(v))
    }

    // ── coerce ────────────────────────────────────────────────────────────────

    #[test]
    fn test_coerce_absent_is_empty() {
        assert_eq!(CellValue::coerce(None), CellValue::Empty);
    }

    #[test]
    fn test_coerce_null_is_empty() {
        assert_eq!(coerce(&json!(null)), CellValue::Empty);
    }

    #[test]
    fn test_coerce_blank_string_is_empty() {
        assert_eq!(coerce(&json!("")), CellValue::Empty);
        assert_eq!(coerce(&json!("   ")), CellValue::Empty);
        assert_eq!(coerce(&json!("\t ")), CellValue::Empty);
    }

    #[test]
    fn test_coerce_plain_number() {
        assert_eq!(coerce(&json!(2.5)), CellValue::Number(2.5));
        assert_eq!(coerce(&json!(1000)), CellValue::Number(1000.0));
    }

    #[test]
    fn test_coerce_numeric_string() {
        assert_eq!(coerce(&json!("2.5")), CellValue::Number(2.5));
        assert_eq!(coerce(&json!(" 40 ")), CellValue::Number(40.0));
    }

    #[test]
    fn test_coerce_currency_string() {
        assert_eq!(coerce(&json!("Rp 1,000")), CellValue::Number(1000.0));
        assert_eq!(coerce(&json!("Rp 25.000")), CellValue::Number(25.0));
    }

    #[test]
    fn test_coerce_negative_with_unit() {
        assert_eq!(coerce(&json!("-2.5kg")), CellValue::Number(-2.5));
    }

    #[test]
    fn test_coerce_plain_text_stays_text() {
        assert_eq!(
            coerce(&json!("catatan gudang")),
            CellValue::Text("catatan gudang".to_string())
        );
    }

    #[test]
    fn test_coerce_text_is_trimmed() {
        assert_eq!(
            coerce(&json!("  Shopee-882  ")),
            CellValue::Number(882.0),
        );
        assert_eq!(
            coerce(&json!("  lain-lain  ")),
            CellValue::Text("lain-lain".to_string())
        );
    }

    #[test]
    fn test_coerce_lone_punctuation_stays_text() {
        assert_eq!(coerce(&json!(".")), CellValue::Text(".".to_string()));
        assert_eq!(coerce(&json!("-")), CellValue::Text("-".to_string()));
    }

    // ── number_or ─────────────────────────────────────────────────────────────

    #[test]
    fn test_number_or_returns_value() {
        assert_eq!(CellValue::Number(3.5).number_or(0.0), 3.5);
    }

    #[test]
    fn test_number_or_falls_back_on_empty_and_text() {
        assert_eq!(CellValue::Empty.number_or(0.0), 0.0);
        assert_eq!(CellValue::Text("abc".to_string()).number_or(0.0), 0.0);
        assert_eq!(CellValue::Text("abc".to_string()).number_or(7.0), 7.0);
    }

    // ── as_text ───────────────────────────────────────────────────────────────

    #[test]
    fn test_as_text_integral_number_has_no_fraction() {
        assert_eq!(CellValue::Number(5.0).as_text(), "5");
        assert_eq!(CellValue::Number(1000.0).as_text(), "1000");
    }

    #[test]
    fn test_as_text_fractional_number() {
        assert_eq!(CellValue::Number(2.5).as_text(), "2.5");
    }

    #[test]
    fn test_as_text_empty() {
        assert_eq!(CellValue::Empty.as_text(), "");
    }

    // ── idempotence property ──────────────────────────────────────────────────

    #[test]
    fn test_coercion_idempotent_for_numeric_text() {
        for raw in ["2.5", "Rp 1,000", "40", "-3", "  12,5 kg "] {
            let first = coerce(&json!(raw));
            let second = coerce(&json!(first.as_text()));
            assert_eq!(
                first.number_or(f64::NAN),
                second.number_or(f64::NAN),
                "coercion not idempotent for {:?}",
                raw
            );
        }
    }
}
