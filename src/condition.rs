//! Price condition parsing and evaluation.
//!
//! A condition is written as `<number><operator>`, e.g. `20<` or `30>`.
//!
//! **Read the operator as applying to the listing price, not to the number
//! that precedes it**: `20<` keeps listings priced *below* 20 and `30>` keeps
//! listings priced *above* 30. This is the established command-line contract
//! and must not be "corrected" to the conventional reading.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;
use thiserror::Error;

static CONDITION_PATTERN: LazyLock<regex_lite::Regex> =
    LazyLock::new(|| regex_lite::Regex::new(r"^[0-9]+(\.[0-9]+)?[<>]$").unwrap());

/// Errors produced when a price condition cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("price condition is empty (e.g. 20< or 30>)")]
    Empty,

    #[error("price condition '{0}' must end with '<' or '>' (e.g. 20< or 30>)")]
    MissingOperator(String),

    #[error("price condition '{0}' has an invalid threshold (e.g. 20< or 30>)")]
    InvalidThreshold(String),

    #[error("price condition '{0}' is malformed (e.g. 20< or 30>)")]
    Malformed(String),
}

/// Comparison applied to a listing's price.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceOperator {
    /// `<`: keep listings priced below the threshold.
    LessThan,
    /// `>`: keep listings priced above the threshold.
    GreaterThan,
}

impl PriceOperator {
    fn from_char(c: char) -> Option<Self> {
        match c {
            '<' => Some(PriceOperator::LessThan),
            '>' => Some(PriceOperator::GreaterThan),
            _ => None,
        }
    }

    /// Returns the operator symbol as written in a condition.
    pub fn symbol(&self) -> char {
        match self {
            PriceOperator::LessThan => '<',
            PriceOperator::GreaterThan => '>',
        }
    }
}

/// A parsed, immutable price condition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceCondition {
    operator: PriceOperator,
    threshold: f64,
}

/// Returns true if `text` is a well-formed condition: digits, an optional
/// fractional part, and exactly one trailing `<` or `>`.
pub fn is_valid_condition(text: &str) -> bool {
    CONDITION_PATTERN.is_match(text)
}

impl PriceCondition {
    /// Parses a condition such as `20<` or `12.50>`.
    pub fn parse(text: &str) -> Result<Self, ConditionError> {
        let Some(last) = text.chars().last() else {
            return Err(ConditionError::Empty);
        };
        let Some(operator) = PriceOperator::from_char(last) else {
            return Err(ConditionError::MissingOperator(text.to_string()));
        };

        let number = &text[..text.len() - last.len_utf8()];
        let threshold: f64 =
            number.parse().map_err(|_| ConditionError::InvalidThreshold(text.to_string()))?;

        if !threshold.is_finite() || threshold < 0.0 {
            return Err(ConditionError::InvalidThreshold(text.to_string()));
        }

        // `parse` alone would accept forms like "1e3<" or "+5<"
        if !is_valid_condition(text) {
            return Err(ConditionError::Malformed(text.to_string()));
        }

        Ok(Self { operator, threshold })
    }

    pub fn operator(&self) -> PriceOperator {
        self.operator
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Checks a displayed price such as `"$1,234.56"` against this condition.
    ///
    /// Every character other than digits and `.` is dropped before parsing.
    /// Price text that yields no number never matches.
    pub fn evaluate(&self, price_text: &str) -> bool {
        let cleaned: String =
            price_text.chars().filter(|c| c.is_ascii_digit() || *c == '.').collect();

        let Some(price) = leading_decimal(&cleaned) else {
            return false;
        };

        match self.operator {
            PriceOperator::LessThan => price < self.threshold,
            PriceOperator::GreaterThan => price > self.threshold,
        }
    }

    /// Human-readable description of what the condition keeps.
    pub fn description(&self) -> String {
        match self.operator {
            PriceOperator::LessThan => format!("Price: < {}", self.threshold),
            PriceOperator::GreaterThan => format!("Price: > {}", self.threshold),
        }
    }
}

impl FromStr for PriceCondition {
    type Err = ConditionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PriceCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.threshold, self.operator.symbol())
    }
}

/// Parses the leading decimal number of `text` (`digits[.digits]`), ignoring
/// anything after it. Returns `None` when the text does not start with a number.
pub(crate) fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    let mut end = int_len;

    if bytes.get(end) == Some(&b'.') {
        let frac_len = bytes[end + 1..].iter().take_while(|b| b.is_ascii_digit()).count();
        if frac_len > 0 {
            end += 1 + frac_len;
        }
    }

    if end == 0 {
        return None;
    }

    text[..end].parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(text: &str) -> PriceCondition {
        PriceCondition::parse(text).unwrap()
    }

    // Validation

    #[test]
    fn test_valid_conditions() {
        assert!(is_valid_condition("20<"));
        assert!(is_valid_condition("30>"));
        assert!(is_valid_condition("0<"));
        assert!(is_valid_condition("12.50>"));
        assert!(is_valid_condition("007<"));
    }

    #[test]
    fn test_invalid_conditions() {
        assert!(!is_valid_condition(""));
        assert!(!is_valid_condition("abc"));
        assert!(!is_valid_condition("20"));
        assert!(!is_valid_condition("<20"));
        assert!(!is_valid_condition("20<<"));
        assert!(!is_valid_condition("20.<"));
        assert!(!is_valid_condition(".5<"));
        assert!(!is_valid_condition("20 <"));
        assert!(!is_valid_condition("-5<"));
        assert!(!is_valid_condition("1e3<"));
        assert!(!is_valid_condition("20<\n"));
    }

    // Parsing

    #[test]
    fn test_parse() {
        let c = cond("20<");
        assert_eq!(c.operator(), PriceOperator::LessThan);
        assert_eq!(c.threshold(), 20.0);

        let c = cond("12.75>");
        assert_eq!(c.operator(), PriceOperator::GreaterThan);
        assert_eq!(c.threshold(), 12.75);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(PriceCondition::parse(""), Err(ConditionError::Empty));
        assert!(matches!(PriceCondition::parse("20"), Err(ConditionError::MissingOperator(_))));
        assert!(matches!(PriceCondition::parse("abc<"), Err(ConditionError::InvalidThreshold(_))));
        assert!(matches!(PriceCondition::parse("<"), Err(ConditionError::InvalidThreshold(_))));
        assert!(matches!(PriceCondition::parse("1e3<"), Err(ConditionError::Malformed(_))));
        assert!(matches!(PriceCondition::parse("20<<"), Err(ConditionError::InvalidThreshold(_))));
    }

    #[test]
    fn test_parse_error_mentions_examples() {
        let err = PriceCondition::parse("cheap").unwrap_err().to_string();
        assert!(err.contains("20<"));
        assert!(err.contains("30>"));
    }

    #[test]
    fn test_from_str_and_display() {
        let c: PriceCondition = "20<".parse().unwrap();
        assert_eq!(c.to_string(), "20<");

        let c: PriceCondition = "19.5>".parse().unwrap();
        assert_eq!(c.to_string(), "19.5>");
    }

    // Evaluation: the operator applies to the price, so "20<" means price < 20

    #[test]
    fn test_less_than_keeps_cheaper() {
        let c = cond("20<");
        assert!(c.evaluate("$15.99"));
        assert!(!c.evaluate("$25.00"));
        assert!(!c.evaluate("$20.00"));
    }

    #[test]
    fn test_greater_than_keeps_pricier() {
        let c = cond("30>");
        assert!(c.evaluate("$45.00"));
        assert!(!c.evaluate("$10.00"));
        assert!(!c.evaluate("$30.00"));
    }

    #[test]
    fn test_evaluate_strips_formatting() {
        let c = cond("1000>");
        assert!(c.evaluate("$1,234.56"));
        assert!(c.evaluate("USD 1234.56"));
    }

    #[test]
    fn test_unparsable_price_never_matches() {
        let lt = cond("20<");
        let gt = cond("20>");
        for text in ["", "N/A", "See price in cart", "$", "."] {
            assert!(!lt.evaluate(text), "{text:?} matched <");
            assert!(!gt.evaluate(text), "{text:?} matched >");
        }
    }

    #[test]
    fn test_description() {
        assert_eq!(cond("20<").description(), "Price: < 20");
        assert_eq!(cond("30>").description(), "Price: > 30");
    }

    // Leading number

    #[test]
    fn test_leading_decimal() {
        assert_eq!(leading_decimal("15.99"), Some(15.99));
        assert_eq!(leading_decimal("15"), Some(15.0));
        assert_eq!(leading_decimal("15."), Some(15.0));
        assert_eq!(leading_decimal("1.2.3"), Some(1.2));
        assert_eq!(leading_decimal("4.5 out of 5"), Some(4.5));
        assert_eq!(leading_decimal(".99"), Some(0.99));
        assert_eq!(leading_decimal(""), None);
        assert_eq!(leading_decimal("."), None);
        assert_eq!(leading_decimal("abc"), None);
    }
}
