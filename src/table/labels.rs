//! Custom labels for rendered truth values

use crate::error::{ConfigError, LabelProblem};
use crate::expression::Truth;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// A pair of characters replacing `1` and `0` in rendered tables
///
/// Written as a two-character string, true label first: `"TF"` renders true as
/// `T` and false as `F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TruthLabels {
    truthy: char,
    falsy: char,
}

impl TruthLabels {
    /// Validate a two-character label string
    ///
    /// # Errors
    ///
    /// [`ConfigError::CustomLabelInvalid`] if the string does not have exactly
    /// two characters or if both characters are the same.
    ///
    /// # Examples
    ///
    /// ```
    /// use prop_logic::table::TruthLabels;
    ///
    /// let labels = TruthLabels::parse("TF").unwrap();
    /// assert_eq!(labels.label(1), 'T');
    /// assert_eq!(labels.label(0), 'F');
    ///
    /// assert!(TruthLabels::parse("TT").is_err());
    /// assert!(TruthLabels::parse("T").is_err());
    /// ```
    pub fn parse(labels: &str) -> Result<Self, ConfigError> {
        let invalid = |problem| ConfigError::CustomLabelInvalid {
            labels: Arc::from(labels),
            problem,
        };

        let mut chars = labels.chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(truthy), Some(falsy), None) if truthy != falsy => {
                Ok(TruthLabels { truthy, falsy })
            }
            (Some(_), Some(_), None) => Err(invalid(LabelProblem::Identical)),
            _ => Err(invalid(LabelProblem::Length)),
        }
    }

    /// Label for a truth value
    pub fn label(&self, value: Truth) -> char {
        if value != 0 {
            self.truthy
        } else {
            self.falsy
        }
    }
}

impl FromStr for TruthLabels {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TruthLabels::parse(s)
    }
}

impl fmt::Display for TruthLabels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.truthy, self.falsy)
    }
}

/// Render a truth value, with custom labels if any
pub(crate) fn render_value(value: Truth, labels: Option<&TruthLabels>) -> String {
    match labels {
        Some(labels) => labels.label(value).to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_labels() {
        let labels: TruthLabels = "✓✗".parse().unwrap();
        assert_eq!(labels.label(1), '✓');
        assert_eq!(labels.to_string(), "✓✗");
    }

    #[test]
    fn test_length_is_counted_in_characters() {
        let err = TruthLabels::parse("TFX").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::CustomLabelInvalid {
                problem: LabelProblem::Length,
                ..
            }
        ));
        assert!(TruthLabels::parse("").is_err());
    }

    #[test]
    fn test_identical_characters_rejected() {
        assert_eq!(
            TruthLabels::parse("xx").unwrap_err(),
            ConfigError::CustomLabelInvalid {
                labels: Arc::from("xx"),
                problem: LabelProblem::Identical,
            }
        );
    }

    #[test]
    fn test_render_value() {
        let labels = TruthLabels::parse("YN").unwrap();
        assert_eq!(render_value(1, Some(&labels)), "Y");
        assert_eq!(render_value(0, None), "0");
    }
}
