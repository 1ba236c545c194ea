//! Raw form fields and their conversion into a [`ComparisonRequest`].

use crate::comparison::ComparisonRequest;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_X0: &str = "1";
pub const DEFAULT_Y0: &str = "1";
pub const DEFAULT_XF: &str = "10.3";
pub const DEFAULT_STEPS: &str = "21";

#[derive(Debug, Error, PartialEq)]
pub enum InputError {
    #[error("{field} must be a number, got \"{value}\"")]
    InvalidNumber { field: &'static str, value: String },
    #[error("{field} must be finite")]
    NonFinite { field: &'static str },
    #[error("Number of steps must be a whole number, got \"{0}\"")]
    InvalidSteps(String),
    #[error("Number of steps must be at least 2, got {0}")]
    TooFewSteps(usize),
    #[error("X must differ from X0 (both are {0})")]
    EmptyInterval(f64),
}

/// The four text fields of the input form, exactly as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInputs {
    pub x0: String,
    pub y0: String,
    pub xf: String,
    pub steps: String,
}

impl Default for FormInputs {
    fn default() -> Self {
        Self {
            x0: DEFAULT_X0.to_string(),
            y0: DEFAULT_Y0.to_string(),
            xf: DEFAULT_XF.to_string(),
            steps: DEFAULT_STEPS.to_string(),
        }
    }
}

impl FormInputs {
    /// Field labels in form order.
    pub const LABELS: [&'static str; 4] = ["X0", "Y0", "X", "Number of steps"];

    pub fn parse(&self) -> Result<ComparisonRequest, InputError> {
        let x0 = parse_number("X0", &self.x0)?;
        let y0 = parse_number("Y0", &self.y0)?;
        let xf = parse_number("X", &self.xf)?;

        let raw_steps = self.steps.trim();
        let steps: usize = raw_steps
            .parse()
            .map_err(|_| InputError::InvalidSteps(raw_steps.to_string()))?;
        if steps < 2 {
            return Err(InputError::TooFewSteps(steps));
        }
        if xf == x0 {
            return Err(InputError::EmptyInterval(x0));
        }

        Ok(ComparisonRequest { x0, y0, xf, steps })
    }
}

impl From<ComparisonRequest> for FormInputs {
    fn from(request: ComparisonRequest) -> Self {
        Self {
            x0: request.x0.to_string(),
            y0: request.y0.to_string(),
            xf: request.xf.to_string(),
            steps: request.steps.to_string(),
        }
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputError> {
    let trimmed = raw.trim();
    let value: f64 = trimmed.parse().map_err(|_| InputError::InvalidNumber {
        field,
        value: trimmed.to_string(),
    })?;
    if !value.is_finite() {
        return Err(InputError::NonFinite { field });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::{FormInputs, InputError};
    use crate::comparison::ComparisonRequest;
    use serde::de::value::{Error as ValueError, MapDeserializer};
    use serde::Deserialize;

    fn form(x0: &str, y0: &str, xf: &str, steps: &str) -> FormInputs {
        FormInputs {
            x0: x0.into(),
            y0: y0.into(),
            xf: xf.into(),
            steps: steps.into(),
        }
    }

    #[test]
    fn defaults_parse_to_the_default_request() {
        let request = FormInputs::default().parse().expect("defaults should parse");
        assert_eq!(request, ComparisonRequest::default());
        assert_eq!(
            request,
            ComparisonRequest {
                x0: 1.0,
                y0: 1.0,
                xf: 10.3,
                steps: 21
            }
        );
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let request = form(" 0.5", "2 ", "\t3", " 11 ").parse().expect("should parse");
        assert_eq!(request.x0, 0.5);
        assert_eq!(request.y0, 2.0);
        assert_eq!(request.xf, 3.0);
        assert_eq!(request.steps, 11);
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert_eq!(
            form("one", "1", "2", "5").parse(),
            Err(InputError::InvalidNumber {
                field: "X0",
                value: "one".into()
            })
        );
        assert_eq!(
            form("1", "", "2", "5").parse(),
            Err(InputError::InvalidNumber {
                field: "Y0",
                value: String::new()
            })
        );
        assert_eq!(
            form("1", "1", "inf", "5").parse(),
            Err(InputError::NonFinite { field: "X" })
        );
    }

    #[test]
    fn rejects_bad_step_counts() {
        assert_eq!(
            form("1", "1", "2", "2.5").parse(),
            Err(InputError::InvalidSteps("2.5".into()))
        );
        assert_eq!(
            form("1", "1", "2", "-3").parse(),
            Err(InputError::InvalidSteps("-3".into()))
        );
        assert_eq!(form("1", "1", "2", "1").parse(), Err(InputError::TooFewSteps(1)));
    }

    #[test]
    fn rejects_empty_interval() {
        let err = form("2", "1", "2.0", "5").parse().unwrap_err();
        assert_eq!(err, InputError::EmptyInterval(2.0));
        assert_eq!(err.to_string(), "X must differ from X0 (both are 2)");
    }

    #[test]
    fn missing_fields_fall_back_to_defaults_when_deserialized() {
        let entries = vec![("steps", "5")];
        let inputs = FormInputs::deserialize(MapDeserializer::<_, ValueError>::new(
            entries.into_iter(),
        ))
        .expect("partial form should deserialize");
        assert_eq!(inputs.steps, "5");
        assert_eq!(inputs.xf, "10.3");
    }

    #[test]
    fn request_converts_back_to_form_text() {
        let inputs = FormInputs::from(ComparisonRequest::default());
        assert_eq!(inputs, FormInputs::default());
    }
}
