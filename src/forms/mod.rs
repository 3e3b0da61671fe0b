//! Input forms
//!
//! One form per entity plus the car filter. Forms accept raw values from
//! urlencoded page submissions or JSON bodies and turn them into validated
//! insert types. Selector fields are checked against a [`FormChoices`]
//! snapshot loaded beforehand; no form reads the database itself.

pub mod car_filter_form;
pub mod car_form;
pub mod car_model_form;
pub mod choices;
pub mod manufacturer_form;

pub use car_filter_form::CarFilterForm;
pub use car_form::CarForm;
pub use car_model_form::CarModelForm;
pub use choices::{Choice, FormChoices};
pub use manufacturer_form::ManufacturerForm;

use serde::{Deserialize, Deserializer};
use validator::{ValidationError, ValidationErrors};

use crate::utils::errors::{AppError, AppResult};

#[derive(Deserialize)]
#[serde(untagged, expecting = "a string, number or boolean")]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

/// Read any scalar as text so urlencoded and JSON submissions share a shape.
pub(crate) fn optional_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Scalar>::deserialize(deserializer)?;
    Ok(value.map(|scalar| match scalar {
        Scalar::Text(text) => text,
        Scalar::Integer(number) => number.to_string(),
        Scalar::Float(number) => number.to_string(),
        Scalar::Bool(flag) => flag.to_string(),
    }))
}

/// Accumulates field errors so one submission reports every bad field.
pub(crate) struct FormErrors(ValidationErrors);

impl FormErrors {
    pub(crate) fn new(derived: Result<(), ValidationErrors>) -> Self {
        Self(derived.err().unwrap_or_else(ValidationErrors::new))
    }

    /// Keep the parsed value, or record the error and return a placeholder.
    pub(crate) fn check<T: Default>(
        &mut self,
        field: &'static str,
        result: Result<T, ValidationError>,
    ) -> T {
        match result {
            Ok(value) => value,
            Err(error) => {
                self.0.add(field, error);
                T::default()
            }
        }
    }

    pub(crate) fn finish(self) -> AppResult<()> {
        if self.0.errors().is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(self.0))
        }
    }
}

/// Field names that failed validation, sorted.
pub fn invalid_fields(errors: &ValidationErrors) -> Vec<&'static str> {
    let mut fields: Vec<&'static str> = errors.errors().keys().copied().collect();
    fields.sort_unstable();
    fields
}
