use serde::Deserialize;
use validator::Validate;

use super::{optional_scalar, FormErrors};
use crate::models::NewManufacturer;
use crate::utils::errors::AppResult;
use crate::utils::validation::{clean_text, validate_not_empty};

/// Manufacturer submission. Only the name is required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ManufacturerForm {
    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(
        required(message = "This field is required"),
        length(max = 100),
        custom = "validate_not_empty"
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 100))]
    pub street: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 50))]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 10))]
    pub zip_code: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 50))]
    pub country: Option<String>,
}

impl ManufacturerForm {
    pub fn validated(&self) -> AppResult<NewManufacturer> {
        FormErrors::new(self.validate()).finish()?;

        Ok(NewManufacturer {
            name: clean_text(self.name.clone()).unwrap_or_default(),
            street: clean_text(self.street.clone()),
            city: clean_text(self.city.clone()),
            zip_code: clean_text(self.zip_code.clone()),
            country: clean_text(self.country.clone()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::invalid_fields;
    use crate::utils::errors::AppError;

    fn expect_invalid(form: &ManufacturerForm) -> Vec<&'static str> {
        match form.validated() {
            Err(AppError::Validation(errors)) => invalid_fields(&errors),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_name_is_required() {
        assert_eq!(expect_invalid(&ManufacturerForm::default()), vec!["name"]);

        let blank = ManufacturerForm {
            name: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(expect_invalid(&blank), vec!["name"]);
    }

    #[test]
    fn test_optional_fields_are_trimmed_and_nulled() {
        let form = ManufacturerForm {
            name: Some(" Skoda Auto ".into()),
            street: Some("tr. Vaclava Klementa 869".into()),
            city: Some("".into()),
            zip_code: Some(" 29301 ".into()),
            country: None,
        };

        let manufacturer = form.validated().unwrap();
        assert_eq!(manufacturer.name, "Skoda Auto");
        assert_eq!(manufacturer.street.as_deref(), Some("tr. Vaclava Klementa 869"));
        assert_eq!(manufacturer.city, None);
        assert_eq!(manufacturer.zip_code.as_deref(), Some("29301"));
        assert_eq!(manufacturer.country, None);
    }

    #[test]
    fn test_column_lengths_are_enforced() {
        let form = ManufacturerForm {
            name: Some("Tatra".into()),
            zip_code: Some("12345678901".into()),
            ..Default::default()
        };
        assert_eq!(expect_invalid(&form), vec!["zip_code"]);
    }

    #[test]
    fn test_deserializes_json_scalars() {
        let form: ManufacturerForm =
            serde_json::from_value(serde_json::json!({ "name": "Praga", "zip_code": 19000 }))
                .unwrap();
        assert_eq!(form.name.as_deref(), Some("Praga"));
        assert_eq!(form.zip_code.as_deref(), Some("19000"));
        assert_eq!(form.street, None);

        let form: ManufacturerForm =
            serde_json::from_value(serde_json::json!({ "name": null })).unwrap();
        assert_eq!(form.name, None);
    }
}
