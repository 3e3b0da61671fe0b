use serde::Deserialize;
use validator::Validate;

use super::{optional_scalar, FormChoices, FormErrors};
use crate::models::NewCarModel;
use crate::utils::errors::AppResult;
use crate::utils::validation::{
    clean_text, parse_choice, parse_optional_bool, parse_optional_int, validate_not_empty,
};

/// Car model submission. The manufacturer must be one of the offered choices.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CarModelForm {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub manufacturer_id: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(
        required(message = "This field is required"),
        length(max = 100),
        custom = "validate_not_empty"
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 50))]
    pub category: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 50))]
    pub price_range: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub release_year: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub is_active: Option<String>,
}

impl CarModelForm {
    pub fn validated(&self, choices: &FormChoices) -> AppResult<NewCarModel> {
        let mut errors = FormErrors::new(self.validate());

        let manufacturer_id = errors.check(
            "manufacturer_id",
            parse_choice(self.manufacturer_id.as_deref(), &choices.manufacturer_ids()),
        );
        let release_year = errors.check(
            "release_year",
            parse_optional_int(self.release_year.as_deref()),
        );
        let is_active = errors.check("is_active", parse_optional_bool(self.is_active.as_deref()));

        errors.finish()?;

        Ok(NewCarModel {
            manufacturer_id,
            name: clean_text(self.name.clone()).unwrap_or_default(),
            category: clean_text(self.category.clone()),
            price_range: clean_text(self.price_range.clone()),
            release_year,
            is_active,
        })
    }
}
