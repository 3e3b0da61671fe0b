use serde::Deserialize;
use validator::Validate;

use super::{optional_scalar, FormChoices, FormErrors};
use crate::models::NewCar;
use crate::utils::errors::AppResult;
use crate::utils::validation::{
    clean_text, parse_choice, parse_optional_bool, parse_optional_date, parse_optional_float,
    parse_optional_int,
};

/// Car submission. The car model must be one of the offered choices.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CarForm {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub model_id: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    #[validate(length(max = 50))]
    pub color: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub horsepower: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub consumption: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub manufacture_date: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub is_drivable: Option<String>,
}

impl CarForm {
    pub fn validated(&self, choices: &FormChoices) -> AppResult<NewCar> {
        let mut errors = FormErrors::new(self.validate());

        let model_id = errors.check(
            "model_id",
            parse_choice(self.model_id.as_deref(), &choices.car_model_ids()),
        );
        let horsepower = errors.check("horsepower", parse_optional_int(self.horsepower.as_deref()));
        let consumption = errors.check(
            "consumption",
            parse_optional_float(self.consumption.as_deref()),
        );
        let manufacture_date = errors.check(
            "manufacture_date",
            parse_optional_date(self.manufacture_date.as_deref()),
        );
        let is_drivable = errors.check(
            "is_drivable",
            parse_optional_bool(self.is_drivable.as_deref()),
        );

        errors.finish()?;

        Ok(NewCar {
            model_id,
            color: clean_text(self.color.clone()),
            horsepower,
            consumption,
            manufacture_date,
            is_drivable,
        })
    }
}
