use serde::Deserialize;

use super::{optional_scalar, FormErrors};
use crate::models::CarFilter;
use crate::utils::errors::AppResult;
use crate::utils::validation::parse_optional_int;

/// Car listing filter. Nothing is required; a blank selector means the
/// dimension is not filtered.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CarFilterForm {
    #[serde(default, deserialize_with = "optional_scalar")]
    pub manufacturer: Option<String>,

    #[serde(default, deserialize_with = "optional_scalar")]
    pub car_model: Option<String>,
}

impl CarFilterForm {
    /// Ids that exist nowhere are kept; they narrow the listing to nothing.
    pub fn to_filter(&self) -> AppResult<CarFilter> {
        let mut errors = FormErrors::new(Ok(()));

        let manufacturer_id = errors.check(
            "manufacturer",
            parse_optional_int(self.manufacturer.as_deref()),
        );
        let model_id = errors.check("car_model", parse_optional_int(self.car_model.as_deref()));

        errors.finish()?;
        Ok(CarFilter::new(manufacturer_id, model_id))
    }
}
