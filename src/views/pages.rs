//! Catalog pages
//!
//! Index listing with the car filter, and one creation form per entity.

use std::collections::HashMap;
use validator::ValidationErrors;

use super::layout::{
    bool_cell, bool_select, escape, notice, optional_cell, page, select, text_input,
};
use crate::dto::CatalogOverview;
use crate::forms::{CarForm, CarModelForm, FormChoices, ManufacturerForm};

/// `errors` marks filter values that could not be applied.
pub fn index(overview: &CatalogOverview, errors: Option<&ValidationErrors>) -> String {
    let manufacturer_names: HashMap<i32, &str> = overview
        .manufacturers
        .iter()
        .map(|m| (m.id, m.name.as_str()))
        .collect();
    let model_labels: HashMap<i32, &str> = overview
        .choices
        .car_models
        .iter()
        .map(|c| (c.id, c.label.as_str()))
        .collect();

    let selected_manufacturer = overview.filter.manufacturer_id.map(|id| id.to_string());
    let selected_model = overview.filter.model_id.map(|id| id.to_string());

    let mut body = String::new();

    body.push_str(r#"<form method="get" action="/">"#);
    body.push_str(&select(
        "manufacturer",
        "Manufacturer",
        &overview.choices.manufacturers,
        selected_manufacturer.as_deref(),
        Some("All manufacturers"),
        errors,
    ));
    body.push_str(&select(
        "car_model",
        "Model",
        &overview.choices.car_models,
        selected_model.as_deref(),
        Some("All models"),
        errors,
    ));
    body.push_str("<p><button type=\"submit\">Filter</button></p></form>\n");

    body.push_str("<h2>Cars</h2>\n<table>\n<tr><th>ID</th><th>Model</th><th>Color</th><th>Horsepower</th><th>Consumption</th><th>Manufactured</th><th>Drivable</th></tr>\n");
    for car in &overview.cars {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            car.id,
            escape(model_labels.get(&car.model_id).copied().unwrap_or("")),
            optional_cell(car.color.as_deref()),
            optional_cell(car.horsepower),
            optional_cell(car.consumption),
            optional_cell(car.manufacture_date),
            bool_cell(car.is_drivable),
        ));
    }
    body.push_str("</table>\n");
    if overview.cars.is_empty() {
        body.push_str("<p>No cars match.</p>\n");
    }

    body.push_str("<h2>Models</h2>\n<table>\n<tr><th>ID</th><th>Manufacturer</th><th>Name</th><th>Category</th><th>Price range</th><th>Released</th><th>Active</th></tr>\n");
    for model in &overview.car_models {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            model.id,
            escape(manufacturer_names.get(&model.manufacturer_id).copied().unwrap_or("")),
            escape(&model.name),
            optional_cell(model.category.as_deref()),
            optional_cell(model.price_range.as_deref()),
            optional_cell(model.release_year),
            bool_cell(model.is_active),
        ));
    }
    body.push_str("</table>\n");

    body.push_str("<h2>Manufacturers</h2>\n<table>\n<tr><th>ID</th><th>Name</th><th>Street</th><th>City</th><th>ZIP</th><th>Country</th></tr>\n");
    for manufacturer in &overview.manufacturers {
        body.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            manufacturer.id,
            escape(&manufacturer.name),
            optional_cell(manufacturer.street.as_deref()),
            optional_cell(manufacturer.city.as_deref()),
            optional_cell(manufacturer.zip_code.as_deref()),
            optional_cell(manufacturer.country.as_deref()),
        ));
    }
    body.push_str("</table>\n");

    page("Car Catalog", &body)
}

fn form_wrapper(action: &str, fields: &str) -> String {
    format!(
        "<form method=\"post\" action=\"{}\">\n{}<p><button type=\"submit\">Save</button></p>\n</form>\n",
        action, fields
    )
}

pub fn add_manufacturer(
    form: &ManufacturerForm,
    errors: Option<&ValidationErrors>,
    message: Option<&str>,
) -> String {
    let fields = [
        text_input("name", "Name", form.name.as_deref(), errors),
        text_input("street", "Street", form.street.as_deref(), errors),
        text_input("city", "City", form.city.as_deref(), errors),
        text_input("zip_code", "ZIP Code", form.zip_code.as_deref(), errors),
        text_input("country", "Country", form.country.as_deref(), errors),
    ]
    .concat();

    let body = notice(message) + &form_wrapper("/add_manufacturer", &fields);
    page("Add manufacturer", &body)
}

pub fn add_model(
    form: &CarModelForm,
    choices: &FormChoices,
    errors: Option<&ValidationErrors>,
    message: Option<&str>,
) -> String {
    let mut body = notice(message);
    if choices.manufacturers.is_empty() {
        body.push_str("<p>Add a manufacturer before adding models.</p>\n");
    }

    let fields = [
        select(
            "manufacturer_id",
            "Manufacturer",
            &choices.manufacturers,
            form.manufacturer_id.as_deref(),
            None,
            errors,
        ),
        text_input("name", "Name", form.name.as_deref(), errors),
        text_input("category", "Category", form.category.as_deref(), errors),
        text_input("price_range", "Price Range", form.price_range.as_deref(), errors),
        text_input("release_year", "Release Year", form.release_year.as_deref(), errors),
        bool_select("is_active", "Is Active", form.is_active.as_deref(), errors),
    ]
    .concat();
    body.push_str(&form_wrapper("/add_model", &fields));

    page("Add model", &body)
}

pub fn add_car(
    form: &CarForm,
    choices: &FormChoices,
    errors: Option<&ValidationErrors>,
    message: Option<&str>,
) -> String {
    let mut body = notice(message);
    if choices.car_models.is_empty() {
        body.push_str("<p>Add a car model before adding cars.</p>\n");
    }

    let fields = [
        select(
            "model_id",
            "Model",
            &choices.car_models,
            form.model_id.as_deref(),
            None,
            errors,
        ),
        text_input("color", "Color", form.color.as_deref(), errors),
        text_input("horsepower", "Horsepower", form.horsepower.as_deref(), errors),
        text_input("consumption", "Consumption", form.consumption.as_deref(), errors),
        text_input(
            "manufacture_date",
            "Manufacture Date (YYYY-MM-DD)",
            form.manufacture_date.as_deref(),
            errors,
        ),
        bool_select("is_drivable", "Is Drivable", form.is_drivable.as_deref(), errors),
    ]
    .concat();
    body.push_str(&form_wrapper("/add_car", &fields));

    page("Add car", &body)
}

pub fn error(title: &str, message: &str) -> String {
    page(title, &notice(Some(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Car, CarFilter, CarModel, Manufacturer};

    fn overview() -> CatalogOverview {
        let manufacturers = vec![Manufacturer {
            id: 1,
            name: "Skoda & Sons".into(),
            street: None,
            city: Some("Mlada Boleslav".into()),
            zip_code: None,
            country: Some("CZ".into()),
        }];
        let car_models = vec![CarModel {
            id: 10,
            manufacturer_id: 1,
            name: "Octavia".into(),
            category: None,
            price_range: None,
            release_year: Some(1996),
            is_active: Some(true),
        }];
        let cars = vec![Car {
            id: 100,
            model_id: 10,
            color: Some("<b>red</b>".into()),
            horsepower: Some(110),
            consumption: Some(6.5),
            manufacture_date: None,
            is_drivable: None,
        }];
        let choices = FormChoices::from_rows(&manufacturers, &car_models);

        CatalogOverview {
            manufacturers,
            car_models,
            cars,
            filter: CarFilter::new(Some(1), None),
            choices,
        }
    }

    #[test]
    fn test_index_lists_rows_escaped() {
        let html = index(&overview(), None);
        assert!(html.contains("Skoda &amp; Sons"));
        assert!(html.contains("&lt;b&gt;red&lt;/b&gt;"));
        assert!(html.contains("<td>Skoda &amp; Sons Octavia</td>"));
        assert!(html.contains(r#"<option value="1" selected>Skoda &amp; Sons</option>"#));
        assert!(!html.contains("No cars match."));
    }

    #[test]
    fn test_add_model_without_manufacturers_warns() {
        let html = add_model(&CarModelForm::default(), &FormChoices::default(), None, None);
        assert!(html.contains("Add a manufacturer before adding models."));
        assert!(html.contains(r#"action="/add_model""#));
    }

    #[test]
    fn test_add_manufacturer_keeps_submitted_values() {
        let form = ManufacturerForm {
            city: Some("Koprivnice".into()),
            ..Default::default()
        };
        let html = add_manufacturer(&form, None, None);
        assert!(html.contains(r#"value="Koprivnice""#));
        assert!(!html.contains(r#"class="error""#));
    }

    #[test]
    fn test_index_marks_rejected_filter() {
        let mut errors = ValidationErrors::new();
        let mut error = validator::ValidationError::new("invalid_integer");
        error.message = Some("Enter a whole number".into());
        errors.add("manufacturer", error);

        let html = index(&overview(), Some(&errors));
        assert!(html.contains(r#"<ul class="errors"><li>Enter a whole number</li></ul>"#));
    }

    #[test]
    fn test_add_car_shows_message_above_form() {
        let html = add_car(
            &CarForm::default(),
            &FormChoices::default(),
            None,
            Some("Cannot save car: referenced parent row does not exist"),
        );
        assert!(html.contains(
            r#"<p class="error">Cannot save car: referenced parent row does not exist</p>"#
        ));
    }

    #[test]
    fn test_error_page_escapes_message() {
        let html = error("Not found", "Car <1> not found");
        assert!(html.contains("<title>Not found · Car Catalog</title>"));
        assert!(html.contains("Car &lt;1&gt; not found"));
    }
}
