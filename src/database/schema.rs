//! Catalog schema
//!
//! Idempotent DDL applied at startup. Foreign keys keep the default
//! `NO ACTION` behaviour, so a parent with children cannot be deleted.

pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS manufacturers (
    id SERIAL PRIMARY KEY,
    name VARCHAR(100) NOT NULL,
    street VARCHAR(100),
    city VARCHAR(50),
    zip_code VARCHAR(10),
    country VARCHAR(50)
);

CREATE TABLE IF NOT EXISTS car_models (
    id SERIAL PRIMARY KEY,
    manufacturer_id INTEGER NOT NULL REFERENCES manufacturers(id),
    name VARCHAR(100) NOT NULL,
    category VARCHAR(50),
    price_range VARCHAR(50),
    release_year INTEGER,
    is_active BOOLEAN
);

CREATE TABLE IF NOT EXISTS cars (
    id SERIAL PRIMARY KEY,
    model_id INTEGER NOT NULL REFERENCES car_models(id),
    color VARCHAR(50),
    horsepower INTEGER,
    consumption DOUBLE PRECISION,
    manufacture_date DATE,
    is_drivable BOOLEAN
);

CREATE INDEX IF NOT EXISTS idx_car_models_manufacturer ON car_models(manufacturer_id);
CREATE INDEX IF NOT EXISTS idx_cars_model ON cars(model_id);
"#;

/// Split the schema into individual statements.
pub fn statements() -> impl Iterator<Item = &'static str> {
    SCHEMA
        .split(';')
        .map(str::trim)
        .filter(|statement| !statement.is_empty())
}
