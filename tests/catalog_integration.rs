mod common;

use std::collections::BTreeSet;

use car_catalog::controllers::{CarController, CarModelController, ManufacturerController};
use car_catalog::forms::{CarFilterForm, CarForm, CarModelForm, FormChoices, ManufacturerForm};
use car_catalog::models::{Car, CarFilter, NewCar, NewCarModel, NewManufacturer};
use car_catalog::repositories::{CarModelRepository, CarRepository, ManufacturerRepository};
use car_catalog::utils::errors::AppError;
use common::{lazy_pool, test_pool, unique};
use sqlx::PgPool;

fn new_manufacturer(name: &str) -> NewManufacturer {
    NewManufacturer {
        name: name.to_string(),
        street: None,
        city: None,
        zip_code: None,
        country: None,
    }
}

fn new_model(manufacturer_id: i32, name: &str) -> NewCarModel {
    NewCarModel {
        manufacturer_id,
        name: name.to_string(),
        category: None,
        price_range: None,
        release_year: None,
        is_active: None,
    }
}

fn new_car(model_id: i32) -> NewCar {
    NewCar {
        model_id,
        color: None,
        horsepower: None,
        consumption: None,
        manufacture_date: None,
        is_drivable: None,
    }
}

fn ids(cars: &[Car]) -> BTreeSet<i32> {
    cars.iter().map(|c| c.id).collect()
}

async fn count_manufacturers_in_city(pool: &PgPool, city: &str) -> i64 {
    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM manufacturers WHERE city = $1")
        .bind(city)
        .fetch_one(pool)
        .await
        .unwrap();
    row.0
}

#[tokio::test]
async fn test_manufacturer_without_name_is_not_persisted() {
    let Some(pool) = test_pool().await else { return };
    let controller = ManufacturerController::new(pool.clone());
    let marker = unique("city");

    for name in [None, Some(String::new()), Some("   ".to_string())] {
        let form = ManufacturerForm {
            name,
            city: Some(marker.clone()),
            ..Default::default()
        };
        let result = controller.create(&form).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    assert_eq!(count_manufacturers_in_city(&pool, &marker).await, 0);
}

#[tokio::test]
async fn test_create_adds_exactly_one_row_with_fresh_id() {
    let Some(pool) = test_pool().await else { return };
    let controller = ManufacturerController::new(pool.clone());
    let before: BTreeSet<i32> = controller.list().await.unwrap().iter().map(|m| m.id).collect();

    let name = unique("Skoda");
    let form = ManufacturerForm {
        name: Some(name.clone()),
        street: Some("tr. Vaclava Klementa 869".into()),
        city: Some("Mlada Boleslav".into()),
        zip_code: Some("29301".into()),
        country: Some("Czech Republic".into()),
    };
    let created = controller.create(&form).await.unwrap();
    assert!(!before.contains(&created.id));

    let after = controller.list().await.unwrap();
    let matching: Vec<_> = after.iter().filter(|m| m.id == created.id).collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].name, name);
    assert_eq!(matching[0].city.as_deref(), Some("Mlada Boleslav"));
    assert_eq!(matching[0].zip_code.as_deref(), Some("29301"));

    let second = controller
        .create(&ManufacturerForm {
            name: Some(unique("Tatra")),
            ..Default::default()
        })
        .await
        .unwrap();
    assert!(second.id > created.id);
}

#[tokio::test]
async fn test_filter_follows_ownership_chain() {
    let Some(pool) = test_pool().await else { return };
    let manufacturers = ManufacturerRepository::new(pool.clone());
    let models = CarModelRepository::new(pool.clone());
    let cars = CarRepository::new(pool.clone());

    let a = manufacturers.create(&new_manufacturer(&unique("A"))).await.unwrap();
    let b = manufacturers.create(&new_manufacturer(&unique("B"))).await.unwrap();
    let x = models.create(&new_model(a.id, "X")).await.unwrap();
    let y = models.create(&new_model(a.id, "Y")).await.unwrap();
    let z = models.create(&new_model(b.id, "Z")).await.unwrap();
    let c1 = cars.create(&new_car(x.id)).await.unwrap();
    let c2 = cars.create(&new_car(y.id)).await.unwrap();
    let c3 = cars.create(&new_car(z.id)).await.unwrap();

    let by_a = cars.list_filtered(&CarFilter::new(Some(a.id), None)).await.unwrap();
    assert_eq!(ids(&by_a), BTreeSet::from([c1.id, c2.id]));

    let by_z = cars.list_filtered(&CarFilter::new(None, Some(z.id))).await.unwrap();
    assert_eq!(ids(&by_z), BTreeSet::from([c3.id]));
    assert_eq!(by_z[0], c3);

    let a_and_z = cars
        .list_filtered(&CarFilter::new(Some(a.id), Some(z.id)))
        .await
        .unwrap();
    assert!(a_and_z.is_empty());

    let a_and_x = cars
        .list_filtered(&CarFilter::new(Some(a.id), Some(x.id)))
        .await
        .unwrap();
    assert_eq!(ids(&a_and_x), BTreeSet::from([c1.id]));

    let all = ids(&cars.list_filtered(&CarFilter::default()).await.unwrap());
    assert!(all.is_superset(&BTreeSet::from([c1.id, c2.id, c3.id])));
}

#[tokio::test]
async fn test_filter_is_idempotent() {
    let Some(pool) = test_pool().await else { return };
    let manufacturers = ManufacturerRepository::new(pool.clone());
    let models = CarModelRepository::new(pool.clone());
    let cars = CarRepository::new(pool.clone());

    let m = manufacturers.create(&new_manufacturer(&unique("Praga"))).await.unwrap();
    let model = models.create(&new_model(m.id, "V3S")).await.unwrap();
    cars.create(&new_car(model.id)).await.unwrap();
    cars.create(&new_car(model.id)).await.unwrap();

    let filter = CarFilter::new(Some(m.id), None);
    let first = cars.list_filtered(&filter).await.unwrap();
    let second = cars.list_filtered(&filter).await.unwrap();
    assert_eq!(first.len(), 2);
    assert_eq!(ids(&first), ids(&second));
}

#[tokio::test]
async fn test_unknown_ids_filter_to_nothing() {
    let Some(pool) = test_pool().await else { return };
    let controller = CarController::new(pool);

    let form = CarFilterForm {
        manufacturer: Some(i32::MAX.to_string()),
        car_model: None,
    };
    assert!(controller.list_filtered(&form).await.unwrap().is_empty());

    let form = CarFilterForm {
        manufacturer: None,
        car_model: Some("-1".into()),
    };
    assert!(controller.list_filtered(&form).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_model_with_missing_manufacturer_is_referential_error() {
    let Some(pool) = test_pool().await else { return };
    let models = CarModelRepository::new(pool.clone());
    let name = unique("Orphan");

    let result = models.create(&new_model(i32::MAX, &name)).await;
    assert!(matches!(result, Err(AppError::Referential(_))));

    let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM car_models WHERE name = $1")
        .bind(&name)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(row.0, 0);
}

#[tokio::test]
async fn test_stale_choices_surface_as_referential_error() {
    let Some(pool) = test_pool().await else { return };
    let manufacturers = ManufacturerRepository::new(pool.clone());
    let doomed = manufacturers.create(&new_manufacturer(&unique("Gone"))).await.unwrap();

    let choices = FormChoices::load(&pool).await.unwrap();
    assert!(choices.manufacturer_ids().contains(&doomed.id));
    assert!(manufacturers.delete(doomed.id).await.unwrap());

    let form = CarModelForm {
        manufacturer_id: Some(doomed.id.to_string()),
        name: Some("Ghost".into()),
        ..Default::default()
    };
    let result = CarModelController::new(pool)
        .create_with_choices(&form, &choices)
        .await;
    assert!(matches!(result, Err(AppError::Referential(_))));
}

#[tokio::test]
async fn test_empty_choices_reject_model_submission() {
    let controller = CarModelController::new(lazy_pool());
    let form = CarModelForm {
        manufacturer_id: Some("1".into()),
        name: Some("Octavia".into()),
        ..Default::default()
    };

    let result = controller
        .create_with_choices(&form, &FormChoices::default())
        .await;
    match result {
        Err(AppError::Validation(errors)) => {
            assert!(errors.field_errors().contains_key("manufacturer_id"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_car_round_trip_through_controller() {
    let Some(pool) = test_pool().await else { return };
    let manufacturers = ManufacturerRepository::new(pool.clone());
    let models = CarModelRepository::new(pool.clone());
    let m = manufacturers.create(&new_manufacturer(&unique("Skoda"))).await.unwrap();
    let model = models.create(&new_model(m.id, "Favorit")).await.unwrap();

    let controller = CarController::new(pool.clone());
    let form = CarForm {
        model_id: Some(model.id.to_string()),
        color: Some("White".into()),
        horsepower: Some("68".into()),
        consumption: Some("6.8".into()),
        manufacture_date: Some("1990-05-01".into()),
        is_drivable: Some("yes".into()),
    };
    let car = controller.create(&form).await.unwrap();

    let fetched = controller.get_by_id(car.id).await.unwrap();
    assert_eq!(fetched, car);
    assert_eq!(fetched.horsepower, Some(68));
    assert_eq!(fetched.consumption, Some(6.8));
    assert_eq!(fetched.is_drivable, Some(true));
    assert_eq!(fetched.manufacture_date.map(|d| d.to_string()).as_deref(), Some("1990-05-01"));

    let by_model = CarRepository::new(pool).find_by_model(model.id).await.unwrap();
    assert_eq!(ids(&by_model), BTreeSet::from([car.id]));
}

#[tokio::test]
async fn test_update_replaces_row_and_reports_missing() {
    let Some(pool) = test_pool().await else { return };
    let controller = ManufacturerController::new(pool);
    let created = controller
        .create(&ManufacturerForm {
            name: Some(unique("Jawa")),
            city: Some("Tynec".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    let renamed = unique("Jawa Moto");
    let updated = controller
        .update(
            created.id,
            &ManufacturerForm {
                name: Some(renamed.clone()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, renamed);
    assert_eq!(updated.city, None);

    let missing = controller
        .update(
            i32::MAX,
            &ManufacturerForm {
                name: Some("Nobody".into()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(missing, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_restricts_parents_with_children() {
    let Some(pool) = test_pool().await else { return };
    let manufacturers = ManufacturerController::new(pool.clone());
    let models = CarModelController::new(pool.clone());
    let cars = CarController::new(pool.clone());

    let m = ManufacturerRepository::new(pool.clone())
        .create(&new_manufacturer(&unique("Aero")))
        .await
        .unwrap();
    let model = CarModelRepository::new(pool.clone())
        .create(&new_model(m.id, "30"))
        .await
        .unwrap();
    let car = CarRepository::new(pool.clone())
        .create(&new_car(model.id))
        .await
        .unwrap();

    assert!(matches!(manufacturers.delete(m.id).await, Err(AppError::Conflict(_))));
    assert!(matches!(models.delete(model.id).await, Err(AppError::Conflict(_))));
    assert_eq!(manufacturers.get_by_id(m.id).await.unwrap().id, m.id);

    cars.delete(car.id).await.unwrap();
    models.delete(model.id).await.unwrap();
    manufacturers.delete(m.id).await.unwrap();

    assert!(matches!(manufacturers.get_by_id(m.id).await, Err(AppError::NotFound(_))));
    assert!(matches!(cars.delete(car.id).await, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_models_listed_by_manufacturer() {
    let Some(pool) = test_pool().await else { return };
    let m = ManufacturerRepository::new(pool.clone())
        .create(&new_manufacturer(&unique("Velorex")))
        .await
        .unwrap();
    let repository = CarModelRepository::new(pool.clone());
    let first = repository.create(&new_model(m.id, "16/350")).await.unwrap();
    let second = repository.create(&new_model(m.id, "Oskar")).await.unwrap();

    let listed = CarModelController::new(pool).list(Some(m.id)).await.unwrap();
    let listed_ids: Vec<i32> = listed.iter().map(|model| model.id).collect();
    assert_eq!(listed_ids, vec![first.id, second.id]);
}
