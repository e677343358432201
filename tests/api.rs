mod helpers;

use barbershop_sdk::{
    APIError, CreateCustomerInput, CreateServiceInput, CreateShopInfoInput, ServiceVisit,
    UpdateCustomerInput, UpdateServiceInput, UpdateShopInfoInput, ID,
};
use helpers::setup::spawn_app;
use reqwest::StatusCode;
use serde_json::{json, Value};

fn haircut() -> CreateServiceInput {
    CreateServiceInput {
        name: "Haircut".into(),
        price: 20,
        duration_minutes: 30,
    }
}

fn expect_status<T: std::fmt::Debug>(res: Result<T, APIError>, expected: StatusCode) {
    match res {
        Err(APIError::UnexpectedStatusCode(status)) => assert_eq!(status, expected),
        other => panic!("Expected status {}, got: {:?}", expected, other),
    }
}

#[actix_web::test]
async fn test_status_ok() {
    let (_, sdk, _) = spawn_app().await;
    let body = sdk.status.check_health().await.unwrap();
    assert_eq!(body, "API BARBER!\n");
}

#[actix_web::test]
async fn test_service_lifecycle() {
    let (_, sdk, _) = spawn_app().await;

    let created = sdk.service.create(haircut()).await.unwrap();
    assert!(!created.id.as_string().is_empty());
    assert_eq!(created.name, "Haircut");
    assert_eq!(created.price, 20);
    assert_eq!(created.duration_minutes, 30);

    let fetched = sdk.service.get(created.id.clone()).await.unwrap();
    assert_eq!(fetched, created);

    let deleted = sdk.service.delete(created.id.clone()).await.unwrap();
    assert_eq!(deleted.message, "Service deleted successfully");

    expect_status(sdk.service.get(created.id.clone()).await, StatusCode::NOT_FOUND);
    assert!(sdk.service.get_all().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_create_responds_with_created_and_pretty_json() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/services", address))
        .json(&json!({
            "_id": "000000000000000000000000",
            "name": "Beard trim",
            "price": 10,
            "duration_minutes": 15,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);

    let text = res.text().await.unwrap();
    assert!(text.contains('\n'));
    let body: Value = serde_json::from_str(&text).unwrap();
    assert_ne!(body["_id"], "000000000000000000000000");
    assert_eq!(body["name"], "Beard trim");
}

#[actix_web::test]
async fn test_create_reads_null_fields_as_empty() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/customers", address))
        .json(&json!({ "name": "Ana", "phone": null, "services_received": null }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["name"], "Ana");
    assert_eq!(body["phone"], "");
    assert_eq!(body["services_received"], json!([]));

    let res = client
        .post(format!("{}/datos", address))
        .json(&json!({ "barber_shop": null, "address": "Main St 1" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["barber_shop"], "");
    assert_eq!(body["address"], "Main St 1");
}

#[actix_web::test]
async fn test_service_partial_update() {
    let (_, sdk, _) = spawn_app().await;
    let created = sdk.service.create(haircut()).await.unwrap();

    let updated = sdk
        .service
        .update(UpdateServiceInput {
            service_id: created.id.clone(),
            price: Some(25),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.price, 25);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.duration_minutes, created.duration_minutes);
    assert_eq!(sdk.service.get(created.id).await.unwrap(), updated);
}

#[actix_web::test]
async fn test_customer_update_with_only_name_keeps_other_fields() {
    let (_, sdk, _) = spawn_app().await;
    let service = sdk.service.create(haircut()).await.unwrap();

    let created = sdk
        .customer
        .create(CreateCustomerInput {
            name: "Ana".into(),
            phone: "555-0101".into(),
            email: "ana@example.com".into(),
            last_visit: "2023-01-10".into(),
            services_received: vec![ServiceVisit {
                service_id: service.id.clone(),
                date: "2023-01-10".into(),
            }],
        })
        .await
        .unwrap();

    let updated = sdk
        .customer
        .update(UpdateCustomerInput {
            customer_id: created.id.clone(),
            name: Some("Ana Maria".into()),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(updated.name, "Ana Maria");
    assert_eq!(updated.phone, created.phone);
    assert_eq!(updated.email, created.email);
    assert_eq!(updated.last_visit, created.last_visit);
    assert_eq!(updated.services_received, created.services_received);
    assert_eq!(updated.services_received[0].service_id, service.id);
}

#[actix_web::test]
async fn test_customer_visits_survive_service_deletion() {
    let (_, sdk, _) = spawn_app().await;
    let service = sdk.service.create(haircut()).await.unwrap();
    let customer = sdk
        .customer
        .create(CreateCustomerInput {
            name: "Luis".into(),
            services_received: vec![ServiceVisit {
                service_id: service.id.clone(),
                date: "2023-02-01".into(),
            }],
            ..Default::default()
        })
        .await
        .unwrap();

    sdk.service.delete(service.id.clone()).await.unwrap();

    let fetched = sdk.customer.get(customer.id.clone()).await.unwrap();
    assert_eq!(fetched.services_received.len(), 1);
    assert_eq!(fetched.services_received[0].service_id, service.id);

    let deleted = sdk.customer.delete(customer.id.clone()).await.unwrap();
    assert_eq!(deleted.message, "Customer deleted successfully");
    expect_status(sdk.customer.get(customer.id).await, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_shop_info_lifecycle() {
    let (_, sdk, address) = spawn_app().await;

    let created = sdk
        .shop_info
        .create(CreateShopInfoInput {
            name: "Barberia Central".into(),
            address: "Main St 1".into(),
            phone: "555-0100".into(),
        })
        .await
        .unwrap();

    let raw: Value = reqwest::get(format!("{}/datos/{}", address, created.id))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(raw["barber_shop"], "Barberia Central");

    let updated = sdk
        .shop_info
        .update(UpdateShopInfoInput {
            shop_info_id: created.id.clone(),
            phone: Some("555-0199".into()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(updated.phone, "555-0199");
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.address, created.address);

    // Several rows may exist side by side
    sdk.shop_info
        .create(CreateShopInfoInput {
            name: "Barberia Norte".into(),
            address: "North St 2".into(),
            phone: "555-0200".into(),
        })
        .await
        .unwrap();
    assert_eq!(sdk.shop_info.get_all().await.unwrap().len(), 2);

    let deleted = sdk.shop_info.delete(created.id).await.unwrap();
    assert_eq!(deleted.message, "Shop info deleted successfully");
    assert_eq!(sdk.shop_info.get_all().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_empty_collections_list_as_empty_arrays() {
    let (_, _, address) = spawn_app().await;

    for path in ["services", "customers", "datos"] {
        let res = reqwest::get(format!("{}/{}", address, path)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(res.text().await.unwrap(), "[]");
    }
}

#[actix_web::test]
async fn test_invalid_ids_are_bad_requests() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();

    for resource in ["services", "customers", "datos"] {
        let url = format!("{}/{}/not-a-valid-id", address, resource);
        let requests = [
            client.get(&url),
            client.put(&url).json(&json!({})),
            client.delete(&url),
        ];
        for req in requests {
            let res = req.send().await.unwrap();
            assert_eq!(res.status(), StatusCode::BAD_REQUEST, "{}", url);
            let body: Value = res.json().await.unwrap();
            assert!(body["message"].is_string());
        }
    }
}

#[actix_web::test]
async fn test_malformed_bodies_are_bad_requests() {
    let (_, _, address) = spawn_app().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/services", address))
        .header("content-type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].is_string());

    let res = client
        .post(format!("{}/services", address))
        .json(&json!({ "name": "Haircut", "price": "twenty" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_unknown_ids() {
    let (_, sdk, _) = spawn_app().await;

    expect_status(sdk.customer.get(ID::default()).await, StatusCode::NOT_FOUND);
    expect_status(
        sdk.shop_info
            .update(UpdateShopInfoInput {
                shop_info_id: ID::default(),
                ..Default::default()
            })
            .await,
        StatusCode::NOT_FOUND,
    );
    expect_status(
        sdk.service
            .update(UpdateServiceInput {
                service_id: ID::default(),
                name: Some("Shave".into()),
                ..Default::default()
            })
            .await,
        StatusCode::NOT_FOUND,
    );

    // Deleting is idempotent
    let deleted = sdk.service.delete(ID::default()).await.unwrap();
    assert_eq!(deleted.message, "Service deleted successfully");
}
