mod common;

use actix_web::test;
use serde_json::json;
use serial_test::serial;

use common::TestApp;

#[actix_rt::test]
#[serial]
async fn test_create_booking_defaults() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let session = &body["session"];
    assert_eq!(session["status"], "editing");
    assert_eq!(session["selection"]["tour"], "boat-tour");
    assert_eq!(session["selection"]["adults"], 2);
    assert_eq!(session["selection"]["children"], 0);
    assert_eq!(session["selection"]["payment_method"], "payInPerson");
    // 2 adults x 54
    assert_eq!(body["quote"]["total_eur"], 108.0);
    assert_eq!(body["transfer_included"], true);
}

#[actix_rt::test]
#[serial]
async fn test_create_booking_seeded_from_query() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings?tour=local-experience&date=2026-09-01&guests=9%2B")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 201);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let selection = &body["session"]["selection"];
    assert_eq!(selection["tour"], "local-experience");
    assert_eq!(selection["date"], "2026-09-01");
    assert_eq!(selection["adults"], 9);
    let add_ons: Vec<&str> = body["selectable_add_ons"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert!(add_ons.contains(&"extraDay"));
    assert!(!add_ons.contains(&"transfer"));
}

#[actix_rt::test]
#[serial]
async fn test_get_booking_not_found() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/api/bookings/00000000-0000-0000-0000-000000000000")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_update_booking_recomputes_quote() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({ "add_kayak": true, "add_ferry": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    // 108 + 2 guests x (20 kayak + 10 ferry)
    assert_eq!(body["quote"]["total_eur"], 168.0);
}

#[actix_rt::test]
#[serial]
async fn test_guest_counter_adjustments() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/guests"))
        .set_json(&json!({ "category": "children", "direction": "increment" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["session"]["selection"]["children"], 1);
    // 2 x 54 + 1 x 54 x 0.7
    let total = body["quote"]["total_eur"].as_f64().unwrap();
    assert!((total - 145.8).abs() < 0.01);
}

#[actix_rt::test]
#[serial]
async fn test_adults_never_drop_below_one() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings?guests=1")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();
    assert_eq!(body["session"]["selection"]["adults"], 1);

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/guests"))
        .set_json(&json!({ "category": "adults", "direction": "decrement" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["session"]["selection"]["adults"], 1);
}

#[actix_rt::test]
#[serial]
async fn test_children_decrement_floors_at_zero() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/guests"))
        .set_json(&json!({ "category": "children", "direction": "decrement" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["session"]["selection"]["children"], 0);
}

#[actix_rt::test]
#[serial]
async fn test_submit_rejects_incomplete_contact() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let errors = body["errors"].as_object().unwrap();
    assert!(errors.contains_key("name"));
    assert!(errors.contains_key("email"));
    assert!(errors.contains_key("phone"));

    // The session is still editable after a failed submit.
    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["session"]["status"], "editing");
}

#[actix_rt::test]
#[serial]
async fn test_submit_name_length_boundary() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({
            "name": "M",
            "email": "guest@example.com",
            "phone": "+35569000000"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["errors"]["name"], "Name must be at least 2 characters.");

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({ "name": "Mo" }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
}

#[actix_rt::test]
#[serial]
async fn test_submit_success_confirmation() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({
            "name": "Mario Molla",
            "email": "guest@example.com",
            "phone": "+35569000000"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["status"], "success");
    assert!(body["reference"].as_str().unwrap().starts_with("KT-"));
    assert_eq!(body["tour_title"], "Komani Lake Boat Tour");
    assert!(body["message"].as_str().unwrap().contains("Mario Molla"));
    assert!(body["message"]
        .as_str()
        .unwrap()
        .contains("guest@example.com"));
    assert_eq!(body["quote"]["total_eur"], 108.0);
    // Pay in person: no manual payment instructions.
    assert!(
        body.get("payment_instructions").is_none() || body["payment_instructions"].is_null()
    );
}

#[actix_rt::test]
#[serial]
async fn test_submit_pay_now_includes_payment_instructions() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({
            "name": "Mario Molla",
            "email": "guest@example.com",
            "phone": "+35569000000",
            "payment_method": "payNow"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let instructions = &body["payment_instructions"];
    assert_eq!(instructions["recipient"], "mariomolla@outlook.com");
    assert_eq!(instructions["title"], "Complete Payment via PayPal");
}

#[actix_rt::test]
#[serial]
async fn test_submit_is_terminal_and_fires_once() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({
            "name": "Mario Molla",
            "email": "guest@example.com",
            "phone": "+35569000000"
        }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    // Second submit conflicts instead of confirming twice.
    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/submit"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    // Editing is over once the booking is confirmed.
    let req = test::TestRequest::patch()
        .uri(&format!("/api/bookings/{id}"))
        .set_json(&json!({ "add_kayak": true }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);

    let req = test::TestRequest::post()
        .uri(&format!("/api/bookings/{id}/guests"))
        .set_json(&json!({ "category": "adults", "direction": "increment" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_rt::test]
#[serial]
async fn test_delete_booking_discards_session() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/api/bookings").to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    let id = body["session"]["id"].as_str().unwrap().to_string();

    let req = test::TestRequest::delete()
        .uri(&format!("/api/bookings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::get()
        .uri(&format!("/api/bookings/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 404);
}

#[actix_rt::test]
#[serial]
async fn test_locale_passthrough_on_session() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/bookings?tour=helicopter-tour&locale=sq")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["quote"]["price_on_request"], true);
    assert_eq!(body["quote"]["display_total"], "Kontakto");
}
