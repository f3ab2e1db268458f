use crate::modules::scheduling::adapters::outbound::in_memory_calendar::InMemoryCalendar;
use crate::shell::http::router;
use crate::tests::fixtures::calendar_events::{AVAILABILITY_KEYWORD, availability_block};
use crate::tests::fixtures::state::make_test_state;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{NaiveDate, TimeDelta, TimeZone, Utc};
use chrono_tz::UTC;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn get(uri: String) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn book(customer: &str, start_time: &str) -> Request<Body> {
    let body = serde_json::json!({ "customer": customer, "start_time": start_time }).to_string();
    Request::post("/appointments")
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn open_day() -> (NaiveDate, Router) {
    let date = (Utc::now() + TimeDelta::days(2)).date_naive();
    let opens = Utc.from_utc_datetime(&date.and_hms_opt(9, 0, 0).unwrap());
    let calendar = InMemoryCalendar::new(AVAILABILITY_KEYWORD, UTC);
    calendar
        .insert(availability_block(opens, opens + TimeDelta::hours(1)))
        .await;
    (date, router(make_test_state(Arc::new(calendar))))
}

#[tokio::test]
async fn books_lists_and_cancels_an_appointment() {
    let (date, app) = open_day().await;
    let nine = format!("{date}T09:00:00Z");

    let (status, health) = send(&app, get("/health".into())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(health["status"], "ok");

    let (_, slots) = send(&app, get(format!("/available-slots?date={date}"))).await;
    assert_eq!(slots.as_array().unwrap().len(), 2);

    let (status, appointment) = send(&app, book("34600111222", &nine)).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = appointment["id"].as_str().unwrap().to_string();

    let (_, slots) = send(&app, get(format!("/available-slots?date={date}"))).await;
    let slots = slots.as_array().unwrap();
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0]["start_time"], format!("{date}T09:30:00Z"));

    let (status, _) = send(&app, book("34600333444", &nine)).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, upcoming) = send(&app, get("/appointments?customer=34600111222".into())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(upcoming[0]["id"], id.as_str());

    let (status, _) = send(
        &app,
        Request::delete(format!("/appointments/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, slots) = send(&app, get(format!("/available-slots?date={date}"))).await;
    assert_eq!(slots.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn finds_the_next_open_day_until_it_is_fully_booked() {
    let (date, app) = open_day().await;
    let yesterday = date.pred_opt().unwrap();

    let (_, days) = send(&app, get(format!("/available-days?start_date={yesterday}"))).await;
    assert_eq!(days, serde_json::json!([date.to_string()]));

    for start in ["09:00", "09:30"] {
        let (status, _) = send(&app, book("34600111222", &format!("{date}T{start}:00Z"))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, days) = send(&app, get(format!("/available-days?start_date={yesterday}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(days, serde_json::json!([]));
}
