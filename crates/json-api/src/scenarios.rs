//! End-to-end scenarios against the full router and an in-memory store.

use salvo::{
    affix_state::inject,
    http::header::{ACCEPT, LOCATION},
    prelude::*,
    test::{ResponseExt, TestClient},
};
use serde_json::{Value, json};
use testresult::TestResult;

use crate::{
    promotions::responses::{PromotionActivatedResponse, PromotionResponse},
    router::app_router,
    test_helpers::{InMemoryPromotions, state_with_promotions},
};

const BASE: &str = "http://example.com/promotions";

fn service() -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_promotions(InMemoryPromotions::default())))
            .push(app_router()),
    )
}

fn flash_sale() -> Value {
    json!({
        "name": "Flash Sale",
        "promo_type": "PERCENT_OFF",
        "product_id": 123,
        "amount": 25.0,
        "start_date": "2025-06-01",
        "end_date": "2025-06-30"
    })
}

async fn create(service: &Service, payload: &Value) -> TestResult<PromotionResponse> {
    let mut res = TestClient::post(BASE).json(payload).send(service).await;

    assert_eq!(res.status_code, Some(StatusCode::CREATED));

    Ok(res.take_json().await?)
}

async fn list(service: &Service, query: &str) -> TestResult<Vec<PromotionResponse>> {
    Ok(TestClient::get(format!("{BASE}{query}"))
        .send(service)
        .await
        .take_json()
        .await?)
}

#[tokio::test]
async fn creating_a_flash_sale_echoes_every_field() -> TestResult {
    let service = service();

    let mut res = TestClient::post(BASE)
        .json(&flash_sale())
        .send(&service)
        .await;

    let body: PromotionResponse = res.take_json().await?;
    let location = res
        .headers()
        .get(LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);

    assert_eq!(res.status_code, Some(StatusCode::CREATED));
    assert_eq!(location, Some(format!("/promotions/{}", body.id)));
    assert_eq!(
        body,
        PromotionResponse {
            id: body.id,
            name: "Flash Sale".to_string(),
            promo_type: "PERCENT_OFF".to_string(),
            product_id: 123,
            amount: 25.0,
            start_date: "2025-06-01".to_string(),
            end_date: "2025-06-30".to_string(),
            status: true,
        }
    );

    Ok(())
}

#[tokio::test]
async fn created_promotions_get_fresh_ids() -> TestResult {
    let service = service();

    let mut payload = flash_sale();

    payload["id"] = json!(500);

    let first = create(&service, &payload).await?;
    let second = create(&service, &payload).await?;

    assert_ne!(first.id, second.id);
    assert_ne!(first.id, 500);

    Ok(())
}

#[tokio::test]
async fn filtering_by_id_matches_the_direct_read() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;

    let read: PromotionResponse = TestClient::get(format!("{BASE}/{}", created.id))
        .send(&service)
        .await
        .take_json()
        .await?;

    assert_eq!(list(&service, &format!("?id={}", created.id)).await?, vec![read]);

    let missing = TestClient::get(format!("{BASE}?id={}", created.id + 1000))
        .send(&service)
        .await;

    let invalid = TestClient::get(format!("{BASE}?id=abc")).send(&service).await;

    assert_eq!(missing.status_code, Some(StatusCode::NOT_FOUND));
    assert_eq!(invalid.status_code, Some(StatusCode::BAD_REQUEST));

    Ok(())
}

#[tokio::test]
async fn filtering_by_name_and_type() -> TestResult {
    let service = service();

    create(&service, &flash_sale()).await?;

    let mut bogo = flash_sale();

    bogo["name"] = json!("Two for One");
    bogo["promo_type"] = json!("BOGO");

    create(&service, &bogo).await?;

    let by_name = list(&service, "?name=Two%20for%20One").await?;
    let by_type = list(&service, "?promo_type=PERCENT_OFF").await?;

    assert_eq!(by_name.len(), 1, "expected one promotion named Two for One");
    assert_eq!(by_name.first().map(|p| p.promo_type.as_str()), Some("BOGO"));
    assert_eq!(by_type.len(), 1, "expected one PERCENT_OFF promotion");
    assert_eq!(list(&service, "").await?.len(), 2, "expected both promotions");

    Ok(())
}

#[tokio::test]
async fn deleting_twice_succeeds_both_times() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;
    let url = format!("{BASE}/{}", created.id);

    let first = TestClient::delete(&url).send(&service).await;
    let second = TestClient::delete(&url).send(&service).await;
    let read = TestClient::get(&url).send(&service).await;

    assert_eq!(first.status_code, Some(StatusCode::NO_CONTENT));
    assert_eq!(second.status_code, Some(StatusCode::NO_CONTENT));
    assert_eq!(read.status_code, Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn activation_round_trip_is_idempotent() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;
    let url = format!("{BASE}/{}", created.id);

    for _ in 0..2 {
        let mut res = TestClient::delete(format!("{url}/deactivate"))
            .send(&service)
            .await;

        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert!(!body.status, "expected the promotion to stay inactive");
    }

    for _ in 0..2 {
        let mut res = TestClient::put(format!("{url}/activate"))
            .send(&service)
            .await;

        let body: PromotionActivatedResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.message, format!("Promotion {} activated", created.id));
        assert!(body.status, "expected the promotion to stay active");
    }

    let missing = TestClient::put(format!("{BASE}/{}/activate", created.id + 1000))
        .send(&service)
        .await;

    assert_eq!(missing.status_code, Some(StatusCode::NOT_FOUND));

    Ok(())
}

#[tokio::test]
async fn update_keeps_the_path_id() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;
    let url = format!("{BASE}/{}", created.id);

    let mut mismatched = flash_sale();

    mismatched["id"] = json!(created.id + 1);
    mismatched["name"] = json!("Renamed");

    let rejected = TestClient::put(&url).json(&mismatched).send(&service).await;

    assert_eq!(rejected.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(list(&service, "?name=Renamed").await?.len(), 0, "expected no rename");

    for id in [Value::Null, json!(created.id)] {
        let mut payload = flash_sale();

        payload["id"] = id;
        payload["amount"] = json!(30.5);
        payload["status"] = json!(false);

        let mut res = TestClient::put(&url).json(&payload).send(&service).await;
        let body: PromotionResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.id, created.id);
        assert!((body.amount - 30.5).abs() < f64::EPSILON, "expected the new amount");
        assert!(!body.status, "expected the new status");
    }

    Ok(())
}

#[tokio::test]
async fn invalid_promo_type_changes_nothing() -> TestResult {
    let service = service();

    let mut invalid = flash_sale();

    invalid["promo_type"] = json!("HALF_OFF");

    let rejected = TestClient::post(BASE).json(&invalid).send(&service).await;

    assert_eq!(rejected.status_code, Some(StatusCode::BAD_REQUEST));
    assert!(list(&service, "").await?.is_empty(), "expected nothing stored");

    let created = create(&service, &flash_sale()).await?;
    let url = format!("{BASE}/{}", created.id);

    let rejected = TestClient::put(&url).json(&invalid).send(&service).await;

    let read: PromotionResponse = TestClient::get(&url)
        .send(&service)
        .await
        .take_json()
        .await?;

    assert_eq!(rejected.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(read, created);

    Ok(())
}

#[tokio::test]
async fn api_prefix_serves_the_same_resource() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;

    let read: PromotionResponse = TestClient::get(format!(
        "http://example.com/api/promotions/{}",
        created.id
    ))
    .send(&service)
    .await
    .take_json()
    .await?;

    assert_eq!(read, created);

    Ok(())
}

#[tokio::test]
async fn health_is_not_mistaken_for_an_id() -> TestResult {
    let body: Value = TestClient::get(format!("{BASE}/health"))
        .send(&service())
        .await
        .take_json()
        .await?;

    assert_eq!(body, json!({ "status": "OK" }));

    Ok(())
}

#[tokio::test]
async fn unacceptable_clients_are_refused_everywhere() -> TestResult {
    let service = service();

    for url in ["http://example.com/", BASE, "http://example.com/promotions/1"] {
        let res = TestClient::get(url)
            .add_header(ACCEPT, "application/xml", true)
            .send(&service)
            .await;

        assert_eq!(
            res.status_code,
            Some(StatusCode::NOT_ACCEPTABLE),
            "expected 406 from {url}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn root_describes_the_service() -> TestResult {
    let body: Value = TestClient::get("http://example.com/")
        .send(&service())
        .await
        .take_json()
        .await?;

    assert_eq!(
        body,
        json!({
            "name": "Promotions REST API",
            "version": "1.0",
            "list_endpoint": "/api/promotions"
        })
    );

    Ok(())
}

#[tokio::test]
async fn serialized_promotions_round_trip_through_update() -> TestResult {
    let service = service();

    let created = create(&service, &flash_sale()).await?;

    let mut res = TestClient::put(format!("{BASE}/{}", created.id))
        .json(&created)
        .send(&service)
        .await;

    let updated: PromotionResponse = res.take_json().await?;

    assert_eq!(res.status_code, Some(StatusCode::OK));
    assert_eq!(updated, created);

    Ok(())
}
