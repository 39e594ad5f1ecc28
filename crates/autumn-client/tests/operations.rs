//! Request shapes of the domain operations.

mod common;

use autumn_client::{
    ApiResult, AttachParams, BillingPortalParams, CancelParams, CheckoutParams,
    CreateCustomerParams, CreateReferralCodeParams, CustomerData, CustomerExpand,
    DeleteProductParams, EntityInput, FeatureSelector, GetCustomerParams, GetEntityParams,
    ListCustomersParams, ListProductsParams, QueryParams, QueryRange, RedeemReferralCodeParams,
    SetupPaymentParams, UpdateCustomerParams, UsageParams, INVALID_RESPONSE_CODE,
};
use serde_json::{json, Value};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{test_client, test_id};

async fn expect_post(server: &MockServer, route: &str, body: Value, response: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/v1{route}").as_str()))
        .and(body_json(body))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn checkout_posts_params() {
    let server = MockServer::start().await;
    let customer_id = test_id();

    expect_post(
        &server,
        "/checkout",
        json!({
            "customer_id": customer_id,
            "product_id": "pro",
            "success_url": "https://app.example.com/done",
            "customer_data": {"email": "a@example.com"}
        }),
        json!({"customer_id": customer_id, "url": "https://checkout.example.com/s/1"}),
    )
    .await;

    let params = CheckoutParams {
        success_url: Some("https://app.example.com/done".into()),
        customer_data: Some(CustomerData {
            email: Some("a@example.com".into()),
            ..CustomerData::default()
        }),
        ..CheckoutParams::new(&customer_id, "pro")
    };
    let response = test_client(&server)
        .checkout(params)
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(response.url.as_deref(), Some("https://checkout.example.com/s/1"));
    assert!(response.lines.is_empty());
}

#[tokio::test]
async fn attach_posts_params() {
    let server = MockServer::start().await;

    expect_post(
        &server,
        "/attach",
        json!({"customer_id": "cus_1", "product_id": "pro", "force_checkout": true}),
        json!({
            "customer_id": "cus_1",
            "product_ids": ["pro"],
            "code": "checkout_created",
            "checkout_url": "https://checkout.example.com/s/2"
        }),
    )
    .await;

    let params = AttachParams {
        force_checkout: Some(true),
        ..AttachParams::new("cus_1", "pro")
    };
    let response = test_client(&server).attach(params).await.unwrap();

    assert_eq!(response.data().map(|r| r.code.as_str()), Some("checkout_created"));
}

#[tokio::test]
async fn setup_payment_cancel_and_usage() {
    let server = MockServer::start().await;

    expect_post(
        &server,
        "/setup_payment",
        json!({"customer_id": "cus_1"}),
        json!({"customer_id": "cus_1", "url": "https://pay.example.com"}),
    )
    .await;
    expect_post(
        &server,
        "/cancel",
        json!({"customer_id": "cus_1", "product_id": "pro", "cancel_immediately": true}),
        json!({"success": true, "customer_id": "cus_1", "product_id": "pro"}),
    )
    .await;
    expect_post(
        &server,
        "/usage",
        json!({"customer_id": "cus_1", "feature_id": "seats", "value": 4.0}),
        json!({"code": "usage_set", "customer_id": "cus_1", "feature_id": "seats"}),
    )
    .await;

    let client = test_client(&server);

    let setup = client
        .setup_payment(SetupPaymentParams {
            customer_id: "cus_1".into(),
            ..SetupPaymentParams::default()
        })
        .await
        .unwrap();
    assert_eq!(setup.data().map(|r| r.url.as_str()), Some("https://pay.example.com"));

    let cancel = client
        .cancel(CancelParams {
            customer_id: "cus_1".into(),
            product_id: "pro".into(),
            entity_id: None,
            cancel_immediately: Some(true),
        })
        .await
        .unwrap();
    assert_eq!(cancel.data().map(|r| r.success), Some(true));

    let usage = client
        .usage(UsageParams {
            customer_id: "cus_1".into(),
            feature_id: "seats".into(),
            value: 4.0,
            customer_data: None,
        })
        .await
        .unwrap();
    assert_eq!(usage.data().map(|r| r.code.as_str()), Some("usage_set"));
}

#[tokio::test]
async fn query_posts_range() {
    let server = MockServer::start().await;

    expect_post(
        &server,
        "/query",
        json!({"customer_id": "cus_1", "feature_id": ["a", "b"], "range": "30d"}),
        json!({"list": [{"period": 1, "a": 3}]}),
    )
    .await;

    let result = test_client(&server)
        .query(QueryParams {
            customer_id: "cus_1".into(),
            feature_id: FeatureSelector::Many(vec!["a".into(), "b".into()]),
            range: Some(QueryRange::Month),
        })
        .await
        .unwrap();

    assert_eq!(result.data().map(|r| r.list.len()), Some(1));
}

#[tokio::test]
async fn unexpected_success_body_is_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/check"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let result = test_client(&server)
        .check(autumn_client::CheckParams::feature("cus_1", "messages"))
        .await
        .unwrap();

    let error = result.error().unwrap();
    assert_eq!(error.code.as_str(), Some(INVALID_RESPONSE_CODE));
    assert_eq!(error.status_code, 200);
}

#[tokio::test]
async fn customer_lifecycle_paths() {
    let server = MockServer::start().await;
    let customer_id = test_id();
    let customer = json!({"id": customer_id, "products": [], "features": {}});

    Mock::given(method("GET"))
        .and(path(format!("/v1/customers/{customer_id}").as_str()))
        .and(query_param("expand", "invoices,entities"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&customer))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customers"))
        .and(query_param("limit", "10"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"list": [customer], "total": 1})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customers"))
        .and(body_json(json!({"id": customer_id, "name": "Ada"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&customer))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/customers/{customer_id}").as_str()))
        .and(body_json(json!({"email": "ada@example.com"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(&customer))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/v1/customers/{customer_id}/billing_portal").as_str()))
        .and(body_json(json!({"return_url": "https://app.example.com"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"customer_id": customer_id, "url": "https://portal"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(format!("/v1/customers/{customer_id}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let customers = client.customers();

    let fetched = customers
        .get(
            &customer_id,
            GetCustomerParams {
                expand: vec![CustomerExpand::Invoices, CustomerExpand::Entities],
            },
        )
        .await
        .unwrap();
    assert!(fetched.is_data());

    let page = customers
        .list(ListCustomersParams {
            limit: Some(10),
            offset: None,
        })
        .await
        .unwrap();
    assert_eq!(page.data().and_then(|p| p.total), Some(1));

    let created = customers
        .create(CreateCustomerParams {
            id: Some(customer_id.clone()),
            name: Some("Ada".into()),
            ..CreateCustomerParams::default()
        })
        .await
        .unwrap();
    assert!(created.is_data());

    let updated = customers
        .update(
            &customer_id,
            UpdateCustomerParams {
                email: Some("ada@example.com".into()),
                ..UpdateCustomerParams::default()
            },
        )
        .await
        .unwrap();
    assert!(updated.is_data());

    let portal = customers
        .billing_portal(
            &customer_id,
            BillingPortalParams {
                return_url: Some("https://app.example.com".into()),
            },
        )
        .await
        .unwrap();
    assert_eq!(portal.data().map(|p| p.url.as_str()), Some("https://portal"));

    let deleted = customers.delete(&customer_id).await.unwrap();
    assert_eq!(deleted, ApiResult::Data(json!({"success": true})));
}

#[tokio::test]
async fn path_segments_are_encoded() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/products/team%2Fpro"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"id": "team/pro", "name": "Pro"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let product = test_client(&server).products().get("team/pro").await.unwrap();
    assert_eq!(product.data().map(|p| p.id.as_str()), Some("team/pro"));
}

#[tokio::test]
async fn entity_paths_nest_under_customer() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/customers/cus_1/entities"))
        .and(body_json(json!([{"id": "seat_1", "feature_id": "seats"}])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customers/cus_1/entities/seat_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "seat_1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customers/cus_1/entities/seat_1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let entities = client.entities();

    let created = entities
        .create(
            "cus_1",
            vec![EntityInput {
                id: "seat_1".into(),
                feature_id: "seats".into(),
                name: None,
            }],
        )
        .await
        .unwrap();
    assert!(created.is_data());

    let entity = entities
        .get("cus_1", "seat_1", GetEntityParams::default())
        .await
        .unwrap();
    assert_eq!(entity.data().map(|e| e.id.as_str()), Some("seat_1"));

    assert!(entities.delete("cus_1", "seat_1").await.unwrap().is_data());
}

#[tokio::test]
async fn catalog_operations() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/products"))
        .and(query_param("customer_id", "cus_1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"list": [{"id": "pro", "name": "Pro"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/products/pro"))
        .and(query_param("all_versions", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/features"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"list": [{"id": "messages", "type": "single_use"}]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/features/messages"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": "messages", "type": "single_use"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);

    let products = client
        .products()
        .list(ListProductsParams {
            customer_id: Some("cus_1".into()),
        })
        .await
        .unwrap();
    assert_eq!(products.data().map(|p| p.list.len()), Some(1));

    let deleted = client
        .products()
        .delete("pro", DeleteProductParams { all_versions: true })
        .await
        .unwrap();
    assert!(deleted.is_data());

    let features = client.features().list().await.unwrap();
    assert_eq!(features.data().map(|f| f.list[0].kind.as_str()), Some("single_use"));

    let feature = client.features().get("messages").await.unwrap();
    assert!(feature.is_data());
}

#[tokio::test]
async fn referral_codes() {
    let server = MockServer::start().await;

    expect_post(
        &server,
        "/referrals/code",
        json!({"customer_id": "cus_1", "program_id": "friends"}),
        json!({"code": "ABC123", "customer_id": "cus_1"}),
    )
    .await;
    expect_post(
        &server,
        "/referrals/redeem",
        json!({"code": "ABC123", "customer_id": "cus_2"}),
        json!({"id": "red_1", "customer_id": "cus_2", "applied": true}),
    )
    .await;

    let client = test_client(&server);
    let referrals = client.referrals();

    let code = referrals
        .create_code(CreateReferralCodeParams {
            customer_id: "cus_1".into(),
            program_id: "friends".into(),
        })
        .await
        .unwrap();
    assert_eq!(code.data().map(|c| c.code.as_str()), Some("ABC123"));

    let redemption = referrals
        .redeem_code(RedeemReferralCodeParams {
            code: "ABC123".into(),
            customer_id: "cus_2".into(),
        })
        .await
        .unwrap();
    assert_eq!(redemption.data().map(|r| r.applied), Some(true));
}
