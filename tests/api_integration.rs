//! Integration tests for the Ecwid REST API client.
//!
//! Type tests check serialization against captured API payloads; the HTTP
//! tests run the client against an `httpmock` server.

use ecwid::api::*;

// =============================================================================
// Type Serialization/Deserialization Tests
// =============================================================================

mod product_types {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 42,
        "sku": "sky",
        "name": "Sky",
        "price": 9.99,
        "quantity": 5,
        "enabled": true,
        "inStock": true,
        "url": "https://store.example.org/Sky-p42",
        "created": "2015-09-20 19:59:43 +0000",
        "defaultCategoryId": 3,
        "categoryIds": [3, 4],
        "attributes": [
            {"id": 1, "name": "Brand", "value": "Acme", "type": "BRAND", "show": "DESCR"}
        ],
        "options": [
            {"type": "SELECT", "name": "Size", "required": true,
             "choices": [{"text": "XL", "priceModifier": 2, "priceModifierType": "ABSOLUTE"}],
             "defaultChoice": 0}
        ],
        "categories": [{"id": 3, "enabled": true}],
        "combinations": [{"id": 7, "combinationNumber": 1, "sku": "sky-xl", "quantity": 2}],
        "favorites": {"count": 3}
    }"#;

    #[test]
    fn test_product_deserialize() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, Id(42));
        assert_eq!(product.name.as_deref(), Some("Sky"));
        assert_eq!(product.sku.as_deref(), Some("sky"));
        assert_eq!(product.price, Some(9.99));
        assert!(product.in_stock);
        assert_eq!(product.category_ids, vec![Id(3), Id(4)]);
        assert_eq!(
            product
                .attributes
                .get_by_name("Brand")
                .map(|a| a.value.as_str()),
            Some("Acme")
        );
        assert_eq!(product.options[0].kind, Some(ProductOptionType::Select));
        assert_eq!(product.combinations[0].id, Id(7));
        assert_eq!(product.combinations[0].sku.as_deref(), Some("sky-xl"));
        assert_eq!(product.categories[0].id, Id(3));
    }

    #[test]
    fn test_product_to_new_product() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        let mut update = NewProduct::from(product);
        update.price = Some(10.5);
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["price"], 10.5);
        assert_eq!(json["sku"], "sky");
        assert!(json.get("id").is_none());
        assert!(json.get("inStock").is_none());
    }

    #[test]
    fn test_new_product_serialize_skips_unset() {
        let product = NewProduct::new("Boots", "BT-1", 42.0);
        let json = serde_json::to_string(&product).unwrap();
        assert_eq!(json, r#"{"name":"Boots","sku":"BT-1","price":42.0}"#);
    }

    #[test]
    fn test_negative_ids_read_as_zero() {
        let json = r#"{"id": 5, "defaultCategoryId": -1, "defaultCombinationId": -1}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.default_category_id, Some(Id(0)));
        assert_eq!(product.default_combination_id, Id(0));
    }

    #[test]
    fn test_variation_deserialize() {
        let json = r#"{
            "id": 11,
            "combinationNumber": 2,
            "sku": "sky-s",
            "unlimited": true,
            "options": [{"name": "Size", "value": "S"}],
            "imageUrl": "https://img.example.org/s.jpg"
        }"#;
        let variation: ProductVariation = serde_json::from_str(json).unwrap();
        assert_eq!(variation.id, Id(11));
        assert_eq!(variation.combination_number, 2);
        assert_eq!(variation.unlimited, Some(true));
        assert_eq!(variation.options[0].value, "S");
        assert!(variation.image_url.is_some());
    }

    #[test]
    fn test_product_type_serialize() {
        let mut product_type = ProductType::named("Shoes");
        product_type.attributes.append(Attribute {
            kind: "SIZE".to_string(),
            show: "DESCR".to_string(),
            ..Attribute::named("Size", "")
        });
        let json = serde_json::to_string(&product_type).unwrap();
        assert_eq!(
            json,
            r#"{"name":"Shoes","attributes":[{"name":"Size","type":"SIZE","show":"DESCR"}]}"#
        );
    }
}

mod category_types {
    use super::*;

    #[test]
    fn test_category_deserialize() {
        let json = r#"{
            "id": 9691094,
            "parentId": 9691093,
            "orderBy": 10,
            "name": "Shoes",
            "enabled": true,
            "productCount": 12,
            "enabledProductCount": 10,
            "originalImage": {"url": "https://img.example.org/c.jpg", "width": 100, "height": 50}
        }"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, Id(9691094));
        assert_eq!(category.parent_id, Some(Id(9691093)));
        assert_eq!(category.name.as_deref(), Some("Shoes"));
        assert_eq!(category.product_count, 12);
        assert_eq!(category.original_image.as_ref().map(|i| i.width), Some(100));
    }

    #[test]
    fn test_new_category_serialize() {
        let mut category = NewCategory::named("Boots");
        category.parent_id = Some(Id(5));
        let json = serde_json::to_string(&category).unwrap();
        assert_eq!(json, r#"{"name":"Boots","parentId":5}"#);
    }
}

mod order_types {
    use super::*;

    #[test]
    fn test_order_deserialize() {
        let json = r#"{
            "orderNumber": 1001,
            "vendorOrderNumber": "A-1001",
            "total": 59.5,
            "email": "buyer@example.org",
            "paymentStatus": "PAID",
            "fulfillmentStatus": "AWAITING_PROCESSING",
            "createDate": "2015-09-20 19:59:43 +0000",
            "items": [{"name": "Sky", "quantity": 2, "productId": 42, "price": 9.99,
                       "selectedOptions": [{"name": "Size", "type": "CHOICE", "value": "XL"}]}],
            "billingPerson": {"name": "Jane Roe", "countryCode": "US"},
            "predictedPackages": [{"length": 1, "width": 2, "height": 3, "weight": 0.5}],
            "extraFields": {"gift": "yes"}
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, Id(1001));
        assert_eq!(order.payment_status, Some(PaymentStatus::Paid));
        assert_eq!(
            order.fulfillment_status,
            Some(FulfillmentStatus::AwaitingProcessing)
        );
        assert_eq!(order.items[0].product_id, Id(42));
        assert_eq!(order.items[0].selected_options[0].value, "XL");
        assert_eq!(
            order.billing_person.as_ref().map(|p| p.name.as_str()),
            Some("Jane Roe")
        );
        assert_eq!(order.predicted_packages[0].dimensions.height, 3.0);
        assert_eq!(order.extra_fields.get("gift").map(String::as_str), Some("yes"));
        let created = order.create_date.as_ref().and_then(|d| d.parse()).unwrap();
        assert_eq!(created.timestamp(), 1442779183);
    }

    #[test]
    fn test_null_ids_read_as_zero() {
        let json = r#"{"orderNumber": 5, "customerGroupId": null,
                       "items": [{"name": "Sky", "productId": null}]}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, Id(5));
        assert_eq!(order.customer_group_id, Id(0));
        assert_eq!(order.items[0].product_id, Id(0));

        let product: Product =
            serde_json::from_str(r#"{"id": 7, "defaultCombinationId": null}"#).unwrap();
        assert_eq!(product.default_combination_id, Id(0));
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let json = r#"{"orderNumber": 1, "paymentStatus": "ON_HOLD"}"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.payment_status, Some(PaymentStatus::Unknown));
    }

    #[test]
    fn test_order_status_serialize() {
        let update = NewOrder {
            fulfillment_status: Some(FulfillmentStatus::Shipped),
            tracking_number: Some("1Z999".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(
            json,
            r#"{"fulfillmentStatus":"SHIPPED","trackingNumber":"1Z999"}"#
        );
    }
}

mod store_types {
    use super::*;

    #[test]
    fn test_store_profile_deserialize() {
        let json = r#"{
            "generalInfo": {
                "storeId": 1003,
                "storeUrl": "https://store.example.org",
                "starterSite": {"ecwidSubdomain": "shop", "generatedUrl": "https://shop.company.site"}
            },
            "account": {"accountName": "Jane", "accountEmail": "jane@example.org",
                        "availableFeatures": ["API"], "whiteLabel": false},
            "settings": {"closed": false}
        }"#;
        let profile: StoreProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.general_info.store_id, 1003);
        assert_eq!(profile.general_info.starter_site.ecwid_subdomain, "shop");
        assert_eq!(profile.account.available_features, vec!["API".to_string()]);
    }
}

mod error_types {
    use super::*;

    #[test]
    fn test_error_response_deserialize() {
        let json = r#"{"errorMessage": "Product not found", "errorCode": "PRODUCT_NOT_FOUND"}"#;
        let error: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(error.message(), Some("Product not found"));
        assert_eq!(error.error_code.as_deref(), Some("PRODUCT_NOT_FOUND"));
    }

    #[test]
    fn test_error_response_empty_message() {
        let error: ErrorResponse = serde_json::from_str(r#"{"errorMessage": ""}"#).unwrap();
        assert_eq!(error.message(), None);
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 400,
            message: "bad sku".to_string(),
        };
        assert_eq!(err.to_string(), "API error (400): bad sku");
        assert_eq!(err.status(), Some(400));
        assert!(!err.is_cancelled());
        assert!(ApiError::Cancelled.is_cancelled());
    }
}

// =============================================================================
// Client Tests
// =============================================================================

mod client {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = EcwidClient::new(1003, "token").unwrap();
        assert_eq!(client.base_url(), "https://app.ecwid.com/api/v3/1003");
    }

    #[test]
    fn test_client_builder() {
        let client = EcwidClient::builder(1003, "token")
            .host("api.example.org")
            .timeout_secs(5)
            .build()
            .unwrap();
        assert_eq!(client.base_url(), "https://api.example.org/api/v3/1003");
        assert_eq!(client.store_id(), 1003);
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + Clone>() {}
        assert_send_sync::<EcwidClient>();
    }
}

// =============================================================================
// HTTP Tests (mock server)
// =============================================================================

mod http {
    use super::*;
    use futures_util::StreamExt;
    use httpmock::prelude::*;
    use serde_json::json;
    use tokio_test::assert_ok;
    use tokio_util::sync::CancellationToken;

    const TOKEN: &str = "secret_token";

    fn client(server: &MockServer) -> EcwidClient {
        EcwidClient::builder(1003, TOKEN)
            .base_url(server.base_url())
            .build()
            .unwrap()
    }

    fn product(id: u64, name: &str) -> serde_json::Value {
        json!({"id": id, "name": name, "sku": format!("sku-{}", id)})
    }

    #[tokio::test]
    async fn test_products_search_sends_filter_and_token() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("token", TOKEN)
                .query_param("keyword", "shoes")
                .query_param("limit", "5");
            then.status(200).json_body(json!({
                "total": 1, "count": 1, "offset": 0, "limit": 5,
                "items": [product(1, "one")]
            }));
        });

        let page = client(&server)
            .products_search(&filter([("keyword", "shoes"), ("limit", "5")]))
            .await
            .unwrap();

        mock.assert_calls(1);
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].name.as_deref(), Some("one"));
    }

    /// Mocks a three-product catalog served one product per page, starting
    /// at offset 1.
    fn three_product_catalog(server: &MockServer) -> (httpmock::Mock<'_>, httpmock::Mock<'_>) {
        let second = server.mock(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("token", TOKEN)
                .query_param("offset", "1")
                .query_param("limit", "1");
            then.status(200).json_body(json!({
                "total": 3, "count": 1, "offset": 1, "limit": 1,
                "items": [product(2, "two")]
            }));
        });
        let third = server.mock(|when, then| {
            when.method(GET)
                .path("/products")
                .query_param("token", TOKEN)
                .query_param("offset", "2")
                .query_param("limit", "1");
            then.status(200).json_body(json!({
                "total": 3, "count": 1, "offset": 2, "limit": 1,
                "items": [product(3, "tree")]
            }));
        });
        (second, third)
    }

    #[tokio::test]
    async fn test_products_stream_end_to_end() {
        let server = MockServer::start();
        let (second, third) = three_product_catalog(&server);

        let filter = filter([("offset", "1"), ("limit", "1")]);
        let token = CancellationToken::new();
        let mut stream = client(&server).products(&token, &filter);

        let mut names = Vec::new();
        while let Some(product) = stream.next().await {
            names.push(product.name.clone().unwrap_or_default());
        }

        assert_eq!(names, vec!["two".to_string(), "tree".to_string()]);
        assert!(stream.finish().await.is_ok());
        second.assert_calls(1);
        third.assert_calls(1);
        assert_eq!(filter.get("offset").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_products_trampoline_indices() {
        let server = MockServer::start();
        let (second, third) = three_product_catalog(&server);

        let filter = filter([("offset", "1"), ("limit", "1")]);
        let mut seen = Vec::new();
        client(&server)
            .products_trampoline(&filter, |index, product| {
                seen.push((index, product.id));
                std::future::ready(Ok(()))
            })
            .await
            .unwrap();

        assert_eq!(seen, vec![(0, Id(2)), (1, Id(3))]);
        second.assert_calls(1);
        third.assert_calls(1);
        assert_eq!(filter.get("offset").map(String::as_str), Some("1"));
    }

    #[tokio::test]
    async fn test_stream_error_ends_silently_and_is_reported() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/orders").query_param("offset", "0");
            then.status(200).json_body(json!({
                "total": 5, "count": 2, "offset": 0, "limit": 2,
                "items": [{"orderNumber": 1}, {"orderNumber": 2}]
            }));
        });
        let failing = server.mock(|when, then| {
            when.method(GET).path("/orders").query_param("offset", "2");
            then.status(500).json_body(json!({"errorMessage": "boom"}));
        });

        let token = CancellationToken::new();
        let mut stream = client(&server).orders(&token, &filter([("offset", "0")]));
        let mut ids = Vec::new();
        while let Some(order) = stream.next().await {
            ids.push(order.order_id);
        }

        assert_eq!(ids, vec![Id(1), Id(2)]);
        failing.assert_calls(1);
        match stream.finish().await {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_stream_cancellation() {
        let server = MockServer::start();
        // never reaches the end: every page claims offset 0 of 1000
        server.mock(|when, then| {
            when.method(GET).path("/categories");
            then.status(200).json_body(json!({
                "total": 1000, "count": 1, "offset": 0, "limit": 1,
                "items": [{"id": 1, "name": "loop"}]
            }));
        });

        let filter = filter([("limit", "1")]);
        let token = CancellationToken::new();
        let mut stream = client(&server).categories(&token, &filter);

        for _ in 0..3 {
            assert!(stream.next().await.is_some());
        }
        token.cancel();
        while stream.next().await.is_some() {}

        assert!(matches!(stream.finish().await, Err(ApiError::Cancelled)));
        assert!(filter.get("offset").is_none());
    }

    #[tokio::test]
    async fn test_categories_stream_single_page() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/categories").query_param("parent", "0");
            then.status(200).json_body(json!({
                "total": 2, "count": 2, "offset": 0, "limit": 100,
                "items": [{"id": 1, "name": "Shoes"}, {"id": 2, "name": "Hats"}]
            }));
        });

        let token = CancellationToken::new();
        let names: Vec<String> = client(&server)
            .categories(&token, &filter([("parent", "0")]))
            .map(|c| c.name.clone().unwrap_or_default())
            .collect()
            .await;
        assert_eq!(names, vec!["Shoes".to_string(), "Hats".to_string()]);
    }

    #[tokio::test]
    async fn test_product_get() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/products/42")
                .query_param("token", TOKEN);
            then.status(200).json_body(product(42, "Sky"));
        });

        let product = client(&server).product_get(42u64).await.unwrap();
        assert_eq!(product.id, Id(42));
        assert_eq!(product.sku.as_deref(), Some("sku-42"));
    }

    #[tokio::test]
    async fn test_error_message_extracted() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products/1");
            then.status(400).json_body(json!({"errorMessage": "bad sku"}));
        });
        server.mock(|when, then| {
            when.method(GET).path("/products/2");
            then.status(400).body("oops");
        });

        let client = client(&server);
        match client.product_get(1u64).await {
            Err(ApiError::Api { status, message }) => {
                assert_eq!(status, 400);
                assert_eq!(message, "bad sku");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        match client.product_get(2u64).await {
            Err(ApiError::Api { message, .. }) => assert_eq!(message, "400 Bad Request"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products/1");
            then.status(200).body("<html>");
        });
        let err = client(&server).product_get(1u64).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let client = EcwidClient::builder(1003, TOKEN)
            .base_url("http://127.0.0.1:1")
            .timeout_secs(2)
            .build()
            .unwrap();
        let err = client.product_get(1u64).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_product_add() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/products")
                .query_param("token", TOKEN)
                .header("content-type", "application/json")
                .json_body(json!({"name": "Boots", "sku": "BT-1", "price": 42.0}));
            then.status(200).json_body(json!({"id": 999}));
        });

        let id = client(&server)
            .product_add(&NewProduct::new("Boots", "BT-1", 42.0))
            .await
            .unwrap();
        assert_eq!(id, 999);
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_product_update_and_delete() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(PUT)
                .path("/products/42")
                .json_body(json!({"price": 12.0}));
            then.status(200).json_body(json!({"updateCount": 1}));
        });
        server.mock(|when, then| {
            when.method(PUT).path("/products/43");
            then.status(200).json_body(json!({"updateCount": 0}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/products/42");
            then.status(200).json_body(json!({"deleteCount": 1}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/products/43");
            then.status(200).json_body(json!({"deleteCount": 0}));
        });

        let client = client(&server);
        let update = NewProduct {
            price: Some(12.0),
            ..Default::default()
        };
        assert_ok!(client.product_update(42u64, &update).await);
        assert!(matches!(
            client.product_update(43u64, &update).await,
            Err(ApiError::NoRowsAffected {
                operation: "update",
                ..
            })
        ));
        assert_ok!(client.product_delete(42u64).await);
        assert!(matches!(
            client.product_delete(43u64).await,
            Err(ApiError::NoRowsAffected {
                operation: "delete",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_product_inventory_adjust() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(PUT)
                .path("/products/42/inventory")
                .json_body(json!({"quantityDelta": -2}));
            then.status(200).json_body(json!({"updateCount": 1}));
        });

        let count = client(&server)
            .product_inventory_adjust(42u64, -2)
            .await
            .unwrap();
        assert_eq!(count, 1);
        mock.assert_calls(1);
    }

    #[tokio::test]
    async fn test_gallery_upload_and_delete_all() {
        let server = MockServer::start();
        let upload = server.mock(|when, then| {
            when.method(POST)
                .path("/products/42/gallery")
                .query_param("fileName", "front.jpg")
                .header("content-type", "image/jpeg")
                .body("jpeg-bytes");
            then.status(200).json_body(json!({"id": 7}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/products/42/gallery");
            then.status(200).json_body(json!({"deleteCount": 3}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/products/42/gallery/7");
            then.status(200).json_body(json!({"deleteCount": 1}));
        });

        let client = client(&server);
        let id = client
            .product_gallery_upload(42u64, b"jpeg-bytes".to_vec(), Some("front.jpg"))
            .await
            .unwrap();
        assert_eq!(id, 7);
        upload.assert_calls(1);

        client.product_gallery_delete(42u64, id).await.unwrap();
        assert_eq!(client.product_gallery_delete_all(42u64).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_image_upload_variants() {
        let server = MockServer::start();
        let by_url = server.mock(|when, then| {
            when.method(POST)
                .path("/products/42/image")
                .query_param("externalUrl", "https://img.example.org/a.jpg");
            then.status(200).json_body(json!({"id": 5}));
        });
        let by_file = server.mock(|when, then| {
            when.method(POST)
                .path("/products/43/image")
                .header("content-type", "image/jpeg")
                .body("file-bytes");
            then.status(200).json_body(json!({"id": 6}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/products/42/image");
            then.status(200).json_body(json!({"deleteCount": 1}));
        });

        let client = client(&server);
        let id = client
            .product_image_upload_by_url(42u64, "https://img.example.org/a.jpg")
            .await
            .unwrap();
        assert_eq!(id, 5);
        by_url.assert_calls(1);

        let path = std::env::temp_dir().join(format!("ecwid-image-{}.jpg", std::process::id()));
        std::fs::write(&path, b"file-bytes").unwrap();
        let id = client.product_image_upload_file(43u64, &path).await.unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(id, 6);
        by_file.assert_calls(1);

        let missing = client
            .product_image_upload_file(43u64, "/nonexistent/ecwid.jpg")
            .await;
        assert!(matches!(missing, Err(ApiError::Io(_))));

        client.product_image_delete(42u64).await.unwrap();
    }

    #[tokio::test]
    async fn test_product_types() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/classes");
            then.status(200).json_body(json!([
                {"id": 0, "name": "General", "attributes": []},
                {"id": 12, "name": "Shoes",
                 "attributes": [{"id": 3, "name": "Size", "type": "SIZE", "show": "DESCR"}]}
            ]));
        });
        server.mock(|when, then| {
            when.method(POST)
                .path("/classes")
                .json_body(json!({"name": "Hats"}));
            then.status(200).json_body(json!({"id": 13}));
        });
        server.mock(|when, then| {
            when.method(DELETE).path("/classes/13");
            then.status(200).json_body(json!({"deleteCount": 1}));
        });

        let client = client(&server);
        let types = client.product_types_get().await.unwrap();
        assert_eq!(types.len(), 2);
        assert!(types[1].attributes.get_by_name("Size").is_some());

        let id = client
            .product_type_add(&ProductType::named("Hats"))
            .await
            .unwrap();
        assert_eq!(id, 13);
        client.product_type_delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_product_variations() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/products/42/combinations");
            then.status(200).json_body(json!([
                {"id": 7, "combinationNumber": 1, "sku": "sky-xl"},
                {"id": 8, "combinationNumber": 2, "sku": "sky-s"}
            ]));
        });
        server.mock(|when, then| {
            when.method(PUT)
                .path("/products/42/combinations/7")
                .json_body(json!({"quantity": 3}));
            then.status(200).json_body(json!({"updateCount": 1}));
        });

        let client = client(&server);
        let variations = client.product_variations_get(42u64).await.unwrap();
        assert_eq!(variations.len(), 2);
        assert_eq!(variations[1].sku.as_deref(), Some("sky-s"));

        let update = NewProductVariation {
            quantity: Some(3),
            ..Default::default()
        };
        client
            .product_variation_update(42u64, variations[0].id, &update)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_order_get_and_update() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/orders/1001");
            then.status(200)
                .json_body(json!({"orderNumber": 1001, "paymentStatus": "AWAITING_PAYMENT"}));
        });
        server.mock(|when, then| {
            when.method(PUT)
                .path("/orders/1001")
                .json_body(json!({"paymentStatus": "PAID"}));
            then.status(200).json_body(json!({"updateCount": 1}));
        });

        let client = client(&server);
        let order = client.order_get(1001u64).await.unwrap();
        assert_eq!(order.payment_status, Some(PaymentStatus::AwaitingPayment));

        let update = NewOrder {
            payment_status: Some(PaymentStatus::Paid),
            ..Default::default()
        };
        client.order_update(order.order_id, &update).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_profile() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/profile").query_param("token", TOKEN);
            then.status(200).json_body(json!({
                "generalInfo": {"storeId": 1003, "storeUrl": "https://store.example.org"},
                "account": {"accountName": "Jane"}
            }));
        });

        let profile = client(&server).store_profile_get().await.unwrap();
        assert_eq!(profile.general_info.store_id, 1003);
        assert_eq!(profile.account.account_name, "Jane");
    }
}
