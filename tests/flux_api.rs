//! Multi-value routes over a real socket, buffered and streamed.

use std::time::Duration;

use mono_flux_client::Product;

mod common;

fn ids(products: &[Product]) -> Vec<i32> {
    products.iter().map(|p| p.id).collect()
}

#[tokio::test]
async fn test_stream_matches_array() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let buffered = client.products().await.unwrap();
    let streamed = client.products_stream().await.unwrap();

    assert_eq!(ids(&buffered), vec![1, 2, 3, 4, 5]);
    assert_eq!(streamed, buffered);
}

#[tokio::test]
async fn test_price_filter_both_framings() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    for max_price in [None, Some(0.0), Some(100.0), Some(299.99), Some(2000.0)] {
        let buffered = client.products_by_price(max_price).await.unwrap();
        let streamed = client.products_by_price_stream(max_price).await.unwrap();
        let limit = max_price.unwrap_or(500.0);

        assert!(buffered.iter().all(|p| p.price <= limit));
        assert_eq!(streamed, buffered, "max_price = {:?}", max_price);
    }
}

#[tokio::test]
async fn test_low_stock_threshold_20() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let low = client.low_stock(Some(20)).await.unwrap();
    let names: Vec<&str> = low.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Laptop", "Monitor"]);

    let default = client.low_stock(None).await.unwrap();
    assert_eq!(ids(&default), vec![1, 4]);
}

#[tokio::test]
async fn test_names_buffered_and_event_stream() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let products = client.products().await.unwrap();
    let names = client.product_names().await.unwrap();
    let streamed = client.product_names_stream().await.unwrap();

    let expected: Vec<String> = products.into_iter().map(|p| p.name).collect();
    assert_eq!(names, expected);
    assert_eq!(streamed, expected);
}

#[tokio::test]
async fn test_combined_has_no_duplicates() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let combined = client.products_combined().await.unwrap();
    assert_eq!(ids(&combined), vec![2, 3, 4, 5]);
    for (i, a) in combined.iter().enumerate() {
        assert!(combined[i + 1..].iter().all(|b| a != b));
    }
}

#[tokio::test]
async fn test_info_and_explanation() {
    let server = common::start_server(Duration::ZERO).await;
    let client = server.client();

    let info = client.info().await.unwrap();
    assert_eq!(info["application"], "MonoFluxDemo");

    let explanation = client.explanation().await.unwrap();
    assert!(explanation["KEY_DIFFERENCES"].as_str().unwrap().contains("Cardinality"));
}
