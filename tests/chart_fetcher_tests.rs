mod common;

use common::{roll, sample_jpeg};
use must_gpa::chart::{ChartFetcher, ChartImage, ChartSource, PlaceholderStyle};
use std::time::Duration;

const CHART_PATH: &str = "/Chartlet/MUSTFA21-BCE-001AJK/FanG_Chartlet_GPChart.Jpeg";

#[tokio::test]
async fn returns_body_untouched_on_200() {
    let mut server = mockito::Server::new_async().await;
    let body = sample_jpeg(320, 240);
    let mock = server
        .mock("GET", CHART_PATH)
        .with_status(200)
        .with_header("content-type", "image/jpeg")
        .with_body(body.clone())
        .expect(1)
        .create_async()
        .await;

    let fetcher = ChartFetcher::new(server.url(), Duration::from_secs(5), PlaceholderStyle::Web).unwrap();
    let result = fetcher.fetch(&roll("FA21-BCE-001")).await.unwrap();

    mock.assert_async().await;
    assert_eq!(result.roll_number.as_str(), "FA21-BCE-001");
    assert_eq!(result.image, ChartImage::Raw(body));
}

#[tokio::test]
async fn non_200_becomes_web_placeholder() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", CHART_PATH)
        .with_status(404)
        .expect(1)
        .create_async()
        .await;

    let fetcher = ChartFetcher::new(server.url(), Duration::from_secs(5), PlaceholderStyle::Web).unwrap();
    let result = fetcher.fetch(&roll("FA21-BCE-001")).await.unwrap();

    mock.assert_async().await;
    assert!(result.is_placeholder());
    let decoded = image::load_from_memory(result.bytes()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (800, 600));
}

#[tokio::test]
async fn other_success_codes_are_not_treated_as_charts() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", CHART_PATH)
        .with_status(204)
        .create_async()
        .await;

    let fetcher = ChartFetcher::new(server.url(), Duration::from_secs(5), PlaceholderStyle::Batch).unwrap();
    let result = fetcher.fetch(&roll("FA21-BCE-001")).await.unwrap();
    assert!(result.is_placeholder());
}

#[tokio::test]
async fn server_error_is_tried_exactly_once() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", CHART_PATH)
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let fetcher = ChartFetcher::new(server.url(), Duration::from_secs(5), PlaceholderStyle::Batch).unwrap();
    let result = fetcher.fetch(&roll("FA21-BCE-001")).await.unwrap();

    mock.assert_async().await;
    let decoded = image::load_from_memory(result.bytes()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (200, 100));
}

#[tokio::test]
async fn unreachable_host_becomes_placeholder() {
    // Nothing listens on port 1.
    let fetcher = ChartFetcher::new(
        "http://127.0.0.1:1",
        Duration::from_secs(2),
        PlaceholderStyle::Web,
    )
    .unwrap();

    let result = fetcher.fetch(&roll("FA21-BCE-001")).await.unwrap();
    assert!(result.is_placeholder());
}
