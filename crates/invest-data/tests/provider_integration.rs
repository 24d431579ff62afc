//! Integration tests for the resolver, fetcher and service against a local mock server.

use invest_core::{DateZone, Interval, ProviderConfig, SortOrder};
use invest_data::provider::{HISTORICAL_PATH, SEARCH_PATH};
use invest_data::{
    DataError, HistoricalFetcher, HistoricalQuery, HistoricalRequest, InvestingClient,
    InvestingService, QuoteResolver,
};
use mockito::{Matcher, Server, ServerGuard};

const SEARCH_FIXTURE: &str = include_str!("fixtures/search_abb.json");
const HISTORICAL_FIXTURE: &str = include_str!("fixtures/historical_abb.html");

fn client_for(server: &ServerGuard) -> InvestingClient {
    InvestingClient::new(ProviderConfig::with_base_url(server.url())).unwrap()
}

async fn mock_search(server: &mut ServerGuard, symbol: &str, hits: usize) -> mockito::Mock {
    server
        .mock("POST", SEARCH_PATH)
        .match_header("x-requested-with", "XMLHttpRequest")
        .match_header(
            "content-type",
            Matcher::Regex("application/x-www-form-urlencoded".to_string()),
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("search_text".into(), symbol.into()),
            Matcher::UrlEncoded("tab".into(), "quotes".into()),
            Matcher::UrlEncoded("limit".into(), "270".into()),
            Matcher::UrlEncoded("offset".into(), "0".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(SEARCH_FIXTURE)
        .expect(hits)
        .create_async()
        .await
}

async fn mock_historical(server: &mut ServerGuard, curr_id: &str, header: &str) -> mockito::Mock {
    server
        .mock("POST", HISTORICAL_PATH)
        .match_header("x-requested-with", "XMLHttpRequest")
        .match_header("accept", "text/plain, */*; q=0.01")
        .match_header(
            "referer",
            "https://www.investing.com/equities/abb-ltd-historical-data?cid=482",
        )
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("curr_id".into(), curr_id.into()),
            Matcher::UrlEncoded("smlID".into(), "1159548".into()),
            Matcher::UrlEncoded("header".into(), header.into()),
            Matcher::UrlEncoded("st_date".into(), "01/01/2020".into()),
            Matcher::UrlEncoded("end_date".into(), "31/01/2020".into()),
            Matcher::UrlEncoded("interval_sec".into(), "Daily".into()),
            Matcher::UrlEncoded("sort_col".into(), "date".into()),
            Matcher::UrlEncoded("sort_ord".into(), "ASC".into()),
            Matcher::UrlEncoded("action".into(), "historical_data".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_body(HISTORICAL_FIXTURE)
        .create_async()
        .await
}

// ==================== QuoteResolver ====================

#[tokio::test]
async fn test_resolve_without_filters_keeps_order() {
    let mut server = Server::new_async().await;
    let mock = mock_search(&mut server, "ABB", 1).await;

    let resolver = QuoteResolver::new(client_for(&server));
    let result = resolver.resolve("ABB", None, None).await.unwrap();

    let ids: Vec<i64> = result.quotes.iter().map(|q| q.pair_id).collect();
    assert_eq!(ids, vec![482, 27, 995117, 8018]);
    assert_eq!(result.total.all_results, 4);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_resolve_filters() {
    let mut server = Server::new_async().await;
    let mock = mock_search(&mut server, "ABB", 3).await;

    let resolver = QuoteResolver::new(client_for(&server));

    let by_country = resolver.resolve("ABB", None, Some("sweden")).await.unwrap();
    let ids: Vec<i64> = by_country.quotes.iter().map(|q| q.pair_id).collect();
    assert_eq!(ids, vec![27, 995117]);

    let by_type = resolver.resolve("ABB", Some("EQUITIES"), None).await.unwrap();
    let ids: Vec<i64> = by_type.quotes.iter().map(|q| q.pair_id).collect();
    assert_eq!(ids, vec![482, 27, 8018]);

    let both = resolver
        .resolve("ABB", Some("etf"), Some("Sweden"))
        .await
        .unwrap();
    let ids: Vec<i64> = both.quotes.iter().map(|q| q.pair_id).collect();
    assert_eq!(ids, vec![995117]);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_resolve_is_idempotent() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, "ABB", 2).await;

    let resolver = QuoteResolver::new(client_for(&server));
    let first = resolver.resolve("ABB", Some("equities"), None).await.unwrap();
    let second = resolver.resolve("ABB", Some("equities"), None).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_resolve_id_first_match() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, "ABB", 1).await;

    let resolver = QuoteResolver::new(client_for(&server));
    let id = resolver.resolve_id("ABB", "equities", "SWEDEN").await.unwrap();
    assert_eq!(id, Some(27));
}

#[tokio::test]
async fn test_resolve_id_not_found_is_not_error() {
    let mut server = Server::new_async().await;
    let _mock = mock_search(&mut server, "AAPL", 1).await;

    let resolver = QuoteResolver::new(client_for(&server));
    let id = resolver.resolve_id("AAPL", "equities", "Mars").await.unwrap();
    assert_eq!(id, None);
}

#[tokio::test]
async fn test_resolve_malformed_body_is_decode_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(200)
        .with_body("<html>captcha</html>")
        .create_async()
        .await;

    let resolver = QuoteResolver::new(client_for(&server));
    let err = resolver.resolve("ABB", None, None).await.unwrap_err();
    assert!(matches!(err, DataError::Decode(_)));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn test_non_success_status_is_transport_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", SEARCH_PATH)
        .with_status(403)
        .with_body("Forbidden")
        .create_async()
        .await;

    let resolver = QuoteResolver::new(client_for(&server));
    let err = resolver.resolve("ABB", None, None).await.unwrap_err();
    assert!(matches!(err, DataError::Status { status: 403, .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let client = InvestingClient::new(ProviderConfig::with_base_url("http://127.0.0.1:1")).unwrap();
    let resolver = QuoteResolver::new(client);

    let err = resolver.resolve("ABB", None, None).await.unwrap_err();
    assert!(matches!(err, DataError::Transport(_)));
}

// ==================== HistoricalFetcher ====================

#[tokio::test]
async fn test_fetch_native_layout() {
    let mut server = Server::new_async().await;
    let mock = mock_historical(&mut server, "27", "ABB Historical Data").await;

    let fetcher = HistoricalFetcher::new(client_for(&server));
    let request = HistoricalRequest::new(27, "ABB", "01/01/2020", "31/01/2020");
    let table = fetcher.fetch(&request).await.unwrap();

    assert_eq!(table.data_len(), 2);
    assert_eq!(table.header()[1], "Close");
    assert_eq!(
        table.data_rows()[0],
        ["2020-01-02 00:00:00", "224.6", "222.8", "225.2", "222.1", "3184000"].map(str::to_string)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_decompresses_gzip_body() {
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(HISTORICAL_FIXTURE.as_bytes()).unwrap();
    let gzipped = encoder.finish().unwrap();

    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HISTORICAL_PATH)
        .match_header("accept-encoding", Matcher::Regex("gzip".to_string()))
        .with_status(200)
        .with_header("content-type", "text/html")
        .with_header("content-encoding", "gzip")
        .with_body(gzipped)
        .create_async()
        .await;

    let fetcher = HistoricalFetcher::new(client_for(&server));
    let request = HistoricalRequest::new(27, "ABB", "01/01/2020", "31/01/2020");
    let table = fetcher.fetch(&request).await.unwrap();

    assert_eq!(table.data_len(), 2);
    assert_eq!(
        table.data_rows()[0],
        ["2020-01-02 00:00:00", "224.6", "222.8", "225.2", "222.1", "3184000"].map(str::to_string)
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_passes_sort_and_interval() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", HISTORICAL_PATH)
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("interval_sec".into(), "Monthly".into()),
            Matcher::UrlEncoded("sort_ord".into(), "DESC".into()),
        ]))
        .with_status(200)
        .with_body("<tbody></tbody>")
        .create_async()
        .await;

    let fetcher = HistoricalFetcher::new(client_for(&server));
    let request = HistoricalRequest::new(27, "ABB", "01/01/2020", "31/01/2020")
        .with_sort_order(SortOrder::Desc)
        .with_interval(Interval::Monthly);
    let table = fetcher.fetch(&request).await.unwrap();

    assert_eq!(table.data_len(), 0);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_without_tbody_is_format_error() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("POST", HISTORICAL_PATH)
        .with_status(200)
        .with_body("<div>No results found</div>")
        .create_async()
        .await;

    let fetcher = HistoricalFetcher::new(client_for(&server));
    let request = HistoricalRequest::new(27, "ABB", "01/01/2020", "31/01/2020");
    let err = fetcher.fetch(&request).await.unwrap_err();
    assert!(matches!(err, DataError::Format(_)));
}

#[tokio::test]
async fn test_fetch_uses_configured_zone() {
    let mut server = Server::new_async().await;
    let _mock = mock_historical(&mut server, "27", "ABB Historical Data").await;

    let config = ProviderConfig {
        date_zone: DateZone::Local,
        ..ProviderConfig::with_base_url(server.url())
    };
    let fetcher = HistoricalFetcher::new(InvestingClient::new(config).unwrap());
    let request = HistoricalRequest::new(27, "ABB", "01/01/2020", "31/01/2020");
    let table = fetcher.fetch(&request).await.unwrap();

    assert_eq!(
        table.data_rows()[0][0],
        DateZone::Local.format_epoch(1577923200).unwrap()
    );
}

// ==================== InvestingService ====================

fn abb_query() -> HistoricalQuery {
    HistoricalQuery::new("ABB", "equities", "Sweden", "01/01/2020", "31/01/2020")
}

#[tokio::test]
async fn test_historical_data_reorders_once() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, "ABB", 1).await;
    let _historical = mock_historical(&mut server, "27", "ABB Historical Data").await;

    let service = InvestingService::with_client(client_for(&server));
    let table = service.historical_data(&abb_query()).await.unwrap();

    assert_eq!(
        table.header(),
        &["Date", "Open", "High", "Low", "Close", "Vol."].map(str::to_string)
    );
    assert_eq!(
        table.data_rows()[1],
        ["2020-01-03 00:00:00", "223.4", "224.0", "221.0", "222.2", "2875000"].map(str::to_string)
    );
}

#[tokio::test]
async fn test_historical_data_not_found() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, "ABB", 1).await;
    let historical = server
        .mock("POST", HISTORICAL_PATH)
        .expect(0)
        .create_async()
        .await;

    let service = InvestingService::with_client(client_for(&server));
    let query = HistoricalQuery::new("ABB", "equities", "Mars", "01/01/2020", "31/01/2020");
    let err = service.historical_data(&query).await.unwrap_err();

    assert!(err.is_not_found());
    historical.assert_async().await;
}

#[tokio::test]
async fn test_historical_to_csv() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, "ABB", 1).await;
    let _historical = mock_historical(&mut server, "27", "ABB Historical Data").await;

    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("CSV");

    let service = InvestingService::with_client(client_for(&server));
    let (path, rows) = service.historical_to_csv(&abb_query(), &dir).await.unwrap();

    assert_eq!(path, dir.join("ABB.csv"));
    assert_eq!(rows, 2);

    let content = std::fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Date,Open,High,Low,Close,Vol.");
    assert_eq!(lines[1], "2020-01-02 00:00:00,222.8,225.2,222.1,224.6,3184000");
    assert_eq!(lines.len(), 3);
}

#[tokio::test]
async fn test_search_json() {
    let mut server = Server::new_async().await;
    let _search = mock_search(&mut server, "ABB", 1).await;

    let service = InvestingService::with_client(client_for(&server));
    let json = service
        .search_json("ABB", Some("etf"), Some("sweden"))
        .await
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["quotes"].as_array().unwrap().len(), 1);
    assert_eq!(value["quotes"][0]["pairId"], 995117);
    assert!(json.contains('\n'));
}
