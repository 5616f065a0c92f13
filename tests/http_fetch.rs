//! End-to-end tests for `ChartClient` against a local HTTP fixture.
//!
//! The fixture is a bare `TcpListener` answering each request with a canned
//! HTTP/1.1 response chosen by path, and recording every request target it
//! sees. No network access needed.

use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use reya_candles::prelude::*;

type Routes = Vec<(&'static str, u16, Value)>;

struct Fixture {
    base_url: String,
    seen: Arc<Mutex<Vec<String>>>,
}

impl Fixture {
    /// Serve `routes`: the first entry whose prefix matches the request
    /// target wins; anything else gets a 404.
    async fn start(routes: Routes) -> Fixture {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let routes = Arc::new(routes);

        let log = seen.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                let routes = routes.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let mut buf = Vec::new();
                    let mut chunk = [0u8; 1024];
                    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
                        match socket.read(&mut chunk).await {
                            Ok(0) | Err(_) => return,
                            Ok(n) => buf.extend_from_slice(&chunk[..n]),
                        }
                    }
                    let head = String::from_utf8_lossy(&buf);
                    let target = head
                        .lines()
                        .next()
                        .and_then(|line| line.split_whitespace().nth(1))
                        .unwrap_or("/")
                        .to_string();
                    log.lock().unwrap().push(target.clone());

                    let (status, body) = routes
                        .iter()
                        .find(|(prefix, _, _)| target.starts_with(prefix))
                        .map(|(_, status, body)| (*status, body.to_string()))
                        .unwrap_or((404, "not found".to_string()));
                    let response = format!(
                        "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                        status,
                        body.len(),
                        body
                    );
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        Fixture {
            base_url: format!("http://{}", addr),
            seen,
        }
    }

    fn client(&self, network: Network) -> ChartClient {
        ChartClient::builder()
            .network(network)
            .endpoint_override(&self.base_url)
            .build()
            .unwrap()
    }

    fn seen(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

fn range() -> TimeRange {
    TimeRange::new(1_700_000_000, 1_700_086_400).unwrap()
}

#[tokio::test]
async fn candles_path_embeds_symbol_and_resolution() {
    let fixture = Fixture::start(vec![(
        "/api/trading/candles/BTCUSDMARK/60",
        200,
        json!({
            "t": [1_700_000_120, 1_700_000_060],
            "o": [2, 1], "h": [3, 2], "l": [1, 0.5], "c": [2.5, 1.5]
        }),
    )])
    .await;
    let client = fixture.client(Network::Mainnet);

    let spec = RequestSpec::new(Network::Mainnet, PathMode::Candles, "BTCUSDMARK", "60", range());
    let series = client.candles().get(&spec).await.unwrap();

    let times: Vec<i64> = series.iter().map(|c| c.time).collect();
    assert_eq!(times, vec![1_700_000_060, 1_700_000_120]);
    assert_eq!(
        fixture.seen(),
        vec!["/api/trading/candles/BTCUSDMARK/60?from=1700000000&to=1700086400".to_string()]
    );
}

#[tokio::test]
async fn history_path_uses_query_parameters() {
    let fixture = Fixture::start(vec![(
        "/api/tradingview/history",
        200,
        json!({"candles": [
            {"timestamp": 1_700_000_060_000i64, "open": "1", "high": "2", "low": "0.5", "close": "1.5"},
            {"timestamp": 1_700_000_000_000i64, "open": "1", "high": "2", "low": "0.5", "close": "1.5"}
        ]}),
    )])
    .await;
    let client = fixture.client(Network::Cronos);
    client.session().set_path_mode(PathMode::Default).await;

    let spec = RequestSpec::new(Network::Cronos, PathMode::Default, "ETHUSDMARK", "D", range());
    let series = client.candles().get(&spec).await.unwrap();

    let times: Vec<i64> = series.iter().map(|c| c.time).collect();
    assert_eq!(times, vec![1_700_000_000, 1_700_000_060]);

    let seen = fixture.seen();
    assert_eq!(seen.len(), 1);
    assert!(seen[0].starts_with("/api/tradingview/history?"));
    assert!(seen[0].contains("symbol=ETHUSDMARK"));
    assert!(seen[0].contains("resolution=D"));
    assert!(seen[0].contains("from=1700000000"));
}

#[tokio::test]
async fn unrecognized_shape_is_a_normalize_error() {
    let fixture = Fixture::start(vec![(
        "/api/trading/candles",
        200,
        json!({"candles": "soon"}),
    )])
    .await;
    let client = fixture.client(Network::Mainnet);

    let spec = RequestSpec::new(Network::Mainnet, PathMode::Candles, "SOLUSDMARK", "5", range());
    let err = client.candles().get(&spec).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Normalize(NormalizeError::UnrecognizedShape(_))
    ));
    assert!(!err.is_transport());
}

#[tokio::test]
async fn non_2xx_is_a_transport_error_without_retry() {
    let fixture = Fixture::start(vec![(
        "/api/trading/candles",
        503,
        json!({"error": "maintenance"}),
    )])
    .await;
    let client = fixture.client(Network::Mainnet);

    let spec = RequestSpec::new(Network::Mainnet, PathMode::Candles, "BTCUSDMARK", "1", range());
    let err = client.candles().get(&spec).await.unwrap_err();
    assert!(matches!(
        err,
        SdkError::Http(HttpError::ServerError { status: 503, .. })
    ));
    assert_eq!(fixture.seen().len(), 1);
}

#[tokio::test]
async fn market_list_falls_through_to_next_endpoint() {
    let fixture = Fixture::start(vec![
        ("/api/markets", 404, json!({"error": "gone"})),
        (
            "/api/tradingview/symbols",
            200,
            json!({"symbols": [
                {"symbol": "BTCUSDMARK", "description": "Bitcoin"},
                {"symbol": "XRPUSDMARK"}
            ]}),
        ),
    ])
    .await;
    let client = fixture.client(Network::Testnet);

    let markets = client.markets().list(Network::Testnet).await.unwrap();
    assert_eq!(markets.len(), 2);
    assert_eq!(markets[0].display_name(), "Bitcoin");
    assert_eq!(markets[1].display_name(), "XRPUSDMARK");
    assert_eq!(
        fixture.seen(),
        vec!["/api/markets".to_string(), "/api/tradingview/symbols".to_string()]
    );
}

#[tokio::test]
async fn market_list_defaults_when_every_endpoint_fails() {
    let fixture = Fixture::start(Vec::new()).await;
    let client = fixture.client(Network::Mainnet);

    let markets = client.markets().list_or_default().await;
    assert_eq!(markets, MarketSymbol::defaults());
    assert_eq!(fixture.seen().len(), 3);
}

#[tokio::test]
async fn stale_fetch_does_not_overwrite_newer_one() {
    let fixture = Fixture::start(vec![
        (
            "/api/trading/candles/BTCUSDMARK",
            200,
            json!([{"time": "2024-01-01T00:00:00Z", "open": 1, "high": 1, "low": 1, "close": 1}]),
        ),
        (
            "/api/trading/candles/ETHUSDMARK",
            200,
            json!([
                {"time": "2024-01-01T00:01:00Z", "open": 2, "high": 2, "low": 2, "close": 2},
                {"time": "2024-01-01T00:00:00Z", "open": 2, "high": 2, "low": 2, "close": 2}
            ]),
        ),
    ])
    .await;
    let client = fixture.client(Network::Mainnet);
    let mut chart = ChartState::new();

    let first = chart.begin_fetch(Network::Mainnet, Symbol::from("BTCUSDMARK"), Resolution::from("1"));
    let second = chart.begin_fetch(Network::Mainnet, Symbol::from("ETHUSDMARK"), Resolution::from("1"));

    let newer = client.candles().fetch_for(&second).await;
    let older = client.candles().fetch_for(&first).await;

    assert_eq!(chart.apply(second, newer), ApplyOutcome::Replaced);
    assert_eq!(chart.apply(first, older), ApplyOutcome::Stale);

    assert_eq!(chart.candles().len(), 2);
    assert_eq!(chart.candles().first().unwrap().time, 1_704_067_200);
    assert_eq!(chart.shown().unwrap().1.as_str(), "ETHUSDMARK");
    assert!(!chart.is_loading());
}

#[tokio::test]
async fn testnet_preset_targets_quick_setup_path() {
    let fixture = Fixture::start(vec![("/api/candles", 200, json!([]))]).await;
    let client = ChartClient::builder()
        .network(Network::Testnet)
        .build()
        .unwrap();
    client.session().testnet_candles_preset().await;
    // The preset clears endpoint overrides; point back at the fixture.
    client
        .session()
        .set_endpoint_override(&fixture.base_url)
        .await
        .unwrap();

    let series = client
        .candles()
        .latest_default(&Symbol::from("AVAXUSDMARK"), &Resolution::from("15"))
        .await
        .unwrap();
    assert!(series.is_empty());

    let seen = fixture.seen();
    assert!(seen[0].starts_with("/api/candles?"));
    assert!(seen[0].contains("symbol=AVAXUSDMARK"));
}
