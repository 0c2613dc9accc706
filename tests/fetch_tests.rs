use std::collections::BTreeMap;
use std::time::Duration;

use axum::{http::StatusCode, routing::get, Json, Router};
use scorewatch::fetch::StatsClient;
use scorewatch::types::{ServicePoints, ServiceStatus, Snapshot, Team};

fn sample_snapshot() -> Snapshot {
    Snapshot {
        round_num: 12,
        flag_lifetime: 3,
        teams: vec![Team {
            name: "TsarKa5".to_string(),
            ip_addr: "10.60.1.1".to_string(),
            overall_score: 420.0,
            last_pts_update: 11.0,
            points: BTreeMap::from([(
                "web".to_string(),
                ServicePoints {
                    sla_pts: 30.0,
                    atk_pts: 4.0,
                    def_pts: 2.0,
                },
            )]),
            service_status: BTreeMap::from([("web".to_string(), ServiceStatus::Ok)]),
        }],
    }
}

/// Serve the router on an ephemeral local port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve fixture");
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn fetches_and_decodes_a_served_snapshot() {
    let snap = sample_snapshot();
    let served = snap.clone();
    let app = Router::new().route(
        "/api/getStats",
        get(move || {
            let snap = served.clone();
            async move { Json(snap) }
        }),
    );
    let base = serve(app).await;

    let client = StatsClient::new(&base, Duration::from_secs(2)).unwrap();
    let fetched = client.fetch_stats().await.unwrap();
    assert_eq!(fetched, snap);
}

#[tokio::test]
async fn non_200_surfaces_status_and_body() {
    let app = Router::new().route(
        "/api/getStats",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "backend exploded") }),
    );
    let base = serve(app).await;

    let client = StatsClient::new(&base, Duration::from_secs(2)).unwrap();
    let err = client.fetch_stats().await.unwrap_err();
    let msg = format!("{err:#}");
    assert!(msg.contains("500"), "{msg}");
    assert!(msg.contains("backend exploded"), "{msg}");
}

#[tokio::test]
async fn malformed_snapshot_is_rejected_before_rendering() {
    let app = Router::new().route(
        "/api/getStats",
        get(|| async {
            Json(serde_json::json!({
                "roundNum": 1,
                "flagLifetime": 1,
                "teams": []
            }))
        }),
    );
    let base = serve(app).await;

    let client = StatsClient::new(&base, Duration::from_secs(2)).unwrap();
    let err = client.fetch_stats().await.unwrap_err();
    assert!(format!("{err:#}").contains("no teams"));
}
