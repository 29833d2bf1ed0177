use std::{
    io,
    num::NonZeroUsize,
    sync::{Arc, Mutex},
};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
    routing::post,
};
use rand::{SeedableRng, rngs::StdRng};
use serde_json::{Value, json};
use tokio::net::TcpListener;

use loadgen::{
    EventPayload, HttpTransport, LoadConfig, LoadErr, LoadGenerator, Plate, Transport,
    is_valid_plate,
};

const PATH: &str = "/api/v1/camera/getdata";
const CREATED: &str = r#"{"message":"Car entry created successfully"}"#;

/// A request as seen by the camera endpoint.
#[derive(Debug, Clone)]
struct Captured {
    content_type: String,
    body: Value,
}

/// Answers every post with a fixed status and body, keeping what it received.
#[derive(Clone)]
struct Endpoint {
    status: StatusCode,
    body: &'static str,
    captured: Arc<Mutex<Vec<Captured>>>,
}

impl Endpoint {
    fn captured(&self) -> Vec<Captured> {
        self.captured.lock().unwrap().clone()
    }
}

async fn getdata(
    State(endpoint): State<Endpoint>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    endpoint
        .captured
        .lock()
        .unwrap()
        .push(Captured { content_type, body });

    (
        endpoint.status,
        [(CONTENT_TYPE, "application/json")],
        endpoint.body,
    )
}

/// Serves the camera endpoint on an ephemeral local port and returns its URL.
async fn serve(status: StatusCode, body: &'static str) -> io::Result<(String, Endpoint)> {
    let endpoint = Endpoint {
        status,
        body,
        captured: Arc::default(),
    };
    let app = Router::new()
        .route(PATH, post(getdata))
        .with_state(endpoint.clone());

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}{PATH}", listener.local_addr()?);
    tokio::spawn(async move { axum::serve(listener, app).await });

    Ok((url, endpoint))
}

#[tokio::test]
async fn http_transport_posts_json_and_reports_the_reply() -> io::Result<()> {
    let (url, endpoint) = serve(StatusCode::CREATED, CREATED).await?;
    let payload = EventPayload::new("P3", Plate::parse("BE5084AG").unwrap());

    let reply = HttpTransport::new()
        .post(&url, &payload)
        .await
        .map_err(io::Error::other)?;

    assert_eq!(reply.status, 201);
    assert_eq!(reply.body, CREATED);

    let captured = endpoint.captured();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].content_type, "application/json");
    assert_eq!(
        captured[0].body,
        json!({ "ChannelName": "P3", "EventComment": "BE5084AG" })
    );

    Ok(())
}

#[tokio::test]
async fn error_statuses_are_reported_not_raised() -> io::Result<()> {
    const ALREADY_INSIDE: &str = r#"{"message":"Car is already inside or pending entry"}"#;
    let (url, endpoint) = serve(StatusCode::BAD_REQUEST, ALREADY_INSIDE).await?;
    let payload = EventPayload::new("P3", Plate::parse("AA0000ZZ").unwrap());

    let reply = HttpTransport::new()
        .post(&url, &payload)
        .await
        .map_err(io::Error::other)?;

    assert_eq!(reply.status, 400);
    assert_eq!(reply.body, ALREADY_INSIDE);
    assert_eq!(endpoint.captured().len(), 1);

    Ok(())
}

#[tokio::test]
async fn refused_connection_is_a_transport_error() -> io::Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let url = format!("http://{}{PATH}", listener.local_addr()?);
    drop(listener);

    let payload = EventPayload::new("P3", Plate::parse("AB1234CD").unwrap());
    let res = HttpTransport::new().post(&url, &payload).await;

    assert!(matches!(res, Err(LoadErr::Transport { ref target, .. }) if *target == url));
    Ok(())
}

#[tokio::test]
async fn generator_sends_every_request_over_the_wire() -> io::Result<()> {
    const N: usize = 4;
    let (url, endpoint) = serve(StatusCode::CREATED, CREATED).await?;

    let config = LoadConfig::new(url, NonZeroUsize::new(N).unwrap());
    let mut generator = LoadGenerator::new(config, HttpTransport::new(), StdRng::seed_from_u64(9));
    let mut out = Vec::new();

    let report = generator.run(&mut out).await.map_err(io::Error::other)?;
    assert_eq!(report.delivered(), N);
    assert_eq!(report.statuses().get(&201), Some(&N));

    let captured = endpoint.captured();
    assert_eq!(captured.len(), N);
    for request in captured {
        let sent: EventPayload = serde_json::from_value(request.body).unwrap();
        assert_eq!(sent.channel_name, "P3");
        assert!(is_valid_plate(sent.event_comment.as_str()));
    }

    let out = String::from_utf8(out).unwrap();
    assert_eq!(out.lines().filter(|l| *l == "status: 201").count(), N);

    Ok(())
}
