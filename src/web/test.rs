use poem::http::StatusCode;
use poem::listener::{Acceptor, Listener, TcpListener};
use poem::test::TestClient;
use poem::web::Json;
use poem::{handler, post, Route, Server};

use crate::geolocation::{GeolocationError, Geolocator, Position};
use crate::prediction;
use crate::prediction::requests::PredictionRequest;
use crate::prediction::responses::{PredictionResponse, Priority};
use crate::prelude::*;
use crate::web::create_app;
use crate::web::state::State;

struct ScriptedLocator(StdResult<Position, &'static str>);

#[async_trait::async_trait]
impl Geolocator for ScriptedLocator {
    async fn current_position(&self) -> StdResult<Position, GeolocationError> {
        self.0
            .map_err(|message| GeolocationError::Denied(message.to_string()))
    }
}

fn state(predict_api: impl Into<String>, locator: ScriptedLocator) -> Result<State> {
    Ok(State::new(prediction::Client::new(predict_api)?, Arc::new(locator)))
}

/// Serves the dashboard on a loopback port, for driving it with a real client.
async fn spawn_app(state: State) -> Result<String> {
    let acceptor = TcpListener::bind("127.0.0.1:0").into_acceptor().await?;
    let addr = acceptor.local_addr()[0]
        .as_socket_addr()
        .copied()
        .ok_or_else(|| anyhow!("expected a socket address"))?;
    tokio::spawn(Server::new_with_acceptor(acceptor).run(create_app(state)));
    Ok(format!("http://{}", addr))
}

#[handler]
fn predict_stub(Json(request): Json<PredictionRequest>) -> Json<PredictionResponse> {
    assert!(request.validate().is_ok());
    Json(PredictionResponse {
        failure_in_30_days: true,
        failure_type: "corrosion".to_string(),
        risk_score: 82.0,
        priority: Priority::Label("High".to_string()),
        recommended_action: "Inspect within 7 days".to_string(),
    })
}

async fn spawn_predict_stub() -> Result<String> {
    let acceptor = TcpListener::bind("127.0.0.1:0").into_acceptor().await?;
    let addr = acceptor.local_addr()[0]
        .as_socket_addr()
        .copied()
        .ok_or_else(|| anyhow!("expected a socket address"))?;
    let route = Route::new().at("/predict", post(predict_stub));
    tokio::spawn(Server::new_with_acceptor(acceptor).run(route));
    Ok(format!("http://{}", addr))
}

/// An origin nothing listens on: reaching it fails fast with a
/// transport error, which keeps the no-network assertions honest.
const UNROUTABLE_API: &str = "http://127.0.0.1:9";

#[tokio::test]
async fn index_ok() -> Result {
    let client = TestClient::new(create_app(state(UNROUTABLE_API, ScriptedLocator(Err("denied")))?));
    client.get("/").send().await.assert_status_is_ok();
    Ok(())
}

#[tokio::test]
async fn validation_blocks_submission() -> Result {
    let client = TestClient::new(create_app(state(UNROUTABLE_API, ScriptedLocator(Err("denied")))?));
    let response = client
        .post("/assess")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("type=pipe&material=steel&soil_type=clay&install_year=1987")
        .send()
        .await;
    // A 502 here would mean the service was contacted despite the missing location.
    response.assert_status(StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn busy_indicator_rejects_concurrent_submission() -> Result {
    let state = state(UNROUTABLE_API, ScriptedLocator(Err("denied")))?;
    let _permit = state.try_begin_submission()?;

    let client = TestClient::new(create_app(state.clone()));
    let response = client
        .post("/assess")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("type=pipe&material=steel&soil_type=clay&region=Downtown&install_year=1987")
        .send()
        .await;
    response.assert_status(StatusCode::CONFLICT);
    Ok(())
}

#[tokio::test]
async fn failed_request_is_surfaced() -> Result {
    let client = TestClient::new(create_app(state(UNROUTABLE_API, ScriptedLocator(Err("denied")))?));
    let response = client
        .post("/assess")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body("type=pipe&material=steel&soil_type=clay&region=Downtown&install_year=1987")
        .send()
        .await;
    response.assert_status(StatusCode::BAD_GATEWAY);
    Ok(())
}

#[tokio::test]
async fn assess_end_to_end_ok() -> Result {
    let predict_api = spawn_predict_stub().await?;
    let app_url = spawn_app(state(predict_api, ScriptedLocator(Err("denied")))?).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/assess", app_url))
        .form(&[
            ("type", "pipe"),
            ("material", "cast_iron"),
            ("soil_type", "clay"),
            ("region", "Downtown"),
            ("install_year", "1987"),
        ])
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 200);

    let body = response.text().await?;
    assert!(body.contains("High Risk"));
    assert!(body.contains(r#"value="82""#));
    assert!(body.contains("Inspect within 7 days"));
    Ok(())
}

#[tokio::test]
async fn locate_fills_the_inputs() -> Result {
    let locator = ScriptedLocator(Ok(Position {
        latitude: 37.35411,
        longitude: -121.95524,
    }));
    let app_url = spawn_app(state(UNROUTABLE_API, locator)?).await?;

    let body = reqwest::Client::new()
        .post(format!("{}/locate", app_url))
        .form(&[("type", "pipe")])
        .send()
        .await?
        .text()
        .await?;
    assert!(body.contains("37.354110"));
    assert!(body.contains("-121.955240"));
    Ok(())
}

#[tokio::test]
async fn locate_denial_is_surfaced() -> Result {
    let app_url = spawn_app(state(UNROUTABLE_API, ScriptedLocator(Err("denied")))?).await?;

    let response = reqwest::Client::new()
        .post(format!("{}/locate", app_url))
        .form(&[("type", "pipe")])
        .send()
        .await?;
    assert_eq!(response.status().as_u16(), 200);
    assert!(response.text().await?.contains("denied or unavailable"));
    Ok(())
}
