//! motorctl actions against a mock device

use motor_panel_cli::commands::{self, Overrides};
use motor_panel_cli::ReqwestTransport;
use motor_panel_protocol::{Command, PanelClient, Settings};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FORM: &str = "application/x-www-form-urlencoded";

fn client(server: &MockServer) -> PanelClient<ReqwestTransport> {
    PanelClient::new(ReqwestTransport::new(), &server.uri())
}

async fn mount_settings(server: &MockServer, body: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path("/get_settings"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw(body.to_owned(), "application/json"),
        )
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_settings() {
    let server = MockServer::start().await;
    mount_settings(&server, r#"{"rotation_speed":42, "interval_time":7}"#, 1).await;

    let settings = commands::fetch_settings(&client(&server)).await.unwrap();
    assert_eq!(settings, Settings::new(42, 7));
    assert_eq!(
        commands::format_settings(&settings),
        "rotation_speed: 42%\ninterval_time: 7s"
    );
}

#[tokio::test]
async fn test_get_settings_not_json() {
    let server = MockServer::start().await;
    mount_settings(&server, "Not Found", 1).await;

    let err = commands::fetch_settings(&client(&server)).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to load settings");
}

#[tokio::test]
async fn test_set_with_both_values_skips_fetch() {
    let server = MockServer::start().await;
    mount_settings(&server, r#"{"rotation_speed":1, "interval_time":1}"#, 0).await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .and(header("content-type", FORM))
        .and(body_string("rotation_speed=80&interval_time=20"))
        .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let overrides = Overrides {
        rotation_speed: Some(80),
        interval_time: Some(20),
    };
    let settings = commands::resolve_settings(&client, overrides).await.unwrap();
    commands::run_command(&client, Command::Update(settings))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_set_fills_missing_value_from_device() {
    let server = MockServer::start().await;
    mount_settings(&server, r#"{"rotation_speed":50, "interval_time":15}"#, 1).await;
    Mock::given(method("POST"))
        .and(path("/update"))
        .and(body_string("rotation_speed=80&interval_time=15"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    let overrides = Overrides {
        rotation_speed: Some(80),
        interval_time: None,
    };
    let settings = commands::resolve_settings(&client, overrides).await.unwrap();
    commands::run_command(&client, Command::Update(settings))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_start_and_stop_have_no_body() {
    let server = MockServer::start().await;
    for endpoint in ["/start", "/stop"] {
        Mock::given(method("POST"))
            .and(path(endpoint))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_string("Motor started"))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client(&server);
    commands::run_command(&client, Command::Start).await.unwrap();
    commands::run_command(&client, Command::Stop).await.unwrap();
}

#[tokio::test]
async fn test_save_failure_reports_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let err = commands::run_command(&client(&server), Command::Save(Settings::new(50, 15)))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Failed to save settings");
    assert_eq!(err.root_cause().to_string(), "HTTP 500 from /save");
}

#[tokio::test]
async fn test_unreachable_device() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = PanelClient::new(ReqwestTransport::new(), &format!("http://{addr}"));
    let err = commands::run_command(&client, Command::Start).await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to start motor");
    assert!(err.root_cause().to_string().contains("error sending request"));
}
