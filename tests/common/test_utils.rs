#![allow(dead_code)]

use chat_client::{
    HttpChatClient,
    config::{ClientConfig, Config, LogsConfig},
};
use serde_json::Value;
use tempfile::TempDir;
use tokio::fs;
use wiremock::{MockServer, Request};

/// Path the mock server answers on, mirroring the production `/chat` route
pub const CHAT_PATH: &str = "/chat";

/// Create a test configuration pointing at the given endpoint
pub fn create_test_config(endpoint: &str) -> Config {
    Config {
        client: ClientConfig {
            endpoint: endpoint.to_string(),
            timeout_secs: Some(5),
        },
        logs: LogsConfig {
            level: "debug".to_string(),
        },
    }
}

/// Build a client wired to the mock server's `/chat` route
pub fn create_test_client(server: &MockServer) -> HttpChatClient {
    let endpoint = format!("{}{}", server.uri(), CHAT_PATH);
    HttpChatClient::new(create_test_config(&endpoint).client).expect("Failed to build client")
}

/// Decode a captured request body the way a chat server would
pub fn decode_body(request: &Request) -> Value {
    serde_json::from_slice(&request.body).expect("Request body is not JSON")
}

/// Requests the mock server saw, in arrival order
pub async fn received(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("Request recording is disabled")
}

/// Create a test config YAML file
pub async fn create_test_config_file(dir: &TempDir, content: &str) -> String {
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, content)
        .await
        .expect("Failed to write config file");
    config_path.to_string_lossy().to_string()
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
client:
  endpoint: "http://localhost:5001/chat"
  timeout_secs: 10

logs:
  level: "debug"
"#;

/// Invalid configuration YAML for testing error cases
pub const INVALID_CONFIG_YAML: &str = r#"
client:
  endpoint: "http://localhost:5001/chat"
  timeout_secs: "soon"
"#;
