use filefetch::{Fetcher, FetcherBuilder};
use reqwest::Url;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// Common test constants
pub const TEST_SOURCE: &[u8] = b"export function hello(): string {\n  return \"hello\";\n}\n";
pub const TEST_CONTENT_TYPE: &str = "application/typescript; charset=utf-8";

/// Creates a temporary directory for testing purposes
pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Creates a temporary file with the given content
pub fn create_temp_file(dir: &Path, filename: &str, content: &[u8]) -> PathBuf {
    let file_path = dir.join(filename);
    fs::write(&file_path, content).expect("Failed to write temporary file");
    file_path
}

/// Creates test file content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

/// Builds the `file:` URL of a path
pub fn file_url(path: &Path) -> Url {
    Url::from_file_path(path).expect("Path should be absolute")
}

/// Builds a URL on the mock server
pub fn server_url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("Invalid mock server URL")
}

/// The authority of the mock server, usable as an auth host
pub fn server_host(server: &MockServer) -> String {
    server.address().to_string()
}

/// Creates a fetcher with hidden progress bars
pub fn create_test_fetcher() -> Fetcher {
    FetcherBuilder::hidden()
        .build()
        .expect("Failed to build fetcher")
}

/// Creates a fetcher which sends the token in `token_var` to the mock server
pub fn create_auth_fetcher(server: &MockServer, token_var: &str) -> Fetcher {
    FetcherBuilder::hidden()
        .auth_host(&server_host(server))
        .token_var(token_var)
        .build()
        .expect("Failed to build fetcher")
}

/// Serves `body` with a typescript content type on `route`
pub async fn mount_source(server: &MockServer, route: &str, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_bytes(body.to_vec())
                .insert_header("content-type", TEST_CONTENT_TYPE),
        )
        .mount(server)
        .await;
}

/// Answers `route` with a bare status code
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_string("error page"))
        .mount(server)
        .await;
}

/// Asserts that a file holds exactly `expected`
pub fn assert_file_content(path: &Path, expected: &[u8]) {
    let content = fs::read(path).expect("Failed to read file");
    assert_eq!(content, expected, "File content mismatch at path: {:?}", path);
}
