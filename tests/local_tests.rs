//! Tests for fetching `file:` URLs.

use filefetch::{fetch, Error};
use reqwest::Url;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_fetch_local_copies_bytes() {
    let temp_dir = create_temp_dir();
    let content = create_test_content(64 * 1024 + 7);
    let source = create_temp_file(temp_dir.path(), "source.bin", &content);
    let destination = temp_dir.path().join("copy.bin");
    let url = file_url(&source);

    let metadata = create_test_fetcher()
        .fetch(&url, &destination)
        .await
        .unwrap();

    assert_eq!(metadata.url(), url.as_str());
    assert!(metadata.headers().is_none());
    assert!(!metadata.is_remote());
    assert_file_content(&destination, &content);
}

#[tokio::test]
async fn test_fetch_local_empty_file() {
    let temp_dir = create_temp_dir();
    let source = create_temp_file(temp_dir.path(), "empty.ts", b"");
    let destination = temp_dir.path().join("out.ts");

    fetch(&file_url(&source), &destination).await.unwrap();

    assert_file_content(&destination, b"");
}

#[tokio::test]
async fn test_fetch_local_url_with_escapes() {
    let temp_dir = create_temp_dir();
    let source = create_temp_file(temp_dir.path(), "with space.ts", TEST_SOURCE);
    let destination = temp_dir.path().join("out.ts");
    let url = file_url(&source);
    assert!(url.as_str().ends_with("with%20space.ts"));

    let metadata = fetch(&url, &destination).await.unwrap();

    assert_eq!(metadata.url(), url.as_str());
    assert_file_content(&destination, TEST_SOURCE);
}

#[tokio::test]
async fn test_fetch_local_missing_file() {
    let temp_dir = create_temp_dir();
    let source = temp_dir.path().join("missing.ts");
    let destination = temp_dir.path().join("out.ts");

    let err = fetch(&file_url(&source), &destination).await.unwrap_err();

    let message = err.fetch_message().expect("Expected a fetch error");
    assert!(message.contains(&source.display().to_string()));
    assert!(message.ends_with("does not exist on the local system."));
    assert!(!destination.exists());
}

#[tokio::test]
async fn test_fetch_local_missing_parent_directory() {
    let temp_dir = create_temp_dir();
    let source = create_temp_file(temp_dir.path(), "mod.ts", TEST_SOURCE);
    let destination = temp_dir.path().join("no-such-dir").join("mod.ts");

    let err = fetch(&file_url(&source), &destination).await.unwrap_err();

    assert!(matches!(err, Error::IOError { .. }));
}

#[tokio::test]
async fn test_fetch_unsupported_protocol() {
    let temp_dir = create_temp_dir();
    let destination = temp_dir.path().join("out");

    for raw in ["ftp://x", "ws://example.com/socket", "mailto:someone@example.com"] {
        let url = Url::parse(raw).unwrap();
        let err = fetch(&url, &destination).await.unwrap_err();

        let message = err.fetch_message().expect("Expected a fetch error");
        assert!(message.starts_with("unsupported protocol"));
        assert!(message.contains(url.as_str()));
    }
    assert!(!destination.exists());
}
