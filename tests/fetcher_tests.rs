//! Tests for the fetcher: builder options and batch fetching.

use filefetch::{Error, FetchTarget, FetcherBuilder, ProgressBarOpts, StyleOptions};
use reqwest::Url;
use std::convert::TryFrom;
use wiremock::MockServer;

mod common;
use common::helpers::*;

#[test]
fn test_fetcher_debug() {
    let fetcher = create_test_fetcher();
    let debug_str = format!("{:?}", fetcher);

    assert!(debug_str.contains("Fetcher"));
    assert!(debug_str.contains("config"));
    assert!(debug_str.contains("api.github.com"));
}

#[test]
fn test_fetcher_clone() {
    let fetcher = FetcherBuilder::hidden()
        .concurrent_fetches(3)
        .token_var("SOME_TOKEN")
        .build()
        .unwrap();
    let cloned = fetcher.clone();

    assert_eq!(fetcher.concurrent_fetches(), cloned.concurrent_fetches());
    assert_eq!(fetcher.auth(), cloned.auth());
}

#[test]
fn test_builder_custom_style() {
    let style = StyleOptions::new(ProgressBarOpts::with_pip_style(), ProgressBarOpts::hidden());
    let fetcher = FetcherBuilder::new().style_options(style).build().unwrap();

    assert!(fetcher.style_options().main().is_enabled());
    assert!(!fetcher.style_options().child().is_enabled());
}

#[test]
fn test_builder_with_proxy() {
    let proxy = reqwest::Proxy::all("http://127.0.0.1:3128").unwrap();
    assert!(FetcherBuilder::hidden().proxy(proxy).build().is_ok());
}

#[tokio::test]
async fn test_fetch_all_mixed_targets() {
    let server = MockServer::start().await;
    mount_source(&server, "/remote.ts", b"remote").await;
    mount_status(&server, "/missing.ts", 404).await;

    let temp_dir = create_temp_dir();
    let local = create_temp_file(temp_dir.path(), "local-src.ts", b"local");

    let targets = vec![
        FetchTarget::new(&file_url(&local), temp_dir.path().join("local.ts")),
        FetchTarget::new(
            &server_url(&server, "/remote.ts"),
            temp_dir.path().join("remote.ts"),
        ),
        FetchTarget::new(
            &server_url(&server, "/missing.ts"),
            temp_dir.path().join("missing.ts"),
        ),
        FetchTarget::try_from(("ftp://x", temp_dir.path().join("ftp"))).unwrap(),
    ];

    let results = FetcherBuilder::hidden()
        .concurrent_fetches(2)
        .build()
        .unwrap()
        .fetch_all(&targets)
        .await;

    assert_eq!(results.len(), 4);

    let local_meta = results[0].as_ref().unwrap();
    assert!(!local_meta.is_remote());
    assert_eq!(local_meta.url(), targets[0].url().as_str());
    assert_file_content(&temp_dir.path().join("local.ts"), b"local");

    let remote_meta = results[1].as_ref().unwrap();
    assert!(remote_meta.is_remote());
    assert_eq!(remote_meta.url(), targets[1].url().as_str());
    assert_file_content(&temp_dir.path().join("remote.ts"), b"remote");

    assert_eq!(results[2].as_ref().unwrap_err().to_string(), "Not Found");

    let unsupported = results[3].as_ref().unwrap_err();
    assert!(unsupported.to_string().starts_with("unsupported protocol"));
}

#[tokio::test]
async fn test_fetch_all_keeps_input_order() {
    let server = MockServer::start().await;
    for i in 0..8 {
        mount_source(&server, &format!("/file-{}.ts", i), format!("body {}", i).as_bytes())
            .await;
    }

    let temp_dir = create_temp_dir();
    let targets: Vec<FetchTarget> = (0..8)
        .map(|i| {
            let url = server_url(&server, &format!("/file-{}.ts", i));
            FetchTarget::in_directory(&url, temp_dir.path()).unwrap()
        })
        .collect();

    let results = FetcherBuilder::hidden()
        .concurrent_fetches(4)
        .build()
        .unwrap()
        .fetch_all(&targets)
        .await;

    for (i, (target, result)) in targets.iter().zip(&results).enumerate() {
        let metadata = result.as_ref().unwrap();
        assert_eq!(metadata.url(), target.url().as_str());
        assert_file_content(target.destination(), format!("body {}", i).as_bytes());
    }
}

#[tokio::test]
async fn test_fetch_all_empty() {
    let results = create_test_fetcher().fetch_all(&[]).await;
    assert!(results.is_empty());
}

#[test]
fn test_fetch_target_in_directory() {
    let temp_dir = create_temp_dir();
    let url = Url::parse("https://deno.land/std@0.69.0/fs/ensure_dir.ts").unwrap();

    let target = FetchTarget::in_directory(&url, temp_dir.path()).unwrap();

    assert_eq!(target.destination(), temp_dir.path().join("ensure_dir.ts"));
    assert_eq!(target.url(), &url);
}

#[test]
fn test_fetch_target_in_directory_rejects_directory_urls() {
    let url = Url::parse("https://deno.land/std@0.69.0/fs/").unwrap();
    let err = FetchTarget::in_directory(&url, "downloads").unwrap_err();
    assert!(matches!(err, Error::InvalidUrl(_)));
}
