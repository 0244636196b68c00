#![allow(dead_code)]

use httpmock::{Method::GET, Mock, MockServer};
use litlink_rs::LitClient;
use serde_json::{Value, json};
use std::{fs, path::Path};
use url::Url;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, id: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{endpoint}_{id}.{ext}");
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

/// A client whose base URL points at the mock server.
pub fn client_for(server: &MockServer) -> LitClient {
    LitClient::builder()
        .base_url(Url::parse(&format!("{}/", server.base_url())).unwrap())
        .build()
        .unwrap()
}

/// Wraps a raw `__NEXT_DATA__` payload in a minimal Next.js page.
pub fn next_data_html(payload: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html><head><title>lit.link</title></head>
<body><div id="__next"></div>
<script id="__NEXT_DATA__" type="application/json">{payload}</script>
</body></html>"#
    )
}

/// Builds a payload with `profile` placed at `props.pageProps.profile`.
pub fn payload_with_profile(profile: Value) -> String {
    json!({
        "props": { "pageProps": { "profile": profile, "errorCode": "" }, "__N_SSP": true },
        "page": "/[creatorUrl]",
        "buildId": "test",
    })
    .to_string()
}

/// A profile with the given links and no SNS icons.
pub fn profile_with_links(links: Value) -> Value {
    json!({
        "name": "Tester",
        "catchphrase": "catch",
        "profileText": "bio",
        "pictureUrl": "https://img.example/p.png",
        "creatorDetailLayout": { "backgroundImageUrl": "https://img.example/bg.png" },
        "snsIconLinks": [],
        "profileLinks": links,
    })
}

pub fn page_for_links(links: Value) -> String {
    next_data_html(&payload_with_profile(profile_with_links(links)))
}

pub fn mock_profile_page<'a>(server: &'a MockServer, id: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("/{id}"));
        then.status(200)
            .header("content-type", "text/html; charset=utf-8")
            .body(body);
    })
}

pub fn mock_profile_fixture<'a>(server: &'a MockServer, id: &str) -> Mock<'a> {
    mock_profile_page(server, id, fixture("profile_html", id, "html"))
}
