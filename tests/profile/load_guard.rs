use crate::common;
use httpmock::Method::GET;
use litlink_rs::LitLink;
use serde_json::json;

fn one_button_page() -> String {
    common::page_for_links(json!([
        { "profileLinkType": "button",
          "buttonLink": { "title": "Shop", "description": "d", "url": "https://s.example", "iconUrl": "https://i.example" } }
    ]))
}

#[tokio::test]
async fn load_twice_fetches_once() {
    let server = common::setup_server();
    let mock = common::mock_profile_page(&server, "guard", one_button_page());

    let client = common::client_for(&server);
    let page = LitLink::new(&client, "guard");
    page.load().await.unwrap();
    page.load().await.unwrap();
    assert!(page.is_loaded());

    mock.assert_hits(1);
}

#[tokio::test]
async fn concurrent_loads_share_one_fetch() {
    let server = common::setup_server();
    let mock = common::mock_profile_page(&server, "guard", one_button_page());

    let client = common::client_for(&server);
    let page = LitLink::new(&client, "guard");
    let (a, b, c) = tokio::join!(page.load(), page.load(), page.extract());
    a.unwrap();
    b.unwrap();
    assert_eq!(c.unwrap().user_row_datas.len(), 1);

    mock.assert_hits(1);
}

#[tokio::test]
async fn extract_twice_does_not_duplicate_rows() {
    let server = common::setup_server();
    let mock = common::mock_profile_page(&server, "guard", one_button_page());

    let client = common::client_for(&server);
    let page = LitLink::new(&client, "guard");

    let first = page.extract().await.unwrap().clone();
    let second = page.extract().await.unwrap();
    assert_eq!(&first, second);
    assert_eq!(second.user_row_datas.len(), 1);
    assert_eq!(page.data(), Some(&first));

    mock.assert_hits(1);
}

#[tokio::test]
async fn failed_load_is_not_cached() {
    let server = common::setup_server();
    let mut missing = server.mock(|when, then| {
        when.method(GET).path("/flaky");
        then.status(503).body("maintenance");
    });

    let client = common::client_for(&server);
    let page = LitLink::new(&client, "flaky");
    assert!(page.load().await.is_err());
    assert!(!page.is_loaded());
    missing.assert_hits(1);
    missing.delete();

    let ok = common::mock_profile_page(&server, "flaky", one_button_page());
    page.load().await.unwrap();
    ok.assert_hits(1);
}
