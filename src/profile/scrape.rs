//! Fetch the lit.link profile HTML and pull out the `__NEXT_DATA__` payload.

use scraper::{Html, Selector};
use url::Url;

use super::wire::{NextData, Profile};
use crate::core::{LitClient, LitError, net};

/// Next.js renders the page props into `<script id="__NEXT_DATA__">`.
const NEXT_DATA_SELECTOR: &str = r#"script[id="__NEXT_DATA__"]"#;

/// `<base>/<id>`, with the identifier appended as a single percent-encoded segment.
///
/// The identifier never gets to pick scheme, host or query.
pub(crate) fn profile_url(base: &Url, id: &str) -> Result<Url, LitError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|()| LitError::Config(format!("base url cannot carry a path: {base}")))?
        .pop_if_empty()
        .push(id);
    Ok(url)
}

pub(crate) async fn fetch_page(client: &LitClient, id: &str) -> Result<String, LitError> {
    let url = profile_url(client.base_url(), id)?;
    tracing::debug!(%url, "fetching profile page");

    let resp = client.http().get(url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(LitError::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        });
    }

    let body = net::get_text(resp, "profile_html", id, "html").await?;
    tracing::debug!(len = body.len(), "profile page received");
    Ok(body)
}

/// Returns the text content of the `__NEXT_DATA__` script element.
pub(crate) fn extract_next_data(html: &str) -> Result<String, LitError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR)
        .map_err(|e| LitError::Parse(format!("next data selector: {e}")))?;

    let element = document
        .select(&selector)
        .next()
        .ok_or_else(|| LitError::Parse("__NEXT_DATA__ element not found".into()))?;

    Ok(element.text().collect::<String>())
}

/// Parses the page and returns the profile it carries.
pub(crate) fn parse_profile(html: &str) -> Result<Profile, LitError> {
    let json_str = extract_next_data(html)?;

    let next: NextData = serde_json::from_str(&json_str)
        .map_err(|e| LitError::Parse(format!("next data json: {e}")))?;

    next.props
        .and_then(|p| p.page_props)
        .and_then(|pp| pp.profile)
        .ok_or_else(|| LitError::NotFound("profile does not exist".into()))
}
