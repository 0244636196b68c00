//! lit.link profile loading + normalization.
//!
//! Internals are split into:
//! - `scrape`:    HTML fetch + `__NEXT_DATA__` extraction
//! - `wire`:      serde mapping for the embedded payload
//! - `normalize`: payload -> [`LitlinkData`] mapping
//! - `model` / `options`: public output types and switches

mod model;
mod normalize;
mod options;
mod scrape;
mod wire;

pub use model::{LitlinkData, RowType, UserLink, UserRowData};
pub use options::ExtractOptions;

use regex::Regex;
use std::sync::LazyLock;
use tokio::sync::OnceCell;
use url::Url;

use crate::core::{LitClient, LitError};

static LITLINK_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://lit\.link(/|$)").expect("litlink url regex"));

/// Turns a profile URL or bare identifier into the identifier.
///
/// `https://lit.link/4kiiru` and `4kiiru` both yield `4kiiru`. Anything that is not a
/// lit.link URL is returned verbatim.
pub fn resolve_identifier(input: &str) -> String {
    if !LITLINK_URL.is_match(input) {
        return input.to_string();
    }
    match Url::parse(input) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segs| segs.next_back())
            .unwrap_or_default()
            .to_string(),
        Err(_) => input.rsplit('/').next().unwrap_or_default().to_string(),
    }
}

/// A single lit.link profile, loaded at most once and normalized at most once.
///
/// Both steps are guarded by one-shot cells, so sharing a `LitLink` between tasks
/// never fetches the page twice or duplicates rows. A failed load leaves the
/// instance untouched and may be retried by calling again.
///
/// # Example
///
/// ```no_run
/// # use litlink_rs::{LitClient, LitLink, ExtractOptions};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = LitClient::default();
/// let page = LitLink::new(&client, "https://lit.link/4kiiru")
///     .with_options(ExtractOptions::default().include_margin_block(true));
///
/// let data = page.extract().await?;
/// println!("{} has {} links", data.user_name, data.user_links.len());
/// # Ok(())
/// # }
/// ```
pub struct LitLink {
    client: LitClient,
    id: String,
    options: ExtractOptions,
    profile: OnceCell<wire::Profile>,
    data: OnceCell<LitlinkData>,
}

impl LitLink {
    /// Creates an extractor for a lit.link URL or bare identifier, with default options.
    pub fn new(client: &LitClient, input: impl AsRef<str>) -> Self {
        Self {
            client: client.clone(),
            id: resolve_identifier(input.as_ref()),
            options: ExtractOptions::default(),
            profile: OnceCell::new(),
            data: OnceCell::new(),
        }
    }

    /// Replaces the normalization options.
    #[must_use]
    pub const fn with_options(mut self, options: ExtractOptions) -> Self {
        self.options = options;
        self
    }

    /// The resolved profile identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The options `extract` normalizes with.
    pub const fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Whether the profile page has been fetched and parsed.
    pub fn is_loaded(&self) -> bool {
        self.profile.initialized()
    }

    /// Fetches and parses the profile page. Subsequent calls are no-ops.
    ///
    /// # Errors
    ///
    /// - [`LitError::Config`] if the identifier is empty.
    /// - [`LitError::Http`] / [`LitError::Status`] if the page cannot be fetched.
    /// - [`LitError::Parse`] if the page has no readable `__NEXT_DATA__` payload.
    /// - [`LitError::NotFound`] if the payload holds no profile.
    #[tracing::instrument(skip(self), err, fields(id = %self.id))]
    pub async fn load(&self) -> Result<(), LitError> {
        self.loaded_profile().await.map(|_| ())
    }

    async fn loaded_profile(&self) -> Result<&wire::Profile, LitError> {
        self.profile
            .get_or_try_init(|| async {
                if self.id.is_empty() {
                    return Err(LitError::Config("no identifier provided".into()));
                }
                let body = scrape::fetch_page(&self.client, &self.id).await?;
                scrape::parse_profile(&body)
            })
            .await
    }

    /// Loads the page if needed and normalizes it. Subsequent calls return the
    /// same record without re-running the mapping.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`LitLink::load`].
    #[tracing::instrument(skip(self), err, fields(id = %self.id))]
    pub async fn extract(&self) -> Result<&LitlinkData, LitError> {
        let profile = self.loaded_profile().await?;
        let data = self
            .data
            .get_or_init(|| async {
                let data = normalize::normalize(profile, &self.options);
                tracing::debug!(
                    links = data.user_links.len(),
                    rows = data.user_row_datas.len(),
                    "profile normalized"
                );
                data
            })
            .await;
        Ok(data)
    }

    /// The normalized record, if [`LitLink::extract`] has succeeded.
    ///
    /// `None` is the initial, all-empty state.
    pub fn data(&self) -> Option<&LitlinkData> {
        self.data.get()
    }

    /// Consumes the extractor, returning the normalized record or an empty one.
    pub fn into_data(self) -> LitlinkData {
        self.data.into_inner().unwrap_or_default()
    }
}

/// Fetches and normalizes a profile in one call.
///
/// # Errors
///
/// Returns `LitError` if the page cannot be fetched or parsed, or holds no profile.
pub async fn load_profile(
    client: &LitClient,
    input: &str,
    options: ExtractOptions,
) -> Result<LitlinkData, LitError> {
    let page = LitLink::new(client, input).with_options(options);
    page.extract().await?;
    Ok(page.into_data())
}

/// Normalizes a profile page the caller already has (e.g. a saved copy), without
/// touching the network.
///
/// # Errors
///
/// Returns [`LitError::Parse`] if the page has no readable `__NEXT_DATA__` payload and
/// [`LitError::NotFound`] if it holds no profile.
pub fn extract_from_html(html: &str, options: &ExtractOptions) -> Result<LitlinkData, LitError> {
    let profile = scrape::parse_profile(html)?;
    Ok(normalize::normalize(&profile, options))
}
