//! litlink-rs: scrape lit.link profile pages into a simplified, stable data shape.
//!
//! The page's embedded Next.js payload (`__NEXT_DATA__`) is fetched once per
//! [`LitLink`], then normalized into [`LitlinkData`]: profile metadata, a list of
//! social links and the ordered content rows.

pub mod core;
pub mod profile;

pub use crate::core::{LitClient, LitClientBuilder, LitError};
pub use profile::{
    ExtractOptions, LitLink, LitlinkData, RowType, UserLink, UserRowData, extract_from_html,
    load_profile, resolve_identifier,
};
