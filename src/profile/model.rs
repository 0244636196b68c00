use serde::{Deserialize, Serialize};
use std::fmt;

/// The simplified, stable shape a lit.link profile is normalized into.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LitlinkData {
    /// URL of the profile picture.
    pub user_profile_image_url: String,
    /// Display name.
    pub user_name: String,
    /// Free-text biography.
    pub user_description: String,
    /// Tagline shown under the name.
    pub user_field: String,
    /// URL of the page background image.
    pub background_image_url: String,
    /// Social/service links in source order. Duplicates are kept.
    pub user_links: Vec<UserLink>,
    /// Content blocks in page layout order.
    pub user_row_datas: Vec<UserRowData>,
}

/// A single external service and its URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserLink {
    /// Service name as tagged by lit.link (e.g. `twitter`), or a user-supplied title.
    pub service_name: String,
    pub service_url: String,
}

/// One normalized content block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRowData {
    pub title: String,
    pub message: String,
    pub url: String,
    pub img_url: String,
    #[serde(rename = "type")]
    pub row_type: RowType,
}

impl UserRowData {
    /// A blank row of the given kind.
    pub(crate) fn blank(row_type: RowType) -> Self {
        Self {
            title: String::new(),
            message: String::new(),
            url: String::new(),
            img_url: String::new(),
            row_type,
        }
    }
}

/// The kind of content block a row came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowType {
    Image,
    MarginBlock,
    Text,
    Button,
    Movie,
}

impl RowType {
    /// The tag lit.link uses for this block kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::MarginBlock => "margin_block",
            Self::Text => "text",
            Self::Button => "button",
            Self::Movie => "movie",
        }
    }
}

impl fmt::Display for RowType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
