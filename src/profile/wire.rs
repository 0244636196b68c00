//! Minimal serde mapping for the `__NEXT_DATA__` payload.
//!
//! Only the fields the normalizer reads are modeled; everything else on the page
//! (OGP metadata, layout styling, activity categories...) is ignored.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct NextData {
    pub(crate) props: Option<Props>,
}

#[derive(Deserialize)]
pub(crate) struct Props {
    #[serde(rename = "pageProps")]
    pub(crate) page_props: Option<PageProps>,
}

#[derive(Deserialize)]
pub(crate) struct PageProps {
    pub(crate) profile: Option<Profile>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Profile {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) name: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) catchphrase: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) profile_text: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) picture_url: Option<String>,
    pub(crate) creator_detail_layout: Option<CreatorDetailLayout>,
    pub(crate) sns_icon_links: Option<Vec<SnsIconLink>>,
    pub(crate) profile_links: Option<Vec<ProfileLink>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreatorDetailLayout {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) background_image_url: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SnsIconLink {
    #[serde(rename = "type")]
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) url: Option<String>,
}

/// One content block, keyed by `profileLinkType`.
///
/// Each tag carries its own sub-object; a missing sub-object reads as empty.
#[derive(Debug, Deserialize)]
#[serde(from = "RawProfileLink")]
pub(crate) enum ProfileLink {
    Image(ImageLink),
    MarginBlock,
    Text(TextLink),
    Button(ButtonLink),
    Movie(MovieLink),
    Unknown(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawProfileLink {
    profile_link_type: Option<Value>,
    button_link: Option<ButtonLink>,
    text_link: Option<TextLink>,
    image_link: Option<ImageLink>,
    movie_link: Option<MovieLink>,
}

impl From<RawProfileLink> for ProfileLink {
    fn from(raw: RawProfileLink) -> Self {
        let tag = match raw.profile_link_type {
            Some(Value::String(s)) => s,
            Some(other) => return Self::Unknown(other.to_string()),
            None => return Self::Unknown("null".to_string()),
        };
        match tag.as_str() {
            "image" => Self::Image(raw.image_link.unwrap_or_default()),
            "margin_block" => Self::MarginBlock,
            "text" => Self::Text(raw.text_link.unwrap_or_default()),
            "button" => Self::Button(raw.button_link.unwrap_or_default()),
            "movie" => Self::Movie(raw.movie_link.unwrap_or_default()),
            _ => Self::Unknown(tag),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ImageLink {
    pub(crate) profile_images: Option<Vec<ProfileImage>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfileImage {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) image_url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) url_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TextLink {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) description: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ButtonLink {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) url: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) icon_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct MovieLink {
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) title: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) description: Option<String>,
    #[serde(default, deserialize_with = "de_opt_string_from_scalar")]
    pub(crate) url: Option<String>,
}

/// Accepts a string, a number or bool (rendered as text), or null/missing.
/// Arrays and objects in a text slot read as missing.
fn de_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let v = Option::<Value>::deserialize(deserializer)?;
    Ok(match v {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}
