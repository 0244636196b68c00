//! Maps the raw `__NEXT_DATA__` profile onto [`LitlinkData`].

use regex::Regex;
use std::char::REPLACEMENT_CHARACTER;
use std::sync::LazyLock;

use super::model::{LitlinkData, RowType, UserLink, UserRowData};
use super::options::ExtractOptions;
use super::wire::{ImageLink, ProfileLink, Profile, TextLink};

static UNICODE_ESCAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\u([a-fA-F0-9]{4})").expect("unicode escape regex"));

static HTML_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"<("[^"]*"|'[^']*'|[^'">])*>"#).expect("html tag regex")
});

/// `urlType` lit.link uses for links it has no dedicated icon for.
const OTHERS: &str = "others";

pub(crate) fn normalize(profile: &Profile, options: &ExtractOptions) -> LitlinkData {
    let mut data = LitlinkData {
        user_profile_image_url: text(profile.picture_url.as_deref()),
        user_name: text(profile.name.as_deref()),
        user_description: text(profile.profile_text.as_deref()),
        user_field: text(profile.catchphrase.as_deref()),
        background_image_url: profile
            .creator_detail_layout
            .as_ref()
            .map(|l| text(l.background_image_url.as_deref()))
            .unwrap_or_default(),
        user_links: Vec::new(),
        user_row_datas: Vec::new(),
    };

    for icon in profile.sns_icon_links.iter().flatten() {
        data.user_links.push(UserLink {
            service_name: text(icon.kind.as_deref()),
            service_url: text(icon.url.as_deref()),
        });
    }

    for link in profile.profile_links.iter().flatten() {
        match link {
            ProfileLink::Image(image) => push_image_link(&mut data, image),
            ProfileLink::MarginBlock => {
                if options.include_margin_block {
                    data.user_row_datas
                        .push(UserRowData::blank(RowType::MarginBlock));
                }
            }
            ProfileLink::Text(t) => data.user_row_datas.push(text_row(t, options)),
            ProfileLink::Button(b) => data.user_row_datas.push(UserRowData {
                title: text(b.title.as_deref()),
                message: text(b.description.as_deref()),
                url: text(b.url.as_deref()),
                img_url: text(b.icon_url.as_deref()),
                row_type: RowType::Button,
            }),
            ProfileLink::Movie(m) => data.user_row_datas.push(UserRowData {
                title: text(m.title.as_deref()),
                message: text(m.description.as_deref()),
                url: text(m.url.as_deref()),
                img_url: String::new(),
                row_type: RowType::Movie,
            }),
            ProfileLink::Unknown(kind) => {
                tracing::warn!(profile_link_type = %kind, "unknown profileLinkType, skipping");
            }
        }
    }

    data
}

/// An image block is either a gallery or, when the first image has an empty
/// `imageUrl`, a second batch of SNS icons.
fn push_image_link(data: &mut LitlinkData, image: &ImageLink) {
    let images = image.profile_images.as_deref().unwrap_or_default();
    let Some(first) = images.first() else {
        return;
    };

    if first.image_url.as_deref() == Some("") {
        for img in images {
            let service_name = match img.url_type.as_deref() {
                Some(OTHERS) => img.title.clone().unwrap_or_else(|| OTHERS.to_string()),
                other => text(other),
            };
            data.user_links.push(UserLink {
                service_name,
                service_url: text(img.url.as_deref()),
            });
        }
    } else {
        for img in images {
            data.user_row_datas.push(UserRowData {
                title: text(img.title.as_deref()),
                message: text(img.description.as_deref()),
                url: text(img.url.as_deref()),
                img_url: text(img.image_url.as_deref()),
                row_type: RowType::Image,
            });
        }
    }
}

fn text_row(link: &TextLink, options: &ExtractOptions) -> UserRowData {
    let message = link
        .description
        .as_deref()
        .map(|d| {
            let d = unescape_unicode(d);
            if options.delete_html_tags {
                strip_html(&d)
            } else {
                d
            }
        })
        .unwrap_or_default();

    UserRowData {
        title: text(link.title.as_deref()),
        message,
        ..UserRowData::blank(RowType::Text)
    }
}

fn text(s: Option<&str>) -> String {
    s.unwrap_or_default().to_string()
}

/// Replaces `\uXXXX` escapes with the characters they encode.
///
/// Consecutive escapes are decoded together so surrogate pairs survive; a lone
/// surrogate becomes U+FFFD.
pub(crate) fn unescape_unicode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut units: Vec<u16> = Vec::new();
    let mut last = 0usize;

    for caps in UNICODE_ESCAPE.captures_iter(s) {
        let (Some(whole), Some(hex)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() != last {
            flush_utf16(&mut out, &mut units);
            out.push_str(&s[last..whole.start()]);
        }
        if let Ok(unit) = u16::from_str_radix(hex.as_str(), 16) {
            units.push(unit);
        }
        last = whole.end();
    }
    flush_utf16(&mut out, &mut units);
    out.push_str(&s[last..]);
    out
}

fn flush_utf16(out: &mut String, units: &mut Vec<u16>) {
    out.extend(
        char::decode_utf16(units.drain(..)).map(|r| r.unwrap_or(REPLACEMENT_CHARACTER)),
    );
}

/// `<br>` becomes a newline, `&nbsp;` a space, and any other tag is dropped.
/// Text between tags is kept.
pub(crate) fn strip_html(s: &str) -> String {
    let s = s.replace("<br>", "\n").replace("&nbsp;", " ");
    HTML_TAG.replace_all(&s, "").into_owned()
}
