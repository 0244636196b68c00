use serde::Deserialize;

/// Switches that shape how a profile is normalized.
///
/// Defaults: margin blocks are dropped, SNS links are left as-is, and HTML tags are
/// removed from text blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ExtractOptions {
    /// Emit a blank spacer row for each `margin_block` link.
    pub include_margin_block: bool,
    /// Reserved. Accepted and stored, but not consulted by the mapping yet.
    pub concat_sns_links: bool,
    /// Turn `<br>` into newlines, `&nbsp;` into spaces and strip other tags in text blocks.
    pub delete_html_tags: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_margin_block: false,
            concat_sns_links: false,
            delete_html_tags: true,
        }
    }
}

impl ExtractOptions {
    /// Emit a blank `margin_block` row for each spacer block.
    #[must_use]
    pub const fn include_margin_block(mut self, yes: bool) -> Self {
        self.include_margin_block = yes;
        self
    }

    /// Reserved; stored but does not change the output yet.
    #[must_use]
    pub const fn concat_sns_links(mut self, yes: bool) -> Self {
        self.concat_sns_links = yes;
        self
    }

    /// Clean text-block descriptions (`<br>` to newline, `&nbsp;` to space, tags removed).
    #[must_use]
    pub const fn delete_html_tags(mut self, yes: bool) -> Self {
        self.delete_html_tags = yes;
        self
    }
}
