use crate::node::ContentNode;

/// Third-party content described by an oEmbed payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Embed {
    pub provider: Option<String>,
    /// The oEmbed `type` (`video`, `rich`, `photo`, `link`).
    pub kind: String,
    pub url: String,
    /// `None` when the provider omits the field or sends a non-numeric value
    /// such as `"100%"`.
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Provider-supplied markup, emitted verbatim.
    pub html: Option<String>,
    /// The full oEmbed object, for fields not modelled above.
    pub oembed: ContentNode,
}
