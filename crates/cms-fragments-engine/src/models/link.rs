use crate::resolver::LinkResolver;

/// A reference to another document in the same repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLink {
    pub id: String,
    pub uid: Option<String>,
    /// The linked document's custom type.
    pub doc_type: String,
    pub tags: Vec<String>,
    pub slug: String,
    pub lang: Option<String>,
    /// Set by the API when the target document no longer exists.
    pub is_broken: bool,
}

/// A link to an arbitrary URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebLink {
    pub url: String,
    /// Present for links into the media library.
    pub content_type: Option<String>,
}

/// A link to a file stored in the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    pub url: String,
    pub kind: String,
    pub size: u64,
    pub filename: String,
}

/// A link to an image stored in the media library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLink {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    Document(DocumentLink),
    Web(WebLink),
    File(FileLink),
    Image(ImageLink),
}

impl Link {
    /// Returns the href for this link.
    ///
    /// Only document links consult the resolver; media and web links carry
    /// their own URL.
    pub fn url(&self, resolver: &dyn LinkResolver) -> String {
        match self {
            Link::Document(doc) => resolver.resolve(doc),
            Link::Web(web) => web.url.clone(),
            Link::File(file) => file.url.clone(),
            Link::Image(image) => image.url.clone(),
        }
    }

    /// The text shown for this link when rendered on its own.
    pub fn label(&self) -> &str {
        match self {
            Link::Document(doc) => &doc.slug,
            Link::Web(web) => &web.url,
            Link::File(file) => &file.filename,
            Link::Image(image) => &image.url,
        }
    }

    pub fn as_document(&self) -> Option<&DocumentLink> {
        match self {
            Link::Document(doc) => Some(doc),
            _ => None,
        }
    }
}
