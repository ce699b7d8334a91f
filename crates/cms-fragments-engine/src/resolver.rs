//! # Link Resolution
//!
//! Rendering never decides where a document lives. Every render call takes a
//! [`LinkResolver`] that turns a [`DocumentLink`] into an href. Any
//! `Fn(&DocumentLink) -> String` closure is a resolver, and
//! [`TemplateLinkResolver`] covers the common "URL pattern" case.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::DocumentLink;

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{(id|uid|type|slug|lang)\}").expect("valid placeholder pattern")
});

/// Turns a reference to another document into a URL.
///
/// Called synchronously, once per rendered document link. Results are not
/// cached between calls.
pub trait LinkResolver {
    fn resolve(&self, link: &DocumentLink) -> String;
}

impl<F> LinkResolver for F
where
    F: Fn(&DocumentLink) -> String,
{
    fn resolve(&self, link: &DocumentLink) -> String {
        self(link)
    }
}

/// Resolves document links by filling placeholders in a URL template.
///
/// Supported placeholders: `{id}`, `{uid}`, `{type}`, `{slug}`, `{lang}`.
/// A missing `uid` or `lang` expands to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLinkResolver {
    template: String,
    broken_url: Option<String>,
}

impl TemplateLinkResolver {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
            broken_url: None,
        }
    }

    /// Sends links to deleted documents to a fixed URL instead of the template.
    pub fn with_broken_url(mut self, url: impl Into<String>) -> Self {
        self.broken_url = Some(url.into());
        self
    }

    pub fn template(&self) -> &str {
        &self.template
    }
}

impl LinkResolver for TemplateLinkResolver {
    fn resolve(&self, link: &DocumentLink) -> String {
        if link.is_broken
            && let Some(url) = &self.broken_url
        {
            return url.clone();
        }

        // One pass over the template; substituted values are never rescanned.
        PLACEHOLDER
            .replace_all(&self.template, |caps: &Captures<'_>| match &caps[1] {
                "id" => link.id.as_str(),
                "uid" => link.uid.as_deref().unwrap_or_default(),
                "type" => link.doc_type.as_str(),
                "slug" => link.slug.as_str(),
                _ => link.lang.as_deref().unwrap_or_default(),
            })
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn link(is_broken: bool) -> DocumentLink {
        DocumentLink {
            id: "UrDmKgEAALwMyrXA".into(),
            uid: Some("using".into()),
            doc_type: "doc".into(),
            tags: vec!["docs".into()],
            slug: "using-meta-micro".into(),
            lang: Some("en-gb".into()),
            is_broken,
        }
    }

    #[rstest]
    #[case("http://localhost/{type}/{id}", "http://localhost/doc/UrDmKgEAALwMyrXA")]
    #[case("/{lang}/{uid}", "/en-gb/using")]
    #[case("/docs/{slug}", "/docs/using-meta-micro")]
    #[case("/static", "/static")]
    #[case("/{unknown}/{id}", "/{unknown}/UrDmKgEAALwMyrXA")]
    #[case("/{id}{id}", "/UrDmKgEAALwMyrXAUrDmKgEAALwMyrXA")]
    fn expands_placeholders(#[case] template: &str, #[case] expected: &str) {
        let resolver = TemplateLinkResolver::new(template);
        assert_eq!(resolver.resolve(&link(false)), expected);
    }

    #[test]
    fn substituted_values_are_not_expanded_again() {
        let mut doc = link(false);
        doc.uid = Some("{type}".into());
        doc.slug = "{lang}".into();
        let resolver = TemplateLinkResolver::new("/{uid}/{slug}");
        assert_eq!(resolver.resolve(&doc), "/{type}/{lang}");
    }

    #[test]
    fn missing_optional_fields_expand_to_nothing() {
        let mut doc = link(false);
        doc.uid = None;
        doc.lang = None;
        let resolver = TemplateLinkResolver::new("/{lang}/{uid}");
        assert_eq!(resolver.resolve(&doc), "//");
    }

    #[test]
    fn broken_links_use_the_template_unless_configured() {
        let plain = TemplateLinkResolver::new("/{type}/{id}");
        assert_eq!(plain.resolve(&link(true)), "/doc/UrDmKgEAALwMyrXA");

        let routed = plain.with_broken_url("/not-found");
        assert_eq!(routed.resolve(&link(true)), "/not-found");
        assert_eq!(routed.resolve(&link(false)), "/doc/UrDmKgEAALwMyrXA");
    }

    #[test]
    fn closures_are_resolvers() {
        let resolver = |l: &DocumentLink| format!("/by-slug/{}", l.slug);
        let dynamic: &dyn LinkResolver = &resolver;
        assert_eq!(dynamic.resolve(&link(false)), "/by-slug/using-meta-micro");
    }
}
