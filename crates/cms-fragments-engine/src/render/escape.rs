use std::fmt::Write;

/// Escapes `&`, `<`, `>` and `"` for use in text or a double-quoted attribute.
pub fn escape(s: &str) -> std::borrow::Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

/// Appends ` name="value"` with the value escaped.
pub(crate) fn push_attr(html: &mut String, name: &str, value: &str) {
    // Writing into a String cannot fail.
    let _ = write!(html, " {name}=\"{}\"", escape(value));
}

/// Appends ` class="…"` when a label is present.
pub(crate) fn push_class(html: &mut String, label: Option<&str>) {
    if let Some(label) = label {
        push_attr(html, "class", label);
    }
}
