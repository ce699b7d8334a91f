use super::escape::push_attr;
use crate::models::View;

/// `<img alt="…" src="…" width="…" height="…" />`; unknown attributes are
/// left out.
pub fn view_html(view: &View) -> String {
    let mut html = String::from("<img");
    if let Some(alt) = &view.alt {
        push_attr(&mut html, "alt", alt);
    }
    push_attr(&mut html, "src", &view.url);
    if let Some(width) = view.width {
        push_attr(&mut html, "width", &width.to_string());
    }
    if let Some(height) = view.height {
        push_attr(&mut html, "height", &height.to_string());
    }
    html.push_str(" />");
    html
}
