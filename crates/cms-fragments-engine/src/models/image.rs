/// One rendition of an image: the main picture or a named responsive view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    pub url: String,
    /// Never `Some(0)`; a zero dimension parses as absent.
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub alt: Option<String>,
    pub copyright: Option<String>,
}

impl View {
    /// Width divided by height, when both are known.
    pub fn ratio(&self) -> Option<f64> {
        match (self.width, self.height) {
            (Some(w), Some(h)) => Some(f64::from(w) / f64::from(h)),
            _ => None,
        }
    }
}

/// An image fragment with its main view and any named views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    pub main: View,
    /// Named views in source order.
    pub views: Vec<(String, View)>,
}

impl Image {
    /// Name under which the main view is addressed by [`Image::view`].
    pub const MAIN: &'static str = "main";

    /// Looks up a view by name; `"main"` returns the main view.
    pub fn view(&self, name: &str) -> Option<&View> {
        if name == Self::MAIN {
            return Some(&self.main);
        }
        self.views.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }
}
