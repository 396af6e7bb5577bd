//! Image load-failure fallback.
//!
//! Every image on the page degrades to the same inline SVG placeholder: a
//! neutral 100×100 rectangle with a centered label, encoded as a data URI
//! so the fallback itself can never fail to load. The hero portrait
//! additionally retries one alternate path before giving up.
//!
//! Termination is structural: the error handler disarms itself when the
//! placeholder goes in, so a synthetic error against the placeholder (or
//! any later error) changes nothing.

/// Label rendered inside the stock placeholder graphic.
pub const PLACEHOLDER_LABEL: &str = "Image";

/// Alt text applied alongside the placeholder substitution.
pub const PLACEHOLDER_ALT: &str = "Placeholder image";

/// Inline SVG placeholder as a data URI: 100×100 viewBox, `#f0f0f0` fill,
/// centered 12 px `#999` label.
///
/// Single construction site on purpose — every fallback across the page is
/// byte-identical, so repeated failures render consistently.
pub fn placeholder_data_uri(label: &str) -> String {
    format!(
        "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"100\" \
         height=\"100\" viewBox=\"0 0 100 100\"%3E%3Crect width=\"100\" height=\"100\" \
         fill=\"%23f0f0f0\"/%3E%3Ctext x=\"50\" y=\"50\" font-family=\"Arial\" \
         font-size=\"12\" fill=\"%23999\" text-anchor=\"middle\" \
         dominant-baseline=\"middle\"%3E{label}%3C/text%3E%3C/svg%3E"
    )
}

/// Which source an image slot is currently showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageSource {
    Primary,
    Alternate,
    Placeholder,
}

/// Fallback state machine for one image slot.
#[derive(Clone, Debug)]
pub struct ImageFallback {
    primary: String,
    alternate: Option<String>,
    placeholder: String,
    source: ImageSource,
    /// Cleared once the placeholder goes in; further errors are no-ops.
    armed: bool,
}

impl ImageFallback {
    /// Primary source with no retry: first failure goes straight to the
    /// placeholder.
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            alternate: None,
            placeholder: placeholder_data_uri(PLACEHOLDER_LABEL),
            source: ImageSource::Primary,
            armed: true,
        }
    }

    /// Primary source with one alternate path tried before the placeholder.
    pub fn with_alternate(primary: impl Into<String>, alternate: impl Into<String>) -> Self {
        Self {
            alternate: Some(alternate.into()),
            ..Self::new(primary)
        }
    }

    pub fn source(&self) -> ImageSource {
        self.source
    }

    /// The URL the slot should currently render.
    pub fn current_src(&self) -> &str {
        match self.source {
            ImageSource::Primary => &self.primary,
            ImageSource::Alternate => self.alternate.as_deref().unwrap_or(&self.placeholder),
            ImageSource::Placeholder => &self.placeholder,
        }
    }

    /// Alt text override once the placeholder is showing.
    pub fn alt_override(&self) -> Option<&'static str> {
        (self.source == ImageSource::Placeholder).then_some(PLACEHOLDER_ALT)
    }

    /// A load error fired against the current source. Returns true when the
    /// rendered source changed.
    pub fn on_error(&mut self) -> bool {
        if !self.armed {
            return false;
        }
        self.source = match (self.source, &self.alternate) {
            (ImageSource::Primary, Some(_)) => ImageSource::Alternate,
            _ => {
                self.armed = false;
                ImageSource::Placeholder
            }
        };
        true
    }
}
