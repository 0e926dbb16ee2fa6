//! Responsive dialog widths
//!
//! A dialog can declare a width per viewport size. Each entry becomes a
//! `max-width` media query scoped to the dialog's `data-dialog-id`, emitted
//! in declaration order so later (narrower) entries win.

/// One `(max viewport width, dialog width)` pair, both CSS lengths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    pub max_width: String,
    pub width: String,
}

/// Ordered breakpoint list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a breakpoint, e.g. `.with("960px", "75vw")`.
    pub fn with(mut self, max_width: impl Into<String>, width: impl Into<String>) -> Self {
        self.0.push(Breakpoint {
            max_width: max_width.into(),
            width: width.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.0.iter()
    }
}

impl FromIterator<(String, String)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Breakpoints(
            iter.into_iter()
                .map(|(max_width, width)| Breakpoint { max_width, width })
                .collect(),
        )
    }
}

/// Render the stylesheet for `dialog_id`. Empty when there are no breakpoints.
pub fn breakpoint_css(dialog_id: &str, breakpoints: &Breakpoints) -> String {
    breakpoints
        .iter()
        .map(|bp| {
            format!(
                "@media screen and (max-width: {}) {{ [data-dialog-id=\"{}\"] {{ width: {} !important; }} }}",
                bp.max_width, dialog_id, bp.width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
