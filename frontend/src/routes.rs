//! Client-side route table.

/// Top-level pages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    /// Marketing page.
    Landing,
    /// Upload-and-classify workflow.
    Predict,
}

impl Page {
    pub const ALL: [Page; 2] = [Page::Landing, Page::Predict];

    pub fn path(self) -> &'static str {
        match self {
            Page::Landing => "/",
            Page::Predict => "/predict",
        }
    }

    /// Navigation label.
    pub fn label(self) -> &'static str {
        match self {
            Page::Landing => "Home",
            Page::Predict => "Predict",
        }
    }

    /// Exact-match lookup. Unknown paths have no page.
    pub fn from_path(path: &str) -> Option<Page> {
        Self::ALL.into_iter().find(|page| page.path() == path)
    }
}
