//! Report rendering options.

/// Title printed between the banners when none is configured.
pub const DEFAULT_TITLE: &str = "CONTENT FROM RECONNECT BLOGS.DOCX";

/// Character repeated to form a banner line.
pub const DEFAULT_BANNER_CHAR: char = '=';

/// Number of characters in a banner line.
pub const DEFAULT_BANNER_WIDTH: usize = 80;

/// Options for the paragraph report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportOptions {
    /// Title line between the two banners
    pub title: String,

    /// Character the banner lines are made of
    pub banner_char: char,

    /// Banner width in characters
    pub banner_width: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            banner_char: DEFAULT_BANNER_CHAR,
            banner_width: DEFAULT_BANNER_WIDTH,
        }
    }
}

impl ReportOptions {
    /// Create new report options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title line.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the banner character and width.
    pub fn with_banner(mut self, banner_char: char, width: usize) -> Self {
        self.banner_char = banner_char;
        self.banner_width = width;
        self
    }

    /// The banner line, without a trailing newline.
    pub fn banner(&self) -> String {
        self.banner_char.to_string().repeat(self.banner_width)
    }
}
