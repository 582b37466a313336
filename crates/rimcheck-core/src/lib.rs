use thiserror::Error;

/// Workspace-wide result alias.
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Parsed XML element, produced by `rimcheck-parsers-xml` and walked
/// read-only by the validator. Lives only for the duration of one
/// validation call; attributes are kept for the formatter, the
/// structural rules ignore them.
#[derive(Debug, Clone)]
pub struct XmlNode {
    pub tag: String,
    /// Concatenated character data (entities unescaped, surrounding
    /// whitespace trimmed by the reader).
    pub text: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
    /// 1-based line of the opening tag, if available.
    pub line: Option<usize>,
}

impl XmlNode {
    pub fn new(tag: impl Into<String>, line: Option<usize>) -> Self {
        XmlNode {
            tag: tag.into(),
            text: String::new(),
            attrs: Vec::new(),
            children: Vec::new(),
            line,
        }
    }

    /// First immediate child with the given tag name.
    pub fn find_child(&self, tag: &str) -> Option<&XmlNode> {
        self.children.iter().find(|c| c.tag == tag)
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Lightweight error type for crates that need a concrete one.
#[derive(Debug, Error)]
pub enum RimCheckError {
    #[error("{0}")]
    Xml(String),
    #[error("{0}")]
    Other(String),
}
