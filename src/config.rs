//! Argument prettifying configuration.

use crate::errors::{FactsError, FactsResult};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Controls how message arguments are rendered into fact messages.
///
/// Each leaf fact carries the prettifier it was built with, so facts built
/// under different configurations can still be combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Prettifier {
    /// Wrap text arguments in double quotes and chars in single quotes.
    pub quote_text: bool,
    /// Maximum rendered length of a single argument (in chars) before it is cut with `...`.
    pub size_limit: Option<usize>,
}

impl Default for Prettifier {
    fn default() -> Self {
        Self {
            quote_text: true,
            size_limit: None,
        }
    }
}

impl Prettifier {
    /// Create a prettifier with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// A prettifier that inserts every argument verbatim.
    pub fn verbatim() -> Self {
        Self {
            quote_text: false,
            size_limit: None,
        }
    }

    pub fn with_quote_text(mut self, quote_text: bool) -> Self {
        self.quote_text = quote_text;
        self
    }

    /// Cut arguments longer than `limit` chars.
    pub fn with_size_limit(mut self, limit: usize) -> Self {
        self.size_limit = Some(limit);
        self
    }

    /// Parse a prettifier from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> FactsResult<Self> {
        toml::from_str(content).map_err(|e| FactsError::Parse {
            message: e.to_string(),
        })
    }

    /// Load a prettifier from a TOML file.
    ///
    /// A missing file yields the default configuration.
    pub fn load(path: &Path) -> FactsResult<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no prettifier config, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| FactsError::Load {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let prettifier = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), ?prettifier, "loaded prettifier config");
        Ok(prettifier)
    }

    pub(crate) fn text(&self, text: &str) -> String {
        let text = self.truncate(text);
        if self.quote_text {
            format!("\"{}\"", text)
        } else {
            text
        }
    }

    pub(crate) fn char(&self, c: char) -> String {
        if self.quote_text {
            format!("'{}'", c)
        } else {
            c.to_string()
        }
    }

    pub(crate) fn value(&self, value: &str) -> String {
        self.truncate(value)
    }

    fn truncate(&self, text: &str) -> String {
        match self.size_limit {
            Some(limit) if text.chars().count() > limit => {
                let mut cut: String = text.chars().take(limit).collect();
                cut.push_str("...");
                cut
            }
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_quotes_text() {
        let p = Prettifier::default();
        assert_eq!(p.text("abc"), "\"abc\"");
        assert_eq!(p.char('x'), "'x'");
        assert_eq!(p.value("42"), "42");
    }

    #[test]
    fn test_verbatim() {
        let p = Prettifier::verbatim();
        assert_eq!(p.text("abc"), "abc");
        assert_eq!(p.char('x'), "x");
    }

    #[test]
    fn test_size_limit() {
        let p = Prettifier::new().with_size_limit(3);
        assert_eq!(p.text("abcdef"), "\"abc...\"");
        assert_eq!(p.value("12"), "12");
        assert_eq!(p.value("1234"), "123...");
    }

    #[test]
    fn test_from_toml_partial() {
        let p = Prettifier::from_toml_str("size_limit = 10").unwrap();
        assert!(p.quote_text);
        assert_eq!(p.size_limit, Some(10));
    }

    #[test]
    fn test_from_toml_invalid() {
        let err = Prettifier::from_toml_str("quote_text = \"maybe\"").unwrap_err();
        assert!(matches!(err, FactsError::Parse { .. }));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
quote_text = false
size_limit = 8
"#
        )
        .unwrap();

        let p = Prettifier::load(file.path()).unwrap();
        assert_eq!(p, Prettifier::verbatim().with_size_limit(8));
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let p = Prettifier::load(Path::new("/nonexistent/prettifier.toml")).unwrap();
        assert_eq!(p, Prettifier::default());
    }
}
