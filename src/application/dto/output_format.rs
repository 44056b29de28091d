/// Output format enumeration for report documents
///
/// Both the CLI and the formatters need to understand it, so it lives in
/// the application layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Styled single-file HTML page
    Html,
    /// Machine-readable JSON (default)
    #[default]
    Json,
    /// Human-readable Markdown
    Markdown,
}

impl OutputFormat {
    /// File extension of the written report
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
            OutputFormat::Markdown => "md",
        }
    }

    /// Parses a format name, falling back to JSON for unknown names
    ///
    /// # Returns
    /// The format and, on fallback, a warning to show the user
    pub fn parse_lenient(s: &str) -> (Self, Option<String>) {
        match s.parse() {
            Ok(format) => (format, None),
            Err(e) => (
                OutputFormat::Json,
                Some(format!("{}. Falling back to json.", e)),
            ),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputFormat::Html),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Unknown format '{}' (expected html, json or markdown)",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Html => write!(f, "html"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}
