use crate::cluster_report::domain::VersionQuery;
use serde::Deserialize;

/// Sentinel used when no strategy yields a server version
pub const VERSION_NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Deserialize)]
struct VersionOutput {
    #[serde(rename = "serverVersion")]
    server_version: Option<ServerVersion>,
}

#[derive(Debug, Deserialize)]
struct ServerVersion {
    #[serde(rename = "gitVersion")]
    git_version: Option<String>,
}

/// One way of obtaining the server version: a query plus a parser for its
/// output. The parser answers "no match" with `None`.
#[derive(Debug, Clone, Copy)]
pub struct VersionStrategy {
    pub query: VersionQuery,
    parser: fn(&str) -> Option<String>,
}

impl VersionStrategy {
    pub fn parse(&self, raw: &str) -> Option<String> {
        (self.parser)(raw)
    }
}

/// VersionDetector service holding the ordered version detection strategies
pub struct VersionDetector;

impl VersionDetector {
    /// Strategies in the order they must be tried
    pub fn strategies() -> [VersionStrategy; 2] {
        [
            VersionStrategy {
                query: VersionQuery::Structured,
                parser: Self::parse_structured,
            },
            VersionStrategy {
                query: VersionQuery::Legacy,
                parser: Self::parse_legacy,
            },
        ]
    }

    /// Parses `version -o json` output (`serverVersion.gitVersion`)
    pub fn parse_structured(raw: &str) -> Option<String> {
        let output: VersionOutput = serde_json::from_str(raw).ok()?;
        output
            .server_version?
            .git_version
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    /// Parses the text output of old clients
    ///
    /// Accepts both `Server Version: v1.27.3` and the Go struct dump
    /// `Server Version: version.Info{..., GitVersion:"v1.27.3", ...}`.
    pub fn parse_legacy(raw: &str) -> Option<String> {
        let line = raw
            .lines()
            .find_map(|l| l.trim().strip_prefix("Server Version:"))?
            .trim();

        if let Some((_, rest)) = line.split_once("GitVersion:\"") {
            return rest
                .split('"')
                .next()
                .filter(|v| !v.is_empty())
                .map(String::from);
        }

        line.split_whitespace().next().map(String::from)
    }
}
