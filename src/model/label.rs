//! Block labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A tag attached to a block by one filter and read by another.
///
/// The well-known labels are enumerated; labels introduced by filters
/// outside this crate travel as [`Label::Custom`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Label {
    /// The document headline
    Title,
    /// Byline, dateline and similar metadata
    ArticleMetadata,
    /// A block that likely starts the trailing boilerplate
    IndicatesEndOfText,
    /// Possibly content, pending further evidence
    MightBeContent,
    /// Very likely content
    VeryLikelyContent,
    /// Never content, whatever later filters decide
    StrictlyNotContent,
    /// Horizontal rule
    Hr,
    /// List item
    Li,
    /// Any heading
    Heading,
    /// Level-1 heading
    H1,
    /// Level-2 heading
    H2,
    /// Level-3 heading
    H3,
    /// A label outside the well-known set
    Custom(String),
}

impl Label {
    /// Get the canonical string form of this label.
    pub fn as_str(&self) -> &str {
        match self {
            Label::Title => "TITLE",
            Label::ArticleMetadata => "ARTICLE_METADATA",
            Label::IndicatesEndOfText => "INDICATES_END_OF_TEXT",
            Label::MightBeContent => "MIGHT_BE_CONTENT",
            Label::VeryLikelyContent => "VERY_LIKELY_CONTENT",
            Label::StrictlyNotContent => "STRICTLY_NOT_CONTENT",
            Label::Hr => "HR",
            Label::Li => "LI",
            Label::Heading => "HEADING",
            Label::H1 => "H1",
            Label::H2 => "H2",
            Label::H3 => "H3",
            Label::Custom(name) => name,
        }
    }

    /// Check if this is a label outside the well-known set.
    pub fn is_custom(&self) -> bool {
        matches!(self, Label::Custom(_))
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Label {
    fn from(s: &str) -> Self {
        match s {
            "TITLE" => Label::Title,
            "ARTICLE_METADATA" => Label::ArticleMetadata,
            "INDICATES_END_OF_TEXT" => Label::IndicatesEndOfText,
            "MIGHT_BE_CONTENT" => Label::MightBeContent,
            "VERY_LIKELY_CONTENT" => Label::VeryLikelyContent,
            "STRICTLY_NOT_CONTENT" => Label::StrictlyNotContent,
            "HR" => Label::Hr,
            "LI" => Label::Li,
            "HEADING" => Label::Heading,
            "H1" => Label::H1,
            "H2" => Label::H2,
            "H3" => Label::H3,
            other => Label::Custom(other.to_string()),
        }
    }
}

impl From<String> for Label {
    fn from(s: String) -> Self {
        match Label::from(s.as_str()) {
            Label::Custom(_) => Label::Custom(s),
            known => known,
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        match label {
            Label::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for Label {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Label::from(s))
    }
}
