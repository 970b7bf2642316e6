//! Labeling of the block that repeats the document title.

use super::BoilerplateFilter;
use crate::error::Result;
use crate::model::{Label, TextDocument};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

struct TitlePatterns {
    /// Separators whose longest part is a title candidate, loosest last
    longest_part: Vec<Regex>,
    /// Spaced separators whose long parts are all title candidates
    all_parts: Vec<Regex>,
    trailing_site: Regex,
    leading_site: Regex,
}

fn patterns() -> &'static TitlePatterns {
    static PATTERNS: OnceLock<TitlePatterns> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        let compile = |p: &str| Regex::new(p).expect("title pattern is valid");
        TitlePatterns {
            longest_part: [
                r"[ ]*[|»\-][ ]*",
                r"[ ]*[|»:][ ]*",
                r"[ ]*[|»:()][ ]*",
                r"[ ]*[|»:()\-][ ]*",
                r"[ ]*[|»,:()\-][ ]*",
            ]
            .iter()
            .map(|p| compile(p))
            .collect(),
            all_parts: [r"[ ]+[|][ ]+", r"[ ]+[\-][ ]+"]
                .iter()
                .map(|p| compile(p))
                .collect(),
            trailing_site: compile(r" - [^\-]+$"),
            leading_site: compile(r"^[^\-]+ - "),
        }
    })
}

/// Minimum words for a part of a `|`/`-` separated title to count.
const MIN_PART_WORDS: usize = 4;

/// Labels the first block whose text matches the document title.
///
/// Page titles usually carry the site name around the headline
/// (`"Headline | Site"`, `"Site - Headline"`), so the classifier derives
/// several candidate strings from the title and compares them with each
/// block's normalized text. The first matching block gets
/// [`Label::Title`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TitleMatchClassifier {
    title: Option<String>,
}

impl TitleMatchClassifier {
    /// Create a classifier that reads the title from each document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a classifier with a fixed title, ignoring document titles.
    pub fn for_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
        }
    }

    /// Compute the candidate strings for a title.
    pub fn potential_titles(title: &str) -> HashSet<String> {
        let mut candidates = HashSet::new();
        let title = normalize(title);
        if title.is_empty() {
            return candidates;
        }

        let patterns = patterns();
        for re in &patterns.longest_part {
            if let Some(part) = longest_part(&title, re) {
                candidates.insert(part);
            }
        }
        for re in &patterns.all_parts {
            add_parts(&mut candidates, &title, re);
        }
        for re in [&patterns.trailing_site, &patterns.leading_site] {
            let stripped = re.replacen(&title, 1, "");
            let stripped = stripped.trim();
            if !stripped.is_empty() {
                candidates.insert(stripped.to_string());
            }
        }

        candidates.insert(title);
        candidates
    }
}

impl BoilerplateFilter for TitleMatchClassifier {
    fn name(&self) -> &str {
        "TitleMatchClassifier"
    }

    fn process(&self, doc: &mut TextDocument) -> Result<bool> {
        let Some(title) = self.title.as_deref().or(doc.title.as_deref()) else {
            return Ok(false);
        };
        let candidates = Self::potential_titles(title);
        if candidates.is_empty() {
            return Ok(false);
        }

        for (idx, block) in doc.blocks.iter_mut().enumerate() {
            if candidates.contains(&normalize(&block.text)) {
                log::debug!("TitleMatchClassifier: title at block {}", idx);
                return Ok(block.add_label(Label::Title));
            }
        }

        log::debug!("TitleMatchClassifier: no block matches the title");
        Ok(false)
    }
}

fn normalize(text: &str) -> String {
    text.replace('\u{00A0}', " ")
        .replace('\'', "")
        .trim()
        .to_lowercase()
}

fn longest_part(title: &str, re: &Regex) -> Option<String> {
    let parts: Vec<&str> = re.split(title).collect();
    if parts.len() == 1 {
        return None;
    }

    let mut longest = "";
    let mut longest_words = 0;
    let mut longest_chars = 0;
    for part in parts {
        if part.contains(".com") {
            continue;
        }
        // compare lengths in characters, not bytes
        let words = part.split_whitespace().count();
        let chars = part.chars().count();
        if words > longest_words || chars > longest_chars {
            longest_words = words;
            longest_chars = chars;
            longest = part;
        }
    }

    let longest = longest.trim();
    if longest.is_empty() {
        None
    } else {
        Some(longest.to_string())
    }
}

fn add_parts(candidates: &mut HashSet<String>, title: &str, re: &Regex) {
    let parts: Vec<&str> = re.split(title).collect();
    if parts.len() == 1 {
        return;
    }
    for part in parts {
        if part.contains(".com") {
            continue;
        }
        if part.split_whitespace().count() >= MIN_PART_WORDS {
            candidates.insert(part.trim().to_string());
        }
    }
}
