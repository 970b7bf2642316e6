//! JSON encoding of text documents.

use crate::error::Result;
use crate::model::TextDocument;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Convert a document to JSON.
pub fn to_json(doc: &TextDocument, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(doc)?,
        JsonFormat::Compact => serde_json::to_string(doc)?,
    };
    Ok(json)
}

/// Decode a document from JSON.
///
/// Blocks may omit `word_count` (counted from the text), `is_content`
/// (defaults to `true`) and `labels` (defaults to none).
pub fn from_json(json: &str) -> Result<TextDocument> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Label, TextBlock};

    #[test]
    fn test_to_json_pretty() {
        let doc = TextDocument::from_blocks(vec![TextBlock::with_text("Hello")]).with_title("Test");

        let json = to_json(&doc, JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"title\""));
        assert!(json.contains("Test"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let doc = TextDocument::from_blocks(vec![
            TextBlock::with_text("Hello").with_label(Label::IndicatesEndOfText)
        ]);

        let json = to_json(&doc, JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));
        assert!(json.contains(r#""labels":["INDICATES_END_OF_TEXT"]"#));
    }

    #[test]
    fn test_from_json() {
        let doc = from_json(
            r#"{
                "title": "Une page",
                "blocks": [
                    {"text": "Accueil", "is_content": false},
                    {"text": "Une page", "labels": ["TITLE"]},
                    {"text": "Le texte de la page.", "word_count": 5}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(doc.title.as_deref(), Some("Une page"));
        assert_eq!(doc.len(), 3);
        assert!(!doc.blocks[0].is_content);
        assert!(doc.blocks[1].has_label(&Label::Title));
        assert_eq!(doc.blocks[1].word_count, 2);
        assert_eq!(doc.blocks[2].word_count, 5);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(from_json("{\"blocks\": [{}]}"), Err(Error::Json(_))));
        assert!(matches!(from_json("not json"), Err(Error::Json(_))));
    }
}
