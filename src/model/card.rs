//! A single content tile

use serde::{Deserialize, Deserializer, Serialize};

pub type CardId = u64;

/// Card priority badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Parse a select value. The empty string means "unset" and yields `None`,
    /// as does anything unrecognised.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }
}

/// Older pages stored an empty string for "no priority"; treat it (and any
/// unknown label) as unset instead of failing the whole document.
fn lenient_priority<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Priority>, D::Error> {
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(Priority::parse))
}

/// One content tile. Optional fields are present-or-absent; presence decides
/// whether the editor offers them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub title: String,
    /// Free text, line breaks are kept when rendering
    pub description: String,
    /// Emoji glyph shown at the top of the card
    pub image: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metrics: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeline: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_priority",
        skip_serializing_if = "Option::is_none"
    )]
    pub priority: Option<Priority>,
}

impl Card {
    pub const NEW_TITLE: &'static str = "New Card";
    pub const NEW_DESCRIPTION: &'static str = "Add your content here";
    pub const NEW_IMAGE: &'static str = "📝";

    /// Bare card with only the required fields
    pub fn new(id: CardId, title: &str, description: &str, image: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
            kind: None,
            tags: None,
            skills: None,
            metrics: None,
            timeline: None,
            priority: None,
        }
    }

    /// Placeholder card appended by "Add Card"
    pub fn placeholder(id: CardId) -> Self {
        Self::new(id, Self::NEW_TITLE, Self::NEW_DESCRIPTION, Self::NEW_IMAGE)
    }

    pub fn with_kind(mut self, kind: &str) -> Self {
        self.kind = Some(kind.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = Some(tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_skills(mut self, skills: &[&str]) -> Self {
        self.skills = Some(skills.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_metrics(mut self, metrics: &str) -> Self {
        self.metrics = Some(metrics.to_string());
        self
    }

    pub fn with_timeline(mut self, timeline: &str) -> Self {
        self.timeline = Some(timeline.to_string());
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("High"), Some(Priority::High));
        assert_eq!(Priority::parse("medium"), Some(Priority::Medium));
        assert_eq!(Priority::parse(" LOW "), Some(Priority::Low));
        assert_eq!(Priority::parse(""), None);
        assert_eq!(Priority::parse("urgent"), None);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let card = Card::placeholder(7);
        let json = serde_json::to_string(&card).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"title":"New Card","description":"Add your content here","image":"📝"}"#
        );
    }

    #[test]
    fn test_reads_legacy_shape() {
        let json = r#"{
            "id": 6,
            "title": "RAG",
            "description": "line one\nline two",
            "image": "📊",
            "priority": "High",
            "type": "Automation Pipeline"
        }"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.kind.as_deref(), Some("Automation Pipeline"));
        assert_eq!(card.priority, Some(Priority::High));
        assert_eq!(card.description, "line one\nline two");
        assert!(card.tags.is_none());
        assert!(card.metrics.is_none());
    }

    #[test]
    fn test_empty_priority_reads_as_unset() {
        let json = r#"{"id":1,"title":"t","description":"d","image":"x","priority":""}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.priority, None);
    }
}
