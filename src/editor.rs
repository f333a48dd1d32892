//! Card edit modal state
//!
//! The editor is either idle or holds one card (plus its section) and a
//! mutable draft of its fields. The document is only touched on commit.

use crate::model::{Card, CardId, Priority, SectionId};

/// Separator used by the tag/skill text inputs
pub const LIST_SEPARATOR: &str = ", ";

/// Form fields of the edit modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Image,
    Title,
    Description,
    Kind,
    Tags,
    Skills,
    Metrics,
    Timeline,
    Priority,
}

impl DraftField {
    pub const ALL: [DraftField; 9] = [
        DraftField::Image,
        DraftField::Title,
        DraftField::Description,
        DraftField::Kind,
        DraftField::Tags,
        DraftField::Skills,
        DraftField::Metrics,
        DraftField::Timeline,
        DraftField::Priority,
    ];

    /// Form control name, also used as the DOM `name` attribute
    pub fn name(&self) -> &'static str {
        match self {
            DraftField::Image => "image",
            DraftField::Title => "title",
            DraftField::Description => "description",
            DraftField::Kind => "type",
            DraftField::Tags => "tags",
            DraftField::Skills => "skills",
            DraftField::Metrics => "metrics",
            DraftField::Timeline => "timeline",
            DraftField::Priority => "priority",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn label(&self) -> &'static str {
        match self {
            DraftField::Image => "Image/Emoji",
            DraftField::Title => "Title",
            DraftField::Description => "Description",
            DraftField::Kind => "Type",
            DraftField::Tags => "Tags (comma-separated)",
            DraftField::Skills => "Skills (comma-separated)",
            DraftField::Metrics => "Metrics",
            DraftField::Timeline => "Timeline",
            DraftField::Priority => "Priority",
        }
    }
}

/// Split a comma-separated input into entries, dropping blank ones
pub fn parse_list(input: &str) -> Vec<String> {
    input
        .split(LIST_SEPARATOR)
        .filter(|item| !item.trim().is_empty())
        .map(str::to_string)
        .collect()
}

pub fn join_list(items: &[String]) -> String {
    items.join(LIST_SEPARATOR)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Mutable copy of a card's fields while the modal is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDraft {
    /// Carried along with the form but never written back
    pub id: CardId,
    pub title: String,
    pub description: String,
    pub image: String,
    pub kind: Option<String>,
    pub tags: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub metrics: Option<String>,
    pub timeline: Option<String>,
    pub priority: Option<Priority>,
}

impl CardDraft {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
            description: card.description.clone(),
            image: card.image.clone(),
            kind: card.kind.clone(),
            tags: card.tags.clone(),
            skills: card.skills.clone(),
            metrics: card.metrics.clone(),
            timeline: card.timeline.clone(),
            priority: card.priority,
        }
    }

    /// Apply raw form input to a field
    pub fn set_text(&mut self, field: DraftField, value: &str) {
        match field {
            DraftField::Image => self.image = value.to_string(),
            DraftField::Title => self.title = value.to_string(),
            DraftField::Description => self.description = value.to_string(),
            DraftField::Kind => self.kind = non_empty(value),
            DraftField::Tags => self.tags = Some(parse_list(value)),
            DraftField::Skills => self.skills = Some(parse_list(value)),
            DraftField::Metrics => self.metrics = non_empty(value),
            DraftField::Timeline => self.timeline = non_empty(value),
            DraftField::Priority => self.priority = Priority::parse(value),
        }
    }

    /// Current value of a field as form text
    pub fn text(&self, field: DraftField) -> String {
        match field {
            DraftField::Image => self.image.clone(),
            DraftField::Title => self.title.clone(),
            DraftField::Description => self.description.clone(),
            DraftField::Kind => self.kind.clone().unwrap_or_default(),
            DraftField::Tags => self.tags.as_deref().map(join_list).unwrap_or_default(),
            DraftField::Skills => self.skills.as_deref().map(join_list).unwrap_or_default(),
            DraftField::Metrics => self.metrics.clone().unwrap_or_default(),
            DraftField::Timeline => self.timeline.clone().unwrap_or_default(),
            DraftField::Priority => self.priority.map(|p| p.as_str().to_string()).unwrap_or_default(),
        }
    }

    /// Whether the modal offers an editor for `field`. Optional fields only
    /// appear when the card already carries them; metrics and timeline also
    /// need a non-empty value.
    pub fn shows(&self, field: DraftField) -> bool {
        match field {
            DraftField::Image | DraftField::Title | DraftField::Description | DraftField::Kind => true,
            DraftField::Tags => self.tags.is_some(),
            DraftField::Skills => self.skills.is_some(),
            DraftField::Metrics => self.metrics.as_deref().is_some_and(|m| !m.is_empty()),
            DraftField::Timeline => self.timeline.as_deref().is_some_and(|t| !t.is_empty()),
            DraftField::Priority => self.priority.is_some(),
        }
    }

    /// The committed card: draft fields over the original, original id kept
    pub fn apply_to(&self, original: &Card) -> Card {
        Card {
            id: original.id,
            title: self.title.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            kind: self.kind.clone(),
            tags: self.tags.clone(),
            skills: self.skills.clone(),
            metrics: self.metrics.clone(),
            timeline: self.timeline.clone(),
            priority: self.priority,
        }
    }
}

/// The card currently open in the modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub section_id: SectionId,
    pub card: Card,
    pub draft: CardDraft,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing(EditSession),
}

impl EditorState {
    pub fn is_idle(&self) -> bool {
        matches!(self, EditorState::Idle)
    }

    pub fn session(&self) -> Option<&EditSession> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing(session) => Some(session),
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut EditSession> {
        match self {
            EditorState::Idle => None,
            EditorState::Editing(session) => Some(session),
        }
    }

    /// Open the modal on `card`
    pub fn open(section_id: SectionId, card: &Card) -> Self {
        EditorState::Editing(EditSession {
            section_id,
            card: card.clone(),
            draft: CardDraft::from_card(card),
        })
    }

    /// Close the modal, handing back whatever session was open
    pub fn close(&mut self) -> Option<EditSession> {
        match std::mem::take(self) {
            EditorState::Idle => None,
            EditorState::Editing(session) => Some(session),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Card {
        Card::new(9, "Eval", "first\nsecond", "🔍")
            .with_skills(&["Data Pipeline", "Testing"])
            .with_kind("Quality Engineering")
    }

    #[test]
    fn test_parse_list() {
        assert_eq!(parse_list("a, b, c"), vec!["a", "b", "c"]);
        assert_eq!(parse_list("a, , b, "), vec!["a", "b"]);
        assert!(parse_list("").is_empty());
        // Only ", " separates entries
        assert_eq!(parse_list("a,b"), vec!["a,b"]);
    }

    #[test]
    fn test_draft_visibility_follows_presence() {
        let draft = CardDraft::from_card(&sample());
        assert!(draft.shows(DraftField::Title));
        assert!(draft.shows(DraftField::Kind));
        assert!(draft.shows(DraftField::Skills));
        assert!(!draft.shows(DraftField::Tags));
        assert!(!draft.shows(DraftField::Metrics));
        assert!(!draft.shows(DraftField::Priority));
    }

    #[test]
    fn test_empty_metrics_and_timeline_stay_hidden() {
        let json = r#"{"id":1,"title":"t","description":"d","image":"x","metrics":"","timeline":""}"#;
        let card: Card = serde_json::from_str(json).unwrap();
        let draft = CardDraft::from_card(&card);
        assert!(!draft.shows(DraftField::Metrics));
        assert!(!draft.shows(DraftField::Timeline));

        let draft = CardDraft::from_card(&card.with_metrics("+30%").with_timeline("Q3"));
        assert!(draft.shows(DraftField::Metrics));
        assert!(draft.shows(DraftField::Timeline));
    }

    #[test]
    fn test_set_text_and_read_back() {
        let mut draft = CardDraft::from_card(&sample());
        draft.set_text(DraftField::Skills, "Rust, Testing, ");
        assert_eq!(draft.skills, Some(vec!["Rust".to_string(), "Testing".to_string()]));
        assert_eq!(draft.text(DraftField::Skills), "Rust, Testing");

        draft.set_text(DraftField::Skills, "");
        assert_eq!(draft.skills, Some(vec![]));
        assert!(draft.shows(DraftField::Skills));

        draft.set_text(DraftField::Priority, "Low");
        assert_eq!(draft.priority, Some(Priority::Low));
        draft.set_text(DraftField::Priority, "");
        assert_eq!(draft.priority, None);
        assert!(!draft.shows(DraftField::Priority));
    }

    #[test]
    fn test_apply_keeps_original_id() {
        let card = sample();
        let mut draft = CardDraft::from_card(&card);
        draft.id = 12345;
        draft.set_text(DraftField::Title, "Renamed");
        let saved = draft.apply_to(&card);
        assert_eq!(saved.id, 9);
        assert_eq!(saved.title, "Renamed");
        assert_eq!(saved.description, card.description);
    }

    #[test]
    fn test_field_names_round_trip() {
        for field in DraftField::ALL {
            assert_eq!(DraftField::from_name(field.name()), Some(field));
        }
        assert_eq!(DraftField::from_name("id"), None);
    }

    #[test]
    fn test_open_and_close() {
        let mut editor = EditorState::open(2, &sample());
        assert!(!editor.is_idle());
        let session = editor.close().unwrap();
        assert_eq!(session.section_id, 2);
        assert!(editor.is_idle());
        assert!(editor.close().is_none());
    }
}
