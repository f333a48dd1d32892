//! Sections and the document that holds them

use serde::{Deserialize, Serialize};

use super::card::{Card, CardId};

pub type SectionId = u32;

/// A named, ordered group of cards shown as one sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    /// Stored under `content` to stay readable by earlier deployments
    #[serde(rename = "content", default)]
    pub cards: Vec<Card>,
}

impl Section {
    pub fn new(id: SectionId, title: &str, cards: Vec<Card>) -> Self {
        Self {
            id,
            title: title.to_string(),
            cards,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Index of a card within this section
    pub fn position(&self, card_id: CardId) -> Option<usize> {
        self.cards.iter().position(|c| c.id == card_id)
    }

    pub fn card(&self, card_id: CardId) -> Option<&Card> {
        self.cards.iter().find(|c| c.id == card_id)
    }

    /// Move the card at `from` to `to`, shifting the cards in between.
    /// Returns false (and leaves the order alone) when nothing moved.
    pub fn move_card(&mut self, from: usize, to: usize) -> bool {
        if from == to || from >= self.cards.len() || to >= self.cards.len() {
            return false;
        }
        let card = self.cards.remove(from);
        self.cards.insert(to, card);
        true
    }
}

/// The whole persisted collection of sections, serialized as a bare array
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document {
    pub sections: Vec<Section>,
}

impl Document {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_mut(&mut self, id: SectionId) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.id == id)
    }

    pub fn first_section(&self) -> Option<&Section> {
        self.sections.first()
    }

    /// Look a card up inside a specific section
    pub fn find_card(&self, section_id: SectionId, card_id: CardId) -> Option<&Card> {
        self.section(section_id)?.card(card_id)
    }

    /// Highest card id anywhere in the document (0 when there are no cards)
    pub fn max_card_id(&self) -> CardId {
        self.sections
            .iter()
            .flat_map(|s| s.cards.iter())
            .map(|c| c.id)
            .max()
            .unwrap_or(0)
    }

    /// Total number of cards across all sections
    pub fn card_count(&self) -> usize {
        self.sections.iter().map(Section::len).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::card::Priority;
    use proptest::prelude::*;

    fn section_of(ids: &[CardId]) -> Section {
        Section::new(
            0,
            "Test",
            ids.iter().map(|&id| Card::new(id, "t", "d", "x")).collect(),
        )
    }

    fn ids(section: &Section) -> Vec<CardId> {
        section.cards.iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_move_card_forward_and_back() {
        let mut section = section_of(&[1, 2, 3, 4]);
        assert!(section.move_card(0, 2));
        assert_eq!(ids(&section), vec![2, 3, 1, 4]);
        assert!(section.move_card(3, 0));
        assert_eq!(ids(&section), vec![4, 2, 3, 1]);
    }

    #[test]
    fn test_move_card_noops() {
        let mut section = section_of(&[1, 2, 3]);
        assert!(!section.move_card(1, 1));
        assert!(!section.move_card(0, 3));
        assert!(!section.move_card(5, 0));
        assert_eq!(ids(&section), vec![1, 2, 3]);
    }

    #[test]
    fn test_serialized_shape() {
        let doc = Document::new(vec![Section::new(
            3,
            "Future Plans",
            vec![Card::new(11, "Eval", "a\nb", "🚀").with_priority(Priority::High)],
        )]);
        let json = doc.to_json().unwrap();
        assert_eq!(
            json,
            r#"[{"id":3,"title":"Future Plans","content":[{"id":11,"title":"Eval","description":"a\nb","image":"🚀","priority":"High"}]}]"#
        );
    }

    #[test]
    fn test_max_card_id_and_count() {
        let doc = Document::new(vec![section_of(&[4, 9]), section_of(&[]), section_of(&[2])]);
        assert_eq!(doc.max_card_id(), 9);
        assert_eq!(doc.card_count(), 3);
        assert_eq!(Document::default().max_card_id(), 0);
    }

    fn arb_text() -> impl Strategy<Value = String> {
        prop::string::string_regex("[a-zA-Z0-9 ,.\n🚀你好]{0,12}").unwrap()
    }

    fn arb_card() -> impl Strategy<Value = Card> {
        (
            any::<u64>(),
            arb_text(),
            arb_text(),
            arb_text(),
            prop::option::of(arb_text()),
            prop::option::of(prop::collection::vec(arb_text(), 0..4)),
            prop::option::of(prop::collection::vec(arb_text(), 0..4)),
            prop::option::of(arb_text()),
            prop::option::of(arb_text()),
            prop::option::of(prop::sample::select(Priority::ALL.to_vec())),
        )
            .prop_map(
                |(id, title, description, image, kind, tags, skills, metrics, timeline, priority)| Card {
                    id,
                    title,
                    description,
                    image,
                    kind,
                    tags,
                    skills,
                    metrics,
                    timeline,
                    priority,
                },
            )
    }

    fn arb_document() -> impl Strategy<Value = Document> {
        prop::collection::vec(
            (any::<u32>(), arb_text(), prop::collection::vec(arb_card(), 0..6))
                .prop_map(|(id, title, cards)| Section { id, title, cards }),
            0..5,
        )
        .prop_map(Document::new)
    }

    proptest! {
        #[test]
        fn prop_document_json_round_trip(doc in arb_document()) {
            let json = doc.to_json().unwrap();
            let back = Document::from_json(&json).unwrap();
            prop_assert_eq!(back, doc);
        }

        #[test]
        fn prop_move_card_preserves_ids(n in 1usize..10, from in 0usize..10, to in 0usize..10) {
            let from = from % n;
            let to = to % n;
            let original: Vec<CardId> = (0..n as CardId).collect();
            let mut section = section_of(&original);
            let moved = section.move_card(from, to);

            prop_assert_eq!(section.len(), n);
            let mut sorted = ids(&section);
            sorted.sort_unstable();
            prop_assert_eq!(sorted, original.clone());
            prop_assert_eq!(section.cards[to].id, original[from]);
            if from == to {
                prop_assert!(!moved);
                prop_assert_eq!(ids(&section), original);
            }
        }
    }
}
