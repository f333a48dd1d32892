//! Card grid arrangement
//!
//! The arrangement of a section depends only on how many cards it holds.

/// Grid arrangement for a section's cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLayout {
    /// No cards: "create your first card" prompt
    Empty,
    Single,
    TwoUp,
    /// Three cards, the first one rendered large
    ThreeUp,
    FourUp,
    /// Five or more cards
    Grid,
}

impl CardLayout {
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => CardLayout::Empty,
            1 => CardLayout::Single,
            2 => CardLayout::TwoUp,
            3 => CardLayout::ThreeUp,
            4 => CardLayout::FourUp,
            _ => CardLayout::Grid,
        }
    }

    /// Stylesheet class for the grid container
    pub fn css_class(&self) -> &'static str {
        match self {
            CardLayout::Empty => "emptyState",
            CardLayout::Single => "singleCard",
            CardLayout::TwoUp => "twoCardBento",
            CardLayout::ThreeUp => "threeCardBento",
            CardLayout::FourUp => "fourCardBento",
            CardLayout::Grid => "multiCardGrid",
        }
    }
}

/// Whether the card at `index` is drawn as the hero tile
pub fn is_hero(index: usize, count: usize) -> bool {
    index == 0 && CardLayout::for_count(count) == CardLayout::ThreeUp
}

/// Grids with more than four cards get a minimum row height so tiles don't overlap
pub fn uses_tall_rows(count: usize) -> bool {
    count > 4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_for_count() {
        assert_eq!(CardLayout::for_count(0), CardLayout::Empty);
        assert_eq!(CardLayout::for_count(1), CardLayout::Single);
        assert_eq!(CardLayout::for_count(2), CardLayout::TwoUp);
        assert_eq!(CardLayout::for_count(3), CardLayout::ThreeUp);
        assert_eq!(CardLayout::for_count(4), CardLayout::FourUp);
        assert_eq!(CardLayout::for_count(5), CardLayout::Grid);
        assert_eq!(CardLayout::for_count(40), CardLayout::Grid);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(CardLayout::Empty.css_class(), "emptyState");
        assert_eq!(CardLayout::ThreeUp.css_class(), "threeCardBento");
        assert_eq!(CardLayout::Grid.css_class(), "multiCardGrid");
    }

    #[test]
    fn test_hero_only_first_of_three() {
        assert!(is_hero(0, 3));
        assert!(!is_hero(1, 3));
        assert!(!is_hero(0, 4));
        assert!(!is_hero(0, 1));
    }

    #[test]
    fn test_tall_rows() {
        assert!(!uses_tall_rows(4));
        assert!(uses_tall_rows(5));
    }
}
