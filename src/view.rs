//! View models
//!
//! Plain projections of the showcase state for the renderer. Nothing in here
//! mutates state or knows about the DOM.

use crate::app::Showcase;
use crate::ids::IdSource;
use crate::layout::{CardLayout, is_hero, uses_tall_rows};
use crate::model::{Card, CardId, Priority, Profile, Section, SectionId};
use crate::persistence::Storage;
use crate::sidebar::SidebarController;

/// Characters of a section title shown on the collapsed rail
const RAIL_LABEL_CHARS: usize = 2;

/// One sidebar navigation button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    pub id: SectionId,
    pub label: String,
    /// Card count, hidden while the sidebar is collapsed
    pub count: Option<usize>,
    pub active: bool,
}

/// Sidebar header block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarHeader {
    pub heading: &'static str,
    pub subtitle: Option<&'static str>,
    /// Stats grid and footer icons only show when expanded
    pub show_stats: bool,
}

/// Title line above the card grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionHeader {
    pub id: SectionId,
    pub title: String,
    pub items_label: String,
}

/// Footer badge on a card, in display order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Badge {
    Metrics(String),
    Skills(Vec<String>),
    Tags(Vec<String>),
    Timeline(String),
    Priority { label: String, high: bool },
    Kind(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView<'a> {
    pub card: &'a Card,
    pub hero: bool,
    /// Part of a grid with tall minimum rows
    pub tall: bool,
    pub badges: Vec<Badge>,
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn non_empty_list(value: &Option<Vec<String>>) -> Option<Vec<String>> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

/// Badges for a card; blank fields produce none
pub fn badges(card: &Card) -> Vec<Badge> {
    let mut badges = Vec::new();
    if let Some(metrics) = non_empty(&card.metrics) {
        badges.push(Badge::Metrics(metrics));
    }
    if let Some(skills) = non_empty_list(&card.skills) {
        badges.push(Badge::Skills(skills));
    }
    if let Some(tags) = non_empty_list(&card.tags) {
        badges.push(Badge::Tags(tags));
    }
    if let Some(timeline) = non_empty(&card.timeline) {
        badges.push(Badge::Timeline(timeline));
    }
    if let Some(priority) = card.priority {
        badges.push(Badge::Priority {
            label: format!("{} Priority", priority.as_str()),
            high: priority == Priority::High,
        });
    }
    if let Some(kind) = non_empty(&card.kind) {
        badges.push(Badge::Kind(kind));
    }
    badges
}

pub fn card_views(section: &Section) -> Vec<CardView<'_>> {
    let count = section.len();
    section
        .cards
        .iter()
        .enumerate()
        .map(|(index, card)| CardView {
            card,
            hero: is_hero(index, count),
            tall: uses_tall_rows(count),
            badges: badges(card),
        })
        .collect()
}

pub fn nav_entries(sections: &[Section], active: Option<SectionId>, sidebar: &SidebarController) -> Vec<NavEntry> {
    sections
        .iter()
        .map(|section| NavEntry {
            id: section.id,
            label: if sidebar.is_rail() {
                section.title.chars().take(RAIL_LABEL_CHARS).collect()
            } else {
                section.title.clone()
            },
            count: (!sidebar.is_collapsed()).then(|| section.len()),
            active: active == Some(section.id),
        })
        .collect()
}

pub fn sidebar_header(profile: &Profile, sidebar: &SidebarController) -> SidebarHeader {
    SidebarHeader {
        heading: if sidebar.is_rail() {
            profile.short_heading
        } else {
            profile.heading
        },
        subtitle: (!sidebar.is_collapsed()).then_some(profile.subtitle),
        show_stats: !sidebar.is_collapsed(),
    }
}

pub fn section_header(section: &Section) -> SectionHeader {
    SectionHeader {
        id: section.id,
        title: section.title.clone(),
        items_label: format!("{} items", section.len()),
    }
}

/// Everything the main view needs for one render pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    pub header: SidebarHeader,
    pub nav: Vec<NavEntry>,
    pub section: Option<SectionHeader>,
    pub layout: CardLayout,
    pub cards: Vec<CardView<'a>>,
    /// Card currently open in the edit modal
    pub editing: Option<CardId>,
}

pub fn page_view<'a, S: Storage, I: IdSource>(showcase: &'a Showcase<S, I>, profile: &Profile) -> PageView<'a> {
    let current = showcase.current_section();
    PageView {
        header: sidebar_header(profile, showcase.sidebar()),
        nav: nav_entries(&showcase.document().sections, showcase.active_section_id(), showcase.sidebar()),
        section: current.map(section_header),
        layout: showcase.layout(),
        cards: current.map(card_views).unwrap_or_default(),
        editing: showcase.editor().session().map(|s| s.card.id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BuildInfo, ShowcaseConfig};
    use crate::ids::MonotonicIds;
    use crate::model::{default_document, default_profile};
    use crate::persistence::MemoryStorage;

    fn showcase() -> Showcase<MemoryStorage> {
        Showcase::open(
            Some(MemoryStorage::new()),
            BuildInfo::fixed("b", "1.0.4"),
            MonotonicIds::new(0),
            ShowcaseConfig::default(),
        )
    }

    #[test]
    fn test_badges_order_and_blank_fields() {
        let card = Card::new(1, "t", "d", "x")
            .with_kind("Career Growth")
            .with_timeline("12 months")
            .with_priority(Priority::High)
            .with_metrics("")
            .with_tags(&[]);
        assert_eq!(
            badges(&card),
            vec![
                Badge::Timeline("12 months".into()),
                Badge::Priority {
                    label: "High Priority".into(),
                    high: true
                },
                Badge::Kind("Career Growth".into()),
            ]
        );
    }

    #[test]
    fn test_hero_card_in_three_card_section() {
        let doc = default_document();
        let views = card_views(&doc.sections[0]);
        assert!(views[0].hero);
        assert!(!views[1].hero);
        assert!(!views[0].tall);

        let views = card_views(&doc.sections[3]);
        assert!(views.iter().all(|v| !v.hero && v.tall));
    }

    #[test]
    fn test_nav_labels_follow_sidebar() {
        let doc = default_document();
        let mut sidebar = SidebarController::default();
        sidebar.observe_viewport(1440.0, None);

        let nav = nav_entries(&doc.sections, Some(1), &sidebar);
        assert_eq!(nav[1].label, "试用期项目亮点");
        assert_eq!(nav[1].count, Some(3));
        assert!(nav[1].active && !nav[0].active);

        sidebar.toggle();
        let nav = nav_entries(&doc.sections, Some(1), &sidebar);
        assert_eq!(nav[1].label, "试用");
        assert_eq!(nav[0].label, "In");
        assert_eq!(nav[1].count, None);

        // Hidden on a narrow viewport: full labels, still no counts
        sidebar.observe_viewport(500.0, None);
        let nav = nav_entries(&doc.sections, Some(1), &sidebar);
        assert_eq!(nav[3].label, "Future Plans");
        assert_eq!(nav[3].count, None);
    }

    #[test]
    fn test_sidebar_header() {
        let profile = default_profile();
        let mut sidebar = SidebarController::default();
        let header = sidebar_header(&profile, &sidebar);
        assert_eq!(header.heading, "试用期汇报");
        assert!(header.subtitle.is_some() && header.show_stats);

        sidebar.toggle();
        let header = sidebar_header(&profile, &sidebar);
        assert_eq!(header.heading, "试");
        assert_eq!(header.subtitle, None);
        assert!(!header.show_stats);
    }

    #[test]
    fn test_page_view_tracks_editor() {
        let mut showcase = showcase();
        let profile = default_profile();
        let page = page_view(&showcase, &profile);
        assert_eq!(page.section.as_ref().unwrap().items_label, "3 items");
        assert_eq!(page.layout, CardLayout::ThreeUp);
        assert_eq!(page.editing, None);

        showcase.begin_edit(0, 2).unwrap();
        assert_eq!(page_view(&showcase, &profile).editing, Some(2));
    }
}
