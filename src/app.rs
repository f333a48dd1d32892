//! Showcase application state
//!
//! One explicitly owned object holds the document, the editor, the sidebar
//! and the storage handle. Every document mutation goes through one of the
//! entry points below and is re-persisted before it returns.

use thiserror::Error;

use crate::config::{BuildInfo, ShowcaseConfig};
use crate::editor::{CardDraft, DraftField, EditorState};
use crate::ids::{IdSource, MonotonicIds};
use crate::layout::CardLayout;
use crate::model::{Card, CardId, Document, Section, SectionId, default_document};
use crate::persistence::{AppStore, Storage};
use crate::sidebar::SidebarController;

/// An entry point was called in the wrong state or with a dangling id
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShowcaseError {
    #[error("a card is being edited")]
    NotIdle,
    #[error("no card is being edited")]
    NotEditing,
    #[error("unknown section {0}")]
    UnknownSection(SectionId),
    #[error("card {card} not found in section {section}")]
    UnknownCard { section: SectionId, card: CardId },
}

pub type ShowcaseResult<T> = Result<T, ShowcaseError>;

pub struct Showcase<S, I = MonotonicIds> {
    store: AppStore<S>,
    build: BuildInfo,
    ids: I,
    document: Document,
    active_section: SectionId,
    editor: EditorState,
    sidebar: SidebarController,
}

impl<S: Storage, I: IdSource> Showcase<S, I> {
    /// Gate the stored data, then load it or fall back to the bundled default
    pub fn open(backend: Option<S>, build: BuildInfo, mut ids: I, config: ShowcaseConfig) -> Self {
        let mut store = AppStore::new(backend, config.keys);
        let document = store.load_document(&build).unwrap_or_else(|| {
            log::info!("Using default sections");
            default_document()
        });
        ids.reserve_above(document.max_card_id());
        let sidebar = SidebarController::new(store.load_sidebar(), config.narrow_breakpoint);
        let active_section = document.first_section().map_or(0, |s| s.id);

        let mut showcase = Self {
            store,
            build,
            ids,
            document,
            active_section,
            editor: EditorState::Idle,
            sidebar,
        };
        showcase.persist();
        showcase
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn editor(&self) -> &EditorState {
        &self.editor
    }

    pub fn sidebar(&self) -> &SidebarController {
        &self.sidebar
    }

    pub fn build(&self) -> &BuildInfo {
        &self.build
    }

    pub fn store(&self) -> &AppStore<S> {
        &self.store
    }

    /// Hand back the storage backend (ends the session)
    pub fn into_storage(self) -> Option<S> {
        self.store.into_backend()
    }

    /// Section shown in the main view; falls back to the first section when
    /// the active id no longer resolves
    pub fn current_section(&self) -> Option<&Section> {
        self.document
            .section(self.active_section)
            .or_else(|| self.document.first_section())
    }

    pub fn active_section_id(&self) -> Option<SectionId> {
        self.current_section().map(|s| s.id)
    }

    pub fn layout(&self) -> CardLayout {
        CardLayout::for_count(self.current_section().map_or(0, Section::len))
    }

    fn ensure_idle(&self) -> ShowcaseResult<()> {
        if self.editor.is_idle() {
            Ok(())
        } else {
            Err(ShowcaseError::NotIdle)
        }
    }

    fn persist(&mut self) {
        self.store.save_document(&self.document);
    }

    /// Switch the main view to another section. Stored content is untouched.
    pub fn select_section(&mut self, section_id: SectionId) -> ShowcaseResult<()> {
        self.ensure_idle()?;
        if self.document.section(section_id).is_none() {
            return Err(ShowcaseError::UnknownSection(section_id));
        }
        self.active_section = section_id;
        Ok(())
    }

    /// Append a placeholder card to `section_id`
    pub fn add_card(&mut self, section_id: SectionId) -> ShowcaseResult<CardId> {
        self.ensure_idle()?;
        let id = self.ids.next_id();
        let section = self
            .document
            .section_mut(section_id)
            .ok_or(ShowcaseError::UnknownSection(section_id))?;
        section.cards.push(Card::placeholder(id));
        log::info!("Added card {} to section {}", id, section_id);
        self.persist();
        Ok(id)
    }

    /// Open the edit modal on a card
    pub fn begin_edit(&mut self, section_id: SectionId, card_id: CardId) -> ShowcaseResult<()> {
        self.ensure_idle()?;
        let card = self
            .document
            .find_card(section_id, card_id)
            .ok_or(ShowcaseError::UnknownCard {
                section: section_id,
                card: card_id,
            })?;
        self.editor = EditorState::open(section_id, card);
        Ok(())
    }

    pub fn draft(&self) -> Option<&CardDraft> {
        self.editor.session().map(|s| &s.draft)
    }

    pub fn draft_mut(&mut self) -> Option<&mut CardDraft> {
        self.editor.session_mut().map(|s| &mut s.draft)
    }

    /// Apply form input to the open draft
    pub fn update_draft(&mut self, field: DraftField, value: &str) -> ShowcaseResult<()> {
        let draft = self.draft_mut().ok_or(ShowcaseError::NotEditing)?;
        draft.set_text(field, value);
        Ok(())
    }

    /// Close the modal without touching the document. Returns whether a
    /// card was open.
    pub fn cancel_edit(&mut self) -> bool {
        self.editor.close().is_some()
    }

    /// Commit the draft over the edited card, keeping its id
    pub fn save_edit(&mut self) -> ShowcaseResult<Card> {
        let session = self.editor.close().ok_or(ShowcaseError::NotEditing)?;
        let missing = ShowcaseError::UnknownCard {
            section: session.section_id,
            card: session.card.id,
        };
        let section = self
            .document
            .section_mut(session.section_id)
            .ok_or(ShowcaseError::UnknownSection(session.section_id))?;
        let slot = section
            .cards
            .iter_mut()
            .find(|c| c.id == session.card.id)
            .ok_or(missing)?;

        let saved = session.draft.apply_to(slot);
        *slot = saved.clone();
        log::info!("Saved card {} in section {}", saved.id, session.section_id);
        self.persist();
        Ok(saved)
    }

    /// Remove the edited card from its section
    pub fn delete_edit(&mut self) -> ShowcaseResult<Card> {
        let session = self.editor.close().ok_or(ShowcaseError::NotEditing)?;
        let section = self
            .document
            .section_mut(session.section_id)
            .ok_or(ShowcaseError::UnknownSection(session.section_id))?;
        let index = section.position(session.card.id).ok_or(ShowcaseError::UnknownCard {
            section: session.section_id,
            card: session.card.id,
        })?;

        let removed = section.cards.remove(index);
        log::info!("Deleted card {} from section {}", removed.id, session.section_id);
        self.persist();
        Ok(removed)
    }

    /// Drop `source` onto `target` within the current section. Returns false
    /// when the card was dropped on itself.
    pub fn reorder_card(&mut self, source: CardId, target: CardId) -> ShowcaseResult<bool> {
        self.ensure_idle()?;
        if source == target {
            return Ok(false);
        }
        let section_id = self
            .active_section_id()
            .ok_or(ShowcaseError::UnknownSection(self.active_section))?;
        let section = self
            .document
            .section_mut(section_id)
            .ok_or(ShowcaseError::UnknownSection(section_id))?;

        let missing = |card| ShowcaseError::UnknownCard {
            section: section_id,
            card,
        };
        let from = section.position(source).ok_or_else(|| missing(source))?;
        let to = section.position(target).ok_or_else(|| missing(target))?;

        let moved = section.move_card(from, to);
        if moved {
            log::debug!("Moved card {} from {} to {} in section {}", source, from, to, section_id);
            self.persist();
        }
        Ok(moved)
    }

    /// Wipe everything and start over from the bundled default. Does nothing
    /// unless the user confirmed.
    pub fn reset_all(&mut self, confirmed: bool) -> ShowcaseResult<bool> {
        self.ensure_idle()?;
        if !confirmed {
            log::info!("Reset cancelled");
            return Ok(false);
        }

        self.store.clear_all();
        self.store.run_gate(&self.build);
        self.document = default_document();
        self.ids.reserve_above(self.document.max_card_id());
        self.active_section = self.document.first_section().map_or(0, |s| s.id);
        self.sidebar.reset();
        if !self.sidebar.is_narrow() {
            self.store.save_sidebar(self.sidebar.is_collapsed());
        }
        self.persist();
        log::info!("All data reset to defaults");
        Ok(true)
    }

    /// Feed a viewport width (startup and every resize)
    pub fn observe_viewport(&mut self, width: f64) {
        let stored = self.store.load_sidebar();
        if let Some(collapsed) = self.sidebar.observe_viewport(width, stored) {
            self.store.save_sidebar(collapsed);
        }
    }

    /// Collapse/expand button
    pub fn toggle_sidebar(&mut self) {
        if let Some(collapsed) = self.sidebar.toggle() {
            self.store.save_sidebar(collapsed);
        }
    }
}
