//! Trial Showcase entry point
//!
//! Handles platform-specific initialization. The browser build renders into
//! `#app` and routes DOM events into the showcase; the native build runs a
//! headless walkthrough against in-memory storage.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::fmt::Write as _;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{DragEvent, Element, Event, KeyboardEvent, MouseEvent};

    use trial_showcase::Showcase;
    use trial_showcase::config::{BuildInfo, ShowcaseConfig};
    use trial_showcase::editor::{CardDraft, DraftField};
    use trial_showcase::ids::MonotonicIds;
    use trial_showcase::layout::CardLayout;
    use trial_showcase::model::{CardId, Priority, Profile, SectionId, default_profile};
    use trial_showcase::platform::{self, PlatformStorage};
    use trial_showcase::view::{self, Badge, CardView, PageView};

    /// Browser session state
    struct App {
        showcase: Showcase<PlatformStorage>,
        profile: Profile,
        /// Card being dragged; purely visual until it is dropped
        dragging: Option<CardId>,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Trial Showcase starting...");

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(root) = window.document().and_then(|d| d.get_element_by_id("app")) else {
            log::error!("No #app element to render into");
            return;
        };

        let start = platform::now_ms();
        let showcase = Showcase::open(
            platform::open_storage(),
            BuildInfo::current(start),
            MonotonicIds::from_timestamp(start),
            ShowcaseConfig::default(),
        );
        let build = showcase.build();
        log::info!("Build {} (data version {})", build.build_id, build.data_version);
        let app = Rc::new(RefCell::new(App {
            showcase,
            profile: default_profile(),
            dragging: None,
        }));

        app.borrow_mut().showcase.observe_viewport(viewport_width());
        render(&root, &app.borrow());

        setup_click_handler(&root, app.clone());
        setup_form_handlers(&root, app.clone());
        setup_drag_handlers(&root, app.clone());
        setup_resize_handler(&root, app.clone());
        setup_keyboard(&root, app);

        log::info!("Trial Showcase running!");
    }

    fn viewport_width() -> f64 {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|w| w.as_f64())
            .unwrap_or(1280.0)
    }

    fn confirm(message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }

    /// Nearest element (self included) carrying `attr`
    fn closest_with(event: &Event, attr: &str) -> Option<Element> {
        let target: Element = event.target()?.dyn_into().ok()?;
        target.closest(&format!("[{}]", attr)).ok()?
    }

    fn attr<T: std::str::FromStr>(el: &Element, name: &str) -> Option<T> {
        el.get_attribute(name)?.parse().ok()
    }

    fn control_value(el: &Element) -> Option<String> {
        if let Some(input) = el.dyn_ref::<web_sys::HtmlInputElement>() {
            return Some(input.value());
        }
        if let Some(area) = el.dyn_ref::<web_sys::HtmlTextAreaElement>() {
            return Some(area.value());
        }
        el.dyn_ref::<web_sys::HtmlSelectElement>().map(|s| s.value())
    }

    fn setup_click_handler(root: &Element, app: Rc<RefCell<App>>) {
        let root_clone = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(el) = closest_with(&event, "data-action") else {
                return;
            };
            let action = el.get_attribute("data-action").unwrap_or_default();
            let section: Option<SectionId> = attr(&el, "data-section");
            let card: Option<CardId> = attr(&el, "data-card");

            let mut app = app.borrow_mut();
            let showcase = &mut app.showcase;
            let result = match (action.as_str(), section, card) {
                ("select-section", Some(section), _) => showcase.select_section(section),
                ("add-card", Some(section), _) => showcase.add_card(section).map(|_| ()),
                ("edit-card", Some(section), Some(card)) => showcase.begin_edit(section, card),
                ("save-card", _, _) => showcase.save_edit().map(|_| ()),
                ("delete-card", _, _) => showcase.delete_edit().map(|_| ()),
                ("cancel-edit", _, _) => {
                    showcase.cancel_edit();
                    Ok(())
                }
                ("toggle-sidebar", _, _) => {
                    showcase.toggle_sidebar();
                    Ok(())
                }
                ("reset-all", _, _) => {
                    let confirmed = confirm("Reset all cards to the original content? Your edits will be lost.");
                    showcase.reset_all(confirmed).map(|_| ())
                }
                _ => {
                    log::debug!("Ignoring click on {:?}", action);
                    return;
                }
            };
            if let Err(e) = result {
                log::warn!("{} failed: {}", action, e);
            }
            render(&root_clone, &app);
        });
        let _ = root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_form_handlers(root: &Element, app: Rc<RefCell<App>>) {
        // Typing updates the draft only; re-rendering here would steal focus
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                let Some(el) = closest_with(&event, "data-field") else {
                    return;
                };
                let field = el.get_attribute("data-field").and_then(|f| DraftField::from_name(&f));
                if let (Some(field), Some(value)) = (field, control_value(&el)) {
                    if let Err(e) = app.borrow_mut().showcase.update_draft(field, &value) {
                        log::warn!("Draft update failed: {}", e);
                    }
                }
            });
            let _ = root.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Text inputs fire `change` on blur, often on the way to a Save click,
        // so only the priority select redraws (clearing it hides its editor)
        {
            let root_clone = root.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: Event| {
                let Some(el) = closest_with(&event, "data-field") else {
                    return;
                };
                let field = el.get_attribute("data-field").and_then(|f| DraftField::from_name(&f));
                let (Some(field), Some(value)) = (field, control_value(&el)) else {
                    return;
                };
                let mut app = app.borrow_mut();
                if let Err(e) = app.showcase.update_draft(field, &value) {
                    log::warn!("Draft update failed: {}", e);
                }
                if field == DraftField::Priority {
                    render(&root_clone, &app);
                }
            });
            let _ = root.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_drag_handlers(root: &Element, app: Rc<RefCell<App>>) {
        // Drag start - the source node must stay in the DOM, so mark it in
        // place instead of redrawing
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
                let Some(el) = closest_with(&event, "data-drag-card") else {
                    return;
                };
                let Some(card) = attr::<CardId>(&el, "data-drag-card") else {
                    return;
                };
                if let Some(transfer) = event.data_transfer() {
                    transfer.set_effect_allowed("move");
                    // Firefox won't start a drag without a payload
                    if transfer.set_data("text/plain", &card.to_string()).is_err() {
                        log::debug!("Could not attach drag payload for card {}", card);
                    }
                }
                if el.class_list().add_1("dragging").is_err() {
                    log::debug!("Could not mark card {} as dragging", card);
                }
                app.borrow_mut().dragging = Some(card);
            });
            let _ = root.add_event_listener_with_callback("dragstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag over - allow dropping on cards
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
                if closest_with(&event, "data-drag-card").is_some() {
                    event.prevent_default();
                }
            });
            let _ = root.add_event_listener_with_callback("dragover", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drop - a single reorder mutation
        {
            let app = app.clone();
            let root_clone = root.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: DragEvent| {
                event.prevent_default();
                let target: Option<CardId> =
                    closest_with(&event, "data-drag-card").and_then(|el| attr(&el, "data-drag-card"));
                let mut app = app.borrow_mut();
                if let (Some(source), Some(target)) = (app.dragging.take(), target) {
                    if let Err(e) = app.showcase.reorder_card(source, target) {
                        log::warn!("Reorder failed: {}", e);
                    }
                }
                render(&root_clone, &app);
            });
            let _ = root.add_event_listener_with_callback("drop", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Drag end (dropped outside any card)
        {
            let root_clone = root.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: DragEvent| {
                let mut app = app.borrow_mut();
                if app.dragging.take().is_some() {
                    render(&root_clone, &app);
                }
            });
            let _ = root.add_event_listener_with_callback("dragend", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(root: &Element, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let root_clone = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: Event| {
            let mut app = app.borrow_mut();
            let was = (app.showcase.sidebar().is_collapsed(), app.showcase.sidebar().is_narrow());
            app.showcase.observe_viewport(viewport_width());
            let now = (app.showcase.sidebar().is_collapsed(), app.showcase.sidebar().is_narrow());
            if was != now {
                render(&root_clone, &app);
            }
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(root: &Element, app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let root_clone = root.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if event.key() == "Escape" {
                let mut app = app.borrow_mut();
                if app.showcase.cancel_edit() {
                    render(&root_clone, &app);
                }
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn escape(text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '"' => out.push_str("&quot;"),
                '\'' => out.push_str("&#39;"),
                _ => out.push(c),
            }
        }
        out
    }

    fn render(root: &Element, app: &App) {
        let page = view::page_view(&app.showcase, &app.profile);
        let mut html = String::new();
        render_sidebar(&mut html, app, &page);
        render_main(&mut html, app, &page);
        if let (Some(card), Some(draft)) = (page.editing, app.showcase.draft()) {
            render_modal(&mut html, card, draft);
        }
        root.set_inner_html(&html);
    }

    fn render_sidebar(html: &mut String, app: &App, page: &PageView<'_>) {
        let sidebar = app.showcase.sidebar();
        let width = format!("{:?}", sidebar.width()).to_lowercase();
        let _ = write!(html, r#"<aside class="sidebar sidebar-{}">"#, width);
        if sidebar.toggle_visible() {
            let glyph = if sidebar.is_collapsed() { "›" } else { "‹" };
            let _ = write!(html, r#"<button class="sidebar-toggle" data-action="toggle-sidebar">{}</button>"#, glyph);
        }

        let _ = write!(html, "<header><h1>{}</h1>", escape(page.header.heading));
        if let Some(subtitle) = page.header.subtitle {
            let _ = write!(html, "<p>{}</p>", escape(subtitle));
        }
        html.push_str("</header>");

        if page.header.show_stats {
            html.push_str(r#"<div class="stats">"#);
            for stat in &app.profile.stats {
                let _ = write!(
                    html,
                    r#"<div class="stat"><span class="stat-icon">{}</span><strong>{}</strong><small>{}</small></div>"#,
                    stat.icon,
                    escape(stat.value),
                    escape(stat.label)
                );
            }
            html.push_str("</div>");
        }

        html.push_str("<nav>");
        for entry in &page.nav {
            let _ = write!(
                html,
                r#"<button class="nav-entry{}" data-action="select-section" data-section="{}"><span>{}</span>"#,
                if entry.active { " active" } else { "" },
                entry.id,
                escape(&entry.label)
            );
            if let Some(count) = entry.count {
                let _ = write!(html, r#"<span class="count">{}</span>"#, count);
            }
            html.push_str("</button>");
        }
        html.push_str("</nav>");

        if page.header.show_stats {
            html.push_str(r#"<button class="reset" data-action="reset-all">Reset all data</button>"#);
        }
        html.push_str("</aside>");
    }

    fn render_main(html: &mut String, app: &App, page: &PageView<'_>) {
        html.push_str(r#"<main class="content">"#);
        let Some(section) = &page.section else {
            html.push_str("</main>");
            return;
        };

        let _ = write!(
            html,
            r#"<div class="content-header"><div><h2>{}</h2><p>{}</p></div><button class="add-card" data-action="add-card" data-section="{}">+ Add Card</button></div>"#,
            escape(&section.title),
            escape(&section.items_label),
            section.id
        );

        if page.layout == CardLayout::Empty {
            let _ = write!(
                html,
                r#"<div class="empty"><div class="glyph">📝</div><h3>No cards yet</h3><p>Start by adding your first card</p><button data-action="add-card" data-section="{}">+ Create Card</button></div>"#,
                section.id
            );
        } else {
            let _ = write!(html, r#"<div class="contentGrid {}">"#, page.layout.css_class());
            for card in &page.cards {
                render_card(html, section.id, card, app.dragging);
            }
            html.push_str("</div>");
        }
        html.push_str("</main>");
    }

    fn render_card(html: &mut String, section_id: SectionId, view: &CardView<'_>, dragging: Option<CardId>) {
        let card = view.card;
        let mut classes = String::from("card");
        if view.hero {
            classes.push_str(" hero-card");
        }
        if view.tall {
            classes.push_str(" tall");
        }
        if dragging == Some(card.id) {
            classes.push_str(" dragging");
        }

        let _ = write!(
            html,
            r#"<div class="{}" draggable="true" data-drag-card="{}"><button class="edit" data-action="edit-card" data-section="{}" data-card="{}">✎</button><div class="image">{}</div><h3>{}</h3><p class="description">{}</p><div class="badges">"#,
            classes,
            card.id,
            section_id,
            card.id,
            escape(&card.image),
            escape(&card.title),
            escape(&card.description)
        );
        for badge in &view.badges {
            match badge {
                Badge::Metrics(text) => {
                    let _ = write!(html, r#"<div class="metrics">📈 {}</div>"#, escape(text));
                }
                Badge::Skills(items) | Badge::Tags(items) => {
                    let kind = if matches!(badge, Badge::Skills(_)) { "skill" } else { "tag" };
                    html.push_str(r#"<div class="chips">"#);
                    for item in items {
                        let _ = write!(html, r#"<span class="chip {}">{}</span>"#, kind, escape(item));
                    }
                    html.push_str("</div>");
                }
                Badge::Timeline(text) => {
                    let _ = write!(html, r#"<div class="timeline">📅 {}</div>"#, escape(text));
                }
                Badge::Priority { label, high } => {
                    let _ = write!(
                        html,
                        r#"<div class="priority"><span class="dot {}"></span>{}</div>"#,
                        if *high { "high" } else { "normal" },
                        escape(label)
                    );
                }
                Badge::Kind(text) => {
                    let _ = write!(html, r#"<div class="kind">{}</div>"#, escape(text));
                }
            }
        }
        html.push_str("</div></div>");
    }

    fn render_modal(html: &mut String, card: CardId, draft: &CardDraft) {
        let _ = write!(
            html,
            r#"<div class="modal-backdrop"><div class="modal" data-editing="{}"><div class="modal-header"><h3>Edit Card</h3><button data-action="cancel-edit">✕</button></div><div class="fields">"#,
            card
        );
        for field in DraftField::ALL {
            if !draft.shows(field) {
                continue;
            }
            let value = escape(&draft.text(field));
            let _ = write!(html, "<label>{}", field.label());
            match field {
                DraftField::Description => {
                    let _ = write!(html, r#"<textarea rows="4" data-field="{}">{}</textarea>"#, field.name(), value);
                }
                DraftField::Priority => {
                    let _ = write!(html, r#"<select data-field="{}"><option value="">Select priority</option>"#, field.name());
                    for priority in Priority::ALL {
                        let selected = if draft.priority == Some(priority) { " selected" } else { "" };
                        let _ = write!(
                            html,
                            r#"<option value="{0}"{1}>{0}</option>"#,
                            priority.as_str(),
                            selected
                        );
                    }
                    html.push_str("</select>");
                }
                _ => {
                    let _ = write!(html, r#"<input type="text" data-field="{}" value="{}">"#, field.name(), value);
                }
            }
            html.push_str("</label>");
        }
        html.push_str(
            r#"</div><div class="modal-actions"><button class="save" data-action="save-card">Save Changes</button><button class="delete" data-action="delete-card">Delete</button><button data-action="cancel-edit">Cancel</button></div></div></div>"#,
        );
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Trial Showcase (native) starting...");
    log::info!("The page itself runs in the browser - build with `trunk serve` for the web version");

    walkthrough();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Exercise the showcase against in-memory storage and log what happened
#[cfg(not(target_arch = "wasm32"))]
fn walkthrough() {
    use trial_showcase::Showcase;
    use trial_showcase::config::{BuildInfo, ShowcaseConfig};
    use trial_showcase::editor::DraftField;
    use trial_showcase::ids::MonotonicIds;
    use trial_showcase::persistence::MemoryStorage;
    use trial_showcase::platform;

    let start = platform::now_ms();
    let mut showcase = Showcase::open(
        Some(MemoryStorage::new()),
        BuildInfo::current(start),
        MonotonicIds::from_timestamp(start),
        ShowcaseConfig::default(),
    );
    log::info!("Walkthrough on build {}", showcase.build().build_id);
    showcase.observe_viewport(1280.0);

    let last = showcase.document().sections.last().map(|s| s.id);
    if let Some(section_id) = last {
        let steps = showcase.select_section(section_id).and_then(|()| {
            let id = showcase.add_card(section_id)?;
            showcase.begin_edit(section_id, id)?;
            showcase.update_draft(DraftField::Title, "Native walkthrough")?;
            showcase.save_edit()
        });
        match steps {
            Ok(card) => log::info!("Added and edited card {} ({})", card.id, card.title),
            Err(e) => log::warn!("Walkthrough step failed: {}", e),
        }
    }

    for section in &showcase.document().sections {
        println!("{:>2} {:<24} {} cards", section.id, section.title, section.len());
    }
    println!("Layout of active section: {:?}", showcase.layout());
}
