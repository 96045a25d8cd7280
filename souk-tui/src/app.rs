//! The asset browser: title bar, asset table, language list and key hints.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use log::{info, warn};
use souk::prelude::*;
use soukdom::{Edges, Justify, Size};
use tokio::sync::Mutex;

use crate::catalog::Asset;
use crate::config::Settings;
use crate::store::AssetStore;

const TABLE_ID: &str = "assets";
const SELECTOR_ID: &str = "languages";

/// Asset table columns. Headers are catalog keys so they follow the locale.
pub fn asset_columns(locale: &LocaleContext, theme: &Theme) -> Vec<Column<Asset>> {
    let risk_locale = locale.clone();
    let risk_style = theme.hint.clone();
    vec![
        Column::new("id", "column.id").sortable().fixed(6),
        Column::new("title", "column.title").sortable().filterable().flex(3),
        Column::new("type", "column.type").sortable().filterable().flex(2),
        Column::new("price", "column.price").sortable().fixed(14),
        Column::new("status", "column.status").sortable().filterable().fixed(12),
        Column::new("location", "column.location").sortable().filterable().flex(2),
        Column::new("risk", "column.risk")
            .sortable()
            .fixed(10)
            .render(move |asset: &Asset| match asset.risk() {
                Some(level) => Element::text(risk_locale.t(level.label_key())),
                None => Element::text("-").style(risk_style.clone()),
            }),
    ]
}

pub struct MarketApp {
    locale: LocaleContext,
    table: DataTable<Asset>,
    selector: LanguageSelector,
    store: AssetStore,
    theme: Theme,
    selector_open: AtomicBool,
    settings: Mutex<Settings>,
    settings_path: Option<PathBuf>,
}

impl MarketApp {
    pub fn new(
        locale: LocaleContext,
        store: AssetStore,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let theme = Theme::default();
        let sort_store = store.clone();
        let filter_store = store.clone();
        let table = DataTable::new(asset_columns(&locale, &theme), locale.clone())
            .id(TABLE_ID)
            .rows_state(store.rows())
            .theme(theme.clone())
            .on_sort(move |key, direction| sort_store.sort_by(key, direction))
            .on_filter(move |key, text| filter_store.filter(key, text));
        let selector = LanguageSelector::new(locale.clone())
            .id(SELECTOR_ID)
            .theme(theme.clone());

        Self {
            locale,
            table,
            selector,
            store,
            theme,
            selector_open: AtomicBool::new(false),
            settings: Mutex::new(settings),
            settings_path,
        }
    }

    fn is_selector_open(&self) -> bool {
        self.selector_open.load(Ordering::SeqCst)
    }

    fn toggle_selector(&self, cx: &AppContext) {
        let open = !self.selector_open.fetch_xor(true, Ordering::SeqCst);
        if open {
            cx.focus(self.selector.option_id(&self.locale.code()));
        } else {
            cx.request_render();
        }
    }

    fn reset_view(&self) {
        self.table.reset_sort();
        self.table.reset_filters();
        self.store.reset();
    }

    /// Save the active language if it differs from the stored one.
    async fn persist_language(&self) {
        let code = self.locale.code();
        let mut settings = self.settings.lock().await;
        if settings.language == code {
            return;
        }
        settings.language = code;
        let Some(path) = &self.settings_path else {
            return;
        };
        match settings.save(path).await {
            Ok(()) => info!("Saved language {} to {}", settings.language, path.display()),
            Err(e) => warn!("Failed to save settings: {e}"),
        }
    }

    fn title_bar(&self) -> Element {
        let status = format!(
            "{} {}/{}",
            self.locale.t("app.showing"),
            self.store.visible_count(),
            self.store.total()
        );
        Element::row()
            .id("title-bar")
            .width(Size::Fill)
            .height(Size::Fixed(1))
            .padding(Edges::horizontal(1))
            .justify(Justify::SpaceBetween)
            .child(
                Element::text(self.locale.t("app.title"))
                    .role(Role::Heading)
                    .style(self.theme.title.clone()),
            )
            .child(
                Element::text(status)
                    .role(Role::Status)
                    .style(self.theme.hint.clone()),
            )
    }
}

#[async_trait]
impl App for MarketApp {
    fn name(&self) -> &str {
        "souk"
    }

    fn element(&self, _cx: &AppContext) -> Element {
        let mut main = Element::row()
            .id("main")
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1)
            .child(self.table.element());
        if self.is_selector_open() {
            main = main.child(self.selector.element());
        }

        Element::col()
            .id("root")
            .width(Size::Fill)
            .height(Size::Fill)
            .style(self.theme.surface.clone())
            .child(self.title_bar())
            .child(main)
            .child(
                Element::text(self.locale.t("app.hint"))
                    .width(Size::Fill)
                    .height(Size::Fixed(1))
                    .padding(Edges::horizontal(1))
                    .style(self.theme.hint.clone()),
            )
    }

    async fn on_event(&self, event: &Event, cx: &AppContext) -> EventResult {
        if let Event::Key { key, modifiers, .. } = event {
            match key {
                Key::Char('q') | Key::Char('c') if modifiers.ctrl => {
                    cx.exit();
                    return EventResult::Consumed;
                }
                Key::Char('r') if modifiers.ctrl => {
                    self.reset_view();
                    return EventResult::Consumed;
                }
                Key::Char('l') if modifiers.ctrl => {
                    self.selector.cycle().await;
                    self.persist_language().await;
                    return EventResult::Consumed;
                }
                Key::F(2) => {
                    self.toggle_selector(cx);
                    return EventResult::Consumed;
                }
                _ => {}
            }
        }

        if self.is_selector_open() && self.selector.handle_event(event).await.is_handled() {
            self.persist_language().await;
            self.toggle_selector(cx);
            return EventResult::Consumed;
        }

        self.table.handle_event(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_assets;
    use soukdom::element::{count_role, find_by_role, text_content};
    use soukdom::{Modifiers, MouseButton, TextDirection};

    fn app() -> (MarketApp, AppContext) {
        let locale = LocaleContext::new();
        let app = MarketApp::new(
            locale.clone(),
            AssetStore::new(sample_assets()),
            Settings::default(),
            None,
        );
        (app, AppContext::new(locale))
    }

    fn key(target: Option<String>, key: Key, modifiers: Modifiers) -> Event {
        Event::Key {
            target,
            key,
            modifiers,
        }
    }

    #[test]
    fn first_render_shows_every_asset() {
        let (app, cx) = app();
        let root = app.element(&cx);
        assert_eq!(count_role(&root, Role::ColumnHeader), 7);
        assert_eq!(count_role(&root, Role::Cell), 70);
        assert_eq!(count_role(&root, Role::Listbox), 0);
    }

    #[tokio::test]
    async fn header_click_sorts_through_the_store() {
        let (app, cx) = app();
        let click = Event::Click {
            target: Some(format!("{TABLE_ID}-header-price")),
            x: 0,
            y: 0,
            button: MouseButton::Left,
        };

        assert_eq!(app.on_event(&click, &cx).await, EventResult::Consumed);
        assert_eq!(app.store.rows().get()[0].id, 3);

        app.on_event(&click, &cx).await;
        assert_eq!(app.store.rows().get()[0].id, 4);
    }

    #[tokio::test]
    async fn typing_in_filter_narrows_rows() {
        let (app, cx) = app();
        let target = Some(format!("{TABLE_ID}-filter-location"));
        for c in "cai".chars() {
            app.on_event(&key(target.clone(), Key::Char(c), Modifiers::NONE), &cx)
                .await;
        }

        let root = app.element(&cx);
        assert_eq!(count_role(&root, Role::Cell), 7);
        assert_eq!(app.table.filter_text("location"), "cai");
    }

    #[tokio::test]
    async fn f2_opens_selector_and_choice_mirrors_table() {
        let (app, cx) = app();
        app.on_event(&key(None, Key::F(2), Modifiers::NONE), &cx).await;
        assert_eq!(count_role(&app.element(&cx), Role::Listbox), 1);

        let choose = key(Some(format!("{SELECTOR_ID}-option-ar")), Key::Enter, Modifiers::NONE);
        app.on_event(&choose, &cx).await;

        let root = app.element(&cx);
        assert_eq!(count_role(&root, Role::Listbox), 0);
        let table = &find_by_role(&root, Role::Table)[0];
        assert_eq!(table.dir, Some(TextDirection::Rtl));
        assert_eq!(app.settings.lock().await.language, "ar");
        let headers: Vec<_> = find_by_role(&root, Role::ColumnHeader)
            .iter()
            .map(|h| h.label.clone().unwrap_or_default())
            .collect();
        assert_eq!(headers[3], "السعر");
    }

    #[tokio::test]
    async fn reset_clears_sort_filters_and_rows() {
        let (app, cx) = app();
        app.table.activate_header("title");
        app.table.change_filter("type", "web");
        assert_eq!(app.store.visible_count(), 2);

        app.on_event(&key(None, Key::Char('r'), Modifiers::CTRL), &cx)
            .await;

        assert_eq!(app.store.visible_count(), 10);
        assert!(!app.table.sort().is_sorted());
        assert!(app.table.filters().is_empty());
    }

    #[tokio::test]
    async fn risk_column_is_translated() {
        let (app, cx) = app();
        cx.locale().change_language("fr").await;
        let root = app.element(&cx);
        let first_risk = find_by_role(&root, Role::Cell)[6];
        assert_eq!(text_content(first_risk), "Faible");
    }

    #[tokio::test]
    async fn ctrl_q_requests_exit() {
        let (app, cx) = app();
        app.on_event(&key(None, Key::Char('q'), Modifiers::CTRL), &cx)
            .await;
        assert!(cx.is_exit_requested());
    }
}
