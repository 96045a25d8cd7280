//! Language selector.

use std::sync::atomic::{AtomicUsize, Ordering};

use soukdom::{Edges, Element, Event, Role, Size};

use crate::locale::{LocaleConfig, LocaleContext, LocaleRegistry};
use crate::theme::Theme;

use super::events::EventResult;

const OPTION_PART: &str = "-option-";

fn next_selector_id() -> String {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    format!("languages-{}", COUNTER.fetch_add(1, Ordering::SeqCst))
}

/// Lists the registered locales and switches the active one.
#[derive(Debug, Clone)]
pub struct LanguageSelector {
    id: String,
    locale: LocaleContext,
    theme: Theme,
}

impl LanguageSelector {
    pub fn new(locale: LocaleContext) -> Self {
        Self {
            id: next_selector_id(),
            locale,
            theme: Theme::default(),
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn selector_id(&self) -> &str {
        &self.id
    }

    pub fn option_id(&self, code: &str) -> String {
        format!("{}{OPTION_PART}{code}", self.id)
    }

    /// Registered locales in display order, paired with whether each is
    /// the active one.
    pub fn options(&self) -> Vec<(&'static LocaleConfig, bool)> {
        let active = self.locale.code();
        LocaleRegistry::get()
            .list()
            .iter()
            .map(|config| (config, config.code == active))
            .collect()
    }

    /// Switch to `code`. Resolves once the switch is published or dropped;
    /// returns whether this call published.
    pub async fn select(&self, code: &str) -> bool {
        self.locale.change_language(code).await
    }

    /// Switch to the locale after the active one, wrapping around.
    pub async fn cycle(&self) -> bool {
        let next = LocaleRegistry::get().next_after(&self.locale.code()).code;
        self.select(next).await
    }

    pub fn owns(&self, target: &str) -> bool {
        self.code_for(target).is_some()
    }

    fn code_for(&self, target: &str) -> Option<&'static str> {
        let code = target.strip_prefix(self.id.as_str())?.strip_prefix(OPTION_PART)?;
        LocaleRegistry::get().get_by_code(code).map(|config| config.code)
    }

    /// Select the targeted option on left click, Enter or Space.
    pub async fn handle_event(&self, event: &Event) -> EventResult {
        let Some(code) = event.target().and_then(|target| self.code_for(target)) else {
            return EventResult::Ignored;
        };
        if !event.is_activation() {
            return EventResult::Ignored;
        }
        self.select(code).await;
        EventResult::Consumed
    }

    /// A `Listbox` with one `Option` per registered locale.
    pub fn element(&self) -> Element {
        let title = self.locale.t("selector.title");
        let options = self.options().into_iter().map(|(config, active)| {
            let style = if active {
                &self.theme.option_active
            } else {
                &self.theme.option
            };
            let marker = if active { "●" } else { " " };
            Element::text(format!("{marker} {} {}", config.flag, config.native_name))
                .id(self.option_id(config.code))
                .role(Role::Option)
                .label(config.name)
                .lang(config.code)
                .dir(config.direction)
                .width(Size::Fill)
                .height(Size::Fixed(1))
                .focusable(true)
                .clickable(true)
                .style(style.clone())
                .style_focused(self.theme.option_focused.clone())
                .data("selected", active.to_string())
        });

        Element::col()
            .id(&self.id)
            .role(Role::Listbox)
            .label(title.clone())
            .dir(self.locale.direction())
            .width(Size::Fixed(24))
            .height(Size::Auto)
            .padding(Edges::horizontal(1))
            .style(self.theme.panel.clone())
            .child(
                Element::text(title)
                    .role(Role::Heading)
                    .height(Size::Fixed(1))
                    .style(self.theme.title.clone()),
            )
            .children(options)
    }
}
