//! Reactive state, locale handling and direction-aware widgets on top of
//! the `soukdom` element tree.

pub mod app;
pub mod context;
pub mod locale;
pub mod runtime;
pub mod state;
pub mod theme;
pub mod wakeup;
pub mod widgets;

pub use app::App;
pub use context::AppContext;
pub use locale::{Document, Locale, LocaleContext, LocaleError, LocaleRegistry};
pub use runtime::{Runtime, RuntimeError};
pub use state::{State, Subscription};
pub use theme::Theme;
pub use widgets::{DataTable, EventResult, LanguageSelector};

pub mod prelude {
    pub use crate::app::App;
    pub use crate::context::AppContext;
    pub use crate::locale::{
        Catalog, Document, Locale, LocaleContext, LocaleRegistry, TextDirection,
        TranslationSource,
    };
    pub use crate::runtime::Runtime;
    pub use crate::state::{State, Subscription};
    pub use crate::theme::Theme;
    pub use crate::widgets::{
        Column, DataTable, EventResult, FilterState, LanguageSelector, SortDirection, SortState,
        TableRow,
    };
    pub use soukdom::{Element, Event, Key, Modifiers, Role};
}
