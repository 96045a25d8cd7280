//! Owner of the asset rows: turns sort and filter intents into the rows
//! the table shows.

use std::cmp::Ordering;
use std::sync::{Arc, Mutex};

use log::debug;
use souk::widgets::{FilterState, SortDirection, SortState, TableRow};
use souk::State;

use crate::catalog::{Asset, RiskLevel};

#[derive(Debug, Default)]
struct Query {
    sort: SortState,
    filters: FilterState,
}

/// Holds every asset and publishes the filtered, sorted view into a row
/// state shared with the table.
#[derive(Debug, Clone)]
pub struct AssetStore {
    all: Arc<Vec<Asset>>,
    query: Arc<Mutex<Query>>,
    rows: State<Vec<Asset>>,
}

impl AssetStore {
    pub fn new(assets: Vec<Asset>) -> Self {
        let rows = State::new(assets.clone());
        Self {
            all: Arc::new(assets),
            query: Arc::new(Mutex::new(Query::default())),
            rows,
        }
    }

    /// Row state to hand to the table.
    pub fn rows(&self) -> State<Vec<Asset>> {
        self.rows.clone()
    }

    pub fn total(&self) -> usize {
        self.all.len()
    }

    pub fn visible_count(&self) -> usize {
        self.rows.with(Vec::len)
    }

    pub fn sort_by(&self, key: &str, direction: SortDirection) {
        self.with_query(|q| q.sort = SortState::new(key, direction));
    }

    pub fn filter(&self, key: &str, text: &str) {
        self.with_query(|q| q.filters.set(key, text));
    }

    /// Drop sort and filters and show every asset in catalog order.
    pub fn reset(&self) {
        self.with_query(|q| *q = Query::default());
    }

    fn with_query(&self, f: impl FnOnce(&mut Query)) {
        let visible = {
            let mut query = self.query.lock().unwrap_or_else(|p| p.into_inner());
            f(&mut query);
            apply(&self.all, &query)
        };
        debug!("Showing {} of {} assets", visible.len(), self.all.len());
        self.rows.set(visible);
    }
}

fn apply(all: &[Asset], query: &Query) -> Vec<Asset> {
    let needles: Vec<(&str, String)> = query
        .filters
        .active()
        .map(|(key, text)| (key, text.to_lowercase()))
        .collect();

    let mut visible: Vec<Asset> = all
        .iter()
        .filter(|asset| {
            needles.iter().all(|(key, needle)| {
                asset
                    .field(key)
                    .is_some_and(|value| value.to_lowercase().contains(needle.as_str()))
            })
        })
        .cloned()
        .collect();

    if let Some(key) = &query.sort.column_key {
        // Stable, so equal keys keep catalog order
        visible.sort_by(|a, b| {
            let ordering = compare(a, b, key);
            match query.sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }
    visible
}

/// Compare two assets on `key`. Missing values order after present ones.
fn compare(a: &Asset, b: &Asset, key: &str) -> Ordering {
    match key {
        "id" => a.id.cmp(&b.id),
        "price" => option_last(a.price_value(), b.price_value(), |x, y| x.total_cmp(y)),
        "risk" => option_last(a.risk(), b.risk(), RiskLevel::cmp),
        _ => option_last(a.field(key), b.field(key), |x, y| {
            x.to_lowercase().cmp(&y.to_lowercase())
        }),
    }
}

fn option_last<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
