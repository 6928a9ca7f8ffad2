//! Archive grouping by year.

use std::collections::BTreeMap;

use crate::content::{Entry, Listed};

/// Group entries by the year of their sort date, keeping input order within
/// a year. Years iterate in ascending order; archives usually walk them in
/// reverse.
pub fn group_by_year<D: Listed + Clone>(entries: &[Entry<D>]) -> BTreeMap<i32, Vec<Entry<D>>> {
    let mut years: BTreeMap<i32, Vec<Entry<D>>> = BTreeMap::new();
    for entry in entries {
        years.entry(entry.year()).or_default().push(entry.clone());
    }
    years
}
