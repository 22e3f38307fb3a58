//! Incremental in-memory cross-filter index.
//!
//! A [`CrossFilter`] wraps a record collection and exposes named
//! [`Dimension`]s, each with an independent active [`Filter`]. Groups built
//! on a dimension sum a numeric field per key while honouring the filters of
//! every *other* dimension; a [`GroupAll`] sums over records passing every
//! filter. Filter changes are applied incrementally and broadcast to named
//! listeners, which is how dashboard widgets stay in sync.
//!
//! # Architecture
//!
//! - `Rc<RefCell<Index>>` for shared interior mutability in single-threaded
//!   WASM; every handle is a cheap clone of the same index
//! - Mutations are synchronous and non-reentrant; listeners run after the
//!   index borrow is released so they can read aggregates
//!
//! # Usage
//!
//! ```rust
//! use bex_filter::{CrossFilter, Key};
//!
//! let cf = CrossFilter::new(vec![("A", 100.0), ("B", 50.0)]);
//! let dept = cf.dimension("department", |r| Key::single(r.0)).unwrap();
//! let by_dept = dept.group_sum(|r| r.1);
//! let total = cf.group_all_sum(|r| r.1);
//!
//! dept.filter_exact("A");
//! assert_eq!(total.value(), 100.0);
//! assert_eq!(by_dept.all().len(), 2);
//! ```

mod dimension;
mod error;
mod event;
mod filter;
mod group;
mod index;
mod key;

pub use dimension::Dimension;
pub use error::FilterError;
pub use event::{FilterEvent, Listener};
pub use filter::Filter;
pub use group::{Group, GroupAll, KeyValue};
pub use key::Key;

use index::Index;
use std::cell::RefCell;
use std::rc::Rc;

/// Shared cross-filter index over a collection of records.
pub struct CrossFilter<R> {
    inner: Rc<RefCell<Index<R>>>,
}

impl<R> Clone for CrossFilter<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<R> CrossFilter<R> {
    pub fn new(records: Vec<R>) -> Self {
        log::info!("[BEX] crossfilter: indexing {} records", records.len());
        Self {
            inner: Rc::new(RefCell::new(Index::new(records))),
        }
    }

    /// Total number of records, ignoring filters.
    pub fn size(&self) -> usize {
        self.inner.borrow().records.len()
    }

    /// Number of records passing every active filter.
    pub fn filtered_count(&self) -> usize {
        self.inner.borrow().passing
    }

    /// True if any dimension has an active filter.
    pub fn is_filtered(&self) -> bool {
        self.inner
            .borrow()
            .dimensions
            .iter()
            .any(|d| !d.filter.is_all())
    }

    /// Register a new axis keyed by `key_fn`.
    pub fn dimension<F>(&self, name: &str, key_fn: F) -> Result<Dimension<R>, FilterError>
    where
        F: Fn(&R) -> Key,
    {
        let id = self.inner.borrow_mut().add_dimension(name, key_fn)?;
        Ok(Dimension {
            index: self.clone(),
            id,
        })
    }

    /// Create a global aggregate summing `value_fn` over filtered records.
    pub fn group_all_sum<F>(&self, value_fn: F) -> GroupAll<R>
    where
        F: Fn(&R) -> f64,
    {
        let id = self.inner.borrow_mut().add_aggregate(value_fn);
        GroupAll {
            index: self.clone(),
            id,
        }
    }

    /// Clear the filter of every dimension, notifying once per cleared dimension.
    pub fn filter_all(&self) {
        let filtered: Vec<usize> = self
            .inner
            .borrow()
            .dimensions
            .iter()
            .enumerate()
            .filter(|(_, d)| !d.filter.is_all())
            .map(|(id, _)| id)
            .collect();
        for id in filtered {
            Dimension {
                index: self.clone(),
                id,
            }
            .filter_all();
        }
    }

    /// Register `listener` under `name`, replacing any listener already
    /// registered with that name.
    pub fn on_filtered<F>(&self, name: &str, listener: F)
    where
        F: Fn(&FilterEvent) + 'static,
    {
        let listener: Listener = Rc::new(listener);
        let mut inner = self.inner.borrow_mut();
        match inner.listeners.iter_mut().find(|(n, _)| n == name) {
            Some(slot) => slot.1 = listener,
            None => inner.listeners.push((name.to_string(), listener)),
        }
    }

    /// Remove the listener registered under `name`. Returns true if one existed.
    pub fn remove_listener(&self, name: &str) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(n, _)| n != name);
        inner.listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }

    fn notify(&self, event: &FilterEvent) {
        let listeners: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in listeners {
            listener(event);
        }
    }
}

impl<R: Clone> CrossFilter<R> {
    /// Every record passing all active filters, in dataset order.
    pub fn all_filtered(&self) -> Vec<R> {
        let inner = self.inner.borrow();
        inner
            .records
            .iter()
            .enumerate()
            .filter(|(i, _)| inner.passes(*i))
            .map(|(_, r)| r.clone())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        department: &'static str,
        branch: &'static str,
        program: &'static str,
        year: &'static str,
        budget: f64,
    }

    fn row(
        department: &'static str,
        branch: &'static str,
        program: &'static str,
        year: &'static str,
        budget: f64,
    ) -> Row {
        Row {
            department,
            branch,
            program,
            year,
            budget,
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            row("A", "b1", "p1", "2017", 100.0),
            row("B", "b1", "p2", "2017", 50.0),
            row("A", "b2", "p1", "2018", 25.0),
            row("C", "b2", "p2", "2018", 10.0),
        ]
    }

    fn values(group: &Group<Row>) -> Vec<(String, f64)> {
        group
            .all()
            .into_iter()
            .map(|kv| (kv.key.to_string(), kv.value))
            .collect()
    }

    #[test]
    fn crossfilter_two_department_scenario() {
        let cf = CrossFilter::new(vec![row("A", "", "", "", 100.0), row("B", "", "", "", 50.0)]);
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let group = dept.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);

        assert_eq!(values(&group), vec![("A".to_string(), 100.0), ("B".to_string(), 50.0)]);
        assert_eq!(total.value(), 150.0);

        dept.filter_exact("A");
        assert_eq!(total.value(), 100.0);
        // own filter is ignored by the dimension's group
        assert_eq!(values(&group), vec![("A".to_string(), 100.0), ("B".to_string(), 50.0)]);
    }

    #[test]
    fn crossfilter_empty_dataset() {
        let cf: CrossFilter<Row> = CrossFilter::new(Vec::new());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let group = dept.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);
        dept.filter_exact("A");

        assert!(group.all().is_empty());
        assert!(group.top(5).is_empty());
        assert_eq!(total.value(), 0.0);
        assert_eq!(total.count(), 0);
        assert!(dept.top(10).is_empty());
    }

    #[test]
    fn crossfilter_filters_other_groups() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let by_year = year.group_sum(|r| r.budget);
        let by_dept = dept.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);

        dept.filter_exact("A");
        assert_eq!(values(&by_year), vec![("2017".to_string(), 100.0), ("2018".to_string(), 25.0)]);
        assert_eq!(total.value(), 125.0);
        assert_eq!(total.count(), 2);

        year.filter_exact("2018");
        assert_eq!(total.value(), 25.0);
        assert_eq!(
            values(&by_dept),
            vec![("A".to_string(), 25.0), ("B".to_string(), 0.0), ("C".to_string(), 10.0)]
        );
        assert_eq!(cf.filtered_count(), 1);
        assert!(cf.is_filtered());
    }

    #[test]
    fn crossfilter_filter_round_trip_restores_groups() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let by_year = year.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);
        let before = values(&by_year);

        dept.filter_in([Key::single("B"), Key::single("C")]);
        assert_ne!(values(&by_year), before);
        dept.filter_all();

        assert_eq!(values(&by_year), before);
        assert_eq!(total.value(), 185.0);
        assert!(!cf.is_filtered());
    }

    #[test]
    fn crossfilter_composite_keys_are_atomic() {
        let cf = CrossFilter::new(rows());
        let bran_prog = cf
            .dimension("branch_program", |r| Key::pair(r.branch, r.program))
            .unwrap();
        let group = bran_prog.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);

        assert_eq!(group.size(), 4);
        bran_prog.filter_exact(("b1", "p1"));
        assert_eq!(total.value(), 100.0);
        assert_eq!(group.get(&Key::pair("b1", "p2")), Some(50.0));
        assert_eq!(group.get(&Key::pair("b1", "p3")), None);
    }

    #[test]
    fn crossfilter_range_filter() {
        let cf = CrossFilter::new(rows());
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let total = cf.group_all_sum(|r| r.budget);
        year.filter_range("2017", "2018");
        assert_eq!(total.value(), 150.0);
    }

    #[test]
    fn crossfilter_toggle_builds_multi_selection() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let total = cf.group_all_sum(|r| r.budget);

        dept.toggle("A");
        dept.toggle("C");
        assert_eq!(total.value(), 135.0);
        dept.toggle("A");
        assert_eq!(total.value(), 10.0);
        dept.toggle("C");
        assert!(dept.current_filter().is_all());
        assert_eq!(total.value(), 185.0);
    }

    #[test]
    fn crossfilter_group_created_after_filter() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        dept.filter_exact("B");
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let by_year = year.group_sum(|r| r.budget);
        let total = cf.group_all_sum(|r| r.budget);

        assert_eq!(values(&by_year), vec![("2017".to_string(), 50.0), ("2018".to_string(), 0.0)]);
        assert_eq!(total.value(), 50.0);
    }

    #[test]
    fn crossfilter_top_and_bottom() {
        let cf = CrossFilter::new(rows());
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let by_dept = dept.group_sum(|r| r.budget);

        let top = year.top(2);
        assert_eq!(top.len(), 2);
        assert!(top.iter().all(|r| r.year == "2018"));
        assert_eq!(year.bottom(1)[0].year, "2017");

        dept.filter_exact("C");
        assert_eq!(year.top(usize::MAX), vec![row("C", "b2", "p2", "2018", 10.0)]);
        assert_eq!(cf.all_filtered().len(), 1);

        let ranked = by_dept.top(2);
        assert_eq!(ranked[0].key, Key::single("A"));
        assert_eq!(ranked[1].key, Key::single("B"));
    }

    #[test]
    fn crossfilter_listeners_fire_after_mutation() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let total = cf.group_all_sum(|r| r.budget);
        let seen = Rc::new(Cell::new(0.0));

        let seen_in_listener = Rc::clone(&seen);
        let total_in_listener = total.clone();
        cf.on_filtered("sum", move |_| seen_in_listener.set(total_in_listener.value()));

        dept.filter_exact("B");
        assert_eq!(seen.get(), 50.0);
    }

    #[test]
    fn crossfilter_fractional_sums_restore_exactly() {
        let budgets = [3471990.2603903, 0.1, 0.2, 7123456.789, 1.000001, 2518.33];
        let records: Vec<(&str, &str, f64)> = budgets
            .iter()
            .enumerate()
            .map(|(i, &b)| (["A", "B", "C"][i % 3], ["x", "y"][i % 2], b))
            .collect();
        let cf = CrossFilter::new(records);
        let dept = cf.dimension("department", |r| Key::single(r.0)).unwrap();
        let kind = cf.dimension("kind", |r| Key::single(r.1)).unwrap();
        let by_kind = kind.group_sum(|r| r.2);
        let total = cf.group_all_sum(|r| r.2);
        let before = by_kind.all();
        let total_before = total.value();

        for key in ["A", "B", "C", "B", "A"] {
            dept.filter_exact(key);
        }
        dept.toggle("C");
        dept.filter_all();

        assert_eq!(by_kind.all(), before);
        assert_eq!(total.value(), total_before);
        assert!((total_before - budgets.iter().sum::<f64>()).abs() < 1e-6);
    }

    #[test]
    fn crossfilter_listener_names_replace() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let calls = Rc::new(Cell::new(0));

        for _ in 0..3 {
            let calls = Rc::clone(&calls);
            cf.on_filtered("filtered.row", move |_| calls.set(calls.get() + 1));
        }
        assert_eq!(cf.listener_count(), 1);

        dept.filter_exact("A");
        assert_eq!(calls.get(), 1);
        // unchanged filter does not notify
        dept.filter_exact("A");
        assert_eq!(calls.get(), 1);

        assert!(cf.remove_listener("filtered.row"));
        assert!(!cf.remove_listener("filtered.row"));
        dept.filter_all();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn crossfilter_filter_all_clears_every_dimension() {
        let cf = CrossFilter::new(rows());
        let dept = cf.dimension("department", |r| Key::single(r.department)).unwrap();
        let year = cf.dimension("year", |r| Key::single(r.year)).unwrap();
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        cf.on_filtered("log", move |e| sink.borrow_mut().push(e.dimension.clone()));

        dept.filter_exact("A");
        year.filter_exact("2017");
        cf.filter_all();

        assert_eq!(cf.filtered_count(), 4);
        assert_eq!(
            *events.borrow(),
            vec!["department", "year", "department", "year"]
        );
    }

    #[test]
    fn crossfilter_dimension_limits() {
        let cf = CrossFilter::new(rows());
        assert!(cf.dimension("d", |r| Key::single(r.year)).is_ok());
        assert_eq!(
            cf.dimension("d", |r| Key::single(r.year)).err(),
            Some(FilterError::DuplicateDimension("d".into()))
        );
        for i in 1..32 {
            cf.dimension(&format!("d{}", i), |r| Key::single(r.year)).unwrap();
        }
        assert_eq!(
            cf.dimension("overflow", |r| Key::single(r.year)).err(),
            Some(FilterError::TooManyDimensions { max: 32 })
        );
    }
}
