//! Widget bindings over the shared cross-filter index.
//!
//! A [`Dashboard`] owns the single index built over the dataset, one
//! dimension and one budget-sum group per [`Axis`], the global budget total,
//! the color scales and the load-time bubble ranking. Every widget reads
//! from and filters through these shared handles, so a filter applied by one
//! widget is visible to all others as soon as the call returns.

use crate::axis::Axis;
use crate::bubble::{BubbleLayout, X_DOMAIN};
use crate::charts::{
    BarChartData, BubbleChartData, BubbleItem, ChartItem, RowChartData, SunburstData, SunburstNode,
};
use crate::color::{branch_program_scale, department_scale, OrdinalScale};
use crate::layout::{BAR_LAYOUT, BAR_OUTER_PADDING, BAR_PADDING, BUBBLE_LAYOUT, ROW_LAYOUT, SUNBURST_LAYOUT};
use crate::menu::{order_desc, SelectMenu};
use crate::readout::{sum_labels, sum_text, RecordCounter};
use crate::table::TablePage;
use crate::widget::{title, WidgetId};
use bex_core::{Dataset, ExpenditureRecord, Palette};
use bex_filter::{CrossFilter, Dimension, Filter, FilterEvent, Group, GroupAll, Key, KeyValue};
use std::collections::BTreeSet;

/// Subscriber name for the headline sum readout.
pub const SUM_READOUT_SUBSCRIBER: &str = "sum-readout";
/// Subscriber name for chart, menu and table redraws.
pub const REDRAW_SUBSCRIBER: &str = "redraw";

/// One axis's dimension and budget-sum group.
#[derive(Clone)]
pub struct AxisBinding {
    pub axis: Axis,
    pub dimension: Dimension<ExpenditureRecord>,
    pub group: Group<ExpenditureRecord>,
}

impl AxisBinding {
    fn bind(index: &CrossFilter<ExpenditureRecord>, axis: Axis) -> anyhow::Result<Self> {
        let dimension = index.dimension(axis.dimension_name(), move |r| axis.key_of(r))?;
        let group = dimension.group_sum(|r| r.budget);
        Ok(Self {
            axis,
            dimension,
            group,
        })
    }
}

#[derive(Clone)]
pub struct Dashboard {
    index: CrossFilter<ExpenditureRecord>,
    department: AxisBinding,
    budget_year: AxisBinding,
    fund_type: AxisBinding,
    branch_program: AxisBinding,
    total: GroupAll<ExpenditureRecord>,
    department_colors: OrdinalScale,
    branch_program_colors: OrdinalScale,
    bubble: BubbleLayout,
}

impl Dashboard {
    /// Index the dataset and derive every binding and color scale.
    pub fn build(dataset: Dataset, palette: &Palette) -> anyhow::Result<Self> {
        let department_colors = department_scale(&dataset);
        let branch_program_colors = branch_program_scale(&dataset, palette);

        let index = CrossFilter::new(dataset.into_records());
        let department = AxisBinding::bind(&index, Axis::Department)?;
        let budget_year = AxisBinding::bind(&index, Axis::BudgetYear)?;
        let fund_type = AxisBinding::bind(&index, Axis::FundType)?;
        let branch_program = AxisBinding::bind(&index, Axis::BranchProgram)?;
        let total = index.group_all_sum(|r| r.budget);
        let bubble = BubbleLayout::from_entries(&fund_type.group.all());

        log::info!(
            "[BEX] dashboard: {} records, {} departments, {} years, {} fund types, {} branch/programs",
            index.size(),
            department.group.size(),
            budget_year.group.size(),
            fund_type.group.size(),
            branch_program.group.size()
        );

        Ok(Self {
            index,
            department,
            budget_year,
            fund_type,
            branch_program,
            total,
            department_colors,
            branch_program_colors,
            bubble,
        })
    }

    pub fn index(&self) -> &CrossFilter<ExpenditureRecord> {
        &self.index
    }

    pub fn binding(&self, axis: Axis) -> &AxisBinding {
        match axis {
            Axis::Department => &self.department,
            Axis::BudgetYear => &self.budget_year,
            Axis::FundType => &self.fund_type,
            Axis::BranchProgram => &self.branch_program,
        }
    }

    pub fn department_colors(&self) -> &OrdinalScale {
        &self.department_colors
    }

    pub fn branch_program_colors(&self) -> &OrdinalScale {
        &self.branch_program_colors
    }

    pub fn bubble_layout(&self) -> &BubbleLayout {
        &self.bubble
    }

    // ───────────────────── Filtering ─────────────────────

    /// Register a filter-event subscriber. Re-using a name replaces the
    /// earlier subscriber.
    pub fn subscribe<F>(&self, name: &str, listener: F)
    where
        F: Fn(&FilterEvent) + 'static,
    {
        self.index.on_filtered(name, listener);
    }

    /// Register the sum readout and redraw subscribers under their fixed
    /// names. Calling this again on re-render replaces both rather than
    /// stacking duplicates.
    pub fn subscribe_readouts<S, R>(&self, on_sum: S, on_redraw: R)
    where
        S: Fn(String) + 'static,
        R: Fn(&FilterEvent) + 'static,
    {
        let total = self.total.clone();
        self.subscribe(SUM_READOUT_SUBSCRIBER, move |_| on_sum(sum_text(total.value())));
        self.subscribe(REDRAW_SUBSCRIBER, on_redraw);
    }

    pub fn filter(&self, axis: Axis) -> Filter {
        self.binding(axis).dimension.current_filter()
    }

    pub fn set_filter(&self, axis: Axis, filter: Filter) {
        self.binding(axis).dimension.filter(filter);
    }

    /// Chart click: toggle one key in the axis's selection.
    pub fn toggle(&self, axis: Axis, key: Key) {
        self.binding(axis).dimension.toggle(key);
    }

    /// Toggle a set of keys together. If every key is already selected they
    /// are all removed, otherwise they are all added.
    pub fn toggle_keys(&self, axis: Axis, keys: Vec<Key>) {
        if keys.is_empty() {
            return;
        }
        let mut selected: BTreeSet<Key> = self.filter(axis).selected().into_iter().collect();
        if keys.iter().all(|k| selected.contains(k)) {
            for key in &keys {
                selected.remove(key);
            }
        } else {
            selected.extend(keys);
        }
        self.set_filter(axis, Filter::from_keys(selected));
    }

    /// Select-menu change: replace the selection with `keys`.
    pub fn select(&self, axis: Axis, keys: Vec<Key>) {
        self.binding(axis).dimension.filter_in(keys);
    }

    pub fn reset(&self, axis: Axis) {
        self.binding(axis).dimension.filter_all();
    }

    pub fn reset_all(&self) {
        self.index.filter_all();
    }

    // ───────────────────── Readouts ─────────────────────

    /// Budget total over records passing every filter.
    pub fn total(&self) -> f64 {
        self.total.value()
    }

    pub fn sum_text(&self) -> String {
        sum_text(self.total())
    }

    pub fn record_counter(&self) -> RecordCounter {
        let filtered = self.total.count();
        let total = self.index.size();
        RecordCounter {
            filtered,
            total,
            all_selected: filtered == total,
        }
    }

    /// Group entries of an axis in select-menu order.
    pub fn ranked(&self, axis: Axis) -> Vec<KeyValue> {
        let mut entries = self.binding(axis).group.all();
        order_desc(&mut entries);
        entries
    }

    /// Records passing every filter, newest budget year first.
    pub fn filtered_records(&self) -> Vec<ExpenditureRecord> {
        self.budget_year.dimension.top(usize::MAX)
    }

    // ───────────────────── Widget data ─────────────────────

    pub fn menu(&self, axis: Axis) -> SelectMenu {
        let binding = self.binding(axis);
        SelectMenu::build(axis, binding.group.all(), &binding.dimension.current_filter())
    }

    pub fn table_page(&self, page: usize) -> TablePage {
        TablePage::build(&self.filtered_records(), page)
    }

    fn chart_items<C>(&self, axis: Axis, color: C) -> (Vec<ChartItem>, bool)
    where
        C: Fn(&Key) -> Option<String>,
    {
        let binding = self.binding(axis);
        let filter = binding.dimension.current_filter();
        let filtered = !filter.is_all();
        let items = binding
            .group
            .all()
            .into_iter()
            .map(|kv| ChartItem {
                label: kv.key.to_string(),
                title: title(&kv.key, kv.value),
                color: color(&kv.key),
                selected: filtered && filter.accepts(&kv.key),
                value: kv.value,
                key: kv.key,
            })
            .collect();
        (items, filtered)
    }

    pub fn row_chart(&self, width: f64) -> RowChartData {
        let (items, filtered) = self.chart_items(Axis::Department, |key| {
            self.department_colors.get(&key.to_string()).map(str::to_string)
        });
        RowChartData {
            widget: WidgetId::RowChart,
            axis: Axis::Department,
            layout: ROW_LAYOUT.resolve(width),
            items,
            filtered,
            elastic_x: true,
        }
    }

    pub fn bar_chart(&self, width: f64) -> BarChartData {
        let (items, filtered) = self.chart_items(Axis::BudgetYear, |_| None);
        BarChartData {
            widget: WidgetId::BarChart,
            axis: Axis::BudgetYear,
            layout: BAR_LAYOUT.resolve(width),
            items,
            filtered,
            elastic_y: true,
            bar_padding: BAR_PADDING,
            outer_padding: BAR_OUTER_PADDING,
        }
    }

    pub fn bubble_chart(&self, width: f64) -> BubbleChartData {
        let layout = BUBBLE_LAYOUT.resolve(width);
        let axis_length = layout.inner_width();
        let filter = self.fund_type.dimension.current_filter();
        let filtered = !filter.is_all();
        let items = self
            .fund_type
            .group
            .all()
            .into_iter()
            .filter_map(|kv| {
                let x = self.bubble.rank(&kv.key)?;
                Some(BubbleItem {
                    label: kv.key.to_string(),
                    x,
                    radius: self.bubble.radius(kv.value, axis_length),
                    color: self.bubble.color(&kv.key).unwrap_or_default().to_string(),
                    title: title(&kv.key, kv.value),
                    selected: filtered && filter.accepts(&kv.key),
                    value: kv.value,
                    key: kv.key,
                })
            })
            .collect();
        BubbleChartData {
            widget: WidgetId::BubbleChart,
            axis: Axis::FundType,
            sum_labels: sum_labels(layout.width, layout.height, self.total()),
            layout,
            items,
            filtered,
            x_domain: X_DOMAIN,
        }
    }

    pub fn sunburst(&self, width: f64) -> SunburstData {
        let filter = self.branch_program.dimension.current_filter();
        let filtered = !filter.is_all();
        let color = |name: &str| self.branch_program_colors.get(name).map(str::to_string);

        let mut nodes: Vec<SunburstNode> = Vec::new();
        for kv in self.branch_program.group.all() {
            let segments = kv.key.segments();
            let branch = segments.first().copied().unwrap_or_default().to_string();
            let leaf = SunburstNode {
                name: segments.get(1).copied().unwrap_or_default().to_string(),
                keys: vec![kv.key.clone()],
                value: kv.value,
                color: segments.get(1).and_then(|program| color(*program)),
                label: kv.value.to_string(),
                title: title(&Key::single(segments.get(1).copied().unwrap_or_default()), kv.value),
                selected: filtered && filter.accepts(&kv.key),
                children: Vec::new(),
            };

            // group keys arrive sorted, so a branch's programs are contiguous
            match nodes.last_mut() {
                Some(parent) if parent.name == branch => {
                    parent.value += leaf.value;
                    parent.keys.push(kv.key.clone());
                    parent.children.push(leaf);
                }
                _ => nodes.push(SunburstNode {
                    color: color(&branch),
                    keys: vec![kv.key.clone()],
                    value: leaf.value,
                    label: String::new(),
                    title: String::new(),
                    selected: false,
                    children: vec![leaf],
                    name: branch,
                }),
            }
        }
        for node in nodes.iter_mut() {
            node.label = node.value.to_string();
            node.title = format!("{}: ${}", node.name, bex_utils::format::thousands(node.value));
            node.selected = filtered && node.children.iter().all(|c| c.selected);
        }

        SunburstData {
            widget: WidgetId::Sunburst,
            axis: Axis::BranchProgram,
            layout: SUNBURST_LAYOUT.resolve(width),
            nodes,
            filtered,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    fn tiny() -> Dashboard {
        let dataset = Dataset::new(vec![
            ExpenditureRecord::new("A", "b1", "p1", "General Fund", "2017", 100.0),
            ExpenditureRecord::new("B", "b1", "p2", "Enterprise Fund", "2017", 50.0),
            ExpenditureRecord::new("A", "b2", "p1", "General Fund", "2018", 25.0),
            ExpenditureRecord::new("C", "b2", "p3", "Trust Fund", "2018", 10.0),
        ]);
        Dashboard::build(dataset, &Palette::sample().unwrap()).unwrap()
    }

    #[test]
    fn dashboard_sample_total_matches_dataset() {
        let dataset = Dataset::sample().unwrap();
        let expected = dataset.total_budget();
        let dashboard = Dashboard::build(dataset, &Palette::sample().unwrap()).unwrap();

        assert_eq!(dashboard.total(), expected);
        for axis in Axis::ALL {
            let sum: f64 = dashboard.binding(axis).group.all().iter().map(|kv| kv.value).sum();
            assert_eq!(sum, expected, "group for {} should sum to the total", axis);
        }
        assert!(dashboard.record_counter().all_selected);
    }

    #[test]
    fn dashboard_toggle_updates_readouts() {
        let dashboard = tiny();
        assert_eq!(dashboard.sum_text(), "$185");

        dashboard.toggle(Axis::Department, Key::single("A"));
        assert_eq!(dashboard.sum_text(), "$125");
        let counter = dashboard.record_counter();
        assert_eq!((counter.filtered, counter.total, counter.all_selected), (2, 4, false));

        dashboard.reset_all();
        assert_eq!(dashboard.total(), 185.0);
    }

    #[test]
    fn dashboard_subscriber_sees_new_total() {
        let dashboard = tiny();
        let readout = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&readout);
        let reader = dashboard.clone();
        dashboard.subscribe(SUM_READOUT_SUBSCRIBER, move |_| *sink.borrow_mut() = reader.sum_text());

        dashboard.select(Axis::FundType, vec![Key::single("Trust Fund"), Key::single("Enterprise Fund")]);
        assert_eq!(*readout.borrow(), "$60");
    }

    #[test]
    fn dashboard_readout_subscribers_do_not_stack() {
        let dashboard = tiny();
        let sums = Rc::new(RefCell::new(Vec::new()));
        let redraws = Rc::new(Cell::new(0));
        // a component re-render subscribes again with fresh closures
        for _ in 0..2 {
            let sink = Rc::clone(&sums);
            let count = Rc::clone(&redraws);
            dashboard.subscribe_readouts(
                move |text| sink.borrow_mut().push(text),
                move |_| count.set(count.get() + 1),
            );
        }
        assert_eq!(dashboard.index().listener_count(), 2);

        dashboard.toggle(Axis::Department, Key::single("B"));
        assert_eq!(*sums.borrow(), vec!["$50".to_string()]);
        assert_eq!(redraws.get(), 1);
    }

    #[test]
    fn dashboard_counter_all_selected_when_every_record_passes() {
        let dashboard = tiny();
        dashboard.select(
            Axis::Department,
            vec![Key::single("A"), Key::single("B"), Key::single("C")],
        );
        let counter = dashboard.record_counter();
        assert_eq!((counter.filtered, counter.total), (4, 4));
        assert!(counter.all_selected);
    }

    #[test]
    fn dashboard_toggle_keys_adds_then_removes() {
        let dashboard = tiny();
        let b1 = vec![Key::pair("b1", "p1"), Key::pair("b1", "p2")];
        dashboard.toggle_keys(Axis::BranchProgram, b1.clone());
        assert_eq!(dashboard.total(), 150.0);
        dashboard.toggle_keys(Axis::BranchProgram, vec![Key::pair("b2", "p3")]);
        assert_eq!(dashboard.total(), 160.0);
        dashboard.toggle_keys(Axis::BranchProgram, b1);
        assert_eq!(dashboard.total(), 10.0);
    }

    #[test]
    fn dashboard_menu_is_value_descending() {
        let dashboard = tiny();
        let menu = dashboard.menu(Axis::Department);
        let titles: Vec<&str> = menu.options.iter().map(|o| o.title.as_str()).collect();
        assert_eq!(titles, vec!["A: $125", "B: $50", "C: $10"]);
    }

    #[test]
    fn dashboard_row_chart_marks_selection_and_colors() {
        let dashboard = tiny();
        dashboard.toggle(Axis::Department, Key::single("B"));
        let chart = dashboard.row_chart(400.0);
        assert!(chart.filtered);
        let b = chart.items.iter().find(|i| i.label == "B").unwrap();
        assert!(b.selected);
        assert_eq!(b.color.as_deref(), dashboard.department_colors().get("B"));
        // own axis still shows the unselected departments
        assert_eq!(chart.items.len(), 3);
        assert_eq!(chart.items[0].value, 125.0);
    }

    #[test]
    fn dashboard_bubble_ranks_are_fixed_at_load() {
        let dashboard = tiny();
        let before: Vec<(String, usize)> = dashboard
            .bubble_chart(800.0)
            .items
            .iter()
            .map(|i| (i.label.clone(), i.x))
            .collect();
        assert_eq!(
            before,
            vec![
                ("Enterprise Fund".to_string(), 2),
                ("General Fund".to_string(), 1),
                ("Trust Fund".to_string(), 3)
            ]
        );

        dashboard.toggle(Axis::Department, Key::single("C"));
        let chart = dashboard.bubble_chart(800.0);
        let general = chart.items.iter().find(|i| i.label == "General Fund").unwrap();
        assert_eq!((general.x, general.value, general.radius), (1, 0.0, 0.0));
        assert_eq!(chart.sum_labels[1].content, "$10");
    }

    #[test]
    fn dashboard_sunburst_hierarchy() {
        let dashboard = tiny();
        let sunburst = dashboard.sunburst(500.0);
        assert_eq!(sunburst.nodes.len(), 2);
        let b1 = &sunburst.nodes[0];
        assert_eq!(b1.name, "b1");
        assert_eq!(b1.value, 150.0);
        assert_eq!(b1.label, "150");
        assert_eq!(b1.children.len(), 2);
        assert_eq!(b1.keys, vec![Key::pair("b1", "p1"), Key::pair("b1", "p2")]);
        assert_eq!(b1.color.as_deref(), dashboard.branch_program_colors().get("b1"));
        assert_eq!(b1.children[1].title, "p2: $50");
    }

    #[test]
    fn dashboard_table_follows_filters() {
        let dashboard = tiny();
        dashboard.toggle(Axis::BudgetYear, Key::single("2018"));
        let page = dashboard.table_page(0);
        assert_eq!(page.total, 2);
        assert!(page.rows.iter().all(|row| row[4] == "2018"));
        assert_eq!(page.rows[0][5], "$25");
    }

    #[test]
    fn dashboard_empty_dataset() {
        let dashboard = Dashboard::build(Dataset::default(), &Palette::default()).unwrap();
        assert_eq!(dashboard.total(), 0.0);
        assert_eq!(dashboard.sum_text(), "$0");
        assert!(dashboard.menu(Axis::Department).options.is_empty());
        assert!(dashboard.sunburst(100.0).nodes.is_empty());
        assert!(dashboard.bubble_chart(100.0).items.is_empty());
        assert_eq!(dashboard.table_page(3).rows.len(), 0);
        dashboard.toggle(Axis::Department, Key::single("A"));
        assert_eq!(dashboard.total(), 0.0);
    }
}
