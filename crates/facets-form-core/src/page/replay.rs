//! Replay of a page fixture through a live notifier.

use crate::model::{ChangeRecord, Diff, FilterMap};
use crate::notifier::ChangeNotifier;
use crate::page::format_v0::PageV0;
use crate::widget::{InputChange, WidgetRegistry, DATE_RANGE};
use crate::{log_op_end, log_op_start};
use serde::Serialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Everything observable while replaying a page
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    pub form_id: String,
    pub facets_source: String,
    pub live_total: bool,
    /// Facets of the attached widgets, in form order
    pub attached: Vec<String>,
    /// Filters right after attach
    pub seeded: FilterMap,
    pub steps: Vec<StepReport>,
    pub final_filters: FilterMap,
    /// Human summary of each active date-range facet
    pub date_summaries: BTreeMap<String, String>,
    pub submit_query: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct StepReport {
    pub facet: String,
    pub change: InputChange,
    /// `None` when the edit matched no control
    pub diff: Option<Diff>,
    pub events: Vec<ChangeRecord>,
    pub refresh_urls: Vec<String>,
}

/// Attach the page's form and run its script.
pub fn replay(page: &PageV0) -> ReplayReport {
    log_op_start!("replay_page", facets_source = page.form.facets_source.as_str());
    let start = std::time::Instant::now();

    let registry = WidgetRegistry::from_config(&page.config);
    let mut notifier = ChangeNotifier::attach(
        &page.form.facets_source,
        page.ordered_widgets().into_iter().map(|w| w.to_element()),
        &registry,
        &page.config,
    );
    let seeded = notifier.filters().clone();

    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    notifier.on_change(move |event| sink.borrow_mut().push(ChangeRecord::from(event)));

    let urls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&urls);
    let live_total = notifier.enable_live_total(&page.config.live_total, move |url: &str| {
        sink.borrow_mut().push(url.to_string())
    });

    let steps: Vec<StepReport> = page
        .script
        .iter()
        .map(|step| StepReport {
            diff: notifier.apply(&step.facet, &step.change),
            facet: step.facet.clone(),
            change: step.change.clone(),
            events: std::mem::take(&mut *events.borrow_mut()),
            refresh_urls: std::mem::take(&mut *urls.borrow_mut()),
        })
        .collect();

    log_op_end!(
        "replay_page",
        duration_ms = start.elapsed().as_millis() as u64,
        form_id = %notifier.id(),
        steps = steps.len()
    );

    let date_summaries = notifier
        .facets()
        .filter(|facet| notifier.widget_ref(facet).is_some_and(|w| w.kind == DATE_RANGE))
        .filter_map(|facet| {
            let value = notifier.filters().get(facet).first()?;
            let summary = page.config.date_range.summarize(value)?;
            Some((facet.to_string(), summary))
        })
        .collect();

    ReplayReport {
        form_id: notifier.id().to_string(),
        facets_source: notifier.facets_source().to_string(),
        live_total,
        attached: notifier.facets().map(str::to_string).collect(),
        seeded,
        steps,
        final_filters: notifier.filters().clone(),
        date_summaries,
        submit_query: notifier.submit_query(),
    }
}
