//! Wiring of widgets to the filter store.
//!
//! The browser attaches a notifier to every facets form on page load: each
//! widget seeds the store silently, then re-syncs whenever its own change
//! event fires. Here the DOM event loop is replaced by explicit
//! [`ChangeNotifier::dispatch`] and [`ChangeNotifier::apply`] calls.

use crate::config::{FacetsFormConfig, LiveTotalConfig};
use crate::core_types::FormInstanceId;
use crate::live_total::{LiveTotal, RefreshFetcher};
use crate::model::{AncestorMap, ChangeEvent, ChangeListener, Diff, FilterMap, WidgetRef};
use crate::query;
use crate::store::FilterStore;
use crate::widget::{InputChange, WidgetAdapter, WidgetElement, WidgetRegistry};
use crate::{log_op_end, log_op_start};
use std::sync::Arc;

struct AttachedWidget {
    element: WidgetElement,
    adapter: Arc<dyn WidgetAdapter>,
    widget_ref: WidgetRef,
}

impl AttachedWidget {
    /// Re-extract and push into the store.
    fn sync(&self, store: &mut FilterStore, emit: bool) -> Diff {
        let values = self.adapter.extract(&self.element);
        store.set_filters(&self.widget_ref.facet, values, &self.widget_ref, emit)
    }
}

/// One attached facets form
pub struct ChangeNotifier {
    id: FormInstanceId,
    store: FilterStore,
    widgets: Vec<AttachedWidget>,
    emit_events: bool,
}

impl ChangeNotifier {
    /// Attach the widgets of one form and seed its store.
    ///
    /// Widgets that cannot be attached (no facet, unknown kind, facet already
    /// taken) are logged and left out. So are facets outside a non-empty
    /// `config.facets` list. A malformed ancestor attribute is
    /// logged and treated as no ancestors. Seeding emits no events.
    pub fn attach<I>(
        facets_source: &str,
        elements: I,
        registry: &WidgetRegistry,
        config: &FacetsFormConfig,
    ) -> Self
    where
        I: IntoIterator<Item = WidgetElement>,
    {
        let id = FormInstanceId::new();
        log_op_start!("attach_form", facets_source = facets_source, form_id = %id);
        let start = std::time::Instant::now();

        let mut notifier = Self {
            id,
            store: FilterStore::new(facets_source),
            widgets: Vec::new(),
            emit_events: config.trigger_widget_change_event,
        };

        for element in elements {
            let Some(facet) = element.facet().map(str::to_string) else {
                tracing::warn!(kind = ?element.kind(), "widget without facet attribute, not attached");
                continue;
            };
            if !config.allows_facet(&facet) {
                tracing::debug!(facet = %facet, "facet not in the form's facet list, not attached");
                continue;
            }
            let kind = element.kind().unwrap_or_default().to_string();
            let Some(adapter) = registry.resolve(&kind) else {
                tracing::warn!(facet = %facet, widget = %kind, "unknown widget kind, not attached");
                continue;
            };
            if notifier.position(&facet).is_some() {
                tracing::warn!(facet = %facet, "facet already attached, widget ignored");
                continue;
            }

            let ancestors = match element.ancestors_attribute() {
                Some(raw) => AncestorMap::from_attribute(&facet, raw).unwrap_or_else(|err| {
                    tracing::warn!(facet = %facet, error = %err, "ignoring malformed ancestors");
                    AncestorMap::new()
                }),
                None => AncestorMap::new(),
            };

            let attached = AttachedWidget {
                widget_ref: WidgetRef::new(facet, kind).with_ancestors(ancestors),
                element,
                adapter,
            };
            attached.sync(&mut notifier.store, false);
            notifier.widgets.push(attached);
        }

        log_op_end!(
            "attach_form",
            duration_ms = start.elapsed().as_millis() as u64,
            widget_count = notifier.widgets.len(),
            form_id = %notifier.id
        );
        notifier
    }

    pub fn id(&self) -> &FormInstanceId {
        &self.id
    }

    pub fn facets_source(&self) -> &str {
        self.store.facets_source()
    }

    pub fn filters(&self) -> &FilterMap {
        self.store.all()
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn emits_events(&self) -> bool {
        self.emit_events
    }

    /// Attached facets, in attach order
    pub fn facets(&self) -> impl Iterator<Item = &str> {
        self.widgets.iter().map(|w| w.widget_ref.facet.as_str())
    }

    pub fn widget(&self, facet: &str) -> Option<&WidgetElement> {
        self.position(facet).map(|i| &self.widgets[i].element)
    }

    pub fn widget_ref(&self, facet: &str) -> Option<&WidgetRef> {
        self.position(facet).map(|i| &self.widgets[i].widget_ref)
    }

    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: ChangeListener + 'static,
    {
        self.store.subscribe(listener);
    }

    pub fn on_change<F>(&mut self, callback: F)
    where
        F: FnMut(&ChangeEvent<'_>) + 'static,
    {
        self.store.on_change(callback);
    }

    /// Subscribe a live total listener when the config enables it.
    ///
    /// Returns whether it was subscribed.
    pub fn enable_live_total<F>(&mut self, config: &LiveTotalConfig, fetcher: F) -> bool
    where
        F: RefreshFetcher + 'static,
    {
        if !config.enabled {
            return false;
        }
        self.subscribe(
            LiveTotal::new(fetcher)
                .with_base_path(config.base_path.clone())
                .with_route(config.route.clone()),
        );
        true
    }

    /// Deliver a DOM event to the widget of `facet`.
    ///
    /// Only the widget's own change event re-syncs it; anything else, and
    /// unknown facets, return `None`.
    pub fn dispatch(&mut self, facet: &str, event_name: &str) -> Option<Diff> {
        let widget = &self.widgets[self.position(facet)?];
        if event_name != widget.adapter.change_event_name() {
            return None;
        }
        Some(widget.sync(&mut self.store, self.emit_events))
    }

    /// Perform a user edit on the widget of `facet` and deliver the events a
    /// browser fires for it.
    pub fn apply(&mut self, facet: &str, change: &InputChange) -> Option<Diff> {
        let index = self.position(facet)?;
        let fired = self.widgets[index].element.apply(change);
        if fired.is_empty() {
            tracing::debug!(facet, ?change, "edit matched no control");
        }

        let mut diff = None;
        for event_name in fired {
            if let Some(d) = self.dispatch(facet, event_name) {
                diff = Some(d);
            }
        }
        diff
    }

    /// Query string a submit of the form navigates with.
    pub fn submit_query(&self) -> String {
        query::to_query_string(self.store.all())
    }

    fn position(&self, facet: &str) -> Option<usize> {
        self.widgets.iter().position(|w| w.widget_ref.facet == facet)
    }
}

impl std::fmt::Debug for ChangeNotifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeNotifier")
            .field("id", &self.id)
            .field("store", &self.store)
            .field("facets", &self.facets().collect::<Vec<_>>())
            .field("emit_events", &self.emit_events)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::attributes::ATTR_ANCESTORS;
    use crate::model::ChangeRecord;
    use crate::widget::{FormInput, CHECKBOX, DROPDOWN};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tags() -> WidgetElement {
        WidgetElement::new(CHECKBOX, "tags")
            .with_attribute(ATTR_ANCESTORS, r#"{"1.1":["1"]}"#)
            .with_input(FormInput::Checkbox {
                name: "tags[1]".to_string(),
                checked: true,
            })
            .with_input(FormInput::Checkbox {
                name: "tags[1.1]".to_string(),
                checked: false,
            })
    }

    fn kind() -> WidgetElement {
        WidgetElement::new(DROPDOWN, "type")
            .with_input(FormInput::SelectOption {
                value: String::new(),
                label: "Choose".to_string(),
                selected: true,
            })
            .with_input(FormInput::SelectOption {
                value: "article".to_string(),
                label: "Article".to_string(),
                selected: false,
            })
    }

    fn attach(config: &FacetsFormConfig) -> (ChangeNotifier, Rc<RefCell<Vec<ChangeRecord>>>) {
        let mut notifier = ChangeNotifier::attach(
            "search_api:views_page__search__page_1",
            [tags(), kind()],
            &WidgetRegistry::from_config(config),
            config,
        );
        let records = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&records);
        notifier.on_change(move |event| sink.borrow_mut().push(ChangeRecord::from(event)));
        (notifier, records)
    }

    fn check(name: &str, checked: bool) -> InputChange {
        InputChange::Check {
            name: name.to_string(),
            checked,
        }
    }

    #[test]
    fn test_attach_seeds_without_events() {
        let (notifier, records) = attach(&FacetsFormConfig::default());
        assert_eq!(notifier.filters().get("tags"), ["1".to_string()]);
        assert!(!notifier.filters().contains_facet("type"));
        assert!(records.borrow().is_empty());
        assert_eq!(notifier.facets().collect::<Vec<_>>(), ["tags", "type"]);
    }

    #[test]
    fn test_facet_list_limits_attached_widgets() {
        let config = FacetsFormConfig {
            facets: vec!["type".to_string()],
            ..FacetsFormConfig::default()
        };
        let (mut notifier, _) = attach(&config);
        assert_eq!(notifier.facets().collect::<Vec<_>>(), ["type"]);
        assert!(!notifier.filters().contains_facet("tags"));
        assert!(notifier.apply("tags", &check("tags[1.1]", true)).is_none());
    }

    #[test]
    fn test_apply_emits_event_with_updated_map() {
        let (mut notifier, records) = attach(&FacetsFormConfig::default());
        let diff = notifier.apply("tags", &check("tags[1.1]", true)).unwrap();
        assert_eq!(diff.added, ["1.1"]);

        let records = records.borrow();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].filters.get("tags"), ["1".to_string(), "1.1".to_string()]);
        assert_eq!(records[0].widget.kind, CHECKBOX);
        assert!(records[0].widget.ancestors.is_some());
    }

    #[test]
    fn test_only_own_change_event_resyncs() {
        let (mut notifier, records) = attach(&FacetsFormConfig::default());
        assert!(notifier.dispatch("type", "input").is_none());
        assert!(notifier.dispatch("tags", "change").is_none());
        assert!(notifier.dispatch("unknown", "input").is_none());

        let diff = notifier.dispatch("tags", "input").unwrap();
        assert!(diff.is_empty());
        assert_eq!(records.borrow().len(), 1);
    }

    #[test]
    fn test_disabled_trigger_tracks_silently() {
        let config = FacetsFormConfig {
            trigger_widget_change_event: false,
            ..FacetsFormConfig::default()
        };
        let (mut notifier, records) = attach(&config);
        let change = InputChange::Select {
            value: "article".to_string(),
            selected: true,
            exclusive: true,
        };
        notifier.apply("type", &change);

        assert_eq!(notifier.filters().get("type"), ["article".to_string()]);
        assert!(records.borrow().is_empty());
        assert_eq!(notifier.submit_query(), "f[0]=tags:1&f[1]=type:article");
    }

    #[test]
    fn test_unattachable_widgets_are_skipped() {
        let malformed = WidgetElement::new(CHECKBOX, "category")
            .with_attribute(ATTR_ANCESTORS, "{oops")
            .with_input(FormInput::Checkbox {
                name: "category[7]".to_string(),
                checked: true,
            });
        let notifier = ChangeNotifier::attach(
            "search_api:s",
            [
                WidgetElement::new("facets_form_slider", "price"),
                WidgetElement::new(CHECKBOX, ""),
                tags(),
                tags(),
                malformed,
            ],
            &WidgetRegistry::default(),
            &FacetsFormConfig::default(),
        );

        assert_eq!(notifier.facets().collect::<Vec<_>>(), ["tags", "category"]);
        assert!(notifier.widget_ref("category").unwrap().ancestors.is_none());
        assert_eq!(notifier.filters().get("category"), ["7".to_string()]);
    }

    #[test]
    fn test_live_total_follows_config() {
        let config = FacetsFormConfig::default();
        let (mut notifier, _) = attach(&config);
        let urls = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&urls);
        assert!(!notifier.enable_live_total(&config.live_total, move |url: &str| {
            sink.borrow_mut().push(url.to_string())
        }));

        let mut live = config.live_total.clone();
        live.enabled = true;
        let sink = Rc::clone(&urls);
        assert!(notifier.enable_live_total(&live, move |url: &str| {
            sink.borrow_mut().push(url.to_string())
        }));

        // Covered by active ancestor "1": no refresh.
        notifier.apply("tags", &check("tags[1.1]", true));
        assert!(urls.borrow().is_empty());

        notifier.apply("tags", &check("tags[1]", false));
        assert_eq!(
            urls.borrow().as_slice(),
            ["/facets-form-live-total?facets_source=search_api:views_page__search__page_1&f[0]=tags:1.1"]
        );
    }
}
