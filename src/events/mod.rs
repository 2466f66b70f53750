//! Typed UI event dispatch
//!
//! Handlers are registered explicitly against the event set and stay pure:
//! each maps an event to side-effect descriptions, and the caller decides
//! when to execute them. The export pipeline is driven this way so the CSV
//! core never touches event plumbing.

use tracing::debug;

use crate::export::ExportRequest;
use crate::source::Trigger;

/// The set of UI events the crate reacts to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    /// Pointer activation of an export control, carrying the control's
    /// configuration attributes
    ExportClick(Trigger),
}

/// A side effect described by a handler, to be executed by the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Export a table to a CSV file
    ExportCsv(ExportRequest),
}

/// A pure handler from an event to the effects it calls for
pub type Handler = fn(&UiEvent) -> Vec<Effect>;

/// Explicit registry of event handlers
pub struct EventRegistry {
    handlers: Vec<Handler>,
}

impl EventRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register a handler
    pub fn register(&mut self, handler: Handler) {
        self.handlers.push(handler);
    }

    /// Run every handler over an event and collect the described effects
    pub fn dispatch(&self, event: &UiEvent) -> Vec<Effect> {
        let effects: Vec<Effect> = self
            .handlers
            .iter()
            .flat_map(|handler| handler(event))
            .collect();
        debug!(?event, count = effects.len(), "dispatched event");
        effects
    }
}

impl Default for EventRegistry {
    /// Registry with the built-in export-click handler
    fn default() -> Self {
        let mut registry = Self::new();
        registry.register(on_export_click);
        registry
    }
}

/// Built-in handler: an export control click becomes an export request
///
/// A control with an empty target cannot name a table and produces no effect.
fn on_export_click(event: &UiEvent) -> Vec<Effect> {
    let UiEvent::ExportClick(trigger) = event;
    if trigger.target.is_empty() {
        return Vec::new();
    }

    let mut request = ExportRequest::new(&trigger.target);
    if let Some(name) = &trigger.file_name {
        request = request.with_file_name(name);
    }
    vec![Effect::ExportCsv(request)]
}
