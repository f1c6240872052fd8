//! Thread-safe render recorder for presenter assertions in tests.

use std::sync::{Arc, Mutex};

use seedscout::present::{Card, Present};

/// One recorded render call.
#[derive(Debug, Clone)]
pub enum RenderEvent {
    Initial(Vec<Card>),
    Final(Vec<Card>),
    Empty,
    Error(String),
}

/// Present implementation that records every call for later assertions.
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    events: Arc<Mutex<Vec<RenderEvent>>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<RenderEvent> {
        self.events.lock().expect("lock render events").clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().expect("lock render events").len()
    }

    fn record(&self, event: RenderEvent) {
        self.events.lock().expect("lock render events").push(event);
    }
}

impl Present for RecordingPresenter {
    fn render_initial(&self, cards: &[Card]) {
        self.record(RenderEvent::Initial(cards.to_vec()));
    }

    fn render_final(&self, cards: &[Card]) {
        self.record(RenderEvent::Final(cards.to_vec()));
    }

    fn render_empty(&self) {
        self.record(RenderEvent::Empty);
    }

    fn render_error(&self, message: &str) {
        self.record(RenderEvent::Error(message.to_string()));
    }
}
