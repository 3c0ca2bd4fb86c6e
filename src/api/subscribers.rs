use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::BarOrientation;
use crate::interaction::{TouchPhase, TouchedPoint};

use super::TouchHits;

/// Change notification published by `BarChartData`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartEvent {
    DataSetReplaced { points_len: usize },
    BarStyleChanged,
    AnimationChanged { should_animate: bool },
    NoDataTextChanged,
    ValuePolicyChanged { min: f64, max: f64 },
    AxisLabelsChanged,
    ExtraLineChanged { present: bool },
    TouchMarkerTypeChanged,
    TouchResolved { hits: TouchHits },
    TouchEnded,
}

impl ChartEvent {
    #[must_use]
    pub fn touched_points(&self) -> &[TouchedPoint] {
        match self {
            Self::TouchResolved { hits } => hits.as_slice(),
            _ => &[],
        }
    }
}

/// Read-only state passed alongside every event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartContext {
    pub orientation: BarOrientation,
    pub points_len: usize,
    pub min_value: f64,
    pub max_value: f64,
    pub has_data: bool,
    pub should_animate: bool,
    pub touch_phase: TouchPhase,
}

/// Observer of chart data changes, typically a rendering layer that re-reads
/// state and schedules a redraw.
pub trait ChartSubscriber {
    fn on_event(&mut self, event: &ChartEvent, context: ChartContext);
}

impl<F> ChartSubscriber for F
where
    F: FnMut(&ChartEvent, ChartContext),
{
    fn on_event(&mut self, event: &ChartEvent, context: ChartContext) {
        self(event, context);
    }
}

/// Handle returned by `BarChartData::subscribe`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

#[derive(Default)]
pub(super) struct SubscriberRegistry {
    next_id: u64,
    entries: IndexMap<SubscriptionId, Box<dyn ChartSubscriber>>,
}

impl SubscriberRegistry {
    pub(super) fn insert(&mut self, subscriber: Box<dyn ChartSubscriber>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, subscriber);
        id
    }

    pub(super) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.entries.shift_remove(&id).is_some()
    }

    pub(super) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Dispatches in subscription order.
    pub(super) fn notify(&mut self, event: &ChartEvent, context: ChartContext) {
        trace!(subscribers = self.entries.len(), ?event, "notify chart subscribers");
        for subscriber in self.entries.values_mut() {
            subscriber.on_event(event, context);
        }
    }
}

impl std::fmt::Debug for SubscriberRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriberRegistry")
            .field("next_id", &self.next_id)
            .field("ids", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}
