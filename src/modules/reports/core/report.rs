// Attendance report aggregation.
//
// Events are selected first, then their attendance rows are counted overall,
// per event and per calendar month of the event start.

use crate::modules::attendance::core::record::AttendanceRecord;
use crate::modules::events::core::event::Event;
use crate::modules::reports::core::stats::AttendanceStats;
use crate::shared::core::primitives::EpochMillis;
use chrono::{DateTime, Datelike, Utc};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap, HashSet};

const EVENT_LABEL_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportFilter {
    /// Exclusive lower bound on the event start.
    pub from: Option<EpochMillis>,
    /// Exclusive upper bound on the event start.
    pub to: Option<EpochMillis>,
    /// Restricts the report to one event; the date bounds are then ignored.
    pub event_id: Option<String>,
}

impl ReportFilter {
    fn selects(&self, event: &Event) -> bool {
        if let Some(event_id) = &self.event_id {
            return &event.id == event_id;
        }
        self.from.is_none_or(|from| event.start_date > from)
            && self.to.is_none_or(|to| event.start_date < to)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventBreakdown {
    pub event_id: String,
    /// Title shortened for chart axes.
    pub label: String,
    pub start_date: EpochMillis,
    pub stats: AttendanceStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    /// e.g. `Nov 2023`.
    pub month: String,
    pub stats: AttendanceStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttendanceReport {
    pub stats: AttendanceStats,
    pub by_event: Vec<EventBreakdown>,
    pub trend: Vec<MonthlyTrend>,
}

pub fn event_label(title: &str) -> String {
    if title.chars().count() > EVENT_LABEL_MAX_CHARS {
        let head: String = title.chars().take(EVENT_LABEL_MAX_CHARS).collect();
        format!("{head}...")
    } else {
        title.to_string()
    }
}

/// Builds the report. `events` keeps its order in the per-event breakdown.
pub fn build_report(
    events: &[Event],
    records: &[AttendanceRecord],
    filter: &ReportFilter,
) -> AttendanceReport {
    let selected: Vec<&Event> = events.iter().filter(|e| filter.selects(e)).collect();
    let selected_ids: HashSet<&str> = selected.iter().map(|e| e.id.as_str()).collect();

    let mut per_event: HashMap<&str, AttendanceStats> = HashMap::new();
    for record in records
        .iter()
        .filter(|r| selected_ids.contains(r.event_id.as_str()))
    {
        per_event
            .entry(record.event_id.as_str())
            .or_default()
            .add(record.status);
    }

    let mut stats = AttendanceStats::default();
    let mut by_month: BTreeMap<(i32, u32), MonthlyTrend> = BTreeMap::new();
    let mut by_event = Vec::with_capacity(selected.len());

    for event in selected {
        let event_stats = per_event
            .get(event.id.as_str())
            .copied()
            .unwrap_or_default();
        stats.merge(&event_stats);

        if let Some(start) = DateTime::<Utc>::from_timestamp_millis(event.start_date) {
            by_month
                .entry((start.year(), start.month()))
                .or_insert_with(|| MonthlyTrend {
                    month: start.format("%b %Y").to_string(),
                    stats: AttendanceStats::default(),
                })
                .stats
                .merge(&event_stats);
        }

        by_event.push(EventBreakdown {
            event_id: event.id.clone(),
            label: event_label(&event.title),
            start_date: event.start_date,
            stats: event_stats,
        });
    }

    AttendanceReport {
        stats,
        by_event,
        trend: by_month.into_values().collect(),
    }
}
