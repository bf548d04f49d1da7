use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::reports::core::report::{
    AttendanceReport, EventBreakdown, MonthlyTrend, ReportFilter,
};
use crate::modules::reports::core::stats::AttendanceStats;
use crate::modules::reports::use_cases::attendance_report::handler;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendanceStats {
    pub total: i64,
    pub present: i64,
    pub late: i64,
    pub absent: i64,
    pub excused: i64,
    pub presence_rate: i32,
}

impl From<AttendanceStats> for GqlAttendanceStats {
    fn from(s: AttendanceStats) -> Self {
        Self {
            total: s.total as i64,
            present: s.present as i64,
            late: s.late as i64,
            absent: s.absent as i64,
            excused: s.excused as i64,
            presence_rate: s.presence_rate() as i32,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlEventBreakdown {
    pub event_id: String,
    pub label: String,
    pub start_date: i64,
    pub stats: GqlAttendanceStats,
}

impl From<EventBreakdown> for GqlEventBreakdown {
    fn from(b: EventBreakdown) -> Self {
        Self {
            event_id: b.event_id,
            label: b.label,
            start_date: b.start_date,
            stats: b.stats.into(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlMonthlyTrend {
    pub month: String,
    pub stats: GqlAttendanceStats,
}

impl From<MonthlyTrend> for GqlMonthlyTrend {
    fn from(t: MonthlyTrend) -> Self {
        Self {
            month: t.month,
            stats: t.stats.into(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAttendanceReport {
    pub stats: GqlAttendanceStats,
    pub by_event: Vec<GqlEventBreakdown>,
    pub trend: Vec<GqlMonthlyTrend>,
}

impl From<AttendanceReport> for GqlAttendanceReport {
    fn from(r: AttendanceReport) -> Self {
        Self {
            stats: r.stats.into(),
            by_event: r.by_event.into_iter().map(Into::into).collect(),
            trend: r.trend.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Default)]
pub struct ReportQuery;

#[Object]
impl ReportQuery {
    async fn report(
        &self,
        context: &Context<'_>,
        from: Option<i64>,
        to: Option<i64>,
        event_id: Option<String>,
    ) -> GqlResult<GqlAttendanceReport> {
        let state = context.data_unchecked::<AppState>();
        let filter = ReportFilter { from, to, event_id };
        let report =
            handler::handle(state.events.as_ref(), state.attendance.as_ref(), &filter).await?;
        Ok(report.into())
    }
}
