use crate::modules::attendance::adapters::outbound::repository::AttendanceRepository;
use crate::modules::attendance::use_cases::scan_attendance::handler::ScanAttendanceHandler;
use crate::modules::events::adapters::outbound::repository::EventRepository;
use crate::modules::students::adapters::outbound::repository::StudentRepository;
use crate::shared::infrastructure::notifier::Notifier;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub students: Arc<dyn StudentRepository>,
    pub events: Arc<dyn EventRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub scan_handler: Arc<ScanAttendanceHandler>,
}

impl AppState {
    pub fn new(
        students: Arc<dyn StudentRepository>,
        events: Arc<dyn EventRepository>,
        attendance: Arc<dyn AttendanceRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let scan_handler = Arc::new(ScanAttendanceHandler::new(
            students.clone(),
            events.clone(),
            attendance.clone(),
            notifier.clone(),
        ));
        Self {
            students,
            events,
            attendance,
            notifier,
            scan_handler,
        }
    }
}
