// Composes the attendance confirmation sent to a student after a scan.
//
// A time-in alone produces an "Attendance Recorded" message; a time-in with
// a time-out produces "Attendance Complete". Any other combination is not
// a confirmable state.

use crate::shared::core::primitives::{EpochMillis, format_millis};
use crate::shared::infrastructure::notifier::{NotifierError, OutboundMessage};

pub const SENDER_NAME: &str = "MICE Attendance System";

/// Who receives the confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

pub fn compose_confirmation(
    recipient: &Recipient,
    event_title: &str,
    time_in: Option<EpochMillis>,
    time_out: Option<EpochMillis>,
) -> Result<OutboundMessage, NotifierError> {
    let name = &recipient.name;
    let (subject, text, html) = match (time_in, time_out) {
        (Some(time_in), None) => {
            let time_in = format_millis(time_in);
            (
                format!("Attendance Recorded: {event_title}"),
                format!(
                    "Hello {name},\n\nYour attendance has been recorded for {event_title}.\n\nTime-in: {time_in}\n\nThank you."
                ),
                format!(
                    "<h2>Attendance Confirmation</h2>\n<p>Hello {name},</p>\n<p>Your attendance has been recorded for <strong>{event_title}</strong>.</p>\n<p><strong>Time-in:</strong> {time_in}</p>\n<p>Thank you for your participation.</p>"
                ),
            )
        }
        (Some(time_in), Some(time_out)) => {
            let time_in = format_millis(time_in);
            let time_out = format_millis(time_out);
            (
                format!("Attendance Complete: {event_title}"),
                format!(
                    "Hello {name},\n\nYour attendance record has been completed for {event_title}.\n\nTime-in: {time_in}\nTime-out: {time_out}\n\nThank you."
                ),
                format!(
                    "<h2>Attendance Complete</h2>\n<p>Hello {name},</p>\n<p>Your attendance record has been completed for <strong>{event_title}</strong>.</p>\n<p><strong>Time-in:</strong> {time_in}</p>\n<p><strong>Time-out:</strong> {time_out}</p>\n<p>Thank you for your participation.</p>"
                ),
            )
        }
        _ => return Err(NotifierError::InvalidAttendanceData),
    };

    Ok(OutboundMessage {
        from_name: SENDER_NAME.to_string(),
        to: recipient.email.clone(),
        subject,
        text,
        html,
    })
}
