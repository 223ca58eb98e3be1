//! Meeting aggregate model.

use fleetpulse_core::fleet::MeetingTotals;
use sqlx::FromRow;

/// Fleet-wide meeting aggregate. Sums are NULL when there are no meetings.
#[derive(Debug, Clone, Copy, FromRow)]
pub struct MeetingTotalsRow {
    pub total_meetings: i64,
    pub total_attendees: Option<i64>,
    pub total_videos: Option<i64>,
    pub total_voice: Option<i64>,
}

impl From<MeetingTotalsRow> for MeetingTotals {
    fn from(row: MeetingTotalsRow) -> Self {
        MeetingTotals {
            meetings: row.total_meetings,
            attendees: row.total_attendees.unwrap_or(0),
            videos: row.total_videos.unwrap_or(0),
            voice: row.total_voice.unwrap_or(0),
        }
    }
}
