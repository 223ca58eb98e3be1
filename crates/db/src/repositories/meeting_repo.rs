//! Repository for the `meetings` table.

use sqlx::PgConnection;

use crate::models::meeting::MeetingTotalsRow;

pub struct MeetingRepo;

impl MeetingRepo {
    /// Count and counter sums across all meetings.
    pub async fn totals(conn: &mut PgConnection) -> Result<MeetingTotalsRow, sqlx::Error> {
        sqlx::query_as::<_, MeetingTotalsRow>(
            "SELECT COUNT(*) AS total_meetings, \
                    SUM(attendees) AS total_attendees, \
                    SUM(video_count) AS total_videos, \
                    SUM(voice_participant_count) AS total_voice \
             FROM meetings",
        )
        .fetch_one(conn)
        .await
    }
}
