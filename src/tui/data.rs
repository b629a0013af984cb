// src/tui/data.rs — Dashboard state and the initial load.
//
// Four endpoint fetches run concurrently and are joined all-or-error. On
// success each body goes through `normalize`; on any failure every slot keeps
// its default and a single banner message is set.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::backend::normalize;
use crate::backend::types::{AttendanceRecord, MarksRecord, Timetable, UserProfile};
use crate::backend::{DataSource, Endpoint};

/// User-visible banner for any initial-load failure.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load data. Please try again later.";

/// Everything the dashboard shows. Written once by `load_all`, read-only after.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct DashboardData {
    pub attendance: Vec<AttendanceRecord>,
    pub marks: Vec<MarksRecord>,
    pub timetable: Timetable,
    pub user: Option<UserProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip)]
    pub loaded_at: Option<DateTime<Local>>,
}

impl DashboardData {
    /// `"{name} • {roll}"` for the header; missing parts are blank.
    pub fn identity(&self) -> String {
        let name = self.user.as_ref().and_then(|u| u.name()).unwrap_or("");
        let roll = self.user.as_ref().and_then(|u| u.roll()).unwrap_or("");
        format!("{name} \u{2022} {roll}")
    }
}

/// Fetch all four endpoints concurrently and normalize the results.
///
/// Never fails: a transport, status, or decode error on any endpoint yields
/// default data with `error` set to [`LOAD_ERROR_MESSAGE`].
pub async fn load_all(source: &dyn DataSource) -> DashboardData {
    let joined = tokio::try_join!(
        source.fetch(Endpoint::Attendance),
        source.fetch(Endpoint::Marks),
        source.fetch(Endpoint::Timetable),
        source.fetch(Endpoint::User),
    );

    match joined {
        Ok((attendance, marks, timetable, user)) => {
            let data = DashboardData {
                attendance: normalize::parse_attendance(attendance)
                    .or_default(Endpoint::Attendance),
                marks: normalize::parse_marks(marks).or_default(Endpoint::Marks),
                timetable: normalize::parse_timetable(timetable).or_default(Endpoint::Timetable),
                user: normalize::parse_profile(user).or_default(Endpoint::User),
                error: None,
                loaded_at: Some(Local::now()),
            };
            tracing::info!(
                attendance = data.attendance.len(),
                marks = data.marks.len(),
                slots = data.timetable.slot_count(),
                profile = data.user.is_some(),
                "dashboard data loaded"
            );
            data
        }
        Err(e) => {
            tracing::error!(error = %e, "initial load failed");
            DashboardData {
                error: Some(LOAD_ERROR_MESSAGE.into()),
                loaded_at: Some(Local::now()),
                ..Default::default()
            }
        }
    }
}
