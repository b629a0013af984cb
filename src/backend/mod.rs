// src/backend/mod.rs — Backend collaborator: endpoints, data source seam, parsing.
//
// The dashboard reads four JSON endpoints once per launch. `DataSource` is the
// seam between the loader and the transport; `HttpSource` is the real one.

pub mod http;
pub mod lenient;
pub mod normalize;
pub mod types;

use async_trait::async_trait;
use std::fmt;

use crate::infra::errors::TrackerError;

pub use http::HttpSource;

/// One of the four read-only resources the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Attendance,
    Marks,
    Timetable,
    User,
}

impl Endpoint {
    pub const ALL: [Endpoint; 4] = [
        Endpoint::Attendance,
        Endpoint::Marks,
        Endpoint::Timetable,
        Endpoint::User,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Attendance => "/attendance",
            Endpoint::Marks => "/marks",
            Endpoint::Timetable => "/timetable",
            Endpoint::User => "/user",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Anything that can answer a GET for an endpoint with a JSON document.
///
/// Implementations report transport failures, non-success statuses and
/// undecodable bodies as errors. A well-formed body of the wrong shape is
/// not an error here; that is `normalize`'s job.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch(&self, endpoint: Endpoint) -> Result<serde_json::Value, TrackerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_are_distinct_and_rooted() {
        let paths: Vec<&str> = Endpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths, ["/attendance", "/marks", "/timetable", "/user"]);
    }

    #[test]
    fn test_display_uses_path() {
        assert_eq!(Endpoint::User.to_string(), "/user");
    }
}
