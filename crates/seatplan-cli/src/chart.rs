//! Chart files: one wedding plan's guests and one seating chart's tables.

use std::fs;
use std::path::Path;

use seatplan::{Guest, PlanMode, PlanRequest, SeatingSource, SourceError, Table};
use serde::{Deserialize, Serialize};

use crate::error::CliError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    #[default]
    Attending,
    Pending,
    Declined,
}

/// A guest entry as written in the chart file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartGuest {
    #[serde(flatten)]
    pub guest: Guest,
    #[serde(default)]
    pub attendance_status: AttendanceStatus,
}

/// Planning input read from JSON.
///
/// Acts as the seating source: only attending guests are handed to the
/// planner, and requests for another plan or chart are refused.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartFile {
    pub wedding_plan_id: String,
    pub seating_chart_id: String,
    #[serde(default)]
    pub guests: Vec<ChartGuest>,
    #[serde(default)]
    pub tables: Vec<Table>,
}

impl ChartFile {
    pub fn read(path: &Path) -> Result<Self, CliError> {
        let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents).map_err(|source| CliError::Chart {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn request(&self, mode: PlanMode) -> PlanRequest {
        PlanRequest {
            wedding_plan_id: self.wedding_plan_id.clone(),
            seating_chart_id: self.seating_chart_id.clone(),
            mode,
        }
    }

    /// Display name for a guest id, falling back to the id itself.
    pub fn guest_name<'a>(&'a self, guest_id: &'a str) -> &'a str {
        self.guests
            .iter()
            .find(|g| g.guest.id.as_str() == guest_id)
            .map(|g| g.guest.full_name.as_str())
            .unwrap_or(guest_id)
    }
}

impl SeatingSource for ChartFile {
    fn attending_guests(&self, wedding_plan_id: &str) -> Result<Vec<Guest>, SourceError> {
        if wedding_plan_id != self.wedding_plan_id {
            return Err(SourceError::Unauthorized(wedding_plan_id.to_string()));
        }
        Ok(self
            .guests
            .iter()
            .filter(|g| g.attendance_status == AttendanceStatus::Attending)
            .map(|g| g.guest.clone())
            .collect())
    }

    fn chart_tables(&self, seating_chart_id: &str) -> Result<Vec<Table>, SourceError> {
        if seating_chart_id != self.seating_chart_id {
            return Err(SourceError::ChartNotFound(seating_chart_id.to_string()));
        }
        Ok(self.tables.clone())
    }
}
