//! Employee Model

use serde::{Deserialize, Serialize};

use super::contact::ContactInfo;

/// Employment status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    Active,
    Inactive,
    Terminated,
    OnLeave,
}

impl EmploymentStatus {
    /// Wire literal for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Terminated => "TERMINATED",
            Self::OnLeave => "ON_LEAVE",
        }
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentType {
    FullTime,
    PartTime,
    Contract,
    Intern,
}

impl EmploymentType {
    /// Wire literal for this type
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FullTime => "FULL_TIME",
            Self::PartTime => "PART_TIME",
            Self::Contract => "CONTRACT",
            Self::Intern => "INTERN",
        }
    }
}

impl std::fmt::Display for EmploymentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Employee entity
///
/// Audit fields (id, timestamps, actor ids) are embedded directly rather
/// than wrapped in a separate base record. `employee_number` is a business
/// key distinct from `id`; uniqueness is the backend's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    /// Creation timestamp (ISO 8601)
    pub created_at: String,
    /// Last update timestamp (ISO 8601)
    pub updated_at: String,
    /// User ID of the creator
    pub created_by: String,
    /// User ID of the last editor
    pub updated_by: String,
    pub employee_number: String,
    pub personal_info: PersonalInfo,
    pub contact_info: ContactInfo,
    pub employment_info: EmploymentInfo,
}

/// Personal details sub-record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub first_name: String,
    pub last_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_name: Option<String>,
    /// Date of birth (ISO 8601 date)
    pub date_of_birth: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

impl PersonalInfo {
    /// Name to display in UIs (preferred name when set)
    pub fn display_name(&self) -> String {
        match &self.preferred_name {
            Some(preferred) => format!("{} {}", preferred, self.last_name),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

/// Employment details sub-record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentInfo {
    pub job_title: String,
    pub department: String,
    /// Manager's employee ID (reference only, no ownership implied)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_id: Option<String>,
    /// Employment start date (ISO 8601 date)
    pub start_date: String,
    /// Employment end date (ISO 8601 date), absent while employed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    pub status: EmploymentStatus,
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
}
