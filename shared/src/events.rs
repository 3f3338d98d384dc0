//! Employee domain events
//!
//! Shared between the people service and downstream consumers. Unlike the
//! frontend-facing models, event payloads keep snake_case field names on
//! the wire (service-to-service contract).

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EmploymentInfo, PersonalInfo};

/// Aggregate type shared by all employee events
pub const EMPLOYEE_AGGREGATE: &str = "employee";

/// Domain the employee events originate from
pub const PEOPLE_DOMAIN: &str = "people";

/// Payload carried by an [`EventEnvelope`]
pub trait EventPayload {
    /// Stable event type string (e.g. "people.employee.created")
    const EVENT_TYPE: &'static str;

    /// ID of the aggregate this event belongs to
    fn aggregate_id(&self) -> &str;
}

/// Envelope wrapping an event payload with identity and routing metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventEnvelope<T> {
    pub event_id: Uuid,
    pub event_type: String,
    pub aggregate_id: String,
    pub aggregate_type: String,
    pub event_version: u32,
    pub occurred_at: DateTime<Utc>,
    /// Tenant the event belongs to
    pub tenant_id: String,
    /// User who triggered the change, absent for system actions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub payload: T,
}

impl<T: EventPayload> EventEnvelope<T> {
    /// Wrap a payload, stamping identity and occurrence time
    pub fn new(tenant_id: impl Into<String>, payload: T) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            event_type: T::EVENT_TYPE.to_string(),
            aggregate_id: payload.aggregate_id().to_string(),
            aggregate_type: EMPLOYEE_AGGREGATE.to_string(),
            event_version: 1,
            occurred_at: Utc::now(),
            tenant_id: tenant_id.into(),
            user_id: None,
            payload,
        }
    }

    /// Attribute the event to a user
    pub fn by_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}

impl<T: Serialize + DeserializeOwned> EventEnvelope<T> {
    pub fn to_bytes(&self) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec(self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}

/// A new employee record was created
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeCreated {
    pub employee_id: String,
    pub employee_number: String,
    pub personal_info: PersonalInfo,
    pub employment_info: EmploymentInfo,
}

impl EventPayload for EmployeeCreated {
    const EVENT_TYPE: &'static str = "people.employee.created";

    fn aggregate_id(&self) -> &str {
        &self.employee_id
    }
}

/// Fields on an employee record changed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdated {
    pub employee_id: String,
    /// Names of the fields that changed
    pub updated_fields: Vec<String>,
    /// Field values before the change, keyed by field name
    pub previous_values: serde_json::Value,
    /// Field values after the change, keyed by field name
    pub new_values: serde_json::Value,
}

impl EventPayload for EmployeeUpdated {
    const EVENT_TYPE: &'static str = "people.employee.updated";

    fn aggregate_id(&self) -> &str {
        &self.employee_id
    }
}

/// An employee was terminated
///
/// Integration event: fans out beyond the people domain so payroll and
/// access deprovisioning can react.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeTerminated {
    pub employee_id: String,
    /// Termination date (ISO 8601 date)
    pub termination_date: String,
    pub termination_reason: String,
    /// Last pay period the employee is paid for
    pub final_pay_period: String,
    pub source_domain: String,
    pub target_domains: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_id: Option<Uuid>,
}

impl EmployeeTerminated {
    /// Create a termination event with the standard fan-out targets
    pub fn new(
        employee_id: impl Into<String>,
        termination_date: impl Into<String>,
        termination_reason: impl Into<String>,
        final_pay_period: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            termination_date: termination_date.into(),
            termination_reason: termination_reason.into(),
            final_pay_period: final_pay_period.into(),
            source_domain: PEOPLE_DOMAIN.to_string(),
            target_domains: vec![
                "workforce-ops".to_string(),
                "it-finance".to_string(),
                "platform".to_string(),
            ],
            correlation_id: None,
        }
    }

    /// Correlate with the request that triggered the termination
    pub fn with_correlation_id(mut self, id: Uuid) -> Self {
        self.correlation_id = Some(id);
        self
    }
}

impl EventPayload for EmployeeTerminated {
    const EVENT_TYPE: &'static str = "people.employee.terminated";

    fn aggregate_id(&self) -> &str {
        &self.employee_id
    }
}

/// Convenient type aliases
pub type EmployeeCreatedEvent = EventEnvelope<EmployeeCreated>;
pub type EmployeeUpdatedEvent = EventEnvelope<EmployeeUpdated>;
pub type EmployeeTerminatedEvent = EventEnvelope<EmployeeTerminated>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmploymentStatus, EmploymentType};
    use serde_json::json;

    fn sample_created() -> EmployeeCreated {
        EmployeeCreated {
            employee_id: "emp-7".to_string(),
            employee_number: "EMP-0007".to_string(),
            personal_info: PersonalInfo {
                first_name: "Alan".to_string(),
                last_name: "Turing".to_string(),
                middle_name: None,
                preferred_name: None,
                date_of_birth: "1992-06-23".to_string(),
                gender: None,
            },
            employment_info: EmploymentInfo {
                job_title: "Cryptographer".to_string(),
                department: "Research".to_string(),
                manager_id: None,
                start_date: "2024-09-01".to_string(),
                end_date: None,
                status: EmploymentStatus::Active,
                employment_type: EmploymentType::FullTime,
            },
        }
    }

    #[test]
    fn test_envelope_stamps_metadata() {
        let event = EventEnvelope::new("tenant-1", sample_created()).by_user("usr-9");

        assert!(!event.event_id.is_nil());
        assert_eq!(event.event_type, "people.employee.created");
        assert_eq!(event.aggregate_id, "emp-7");
        assert_eq!(event.aggregate_type, EMPLOYEE_AGGREGATE);
        assert_eq!(event.event_version, 1);
        assert_eq!(event.tenant_id, "tenant-1");
        assert_eq!(event.user_id.as_deref(), Some("usr-9"));
    }

    #[test]
    fn test_terminated_fan_out_defaults() {
        let payload = EmployeeTerminated::new("emp-7", "2025-03-31", "resignation", "2025-03");
        assert_eq!(payload.source_domain, PEOPLE_DOMAIN);
        assert_eq!(
            payload.target_domains,
            ["workforce-ops", "it-finance", "platform"]
        );
        assert!(payload.correlation_id.is_none());
        assert_eq!(EmployeeTerminated::EVENT_TYPE, "people.employee.terminated");
    }

    #[test]
    fn test_updated_event_wire_form() {
        let payload = EmployeeUpdated {
            employee_id: "emp-7".to_string(),
            updated_fields: vec!["department".to_string()],
            previous_values: json!({ "department": "Research" }),
            new_values: json!({ "department": "Engineering" }),
        };
        let event = EventEnvelope::new("tenant-1", payload);

        let bytes = event.to_bytes().unwrap();
        let recovered = EmployeeUpdatedEvent::from_bytes(&bytes).unwrap();
        assert_eq!(recovered.event_id, event.event_id);
        assert_eq!(recovered.payload.updated_fields, ["department"]);
        assert_eq!(recovered.payload.new_values["department"], "Engineering");
    }

    #[test]
    fn test_event_ids_are_unique() {
        let a = EventEnvelope::new("tenant-1", sample_created());
        let b = EventEnvelope::new("tenant-1", sample_created());
        assert_ne!(a.event_id, b.event_id);
    }
}
