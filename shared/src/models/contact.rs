//! Contact Model

use serde::{Deserialize, Serialize};

/// Contact details sub-record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    pub personal_email: String,
    pub work_email: String,
    pub phone_number: String,
    pub home_address: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_address: Option<Address>,
}

/// Postal address
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street1: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_home_address_required() {
        let json = json!({
            "personalEmail": "a@example.com",
            "workEmail": "a@corp.example",
            "phoneNumber": "+34-600-000-000"
        });
        assert!(serde_json::from_value::<ContactInfo>(json).is_err());
    }

    #[test]
    fn test_work_address_optional() {
        let json = json!({
            "personalEmail": "a@example.com",
            "workEmail": "a@corp.example",
            "phoneNumber": "+34-600-000-000",
            "homeAddress": {
                "street1": "Calle Mayor 1",
                "city": "Madrid",
                "state": "Madrid",
                "postalCode": "28013",
                "country": "ES"
            }
        });
        let info: ContactInfo = serde_json::from_value(json).unwrap();
        assert!(info.work_address.is_none());
        assert!(info.home_address.street2.is_none());

        let value = serde_json::to_value(&info).unwrap();
        assert!(value.get("workAddress").is_none());
        assert_eq!(value["homeAddress"]["postalCode"], "28013");
    }
}
