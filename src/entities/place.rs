use serde::{Deserialize, Serialize};

use crate::error::{validation_error, Error};

// All fields take their zero value when absent from a payload, so update is a
// full replacement: omitting description clears it. The store assigns id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
}

impl Place {
    pub fn validate(&self) -> Result<(), Error> {
        if self.name.is_empty() {
            return Err(validation_error("name is required"));
        }

        if self.name.len() > 100 {
            return Err(validation_error("name cannot exceed 100 characters"));
        }

        if self.address.is_empty() {
            return Err(validation_error("address is required"));
        }

        if self.address.len() > 200 {
            return Err(validation_error("address cannot exceed 200 characters"));
        }

        if self.description.len() > 500 {
            return Err(validation_error("description cannot exceed 500 characters"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(name: &str, address: &str, description: &str) -> Place {
        Place {
            id: 0,
            name: name.into(),
            address: address.into(),
            description: description.into(),
        }
    }

    #[test]
    fn accepts_fields_at_their_limits() {
        let p = place(&"n".repeat(100), &"a".repeat(200), &"d".repeat(500));

        assert!(p.validate().is_ok());
    }

    #[test]
    fn accepts_empty_description() {
        let p = place("Park", "1 Main St", "");

        assert!(p.validate().is_ok());
    }

    #[test]
    fn rejects_empty_name() {
        let err = place("", "1 Main St", "").validate().unwrap_err();

        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn rejects_name_over_limit() {
        let err = place(&"n".repeat(101), "1 Main St", "")
            .validate()
            .unwrap_err();

        assert_eq!(err.message, "name cannot exceed 100 characters");
    }

    #[test]
    fn rejects_empty_address() {
        let err = place("Park", "", "").validate().unwrap_err();

        assert_eq!(err.message, "address is required");
    }

    #[test]
    fn rejects_address_over_limit() {
        let err = place("Park", &"a".repeat(201), "").validate().unwrap_err();

        assert_eq!(err.message, "address cannot exceed 200 characters");
    }

    #[test]
    fn rejects_description_over_limit() {
        let err = place("Park", "1 Main St", &"d".repeat(501))
            .validate()
            .unwrap_err();

        assert_eq!(err.message, "description cannot exceed 500 characters");
    }

    #[test]
    fn first_failing_rule_wins() {
        let err = place("", &"a".repeat(201), &"d".repeat(501))
            .validate()
            .unwrap_err();

        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn omitted_fields_decode_to_zero_values() {
        let p: Place = serde_json::from_str(r#"{"name":"Park","address":"1 Main St"}"#).unwrap();

        assert_eq!(p.id, 0);
        assert_eq!(p.description, "");
    }
}
