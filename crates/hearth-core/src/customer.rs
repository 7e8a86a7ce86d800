//! # Customer
//!
//! Contact identity captured once, at checkout.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::validation::{validate_customer_name, validate_email, validate_phone, ValidationResult};

/// A customer whose every field passed validation.
///
/// Fields are private so a `Customer` can only come from [`Customer::new`].
/// Deserialization goes through the same validators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CustomerRecord")]
pub struct Customer {
    name: String,
    phone: String,
    email: String,
}

/// Unchecked wire shape of a customer.
#[derive(Debug, Deserialize)]
struct CustomerRecord {
    name: String,
    phone: String,
    email: String,
}

impl TryFrom<CustomerRecord> for Customer {
    type Error = ValidationError;

    fn try_from(record: CustomerRecord) -> ValidationResult<Self> {
        Customer::new(&record.name, &record.phone, &record.email)
    }
}

impl Customer {
    /// Validates and assembles a customer.
    ///
    /// ## Example
    /// ```rust
    /// use hearth_core::Customer;
    ///
    /// let customer = Customer::new("Bob", "9876543210", "bob@pizza.example").unwrap();
    /// assert_eq!(customer.phone(), "9876543210");
    ///
    /// assert!(Customer::new("Bob3", "9876543210", "bob@pizza.example").is_err());
    /// ```
    pub fn new(name: &str, phone: &str, email: &str) -> ValidationResult<Self> {
        Ok(Customer {
            name: validate_customer_name(name)?,
            phone: validate_phone(phone)?,
            email: validate_email(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let customer = Customer::new("  Meera ", " 9876543210 ", " meera@b ").unwrap();
        assert_eq!(customer.name(), "Meera");
        assert_eq!(customer.phone(), "9876543210");
        assert_eq!(customer.email(), "meera@b");
    }

    #[test]
    fn test_new_rejects_any_bad_field() {
        assert!(Customer::new("Meera", "12345", "meera@b").is_err());
        assert!(Customer::new("Meera", "9876543210", "meera").is_err());
        assert!(Customer::new("", "9876543210", "meera@b").is_err());
    }

    #[test]
    fn test_deserialize_runs_validators() {
        let customer: Customer = serde_json::from_str(
            r#"{"name":" Bob ","phone":"9876543210","email":"bob@example.com"}"#,
        )
        .unwrap();
        assert_eq!(customer.name(), "Bob");

        let bad_name = r#"{"name":"Bob3","phone":"9876543210","email":"bob@example.com"}"#;
        assert!(serde_json::from_str::<Customer>(bad_name).is_err());

        let bad_phone = r#"{"name":"Bob","phone":"12","email":"bob@example.com"}"#;
        assert!(serde_json::from_str::<Customer>(bad_phone).is_err());
    }
}
