use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A stored customer record.
///
/// Customers carry no fixed attribute schema: whatever field names the HTML
/// form submits are persisted as-is in the `fields` map. Only the identifier
/// and timestamps are owned by the store.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    pub fields: HashMap<String, String>,
}

/// Payload for creating a customer. The identifier is assigned by the store.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct NewCustomer {
    pub fields: HashMap<String, String>,
}

/// Payload for updating a customer in place. The stored field map is replaced
/// wholesale with this one; the identifier is preserved.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct UpdateCustomer {
    pub fields: HashMap<String, String>,
}

impl Customer {
    /// Convenience accessor for a single form field.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}
