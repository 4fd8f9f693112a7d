use std::collections::HashMap;

use serde::Deserialize;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

/// URL-encoded form body of the add/edit pages.
///
/// The form has no fixed schema: every submitted field name becomes a stored
/// customer field, verbatim. Nested or repeated keys are not supported.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct CustomerForm {
    pub fields: HashMap<String, String>,
}

impl From<CustomerForm> for NewCustomer {
    fn from(form: CustomerForm) -> Self {
        Self {
            fields: form.fields,
        }
    }
}

impl From<CustomerForm> for UpdateCustomer {
    fn from(form: CustomerForm) -> Self {
        Self {
            fields: form.fields,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_fields_pass_through_unmodified() {
        let form = CustomerForm {
            fields: HashMap::from([
                ("name".to_string(), "  Acme  ".to_string()),
                ("notes".to_string(), String::new()),
            ]),
        };

        let new_customer: NewCustomer = CustomerForm {
            fields: form.fields.clone(),
        }
        .into();
        assert_eq!(new_customer.fields, form.fields);

        let updates: UpdateCustomer = form.into();
        assert_eq!(updates.fields.get("name").map(String::as_str), Some("  Acme  "));
        assert_eq!(updates.fields.get("notes").map(String::as_str), Some(""));
    }

    #[test]
    fn form_decodes_from_urlencoded_body() {
        let form: CustomerForm =
            serde_urlencoded::from_str("name=Acme&email=acme%40example.com").unwrap();
        assert_eq!(form.fields.get("name").map(String::as_str), Some("Acme"));
        assert_eq!(
            form.fields.get("email").map(String::as_str),
            Some("acme@example.com")
        );
    }
}
