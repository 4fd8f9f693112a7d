use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::Customer as DomainCustomer;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::customer_fields)]
#[diesel(belongs_to(Customer, foreign_key = customer_id))]
#[diesel(primary_key(customer_id, field))]
/// One form field of a customer, stored as a key/value row.
pub struct CustomerField {
    pub customer_id: i32,
    pub field: String,
    pub value: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customer_fields)]
/// Insertable form of [`CustomerField`].
pub struct NewCustomerField<'a> {
    pub customer_id: i32,
    pub field: &'a str,
    pub value: &'a str,
}

impl From<(Customer, Vec<CustomerField>)> for DomainCustomer {
    fn from((customer, fields): (Customer, Vec<CustomerField>)) -> Self {
        Self {
            id: customer.id,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            fields: fields.into_iter().map(|f| (f.field, f.value)).collect(),
        }
    }
}
