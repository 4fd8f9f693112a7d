use chrono::Utc;
use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::customer::{Customer, NewCustomer, UpdateCustomer};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};

/// Diesel implementation of [`CustomerReader`] and [`CustomerWriter`].
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Decode a page cursor minted by [`CustomerReader::list_customers`].
///
/// The token carries the identifier of the last customer on the previous
/// page. Anything else is rejected as a typed failure rather than treated as
/// the start of the listing.
fn parse_cursor(cursor: &str) -> RepositoryResult<i32> {
    cursor
        .parse::<i32>()
        .map_err(|_| RepositoryError::InvalidCursor(cursor.to_string()))
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>> {
        use crate::models::customer::{Customer as DbCustomer, CustomerField as DbCustomerField};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;
        let customer = customers::table
            .find(id)
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        match customer {
            Some(customer) => {
                let fields = DbCustomerField::belonging_to(&customer)
                    .load::<DbCustomerField>(&mut conn)?;
                Ok(Some((customer, fields).into()))
            }
            None => Ok(None),
        }
    }

    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(Vec<Customer>, Option<String>)> {
        use crate::models::customer::{Customer as DbCustomer, CustomerField as DbCustomerField};
        use crate::schema::customers;

        let mut conn = self.pool.get()?;

        let after = match query.cursor.as_deref() {
            Some(cursor) => Some(parse_cursor(cursor)?),
            None => None,
        };

        // Fetch one row past the page to learn whether another page exists.
        let mut page = customers::table
            .order(customers::id.asc())
            .limit(query.limit as i64 + 1)
            .into_boxed();
        if let Some(after) = after {
            page = page.filter(customers::id.gt(after));
        }
        let mut rows = page.load::<DbCustomer>(&mut conn)?;

        let next_cursor = if rows.len() > query.limit {
            rows.truncate(query.limit);
            rows.last().map(|row| row.id.to_string())
        } else {
            None
        };

        let fields = DbCustomerField::belonging_to(&rows)
            .load::<DbCustomerField>(&mut conn)?
            .grouped_by(&rows);

        let customers = rows
            .into_iter()
            .zip(fields)
            .map(Into::into)
            .collect::<Vec<Customer>>();

        Ok((customers, next_cursor))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomerField};
        use crate::schema::{customer_fields, customers};

        let mut conn = self.pool.get()?;
        conn.transaction::<Customer, RepositoryError, _>(|conn| {
            let row = diesel::insert_into(customers::table)
                .default_values()
                .get_result::<DbCustomer>(conn)?;

            let insertables: Vec<NewCustomerField> = new_customer
                .fields
                .iter()
                .map(|(field, value)| NewCustomerField {
                    customer_id: row.id,
                    field,
                    value,
                })
                .collect();
            diesel::insert_into(customer_fields::table)
                .values(&insertables)
                .execute(conn)?;

            Ok(Customer {
                id: row.id,
                created_at: row.created_at,
                updated_at: row.updated_at,
                fields: new_customer.fields.clone(),
            })
        })
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::models::customer::{Customer as DbCustomer, NewCustomerField};
        use crate::schema::{customer_fields, customers};

        let mut conn = self.pool.get()?;
        conn.transaction::<Customer, RepositoryError, _>(|conn| {
            // Bumping the timestamp doubles as the existence check: a missing
            // row surfaces as `NotFound` here.
            let row = diesel::update(customers::table.find(customer_id))
                .set(customers::updated_at.eq(Utc::now().naive_utc()))
                .get_result::<DbCustomer>(conn)?;

            diesel::delete(
                customer_fields::table.filter(customer_fields::customer_id.eq(customer_id)),
            )
            .execute(conn)?;

            let insertables: Vec<NewCustomerField> = updates
                .fields
                .iter()
                .map(|(field, value)| NewCustomerField {
                    customer_id: row.id,
                    field,
                    value,
                })
                .collect();
            diesel::insert_into(customer_fields::table)
                .values(&insertables)
                .execute(conn)?;

            Ok(Customer {
                id: row.id,
                created_at: row.created_at,
                updated_at: row.updated_at,
                fields: updates.fields.clone(),
            })
        })
    }

    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()> {
        use crate::schema::{customer_fields, customers};

        let mut conn = self.pool.get()?;
        conn.transaction::<(), RepositoryError, _>(|conn| {
            diesel::delete(
                customer_fields::table.filter(customer_fields::customer_id.eq(customer_id)),
            )
            .execute(conn)?;
            diesel::delete(customers::table.find(customer_id)).execute(conn)?;
            Ok(())
        })
    }
}
