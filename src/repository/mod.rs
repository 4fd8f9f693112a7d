use crate::{
    domain::customer::{Customer, NewCustomer, UpdateCustomer},
    repository::errors::RepositoryResult,
};

pub mod customer;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

pub use customer::DieselRepository;

/// Page size used when a list query does not override it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Cursor-driven enumeration of customers.
///
/// The cursor is an opaque token minted by a previous `list_customers` call;
/// callers pass it back unexamined to continue where that page left off.
#[derive(Debug, Clone)]
pub struct CustomerListQuery {
    pub cursor: Option<String>,
    pub limit: usize,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self {
            cursor: None,
            limit: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn cursor(mut self, cursor: impl Into<String>) -> Self {
        self.cursor = Some(cursor.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    /// Returns one page of customers plus the cursor for the next page, or
    /// `None` when enumeration is complete.
    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(Vec<Customer>, Option<String>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer)
    -> RepositoryResult<Customer>;
    fn delete_customer(&self, customer_id: i32) -> RepositoryResult<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_query_defaults_to_first_page() {
        let query = CustomerListQuery::new();
        assert_eq!(query.cursor, None);
        assert_eq!(query.limit, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn list_query_builder_sets_cursor_and_limit() {
        let query = CustomerListQuery::new().cursor("42").limit(5);
        assert_eq!(query.cursor.as_deref(), Some("42"));
        assert_eq!(query.limit, 5);
    }
}
