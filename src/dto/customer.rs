use crate::domain::customer::Customer;

/// Query parameters accepted by the customer list service.
#[derive(Debug, Default)]
pub struct ListQuery {
    /// Opaque cursor returned by a previous page, passed through unexamined.
    pub page_token: Option<String>,
}

/// Data required to render the customer list template.
pub struct CustomerListPage {
    /// Customers on the current page.
    pub customers: Vec<Customer>,
    /// Cursor for the next page when more customers remain.
    pub next_page_token: Option<String>,
}
