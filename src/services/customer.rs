use crate::domain::customer::Customer;
use crate::dto::customer::{CustomerListPage, ListQuery};
use crate::forms::customer::CustomerForm;
use crate::repository::{CustomerListQuery, CustomerReader, CustomerWriter};
use crate::services::{ServiceError, ServiceResult};

/// Loads one page of customers for the list view.
///
/// An absent page token starts the listing from the beginning; a present one
/// is handed to the store unchanged.
pub fn list_customers<R>(repo: &R, query: ListQuery) -> ServiceResult<CustomerListPage>
where
    R: CustomerReader + ?Sized,
{
    let mut list_query = CustomerListQuery::new();
    if let Some(token) = query.page_token {
        list_query = list_query.cursor(token);
    }

    let (customers, next_page_token) = repo.list_customers(list_query)?;

    Ok(CustomerListPage {
        customers,
        next_page_token,
    })
}

/// Persists a new customer from the decoded form body. The store assigns the
/// identifier and echoes the saved entity back.
pub fn create_customer<R>(repo: &R, form: CustomerForm) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.create_customer(&form.into())
        .map_err(ServiceError::from)
}

/// Fetches a customer by its identifier. A missing customer is a typed
/// failure, not an empty result.
pub fn get_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)?
        .ok_or(ServiceError::NotFound)
}

/// Replaces the customer's field map with the decoded form body.
pub fn update_customer<R>(
    repo: &R,
    customer_id: i32,
    form: CustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    repo.update_customer(customer_id, &form.into())
        .map_err(ServiceError::from)
}

/// Removes a customer and its fields.
pub fn delete_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerWriter + ?Sized,
{
    repo.delete_customer(customer_id)
        .map_err(ServiceError::from)
}
