use std::collections::HashMap;

use customer_crm::domain::customer::{NewCustomer, UpdateCustomer};
use customer_crm::repository::errors::RepositoryError;
use customer_crm::repository::{
    CustomerListQuery, CustomerReader, CustomerWriter, DieselRepository,
};

mod common;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn test_customer_repository_crud() {
    let test_db = common::TestDb::new("test_customer_repository_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let alice = repo
        .create_customer(&NewCustomer {
            fields: fields(&[("name", "Alice"), ("email", "alice@example.com")]),
        })
        .unwrap();
    assert!(alice.id > 0);
    assert_eq!(alice.field("name"), Some("Alice"));

    let bob = repo
        .create_customer(&NewCustomer {
            fields: fields(&[("name", "Bob"), ("phone", "222")]),
        })
        .unwrap();
    assert!(bob.id > alice.id);

    let read_back = repo.get_customer_by_id(alice.id).unwrap().unwrap();
    assert_eq!(read_back.id, alice.id);
    assert_eq!(read_back.fields, alice.fields);

    // The update replaces the field map wholesale: `phone` disappears.
    let updated = repo
        .update_customer(
            bob.id,
            &UpdateCustomer {
                fields: fields(&[("name", "Bobby"), ("address", "Addr2")]),
            },
        )
        .unwrap();
    assert_eq!(updated.id, bob.id);
    assert_eq!(updated.field("name"), Some("Bobby"));

    let read_back = repo.get_customer_by_id(bob.id).unwrap().unwrap();
    assert_eq!(
        read_back.fields,
        fields(&[("name", "Bobby"), ("address", "Addr2")])
    );
    assert_eq!(read_back.created_at, bob.created_at);

    repo.delete_customer(alice.id).unwrap();
    assert!(repo.get_customer_by_id(alice.id).unwrap().is_none());

    let (remaining, next) = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].field("name"), Some("Bobby"));
    assert!(next.is_none());
}

#[test]
fn test_update_missing_customer_is_not_found() {
    let test_db = common::TestDb::new("test_update_missing_customer.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo
        .update_customer(
            999,
            &UpdateCustomer {
                fields: fields(&[("name", "Ghost")]),
            },
        )
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn test_delete_missing_customer_is_silent() {
    let test_db = common::TestDb::new("test_delete_missing_customer.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    assert!(repo.delete_customer(999).is_ok());
}

#[test]
fn test_list_customers_pages_with_cursor() {
    let test_db = common::TestDb::new("test_list_customers_pages.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..11 {
        repo.create_customer(&NewCustomer {
            fields: fields(&[("name", &format!("Customer {i}"))]),
        })
        .unwrap();
    }

    let (first_page, cursor) = repo.list_customers(CustomerListQuery::new()).unwrap();
    assert_eq!(first_page.len(), 10);
    let cursor = cursor.expect("a second page exists");
    assert_eq!(cursor, first_page.last().unwrap().id.to_string());

    let (second_page, end) = repo
        .list_customers(CustomerListQuery::new().cursor(cursor))
        .unwrap();
    assert_eq!(second_page.len(), 1);
    assert!(end.is_none());
    assert!(second_page[0].id > first_page.last().unwrap().id);
}

#[test]
fn test_list_customers_respects_custom_limit() {
    let test_db = common::TestDb::new("test_list_customers_limit.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    for i in 0..3 {
        repo.create_customer(&NewCustomer {
            fields: fields(&[("name", &format!("Customer {i}"))]),
        })
        .unwrap();
    }

    let (page, cursor) = repo
        .list_customers(CustomerListQuery::new().limit(2))
        .unwrap();
    assert_eq!(page.len(), 2);
    assert!(cursor.is_some());
}

#[test]
fn test_list_customers_rejects_malformed_cursor() {
    let test_db = common::TestDb::new("test_list_malformed_cursor.db");
    let repo = DieselRepository::new(test_db.pool().clone());

    let err = repo
        .list_customers(CustomerListQuery::new().cursor("bogus"))
        .unwrap_err();
    assert!(matches!(err, RepositoryError::InvalidCursor(ref c) if c == "bogus"));
}
