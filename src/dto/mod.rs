//! Data shapes passed from the service layer to the templates.

pub mod customer;
