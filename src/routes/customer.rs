use actix_web::{HttpResponse, get, post, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::domain::customer::Customer;
use crate::dto::customer::ListQuery;
use crate::forms::customer::CustomerForm;
use crate::repository::DieselRepository;
use crate::routes::{MOUNT_PATH, RouteError, redirect, render_template};
use crate::services::customer as customer_service;

#[derive(Debug, Deserialize)]
struct ListQueryParams {
    #[serde(rename = "pageToken")]
    page_token: Option<String>,
}

/// The application landing page is the customer list.
#[get("/")]
pub async fn index() -> HttpResponse {
    redirect(MOUNT_PATH)
}

#[get("")]
pub async fn list_customers(
    params: web::Query<ListQueryParams>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, RouteError> {
    let page = customer_service::list_customers(
        repo.get_ref(),
        ListQuery {
            page_token: params.into_inner().page_token,
        },
    )?;

    let mut context = Context::new();
    context.insert("customers", &page.customers);
    context.insert("next_page_token", &page.next_page_token);

    render_template(&tera, "customers/list.html", &context)
}

#[get("/add")]
pub async fn add_customer_form(tera: web::Data<Tera>) -> Result<HttpResponse, RouteError> {
    let mut context = Context::new();
    context.insert("customer", &Customer::default());
    context.insert("action", "Add");

    render_template(&tera, "customers/form.html", &context)
}

#[post("/add")]
pub async fn add_customer(
    web::Form(form): web::Form<CustomerForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, RouteError> {
    let customer = customer_service::create_customer(repo.get_ref(), form)?;

    Ok(redirect(&format!("{MOUNT_PATH}/{}", customer.id)))
}

#[get("/{customer_id}/edit")]
pub async fn edit_customer_form(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, RouteError> {
    let customer = customer_service::get_customer(repo.get_ref(), customer_id.into_inner())?;

    let mut context = Context::new();
    context.insert("customer", &customer);
    context.insert("action", "Edit");

    render_template(&tera, "customers/form.html", &context)
}

#[post("/{customer_id}/edit")]
pub async fn edit_customer(
    customer_id: web::Path<i32>,
    web::Form(form): web::Form<CustomerForm>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, RouteError> {
    let customer =
        customer_service::update_customer(repo.get_ref(), customer_id.into_inner(), form)?;

    // Redirect to the entity the store echoed back, not the raw path segment.
    Ok(redirect(&format!("{MOUNT_PATH}/{}", customer.id)))
}

#[get("/{customer_id}/delete")]
pub async fn delete_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> Result<HttpResponse, RouteError> {
    customer_service::delete_customer(repo.get_ref(), customer_id.into_inner())?;

    Ok(redirect(MOUNT_PATH))
}

#[get("/{customer_id}")]
pub async fn show_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> Result<HttpResponse, RouteError> {
    let customer = customer_service::get_customer(repo.get_ref(), customer_id.into_inner())?;

    let mut context = Context::new();
    context.insert("customer", &customer);

    render_template(&tera, "customers/view.html", &context)
}
