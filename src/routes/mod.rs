use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, ResponseError};
use tera::{Context, Tera};
use thiserror::Error;

use crate::services::ServiceError;

pub mod customer;

/// Base path the customer router is mounted under. Redirect targets are built
/// from this constant so they stay in sync with the route registration.
pub const MOUNT_PATH: &str = "/customers";

/// Terminal error stage for the router.
///
/// Handlers never render failure bodies themselves; they bubble errors up via
/// `?` and this type logs each one once and turns its display message into
/// the HTML response.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("{0}")]
    Service(#[from] ServiceError),

    #[error("Template error: {0}")]
    Render(#[from] tera::Error),
}

impl ResponseError for RouteError {
    fn status_code(&self) -> StatusCode {
        match self {
            RouteError::Service(ServiceError::NotFound) => StatusCode::NOT_FOUND,
            RouteError::Service(ServiceError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Request failed: {self}");
        HttpResponse::build(self.status_code())
            .content_type(header::ContentType::html())
            .body(self.to_string())
    }
}

/// Issue a `303 See Other` to the given location.
pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .content_type(header::ContentType::html())
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Render a Tera template into a `text/html` response.
pub fn render_template(
    tera: &Tera,
    name: &str,
    context: &Context,
) -> Result<HttpResponse, RouteError> {
    let body = tera.render(name, context)?;
    Ok(HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body))
}
