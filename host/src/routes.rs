//! Routes the host answers itself; everything else is the embedded bundle.

use actix_web::web::{self, get, scope};
use actix_web::{HttpResponse, Responder, Scope};
use common::model::config::ClientConfig;

/// The base path for host endpoints.
const API_PATH: &str = "/dashboard";

/// Registered routes:
///
/// *   **`GET /dashboard/config`**: the `ClientConfig` the browser starts with
///     (analytics backend URL and notice lifetime).
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/config", get().to(client_config))
}

async fn client_config(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}
