//! Test service builder: given an AppState, build an initialized Actix test service.

use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{web, App, Error as ActixError};

use crate::middleware::{RequestTrace, StructuredLogger};
use crate::state::app_state::AppState;

/// Production routes and middleware around `state`.
///
/// Return type is `impl Service<...>` so callers don't have to name the opaque service type.
pub async fn create_test_app(
    state: AppState,
) -> impl Service<actix_http::Request, Response = ServiceResponse<BoxBody>, Error = ActixError> {
    let app = App::new()
        .wrap(StructuredLogger)
        .wrap(RequestTrace)
        .app_data(web::Data::new(state))
        .configure(crate::routes::configure);

    actix_web::test::init_service(app).await
}
