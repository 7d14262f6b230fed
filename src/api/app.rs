//! Application factory
//!
//! `run_server` and the integration tests build the app through this
//! function, so both see the same middleware stack and routes.

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    middleware::{Compress, DefaultHeaders},
    web,
};

use crate::api::middleware::RequestIdMiddleware;
use crate::api::services::{LookupService, lookup_routes};
use crate::config::ApiConfig;
use crate::services::LookupGateway;

/// 所有响应都带的缓存控制头
pub const CACHE_CONTROL_VALUE: &str = "no-cache, no-store, must-revalidate";

/// Build the actix `App` with middleware, shared state, routes and the 404 fallback
pub fn build_app(
    gateway: LookupGateway,
    api: ApiConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(RequestIdMiddleware)
        .wrap(Compress::default())
        .wrap(DefaultHeaders::new().add(("Cache-Control", CACHE_CONTROL_VALUE)))
        .app_data(web::Data::new(gateway))
        .app_data(web::Data::new(api))
        .service(lookup_routes())
        .default_service(web::to(LookupService::not_found))
}
