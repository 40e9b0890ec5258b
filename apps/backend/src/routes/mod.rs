use actix_web::web;

pub mod root;

/// Register every application route. Shared by `main.rs` and the test app builder.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(root::configure_routes);
}
