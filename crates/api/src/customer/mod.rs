mod create_customer;
mod delete_customer;
mod get_customer;
mod get_customers;
mod update_customer;

use actix_web::web;
use create_customer::create_customer_controller;
use delete_customer::delete_customer_controller;
use get_customer::get_customer_controller;
use get_customers::get_customers_controller;
use update_customer::update_customer_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/customers", web::get().to(get_customers_controller));
    cfg.route("/customers", web::post().to(create_customer_controller));
    cfg.route(
        "/customers/{customer_id}",
        web::get().to(get_customer_controller),
    );
    cfg.route(
        "/customers/{customer_id}",
        web::put().to(update_customer_controller),
    );
    cfg.route(
        "/customers/{customer_id}",
        web::delete().to(delete_customer_controller),
    );
}
