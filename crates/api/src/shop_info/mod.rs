mod create_shop_info;
mod delete_shop_info;
mod get_shop_info;
mod get_shop_infos;
mod update_shop_info;

use actix_web::web;
use create_shop_info::create_shop_info_controller;
use delete_shop_info::delete_shop_info_controller;
use get_shop_info::get_shop_info_controller;
use get_shop_infos::get_shop_infos_controller;
use update_shop_info::update_shop_info_controller;

// The shop info collection is served under `/datos`, the path existing
// clients already call.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/datos", web::get().to(get_shop_infos_controller));
    cfg.route("/datos", web::post().to(create_shop_info_controller));
    cfg.route(
        "/datos/{shop_info_id}",
        web::get().to(get_shop_info_controller),
    );
    cfg.route(
        "/datos/{shop_info_id}",
        web::put().to(update_shop_info_controller),
    );
    cfg.route(
        "/datos/{shop_info_id}",
        web::delete().to(delete_shop_info_controller),
    );
}
