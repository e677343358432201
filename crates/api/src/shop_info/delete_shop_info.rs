use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::delete_shop_info::*;
use barbershop_domain::ID;
use barbershop_infra::BarberContext;

pub async fn delete_shop_info_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = DeleteShopInfoUseCase {
        shop_info_id: path_params.into_inner().shop_info_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Shop info deleted successfully")))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct DeleteShopInfoUseCase {
    shop_info_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
}

impl From<UseCaseError> for BarberError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteShopInfoUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteShopInfo";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .shop_infos
            .delete(&self.shop_info_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
