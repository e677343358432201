use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::get_shop_info::*;
use barbershop_domain::{ShopInfo, ID};
use barbershop_infra::BarberContext;

pub async fn get_shop_info_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = GetShopInfoUseCase {
        shop_info_id: path_params.into_inner().shop_info_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|shop_info| HttpResponse::Ok().json(APIResponse::new(shop_info)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct GetShopInfoUseCase {
    shop_info_id: ID,
}

#[derive(Debug)]
enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for BarberError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(id) => {
                Self::NotFound(format!("The shop info with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetShopInfoUseCase {
    type Response = ShopInfo;

    type Error = UseCaseError;

    const NAME: &'static str = "GetShopInfo";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.shop_infos.find(&self.shop_info_id).await {
            Ok(Some(shop_info)) => Ok(shop_info),
            Ok(None) => Err(UseCaseError::NotFound(self.shop_info_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
