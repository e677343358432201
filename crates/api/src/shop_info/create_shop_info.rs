use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::create_shop_info::*;
use barbershop_domain::{NewShopInfo, ShopInfo};
use barbershop_infra::BarberContext;

pub async fn create_shop_info_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = CreateShopInfoUseCase {
        shop_info: NewShopInfo {
            name: body.name,
            address: body.address,
            phone: body.phone,
        },
    };

    let shop_info = execute(usecase, &ctx).await.map_err(BarberError::from)?;
    pretty_json(StatusCode::CREATED, &APIResponse::new(shop_info))
}

#[derive(Debug)]
struct CreateShopInfoUseCase {
    shop_info: NewShopInfo,
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
impl UseCase for CreateShopInfoUseCase {
    type Response = ShopInfo;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateShopInfo";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .shop_infos
            .insert(self.shop_info.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
