use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::{dtos::ShopInfoDTO, get_shop_infos::*};
use barbershop_domain::ShopInfo;
use barbershop_infra::BarberContext;

pub async fn get_shop_infos_controller(
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let shop_infos = execute(GetShopInfosUseCase {}, &ctx)
        .await
        .map_err(BarberError::from)?;

    let res: APIResponse = shop_infos.into_iter().map(ShopInfoDTO::new).collect();
    pretty_json(StatusCode::OK, &res)
}

#[derive(Debug)]
struct GetShopInfosUseCase {}

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
impl UseCase for GetShopInfosUseCase {
    type Response = Vec<ShopInfo>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetShopInfos";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .shop_infos
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbershop_domain::NewShopInfo;

    #[actix_web::test]
    async fn it_lists_every_shop_info() {
        let ctx = BarberContext::create_inmemory();
        let mut usecase = GetShopInfosUseCase {};
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());

        for name in ["Centro", "Norte"] {
            ctx.repos
                .shop_infos
                .insert(NewShopInfo {
                    name: name.into(),
                    ..Default::default()
                })
                .await
                .unwrap();
        }
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 2);
    }
}
