use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::update_shop_info::*;
use barbershop_domain::{ShopInfo, ShopInfoPatch, ID};
use barbershop_infra::BarberContext;

pub async fn update_shop_info_controller(
    body: web::Json<RequestBody>,
    path: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = UpdateShopInfoUseCase {
        shop_info_id: path.into_inner().shop_info_id,
        patch: ShopInfoPatch {
            name: body.name,
            address: body.address,
            phone: body.phone,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|shop_info| HttpResponse::Ok().json(APIResponse::new(shop_info)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct UpdateShopInfoUseCase {
    shop_info_id: ID,
    patch: ShopInfoPatch,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    ShopInfoNotFound(ID),
}

impl From<UseCaseError> for BarberError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ShopInfoNotFound(id) => {
                Self::NotFound(format!("Shop info with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateShopInfoUseCase {
    type Response = ShopInfo;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateShopInfo";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .shop_infos
            .update(&self.shop_info_id, &self.patch)
            .await
        {
            Ok(Some(shop_info)) => Ok(shop_info),
            Ok(None) => Err(UseCaseError::ShopInfoNotFound(self.shop_info_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn an_empty_patch_still_reports_unknown_ids() {
        let ctx = BarberContext::create_inmemory();
        let mut usecase = UpdateShopInfoUseCase {
            shop_info_id: ID::new(),
            patch: ShopInfoPatch::default(),
        };
        let res = usecase.execute(&ctx).await;
        assert!(matches!(res, Err(UseCaseError::ShopInfoNotFound(_))));
    }
}
