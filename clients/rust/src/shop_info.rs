use crate::{APIResponse, BaseClient};
use barbershop_api_structs::*;
use barbershop_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ShopInfoClient {
    base: Arc<BaseClient>,
}

pub struct CreateShopInfoInput {
    pub name: String,
    pub address: String,
    pub phone: String,
}

#[derive(Default)]
pub struct UpdateShopInfoInput {
    pub shop_info_id: ID,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl ShopInfoClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_shop_infos::APIResponse> {
        self.base.get("datos".into(), StatusCode::OK).await
    }

    pub async fn get(&self, shop_info_id: ID) -> APIResponse<get_shop_info::APIResponse> {
        self.base
            .get(format!("datos/{}", shop_info_id), StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateShopInfoInput,
    ) -> APIResponse<create_shop_info::APIResponse> {
        let body = create_shop_info::RequestBody {
            name: input.name,
            address: input.address,
            phone: input.phone,
        };
        self.base
            .post(body, "datos".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateShopInfoInput,
    ) -> APIResponse<update_shop_info::APIResponse> {
        let body = update_shop_info::RequestBody {
            name: input.name,
            address: input.address,
            phone: input.phone,
        };
        self.base
            .put(
                body,
                format!("datos/{}", input.shop_info_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, shop_info_id: ID) -> APIResponse<delete_shop_info::APIResponse> {
        self.base
            .delete(format!("datos/{}", shop_info_id), StatusCode::OK)
            .await
    }
}
