use crate::{APIResponse, BaseClient};
use barbershop_api_structs::*;
use barbershop_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ServiceClient {
    base: Arc<BaseClient>,
}

pub struct CreateServiceInput {
    pub name: String,
    pub price: i64,
    pub duration_minutes: i64,
}

#[derive(Default)]
pub struct UpdateServiceInput {
    pub service_id: ID,
    pub name: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i64>,
}

impl ServiceClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_services::APIResponse> {
        self.base.get("services".into(), StatusCode::OK).await
    }

    pub async fn get(&self, service_id: ID) -> APIResponse<get_service::APIResponse> {
        self.base
            .get(format!("services/{}", service_id), StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateServiceInput,
    ) -> APIResponse<create_service::APIResponse> {
        let body = create_service::RequestBody {
            name: input.name,
            price: input.price,
            duration_minutes: input.duration_minutes,
        };
        self.base
            .post(body, "services".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateServiceInput,
    ) -> APIResponse<update_service::APIResponse> {
        let body = update_service::RequestBody {
            name: input.name,
            price: input.price,
            duration_minutes: input.duration_minutes,
        };
        self.base
            .put(
                body,
                format!("services/{}", input.service_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, service_id: ID) -> APIResponse<delete_service::APIResponse> {
        self.base
            .delete(format!("services/{}", service_id), StatusCode::OK)
            .await
    }
}
