use crate::{APIResponse, BaseClient};
use barbershop_api_structs::{dtos::ServiceVisitDTO, *};
use barbershop_domain::{ServiceVisit, ID};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct CustomerClient {
    base: Arc<BaseClient>,
}

#[derive(Default)]
pub struct CreateCustomerInput {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub last_visit: String,
    pub services_received: Vec<ServiceVisit>,
}

#[derive(Default)]
pub struct UpdateCustomerInput {
    pub customer_id: ID,
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub last_visit: Option<String>,
    /// Replaces the whole visit history
    pub services_received: Option<Vec<ServiceVisit>>,
}

fn visit_dtos(visits: Vec<ServiceVisit>) -> Vec<ServiceVisitDTO> {
    visits.into_iter().map(ServiceVisitDTO::new).collect()
}

impl CustomerClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_customers::APIResponse> {
        self.base.get("customers".into(), StatusCode::OK).await
    }

    pub async fn get(&self, customer_id: ID) -> APIResponse<get_customer::APIResponse> {
        self.base
            .get(format!("customers/{}", customer_id), StatusCode::OK)
            .await
    }

    pub async fn create(
        &self,
        input: CreateCustomerInput,
    ) -> APIResponse<create_customer::APIResponse> {
        let body = create_customer::RequestBody {
            name: input.name,
            phone: input.phone,
            email: input.email,
            last_visit: input.last_visit,
            services_received: visit_dtos(input.services_received),
        };
        self.base
            .post(body, "customers".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update(
        &self,
        input: UpdateCustomerInput,
    ) -> APIResponse<update_customer::APIResponse> {
        let body = update_customer::RequestBody {
            name: input.name,
            phone: input.phone,
            email: input.email,
            last_visit: input.last_visit,
            services_received: input.services_received.map(visit_dtos),
        };
        self.base
            .put(
                body,
                format!("customers/{}", input.customer_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn delete(&self, customer_id: ID) -> APIResponse<delete_customer::APIResponse> {
        self.base
            .delete(format!("customers/{}", customer_id), StatusCode::OK)
            .await
    }
}
