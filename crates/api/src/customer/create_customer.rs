use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::create_customer::*;
use barbershop_domain::{Customer, NewCustomer};
use barbershop_infra::BarberContext;

pub async fn create_customer_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = CreateCustomerUseCase {
        customer: NewCustomer {
            name: body.name,
            phone: body.phone,
            email: body.email,
            last_visit: body.last_visit,
            services_received: body.services_received.into_iter().map(Into::into).collect(),
        },
    };

    let customer = execute(usecase, &ctx).await.map_err(BarberError::from)?;
    pretty_json(StatusCode::CREATED, &APIResponse::new(customer))
}

#[derive(Debug)]
struct CreateCustomerUseCase {
    customer: NewCustomer,
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
impl UseCase for CreateCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateCustomer";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .customers
            .insert(self.customer.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
