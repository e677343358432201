use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::{dtos::CustomerDTO, get_customers::*};
use barbershop_domain::Customer;
use barbershop_infra::BarberContext;

pub async fn get_customers_controller(
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let customers = execute(GetCustomersUseCase {}, &ctx)
        .await
        .map_err(BarberError::from)?;

    let res: APIResponse = customers.into_iter().map(CustomerDTO::new).collect();
    pretty_json(StatusCode::OK, &res)
}

#[derive(Debug)]
struct GetCustomersUseCase {}

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
impl UseCase for GetCustomersUseCase {
    type Response = Vec<Customer>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCustomers";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .customers
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
