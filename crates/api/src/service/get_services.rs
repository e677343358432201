use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::{dtos::ServiceDTO, get_services::*};
use barbershop_domain::Service;
use barbershop_infra::BarberContext;

pub async fn get_services_controller(
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let services = execute(GetServicesUseCase {}, &ctx)
        .await
        .map_err(BarberError::from)?;

    let res: APIResponse = services.into_iter().map(ServiceDTO::new).collect();
    pretty_json(StatusCode::OK, &res)
}

#[derive(Debug)]
struct GetServicesUseCase {}

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
impl UseCase for GetServicesUseCase {
    type Response = Vec<Service>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetServices";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .find_all()
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
