use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::get_service::*;
use barbershop_domain::{Service, ID};
use barbershop_infra::BarberContext;

pub async fn get_service_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = GetServiceUseCase {
        service_id: path_params.into_inner().service_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct GetServiceUseCase {
    service_id: ID,
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
                Self::NotFound(format!("The service with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "GetService";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.services.find(&self.service_id).await {
            Ok(Some(service)) => Ok(service),
            Ok(None) => Err(UseCaseError::NotFound(self.service_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
