use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::delete_service::*;
use barbershop_domain::ID;
use barbershop_infra::BarberContext;

pub async fn delete_service_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = DeleteServiceUseCase {
        service_id: path_params.into_inner().service_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Service deleted successfully")))
        .map_err(BarberError::from)
}

/// Deleting a `Service` that does not exist is not an error
#[derive(Debug)]
struct DeleteServiceUseCase {
    service_id: ID,
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
impl UseCase for DeleteServiceUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteService";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .delete(&self.service_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}
