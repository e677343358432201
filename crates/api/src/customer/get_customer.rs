use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::get_customer::*;
use barbershop_domain::{Customer, ID};
use barbershop_infra::BarberContext;

pub async fn get_customer_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = GetCustomerUseCase {
        customer_id: path_params.into_inner().customer_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct GetCustomerUseCase {
    customer_id: ID,
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
                Self::NotFound(format!("The customer with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "GetCustomer";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx.repos.customers.find(&self.customer_id).await {
            Ok(Some(customer)) => Ok(customer),
            Ok(None) => Err(UseCaseError::NotFound(self.customer_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
