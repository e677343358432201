use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::update_customer::*;
use barbershop_domain::{Customer, CustomerPatch, ID};
use barbershop_infra::BarberContext;

pub async fn update_customer_controller(
    body: web::Json<RequestBody>,
    path: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = UpdateCustomerUseCase {
        customer_id: path.into_inner().customer_id,
        patch: CustomerPatch {
            name: body.name,
            phone: body.phone,
            email: body.email,
            last_visit: body.last_visit,
            services_received: body
                .services_received
                .map(|visits| visits.into_iter().map(Into::into).collect()),
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|customer| HttpResponse::Ok().json(APIResponse::new(customer)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct UpdateCustomerUseCase {
    customer_id: ID,
    patch: CustomerPatch,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    CustomerNotFound(ID),
}

impl From<UseCaseError> for BarberError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::CustomerNotFound(id) => {
                Self::NotFound(format!("Customer with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateCustomerUseCase {
    type Response = Customer;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateCustomer";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .customers
            .update(&self.customer_id, &self.patch)
            .await
        {
            Ok(Some(customer)) => Ok(customer),
            Ok(None) => Err(UseCaseError::CustomerNotFound(self.customer_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}
