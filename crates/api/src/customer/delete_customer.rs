use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::delete_customer::*;
use barbershop_domain::ID;
use barbershop_infra::BarberContext;

pub async fn delete_customer_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let usecase = DeleteCustomerUseCase {
        customer_id: path_params.into_inner().customer_id,
    };

    execute(usecase, &ctx)
        .await
        .map(|_| HttpResponse::Ok().json(APIResponse::new("Customer deleted successfully")))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct DeleteCustomerUseCase {
    customer_id: ID,
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
impl UseCase for DeleteCustomerUseCase {
    type Response = ();

    type Error = UseCaseError;

    const NAME: &'static str = "DeleteCustomer";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .customers
            .delete(&self.customer_id)
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn deleting_unknown_customers_succeeds() {
        let ctx = BarberContext::create_inmemory();
        let mut usecase = DeleteCustomerUseCase {
            customer_id: ID::new(),
        };
        assert!(usecase.execute(&ctx).await.is_ok());
    }
}
