use crate::{
    error::BarberError,
    shared::{
        pretty_json,
        usecase::{execute, UseCase},
    },
};
use actix_web::{http::StatusCode, web, HttpResponse};
use barbershop_api_structs::create_service::*;
use barbershop_domain::{NewService, Service};
use barbershop_infra::BarberContext;

pub async fn create_service_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = CreateServiceUseCase {
        service: NewService {
            name: body.name,
            price: body.price,
            duration_minutes: body.duration_minutes,
        },
    };

    let service = execute(usecase, &ctx).await.map_err(BarberError::from)?;
    pretty_json(StatusCode::CREATED, &APIResponse::new(service))
}

#[derive(Debug)]
struct CreateServiceUseCase {
    service: NewService,
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
impl UseCase for CreateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateService";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        ctx.repos
            .services
            .insert(self.service.clone())
            .await
            .map_err(|_| UseCaseError::StorageError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn it_creates_a_retrievable_service() {
        let ctx = BarberContext::create_inmemory();
        let mut usecase = CreateServiceUseCase {
            service: NewService {
                name: "Haircut".into(),
                price: 20,
                duration_minutes: 30,
            },
        };

        let service = usecase.execute(&ctx).await.unwrap();
        assert!(!service.id.as_string().is_empty());
        assert_eq!(
            ctx.repos.services.find(&service.id).await.unwrap(),
            Some(service)
        );
    }
}
