use crate::{
    error::BarberError,
    shared::usecase::{execute, UseCase},
};
use actix_web::{web, HttpResponse};
use barbershop_api_structs::update_service::*;
use barbershop_domain::{Service, ServicePatch, ID};
use barbershop_infra::BarberContext;

pub async fn update_service_controller(
    body: web::Json<RequestBody>,
    path: web::Path<PathParams>,
    ctx: web::Data<BarberContext>,
) -> Result<HttpResponse, BarberError> {
    let body = body.into_inner();
    let usecase = UpdateServiceUseCase {
        service_id: path.into_inner().service_id,
        patch: ServicePatch {
            name: body.name,
            price: body.price,
            duration_minutes: body.duration_minutes,
        },
    };

    execute(usecase, &ctx)
        .await
        .map(|service| HttpResponse::Ok().json(APIResponse::new(service)))
        .map_err(BarberError::from)
}

#[derive(Debug)]
struct UpdateServiceUseCase {
    service_id: ID,
    patch: ServicePatch,
}

#[derive(Debug)]
enum UseCaseError {
    StorageError,
    ServiceNotFound(ID),
}

impl From<UseCaseError> for BarberError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::ServiceNotFound(id) => {
                Self::NotFound(format!("Service with id: {} was not found.", id))
            }
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateServiceUseCase {
    type Response = Service;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateService";

    async fn execute(&mut self, ctx: &BarberContext) -> Result<Self::Response, Self::Error> {
        match ctx
            .repos
            .services
            .update(&self.service_id, &self.patch)
            .await
        {
            Ok(Some(service)) => Ok(service),
            Ok(None) => Err(UseCaseError::ServiceNotFound(self.service_id.clone())),
            Err(_) => Err(UseCaseError::StorageError),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barbershop_domain::NewService;

    #[actix_web::test]
    async fn it_keeps_fields_that_are_not_given() {
        let ctx = BarberContext::create_inmemory();
        let service = ctx
            .repos
            .services
            .insert(NewService {
                name: "Haircut".into(),
                price: 20,
                duration_minutes: 30,
            })
            .await
            .unwrap();

        let mut usecase = UpdateServiceUseCase {
            service_id: service.id.clone(),
            patch: ServicePatch {
                duration_minutes: Some(45),
                ..Default::default()
            },
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(
            updated,
            Service {
                duration_minutes: 45,
                ..service
            }
        );
    }

    #[actix_web::test]
    async fn it_rejects_unknown_services() {
        let ctx = BarberContext::create_inmemory();
        let mut usecase = UpdateServiceUseCase {
            service_id: ID::new(),
            patch: ServicePatch::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await,
            Err(UseCaseError::ServiceNotFound(_))
        ));
    }
}
