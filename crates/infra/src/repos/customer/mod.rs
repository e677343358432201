mod inmemory;
mod mongo;

pub use inmemory::InMemoryCustomerRepo;
pub use mongo::MongoCustomerRepo;

use super::service::IServiceRepo;
use barbershop_domain::{Customer, CustomerPatch, NewCustomer, Service, ServiceVisit, ID};

#[async_trait::async_trait]
pub trait ICustomerRepo: Send + Sync {
    async fn insert(&self, customer: NewCustomer) -> anyhow::Result<Customer>;
    async fn find(&self, customer_id: &ID) -> anyhow::Result<Option<Customer>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Customer>>;
    async fn update(
        &self,
        customer_id: &ID,
        patch: &CustomerPatch,
    ) -> anyhow::Result<Option<Customer>>;
    async fn delete(&self, customer_id: &ID) -> anyhow::Result<()>;
}

/// Looks up the `Service` a visit refers to. `None` means that the
/// `Service` has been deleted after the visit was recorded.
pub async fn resolve_visited_service(
    visit: &ServiceVisit,
    services: &dyn IServiceRepo,
) -> anyhow::Result<Option<Service>> {
    services.find(&visit.service_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_contexts as create_contexts;
    use barbershop_domain::NewService;

    fn new_customer(services_received: Vec<ServiceVisit>) -> NewCustomer {
        NewCustomer {
            name: "Ana".into(),
            phone: "555-0101".into(),
            email: "ana@example.com".into(),
            last_visit: "2023-01-10".into(),
            services_received,
        }
    }

    #[tokio::test]
    async fn crud() {
        for ctx in create_contexts().await {
            let customers = &ctx.repos.customers;
            let visit = ServiceVisit {
                service_id: ID::new(),
                date: "2023-01-10".into(),
            };
            let customer = customers
                .insert(new_customer(vec![visit.clone()]))
                .await
                .unwrap();
            assert_eq!(customer.services_received, vec![visit]);
            assert_eq!(
                customers.find(&customer.id).await.unwrap(),
                Some(customer.clone())
            );

            let patch = CustomerPatch {
                name: Some("Ana Maria".into()),
                ..Default::default()
            };
            let updated = customers
                .update(&customer.id, &patch)
                .await
                .unwrap()
                .expect("To find the customer just inserted");
            assert_eq!(
                updated,
                Customer {
                    name: "Ana Maria".into(),
                    ..customer.clone()
                }
            );

            assert!(customers.delete(&customer.id).await.is_ok());
            assert!(matches!(customers.find(&customer.id).await, Ok(None)));
        }
    }

    #[tokio::test]
    async fn visits_survive_deleted_services() {
        for ctx in create_contexts().await {
            let services = &ctx.repos.services;
            let service = services
                .insert(NewService {
                    name: "Haircut".into(),
                    price: 20,
                    duration_minutes: 30,
                })
                .await
                .unwrap();
            let visit = ServiceVisit {
                service_id: service.id.clone(),
                date: "2023-03-01".into(),
            };
            let customer = ctx
                .repos
                .customers
                .insert(new_customer(vec![visit.clone()]))
                .await
                .unwrap();

            let resolved = resolve_visited_service(&visit, services.as_ref())
                .await
                .unwrap();
            assert_eq!(resolved, Some(service.clone()));

            services.delete(&service.id).await.unwrap();

            let resolved = resolve_visited_service(&visit, services.as_ref())
                .await
                .unwrap();
            assert_eq!(resolved, None);
            let customer = ctx
                .repos
                .customers
                .find(&customer.id)
                .await
                .unwrap()
                .expect("Customer to be untouched by the service deletion");
            assert_eq!(customer.services_received, vec![visit]);
        }
    }
}
