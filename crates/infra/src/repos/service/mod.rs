mod inmemory;
mod mongo;

pub use inmemory::InMemoryServiceRepo;
pub use mongo::MongoServiceRepo;
use barbershop_domain::{NewService, Service, ServicePatch, ID};

#[async_trait::async_trait]
pub trait IServiceRepo: Send + Sync {
    /// Stores the `Service` under a newly assigned `ID`
    async fn insert(&self, service: NewService) -> anyhow::Result<Service>;
    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>>;
    async fn find_all(&self) -> anyhow::Result<Vec<Service>>;
    /// Returns `None` if there is no `Service` with the given id
    async fn update(&self, service_id: &ID, patch: &ServicePatch)
        -> anyhow::Result<Option<Service>>;
    async fn delete(&self, service_id: &ID) -> anyhow::Result<()>;
}
