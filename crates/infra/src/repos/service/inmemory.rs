use super::IServiceRepo;
use crate::repos::shared::inmemory_repo::*;
use barbershop_domain::{NewService, Service, ServicePatch, ID};

pub struct InMemoryServiceRepo {
    services: std::sync::Mutex<Vec<Service>>,
}

impl InMemoryServiceRepo {
    pub fn new() -> Self {
        Self {
            services: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for InMemoryServiceRepo {
    async fn insert(&self, service: NewService) -> anyhow::Result<Service> {
        let service = service.with_id(ID::new());
        insert(&service, &self.services);
        Ok(service)
    }

    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>> {
        Ok(find(service_id, &self.services))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Service>> {
        Ok(find_all(&self.services))
    }

    async fn update(
        &self,
        service_id: &ID,
        patch: &ServicePatch,
    ) -> anyhow::Result<Option<Service>> {
        Ok(update(service_id, &self.services, |service| {
            patch.apply(service)
        }))
    }

    async fn delete(&self, service_id: &ID) -> anyhow::Result<()> {
        delete(service_id, &self.services);
        Ok(())
    }
}
