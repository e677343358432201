use super::ICustomerRepo;
use crate::repos::shared::inmemory_repo::*;
use barbershop_domain::{Customer, CustomerPatch, NewCustomer, ID};

pub struct InMemoryCustomerRepo {
    customers: std::sync::Mutex<Vec<Customer>>,
}

impl InMemoryCustomerRepo {
    pub fn new() -> Self {
        Self {
            customers: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for InMemoryCustomerRepo {
    async fn insert(&self, customer: NewCustomer) -> anyhow::Result<Customer> {
        let customer = customer.with_id(ID::new());
        insert(&customer, &self.customers);
        Ok(customer)
    }

    async fn find(&self, customer_id: &ID) -> anyhow::Result<Option<Customer>> {
        Ok(find(customer_id, &self.customers))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        Ok(find_all(&self.customers))
    }

    async fn update(
        &self,
        customer_id: &ID,
        patch: &CustomerPatch,
    ) -> anyhow::Result<Option<Customer>> {
        Ok(update(customer_id, &self.customers, |customer| {
            patch.apply(customer)
        }))
    }

    async fn delete(&self, customer_id: &ID) -> anyhow::Result<()> {
        delete(customer_id, &self.customers);
        Ok(())
    }
}
