use super::ICustomerRepo;
use crate::{
    repos::shared::mongo_repo::{self, stored_id, MongoDocument},
    StoreTimeouts,
};
use barbershop_domain::{Customer, CustomerPatch, NewCustomer, ServiceVisit, ID};
use mongodb::{
    bson::{doc, oid::ObjectId, Bson, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoCustomerRepo {
    collection: Collection<Document>,
    timeouts: StoreTimeouts,
}

impl MongoCustomerRepo {
    pub fn new(db: &Database, timeouts: StoreTimeouts) -> Self {
        Self {
            collection: db.collection("customers"),
            timeouts,
        }
    }
}

#[async_trait::async_trait]
impl ICustomerRepo for MongoCustomerRepo {
    async fn insert(&self, customer: NewCustomer) -> anyhow::Result<Customer> {
        let id = mongo_repo::insert::<_, CustomerMongo>(
            &self.collection,
            &customer,
            self.timeouts.operation,
        )
        .await?;
        Ok(customer.with_id(id))
    }

    async fn find(&self, customer_id: &ID) -> anyhow::Result<Option<Customer>> {
        let oid = customer_id.inner_ref();
        mongo_repo::find::<_, CustomerMongo>(&self.collection, oid, self.timeouts.lookup).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Customer>> {
        mongo_repo::find_all::<_, CustomerMongo>(&self.collection, self.timeouts.operation)
            .await
    }

    async fn update(
        &self,
        customer_id: &ID,
        patch: &CustomerPatch,
    ) -> anyhow::Result<Option<Customer>> {
        let oid = customer_id.inner_ref();
        mongo_repo::update::<_, CustomerMongo>(
            &self.collection,
            oid,
            patch,
            self.timeouts,
        )
        .await
    }

    async fn delete(&self, customer_id: &ID) -> anyhow::Result<()> {
        let oid = customer_id.inner_ref();
        mongo_repo::delete(&self.collection, oid, self.timeouts.operation).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ServiceVisitMongo {
    service_id: ObjectId,
    #[serde(default)]
    date: String,
}

impl ServiceVisitMongo {
    fn to_domain(self) -> ServiceVisit {
        ServiceVisit {
            service_id: ID::from(self.service_id),
            date: self.date,
        }
    }

    fn from_domain(visit: &ServiceVisit) -> Self {
        Self {
            service_id: *visit.service_id.inner_ref(),
            date: visit.date.clone(),
        }
    }

    fn to_bson(visit: &ServiceVisit) -> Bson {
        Bson::Document(doc! {
            "service_id": *visit.service_id.inner_ref(),
            "date": visit.date.as_str(),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct CustomerMongo {
    #[serde(skip_serializing_if = "Option::is_none")]
    _id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    phone: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    last_visit: String,
    // Older documents store `null` for an empty history
    #[serde(default)]
    services_received: Option<Vec<ServiceVisitMongo>>,
}

impl MongoDocument<Customer> for CustomerMongo {
    type New = NewCustomer;
    type Patch = CustomerPatch;

    fn to_domain(self) -> anyhow::Result<Customer> {
        Ok(Customer {
            id: stored_id(self._id)?,
            name: self.name,
            phone: self.phone,
            email: self.email,
            last_visit: self.last_visit,
            services_received: self
                .services_received
                .unwrap_or_default()
                .into_iter()
                .map(ServiceVisitMongo::to_domain)
                .collect(),
        })
    }

    fn from_new(customer: &NewCustomer) -> Self {
        Self {
            _id: None,
            name: customer.name.clone(),
            phone: customer.phone.clone(),
            email: customer.email.clone(),
            last_visit: customer.last_visit.clone(),
            services_received: Some(
                customer
                    .services_received
                    .iter()
                    .map(ServiceVisitMongo::from_domain)
                    .collect(),
            ),
        }
    }

    fn set_document(patch: &CustomerPatch) -> Document {
        let mut set = Document::new();
        if let Some(name) = &patch.name {
            set.insert("name", name.as_str());
        }
        if let Some(phone) = &patch.phone {
            set.insert("phone", phone.as_str());
        }
        if let Some(email) = &patch.email {
            set.insert("email", email.as_str());
        }
        if let Some(last_visit) = &patch.last_visit {
            set.insert("last_visit", last_visit.as_str());
        }
        if let Some(visits) = &patch.services_received {
            set.insert(
                "services_received",
                visits
                    .iter()
                    .map(ServiceVisitMongo::to_bson)
                    .collect::<Vec<_>>(),
            );
        }
        set
    }
}
