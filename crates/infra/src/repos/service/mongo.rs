use super::IServiceRepo;
use crate::{
    repos::shared::mongo_repo::{self, stored_id, MongoDocument},
    StoreTimeouts,
};
use barbershop_domain::{NewService, Service, ServicePatch, ID};
use mongodb::{
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoServiceRepo {
    collection: Collection<Document>,
    timeouts: StoreTimeouts,
}

impl MongoServiceRepo {
    pub fn new(db: &Database, timeouts: StoreTimeouts) -> Self {
        Self {
            collection: db.collection("services"),
            timeouts,
        }
    }
}

#[async_trait::async_trait]
impl IServiceRepo for MongoServiceRepo {
    async fn insert(&self, service: NewService) -> anyhow::Result<Service> {
        let id = mongo_repo::insert::<_, ServiceMongo>(
            &self.collection,
            &service,
            self.timeouts.operation,
        )
        .await?;
        Ok(service.with_id(id))
    }

    async fn find(&self, service_id: &ID) -> anyhow::Result<Option<Service>> {
        let oid = service_id.inner_ref();
        mongo_repo::find::<_, ServiceMongo>(&self.collection, oid, self.timeouts.lookup).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Service>> {
        mongo_repo::find_all::<_, ServiceMongo>(&self.collection, self.timeouts.operation).await
    }

    async fn update(
        &self,
        service_id: &ID,
        patch: &ServicePatch,
    ) -> anyhow::Result<Option<Service>> {
        let oid = service_id.inner_ref();
        mongo_repo::update::<_, ServiceMongo>(
            &self.collection,
            oid,
            patch,
            self.timeouts,
        )
        .await
    }

    async fn delete(&self, service_id: &ID) -> anyhow::Result<()> {
        let oid = service_id.inner_ref();
        mongo_repo::delete(&self.collection, oid, self.timeouts.operation).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ServiceMongo {
    #[serde(skip_serializing_if = "Option::is_none")]
    _id: Option<ObjectId>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    price: i64,
    #[serde(default)]
    duration_minutes: i64,
}

impl MongoDocument<Service> for ServiceMongo {
    type New = NewService;
    type Patch = ServicePatch;

    fn to_domain(self) -> anyhow::Result<Service> {
        Ok(Service {
            id: stored_id(self._id)?,
            name: self.name,
            price: self.price,
            duration_minutes: self.duration_minutes,
        })
    }

    fn from_new(service: &NewService) -> Self {
        Self {
            _id: None,
            name: service.name.clone(),
            price: service.price,
            duration_minutes: service.duration_minutes,
        }
    }

    fn set_document(patch: &ServicePatch) -> Document {
        let mut set = Document::new();
        if let Some(name) = &patch.name {
            set.insert("name", name.as_str());
        }
        if let Some(price) = patch.price {
            set.insert("price", price);
        }
        if let Some(duration_minutes) = patch.duration_minutes {
            set.insert("duration_minutes", duration_minutes);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn set_document_only_contains_given_fields() {
        let patch = ServicePatch {
            name: Some("Beard trim".into()),
            duration_minutes: Some(15),
            ..Default::default()
        };
        assert_eq!(
            ServiceMongo::set_document(&patch),
            doc! { "name": "Beard trim", "duration_minutes": 15_i64 }
        );
        assert!(ServiceMongo::set_document(&ServicePatch::default()).is_empty());
    }

    #[test]
    fn documents_missing_zero_fields_are_read() {
        let oid = ObjectId::new();
        let raw: ServiceMongo = mongodb::bson::from_document(doc! {
            "_id": oid,
            "name": "Free consultation",
        })
        .unwrap();
        let service = raw.to_domain().unwrap();
        assert_eq!(service.id, ID::from(oid));
        assert_eq!(service.price, 0);
        assert_eq!(service.duration_minutes, 0);
    }

    #[test]
    fn new_documents_leave_the_id_to_the_store() {
        let doc = mongodb::bson::to_document(&ServiceMongo::from_new(&NewService::default()))
            .unwrap();
        assert!(!doc.contains_key("_id"));
    }
}
