use super::IShopInfoRepo;
use crate::{
    repos::shared::mongo_repo::{self, stored_id, MongoDocument},
    StoreTimeouts,
};
use barbershop_domain::{NewShopInfo, ShopInfo, ShopInfoPatch, ID};
use mongodb::{
    bson::{oid::ObjectId, Document},
    Collection, Database,
};
use serde::{Deserialize, Serialize};

pub struct MongoShopInfoRepo {
    collection: Collection<Document>,
    timeouts: StoreTimeouts,
}

impl MongoShopInfoRepo {
    pub fn new(db: &Database, timeouts: StoreTimeouts) -> Self {
        Self {
            collection: db.collection("Datos"),
            timeouts,
        }
    }
}

#[async_trait::async_trait]
impl IShopInfoRepo for MongoShopInfoRepo {
    async fn insert(&self, shop_info: NewShopInfo) -> anyhow::Result<ShopInfo> {
        let id = mongo_repo::insert::<_, ShopInfoMongo>(
            &self.collection,
            &shop_info,
            self.timeouts.operation,
        )
        .await?;
        Ok(shop_info.with_id(id))
    }

    async fn find(&self, shop_info_id: &ID) -> anyhow::Result<Option<ShopInfo>> {
        let oid = shop_info_id.inner_ref();
        mongo_repo::find::<_, ShopInfoMongo>(&self.collection, oid, self.timeouts.lookup).await
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ShopInfo>> {
        mongo_repo::find_all::<_, ShopInfoMongo>(&self.collection, self.timeouts.operation)
            .await
    }

    async fn update(
        &self,
        shop_info_id: &ID,
        patch: &ShopInfoPatch,
    ) -> anyhow::Result<Option<ShopInfo>> {
        let oid = shop_info_id.inner_ref();
        mongo_repo::update::<_, ShopInfoMongo>(
            &self.collection,
            oid,
            patch,
            self.timeouts,
        )
        .await
    }

    async fn delete(&self, shop_info_id: &ID) -> anyhow::Result<()> {
        let oid = shop_info_id.inner_ref();
        mongo_repo::delete(&self.collection, oid, self.timeouts.operation).await
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct ShopInfoMongo {
    #[serde(skip_serializing_if = "Option::is_none")]
    _id: Option<ObjectId>,
    #[serde(default)]
    barber_shop: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    phone: String,
}

impl MongoDocument<ShopInfo> for ShopInfoMongo {
    type New = NewShopInfo;
    type Patch = ShopInfoPatch;

    fn to_domain(self) -> anyhow::Result<ShopInfo> {
        Ok(ShopInfo {
            id: stored_id(self._id)?,
            name: self.barber_shop,
            address: self.address,
            phone: self.phone,
        })
    }

    fn from_new(shop_info: &NewShopInfo) -> Self {
        Self {
            _id: None,
            barber_shop: shop_info.name.clone(),
            address: shop_info.address.clone(),
            phone: shop_info.phone.clone(),
        }
    }

    fn set_document(patch: &ShopInfoPatch) -> Document {
        let mut set = Document::new();
        if let Some(name) = &patch.name {
            set.insert("barber_shop", name.as_str());
        }
        if let Some(address) = &patch.address {
            set.insert("address", address.as_str());
        }
        if let Some(phone) = &patch.phone {
            set.insert("phone", phone.as_str());
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[test]
    fn shop_name_is_stored_as_barber_shop() {
        let patch = ShopInfoPatch {
            name: Some("Barberia Central".into()),
            phone: Some("555-0100".into()),
            ..Default::default()
        };
        assert_eq!(
            ShopInfoMongo::set_document(&patch),
            doc! { "barber_shop": "Barberia Central", "phone": "555-0100" }
        );
    }
}
