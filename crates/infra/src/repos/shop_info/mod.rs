mod inmemory;
mod mongo;

pub use inmemory::InMemoryShopInfoRepo;
pub use mongo::MongoShopInfoRepo;
use barbershop_domain::{NewShopInfo, ShopInfo, ShopInfoPatch, ID};

#[async_trait::async_trait]
pub trait IShopInfoRepo: Send + Sync {
    async fn insert(&self, shop_info: NewShopInfo) -> anyhow::Result<ShopInfo>;
    async fn find(&self, shop_info_id: &ID) -> anyhow::Result<Option<ShopInfo>>;
    async fn find_all(&self) -> anyhow::Result<Vec<ShopInfo>>;
    async fn update(
        &self,
        shop_info_id: &ID,
        patch: &ShopInfoPatch,
    ) -> anyhow::Result<Option<ShopInfo>>;
    async fn delete(&self, shop_info_id: &ID) -> anyhow::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_test_contexts as create_contexts;

    #[tokio::test]
    async fn several_shops_can_be_stored() {
        for ctx in create_contexts().await {
            let shops = &ctx.repos.shop_infos;
            let first = shops
                .insert(NewShopInfo {
                    name: "Barberia Central".into(),
                    address: "Main St 1".into(),
                    phone: "555-0100".into(),
                })
                .await
                .unwrap();
            let second = shops
                .insert(NewShopInfo {
                    name: "Barberia Norte".into(),
                    address: "North Ave 7".into(),
                    phone: "555-0199".into(),
                })
                .await
                .unwrap();
            assert_ne!(first.id, second.id);

            let all = shops.find_all().await.unwrap();
            assert!(all.contains(&first));
            assert!(all.contains(&second));
        }
    }

    #[tokio::test]
    async fn update_and_delete() {
        for ctx in create_contexts().await {
            let shops = &ctx.repos.shop_infos;
            let shop = shops.insert(NewShopInfo::default()).await.unwrap();

            let patch = ShopInfoPatch {
                address: Some("Main St 2".into()),
                ..Default::default()
            };
            let updated = shops.update(&shop.id, &patch).await.unwrap();
            assert_eq!(
                updated,
                Some(ShopInfo {
                    address: "Main St 2".into(),
                    ..shop.clone()
                })
            );

            assert!(shops.delete(&shop.id).await.is_ok());
            assert!(matches!(shops.update(&shop.id, &patch).await, Ok(None)));
        }
    }
}
