use super::IShopInfoRepo;
use crate::repos::shared::inmemory_repo::*;
use barbershop_domain::{NewShopInfo, ShopInfo, ShopInfoPatch, ID};

pub struct InMemoryShopInfoRepo {
    shop_infos: std::sync::Mutex<Vec<ShopInfo>>,
}

impl InMemoryShopInfoRepo {
    pub fn new() -> Self {
        Self {
            shop_infos: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IShopInfoRepo for InMemoryShopInfoRepo {
    async fn insert(&self, shop_info: NewShopInfo) -> anyhow::Result<ShopInfo> {
        let shop_info = shop_info.with_id(ID::new());
        insert(&shop_info, &self.shop_infos);
        Ok(shop_info)
    }

    async fn find(&self, shop_info_id: &ID) -> anyhow::Result<Option<ShopInfo>> {
        Ok(find(shop_info_id, &self.shop_infos))
    }

    async fn find_all(&self) -> anyhow::Result<Vec<ShopInfo>> {
        Ok(find_all(&self.shop_infos))
    }

    async fn update(
        &self,
        shop_info_id: &ID,
        patch: &ShopInfoPatch,
    ) -> anyhow::Result<Option<ShopInfo>> {
        Ok(update(shop_info_id, &self.shop_infos, |shop_info| {
            patch.apply(shop_info)
        }))
    }

    async fn delete(&self, shop_info_id: &ID) -> anyhow::Result<()> {
        delete(shop_info_id, &self.shop_infos);
        Ok(())
    }
}
