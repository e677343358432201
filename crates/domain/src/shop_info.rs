use crate::shared::entity::{Entity, ID};

/// Contact details of a barber shop.
///
/// Nothing stops several of these from being stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ShopInfo {
    pub id: ID,
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Entity for ShopInfo {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewShopInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl NewShopInfo {
    pub fn with_id(self, id: ID) -> ShopInfo {
        ShopInfo {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopInfoPatch {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
}

impl ShopInfoPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none()
    }

    pub fn apply(&self, shop_info: &mut ShopInfo) {
        if let Some(name) = &self.name {
            shop_info.name = name.clone();
        }
        if let Some(address) = &self.address {
            shop_info.address = address.clone();
        }
        if let Some(phone) = &self.phone {
            shop_info.phone = phone.clone();
        }
    }
}
