use barbershop_domain::{ShopInfo, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ShopInfoDTO {
    #[serde(rename = "_id")]
    pub id: ID,
    #[serde(rename = "barber_shop")]
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl ShopInfoDTO {
    pub fn new(shop_info: ShopInfo) -> Self {
        Self {
            id: shop_info.id,
            name: shop_info.name,
            address: shop_info.address,
            phone: shop_info.phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shop_name_is_exposed_as_barber_shop() {
        let id = ID::new();
        let dto = ShopInfoDTO::new(ShopInfo {
            id: id.clone(),
            name: "Barberia Central".into(),
            address: "Main St 1".into(),
            phone: "555-0100".into(),
        });
        assert_eq!(
            serde_json::to_value(&dto).unwrap(),
            serde_json::json!({
                "_id": id.as_string(),
                "barber_shop": "Barberia Central",
                "address": "Main St 1",
                "phone": "555-0100",
            })
        );
    }
}
