use crate::dtos::{MessageDTO, ShopInfoDTO};
use crate::shared::null_as_default;
use barbershop_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_shop_infos {
    use super::*;

    pub type APIResponse = Vec<ShopInfoDTO>;
}

pub mod get_shop_info {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub shop_info_id: ID,
    }

    pub type APIResponse = ShopInfoDTO;
}

pub mod create_shop_info {
    use super::*;

    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(
            default,
            rename = "barber_shop",
            deserialize_with = "null_as_default"
        )]
        pub name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub address: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub phone: String,
    }

    pub type APIResponse = ShopInfoDTO;
}

pub mod update_shop_info {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub shop_info_id: ID,
    }

    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(
            default,
            rename = "barber_shop",
            skip_serializing_if = "Option::is_none"
        )]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub address: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
    }

    pub type APIResponse = ShopInfoDTO;
}

pub mod delete_shop_info {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub shop_info_id: ID,
    }

    pub type APIResponse = MessageDTO;
}
