use crate::dtos::{CustomerDTO, MessageDTO, ServiceVisitDTO};
use crate::shared::null_as_default;
use barbershop_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_customers {
    use super::*;

    pub type APIResponse = Vec<CustomerDTO>;
}

pub mod get_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = CustomerDTO;
}

pub mod create_customer {
    use super::*;

    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(default, deserialize_with = "null_as_default")]
        pub name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub phone: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub email: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub last_visit: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub services_received: Vec<ServiceVisitDTO>,
    }

    pub type APIResponse = CustomerDTO;
}

pub mod update_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    /// Only the given fields are updated. `services_received` replaces the
    /// whole visit history when given.
    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub phone: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub email: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub last_visit: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub services_received: Option<Vec<ServiceVisitDTO>>,
    }

    pub type APIResponse = CustomerDTO;
}

pub mod delete_customer {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub customer_id: ID,
    }

    pub type APIResponse = MessageDTO;
}
