mod base;
mod customer;
mod service;
mod shop_info;
mod status;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use customer::CustomerClient;
pub use customer::{CreateCustomerInput, UpdateCustomerInput};
use service::ServiceClient;
pub use service::{CreateServiceInput, UpdateServiceInput};
use shop_info::ShopInfoClient;
pub use shop_info::{CreateShopInfoInput, UpdateShopInfoInput};
use status::StatusClient;
use std::sync::Arc;

pub use barbershop_api_structs::dtos::*;
pub use barbershop_domain::{ServiceVisit, ID};

// Domain
pub use barbershop_api_structs::dtos::CustomerDTO as Customer;
pub use barbershop_api_structs::dtos::ServiceDTO as Service;
pub use barbershop_api_structs::dtos::ShopInfoDTO as ShopInfo;

/// Barbershop Server SDK
///
/// The SDK contains methods for interacting with the Barbershop server
/// API.
#[derive(Clone)]
pub struct BarbershopSDK {
    pub customer: CustomerClient,
    pub service: ServiceClient,
    pub shop_info: ShopInfoClient,
    pub status: StatusClient,
}

impl BarbershopSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let customer = CustomerClient::new(base.clone());
        let service = ServiceClient::new(base.clone());
        let shop_info = ShopInfoClient::new(base.clone());
        let status = StatusClient::new(base);

        Self {
            customer,
            service,
            shop_info,
            status,
        }
    }
}
