mod customer;
mod service;
mod shared;
mod shop_info;

pub use customer::{Customer, CustomerPatch, NewCustomer, ServiceVisit};
pub use service::{NewService, Service, ServicePatch};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use shop_info::{NewShopInfo, ShopInfo, ShopInfoPatch};
