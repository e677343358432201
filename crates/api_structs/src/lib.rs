mod customer;
mod service;
mod shared;
mod shop_info;
mod status;

pub mod dtos {
    pub use crate::customer::dtos::*;
    pub use crate::service::dtos::*;
    pub use crate::shared::dtos::*;
    pub use crate::shop_info::dtos::*;
}

pub use crate::customer::api::*;
pub use crate::service::api::*;
pub use crate::shop_info::api::*;
pub use crate::status::api::*;
