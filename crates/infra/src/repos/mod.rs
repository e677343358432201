mod customer;
mod service;
mod shared;
mod shop_info;

use crate::StoreTimeouts;
use customer::{InMemoryCustomerRepo, MongoCustomerRepo};
use mongodb::Database;
use service::{InMemoryServiceRepo, MongoServiceRepo};
use shop_info::{InMemoryShopInfoRepo, MongoShopInfoRepo};
use std::sync::Arc;

pub use customer::{resolve_visited_service, ICustomerRepo};
pub use service::IServiceRepo;
pub use shop_info::IShopInfoRepo;

#[derive(Clone)]
pub struct Repos {
    pub services: Arc<dyn IServiceRepo>,
    pub customers: Arc<dyn ICustomerRepo>,
    pub shop_infos: Arc<dyn IShopInfoRepo>,
}

impl Repos {
    pub fn create_mongodb(db: &Database, timeouts: StoreTimeouts) -> Self {
        Self {
            services: Arc::new(MongoServiceRepo::new(db, timeouts)),
            customers: Arc::new(MongoCustomerRepo::new(db, timeouts)),
            shop_infos: Arc::new(MongoShopInfoRepo::new(db, timeouts)),
        }
    }

    pub fn create_inmemory() -> Self {
        Self {
            services: Arc::new(InMemoryServiceRepo::new()),
            customers: Arc::new(InMemoryCustomerRepo::new()),
            shop_infos: Arc::new(InMemoryShopInfoRepo::new()),
        }
    }
}
