use barbershop_domain::{Service, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServiceDTO {
    #[serde(rename = "_id")]
    pub id: ID,
    pub name: String,
    pub price: i64,
    pub duration_minutes: i64,
}

impl ServiceDTO {
    pub fn new(service: Service) -> Self {
        Self {
            id: service.id,
            name: service.name,
            price: service.price,
            duration_minutes: service.duration_minutes,
        }
    }
}
