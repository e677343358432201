use crate::shared::null_as_default;
use barbershop_domain::{Customer, ServiceVisit, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ServiceVisitDTO {
    pub service_id: ID,
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
}

impl ServiceVisitDTO {
    pub fn new(visit: ServiceVisit) -> Self {
        Self {
            service_id: visit.service_id,
            date: visit.date,
        }
    }
}

impl From<ServiceVisitDTO> for ServiceVisit {
    fn from(visit: ServiceVisitDTO) -> Self {
        Self {
            service_id: visit.service_id,
            date: visit.date,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct CustomerDTO {
    #[serde(rename = "_id")]
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub last_visit: String,
    pub services_received: Vec<ServiceVisitDTO>,
}

impl CustomerDTO {
    pub fn new(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            phone: customer.phone,
            email: customer.email,
            last_visit: customer.last_visit,
            services_received: customer
                .services_received
                .into_iter()
                .map(ServiceVisitDTO::new)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_need_a_service_id() {
        assert!(serde_json::from_str::<ServiceVisitDTO>(r#"{ "date": "2023-01-10" }"#).is_err());

        let visit: ServiceVisitDTO = serde_json::from_str(
            r#"{ "service_id": "5f8d0d55b54764421b7156c9", "date": null }"#,
        )
        .unwrap();
        assert_eq!(visit.service_id.as_string(), "5f8d0d55b54764421b7156c9");
        assert_eq!(visit.date, "");
    }
}
