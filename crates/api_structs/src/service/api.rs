use crate::dtos::{MessageDTO, ServiceDTO};
use crate::shared::null_as_default;
use barbershop_domain::ID;
use serde::{Deserialize, Serialize};

pub mod get_services {
    use super::*;

    pub type APIResponse = Vec<ServiceDTO>;
}

pub mod get_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = ServiceDTO;
}

pub mod create_service {
    use super::*;

    /// Missing fields are stored as empty / zero, an `_id` is ignored
    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(default, deserialize_with = "null_as_default")]
        pub name: String,
        #[serde(default, deserialize_with = "null_as_default")]
        pub price: i64,
        #[serde(default, deserialize_with = "null_as_default")]
        pub duration_minutes: i64,
    }

    pub type APIResponse = ServiceDTO;
}

pub mod update_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    /// Only the given fields are updated
    #[derive(Deserialize, Serialize, Debug, Default)]
    pub struct RequestBody {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub name: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub price: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub duration_minutes: Option<i64>,
    }

    pub type APIResponse = ServiceDTO;
}

pub mod delete_service {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub service_id: ID,
    }

    pub type APIResponse = MessageDTO;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_body_ignores_client_ids_and_defaults_missing_fields() {
        let body: create_service::RequestBody = serde_json::from_str(
            r#"{ "_id": "5f8d0d55b54764421b7156c9", "name": "Haircut" }"#,
        )
        .unwrap();
        assert_eq!(body.name, "Haircut");
        assert_eq!(body.price, 0);
        assert_eq!(body.duration_minutes, 0);
    }

    #[test]
    fn create_body_reads_null_as_missing() {
        let body: create_service::RequestBody = serde_json::from_str(
            r#"{ "name": null, "price": null, "duration_minutes": 30 }"#,
        )
        .unwrap();
        assert_eq!(body.name, "");
        assert_eq!(body.price, 0);
        assert_eq!(body.duration_minutes, 30);
    }

    #[test]
    fn update_body_tells_absent_fields_apart() {
        let body: update_service::RequestBody =
            serde_json::from_str(r#"{ "price": 25 }"#).unwrap();
        assert_eq!(body.price, Some(25));
        assert!(body.name.is_none());
        assert!(body.duration_minutes.is_none());

        // Only the given fields are sent
        assert_eq!(serde_json::to_string(&body).unwrap(), r#"{"price":25}"#);
    }

    #[test]
    fn prices_must_be_integers() {
        assert!(
            serde_json::from_str::<create_service::RequestBody>(r#"{ "price": "twenty" }"#)
                .is_err()
        );
    }
}
