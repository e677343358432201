use crate::shared::entity::{Entity, ID};

/// A visit to the shop where the `Customer` received a `Service`.
///
/// `service_id` is only a reference: the `Service` might have been deleted
/// since, and deleting a `Service` never touches the visit history.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceVisit {
    pub service_id: ID,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Customer {
    pub id: ID,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub last_visit: String,
    pub services_received: Vec<ServiceVisit>,
}

impl Entity for Customer {
    fn id(&self) -> &ID {
        &self.id
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub last_visit: String,
    pub services_received: Vec<ServiceVisit>,
}

impl NewCustomer {
    pub fn with_id(self, id: ID) -> Customer {
        Customer {
            id,
            name: self.name,
            phone: self.phone,
            email: self.email,
            last_visit: self.last_visit,
            services_received: self.services_received,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomerPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub last_visit: Option<String>,
    pub services_received: Option<Vec<ServiceVisit>>,
}

impl CustomerPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.email.is_none()
            && self.last_visit.is_none()
            && self.services_received.is_none()
    }

    pub fn apply(&self, customer: &mut Customer) {
        if let Some(name) = &self.name {
            customer.name = name.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            customer.email = email.clone();
        }
        if let Some(last_visit) = &self.last_visit {
            customer.last_visit = last_visit.clone();
        }
        if let Some(services_received) = &self.services_received {
            customer.services_received = services_received.clone();
        }
    }
}
