use crate::shared::entity::{Entity, ID};

/// Something the shop sells, e.g. a haircut
#[derive(Debug, Clone, PartialEq)]
pub struct Service {
    pub id: ID,
    pub name: String,
    /// Price in whole currency units
    pub price: i64,
    pub duration_minutes: i64,
}

impl Entity for Service {
    fn id(&self) -> &ID {
        &self.id
    }
}

/// A `Service` that has not been stored yet and therefore has no `ID`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewService {
    pub name: String,
    pub price: i64,
    pub duration_minutes: i64,
}

impl NewService {
    pub fn with_id(self, id: ID) -> Service {
        Service {
            id,
            name: self.name,
            price: self.price,
            duration_minutes: self.duration_minutes,
        }
    }
}

/// Fields of a `Service` to overwrite, `None` means leave as is
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServicePatch {
    pub name: Option<String>,
    pub price: Option<i64>,
    pub duration_minutes: Option<i64>,
}

impl ServicePatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.price.is_none() && self.duration_minutes.is_none()
    }

    pub fn apply(&self, service: &mut Service) {
        if let Some(name) = &self.name {
            service.name = name.clone();
        }
        if let Some(price) = self.price {
            service.price = price;
        }
        if let Some(duration_minutes) = self.duration_minutes {
            service.duration_minutes = duration_minutes;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn haircut() -> Service {
        NewService {
            name: "Haircut".into(),
            price: 20,
            duration_minutes: 30,
        }
        .with_id(ID::new())
    }

    #[test]
    fn patch_only_touches_given_fields() {
        let mut service = haircut();
        let before = service.clone();

        let patch = ServicePatch {
            price: Some(25),
            ..Default::default()
        };
        assert!(!patch.is_empty());
        patch.apply(&mut service);

        assert_eq!(service.price, 25);
        assert_eq!(service.name, before.name);
        assert_eq!(service.duration_minutes, before.duration_minutes);
        assert_eq!(service.id, before.id);
    }

    #[test]
    fn empty_patch_is_a_noop() {
        let mut service = haircut();
        let before = service.clone();
        let patch = ServicePatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut service);
        assert_eq!(service, before);
    }
}
