//! Restaurant: the single record type managed by restohub.
//!
//! Field names on the wire are the Spanish ones used by the public API
//! (`nombre`, `direccion`, `telefono`); the Rust side uses English names.

use serde::{Deserialize, Serialize};

use crate::error::{NotFoundError, ValidationError};
use crate::id::RestaurantId;

/// Wire name of [`Restaurant::name`].
pub const NAME_FIELD: &str = "nombre";
/// Wire name of [`Restaurant::address`].
pub const ADDRESS_FIELD: &str = "direccion";
/// Wire name of [`Restaurant::phone`].
pub const PHONE_FIELD: &str = "telefono";

/// A persisted restaurant record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl Restaurant {
    /// Record kind reported in [`NotFoundError`]s.
    pub const KIND: &'static str = "Restaurante";

    /// The error reported when no restaurant with `id` exists.
    #[must_use]
    pub fn not_found(id: RestaurantId) -> NotFoundError {
        NotFoundError {
            entity: Self::KIND,
            id: id.to_string(),
        }
    }
}

/// Payload for inserting a restaurant; the store assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRestaurant {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "direccion")]
    pub address: String,
    #[serde(rename = "telefono")]
    pub phone: String,
}

impl NewRestaurant {
    /// Build a payload as-is, without any presence check.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// Trim user input and require every field to be non-blank.
    ///
    /// This is the required-field check the admin page runs before creating
    /// or saving a restaurant. The server does not call it.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first blank field,
    /// in `nombre`, `direccion`, `telefono` order.
    pub fn from_input(name: &str, address: &str, phone: &str) -> Result<Self, ValidationError> {
        let candidate = Self::new(name.trim(), address.trim(), phone.trim());
        candidate.validate()?;
        Ok(candidate)
    }

    /// Check that no field is empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] naming the first empty field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        [
            (NAME_FIELD, &self.name),
            (ADDRESS_FIELD, &self.address),
            (PHONE_FIELD, &self.phone),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map_or(Ok(()), |(field, _)| Err(ValidationError::EmptyField(field)))
    }

    /// Attach a store-assigned id, producing the persisted record.
    #[must_use]
    pub fn with_id(self, id: RestaurantId) -> Restaurant {
        Restaurant {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
        }
    }
}

/// A partial update: present fields overwrite, absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestaurantChanges {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "direccion", default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "telefono", default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl RestaurantChanges {
    /// `true` when the changeset would leave a record untouched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.address.is_none() && self.phone.is_none()
    }

    /// Overwrite the fields of `restaurant` that this changeset carries.
    pub fn apply(self, restaurant: &mut Restaurant) {
        if let Some(name) = self.name {
            restaurant.name = name;
        }
        if let Some(address) = self.address {
            restaurant.address = address;
        }
        if let Some(phone) = self.phone {
            restaurant.phone = phone;
        }
    }
}

impl From<NewRestaurant> for RestaurantChanges {
    fn from(full: NewRestaurant) -> Self {
        Self {
            name: Some(full.name),
            address: Some(full.address),
            phone: Some(full.phone),
        }
    }
}
