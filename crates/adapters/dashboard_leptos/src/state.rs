//! Plain data behind the admin page: row modes, form fields, search outcomes
//! and the notices shown to the user. Nothing here touches the DOM.

use restohub_domain::error::ValidationError;
use restohub_domain::restaurant::{NewRestaurant, Restaurant};

/// Notice shown when the required-field check fails.
pub const REQUIRED_FIELDS: &str = "Todos los campos son obligatorios.";
pub const CREATED: &str = "Restaurante creado";
pub const CREATE_FAILED: &str = "Error al crear";
pub const UPDATED: &str = "Restaurante actualizado";
pub const UPDATE_FAILED: &str = "Error al actualizar";
pub const DELETED: &str = "Eliminado correctamente";
pub const DELETE_FAILED: &str = "Error al eliminar";
pub const CONFIRM_DELETE: &str = "¿Estás seguro de eliminar este restaurante?";

/// Display mode of a single table row. Rows never affect each other.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Text currently typed into the three restaurant inputs, either the create
/// form or a row being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl FormFields {
    /// Seed the inputs with a stored record's values.
    #[must_use]
    pub fn from_restaurant(restaurant: &Restaurant) -> Self {
        Self {
            name: restaurant.name.clone(),
            address: restaurant.address.clone(),
            phone: restaurant.phone.clone(),
        }
    }

    /// Run the required-field check on the trimmed inputs.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyField`] when any input is blank.
    pub fn to_new_restaurant(&self) -> Result<NewRestaurant, ValidationError> {
        NewRestaurant::from_input(&self.name, &self.address, &self.phone)
    }
}

/// Why a lookup by id did not produce a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The server answered 404.
    NotFound,
    /// The server answered with another non-2xx status.
    Status(u16),
    /// The request or the body decoding failed.
    Network(String),
}

/// What the search panel shows after a search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The id input was blank; no request was sent.
    BlankId,
    Found(Restaurant),
    Failed { id: String, error: LookupError },
}

impl SearchOutcome {
    /// Classify the result of looking up `id`.
    #[must_use]
    pub fn from_lookup(id: &str, result: Result<Restaurant, LookupError>) -> Self {
        match result {
            Ok(restaurant) => Self::Found(restaurant),
            Err(error) => Self::Failed {
                id: id.to_string(),
                error,
            },
        }
    }

    /// Error line for the panel, or `None` when a record was found.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::BlankId => Some("Por favor, introduce un ID válido.".to_string()),
            Self::Found(_) => None,
            Self::Failed { id, error } => Some(match error {
                LookupError::NotFound => format!("Restaurante con ID {id} no encontrado."),
                LookupError::Status(code) => {
                    format!("Error al buscar el restaurante. Código: {code}")
                }
                LookupError::Network(message) => format!("Error en la conexión: {message}"),
            }),
        }
    }
}
