//! User-facing dialog text
//!
//! Validation messages live on [`shared::FormError`].

pub const CREATED: &str = "Miembro añadido correctamente.";
pub const CREATE_TRANSPORT: &str = "Ocurrió un problema al crear el miembro. Intenta nuevamente.";

pub const SEARCH_NOT_FOUND: &str = "Miembro no encontrado";
pub const SEARCH_TRANSPORT: &str = "Hubo un problema al consultar el miembro. Intenta nuevamente.";

pub const UPDATED: &str = "Miembro actualizado correctamente.";
pub const UPDATE_NOT_FOUND: &str = "Miembro no encontrado, error al actualizar";
pub const UPDATE_TRANSPORT: &str =
    "Ocurrió un problema al actualizar el miembro. Intenta nuevamente.";

pub const DELETE_NOT_FOUND: &str = "Miembro no encontrado. No se pudo eliminar.";
pub const DELETE_TRANSPORT: &str = "Ocurrió un problema al eliminar el miembro. Intenta nuevamente.";

pub fn create_failed(detail: &str) -> String {
    format!("No se pudo crear el miembro: {detail}")
}

pub fn update_failed(detail: &str) -> String {
    format!("No se pudo actualizar: {detail}")
}

pub fn delete_failed(detail: &str) -> String {
    format!("No se pudo eliminar el miembro: {detail}")
}

pub fn deleted(id: &str) -> String {
    format!("Miembro con ID {id} eliminado correctamente.")
}
