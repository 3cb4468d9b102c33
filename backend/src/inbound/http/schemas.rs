//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; the wrappers here describe their
//! wire shape for the generated document.

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::Contact`].
#[derive(ToSchema)]
#[schema(as = crate::domain::Contact)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactSchema {
    /// Store-assigned identifier: a JSON integer from the in-memory store, a
    /// UUID string from the database store.
    #[schema(value_type = String, example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    id: String,
    /// Unique contact name, at least 3 characters.
    #[schema(example = "Arto Hellas", min_length = 3)]
    name: String,
    /// Two or three digits, a hyphen, then digits; at least 8 characters.
    #[schema(example = "040-123456", min_length = 8, pattern = r"^[0-9]{2,3}-[0-9]+$")]
    number: String,
}

/// Request body accepted by create and replace.
///
/// Both fields are optional on the wire so that missing fields produce the
/// field-specific validation message rather than a parse error.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct ContactPayloadSchema {
    /// Contact name; required, at least 3 characters.
    #[schema(example = "Arto Hellas")]
    name: Option<String>,
    /// Phone number; required.
    #[schema(example = "040-123456")]
    number: Option<String>,
}
