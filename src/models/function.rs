//! Function descriptor model
//!
//! One row of the `pg_proc` catalog, reduced to the fields the reference
//! document prints.

use serde::{Deserialize, Serialize};

/// A stored function as described by the database catalog.
///
/// Descriptors are read-only snapshots: they are built fresh for every
/// catalog query and discarded once their section has been rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FunctionDescriptor {
    /// Function identifier (`pg_proc.proname`)
    pub name: String,
    /// Parameter list as rendered by `pg_get_function_identity_arguments`
    #[serde(default)]
    pub arguments: String,
    /// Declared result as rendered by `pg_get_function_result`
    pub return_type: String,
    /// `COMMENT ON FUNCTION` text, empty when none was recorded
    #[serde(default)]
    pub description: String,
}

impl FunctionDescriptor {
    /// Create a new descriptor.
    ///
    /// A missing comment is stored as an empty description.
    pub fn new(
        name: impl Into<String>,
        arguments: impl Into<String>,
        return_type: impl Into<String>,
        description: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments: arguments.into(),
            return_type: return_type.into(),
            description: description.unwrap_or_default(),
        }
    }

    /// The call synopsis, `name(arguments)`.
    pub fn synopsis(&self) -> String {
        format!("{}({})", self.name, self.arguments)
    }
}
