use crate::{schema::ModelDescriptor, Result};

/// A type that describes the table it is stored in.
///
/// ```
/// use ddlsync::{schema::ModelDescriptor, Model, Result};
///
/// struct User {
///     id: i64,
///     name: String,
/// }
///
/// impl Model for User {
///     fn describe() -> Result<ModelDescriptor> {
///         ModelDescriptor::new("User")
///             .typed_field::<i64>("ID", "constraints:primary key,auto_increment")?
///             .typed_field::<String>("Name", "constraints:not null;index")
///     }
/// }
/// ```
pub trait Model {
    /// Returns the model's name and fields. The first field is the identity.
    fn describe() -> Result<ModelDescriptor>;
}
