/// Trait for records served by the REST backend
///
/// Carries the identity of a record and the static names the front-end
/// needs to reach and label a collection.
pub trait Record {
    /// Backend identifier (`_id`)
    fn id(&self) -> &str;

    /// Display name of the record
    fn name(&self) -> &str;

    /// Base path of the collection (for example, "/division")
    fn endpoint() -> &'static str;

    /// UI name, singular (for example, "Division")
    fn element_name() -> &'static str;

    /// UI name, plural (for example, "Divisions")
    fn list_name() -> &'static str;

    /// Path of a single record
    fn item_path(id: &str) -> String {
        format!("{}/{}", Self::endpoint(), id)
    }

    /// Path of the create endpoint
    fn create_path() -> String {
        format!("{}/create", Self::endpoint())
    }
}
