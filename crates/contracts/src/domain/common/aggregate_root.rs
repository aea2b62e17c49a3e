use super::EntityId;

/// Trait implemented by every entity record kept in a store
///
/// Gives the UI enough to address a record (id), name it in confirmations
/// and toasts, and label the collection it lives in.
pub trait AggregateRoot {
    /// Record id
    fn id(&self) -> EntityId;

    /// Human readable name used in prompts such as "delete Paracetamol 500mg?"
    fn display_name(&self) -> &str;

    /// Index of the entity in the system (for example "a001")
    fn aggregate_index() -> &'static str;

    /// Collection name (for example "stock")
    fn collection_name() -> &'static str;

    /// Singular UI name (for example "Stock Item")
    fn element_name() -> &'static str;

    /// Plural UI name (for example "Stock Items")
    fn list_name() -> &'static str;
}
