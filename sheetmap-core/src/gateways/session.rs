/// Key of the last successfully resolved dataset reference.
pub const LAST_DATASET_REFERENCE_KEY: &str = "last-dataset-reference";

/// Persistent key-value storage that survives the current session.
pub trait SessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> anyhow::Result<()>;
}
