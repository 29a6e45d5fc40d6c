/// All names that share the same address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressGroup {
    pub address: String,
    /// In order of appearance, duplicates included.
    pub names: Vec<String>,
}
