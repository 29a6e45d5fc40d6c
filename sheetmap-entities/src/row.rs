use thiserror::Error;

/// A single `(name, address)` pair of a dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    name: String,
    address: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RowInvalidation {
    #[error("empty name")]
    EmptyName,
    #[error("empty address")]
    EmptyAddress,
}

impl Row {
    /// Both fields are trimmed and must not be empty afterwards.
    pub fn try_new(
        name: impl AsRef<str>,
        address: impl AsRef<str>,
    ) -> Result<Self, RowInvalidation> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(RowInvalidation::EmptyName);
        }
        let address = address.as_ref().trim();
        if address.is_empty() {
            return Err(RowInvalidation::EmptyAddress);
        }
        Ok(Self {
            name: name.to_owned(),
            address: address.to_owned(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn into_parts(self) -> (String, String) {
        (self.name, self.address)
    }
}
