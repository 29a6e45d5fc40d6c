use jfs::Store;
use serde::{Deserialize, Serialize};
use sheetmap_core::gateways::session::SessionStore;
use std::{io, path::Path};

/// Session values that are kept as JSON files in a directory.
pub struct JsonFileSessionStore {
    json_store: Store,
}

impl JsonFileSessionStore {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct SessionValue {
    value: String,
}

impl SessionStore for JsonFileSessionStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        match self.json_store.get::<SessionValue>(key) {
            Ok(SessionValue { value }) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = SessionValue {
            value: value.to_owned(),
        };
        self.json_store.save_with_id(&value, key)?;
        Ok(())
    }
}
