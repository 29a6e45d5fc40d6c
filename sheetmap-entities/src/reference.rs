//! Validated references to remote spreadsheets.

use std::{fmt, str::FromStr};
use thiserror::Error;
use url::Url;

const EXPECTED_SCHEME: &str = "https";
const EXPECTED_HOST: &str = "docs.google.com";
const EXPECTED_PORT: u16 = 443;
const SPREADSHEETS_SEGMENT: &str = "spreadsheets";
const DOCUMENT_SEGMENT: &str = "d";

/// The identifier of a spreadsheet as embedded in its reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SheetId(String);

impl SheetId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for SheetId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for SheetId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SheetId> for String {
    fn from(from: SheetId) -> Self {
        from.0
    }
}

/// All kinds of invalid input are reported uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("incorrect reference")]
pub struct ReferenceParseError;

/// A reference to a remote dataset that has passed validation.
///
/// The only way to obtain one is by parsing, i.e.
/// a `DatasetReference` is never unvalidated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetReference {
    url: Url,
    sheet_id: SheetId,
}

impl DatasetReference {
    pub fn sheet_id(&self) -> &SheetId {
        &self.sheet_id
    }

    /// The canonical string representation.
    pub fn as_str(&self) -> &str {
        self.url.as_str()
    }
}

impl FromStr for DatasetReference {
    type Err = ReferenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s.trim()).map_err(|_| ReferenceParseError)?;
        if url.scheme() != EXPECTED_SCHEME {
            return Err(ReferenceParseError);
        }
        if url.host_str() != Some(EXPECTED_HOST) {
            return Err(ReferenceParseError);
        }
        // The default port is normalized to `None` by the parser
        if !matches!(url.port_or_known_default(), Some(EXPECTED_PORT)) {
            return Err(ReferenceParseError);
        }
        let sheet_id = {
            let mut segments = url.path().split('/');
            match (
                segments.next(),
                segments.next(),
                segments.next(),
                segments.next(),
            ) {
                (Some(""), Some(SPREADSHEETS_SEGMENT), Some(DOCUMENT_SEGMENT), Some(id))
                    if !id.is_empty() =>
                {
                    SheetId(id.to_owned())
                }
                _ => return Err(ReferenceParseError),
            }
        };
        Ok(Self { url, sheet_id })
    }
}

impl fmt::Display for DatasetReference {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
