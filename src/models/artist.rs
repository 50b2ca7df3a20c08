use std::{
    collections::BTreeMap,
    fmt,
    hash::{Hash, Hasher},
};

use crate::{
    mapping::{self, MappingError},
    types::Payload,
};

#[derive(Debug, Clone, Default)]
pub struct Artist {
    pub name: String,
    pub id: String,
    pub uri: String,
    pub urls: BTreeMap<String, String>,
    pub href: String,
}

impl Artist {
    pub fn from_payload(payload: &Payload) -> Result<Self, MappingError> {
        Ok(Self {
            name: mapping::required_str(payload, "name")?,
            id: mapping::required_str(payload, "id")?,
            uri: mapping::required_str(payload, "uri")?,
            urls: mapping::external_urls(payload)?,
            href: mapping::string_or(payload, "href", "")?,
        })
    }

    /// Like [`Artist::from_payload`], but an empty payload yields a default
    /// artist instead of an error.
    pub fn from_nested(payload: &Payload) -> Result<Self, MappingError> {
        if payload.is_empty() {
            return Ok(Self::default());
        }
        Self::from_payload(payload)
    }
}

impl PartialEq for Artist {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Artist {}

impl Hash for Artist {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Artist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
