//! Domain model for personnel records.

use serde::{Deserialize, Serialize};

use crate::common::{Identifiable, NamedEntity, RecordId};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: RecordId,
    pub name: String,
    pub position: String,
}

impl Employee {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: 0,
            name: name.into(),
            position: position.into(),
        }
    }
}

impl Identifiable for Employee {
    fn id(&self) -> RecordId {
        self.id
    }
}

impl NamedEntity for Employee {
    fn name(&self) -> &str {
        &self.name
    }
}
