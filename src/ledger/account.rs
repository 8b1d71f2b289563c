use serde::{Deserialize, Serialize};

/// A non-card cash or bank account. No billing-cycle logic applies.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Account {
    pub name: String,
}

impl Account {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}
