use serde::{Deserialize, Serialize};

pub type UserId = u64;

/// A user record as returned by the users endpoint.
///
/// Upstream payloads carry more fields (`username`, `website`, `company`,
/// `address.geo`, ...). Serde skips anything not declared here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    pub city: String,
    pub zipcode: String,
}

impl User {
    /// Record inserted by the "add user" control.
    pub fn placeholder(id: UserId) -> Self {
        Self {
            id,
            name: "User".to_string(),
            email: "user@gmail.com".to_string(),
            phone: "123456789".to_string(),
            address: Address {
                city: "my city".to_string(),
                zipcode: "999999".to_string(),
            },
        }
    }
}
