//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_api;

use std::net::TcpListener;
use userdesk::model::{Address, User};
use userdesk::store::{Dispatch, UserAction};

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

pub fn user(id: u64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        email: format!("{}@x.com", name.to_lowercase()),
        phone: "1".to_string(),
        address: Address {
            city: "C".to_string(),
            zipcode: "00".to_string(),
        },
    }
}

/// Collects every dispatched action in order.
#[derive(Debug, Default)]
pub struct Recorder {
    pub actions: Vec<UserAction>,
}

impl Dispatch<UserAction> for Recorder {
    fn dispatch(&mut self, action: UserAction) {
        self.actions.push(action);
    }
}
