//! Types shared across domains.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddressType {
    #[default]
    None,
    Agent,
    Conference,
    Email,
    Extension,
    Line,
    Queue,
    Sip,
    Tel,
}

/// An endpoint: a phone number, a SIP URI, an agent, an email address...
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Address {
    #[serde(rename = "type")]
    pub kind: AddressType,
    pub target: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub detail: String,
}

impl Address {
    pub fn new(kind: AddressType, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: target.into(),
            ..Default::default()
        }
    }

    pub fn tel(number: impl Into<String>) -> Self {
        Self::new(AddressType::Tel, number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_wire_shape() {
        let json = serde_json::to_value(Address::tel("+821100000001")).unwrap();
        assert_eq!(json, serde_json::json!({"type": "tel", "target": "+821100000001"}));
    }
}
