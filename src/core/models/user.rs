use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

// The slice of the provider's user object the board cares about
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub uid: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
}

impl User {
    pub fn label(&self) -> &str {
        self.display_name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.uid)
    }

    // null/undefined mean "signed out"; anything not shaped like a user is
    // treated the same way
    pub fn from_js(value: JsValue) -> Option<User> {
        if value.is_null() || value.is_undefined() {
            return None;
        }
        match serde_wasm_bindgen::from_value::<User>(value) {
            Ok(user) => Some(user),
            Err(e) => {
                log::warn!("Ignoring malformed user payload from identity provider: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_provider_shape() {
        let user: User = serde_json::from_str(
            r#"{"uid":"abc","email":"a@example.com","displayName":"Ada","photoURL":null}"#,
        )
        .unwrap();
        assert_eq!(user.uid, "abc");
        assert_eq!(user.label(), "Ada");
    }

    #[test]
    fn label_falls_back_to_email_then_uid() {
        let mut user: User = serde_json::from_str(r#"{"uid":"abc","email":"a@example.com"}"#).unwrap();
        assert_eq!(user.label(), "a@example.com");
        user.email = None;
        assert_eq!(user.label(), "abc");
    }
}
