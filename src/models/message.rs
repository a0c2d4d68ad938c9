use serde::{Deserialize, Serialize};

use super::wire::lenient_string;
use super::{ItemId, deserialize_optional_id};

/// A message left through the public contact form. Admins may read and
/// delete these but never edit them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactMessage {
    #[serde(
        deserialize_with = "deserialize_optional_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ItemId>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(deserialize_with = "lenient_string")]
    pub message: String,
    #[serde(deserialize_with = "lenient_string")]
    pub created_at: String,
}

impl ContactMessage {
    /// Deep link that opens WhatsApp with the message pre-filled.
    pub fn whatsapp_link(&self, phone_number: &str) -> String {
        let text = format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        );
        format!(
            "https://wa.me/{}?text={}",
            phone_number,
            urlencoding::encode(&text)
        )
    }
}
