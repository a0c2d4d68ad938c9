use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt::Debug;

use crate::api::AssetKind;
use crate::manager::{FieldKind, FieldSpec};
use crate::models::ItemId;

/// Which mutations a resource accepts from the admin panel.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Capabilities {
    pub create: bool,
    pub update: bool,
    pub delete: bool,
}

impl Capabilities {
    pub const FULL: Self = Self {
        create: true,
        update: true,
        delete: true,
    };

    pub const READ_DELETE: Self = Self {
        create: false,
        update: false,
        delete: true,
    };
}

/// Configuration of one admin-managed collection: where it lives, what its
/// items look like and the few places it departs from the common CRUD loop.
pub trait Resource: Send + Sync + 'static {
    type Item: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Collection endpoint, e.g. `/api/speeches`.
    const PATH: &'static str;
    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const CAPABILITIES: Capabilities = Capabilities::FULL;
    const DELETE_PROMPT: &'static str = "Are you sure you want to delete this item?";

    fn empty() -> Self::Item;

    /// Template an existing item is edited over. Fields the server left out
    /// keep the values found here.
    fn template_for(_item: &Self::Item) -> Self::Item {
        Self::empty()
    }

    fn id(item: &Self::Item) -> Option<&ItemId>;

    fn fields() -> &'static [FieldSpec];

    /// Columns shown in the list view.
    fn columns() -> &'static [&'static str];

    fn validate(_draft: &Self::Item) -> Result<(), String> {
        Ok(())
    }

    /// Orders a freshly fetched list for display.
    fn arrange(_items: &mut Vec<Self::Item>) {}

    /// Last chance to derive fields from the existing list before a create.
    fn prepare_create(_existing: &[Self::Item], draft: Self::Item) -> Self::Item {
        draft
    }

    fn payload(draft: &Self::Item) -> Result<Value, serde_json::Error> {
        serde_json::to_value(draft)
    }

    /// Which upload the given asset field accepts for this draft.
    fn asset_kind(_draft: &Self::Item, field: &FieldSpec) -> Option<AssetKind> {
        match field.kind {
            FieldKind::Asset(kind) => Some(kind),
            _ => None,
        }
    }

    fn field(name: &str) -> Option<&'static FieldSpec> {
        Self::fields().iter().find(|f| f.name == name)
    }
}
