//! Browser-backed implementations of the storage and navigation seams.

use js_sys::Uint8Array;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlInputElement, Storage};

use crate::services::{ADMIN_TOKEN_KEY, Navigator, TokenStore};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Keeps the admin token in `localStorage` so it survives reloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageTokenStore;

impl TokenStore for LocalStorageTokenStore {
    fn get(&self) -> Option<String> {
        local_storage()?
            .get_item(ADMIN_TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    fn set(&self, token: &str) {
        match local_storage() {
            Some(storage) => {
                if storage.set_item(ADMIN_TOKEN_KEY, token).is_err() {
                    log::error!("could not persist the admin token");
                }
            }
            None => log::error!("localStorage is unavailable"),
        }
    }

    fn clear(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(ADMIN_TOKEN_KEY);
        }
    }
}

/// Full page navigation through `window.location`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().set_href(path) {
            log::error!("navigation to {} failed: {:?}", path, e);
        }
    }
}

pub fn confirm(prompt: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(prompt).ok())
        .unwrap_or(false)
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn open_in_new_tab(url: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.open_with_url_and_target(url, "_blank");
    }
}

/// Reads the first file picked in a file input.
pub async fn read_selected_file(input: &HtmlInputElement) -> Result<Option<(String, Vec<u8>)>, String> {
    let Some(file) = input.files().and_then(|files| files.get(0)) else {
        return Ok(None);
    };

    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    let bytes = Uint8Array::new(&buffer).to_vec();

    Ok(Some((file.name(), bytes)))
}

/// Target of a DOM event as a file input, when it is one.
pub fn event_file_input(ev: &web_sys::Event) -> Option<HtmlInputElement> {
    ev.target()?.dyn_into::<HtmlInputElement>().ok()
}
