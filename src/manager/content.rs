use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::api::{ApiResponse, SecureApi};
use crate::common::{ApiError, ManagerError};
use crate::log_err;
use crate::manager::{Resource, fields};
use crate::models::ItemId;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// One-line feedback shown above a manager panel.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManagerState<T> {
    pub items: Vec<T>,
    pub draft: T,
    /// `Some` while an existing item is being edited.
    pub editing_id: Option<ItemId>,
    pub form_open: bool,
    pub loading: bool,
    pub notice: Option<Notice>,
}

/// Asks the user before a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}

type Listener<T> = Arc<dyn Fn(&ManagerState<T>) + Send + Sync>;

/// List, edit and delete loop for one admin resource.
///
/// Every successful mutation is followed by a full refetch, so the list
/// always mirrors the server.
pub struct ContentManager<R: Resource> {
    api: SecureApi,
    state: Arc<Mutex<ManagerState<R::Item>>>,
    listener: Option<Listener<R::Item>>,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ContentManager<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            state: Arc::clone(&self.state),
            listener: self.listener.clone(),
            _resource: PhantomData,
        }
    }
}

impl<R: Resource> ContentManager<R> {
    pub fn new(api: SecureApi) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(ManagerState {
                items: Vec::new(),
                draft: R::empty(),
                editing_id: None,
                form_open: false,
                loading: false,
                notice: None,
            })),
            listener: None,
            _resource: PhantomData,
        }
    }

    /// Runs `listener` with a fresh snapshot after every state change.
    pub fn with_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&ManagerState<R::Item>) + Send + Sync + 'static,
    {
        self.listener = Some(Arc::new(listener));
        self
    }

    fn lock(&self) -> MutexGuard<'_, ManagerState<R::Item>> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub(crate) fn api(&self) -> &SecureApi {
        &self.api
    }

    pub(crate) fn update<F>(&self, change: F)
    where
        F: FnOnce(&mut ManagerState<R::Item>),
    {
        let snapshot = {
            let mut state = self.lock();
            change(&mut state);
            state.clone()
        };

        if let Some(listener) = &self.listener {
            listener(&snapshot);
        }
    }

    pub fn snapshot(&self) -> ManagerState<R::Item> {
        self.lock().clone()
    }

    pub fn items(&self) -> Vec<R::Item> {
        self.lock().items.clone()
    }

    pub fn draft(&self) -> R::Item {
        self.lock().draft.clone()
    }

    pub fn editing_id(&self) -> Option<ItemId> {
        self.lock().editing_id.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.lock().loading
    }

    async fn load_items(&self) -> Result<Vec<R::Item>, ManagerError> {
        let response = self.api.get(R::PATH).await?;
        let response = expect_ok(response, "fetch", R::PATH)?;
        let mut items: Vec<R::Item> = response.json()?;
        R::arrange(&mut items);
        Ok(items)
    }

    /// Replaces the list with the server's. A failed fetch leaves the
    /// previous list in place.
    pub async fn fetch_list(&self) -> Result<(), ManagerError> {
        self.update(|s| s.loading = true);

        match self.load_items().await {
            Ok(items) => {
                self.update(|s| {
                    s.items = items;
                    s.loading = false;
                });
                Ok(())
            }
            Err(e) => {
                log_err!(format!("fetch {}", R::PATH), e);
                self.update(|s| s.loading = false);
                Err(e)
            }
        }
    }

    /// Loads `item` into the draft, over its template so fields the server
    /// omitted still have their defaults.
    pub fn start_edit(&self, item: &R::Item) -> Result<(), ManagerError> {
        if !R::CAPABILITIES.update {
            return Err(ManagerError::Unsupported("editing"));
        }

        let draft = fields::merge_over(&R::template_for(item), item)?;
        let id = R::id(item).cloned();
        self.update(|s| {
            s.draft = draft;
            s.editing_id = id;
            s.form_open = true;
            s.notice = None;
        });
        Ok(())
    }

    pub fn open_new(&self) -> Result<(), ManagerError> {
        self.open_new_with(R::empty())
    }

    /// Opens the create form seeded with `draft`.
    pub fn open_new_with(&self, draft: R::Item) -> Result<(), ManagerError> {
        if !R::CAPABILITIES.create {
            return Err(ManagerError::Unsupported("creating"));
        }

        self.update(|s| {
            s.draft = draft;
            s.editing_id = None;
            s.form_open = true;
            s.notice = None;
        });
        Ok(())
    }

    /// Clears the draft and closes the form. The notice survives.
    pub fn reset(&self) {
        self.update(|s| {
            s.draft = R::empty();
            s.editing_id = None;
            s.form_open = false;
        });
    }

    pub fn set_draft(&self, draft: R::Item) {
        self.update(|s| s.draft = draft);
    }

    /// Writes one form field into the draft.
    pub fn set_field(&self, name: &str, value: &str) -> Result<(), ManagerError> {
        let spec = R::field(name).ok_or_else(|| ManagerError::Field(format!("unknown field {}", name)))?;
        let draft = fields::write(&self.draft(), spec, value)?;
        self.set_draft(draft);
        Ok(())
    }

    pub fn clear_notice(&self) {
        self.update(|s| s.notice = None);
    }

    fn fail(&self, e: &ManagerError) {
        let message = e.to_string();
        self.update(|s| {
            s.loading = false;
            s.notice = Some(Notice::error(message));
        });
    }

    async fn persist(
        &self,
        draft: R::Item,
        editing_id: Option<ItemId>,
        existing: &[R::Item],
    ) -> Result<(), ManagerError> {
        match editing_id {
            Some(id) => {
                let endpoint = format!("{}/{}", R::PATH, id);
                let payload = R::payload(&draft).map_err(ApiError::from)?;
                let response = self.api.put(&endpoint, &payload).await?;
                expect_ok(response, "update", &endpoint)?;
            }
            None => {
                let draft = R::prepare_create(existing, draft);
                let payload = R::payload(&draft).map_err(ApiError::from)?;
                let response = self.api.post(R::PATH, &payload).await?;
                expect_ok(response, "create", R::PATH)?;
            }
        }
        Ok(())
    }

    /// Sends the draft: PUT when editing, POST otherwise. On success the
    /// list is refetched and the form reset; on failure the draft is kept
    /// and the error lands in the notice.
    pub async fn save(&self) -> Result<(), ManagerError> {
        let ManagerState {
            items,
            draft,
            editing_id,
            ..
        } = self.snapshot();

        let allowed = match editing_id {
            Some(_) => R::CAPABILITIES.update.then_some(()).ok_or(ManagerError::Unsupported("updating")),
            None => R::CAPABILITIES.create.then_some(()).ok_or(ManagerError::Unsupported("creating")),
        };
        if let Err(e) = allowed {
            self.fail(&e);
            return Err(e);
        }

        if let Err(message) = R::validate(&draft) {
            let e = ManagerError::Validation(message);
            self.fail(&e);
            return Err(e);
        }

        self.update(|s| {
            s.loading = true;
            s.notice = None;
        });

        if let Err(e) = self.persist(draft, editing_id, &items).await {
            log_err!(format!("save {}", R::SINGULAR), e);
            self.fail(&e);
            return Err(e);
        }

        if let Err(e) = self.fetch_list().await {
            log::warn!("{} saved but the list could not be refreshed: {}", R::SINGULAR, e);
        }
        self.reset();
        self.update(|s| {
            s.loading = false;
            s.notice = Some(Notice::success(format!("{} saved.", R::SINGULAR)));
        });
        Ok(())
    }

    /// Deletes after the user confirms; returns whether a request was sent.
    /// The list is refetched whenever the server answered.
    pub async fn delete(&self, id: &ItemId, confirm: &dyn Confirm) -> Result<bool, ManagerError> {
        if !R::CAPABILITIES.delete {
            return Err(ManagerError::Unsupported("deleting"));
        }

        if !confirm.confirm(R::DELETE_PROMPT) {
            return Ok(false);
        }

        self.update(|s| {
            s.loading = true;
            s.notice = None;
        });

        let endpoint = format!("{}/{}", R::PATH, id);
        let response = match self.api.delete(&endpoint).await {
            Ok(response) => response,
            Err(e) => {
                let e = ManagerError::from(e);
                self.fail(&e);
                return Err(e);
            }
        };

        let outcome = expect_ok(response, "delete", &endpoint);
        if matches!(outcome, Err(ManagerError::Unauthorized)) {
            self.update(|s| s.loading = false);
            return outcome.map(|_| true);
        }

        if let Err(e) = self.fetch_list().await {
            log::warn!("list refresh after delete failed: {}", e);
        }

        match outcome {
            Ok(_) => {
                self.update(|s| {
                    s.loading = false;
                    s.notice = Some(Notice::success(format!("{} deleted.", R::SINGULAR)));
                });
                Ok(true)
            }
            Err(e) => {
                log_err!(format!("delete {}", endpoint), e);
                self.fail(&e);
                Err(e)
            }
        }
    }
}

/// `None` means the secure client already handled a 401.
pub(crate) fn expect_ok(
    response: Option<ApiResponse>,
    action: &'static str,
    endpoint: &str,
) -> Result<ApiResponse, ManagerError> {
    match response {
        None => Err(ManagerError::Unauthorized),
        Some(response) if response.ok() => Ok(response),
        Some(response) if action == "fetch" => Err(ManagerError::Api(ApiError::Status {
            status: response.status,
            endpoint: endpoint.to_string(),
        })),
        Some(response) => Err(ManagerError::Mutation {
            action,
            status: response.status,
        }),
    }
}
