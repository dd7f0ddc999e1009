//! Action client for JSON action endpoints.
//!
//! Every interaction follows the same contract: show the busy indicator,
//! issue the request, decode an [`ActionResult`], tell the user how it went,
//! and on success run exactly one follow-up. Three call sites build on it:
//!
//! * [`AjaxActionClient::confirm_delete`] asks first, then sends `DELETE`
//!   and reloads the current view.
//! * [`AjaxActionClient::submit_form`] sends a [`Form`] with its declared
//!   method and follows the server `redirect`.
//! * [`AjaxActionClient::download`] fetches a file and hands it to the
//!   [`FileSaver`](crate::ui::FileSaver).

use reqwest::Method;
use std::sync::Arc;
use url::Url;

use crate::constants::*;
use crate::transport::{ActionRequest, ResponseKind, Transport};
use crate::ui::{Capabilities, ConfirmPrompt, ToastKind, UiState};

pub mod form;
pub mod result;

pub use form::{parse_method, Form, InvalidMethod};
pub use result::{ActionFailure, ActionOutcome, ActionResult, FollowUp};

/// Callback run instead of the default follow-up after a successful action.
pub type SuccessCallback = Box<dyn FnOnce(&ActionResult) + Send>;

/// User-facing text for one kind of action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionMessages {
    pub busy: &'static str,
    pub success_title: &'static str,
    pub success_default: &'static str,
    pub failure_default: &'static str,
    pub request_failed: &'static str,
}

pub const DELETE_MESSAGES: ActionMessages = ActionMessages {
    busy: BUSY_DELETING,
    success_title: TITLE_DELETED,
    success_default: SUCCESS_ITEM_DELETED,
    failure_default: ERROR_DELETE_FAILED,
    request_failed: ERROR_DELETE_REQUEST,
};

pub const FORM_MESSAGES: ActionMessages = ActionMessages {
    busy: BUSY_SAVING,
    success_title: TITLE_SUCCESS,
    success_default: SUCCESS_OPERATION_COMPLETED,
    failure_default: ERROR_GENERIC,
    request_failed: ERROR_REQUEST_RETRY,
};

/// What happens after success when the caller passed no callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultFollowUp {
    /// Reload the current view, ignoring any `redirect`.
    Reload,
    /// Navigate to the server `redirect` if there is one.
    Redirect,
}

/// Kind of generated file a download produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadKind {
    Excel,
    Pdf,
}

impl DownloadKind {
    pub fn busy_label(&self) -> &'static str {
        match self {
            DownloadKind::Excel => BUSY_EXCEL,
            DownloadKind::Pdf => BUSY_PDF,
        }
    }

    pub fn default_filename(&self) -> &'static str {
        match self {
            DownloadKind::Excel => DOWNLOAD_DEFAULT_EXCEL,
            DownloadKind::Pdf => DOWNLOAD_DEFAULT_PDF,
        }
    }
}

/// Issues action requests and turns their results into user feedback.
pub struct AjaxActionClient {
    transport: Arc<dyn Transport>,
    ui: UiState,
    caps: Capabilities,
    base_url: Option<Url>,
}

impl AjaxActionClient {
    pub fn new(transport: Arc<dyn Transport>, ui: UiState, caps: Capabilities) -> Self {
        Self {
            transport,
            ui,
            caps,
            base_url: None,
        }
    }

    /// Resolve relative targets and redirects against `base`.
    pub fn with_base_url(mut self, base: Url) -> Self {
        self.base_url = Some(base);
        self
    }

    pub fn ui_state(&self) -> &UiState {
        &self.ui
    }

    /// Resolve `target` against the base URL. Without a base, or if joining
    /// fails, the target is returned untouched.
    pub fn resolve(&self, target: &str) -> String {
        match &self.base_url {
            Some(base) => match base.join(target) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    log::warn!("Cannot resolve '{target}' against {base}: {e}");
                    target.to_string()
                }
            },
            None => target.to_string(),
        }
    }

    /// Ask for confirmation, then delete the resource at `url`.
    ///
    /// Without `on_success` the current view is reloaded after the success
    /// notification is dismissed.
    pub async fn confirm_delete(
        &self,
        url: &str,
        item_name: Option<&str>,
        on_success: Option<SuccessCallback>,
    ) -> ActionOutcome {
        let item = item_name.filter(|name| !name.is_empty()).unwrap_or(DEFAULT_ITEM_NAME);
        let prompt = ConfirmPrompt::new(
            CONFIRM_DELETE_TITLE,
            format!("You are about to delete {item}. This action cannot be undone."),
        )
        .confirm_label(CONFIRM_DELETE_LABEL);

        if !self.caps.dialogs.confirm(&prompt).await {
            log::info!("Deletion of {item} cancelled");
            return ActionOutcome::Cancelled;
        }

        let request = ActionRequest::new(Method::DELETE, url);
        self.execute(request, &DELETE_MESSAGES, DefaultFollowUp::Reload, on_success).await
    }

    /// Submit `form` using its declared method and action.
    ///
    /// Without `on_success` the server `redirect`, if any, is followed.
    pub async fn submit_form(&self, form: &Form, on_success: Option<SuccessCallback>) -> ActionOutcome {
        self.execute(form.to_request(), &FORM_MESSAGES, DefaultFollowUp::Redirect, on_success)
            .await
    }

    /// Run one request through the action contract.
    pub async fn execute(
        &self,
        mut request: ActionRequest,
        messages: &ActionMessages,
        default_follow_up: DefaultFollowUp,
        on_success: Option<SuccessCallback>,
    ) -> ActionOutcome {
        request.url = self.resolve(&request.url);
        let method = request.method.clone();
        let url = request.url.clone();

        let busy = self.ui.busy(messages.busy, Arc::clone(&self.caps.busy));
        let fetched = self.fetch_result(request).await;
        drop(busy);

        let result = match fetched {
            Ok(result) => result,
            Err(failure) => {
                log::error!("{method} {url} failed: {failure}");
                self.caps.dialogs.error(TITLE_ERROR, messages.request_failed).await;
                return ActionOutcome::Failed(failure);
            }
        };

        if !result.success {
            let text = result.message_or(messages.failure_default);
            log::warn!("{method} {url} rejected: {text}");
            self.caps.dialogs.error(TITLE_ERROR, text).await;
            return ActionOutcome::Rejected(result);
        }

        log::info!("{method} {url} succeeded");
        self.caps
            .dialogs
            .success(messages.success_title, result.message_or(messages.success_default))
            .await;

        let follow_up = self.run_follow_up(&result, default_follow_up, on_success);
        ActionOutcome::Completed { result, follow_up }
    }

    /// Download the file at `url` and save it as `filename`.
    ///
    /// The body is saved as-is; only a failed request or a failed save is
    /// reported as an error.
    pub async fn download(&self, url: &str, filename: Option<&str>, kind: DownloadKind) -> ActionOutcome {
        let filename = filename.filter(|name| !name.is_empty()).unwrap_or(kind.default_filename());
        let url = self.resolve(url);
        let request = ActionRequest::new(Method::GET, url.clone()).expecting(ResponseKind::Binary);

        let busy = self.ui.busy(kind.busy_label(), Arc::clone(&self.caps.busy));
        let fetched = self.transport.send(request).await;
        drop(busy);

        let response = match fetched {
            Ok(response) => response,
            Err(e) => {
                log::error!("Download of {url} failed: {e}");
                self.caps.dialogs.error(TITLE_ERROR, ERROR_DOWNLOAD_FAILED).await;
                return ActionOutcome::Failed(e.into());
            }
        };

        if !response.is_success_status() {
            log::warn!("Download of {url} returned status {}, saving body anyway", response.status);
        }

        match self.caps.saver.save(filename, &response.body).await {
            Ok(location) => {
                self.caps.dialogs.toast(ToastKind::Success, SUCCESS_FILE_DOWNLOADED).await;
                ActionOutcome::Saved { location }
            }
            Err(e) => {
                log::error!("Saving {filename} failed: {e}");
                self.caps.dialogs.error(TITLE_ERROR, ERROR_DOWNLOAD_FAILED).await;
                ActionOutcome::Failed(e.into())
            }
        }
    }

    async fn fetch_result(&self, request: ActionRequest) -> Result<ActionResult, ActionFailure> {
        let response = self.transport.send(request).await?;
        Ok(ActionResult::from_slice(&response.body)?)
    }

    fn run_follow_up(
        &self,
        result: &ActionResult,
        default_follow_up: DefaultFollowUp,
        on_success: Option<SuccessCallback>,
    ) -> FollowUp {
        if let Some(callback) = on_success {
            callback(result);
            return FollowUp::Callback;
        }

        match default_follow_up {
            DefaultFollowUp::Reload => {
                self.caps.navigator.reload();
                FollowUp::Reload
            }
            DefaultFollowUp::Redirect => match result.redirect() {
                Some(target) => {
                    let destination = self.resolve(target);
                    self.caps.navigator.navigate(&destination);
                    FollowUp::Navigate(destination)
                }
                None => FollowUp::None,
            },
        }
    }
}
