//! Upload-and-render workflow: file selection, submission, and the deferred
//! reveal of the map result.

use chrono::Utc;
use shared::{
    domain::{Banner, FileNameDisplay, ScrollBehavior, ScrollBlock, SelectedFile, ViewState},
    error::UploadFailure,
    protocol::{UploadResponse, CACHE_BUSTER_PARAM, MAP_PATH},
};
use tracing::{debug, error, info, warn};

use crate::{config::ClientSettings, currency::format_inr, view::PageView, UploadTransport};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitLabels {
    pub idle: String,
    pub processing: String,
}

impl Default for SubmitLabels {
    fn default() -> Self {
        let settings = ClientSettings::default();
        Self::from(&settings)
    }
}

impl From<&ClientSettings> for SubmitLabels {
    fn from(settings: &ClientSettings) -> Self {
        Self {
            idle: settings.submit_label.clone(),
            processing: settings.processing_label.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Rejected(UploadFailure),
    /// The average is on the page and the map frame points at `map_source`;
    /// the result section appears once that source reports loaded.
    AwaitingMap {
        map_source: String,
        average_display: String,
        map_html: Option<String>,
    },
}

pub fn map_source(stamp_millis: i64) -> String {
    format!("{MAP_PATH}?{CACHE_BUSTER_PARAM}={stamp_millis}")
}

fn system_millis() -> i64 {
    Utc::now().timestamp_millis()
}

pub struct UploadWorkflowController<T, V> {
    transport: T,
    view: V,
    labels: SubmitLabels,
    selected: Option<SelectedFile>,
    state: ViewState,
    pending_reveal: Option<String>,
    last_stamp: i64,
    clock: fn() -> i64,
}

impl<T: UploadTransport, V: PageView> UploadWorkflowController<T, V> {
    /// Takes ownership of the page and puts every region in its idle state.
    pub fn bind(transport: T, view: V, labels: SubmitLabels) -> Self {
        let mut controller = Self {
            transport,
            view,
            labels,
            selected: None,
            state: ViewState::Idle,
            pending_reveal: None,
            last_stamp: i64::MIN,
            clock: system_millis,
        };
        controller.view.set_file_name(FileNameDisplay::NoFileChosen);
        controller.view.hide_banner();
        controller.view.set_loading_visible(false);
        controller.view.set_result_visible(false);
        controller.restore_submit_control();
        controller
    }

    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected.as_ref()
    }

    pub fn pending_map_source(&self) -> Option<&str> {
        self.pending_reveal.as_deref()
    }

    /// File picker change: the first file wins, an empty list clears the
    /// selection.
    pub fn files_changed(&mut self, files: impl IntoIterator<Item = SelectedFile>) {
        match files.into_iter().next() {
            Some(file) => {
                debug!(filename = %file.name, size_bytes = file.size_bytes(), "file selected");
                self.view
                    .set_file_name(FileNameDisplay::Chosen(file.name.clone()));
                self.selected = Some(file);
            }
            None => {
                debug!("file selection cleared");
                self.view.set_file_name(FileNameDisplay::NoFileChosen);
                self.selected = None;
            }
        }
    }

    pub fn select_file(&mut self, file: SelectedFile) {
        self.files_changed(Some(file));
    }

    pub fn clear_selection(&mut self) {
        self.files_changed(None);
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        let Some(file) = self.selected.clone() else {
            return self.fail(UploadFailure::Validation);
        };

        self.begin_submission();
        info!(filename = %file.name, size_bytes = file.size_bytes(), "upload: submitting file");

        let result = self.transport.upload(&file).await;
        let outcome = match result {
            Ok(UploadResponse::Success {
                avg_sales,
                map_html,
            }) => self.show_average(avg_sales, map_html),
            Ok(UploadResponse::Failure { error }) => {
                warn!(error = %error, "upload: server rejected file");
                self.fail(UploadFailure::Logical(error))
            }
            Err(err) => {
                error!(error = %err, "Upload Error");
                self.fail(UploadFailure::Transport)
            }
        };

        self.restore_submit_control();
        outcome
    }

    /// Load event from the map frame. Only the source armed by the latest
    /// successful submission reveals the result; returns whether it did.
    pub fn frame_loaded(&mut self, source: &str) -> bool {
        if self.pending_reveal.as_deref() != Some(source) {
            debug!(source, "ignoring load event for stale map source");
            return false;
        }

        self.pending_reveal = None;
        self.view.set_loading_visible(false);
        self.view.set_result_visible(true);
        self.view
            .scroll_result_into_view(ScrollBehavior::Smooth, ScrollBlock::Start);
        self.state = ViewState::ShowingResult;
        info!(source, "map loaded; result shown");
        true
    }

    fn begin_submission(&mut self) {
        self.pending_reveal = None;
        self.view.hide_banner();
        self.view.set_result_visible(false);
        self.view.set_loading_visible(true);
        self.view
            .set_submit_control(false, &self.labels.processing);
        self.state = ViewState::Submitting;
    }

    fn show_average(&mut self, avg_sales: f64, map_html: Option<String>) -> SubmitOutcome {
        let average_display = format_inr(avg_sales);
        self.view.set_average_value(&average_display);

        let map_source = map_source(self.next_stamp());
        self.view.set_map_source(&map_source);
        self.pending_reveal = Some(map_source.clone());
        info!(avg_sales, map_source = %map_source, "upload: waiting for map frame");

        SubmitOutcome::AwaitingMap {
            map_source,
            average_display,
            map_html,
        }
    }

    fn fail(&mut self, failure: UploadFailure) -> SubmitOutcome {
        self.pending_reveal = None;
        self.view.set_loading_visible(false);
        self.view.set_result_visible(false);
        self.view.show_banner(Banner::error(failure.banner_text()));
        self.state = ViewState::ShowingError;
        SubmitOutcome::Rejected(failure)
    }

    fn restore_submit_control(&mut self) {
        self.view.set_submit_control(true, &self.labels.idle);
    }

    /// Current time in milliseconds, bumped past the previous stamp so two
    /// submissions within one millisecond still get distinct map sources.
    fn next_stamp(&mut self) -> i64 {
        let now = (self.clock)();
        self.last_stamp = now.max(self.last_stamp.saturating_add(1));
        self.last_stamp
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;
