//! Page rendering for the terminal: keeps the page model and logs each
//! user-visible change.

use client_core::{PageState, PageView};
use shared::domain::{Banner, FileNameDisplay, ScrollBehavior, ScrollBlock};
use tracing::{error, info};

#[derive(Debug, Default)]
pub struct TerminalView {
    page: PageState,
}

impl TerminalView {
    pub fn summary(&self) -> String {
        let page = &self.page;
        let mut lines = vec![format!("File: {}", page.file_name.text())];
        if let Some(text) = page.banner_text() {
            lines.push(text.to_string());
        }
        if page.result_visible {
            lines.push(format!("Average sales: {}", page.average_value));
            if let Some(source) = &page.map_source {
                lines.push(format!("Map: {source}"));
            }
        }
        lines.join("\n")
    }
}

impl PageView for TerminalView {
    fn set_file_name(&mut self, display: FileNameDisplay) {
        let file = display.text();
        info!(file, "file picker updated");
        self.page.set_file_name(display);
    }

    fn show_banner(&mut self, banner: Banner) {
        error!("{}", banner.text);
        self.page.show_banner(banner);
    }

    fn hide_banner(&mut self) {
        self.page.hide_banner();
    }

    fn set_loading_visible(&mut self, visible: bool) {
        if visible && !self.page.loading_visible {
            info!("loading...");
        }
        self.page.set_loading_visible(visible);
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.page.set_result_visible(visible);
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        self.page.set_submit_control(enabled, label);
    }

    fn set_average_value(&mut self, text: &str) {
        self.page.set_average_value(text);
    }

    fn set_map_source(&mut self, source: &str) {
        self.page.set_map_source(source);
    }

    fn scroll_result_into_view(&mut self, behavior: ScrollBehavior, block: ScrollBlock) {
        self.page.scroll_result_into_view(behavior, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_result_only_when_visible() {
        let mut view = TerminalView::default();
        view.set_file_name(FileNameDisplay::Chosen("report.csv".into()));
        view.set_average_value("₹50,000.00");
        view.set_map_source("/map?t=1");
        assert_eq!(view.summary(), "File: report.csv");

        view.set_result_visible(true);
        assert_eq!(
            view.summary(),
            "File: report.csv\nAverage sales: ₹50,000.00\nMap: /map?t=1"
        );
    }

    #[test]
    fn summary_includes_banner() {
        let mut view = TerminalView::default();
        view.show_banner(Banner::error("Please select a file first."));
        assert_eq!(
            view.summary(),
            "File: No file chosen\nPlease select a file first."
        );
    }
}
