//! Page surface driven by the upload workflow controller.

use shared::domain::{Banner, FileNameDisplay, ScrollBehavior, ScrollBlock};

/// The page regions the upload workflow touches. Implementations only render;
/// every decision about what is visible is made by the controller.
pub trait PageView {
    fn set_file_name(&mut self, display: FileNameDisplay);
    fn show_banner(&mut self, banner: Banner);
    fn hide_banner(&mut self);
    fn set_loading_visible(&mut self, visible: bool);
    fn set_result_visible(&mut self, visible: bool);
    fn set_submit_control(&mut self, enabled: bool, label: &str);
    fn set_average_value(&mut self, text: &str);
    fn set_map_source(&mut self, source: &str);
    fn scroll_result_into_view(&mut self, behavior: ScrollBehavior, block: ScrollBlock);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Loading,
    Banner,
    Result,
}

/// In-memory page model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PageState {
    pub file_name: FileNameDisplay,
    pub banner: Option<Banner>,
    pub loading_visible: bool,
    pub result_visible: bool,
    pub submit_enabled: bool,
    pub submit_label: String,
    pub average_value: String,
    pub map_source: Option<String>,
    pub scroll_requests: usize,
}

impl PageState {
    pub fn visible_regions(&self) -> Vec<Region> {
        let mut regions = Vec::new();
        if self.loading_visible {
            regions.push(Region::Loading);
        }
        if self.banner.is_some() {
            regions.push(Region::Banner);
        }
        if self.result_visible {
            regions.push(Region::Result);
        }
        regions
    }

    pub fn banner_text(&self) -> Option<&str> {
        self.banner.as_ref().map(|banner| banner.text.as_str())
    }
}

impl PageView for PageState {
    fn set_file_name(&mut self, display: FileNameDisplay) {
        self.file_name = display;
    }

    fn show_banner(&mut self, banner: Banner) {
        self.banner = Some(banner);
    }

    fn hide_banner(&mut self) {
        self.banner = None;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_visible = visible;
    }

    fn set_result_visible(&mut self, visible: bool) {
        self.result_visible = visible;
    }

    fn set_submit_control(&mut self, enabled: bool, label: &str) {
        self.submit_enabled = enabled;
        self.submit_label = label.to_string();
    }

    fn set_average_value(&mut self, text: &str) {
        self.average_value = text.to_string();
    }

    fn set_map_source(&mut self, source: &str) {
        self.map_source = Some(source.to_string());
    }

    fn scroll_result_into_view(&mut self, _behavior: ScrollBehavior, _block: ScrollBlock) {
        self.scroll_requests += 1;
    }
}
