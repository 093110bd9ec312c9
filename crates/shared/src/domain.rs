/// The file the user picked, held until it is uploaded or replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    Idle,
    Submitting,
    ShowingError,
    ShowingResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FileNameDisplay {
    #[default]
    NoFileChosen,
    Chosen(String),
}

impl FileNameDisplay {
    pub const NO_FILE_TEXT: &'static str = "No file chosen";

    pub fn text(&self) -> &str {
        match self {
            Self::NoFileChosen => Self::NO_FILE_TEXT,
            Self::Chosen(name) => name,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        matches!(self, Self::Chosen(_))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
}

impl Banner {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: BannerKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBlock {
    Start,
}
