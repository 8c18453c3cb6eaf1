use std::path::Path;

pub mod png;

const PNG_SUFFIX: &[u8] = b".png";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
}

impl OutputFormat {
    /// Selects the format by the suffix after the last dot of the path,
    /// matched case-sensitively. A file named just `.png` counts as PNG.
    pub fn from_path(path: &Path) -> Option<Self> {
        let path = path.as_os_str().as_encoded_bytes();
        if path.ends_with(PNG_SUFFIX) {
            return Some(Self::Png);
        }
        None
    }
}
