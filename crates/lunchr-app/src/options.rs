//! Genre and area selector contents.
//!
//! Each list owns a fixed placeholder entry plus whatever the backend
//! returned. The genre list drops the backend's `code == ""` sentinel so
//! "no preference" exists exactly once (as the placeholder); the area list
//! appends everything after its own placeholder.

use lunchr_api::OptionEntry;

pub const GENRE_PLACEHOLDER: &str = "指定なし";
pub const AREA_PLACEHOLDER: &str = "エリアを選択してください";

#[derive(Debug, Clone)]
pub struct OptionList {
    placeholder: OptionEntry,
    entries: Vec<OptionEntry>,
    drop_sentinel: bool,
}

impl OptionList {
    /// An empty genre selector: "no preference" placeholder only.
    #[must_use]
    pub fn genres() -> Self {
        Self {
            placeholder: OptionEntry {
                code: String::new(),
                name: GENRE_PLACEHOLDER.to_owned(),
            },
            entries: Vec::new(),
            drop_sentinel: true,
        }
    }

    /// An empty area selector: "please select" placeholder only.
    #[must_use]
    pub fn areas() -> Self {
        Self {
            placeholder: OptionEntry {
                code: String::new(),
                name: AREA_PLACEHOLDER.to_owned(),
            },
            entries: Vec::new(),
            drop_sentinel: false,
        }
    }

    /// Replaces the selectable entries with a fresh backend list.
    pub fn replace(&mut self, entries: Vec<OptionEntry>) {
        self.entries = if self.drop_sentinel {
            entries.into_iter().filter(|e| !e.code.is_empty()).collect()
        } else {
            entries
        };
    }

    #[must_use]
    pub fn placeholder(&self) -> &OptionEntry {
        &self.placeholder
    }

    /// The backend-provided entries, excluding the placeholder.
    #[must_use]
    pub fn selectable(&self) -> &[OptionEntry] {
        &self.entries
    }

    /// Everything a selector renders: placeholder first, then entries.
    pub fn iter(&self) -> impl Iterator<Item = &OptionEntry> {
        std::iter::once(&self.placeholder).chain(self.entries.iter())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
