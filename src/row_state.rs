//! Row Edit State
//!
//! Two-state machine behind each task row plus the focus rule applied after
//! a render pass.

/// Which template a row renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RowMode {
    #[default]
    Viewing,
    Editing,
}

/// Element that should receive focus after a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    EditField,
    EditButton,
}

/// Local state owned by one row
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowState {
    mode: RowMode,
    draft: String,
}

impl RowState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> RowMode {
        self.mode
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn begin_edit(&mut self) {
        self.mode = RowMode::Editing;
        self.draft.clear();
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Leave edit mode without emitting anything.
    pub fn cancel(&mut self) {
        self.mode = RowMode::Viewing;
        self.draft.clear();
    }

    /// Leave edit mode and hand back the draft for the owner to apply,
    /// whether or not it is empty or changed.
    pub fn save(&mut self) -> String {
        self.mode = RowMode::Viewing;
        std::mem::take(&mut self.draft)
    }
}

/// Focus move implied by the mode seen on the previous pass and now.
/// A missing previous snapshot counts as `Viewing`.
pub fn focus_after_render(was: Option<RowMode>, now: RowMode) -> Option<FocusTarget> {
    match (was.unwrap_or_default(), now) {
        (RowMode::Viewing, RowMode::Editing) => Some(FocusTarget::EditField),
        (RowMode::Editing, RowMode::Viewing) => Some(FocusTarget::EditButton),
        _ => None,
    }
}
