/// An ordered, immutable list of selectable labels with at most one
/// selected entry. The label sequence is fixed at construction and lives
/// for the whole session.
pub struct OptionList {
    labels: Vec<String>,
    selected: Option<usize>,
}

impl OptionList {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            selected: None,
        }
    }

    /// Select the entry at `index`. The previous selection (if any) is
    /// replaced — last click wins. Out-of-range indices are ignored with
    /// a warning and leave the selection untouched. Returns true if the
    /// selection changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.labels.len() {
            log::warn!(
                "option index {} out of range (len {})",
                index,
                self.labels.len()
            );
            return false;
        }
        if self.selected == Some(index) {
            return false;
        }
        self.selected = Some(index);
        true
    }

    /// Currently selected index, if any.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Label of the currently selected entry, if any.
    pub fn selected_label(&self) -> Option<&str> {
        self.selected.map(|i| self.labels[i].as_str())
    }

    /// Whether the entry at `index` is the selected one.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Label at `index`, if in range.
    pub fn label(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    /// Iterate over all labels in order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
