/// Knowledge files attached to the next send. The picker owns uniqueness;
/// this only stores what it reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeSelection {
    ids: Vec<String>,
}

impl KnowledgeSelection {
    pub fn new(ids: Vec<String>) -> Self {
        Self { ids }
    }

    /// Stores the set reported back by the picker.
    pub fn replace(&mut self, ids: Vec<String>) {
        self.ids = ids;
    }

    /// Adds `id`, or removes it when already selected.
    pub fn toggle(&mut self, id: &str) {
        if let Some(pos) = self.ids.iter().position(|s| s == id) {
            self.ids.remove(pos);
        } else {
            self.ids.push(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|s| s == id)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.clone()
    }

    /// Text of the count badge, `None` when nothing is selected.
    pub fn badge_label(&self) -> Option<String> {
        match self.ids.len() {
            0 => None,
            1 => Some("1 file selected".to_string()),
            n => Some(format!("{n} files selected")),
        }
    }
}
