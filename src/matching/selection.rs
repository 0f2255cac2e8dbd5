/// Symptoms picked one at a time, rendered as matcher input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymptomSelection {
    symptoms: Vec<String>,
}

impl SymptomSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symptom unless it is already selected. Returns true if added.
    pub fn add(&mut self, symptom: impl Into<String>) -> bool {
        let symptom = symptom.into();
        if self.symptoms.contains(&symptom) {
            return false;
        }
        self.symptoms.push(symptom);
        true
    }

    /// Remove a symptom. Returns true if it was selected.
    pub fn remove(&mut self, symptom: &str) -> bool {
        let before = self.symptoms.len();
        self.symptoms.retain(|s| s != symptom);
        self.symptoms.len() != before
    }

    pub fn clear(&mut self) {
        self.symptoms.clear();
    }

    /// Comma-separated text accepted by [`SymptomQuery::parse`](super::query::SymptomQuery::parse)
    pub fn to_input(&self) -> String {
        self.symptoms.join(", ")
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SymptomSelection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Self::new();
        for symptom in iter {
            selection.add(symptom);
        }
        selection
    }
}
