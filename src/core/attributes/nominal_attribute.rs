use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn from_labels(name: &str, labels: &[&str]) -> NominalAttribute {
        let mut attribute = NominalAttribute::new(name.to_string());
        for label in labels {
            attribute.add_value(label);
        }
        attribute
    }

    pub fn add_value(&mut self, label: &str) -> usize {
        if let Some(&index) = self.label_to_index.get(label) {
            return index;
        }
        let index = self.values.len();
        self.values.push(label.to_string());
        self.label_to_index.insert(label.to_string(), index);
        index
    }

    pub fn index_of_value(&self, label: &str) -> Option<usize> {
        self.label_to_index.get(label).copied()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn arff_representation(&self) -> String {
        format!("@attribute {} {{ {} }}", self.name, self.values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_value_keeps_first_seen_order() {
        let mut attribute = NominalAttribute::new("subject".into());
        assert_eq!(attribute.add_value("CS"), 0);
        assert_eq!(attribute.add_value("Phil"), 1);
        assert_eq!(attribute.add_value("Math"), 2);
        assert_eq!(attribute.values, vec!["CS", "Phil", "Math"]);
    }

    #[test]
    fn add_value_is_duplicate_insensitive() {
        let mut attribute = NominalAttribute::new("sex".into());
        attribute.add_value("m");
        attribute.add_value("f");
        assert_eq!(attribute.add_value("m"), 0);
        assert_eq!(attribute.values.len(), 2);
        assert_eq!(attribute.label_to_index.len(), 2);
    }

    #[test]
    fn index_and_value_are_inverse() {
        let attribute = NominalAttribute::from_labels("sex", &["m", "f"]);
        assert_eq!(attribute.index_of_value("f"), Some(1));
        assert_eq!(attribute.value(1), Some("f"));
        assert_eq!(attribute.index_of_value("x"), None);
        assert_eq!(attribute.value(2), None);
    }

    #[test]
    fn arff_representation_lists_the_domain() {
        let attribute = NominalAttribute::from_labels("outlook", &["sunny", "rainy"]);
        assert_eq!(
            attribute.arff_representation(),
            "@attribute outlook { sunny, rainy }"
        );
    }
}
