use crate::core::attributes::{Attribute, AttributeRef};
use std::fmt;

pub struct InstanceHeader {
    relation_name: String,
    pub attributes: Vec<AttributeRef>,
    class_index: usize,
}

impl InstanceHeader {
    pub fn new(
        relation_name: String,
        attributes: Vec<AttributeRef>,
        class_index: usize,
    ) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes,
            class_index,
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn attribute_at_index(&self, index: usize) -> Option<&Attribute> {
        self.attributes.get(index).map(|attribute| attribute.as_ref())
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        for (i, attribute) in self.attributes.iter().enumerate() {
            if attribute.name() == name {
                return Some(i);
            }
        }
        None
    }

    pub fn class_index(&self) -> usize {
        self.class_index
    }

    pub fn class_attribute(&self) -> Option<&Attribute> {
        self.attribute_at_index(self.class_index)
    }

    pub fn number_of_classes(&self) -> usize {
        match self.class_attribute() {
            Some(Attribute::Nominal(nominal)) => nominal.values.len(),
            _ => 0,
        }
    }

    pub fn arff_representation(&self) -> String {
        let mut out = format!("@relation {}\n", self.relation_name);
        for attribute in &self.attributes {
            out.push_str(&attribute.arff_representation());
            out.push('\n');
        }
        out
    }
}

impl fmt::Debug for InstanceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHeader")
            .field("relation_name", &self.relation_name)
            .field("class_index", &self.class_index)
            .field("n_attributes", &self.attributes.len())
            .finish()
    }
}
