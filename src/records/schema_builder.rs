use crate::core::attributes::{Attribute, AttributeRef, NominalAttribute, NumericAttribute};
use crate::core::instance_header::InstanceHeader;
use crate::error::SchemaError;
use crate::records::Record;
use std::sync::Arc;

const RELATION_NAME: &str = "instances";

pub struct SchemaBuilder {
    numeric_names: Vec<String>,
    domains: Vec<NominalAttribute>,
    records: Vec<Record>,
}

impl SchemaBuilder {
    pub fn new() -> SchemaBuilder {
        SchemaBuilder {
            numeric_names: Vec::new(),
            domains: Vec::new(),
            records: Vec::new(),
        }
    }

    pub fn with_numeric_attributes(names: &[&str]) -> SchemaBuilder {
        let mut builder = SchemaBuilder::new();
        for name in names {
            if !builder.is_numeric(name) {
                builder.numeric_names.push((*name).to_string());
            }
        }
        builder
    }

    pub fn declare_numeric(&mut self, name: &str) -> Result<(), SchemaError> {
        if self.domain(name).is_some() {
            return Err(SchemaError::KindConflict {
                name: name.to_string(),
            });
        }
        if !self.is_numeric(name) {
            self.numeric_names.push(name.to_string());
        }
        Ok(())
    }

    pub fn declare_domain(&mut self, name: &str, values: &[&str]) -> Result<(), SchemaError> {
        if self.is_numeric(name) {
            return Err(SchemaError::KindConflict {
                name: name.to_string(),
            });
        }
        let domain = self.domain_mut(name);
        for value in values {
            domain.add_value(value);
        }
        Ok(())
    }

    pub fn add_record(&mut self, record: Record) {
        for (name, value) in record.iter() {
            if self.is_numeric(name) {
                continue;
            }
            let label = value.to_string();
            self.domain_mut(name).add_value(&label);
        }
        self.records.push(record);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn finalize(&self, class_attribute: &str) -> Result<InstanceHeader, SchemaError> {
        let mut attributes: Vec<AttributeRef> = Vec::new();
        for name in &self.numeric_names {
            attributes.push(Arc::new(Attribute::Numeric(NumericAttribute::new(
                name.clone(),
            ))));
        }
        for domain in &self.domains {
            attributes.push(Arc::new(Attribute::Nominal(domain.clone())));
        }

        let class_index = attributes
            .iter()
            .position(|attribute| attribute.name() == class_attribute)
            .ok_or_else(|| SchemaError::UnknownClassAttribute {
                name: class_attribute.to_string(),
            })?;

        Ok(InstanceHeader::new(
            RELATION_NAME.to_string(),
            attributes,
            class_index,
        ))
    }

    fn is_numeric(&self, name: &str) -> bool {
        self.numeric_names.iter().any(|numeric| numeric == name)
    }

    fn domain(&self, name: &str) -> Option<&NominalAttribute> {
        self.domains.iter().find(|domain| domain.name == name)
    }

    fn domain_mut(&mut self, name: &str) -> &mut NominalAttribute {
        let position = match self.domains.iter().position(|domain| domain.name == name) {
            Some(position) => position,
            None => {
                self.domains.push(NominalAttribute::new(name.to_string()));
                self.domains.len() - 1
            }
        };
        &mut self.domains[position]
    }
}
