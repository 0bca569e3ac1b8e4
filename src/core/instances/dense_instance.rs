use crate::core::instance_header::InstanceHeader;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct DenseInstance {
    header: Arc<InstanceHeader>,
    values: Vec<f64>,
    weight: f64,
}

impl DenseInstance {
    pub fn new(header: Arc<InstanceHeader>, values: Vec<f64>, weight: f64) -> DenseInstance {
        DenseInstance {
            header,
            values,
            weight,
        }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn value_at_index(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    pub fn is_missing_at_index(&self, index: usize) -> bool {
        self.values.get(index).is_none_or(|value| value.is_nan())
    }

    pub fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    pub fn class_index(&self) -> usize {
        self.header.class_index()
    }

    pub fn class_value(&self) -> Option<f64> {
        let value = self.value_at_index(self.header.class_index())?;
        if value.is_nan() { None } else { Some(value) }
    }
}
