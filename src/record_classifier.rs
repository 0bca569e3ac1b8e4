use crate::classifiers::choices::ClassifierChoice;
use crate::classifiers::classifier::Classifier;
use crate::core::instance_header::InstanceHeader;
use crate::error::{ClassifierError, PredictionError};
use crate::records::{Record, SchemaBuilder, encoder};
use std::sync::Arc;

pub struct RecordClassifier {
    builder: SchemaBuilder,
    model: Box<dyn Classifier>,
    header: Option<Arc<InstanceHeader>>,
}

impl RecordClassifier {
    pub fn new(choice: &ClassifierChoice) -> Self {
        Self::with_classifier(choice.build())
    }

    pub fn with_classifier(model: Box<dyn Classifier>) -> Self {
        Self {
            builder: SchemaBuilder::new(),
            model,
            header: None,
        }
    }

    pub fn with_numeric_attributes(choice: &ClassifierChoice, names: &[&str]) -> Self {
        Self {
            builder: SchemaBuilder::with_numeric_attributes(names),
            model: choice.build(),
            header: None,
        }
    }

    pub fn declare_numeric(&mut self, name: &str) -> Result<(), ClassifierError> {
        self.builder.declare_numeric(name)?;
        Ok(())
    }

    pub fn declare_domain(&mut self, name: &str, values: &[&str]) -> Result<(), ClassifierError> {
        self.builder.declare_domain(name, values)?;
        Ok(())
    }

    pub fn add_record(&mut self, record: Record) {
        self.builder.add_record(record);
    }

    pub fn record_count(&self) -> usize {
        self.builder.len()
    }

    pub fn is_trained(&self) -> bool {
        self.header.is_some()
    }

    pub fn header(&self) -> Option<&Arc<InstanceHeader>> {
        self.header.as_ref()
    }

    pub fn learn(&mut self, class_attribute: &str) -> Result<(), ClassifierError> {
        let header = Arc::new(self.builder.finalize(class_attribute)?);
        let dataset = encoder::encode_dataset(&header, self.builder.records())?;
        self.model.train(&dataset)?;
        self.header = Some(header);
        Ok(())
    }

    pub fn classify(&self, record: &Record) -> Result<String, ClassifierError> {
        let header = self.header.as_ref().ok_or(PredictionError::NotTrained)?;
        let instance = encoder::encode_query(header, record)?;
        let index = self.model.classify(&instance)?;
        let label = header
            .class_attribute()
            .and_then(|attribute| attribute.as_nominal())
            .and_then(|nominal| nominal.value(index))
            .ok_or(PredictionError::ClassIndexOutOfRange { index })?;
        Ok(label.to_string())
    }
}
