use crate::core::instance_header::InstanceHeader;
use crate::core::instances::DenseInstance;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Dataset {
    header: Arc<InstanceHeader>,
    instances: Vec<DenseInstance>,
}

impl Dataset {
    pub fn new(header: Arc<InstanceHeader>, instances: Vec<DenseInstance>) -> Dataset {
        Dataset { header, instances }
    }

    pub fn header(&self) -> &Arc<InstanceHeader> {
        &self.header
    }

    pub fn instances(&self) -> &[DenseInstance] {
        &self.instances
    }

    pub fn instances_mut(&mut self) -> &mut [DenseInstance] {
        &mut self.instances
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    pub fn number_of_classes(&self) -> usize {
        self.header.number_of_classes()
    }

    pub fn class_distribution(&self) -> Vec<f64> {
        let mut distribution = vec![0.0; self.number_of_classes()];
        for instance in &self.instances {
            if let Some(class) = instance.class_value() {
                let class = class as usize;
                if class < distribution.len() {
                    distribution[class] += instance.weight();
                }
            }
        }
        distribution
    }

    pub fn distinct_class_count(&self) -> usize {
        self.class_distribution()
            .iter()
            .filter(|&&weight| weight > 0.0)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::attributes::{Attribute, NominalAttribute, NumericAttribute};

    fn sex_subject_header() -> Arc<InstanceHeader> {
        Arc::new(InstanceHeader::new(
            "records".into(),
            vec![
                Arc::new(Attribute::Nominal(NominalAttribute::from_labels(
                    "sex",
                    &["m", "f"],
                ))),
                Arc::new(Attribute::Nominal(NominalAttribute::from_labels(
                    "subject",
                    &["CS", "Phil"],
                ))),
            ],
            1,
        ))
    }

    fn instance(header: &Arc<InstanceHeader>, values: Vec<f64>, weight: f64) -> DenseInstance {
        DenseInstance::new(header.clone(), values, weight)
    }

    #[test]
    fn class_distribution_accumulates_weights() {
        let header = sex_subject_header();
        let dataset = Dataset::new(
            header.clone(),
            vec![
                instance(&header, vec![0.0, 0.0], 1.0),
                instance(&header, vec![0.0, 0.0], 2.0),
                instance(&header, vec![1.0, 1.0], 1.0),
            ],
        );
        assert_eq!(dataset.class_distribution(), vec![3.0, 1.0]);
        assert_eq!(dataset.distinct_class_count(), 2);
    }

    #[test]
    fn distinct_class_count_ignores_unobserved_domain_values() {
        let header = sex_subject_header();
        let dataset = Dataset::new(
            header.clone(),
            vec![
                instance(&header, vec![0.0, 0.0], 1.0),
                instance(&header, vec![1.0, 0.0], 1.0),
            ],
        );
        assert_eq!(dataset.distinct_class_count(), 1);
    }

    #[test]
    fn numeric_class_reports_no_classes() {
        let header = Arc::new(InstanceHeader::new(
            "records".into(),
            vec![
                Arc::new(Attribute::Nominal(NominalAttribute::from_labels(
                    "sex",
                    &["m", "f"],
                ))),
                Arc::new(Attribute::Numeric(NumericAttribute::new("age".into()))),
            ],
            1,
        ));
        let dataset = Dataset::new(
            header.clone(),
            vec![instance(&header, vec![0.0, 30.0], 1.0)],
        );
        assert_eq!(dataset.number_of_classes(), 0);
        assert_eq!(dataset.distinct_class_count(), 0);
    }
}
