use super::{NominalAttribute, NumericAttribute};
use std::sync::Arc;

pub type AttributeRef = Arc<Attribute>;

#[derive(Debug, Clone)]
pub enum Attribute {
    Numeric(NumericAttribute),
    Nominal(NominalAttribute),
}

impl Attribute {
    pub fn name(&self) -> &str {
        match self {
            Attribute::Numeric(attribute) => &attribute.name,
            Attribute::Nominal(attribute) => &attribute.name,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Attribute::Numeric(_))
    }

    pub fn is_nominal(&self) -> bool {
        matches!(self, Attribute::Nominal(_))
    }

    pub fn as_nominal(&self) -> Option<&NominalAttribute> {
        match self {
            Attribute::Nominal(attribute) => Some(attribute),
            Attribute::Numeric(_) => None,
        }
    }

    pub fn arff_representation(&self) -> String {
        match self {
            Attribute::Numeric(attribute) => attribute.arff_representation(),
            Attribute::Nominal(attribute) => attribute.arff_representation(),
        }
    }
}
