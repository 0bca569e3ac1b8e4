use crate::core::attributes::Attribute;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::EncodingError;
use crate::records::{RawValue, Record};
use std::sync::Arc;

pub fn encode_dataset(
    header: &Arc<InstanceHeader>,
    records: &[Record],
) -> Result<Dataset, EncodingError> {
    let mut instances = Vec::with_capacity(records.len());
    for record in records {
        let values = encode_values(header, record, true)?;
        instances.push(DenseInstance::new(header.clone(), values, 1.0));
    }
    Ok(Dataset::new(header.clone(), instances))
}

pub fn encode_query(
    header: &Arc<InstanceHeader>,
    record: &Record,
) -> Result<DenseInstance, EncodingError> {
    let values = encode_values(header, record, false)?;
    Ok(DenseInstance::new(header.clone(), values, 1.0))
}

fn encode_values(
    header: &InstanceHeader,
    record: &Record,
    with_class: bool,
) -> Result<Vec<f64>, EncodingError> {
    for (name, _) in record.iter() {
        if header.index_of_attribute(name).is_none() {
            return Err(EncodingError::UnknownAttribute {
                name: name.to_string(),
            });
        }
    }

    let mut values = Vec::with_capacity(header.number_of_attributes());
    for (index, attribute) in header.attributes.iter().enumerate() {
        if !with_class && index == header.class_index() {
            values.push(f64::NAN);
            continue;
        }
        let raw = record
            .get(attribute.name())
            .ok_or_else(|| EncodingError::MissingAttribute {
                name: attribute.name().to_string(),
            })?;
        values.push(encode_value(attribute, raw)?);
    }
    Ok(values)
}

fn encode_value(attribute: &Attribute, raw: &RawValue) -> Result<f64, EncodingError> {
    match attribute {
        Attribute::Numeric(_) => match raw {
            RawValue::Numeric(number) => Ok(*number),
            RawValue::Text(text) => {
                text.trim()
                    .parse::<f64>()
                    .map_err(|_| EncodingError::InvalidNumericValue {
                        attribute: attribute.name().to_string(),
                        value: text.clone(),
                    })
            }
        },
        Attribute::Nominal(nominal) => {
            let label = raw.to_string();
            let index = nominal.index_of_value(&label).ok_or_else(|| {
                EncodingError::ValueOutsideDomain {
                    attribute: attribute.name().to_string(),
                    value: label.clone(),
                }
            })?;
            Ok(index as f64)
        }
    }
}
