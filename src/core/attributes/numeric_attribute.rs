#[derive(Debug, Clone)]
pub struct NumericAttribute {
    pub name: String,
}

impl NumericAttribute {
    pub fn new(name: String) -> NumericAttribute {
        NumericAttribute { name }
    }

    pub fn arff_representation(&self) -> String {
        format!("@attribute {} numeric", self.name)
    }
}
