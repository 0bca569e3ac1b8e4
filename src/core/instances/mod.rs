mod dataset;
mod dense_instance;

pub use dataset::Dataset;
pub use dense_instance::DenseInstance;
