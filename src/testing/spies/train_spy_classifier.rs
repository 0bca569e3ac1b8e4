use crate::classifiers::Classifier;
use crate::core::instances::{Dataset, DenseInstance};
use crate::error::{PredictionError, TrainingError};
use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

pub struct TrainSpyHandle(Arc<AtomicU64>);
impl TrainSpyHandle {
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }
}

pub struct TrainSpyClassifier {
    count: Arc<AtomicU64>,
}

impl TrainSpyClassifier {
    pub fn new() -> (Self, TrainSpyHandle) {
        let counter = Arc::new(AtomicU64::new(0));
        (Self { count: counter.clone() }, TrainSpyHandle(counter))
    }
}

impl Classifier for TrainSpyClassifier {
    fn train(&mut self, _dataset: &Dataset) -> Result<(), TrainingError> {
        self.count.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    fn classify(&self, _instance: &DenseInstance) -> Result<usize, PredictionError> {
        Ok(0)
    }
}
