mod smo;
mod svm;

pub use svm::Svm;
