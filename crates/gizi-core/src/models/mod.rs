pub mod category;
pub mod measurement;
pub mod reference;
pub mod result;
pub mod status;
pub mod subject;
