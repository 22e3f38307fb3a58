pub mod dataset;
pub mod palette;
pub mod payload;
pub mod record;

pub use dataset::Dataset;
pub use palette::Palette;
pub use record::ExpenditureRecord;
