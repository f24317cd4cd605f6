pub mod record;
pub mod record_file;

pub use record::{EpigraphRecord, NoteRecord, TranslationRecord};
pub use record_file::RecordFile;
