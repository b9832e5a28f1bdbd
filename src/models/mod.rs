mod entry;
mod student;

pub use entry::EntryRecord;
pub use student::Student;
