pub mod output;
pub mod record;

mod error;
mod scan;

pub use error::Result;
pub use error::ScanError;

pub use record::mapping_length;
pub use record::Field;
pub use record::Record;

pub use scan::open;
pub use scan::scan;
pub use scan::scan_file;
pub use scan::LongestMapping;

/// файл с данными UCD, ищется в текущей директории
pub const INPUT_FILE: &str = "UnicodeData.txt";
