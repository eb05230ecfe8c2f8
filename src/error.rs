use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::record::Field;

pub type Result<T> = std::result::Result<T, ScanError>;

/// ошибки разбора UnicodeData.txt, все они фатальны
#[derive(Error, Debug)]
pub enum ScanError
{
    /// файл не найден или недоступен для чтения
    #[error("cannot open {}", .path.display())]
    Open
    {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// ошибка чтения посреди файла (в т.ч. невалидный UTF-8)
    #[error("cannot read line {line}")]
    Read
    {
        line: usize,
        #[source]
        source: io::Error,
    },

    /// в строке меньше колонок, чем нужно для запрошенного свойства
    #[error("malformed record at line {line}: {fields} fields, no {field} (column {})", .field.index())]
    MalformedRecord
    {
        line: usize,
        fields: usize,
        field: Field,
    },
}
