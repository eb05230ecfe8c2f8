use std::io::{self, Write};

use crate::scan::LongestMapping;

mod stats;

pub use stats::print as print_stats;

/// выводится до начала разбора файла
pub const PROMPT: &str = "Longest mapping is: ";

/// пишем приглашение без перевода строки и сразу сбрасываем буфер,
/// чтобы оно появилось до чтения файла
pub fn write_prompt<W: Write>(w: &mut W) -> io::Result<()>
{
    write!(w, "{}", PROMPT)?;
    w.flush()
}

/// пишем длину и саму декомпозицию, каждую с новой строки
/// если строк в файле не было - вместо декомпозиции пустая строка
pub fn write_result<W: Write>(w: &mut W, result: &LongestMapping) -> io::Result<()>
{
    writeln!(w, "{}", result.length)?;
    writeln!(w, "{}", result.mapping.as_deref().unwrap_or_default())?;
    w.flush()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn prompt_and_result()
    {
        let result = LongestMapping {
            length: 2,
            mapping: Some("0041 0300".to_owned()),
            line: Some(2),
            records: 2,
            ..Default::default()
        };

        let mut output = Vec::new();

        write_prompt(&mut output).unwrap();
        write_result(&mut output, &result).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "Longest mapping is: 2\n0041 0300\n");
    }

    #[test]
    fn absent_mapping()
    {
        let mut output = Vec::new();

        write_result(&mut output, &LongestMapping::default()).unwrap();

        assert_eq!(output, b"0\n\n");
    }
}
