use crate::error::{Result, ScanError};

mod field;

pub use field::Field;

/// разделитель колонок в UnicodeData.txt
pub const FIELD_DELIMITER: char = ';';

/// разделитель кодов в декомпозиции
pub const MAPPING_DELIMITER: char = ' ';

/// минимальное количество колонок, при котором есть декомпозиция
pub const MIN_FIELDS: usize = Field::DecompositionMapping.index() + 1;

/// строка UnicodeData.txt, разбитая на колонки
/// данные не копируются, колонки ссылаются на исходную строку
#[derive(Debug, Clone)]
pub struct Record<'a>
{
    /// номер строки в файле, начиная с 1
    pub line: usize,
    /// колонки в порядке следования
    fields: Vec<&'a str>,
}

impl<'a> Record<'a>
{
    /// разбить строку на колонки
    pub fn parse(text: &'a str, line: usize) -> Self
    {
        Self {
            line,
            fields: text.split(FIELD_DELIMITER).collect(),
        }
    }

    /// количество колонок
    pub fn len(&self) -> usize
    {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.fields.is_empty()
    }

    /// значение колонки; короткая строка - ошибка, а не пустое значение
    pub fn get(&self, field: Field) -> Result<&'a str>
    {
        match self.fields.get(field.index()) {
            Some(&value) => Ok(value),
            None => Err(ScanError::MalformedRecord {
                line: self.line,
                fields: self.len(),
                field,
            }),
        }
    }

    /// декомпозиция (5 колонка) в исходном виде, вместе с тегом
    pub fn decomposition_mapping(&self) -> Result<&'a str>
    {
        self.get(Field::DecompositionMapping)
    }
}

/// длина декомпозиции: количество частей, разделенных одиночным пробелом
///
/// пустая строка - это одна пустая часть, т.е. длина 1. тег (`<compat>` и т.п.)
/// считается наравне с кодами, двойные пробелы дают пустые части.
#[inline]
pub fn mapping_length(mapping: &str) -> usize
{
    mapping.split(MAPPING_DELIMITER).count()
}

#[cfg(test)]
mod tests
{
    use super::*;

    const LATIN_A: &str = "0041;LATIN CAPITAL LETTER A;Lu;0;L;;;;;N;;;;0061;";
    const A_GRAVE: &str = "00C0;LATIN CAPITAL LETTER A WITH GRAVE;Lu;0;L;0041 0300;;;;N;;;;00E0;";

    #[test]
    fn full_record()
    {
        let record = Record::parse(A_GRAVE, 1);

        assert_eq!(record.len(), 15);
        assert_eq!(record.get(Field::Codepoint).unwrap(), "00C0");
        assert_eq!(record.get(Field::GeneralCategory).unwrap(), "Lu");
        assert_eq!(record.decomposition_mapping().unwrap(), "0041 0300");
        assert_eq!(record.get(Field::LowercaseMapping).unwrap(), "00E0");
        assert_eq!(record.get(Field::TitlecaseMapping).unwrap(), "");
    }

    #[test]
    fn empty_mapping()
    {
        let record = Record::parse(LATIN_A, 1);
        let mapping = record.decomposition_mapping().unwrap();

        assert_eq!(mapping, "");
        assert_eq!(mapping_length(mapping), 1);
    }

    #[test]
    fn short_record()
    {
        let record = Record::parse("0041;LATIN CAPITAL LETTER A;Lu", 7);

        assert_eq!(record.len(), 3);

        match record.decomposition_mapping() {
            Err(ScanError::MalformedRecord { line, fields, field }) => {
                assert_eq!(line, 7);
                assert_eq!(fields, 3);
                assert_eq!(field, Field::DecompositionMapping);
            }
            other => panic!("{:?}", other),
        }
    }

    #[test]
    fn exactly_six_fields()
    {
        let record = Record::parse("0;1;2;3;4;0041 0301", 1);

        assert_eq!(record.len(), MIN_FIELDS);
        assert_eq!(record.decomposition_mapping().unwrap(), "0041 0301");
        assert!(record.get(Field::DecimalDigitValue).is_err());
    }

    #[test]
    fn lengths()
    {
        assert_eq!(mapping_length("0041"), 1);
        assert_eq!(mapping_length("<compat> 0020 0308"), 3);
        // пробел в конце дает пустую часть
        assert_eq!(mapping_length("0041 "), 2);
        assert_eq!(mapping_length("0041  0300"), 3);
    }
}
