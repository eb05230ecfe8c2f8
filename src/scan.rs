use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info};

use crate::error::{Result, ScanError};
use crate::record::{mapping_length, Record};

/// самая длинная декомпозиция в файле
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LongestMapping
{
    /// количество частей декомпозиции; 0 - если строк не было
    pub length: usize,
    /// декомпозиция в исходном виде (с тегом и пробелами)
    pub mapping: Option<String>,
    /// номер строки, в которой она встретилась
    pub line: Option<usize>,
    /// сколько всего строк просмотрено
    pub records: usize,
    /// длина декомпозиции -> количество строк с такой длиной
    pub lengths: BTreeMap<usize, usize>,
}

impl LongestMapping
{
    /// учесть очередную декомпозицию. при равной длине остается первая
    fn update(&mut self, mapping: &str, line: usize)
    {
        let length = mapping_length(mapping);

        self.records += 1;
        self.lengths.entry(length).and_modify(|c| *c += 1).or_insert(1);

        if length > self.length {
            debug!(line, length, mapping, "new longest mapping");

            self.length = length;
            self.mapping = Some(mapping.to_owned());
            self.line = Some(line);
        }
    }
}

/// пройти по строкам UnicodeData.txt и найти самую длинную декомпозицию
///
/// первая же строка, в которой нет 5 колонки, прерывает разбор с ошибкой
/// [`ScanError::MalformedRecord`].
pub fn scan<R: BufRead>(reader: R) -> Result<LongestMapping>
{
    let mut longest = LongestMapping::default();

    for (i, line) in reader.lines().enumerate() {
        let number = i + 1;
        let line = line.map_err(|source| ScanError::Read {
            line: number,
            source,
        })?;

        let record = Record::parse(&line, number);

        longest.update(record.decomposition_mapping()?, number);
    }

    info!(
        records = longest.records,
        length = longest.length,
        line = longest.line,
        "scan finished"
    );

    Ok(longest)
}

/// открыть файл для последующего [`scan`]
pub fn open<P: AsRef<Path>>(path: P) -> Result<BufReader<File>>
{
    let path = path.as_ref();

    let file = File::open(path).map_err(|source| ScanError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), "opened");

    Ok(BufReader::new(file))
}

/// открыть файл и просканировать его
pub fn scan_file<P: AsRef<Path>>(path: P) -> Result<LongestMapping>
{
    scan(open(path)?)
}
