use tracing::debug;

use crate::scan::LongestMapping;

/// распределение длин декомпозиций, в порядке убывания количества строк
pub fn print(result: &LongestMapping)
{
    let mut keys: Vec<&usize> = result.lengths.keys().collect();
    keys.sort_by(|a, b| result.lengths[*b].cmp(&result.lengths[*a]).then(a.cmp(b)));

    for key in keys {
        debug!(length = *key, records = result.lengths[key], "mapping length");
    }
}
