//! Keyed columnar transposition.
//!
//! The plaintext is written row by row under a key, one column per key
//! character. Columns are then read in the alphabetical order of their key
//! characters, ties broken left to right.

/// Errors raised by columnar transposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ColumnarError {
    /// The key has no characters.
    #[display("columnar key is empty")]
    EmptyKey,
    /// Rows passed to [`transpose`] differ in length.
    #[display("row {row} has {actual} characters, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        actual: usize,
    },
}

/// Computes the order in which columns are read when encoding.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::columnar::encoding_mapping;
///
/// assert_eq!(encoding_mapping("ALBERT"), [0, 2, 3, 1, 4, 5]);
/// ```
#[must_use]
pub fn encoding_mapping(key: &str) -> Vec<usize> {
    let key: Vec<char> = key.chars().collect();
    let mut mapping: Vec<usize> = (0..key.len()).collect();
    // Stable, so equal key characters keep their left-to-right order.
    mapping.sort_by_key(|&i| key[i]);
    mapping
}

/// Computes the inverse of [`encoding_mapping`].
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::columnar::decoding_mapping;
///
/// assert_eq!(decoding_mapping("ALBERT"), [0, 3, 1, 2, 4, 5]);
/// ```
#[must_use]
pub fn decoding_mapping(key: &str) -> Vec<usize> {
    let encoding = encoding_mapping(key);
    let mut decoding = vec![0; encoding.len()];
    for (dst, &src) in encoding.iter().enumerate() {
        decoding[src] = dst;
    }
    decoding
}

fn shuffle<T: Clone>(data: &[T], mapping: &[usize]) -> Vec<T> {
    debug_assert_eq!(data.len(), mapping.len());
    mapping.iter().map(|&src| data[src].clone()).collect()
}

fn key_prefix(key: &str, len: usize) -> String {
    key.chars().take(len).collect()
}

/// Encodes `plaintext` with a columnar transposition under `key`.
///
/// With a `filler`, the last row is padded to the key length; without one,
/// missing cells are skipped when reading the columns.
///
/// # Errors
///
/// Returns [`ColumnarError::EmptyKey`] if `key` is empty.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::columnar_encode;
///
/// assert_eq!(columnar_encode("this is a test", "somekey", None)?, "stis ei hat st");
/// assert_eq!(columnar_encode("HELLOWORLD", "ALBERTHART", None)?, "HRLLOEOLWD");
/// # Ok::<(), pathgrid_cipher::ColumnarError>(())
/// ```
pub fn columnar_encode(
    plaintext: &str,
    key: &str,
    filler: Option<char>,
) -> Result<String, ColumnarError> {
    let key_len = key.chars().count();
    if key_len == 0 {
        return Err(ColumnarError::EmptyKey);
    }

    let chars: Vec<char> = plaintext.chars().collect();
    let rows: Vec<Vec<char>> = chars
        .chunks(key_len)
        .map(|row| {
            let mut row = row.to_vec();
            if let Some(filler) = filler {
                row.resize(key_len, filler);
            }
            shuffle(&row, &encoding_mapping(&key_prefix(key, row.len())))
        })
        .collect();

    Ok((0..key_len)
        .flat_map(|i| rows.iter().filter_map(move |row| row.get(i)))
        .collect())
}

/// Decodes text produced by [`columnar_encode`].
///
/// The decoding is exact when the text length is a multiple of the key
/// length, i.e. when it was encoded with a filler.
///
/// # Errors
///
/// Returns [`ColumnarError::EmptyKey`] if `key` is empty.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::columnar_decode;
///
/// assert_eq!(columnar_decode("stis ei hat st", "somekey")?, "this is a test");
/// # Ok::<(), pathgrid_cipher::ColumnarError>(())
/// ```
pub fn columnar_decode(encoded: &str, key: &str) -> Result<String, ColumnarError> {
    let key_len = key.chars().count();
    if key_len == 0 {
        return Err(ColumnarError::EmptyKey);
    }

    let chars: Vec<char> = encoded.chars().collect();
    if chars.is_empty() {
        return Ok(String::new());
    }

    let column_len = chars.len().div_ceil(key_len);
    let columns: Vec<&[char]> = chars.chunks(column_len).collect();
    let mapping = decoding_mapping(&key_prefix(key, key_len.min(columns.len())));
    let columns = shuffle(&columns, &mapping);

    let rows = columns.iter().map(|column| column.len()).max().unwrap_or(0);
    Ok((0..rows)
        .flat_map(|i| columns.iter().filter_map(move |column| column.get(i)))
        .collect())
}

/// Transposes equal-length strings.
///
/// # Errors
///
/// Returns [`ColumnarError::RaggedRows`] if the strings differ in length.
///
/// # Examples
///
/// ```
/// use pathgrid_cipher::transpose;
///
/// assert_eq!(transpose(&["HELLO", "WORLD"])?, ["HW", "EO", "LR", "LL", "OD"]);
/// # Ok::<(), pathgrid_cipher::ColumnarError>(())
/// ```
pub fn transpose<S: AsRef<str>>(strings: &[S]) -> Result<Vec<String>, ColumnarError> {
    let rows: Vec<Vec<char>> = strings.iter().map(|s| s.as_ref().chars().collect()).collect();
    let Some(first) = rows.first() else {
        return Ok(Vec::new());
    };

    let expected = first.len();
    if let Some((row, actual)) = rows
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != expected)
    {
        return Err(ColumnarError::RaggedRows {
            row,
            expected,
            actual,
        });
    }

    Ok((0..expected)
        .map(|x| rows.iter().map(|row| row[x]).collect())
        .collect())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_mappings() {
        assert_eq!(encoding_mapping("somekey"), [3, 5, 4, 2, 1, 0, 6]);
        assert_eq!(decoding_mapping("somekey"), [5, 4, 3, 0, 2, 1, 6]);
        assert_eq!(encoding_mapping(""), Vec::<usize>::new());
    }

    #[test]
    fn test_encode_decode() {
        let encoded = columnar_encode("this is a test", "somekey", None).unwrap();
        assert_eq!(encoded, "stis ei hat st");
        assert_eq!(columnar_decode(&encoded, "somekey").unwrap(), "this is a test");
    }

    #[test]
    fn test_encode_with_filler() {
        assert_eq!(
            columnar_encode("HELLO", "BAC", Some('X')).unwrap(),
            "EOHLLX"
        );
        assert_eq!(columnar_decode("EOHLLX", "BAC").unwrap(), "HELLOX");
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(columnar_encode("abc", "", None), Err(ColumnarError::EmptyKey));
        assert_eq!(columnar_decode("abc", ""), Err(ColumnarError::EmptyKey));
        assert_eq!(columnar_decode("", "key").unwrap(), "");
    }

    #[test]
    fn test_transpose() {
        assert_eq!(transpose::<&str>(&[]).unwrap(), Vec::<String>::new());
        assert_eq!(
            transpose(&["AB", "CDE"]),
            Err(ColumnarError::RaggedRows {
                row: 1,
                expected: 2,
                actual: 3
            })
        );
    }

    proptest! {
        #[test]
        fn test_padded_round_trip(key in "[A-Z]{1,8}", text in "[a-z ]{0,40}") {
            let encoded = columnar_encode(&text, &key, Some('_')).unwrap();
            let decoded = columnar_decode(&encoded, &key).unwrap();
            prop_assert!(decoded.starts_with(&text));
            prop_assert!(decoded[text.len()..].chars().all(|c| c == '_'));
        }
    }
}
