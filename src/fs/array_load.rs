use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use thiserror::Error;

/// Everything that can go wrong while loading a hop array from a file.
///
/// These all abort the program before the search starts; the engine itself
/// only ever sees validated non-negative values.
#[derive(Error, Debug)]
pub enum ArrayLoadError {
    #[error("cannot read input file: {0}")]
    Io(#[from] std::io::Error),
    #[error("input file cannot be empty")]
    EmptyFile,
    #[error("line {line}: blank lines are not valid array elements")]
    BlankLine { line: usize },
    #[error("line {line}: '{value}' is not a non-negative integer")]
    BadValue { line: usize, value: String },
}

/// Parses one hop array from a reader: one integer per line, surrounding
/// whitespace ignored.
///
/// # Errors
/// - [`ArrayLoadError::EmptyFile`] when the reader holds no lines at all
/// - [`ArrayLoadError::BlankLine`] for a line with no digits on it
/// - [`ArrayLoadError::BadValue`] for anything unparseable as a
///   non-negative integer, negative numbers included
pub fn parse_hops<R: BufRead>(reader: R) -> Result<Vec<usize>, ArrayLoadError> {
    let mut values = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Err(ArrayLoadError::BlankLine { line: number + 1 });
        }
        let value = trimmed
            .parse::<usize>()
            .map_err(|_| ArrayLoadError::BadValue {
                line: number + 1,
                value: trimmed.to_owned(),
            })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(ArrayLoadError::EmptyFile);
    }
    Ok(values)
}

/// Opens `path` and parses it with [`parse_hops`].
pub fn load_hops_from_path(path: &Path) -> Result<Vec<usize>, ArrayLoadError> {
    let file = File::open(path)?;
    parse_hops(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_one_integer_per_line() {
        let input = Cursor::new("5\n6\n0\n4\n");
        assert_eq!(parse_hops(input).unwrap(), vec![5, 6, 0, 4]);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let input = Cursor::new("  5 \n\t2\n");
        assert_eq!(parse_hops(input).unwrap(), vec![5, 2]);
    }

    #[test]
    fn missing_trailing_newline_is_fine() {
        let input = Cursor::new("1\n2");
        assert_eq!(parse_hops(input).unwrap(), vec![1, 2]);
    }

    #[test]
    fn rejects_empty_input() {
        let err = parse_hops(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ArrayLoadError::EmptyFile));
    }

    #[test]
    fn rejects_blank_line_with_position() {
        let err = parse_hops(Cursor::new("3\n\n2\n")).unwrap_err();
        match err {
            ArrayLoadError::BlankLine { line } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_negative_value() {
        let err = parse_hops(Cursor::new("3\n-1\n")).unwrap_err();
        match err {
            ArrayLoadError::BadValue { line, value } => {
                assert_eq!(line, 2);
                assert_eq!(value, "-1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_non_numeric_line() {
        let err = parse_hops(Cursor::new("banana\n")).unwrap_err();
        assert!(matches!(err, ArrayLoadError::BadValue { line: 1, .. }));
    }

    #[test]
    fn missing_file_surfaces_as_io_error() {
        let err = load_hops_from_path(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, ArrayLoadError::Io(_)));
    }

    #[test]
    fn error_messages_are_printable() {
        let err = parse_hops(Cursor::new("x\n")).unwrap_err();
        assert_eq!(err.to_string(), "line 1: 'x' is not a non-negative integer");
    }
}
