use std::io::BufRead;

use crate::error::LessonError;

/// Reads a whole number token followed by a free-form sentence.
///
/// The number is the first whitespace-delimited token. Whatever follows it on
/// the same line is the sentence; if nothing does, the next line is. Blank
/// lines ahead of the number are skipped.
/// The sentence keeps inner spaces; only the line terminator is dropped.
pub fn read_number_and_line<R: BufRead>(reader: &mut R) -> Result<(i64, String), LessonError> {
    // Blank lines before the number are skipped.
    let first = loop {
        let line = read_line(reader, "a number")?;
        if !line.trim().is_empty() {
            break line;
        }
    };
    let first = first.trim_start();
    let (token, rest) = first.split_once(char::is_whitespace).unwrap_or((first, ""));
    let number = token.parse::<i64>().map_err(|source| LessonError::Parse {
        input: token.to_string(),
        source,
    })?;

    let rest = rest.trim_start();
    let sentence = if rest.is_empty() {
        read_line(reader, "a sentence")?
    } else {
        rest.to_string()
    };
    Ok((number, sentence))
}

fn read_line<R: BufRead>(reader: &mut R, what: &'static str) -> Result<String, LessonError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(LessonError::UnexpectedEof(what));
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(line)
}
