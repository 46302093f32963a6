use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    clippings::library::{Highlight, Library},
    utility::{normalize_added_on, normalize_title},
};

// Separator line between annotation blocks in "My Clippings.txt".
pub static CLIPPING_SEPARATOR: &str = "==========";

// Officially the device writes CR+LF, but files touched by other tools are
// not consistent about it.
static REGEX_NEW_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\r\n|\n|\r").unwrap());

pub struct ParseOutcome {
    pub library: Library,
    // Number of non-empty blocks that did not parse as a highlight
    // (bookmarks, notes, truncated entries).
    pub skipped: usize,
}

// Splits the whole clippings text on the separator line and folds every
// parseable block into a `Library`. Unparseable blocks are skipped and
// counted; nothing here aborts the run.
pub fn parse_clippings(txt: &str) -> ParseOutcome {
    let mut library = Library::new();
    let mut skipped = 0;

    for block in txt.split(CLIPPING_SEPARATOR) {
        match parse_highlight(block) {
            Some(highlight) => library.add(highlight),
            None => {
                // Fragments before the first and after the last separator
                // are split artifacts, not lost clippings.
                if !block.trim().is_empty() {
                    skipped += 1;
                }
            }
        }
    }

    ParseOutcome { library, skipped }
}

// Parses one raw annotation block:
//
//   <Title> (<Author>)
//   <Location> | Added on <Weekday>, <D> <Month> <Y> <HH:MM:SS>
//   <blank line>
//   <excerpt lines>
//   <trailing blank line>
//
// Returns `None` if the block does not match this shape; a partial record is
// never produced.
pub fn parse_highlight(raw: &str) -> Option<Highlight> {
    let mut lines: Vec<&str> = REGEX_NEW_LINE.split(raw).collect();
    if lines.len() < 5 {
        return None;
    }

    // A block that is not the first fragment of the file starts with the
    // empty line left behind by splitting on the separator.
    if lines[0].is_empty() {
        lines.remove(0);
    }

    let (title, author) = parse_book_details(lines[0])?;
    let (location, raw_date) = parse_metadata(lines[1])?;
    let date = normalize_added_on(raw_date).ok()?;

    // Line 2 is the blank line between metadata and excerpt; the last line
    // is the blank artifact before the next separator.
    let content = lines[3..lines.len() - 1].join("\n");

    Some(Highlight {
        title,
        author,
        location,
        date,
        content,
    })
}

// "<Title> (<Author>)" — the author is the last parenthesized group on the
// line, so titles containing parentheses keep them.
fn parse_book_details(line: &str) -> Option<(String, String)> {
    static REGEX_AUTHOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]*)\)[^(]*$").unwrap());

    let captures = REGEX_AUTHOR.captures(line)?;
    let title = normalize_title(&line[..captures.get(0).unwrap().start()]);
    let author = captures.get(1).unwrap().as_str().to_owned();
    Some((title, author))
}

// "<Location> | Added on <date>", or with two location descriptors
// "<Page> | <Location> | Added on <date>".
fn parse_metadata(line: &str) -> Option<(String, &str)> {
    let parts: Vec<&str> = line.split(" | ").collect();
    match parts.len() {
        0 | 1 => None,
        2 => Some((parts[0].to_owned(), parts[1])),
        _ => Some((format!("{}, {}", parts[0], parts[1]), parts[2])),
    }
}
