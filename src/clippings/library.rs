use std::collections::HashSet;

use serde::Serialize;

// One parsed highlight event. Produced by the parser for a single annotation
// block and consumed by the library; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Highlight {
    pub title: String,
    pub author: String,
    pub location: String,
    pub date: String,
    pub content: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub title: String,  // normalized, unique within a run
    pub author: String, // author of the first highlight seen for this title
    pub highlights: Vec<Highlight>,
}

// All books produced from one run's input, in order of first appearance.
//
// The title set used for deduplication is owned by the value, so a fresh
// `Library` per run carries no state over from previous runs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Library {
    books: Vec<Book>,
    #[serde(skip)]
    titles: HashSet<String>,
}

impl Library {
    pub fn new() -> Self {
        Self {
            books: Vec::new(),
            titles: HashSet::new(),
        }
    }

    // Folds one highlight in. The first highlight for a title creates the
    // book and fixes its author; later highlights with the same title are
    // appended in arrival order whatever their author string says.
    pub fn add(&mut self, highlight: Highlight) {
        if self.titles.contains(&highlight.title) {
            let book = self
                .books
                .iter_mut()
                .find(|b| b.title == highlight.title)
                .unwrap();
            book.highlights.push(highlight);
        } else {
            self.titles.insert(highlight.title.clone());
            self.books.push(Book {
                title: highlight.title.clone(),
                author: highlight.author.clone(),
                highlights: vec![highlight],
            });
        }
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for Library {
    fn default() -> Self {
        Self::new()
    }
}
