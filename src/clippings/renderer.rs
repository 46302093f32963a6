use html_escape::encode_text;

use crate::clippings::library::{Book, Highlight};

// One page per book. Substitution is plain string replacement over fixed
// placeholders; all user-controlled text is HTML-escaped first, since
// clippings files are not trusted input.
static PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <title>$book_title</title>
    <meta name="description" content="$book_title">
    <meta name="author" content="$book_author">
    <style>
        body {
            font-family: Arial, Helvetica, sans-serif;
        }
        header {
            text-align: center;
        }
        li {
            list-style: none;
        }
        blockquote {
            background: #f1f1f1;
            margin-top: 10px;
            padding: 10px;
            font-style: italic;
            line-height: 1.25;
        }
        blockquote span {
            color: #7e7e7e;
            font-size: 0.6em;
            display: block;
            padding-top: 20px;
        }
    </style>
</head>
<body>
    <header>
        <h1>$book_title</h1>
        <h2>by $book_author</h2>
        <p>Highlights as of $file_datetime</p>
    </header>
    <section>
$book_highlights
    </section>
</body>
</html>
"#;

static HIGHLIGHT_TEMPLATE: &str = r#"        <li>
            <blockquote>
                $text
                <span>($location, $datetime)</span>
            </blockquote>
        </li>"#;

pub fn render_book(book: &Book, generated_at: &str) -> String {
    let highlights = book
        .highlights
        .iter()
        .map(render_highlight)
        .collect::<Vec<_>>()
        .join("\n");

    PAGE_TEMPLATE
        .replace("$book_title", &encode_text(&book.title))
        .replace("$book_author", &encode_text(&book.author))
        .replace("$file_datetime", &encode_text(generated_at))
        .replace("$book_highlights", &highlights)
}

fn render_highlight(highlight: &Highlight) -> String {
    HIGHLIGHT_TEMPLATE
        .replace("$text", &encode_text(&highlight.content))
        .replace("$location", &encode_text(&highlight.location))
        .replace("$datetime", &encode_text(&highlight.date))
}

// The normalized title never starts or ends with punctuation and contains no
// path separators, so it is safe to use as a file name as-is.
pub fn output_file_name(book: &Book) -> String {
    format!("{}.html", book.title)
}
