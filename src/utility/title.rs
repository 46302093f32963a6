use once_cell::sync::Lazy;
use regex::Regex;

// Cleans a raw book title into a string usable both for display and as a
// deduplication / file name key.
//
// Keeps letters, digits, whitespace and ; , _ - . ( ) : ' " — everything else
// is removed. Leading and trailing runs of non-word characters (anything but
// a letter, digit or underscore) are then stripped, so the result never
// starts or ends with punctuation or whitespace.
//
// Idempotent: normalizing an already-normalized title returns it unchanged.
pub fn normalize_title(raw: &str) -> String {
    static REGEX_DISALLOWED: Lazy<Regex> =
        Lazy::new(|| Regex::new(r#"[^a-zA-Z\d\s;,_\-.():'"]+"#).unwrap());
    static REGEX_EDGE_NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\W+|\W+$").unwrap());

    let title = REGEX_DISALLOWED.replace_all(raw, "");
    REGEX_EDGE_NON_WORD.replace_all(&title, "").into_owned()
}
