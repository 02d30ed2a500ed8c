/// Split on blank-line boundaries (`"\n\n"`).
///
/// Empty paragraphs are kept, so callers see exactly what the source had.
pub fn split_paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n").map(str::to_string).collect()
}
