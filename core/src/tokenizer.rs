/// Split text into words on the ASCII space character.
///
/// Runs of spaces yield no empty words. No case folding or punctuation
/// stripping happens here; tabs and other whitespace stay inside words.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(' ').filter(|word| !word.is_empty())
}
