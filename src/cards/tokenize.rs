/// Characters that separate card tokens in an input text
pub const DELIMITERS: [char; 11] = [' ', '\n', '\r', '\t', ',', '.', ';', ':', '-', '_', '/'];

/// Splits raw text into card tokens, dropping empty pieces.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(DELIMITERS.as_slice())
        .filter(|piece| !piece.is_empty())
        .map(str::to_string)
        .collect()
}
