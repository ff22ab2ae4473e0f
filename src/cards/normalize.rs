/// Face letters and the numeric ranks they stand for
const FACE_RANKS: [(&str, &str); 4] = [("J", "11"), ("Q", "12"), ("K", "13"), ("A", "14")];

/// Rewrites a leading face letter to its numeric rank: `"Kh"` becomes `"13h"`.
/// Tokens without a face prefix are returned unchanged.
pub fn to_numeric(token: &str) -> String {
    for (face, number) in FACE_RANKS {
        if let Some(rest) = token.strip_prefix(face) {
            return format!("{number}{rest}");
        }
    }
    token.to_string()
}

/// Inverse of [`to_numeric`]: `"13h"` becomes `"Kh"`.
pub fn to_face(token: &str) -> String {
    for (face, number) in FACE_RANKS {
        if let Some(rest) = token.strip_prefix(number) {
            return format!("{face}{rest}");
        }
    }
    token.to_string()
}

pub fn normalize_all(cards: &mut [String]) {
    for card in cards.iter_mut() {
        *card = to_numeric(card);
    }
}

pub fn denormalize_all(cards: &mut [String]) {
    for card in cards.iter_mut() {
        *card = to_face(card);
    }
}
