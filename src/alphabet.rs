use crate::error::{TapwiseError, TwResult};

/// Number of symbols the engine can type.
pub const ALPHABET_SIZE: usize = 28;

/// Every symbol in dense index order: `a..=z`, then `-`, then `'`.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r', 's',
    't', 'u', 'v', 'w', 'x', 'y', 'z', '-', '\'',
];

/// Maps a symbol to its dense index. ASCII capitals fold to lowercase.
pub fn char_to_index(c: char) -> TwResult<usize> {
    match c {
        'a'..='z' => Ok(c as usize - 'a' as usize),
        'A'..='Z' => Ok(c as usize - 'A' as usize),
        '-' => Ok(26),
        '\'' => Ok(27),
        _ => Err(TapwiseError::UnsupportedSymbol(c)),
    }
}

pub fn index_to_char(i: usize) -> TwResult<char> {
    ALPHABET
        .get(i)
        .copied()
        .ok_or(TapwiseError::UnsupportedSymbol(char::from_u32(i as u32).unwrap_or('?')))
}

#[inline]
pub fn is_symbol(c: char) -> bool {
    char_to_index(c).is_ok()
}
