use std::ops::Index;

/// Represents a mapping between bytes and symbol indices. For example, this
/// could be a map from DNA bases to profile indices, such as
/// [`DNA_PROFILE_MAP`].
///
/// ## Type Parameters
/// * `KEYS` - The number of bytes being mapped (5 for DNA including *N*)
#[derive(Debug, PartialEq, Eq, Clone, Hash)]
pub struct ByteIndexMap<const KEYS: usize> {
    pub(crate) index_map: [u8; 256],
    pub(crate) byte_keys: [u8; KEYS],
}

/// Maps `ACGT` (case-insensitive) to 0 through 3. Every other byte, including
/// `N`, maps to the ambiguous symbol 4.
pub const DNA_PROFILE_MAP: ByteIndexMap<5> = ByteIndexMap::new_ignoring_case(*b"ACGTN", b'N');

impl<const S: usize> ByteIndexMap<S> {
    /// Create a new [`ByteIndexMap`] in which `byte_keys[i]` maps to `i`. Any
    /// byte that is not specified in `byte_keys` is mapped to the same index
    /// as `catch_all`. Both `byte_keys` and `catch_all` ignore case.
    ///
    /// ## Panics
    /// No duplicates can be present in `byte_keys`. `catch_all` must be present
    /// in `byte_keys`.
    #[allow(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn new_ignoring_case(mut byte_keys: [u8; S], catch_all: u8) -> Self {
        assert!(S <= u8::MAX as usize, "Too many keys for a byte mapping.");

        let mut i = 0;
        while i < S {
            byte_keys[i] = byte_keys[i].to_ascii_uppercase();
            i += 1;
        }
        assert!(is_unique(&byte_keys), "The byte_keys must be unique.");

        let catch_all_index = match position(&byte_keys, catch_all.to_ascii_uppercase()) {
            Some(index) => index as u8,
            None => panic!("The catch_all must be present in the byte_keys."),
        };

        let mut out = ByteIndexMap {
            index_map: [catch_all_index; 256],
            byte_keys,
        };

        let mut i = 0;
        while i < S {
            // Truncation will not occur because S fits in a u8
            out.set_byte_ignoring_case(byte_keys[i], i as u8);
            i += 1;
        }
        out
    }

    #[inline]
    const fn set_byte_ignoring_case(&mut self, byte: u8, index: u8) {
        self.index_map[byte.to_ascii_lowercase() as usize] = index;
        self.index_map[byte.to_ascii_uppercase() as usize] = index;
    }

    /// Change the [`ByteIndexMap`] so that `new_key` maps to the same index as
    /// `previous_key`, ignoring case.
    #[inline]
    #[must_use]
    pub const fn add_synonym_ignoring_case(mut self, new_key: u8, previous_key: u8) -> Self {
        let index = self.index_map[previous_key as usize];
        self.set_byte_ignoring_case(new_key, index);
        self
    }

    /// Get the length of `byte_keys`.
    #[inline]
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        self.byte_keys.len()
    }

    /// The bytes that have their own symbol, in symbol order.
    #[inline]
    #[must_use]
    pub const fn byte_keys(&self) -> &[u8; S] {
        &self.byte_keys
    }

    /// Convert a byte `b` into its symbol.
    #[inline]
    #[must_use]
    pub const fn to_symbol(&self, b: u8) -> u8 {
        self.index_map[b as usize]
    }

    /// Encodes a raw sequence into symbols.
    #[inline]
    #[must_use]
    pub fn encode(&self, seq: &[u8]) -> Vec<u8> {
        seq.iter().map(|&b| self.to_symbol(b)).collect()
    }
}

impl<const S: usize> Index<u8> for ByteIndexMap<S> {
    type Output = u8;

    #[inline]
    fn index(&self, index: u8) -> &u8 {
        &self.index_map[index as usize]
    }
}

/// Encodes a nucleotide sequence with [`DNA_PROFILE_MAP`]. `U` is treated as
/// ambiguous; use [`ByteIndexMap::add_synonym_ignoring_case`] to build a map
/// that reads RNA.
#[inline]
#[must_use]
pub fn encode_dna(seq: &[u8]) -> Vec<u8> {
    DNA_PROFILE_MAP.encode(seq)
}

const fn is_unique<const S: usize>(keys: &[u8; S]) -> bool {
    let mut i = 0;
    while i < S {
        let mut j = i + 1;
        while j < S {
            if keys[i] == keys[j] {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const fn position<const S: usize>(keys: &[u8; S], needle: u8) -> Option<usize> {
    let mut i = 0;
    while i < S {
        if keys[i] == needle {
            return Some(i);
        }
        i += 1;
    }
    None
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn dna_profile_map() {
        assert_eq!(encode_dna(b"ACGTN"), [0, 1, 2, 3, 4]);
        assert_eq!(encode_dna(b"acgtn"), [0, 1, 2, 3, 4]);
        assert_eq!(encode_dna(b"RYU.*"), [4; 5]);
        assert_eq!(DNA_PROFILE_MAP[b'g'], 2);
        assert_eq!(DNA_PROFILE_MAP.byte_keys(), b"ACGTN");
    }

    #[test]
    fn rna_synonym() {
        const RNA_MAP: ByteIndexMap<5> = DNA_PROFILE_MAP.add_synonym_ignoring_case(b'U', b'T');
        assert_eq!(RNA_MAP.encode(b"ACGUu"), [0, 1, 2, 3, 3]);
    }

    #[test]
    fn custom_catch_all() {
        let map = ByteIndexMap::new_ignoring_case(*b"XYZ", b'z');
        assert_eq!(map.encode(b"xYq"), [0, 1, 2]);
        assert_eq!(map.len(), 3);
    }
}
