use crate::hint::unlikely;


/// Returned by [`search`] when no element matches the key.
pub const NOT_FOUND: isize = -1;

/// Index of the first element equal to `key`, or `None` if there is no
/// match. The scan runs front to back and stops at the first hit, so
/// duplicate keys always resolve to the lowest index.
pub fn find_first<T: PartialEq>(haystack: &[T], key: &T) -> Option<usize> {
    for (index, item) in haystack.iter().enumerate() {
        // most probes miss; a hit ends the scan
        if unlikely(item == key) {
            if crate::DEBUG {
                println!("scanning: hit at {index}");
            }

            return Some(index);
        }
    }

    None
}

/// Sentinel form of [`find_first`]: the matching index, or [`NOT_FOUND`].
/// An empty haystack and an absent key are both ordinary `NOT_FOUND`
/// results, not failures.
pub fn search<T: PartialEq>(haystack: &[T], key: &T) -> isize {
    match find_first(haystack, key) {
        Some(index) => index as isize,
        None => NOT_FOUND,
    }
}
