// Fixed character-equivalence table shared by tokenization and rule validation.
// The table is deliberately asymmetric: it was tuned against a false-positive
// corpus, so entries must not be "corrected" (note that '3' is not mapped).

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Source characters, paired position-by-position with [`MAP_TO`].
///
/// Latin upper/lower case, the uppercase Germanic/Spanish variants, digit and
/// symbol lookalikes, and the Cyrillic letters that render identically to
/// Latin glyphs in common fonts.
const MAP_FROM: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyzÄÖẞÜÑ48©&£€ƒ6#1|0®5$§7†µ×¥%АВЕЖИКМНОРСТУХЬЁавежзийкмнорстухьё";

/// Canonical letter for each entry of [`MAP_FROM`].
const MAP_TO: &str = "abcdefghijklmnopqrstuvwxyzabcdefghijklmnopqrstuvwxyzäößüñabceeefghllorsssttuxyzabexnkmhopctyxbeabexennkmhopctyxbe";

/// Lowercase variant letters that appear as map values. They get identity
/// entries so that every mapped value is itself a mapped key and the map is
/// idempotent under re-application.
const IDENTITY_LETTERS: &str = "äößüñ";

static CHAR_MAP: Lazy<HashMap<char, char>> = Lazy::new(|| {
    let mut map = HashMap::new();
    for (from, to) in MAP_FROM.chars().zip(MAP_TO.chars()) {
        let previous = map.insert(from, to);
        debug_assert!(previous.is_none(), "duplicate table entry {from:?}");
    }
    debug_assert_eq!(MAP_FROM.chars().count(), MAP_TO.chars().count());
    for ch in IDENTITY_LETTERS.chars() {
        map.entry(ch).or_insert(ch);
    }
    map
});

/// Canonical letter for `ch`, or `None` when the character is not part of any
/// word (it then acts as a word separator).
pub fn normalize(ch: char) -> Option<char> {
    CHAR_MAP.get(&ch).copied()
}

/// True when `ch` is already canonical: it maps to itself.
pub fn is_canonical(ch: char) -> bool {
    normalize(ch) == Some(ch)
}
