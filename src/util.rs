/// Spread a word out with single spaces so placeholders read clearly,
/// e.g. "c__t" becomes "c _ _ t".
pub fn spaced(word: &str) -> String {
    let mut out = String::with_capacity(word.len() * 2);
    for (i, c) in word.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(c);
    }
    out
}

/// Attempt meter: one filled heart per remaining attempt, one hollow heart
/// per attempt already spent.
pub fn hearts(remaining: usize, max: usize) -> String {
    let remaining = remaining.min(max);
    let mut out = String::new();
    out.push_str(&"♥".repeat(remaining));
    out.push_str(&"♡".repeat(max - remaining));
    out
}
