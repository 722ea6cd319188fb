/// The classic drawing, one stage per piece of the figure. Index 0 is the
/// empty gallows, index 6 the complete hanged man.
const STAGES: [&str; 7] = [
    r#"  +---+
  |   |
      |
      |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
      |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
  |   |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|   |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
========="#,
];

pub const STAGE_LINES: u16 = 7;
pub const STAGE_WIDTH: u16 = 9;

/// Drawing stage for `wrong` misses out of a budget of `max`.
///
/// Scaled so any budget traverses the whole drawing: the empty gallows at
/// zero misses, the complete figure exactly when the budget is spent.
pub fn stage(wrong: usize, max: usize) -> &'static str {
    let max = max.max(1);
    let wrong = wrong.min(max);
    let idx = wrong * (STAGES.len() - 1) / max;
    STAGES[idx]
}
