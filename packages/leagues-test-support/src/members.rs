//! Member roster fixtures.

/// `count` display names drawn from a fixed household roster, suffixed once
/// the roster runs out so every name stays unique.
pub fn household(count: usize) -> Vec<String> {
    const ROSTER: [&str; 8] = ["Ana", "Ben", "Cal", "Dee", "Eli", "Fay", "Gus", "Hal"];
    (0..count)
        .map(|i| {
            let base = ROSTER[i % ROSTER.len()];
            match i / ROSTER.len() {
                0 => base.to_string(),
                round => format!("{base} {}", round + 1),
            }
        })
        .collect()
}
