// rules.rs - Conway's B3/S23 transition rule

/// The neighbor scan stops once it reaches this count; every value from here
/// up leads to the same outcome.
pub const NEIGHBOR_COUNT_CAP: u8 = 4;

/// Next state of a cell given its current state and live-neighbor count.
#[inline]
pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Death or stays dead
    }
}

#[cfg(test)]
mod tests {
    use super::next_state;

    #[test]
    fn live_cell_survives_only_with_two_or_three() {
        for count in 0..=8u8 {
            assert_eq!(next_state(true, count), count == 2 || count == 3, "count {count}");
        }
    }

    #[test]
    fn dead_cell_is_born_only_with_three() {
        for count in 0..=8u8 {
            assert_eq!(next_state(false, count), count == 3, "count {count}");
        }
    }
}
