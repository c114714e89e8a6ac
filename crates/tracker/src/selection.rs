/// Where one resolved anchor currently sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPosition {
    /// Position of the entry in navigation order.
    pub index: usize,
    /// Viewport-relative top edge of the anchor.
    pub top: f32,
}

/// Picks the active entry among `positions`, which must be in navigation order.
///
/// The winner is the anchor closest to the reference line from above (top at
/// or above `reference_line`). When nothing has reached the line yet, the first
/// anchor wins. Equal tops resolve to the earlier entry. Non-finite tops are
/// ignored. Returns `None` only when there is no usable anchor.
pub fn select_active<I>(positions: I, reference_line: f32) -> Option<usize>
where
    I: IntoIterator<Item = AnchorPosition>,
{
    let mut first = None;
    let mut best: Option<AnchorPosition> = None;

    for pos in positions.into_iter().filter(|p| p.top.is_finite()) {
        first.get_or_insert(pos.index);
        if pos.top <= reference_line && best.is_none_or(|b| pos.top > b.top) {
            best = Some(pos);
        }
    }

    best.map(|b| b.index).or(first)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(index: usize, top: f32) -> AnchorPosition {
        AnchorPosition { index, top }
    }

    #[test]
    fn test_closest_above_wins() {
        assert_eq!(select_active([at(0, -10.0), at(1, 50.0)], 0.0), Some(0));
        assert_eq!(
            select_active([at(0, -400.0), at(1, -30.0), at(2, 5.0)], 0.0),
            Some(1)
        );
    }

    #[test]
    fn test_on_the_line_counts_as_reached() {
        assert_eq!(select_active([at(0, -100.0), at(1, 80.0)], 80.0), Some(1));
    }

    #[test]
    fn test_nothing_reached_falls_back_to_first() {
        assert_eq!(select_active([at(2, 300.0), at(5, 600.0)], 80.0), Some(2));
    }

    #[test]
    fn test_tie_keeps_earlier_entry() {
        assert_eq!(select_active([at(0, -20.0), at(1, -20.0)], 0.0), Some(0));
    }

    #[test]
    fn test_empty_and_non_finite() {
        assert_eq!(select_active(Vec::<AnchorPosition>::new(), 0.0), None);
        assert_eq!(select_active([at(0, f32::NAN)], 0.0), None);
        assert_eq!(select_active([at(0, f32::NAN), at(1, -5.0)], 0.0), Some(1));
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn winner_is_closest_reached_anchor(
                tops in prop::collection::vec(-2000.0f32..2000.0, 1..12),
                reference in -100.0f32..200.0,
            ) {
                let positions: Vec<_> = tops.iter().enumerate().map(|(i, t)| at(i, *t)).collect();
                let winner = select_active(positions.clone(), reference).unwrap();

                let reached: Vec<_> = positions.iter().filter(|p| p.top <= reference).collect();
                if reached.is_empty() {
                    prop_assert_eq!(winner, 0);
                } else {
                    let chosen = positions[winner];
                    prop_assert!(chosen.top <= reference);
                    for p in reached {
                        prop_assert!(p.top <= chosen.top);
                        if p.top == chosen.top {
                            prop_assert!(p.index >= chosen.index);
                        }
                    }
                }
            }
        }
    }
}
