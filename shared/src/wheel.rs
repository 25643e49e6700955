use rand::Rng;

/// One visual segment of the prize wheel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    pub label: &'static str,
    pub color: &'static str,
    pub text_color: &'static str,
}

pub const SEGMENT_COUNT: usize = 8;

/// Angular width of each segment in degrees.
pub const SEGMENT_ANGLE: f64 = 360.0 / SEGMENT_COUNT as f64;

/// Label of the losing segments.
pub const NO_WIN_LABEL: &str = "Try Again";

/// Index of the headline "95%" discount segment.
pub const HEADLINE_SEGMENT: usize = 6;

/// Maximum number of spins per visit to the wheel screen.
pub const MAX_ATTEMPTS: u32 = 3;

// Animation constants shared with the frontend.
pub const SPIN_DURATION_MS: u32 = 3000;
pub const MIN_FULL_SPINS: f64 = 5.0;

/// The wheel face, clockwise from the pointer's rest position.
pub const SEGMENTS: [Segment; SEGMENT_COUNT] = [
    Segment { label: "Try Again", color: "#FF4444", text_color: "#ffffff" },
    Segment { label: "75%", color: "#FF6B9D", text_color: "#ffffff" },
    Segment { label: "50%", color: "#4ECDC4", text_color: "#ffffff" },
    Segment { label: "25%", color: "#45B7D1", text_color: "#ffffff" },
    Segment { label: "10%", color: "#96CEB4", text_color: "#ffffff" },
    Segment { label: "5%", color: "#FFEAA7", text_color: "#000000" },
    Segment { label: "95%", color: "#FF7675", text_color: "#ffffff" },
    Segment { label: "Try Again", color: "#FF4444", text_color: "#ffffff" },
];

pub fn is_win(label: &str) -> bool {
    label != NO_WIN_LABEL
}

/// Picks the segment the wheel must land on for the given attempt.
///
/// The first two attempts are scripted: the first spin always loses and
/// the second always hits the headline discount. From the third attempt
/// on, the result is a uniform draw over the winning segments.
pub fn target_segment<R: Rng + ?Sized>(attempt: u32, rng: &mut R) -> usize {
    match attempt {
        0 | 1 => 0,
        2 => HEADLINE_SEGMENT,
        _ => {
            let winners: Vec<usize> = (0..SEGMENT_COUNT)
                .filter(|&i| is_win(SEGMENTS[i].label))
                .collect();
            winners[rng.gen_range(0..winners.len())]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn first_attempt_always_loses() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let idx = target_segment(1, &mut rng);
            assert_eq!(SEGMENTS[idx].label, NO_WIN_LABEL);
        }
    }

    #[test]
    fn second_attempt_always_hits_headline_discount() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let idx = target_segment(2, &mut rng);
            assert_eq!(idx, HEADLINE_SEGMENT);
            assert_eq!(SEGMENTS[idx].label, "95%");
        }
    }

    #[test]
    fn later_attempts_never_lose() {
        let mut rng = StdRng::seed_from_u64(42);
        for attempt in 3..6 {
            for _ in 0..1000 {
                let idx = target_segment(attempt, &mut rng);
                assert!(is_win(SEGMENTS[idx].label));
            }
        }
    }

    #[test]
    fn later_attempts_are_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(1234);
        let mut counts = [0u32; SEGMENT_COUNT];
        let draws = 10_000;
        for _ in 0..draws {
            counts[target_segment(3, &mut rng)] += 1;
        }

        let winners: Vec<usize> = (0..SEGMENT_COUNT)
            .filter(|&i| is_win(SEGMENTS[i].label))
            .collect();
        assert_eq!(winners.len(), 6);

        let expected = draws / winners.len() as u32;
        for &i in &winners {
            // Allow 25% deviation from the uniform expectation.
            assert!(
                counts[i] > expected * 3 / 4 && counts[i] < expected * 5 / 4,
                "segment {} drawn {} times, expected about {}",
                i,
                counts[i],
                expected
            );
        }
        assert_eq!(counts[0], 0);
        assert_eq!(counts[SEGMENT_COUNT - 1], 0);
    }
}
