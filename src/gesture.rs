use serde::{Deserialize, Serialize};

/// Openness ratio above which a hand counts as open.
pub const OPEN_THRESHOLD: f64 = 1.02;

/// Expected number of hand landmarks per frame.
pub const LANDMARK_COUNT: usize = 21;

const WRIST: usize = 0;
const MIDDLE_MCP: usize = 9;
// Index, middle, ring, pinky, thumb tips.
const FINGERTIPS: [usize; 5] = [8, 12, 16, 20, 4];

/// Normalized landmark coordinate as produced by the hand tracker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gesture {
    Open,
    Closed,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Classification {
    pub gesture: Gesture,
    pub openness: f64,
}

fn dist(a: Landmark, b: Landmark) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Classifies a hand as open or closed from its landmark geometry.
///
/// Openness is the mean wrist-to-fingertip distance normalized by the
/// wrist-to-middle-MCP reference length, so the signal is scale invariant.
/// Returns `None` when fewer than 21 landmarks are supplied.
pub fn classify(landmarks: &[Landmark]) -> Option<Classification> {
    if landmarks.len() < LANDMARK_COUNT {
        return None;
    }

    let wrist = landmarks[WRIST];
    let mut base = dist(wrist, landmarks[MIDDLE_MCP]);
    if base == 0.0 {
        base = 1e-4;
    }

    let openness = FINGERTIPS
        .iter()
        .map(|&i| dist(wrist, landmarks[i]))
        .sum::<f64>()
        / FINGERTIPS.len() as f64
        / base;

    let gesture = if openness > OPEN_THRESHOLD {
        Gesture::Open
    } else {
        Gesture::Closed
    };

    Some(Classification { gesture, openness })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(tip_distance: f64) -> Vec<Landmark> {
        // Wrist at origin, middle MCP one unit up, all five tips at the same
        // distance from the wrist.
        let mut lm = vec![Landmark { x: 0.0, y: 0.0 }; LANDMARK_COUNT];
        lm[MIDDLE_MCP] = Landmark { x: 0.0, y: 1.0 };
        for &i in &FINGERTIPS {
            lm[i] = Landmark {
                x: 0.0,
                y: tip_distance,
            };
        }
        lm
    }

    #[test]
    fn extended_fingers_read_as_open() {
        let result = classify(&hand(1.8)).unwrap();
        assert_eq!(result.gesture, Gesture::Open);
        assert!((result.openness - 1.8).abs() < 1e-9);
    }

    #[test]
    fn curled_fingers_read_as_closed() {
        let result = classify(&hand(0.6)).unwrap();
        assert_eq!(result.gesture, Gesture::Closed);
    }

    #[test]
    fn threshold_separates_open_from_closed() {
        assert_eq!(classify(&hand(1.015)).unwrap().gesture, Gesture::Closed);
        assert_eq!(classify(&hand(1.025)).unwrap().gesture, Gesture::Open);
    }

    #[test]
    fn short_landmark_list_is_rejected() {
        let lm = vec![Landmark { x: 0.0, y: 0.0 }; LANDMARK_COUNT - 1];
        assert!(classify(&lm).is_none());
    }

    #[test]
    fn degenerate_reference_length_does_not_blow_up() {
        // All landmarks on the wrist: base would be zero.
        let lm = vec![Landmark { x: 0.0, y: 0.0 }; LANDMARK_COUNT];
        let result = classify(&lm).unwrap();
        assert_eq!(result.gesture, Gesture::Closed);
        assert!(result.openness.is_finite());
    }
}
