// ABOUTME: General fallback analyzer emitting a random templated encouragement
// ABOUTME: Used when no other analyzer produced output (insufficient data overall)
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::Feedback;

const TITLE: &str = "Keep Logging";

const ENCOURAGEMENTS: &[&str] = &[
    "There is not enough data in this log yet for a detailed analysis. Keep recording your weight and calories daily and insights will unlock soon.",
    "Every entry you add makes your TDEE estimate sharper. Stay consistent with your logging and check back in a few days.",
    "Consistency beats perfection: even rough daily estimates of weight and intake are enough for the engine to learn your energy balance.",
    "Your log is off to a start. Once you have a couple of weeks of complete entries, personalized trend feedback will appear here.",
];

/// Produce one encouragement selected uniformly at random.
pub fn analyze<R: Rng>(rng: &mut R) -> Feedback {
    let message = ENCOURAGEMENTS
        .choose(rng)
        .copied()
        .unwrap_or(ENCOURAGEMENTS[0]);
    Feedback {
        title: TITLE.to_owned(),
        message: message.to_owned(),
    }
}
