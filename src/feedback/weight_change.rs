// ABOUTME: Overall weight-change analyzer comparing observed trend to the log goal
// ABOUTME: Emits goal-aligned praise or a corrective recommendation keyed by goal
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;

use super::{choose, AnalyzerContext};
use crate::models::{Feedback, Goal, WeightChangeCategory};

const TITLE: &str = "Weight Change";

/// Report whether the observed weight trend agrees with the log's goal.
///
/// Requires MDET, a goal, and a determinable trend.
pub fn analyze<R: Rng>(ctx: &AnalyzerContext<'_>, rng: &mut R) -> Option<Feedback> {
    if !ctx.stats.meets_mdet {
        return None;
    }
    let goal = ctx.log.goal?;
    let category = ctx.stats.weight_change_category?;

    let message = if ctx.stats.weight_change_on_track_for_goal {
        on_track_message(goal, rng)
    } else {
        off_track_message(goal, category, rng)
    };

    Some(Feedback {
        title: TITLE.to_owned(),
        message,
    })
}

fn on_track_message<R: Rng>(goal: Goal, rng: &mut R) -> String {
    let direction = match goal {
        Goal::FatLoss => "losing",
        Goal::MuscleGain => "gaining",
        Goal::Maintain => "maintaining",
    };
    choose(
        rng,
        &[
            format!("Your weight trend shows you are {direction}, exactly what your goal calls for. Great work."),
            format!("You are {direction} weight, which lines up with your goal. Keep the routine going."),
        ],
    )
}

fn off_track_message<R: Rng>(goal: Goal, category: WeightChangeCategory, rng: &mut R) -> String {
    let observed = match category {
        WeightChangeCategory::Gained => "gaining",
        WeightChangeCategory::Lost => "losing",
        WeightChangeCategory::Maintained => "maintaining",
    };
    let recommendation = match goal {
        Goal::FatLoss => "Aim for the lower end of your goal intake range to get the scale moving down.",
        Goal::MuscleGain => "Aim for the upper end of your goal intake range to support steady gains.",
        Goal::Maintain => "Nudge your daily intake toward your estimated TDEE to steady your weight.",
    };
    choose(
        rng,
        &[
            format!("Your weight trend shows you are {observed}, which does not match your goal yet. {recommendation}"),
            format!("Right now you are {observed} weight rather than tracking your goal. {recommendation}"),
        ],
    )
}
