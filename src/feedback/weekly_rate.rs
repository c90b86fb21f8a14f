// ABOUTME: Weekly-rate analyzer classifying percent-change against goal-specific windows
// ABOUTME: Reports fast/slow/optimal; silent for maintenance or off-track logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;

use super::{choose, AnalyzerContext};
use crate::constants::weekly_rate::{
    FAT_LOSS_OPTIMAL_MAX, FAT_LOSS_OPTIMAL_MIN, MUSCLE_GAIN_OPTIMAL_MAX, MUSCLE_GAIN_OPTIMAL_MIN,
};
use crate::models::{Feedback, Goal};

const TITLE: &str = "Weekly Rate";

/// Classify the weekly percent-change against the goal's optimal window.
///
/// Requires MDET, an on-track trend, and a non-maintenance goal.
pub fn analyze<R: Rng>(ctx: &AnalyzerContext<'_>, rng: &mut R) -> Option<Feedback> {
    if !ctx.stats.meets_mdet || !ctx.stats.weight_change_on_track_for_goal {
        return None;
    }
    let goal = ctx.log.goal?;
    let (optimal_min, optimal_max, direction) = match goal {
        Goal::FatLoss => (FAT_LOSS_OPTIMAL_MIN, FAT_LOSS_OPTIMAL_MAX, "losing"),
        Goal::MuscleGain => (MUSCLE_GAIN_OPTIMAL_MIN, MUSCLE_GAIN_OPTIMAL_MAX, "gaining"),
        Goal::Maintain => return None,
    };
    let weekly_fraction = ctx.stats.weekly_percent_change.known()?;

    let percent_display = (weekly_fraction * 100_000.0).round() / 1000.0;

    let message = if weekly_fraction < optimal_min {
        let floor_display = optimal_min * 100.0;
        choose(
            rng,
            &[
                format!("You are {direction} about {percent_display}% of your body weight per week, slower than the optimal window starting at {floor_display}%. A slightly larger daily adjustment would speed things up safely."),
                format!("Your weekly rate of {percent_display}% is below the optimal window for your goal. Progress is progress, but a modest push would get you there sooner."),
            ],
        )
    } else if weekly_fraction > optimal_max {
        let ceiling_display = optimal_max * 100.0;
        choose(
            rng,
            &[
                format!("You are {direction} about {percent_display}% of your body weight per week, faster than the optimal ceiling of {ceiling_display}%. Easing off slightly will protect lean mass and energy levels."),
                format!("Your weekly rate of {percent_display}% is above the optimal window for your goal. Slowing down a little tends to make results easier to keep."),
            ],
        )
    } else {
        choose(
            rng,
            &[
                format!("You are {direction} about {percent_display}% of your body weight per week, right inside the optimal window for your goal. Ideal pacing."),
                format!("Your weekly rate of {percent_display}% sits inside the optimal window. This is the sweet spot; keep it steady."),
            ],
        )
    };

    Some(Feedback {
        title: TITLE.to_owned(),
        message,
    })
}
