// ABOUTME: Calorie-adherence analyzer comparing average intake to the goal window
// ABOUTME: Emits positive or corrective phrasing; silent without intake, range, and TDEE
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;

use super::{choose, AnalyzerContext};
use crate::goal_intake::format_intake_range;
use crate::models::Feedback;

const TITLE: &str = "Calorie Intake";

/// Compare the observed average intake against the goal-intake window.
///
/// Requires a valid average intake, a computed goal-intake window, and a
/// known TDEE; returns `None` when any precondition is unmet.
pub fn analyze<R: Rng>(ctx: &AnalyzerContext<'_>, rng: &mut R) -> Option<Feedback> {
    let avg_intake = ctx.stats.avg_kcal_intake.known()?;
    let window = ctx.intake_window?;
    ctx.tdee.known()?;

    let (lower, upper) = window;
    let range_text = format_intake_range(window);
    let avg_display = avg_intake.round();

    let message = if avg_intake < lower {
        let shortfall = (lower - avg_intake).round();
        choose(
            rng,
            &[
                format!(
                    "Your average intake of {avg_display} kcal is about {shortfall} kcal below your goal range of {range_text}. Try adding a little more to your daily meals."
                ),
                format!(
                    "You are averaging {avg_display} kcal, which falls short of your {range_text} target by roughly {shortfall} kcal. Eating a bit more will keep your progress sustainable."
                ),
            ],
        )
    } else if avg_intake > upper {
        let excess = (avg_intake - upper).round();
        choose(
            rng,
            &[
                format!(
                    "Your average intake of {avg_display} kcal runs about {excess} kcal above your goal range of {range_text}. Trimming your daily intake will bring you back on target."
                ),
                format!(
                    "You are averaging {avg_display} kcal, roughly {excess} kcal over your {range_text} target. Small daily reductions are usually the easiest way back into range."
                ),
            ],
        )
    } else {
        choose(
            rng,
            &[
                format!(
                    "Your average intake of {avg_display} kcal sits inside your goal range of {range_text}. Keep doing what you are doing!"
                ),
                format!(
                    "Averaging {avg_display} kcal keeps you right inside your {range_text} target. Excellent adherence."
                ),
            ],
        )
    };

    Some(Feedback {
        title: TITLE.to_owned(),
        message,
    })
}
