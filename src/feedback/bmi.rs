// ABOUTME: Total weight-change / BMI analyzer with clinical-significance flagging
// ABOUTME: Classifies BMI against fixed cutoffs; silent in the normal-ish band
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use rand::Rng;

use super::{choose, AnalyzerContext};
use crate::constants::bmi::{
    IMPERIAL_SCALE, NORMAL_CEILING, OVERWEIGHT_CEILING, SIGNIFICANT_TOTAL_CHANGE_PERCENT,
    UNDERWEIGHT_CEILING,
};
use crate::models::{Feedback, Goal};

const TITLE: &str = "Total Weight Change";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BmiClass {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

fn classify(bmi: f64) -> BmiClass {
    if bmi < UNDERWEIGHT_CEILING {
        BmiClass::Underweight
    } else if bmi < NORMAL_CEILING {
        BmiClass::Normal
    } else if bmi < OVERWEIGHT_CEILING {
        BmiClass::Overweight
    } else {
        BmiClass::Obese
    }
}

/// Flag total weight change against BMI classification.
///
/// Requires valid height and a usable weight, a non-maintenance goal, an
/// on-track trend, and MDET. Suppresses output entirely when BMI is normal
/// or overweight and the total change is not clinically significant.
pub fn analyze<R: Rng>(ctx: &AnalyzerContext<'_>, rng: &mut R) -> Option<Feedback> {
    if !ctx.stats.meets_mdet || !ctx.stats.weight_change_on_track_for_goal {
        return None;
    }
    let goal = ctx.log.goal?;
    if goal == Goal::Maintain {
        return None;
    }
    let height_inches = ctx.user.height_inches.filter(|h| *h > 0.0)?;
    let weight_lbs = ctx
        .stats
        .current_weight
        .known()
        .or_else(|| ctx.stats.start_weight.known())
        .or(ctx.user.weight_lbs)
        .filter(|w| *w > 0.0)?;
    let total_percent = ctx.stats.total_percent_weight_change.known()?;

    let bmi = IMPERIAL_SCALE * weight_lbs / (height_inches * height_inches);
    let class = classify(bmi);
    let significant = total_percent > SIGNIFICANT_TOTAL_CHANGE_PERCENT;

    if matches!(class, BmiClass::Normal | BmiClass::Overweight) && !significant {
        return None;
    }

    let bmi_display = (bmi * 10.0).round() / 10.0;
    let mut message = match (class, goal) {
        (BmiClass::Underweight, Goal::FatLoss) => choose(
            rng,
            &[
                format!("Your BMI of {bmi_display} is in the underweight range. Continuing to cut from here is not advisable; consider switching this log to maintenance or a slight surplus."),
                format!("At a BMI of {bmi_display} you are classified underweight. Further fat loss can cost you lean mass and health; a maintenance phase would serve you better."),
            ],
        ),
        (BmiClass::Underweight, _) => choose(
            rng,
            &[
                format!("Your BMI of {bmi_display} is in the underweight range, so gaining is the right direction. Favor gradual, consistent surpluses."),
            ],
        ),
        (BmiClass::Obese, Goal::MuscleGain) => choose(
            rng,
            &[
                format!("Your BMI of {bmi_display} is in the obese range. Adding more weight through a bulking phase carries health risk; a fat-loss or maintenance phase first is the safer order."),
            ],
        ),
        (BmiClass::Obese, _) => choose(
            rng,
            &[
                format!("Your BMI of {bmi_display} is in the obese range, so your fat-loss direction is the right one. Steady adherence matters more than speed."),
            ],
        ),
        _ => String::new(),
    };

    if significant {
        let note = format!(
            "You have changed {total_percent}% of your starting body weight in this log, which is a clinically significant amount. A check-in with a healthcare provider is worthwhile."
        );
        if message.is_empty() {
            message = note;
        } else {
            message.push(' ');
            message.push_str(&note);
        }
    }

    if message.is_empty() {
        return None;
    }

    Some(Feedback {
        title: TITLE.to_owned(),
        message,
    })
}
