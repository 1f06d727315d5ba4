//! Automation worthiness scoring.
//!
//! Each true checklist flag is worth 20 points, so the score is always
//! a multiple of 20 in [0, 100]. The recommendation ladder buckets the
//! score at fixed thresholds of 40, 60, and 80.

use founderdeck_core::records::AutomationChecklist;
use founderdeck_core::types::AutomationRecommendation;

/// Points per satisfied checklist item.
pub const POINTS_PER_FLAG: u8 = 20;

pub fn compute_automation_score(checklist: &AutomationChecklist) -> u8 {
    let satisfied = checklist.flags().iter().filter(|flag| **flag).count() as u8;
    satisfied * POINTS_PER_FLAG
}

/// Map a 0-100 score onto the recommendation ladder.
///
/// Buckets are upper-exclusive except the top: [0,40) do-not-automate,
/// [40,60) simple script, [60,80) single-task agent, [80,100] multi-step.
pub fn recommendation_for_score(score: u8) -> AutomationRecommendation {
    match score {
        0..=39 => AutomationRecommendation::DoNotAutomate,
        40..=59 => AutomationRecommendation::BuildSimpleScript,
        60..=79 => AutomationRecommendation::BuildSingleTaskAgent,
        _ => AutomationRecommendation::BuildMultiStepAgent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checklist(flags: [bool; 5]) -> AutomationChecklist {
        AutomationChecklist {
            done_three_plus_per_week: flags[0],
            predictable_workflow: flags[1],
            clear_inputs_outputs: flags[2],
            error_tolerance_acceptable: flags[3],
            time_saved_meaningful: flags[4],
        }
    }

    #[test]
    fn score_is_twenty_per_true_flag() {
        assert_eq!(compute_automation_score(&checklist([false; 5])), 0);
        assert_eq!(
            compute_automation_score(&checklist([true, false, false, false, false])),
            20
        );
        assert_eq!(
            compute_automation_score(&checklist([true, true, false, true, false])),
            60
        );
        assert_eq!(compute_automation_score(&checklist([true; 5])), 100);
    }

    #[test]
    fn score_is_independent_of_which_flags_are_set() {
        let a = compute_automation_score(&checklist([true, true, false, false, false]));
        let b = compute_automation_score(&checklist([false, false, false, true, true]));
        assert_eq!(a, b);
        assert_eq!(a, 40);
    }

    #[test]
    fn recommendation_bucket_boundaries() {
        use AutomationRecommendation::*;
        assert_eq!(recommendation_for_score(0), DoNotAutomate);
        assert_eq!(recommendation_for_score(20), DoNotAutomate);
        assert_eq!(recommendation_for_score(39), DoNotAutomate);
        assert_eq!(recommendation_for_score(40), BuildSimpleScript);
        assert_eq!(recommendation_for_score(59), BuildSimpleScript);
        assert_eq!(recommendation_for_score(60), BuildSingleTaskAgent);
        assert_eq!(recommendation_for_score(79), BuildSingleTaskAgent);
        assert_eq!(recommendation_for_score(80), BuildMultiStepAgent);
        assert_eq!(recommendation_for_score(100), BuildMultiStepAgent);
    }

    #[test]
    fn recommendation_is_monotonic_in_score() {
        let mut previous = recommendation_for_score(0);
        for score in 1..=100 {
            let current = recommendation_for_score(score);
            assert!(current >= previous, "regressed at score {score}");
            previous = current;
        }
    }
}
