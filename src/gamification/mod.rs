pub mod rules;

pub use rules::{
    daily_target_met, is_valid_daily_target, next_streak, streak_decision, StreakDecision,
    DAILY_TARGET_CHOICES, NOTE_CREATION_XP,
};
