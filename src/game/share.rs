//! Plain-text share summaries
//!
//! Everything here produces strings that are safe to hand to a clipboard or
//! a native share sheet. No platform APIs are touched.

use super::ShareableResult;

/// Footer appended to every share text
pub const SHARE_FOOTER: &str = "🎮 Play at nerdcube.games";

/// Generic share text: title, score line, optional emoji block, footer.
pub fn share_text(result: &ShareableResult) -> String {
    let mut text = format!("{} {}\n", result.game_type, result.date);
    text.push_str(&format!("Score: {}/{}\n", result.score, result.max_score));
    if let Some(grid) = &result.emoji_grid {
        text.push_str(&format!("\n{}\n", grid));
    }
    text.push_str(&format!("\n{}", SHARE_FOOTER));
    text
}

/// Single medal for a score as a fraction of the maximum.
pub fn score_emoji(score: u32, max_score: u32) -> &'static str {
    let percentage = percentage(score, max_score);
    if percentage >= 90.0 {
        "🏆"
    } else if percentage >= 80.0 {
        "🥇"
    } else if percentage >= 70.0 {
        "🥈"
    } else if percentage >= 60.0 {
        "🥉"
    } else if percentage >= 50.0 {
        "👍"
    } else if percentage >= 30.0 {
        "🎯"
    } else {
        "💪"
    }
}

/// `m:ss` when at least a minute, otherwise `Ns`.
pub fn format_duration(milliseconds: i64) -> String {
    let seconds = milliseconds.max(0) / 1000;
    let minutes = seconds / 60;
    let remaining = seconds % 60;
    if minutes > 0 {
        format!("{}:{:02}", minutes, remaining)
    } else {
        format!("{}s", remaining)
    }
}

/// Countdown clock format, always `m:ss`.
pub fn format_timer(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Progress bar of green and white squares.
pub fn emoji_progress(current: u32, total: u32, length: usize) -> String {
    let filled = if total == 0 {
        0
    } else {
        ((current as f64 / total as f64) * length as f64).round() as usize
    }
    .min(length);
    format!("{}{}", "🟩".repeat(filled), "⬜".repeat(length - filled))
}

fn percentage(score: u32, max_score: u32) -> f64 {
    if max_score == 0 {
        0.0
    } else {
        score as f64 / max_score as f64 * 100.0
    }
}
