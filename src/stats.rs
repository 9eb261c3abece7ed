//! Feedback Statistics
//!
//! Aggregates shown on the overview and statistics tabs.

use std::collections::{HashMap, HashSet};

use chrono::{Days, NaiveDate};

use crate::models::{ColorTheme, Feedback};

/// Number of days in the activity chart
pub const ACTIVITY_DAYS: u64 = 7;
/// Minimum bar height in percent so empty days stay visible
pub const MIN_BAR_PERCENT: f64 = 10.0;
/// Average length above which feedback counts as detailed
pub const DETAILED_THRESHOLD: u64 = 50;

pub fn unique_users(feedbacks: &[Feedback]) -> usize {
    feedbacks.iter().map(|fb| fb.email.as_str()).collect::<HashSet<_>>().len()
}

/// Count per theme in `ColorTheme::ALL` order, omitting themes with no entries
pub fn theme_counts(feedbacks: &[Feedback]) -> Vec<(ColorTheme, usize)> {
    ColorTheme::ALL
        .into_iter()
        .map(|theme| (theme, count_theme(feedbacks, theme)))
        .filter(|(_, count)| *count > 0)
        .collect()
}

pub fn count_theme(feedbacks: &[Feedback], theme: ColorTheme) -> usize {
    feedbacks.iter().filter(|fb| fb.color_theme == theme).count()
}

/// `part / total` as a percentage, 0 when total is 0
pub fn share_percent(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Mean body length in characters, rounded; 0 for no feedback
pub fn average_length(feedbacks: &[Feedback]) -> u64 {
    if feedbacks.is_empty() {
        return 0;
    }
    let total: usize = feedbacks.iter().map(|fb| fb.feedback.chars().count()).sum();
    (total as f64 / feedbacks.len() as f64).round() as u64
}

/// Email with the most entries; ties keep the first one seen
pub fn most_active_user(feedbacks: &[Feedback]) -> Option<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    let mut order: Vec<&str> = Vec::new();
    for fb in feedbacks {
        let count = counts.entry(fb.email.as_str()).or_insert(0);
        if *count == 0 {
            order.push(fb.email.as_str());
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for email in order {
        let count = counts[email];
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((email, count));
        }
    }
    best.map(|(email, count)| (email.to_string(), count))
}

/// Theme with the highest count; ties resolved in `ColorTheme::ALL` order
pub fn popular_theme(feedbacks: &[Feedback]) -> Option<ColorTheme> {
    let mut best: Option<(ColorTheme, usize)> = None;
    for (theme, count) in theme_counts(feedbacks) {
        if best.map_or(true, |(_, max)| count > max) {
            best = Some((theme, count));
        }
    }
    best.map(|(theme, _)| theme)
}

/// Feedbacks per unique user, `None` without users
pub fn engagement(feedbacks: &[Feedback]) -> Option<f64> {
    let users = unique_users(feedbacks);
    (users > 0).then(|| feedbacks.len() as f64 / users as f64)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub count: usize,
}

/// The last `ACTIVITY_DAYS` days ending at `today`, oldest first
pub fn daily_activity(feedbacks: &[Feedback], today: NaiveDate) -> Vec<DayBucket> {
    let days: Vec<NaiveDate> = (0..ACTIVITY_DAYS)
        .rev()
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .collect();

    let created: Vec<NaiveDate> = feedbacks.iter().filter_map(Feedback::created_on).collect();
    days.into_iter()
        .map(|date| DayBucket {
            date,
            count: created.iter().filter(|d| **d == date).count(),
        })
        .collect()
}

/// Bar height in percent relative to the busiest day
pub fn bar_height(count: usize, buckets: &[DayBucket]) -> f64 {
    let max = buckets.iter().map(|b| b.count).max().unwrap_or(0);
    if max == 0 {
        return MIN_BAR_PERCENT;
    }
    share_percent(count, max).max(MIN_BAR_PERCENT)
}

/// Everything the statistics tab shows, computed once per render
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub total: usize,
    pub unique_users: usize,
    pub average_length: u64,
    pub most_active_user: Option<(String, usize)>,
    pub themes: Vec<(ColorTheme, usize)>,
    pub daily: Vec<DayBucket>,
    pub popular_theme: Option<ColorTheme>,
    pub engagement: Option<f64>,
}

impl FeedbackStats {
    pub fn compute(feedbacks: &[Feedback], today: NaiveDate) -> Self {
        Self {
            total: feedbacks.len(),
            unique_users: unique_users(feedbacks),
            average_length: average_length(feedbacks),
            most_active_user: most_active_user(feedbacks),
            themes: theme_counts(feedbacks),
            daily: daily_activity(feedbacks, today),
            popular_theme: popular_theme(feedbacks),
            engagement: engagement(feedbacks),
        }
    }

    pub fn engagement_text(&self) -> String {
        match self.engagement {
            Some(rate) => format!("{:.1} feedbacks per user on average", rate),
            None => "No data available".to_string(),
        }
    }

    pub fn popular_theme_text(&self) -> String {
        match self.popular_theme {
            Some(theme) => format!("{} is the most chosen theme", theme),
            None => "No themes selected yet".to_string(),
        }
    }

    pub fn quality_text(&self) -> &'static str {
        if self.average_length > DETAILED_THRESHOLD {
            "Users are providing detailed feedback"
        } else {
            "Users tend to give brief feedback"
        }
    }
}
