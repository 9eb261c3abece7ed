//! Table Utilities
//!
//! Search, theme filter, sorting and row selection for the feedback table.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use crate::models::{ColorTheme, Feedback};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Email,
    ColorTheme,
    CreatedAt,
}

impl SortField {
    pub fn label(&self) -> &'static str {
        match self {
            SortField::Name => "Name",
            SortField::Email => "Email",
            SortField::ColorTheme => "Theme",
            SortField::CreatedAt => "Date",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            SortDirection::Asc => "↑",
            SortDirection::Desc => "↓",
        }
    }
}

/// Current search / filter / sort settings of the table
#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    pub search: String,
    /// `None` = all themes
    pub theme: Option<ColorTheme>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl Default for TableQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            theme: None,
            sort_field: SortField::CreatedAt,
            sort_direction: SortDirection::Desc,
        }
    }
}

impl TableQuery {
    /// Header click: same field flips direction, a new field starts descending
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_direction = self.sort_direction.flipped();
        } else {
            self.sort_field = field;
            self.sort_direction = SortDirection::Desc;
        }
    }

    /// Arrow to show next to a column header, if it is the sort column
    pub fn indicator(&self, field: SortField) -> Option<&'static str> {
        (self.sort_field == field).then(|| self.sort_direction.arrow())
    }

    pub fn matches(&self, fb: &Feedback) -> bool {
        let needle = self.search.to_lowercase();
        let matches_search = needle.is_empty()
            || fb.name.to_lowercase().contains(&needle)
            || fb.email.to_lowercase().contains(&needle)
            || fb.feedback.to_lowercase().contains(&needle);
        let matches_theme = self.theme.map_or(true, |t| fb.color_theme == t);
        matches_search && matches_theme
    }

    /// Filter then sort; the sort is stable
    pub fn apply(&self, feedbacks: &[Feedback]) -> Vec<Feedback> {
        let mut rows: Vec<Feedback> = feedbacks.iter().filter(|fb| self.matches(fb)).cloned().collect();
        rows.sort_by(|a, b| {
            let ord = compare_by(self.sort_field, a, b);
            match self.sort_direction {
                SortDirection::Asc => ord,
                SortDirection::Desc => ord.reverse(),
            }
        });
        rows
    }
}

fn compare_by(field: SortField, a: &Feedback, b: &Feedback) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Email => a.email.cmp(&b.email),
        SortField::ColorTheme => a.color_theme.as_str().cmp(b.color_theme.as_str()),
        // None (unparseable) orders first
        SortField::CreatedAt => a.created_at_utc().cmp(&b.created_at_utc()),
    }
}

/// Ids of the rows ticked in the table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    ids: BTreeSet<String>,
}

impl Selection {
    pub fn toggle(&mut self, id: &str) {
        if !self.ids.remove(id) {
            self.ids.insert(id.to_string());
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// True when every visible row is ticked (and there is at least one)
    pub fn covers(&self, visible: &[Feedback]) -> bool {
        !visible.is_empty() && visible.iter().all(|fb| self.ids.contains(&fb.id))
    }

    /// Header checkbox: tick every visible row, or untick them if all were ticked
    pub fn toggle_all(&mut self, visible: &[Feedback]) {
        if self.covers(visible) {
            for fb in visible {
                self.ids.remove(&fb.id);
            }
        } else {
            self.ids.extend(visible.iter().map(|fb| fb.id.clone()));
        }
    }

    /// Drop ids that no longer exist after a refresh
    pub fn retain_existing(&mut self, feedbacks: &[Feedback]) {
        self.ids.retain(|id| feedbacks.iter().any(|fb| &fb.id == id));
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::make_feedback;

    fn sample() -> Vec<Feedback> {
        vec![
            make_feedback("1", "Charlie", ColorTheme::Red, "2024-03-10T12:00:00Z"),
            make_feedback("2", "alice", ColorTheme::Blue, "2024-03-12T08:00:00Z"),
            make_feedback("3", "Bob", ColorTheme::Green, "2024-03-11T18:30:00Z"),
            make_feedback("4", "Dana", ColorTheme::Blue, "not a date"),
        ]
    }

    fn ids(rows: &[Feedback]) -> Vec<&str> {
        rows.iter().map(|fb| fb.id.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_newest_first() {
        let rows = TableQuery::default().apply(&sample());
        assert_eq!(ids(&rows), vec!["2", "3", "1", "4"]);
        let stamps: Vec<_> = rows.iter().map(|fb| fb.created_at_utc()).collect();
        assert!(stamps.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_date_ascending_puts_unparseable_first() {
        let mut query = TableQuery::default();
        query.toggle_sort(SortField::CreatedAt);
        assert_eq!(query.sort_direction, SortDirection::Asc);
        assert_eq!(ids(&query.apply(&sample())), vec!["4", "1", "3", "2"]);
    }

    #[test]
    fn test_new_field_starts_descending() {
        let mut query = TableQuery::default();
        query.toggle_sort(SortField::CreatedAt);
        query.toggle_sort(SortField::Name);
        assert_eq!(query.sort_field, SortField::Name);
        assert_eq!(query.sort_direction, SortDirection::Desc);
        // byte order: uppercase before lowercase
        assert_eq!(ids(&query.apply(&sample())), vec!["2", "4", "1", "3"]);
        assert_eq!(query.indicator(SortField::Name), Some("↓"));
        assert_eq!(query.indicator(SortField::Email), None);
    }

    #[test]
    fn test_theme_sort_uses_names() {
        let query = TableQuery {
            sort_field: SortField::ColorTheme,
            sort_direction: SortDirection::Asc,
            ..Default::default()
        };
        let themes: Vec<_> = query.apply(&sample()).iter().map(|fb| fb.color_theme).collect();
        assert_eq!(themes, vec![ColorTheme::Blue, ColorTheme::Blue, ColorTheme::Green, ColorTheme::Red]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = TableQuery { search: "ALICE".into(), ..Default::default() };
        assert_eq!(ids(&query.apply(&sample())), vec!["2"]);

        let query = TableQuery { search: "from bob".into(), ..Default::default() };
        assert_eq!(ids(&query.apply(&sample())), vec!["3"]);

        let query = TableQuery { search: "EXAMPLE.COM".into(), ..Default::default() };
        assert_eq!(query.apply(&sample()).len(), 4);
    }

    #[test]
    fn test_theme_filter_combines_with_search() {
        let query = TableQuery { theme: Some(ColorTheme::Blue), ..Default::default() };
        assert_eq!(ids(&query.apply(&sample())), vec!["2", "4"]);

        let query = TableQuery { theme: Some(ColorTheme::Blue), search: "dana".into(), ..Default::default() };
        assert_eq!(ids(&query.apply(&sample())), vec!["4"]);

        let query = TableQuery { theme: Some(ColorTheme::Purple), ..Default::default() };
        assert!(query.apply(&sample()).is_empty());
    }

    #[test]
    fn test_selection_toggle_all() {
        let rows = sample();
        let visible = &rows[..2];
        let mut sel = Selection::default();
        sel.toggle("3");
        sel.toggle_all(visible);
        assert_eq!(sel.to_vec(), vec!["1", "2", "3"]);
        assert!(sel.covers(visible));

        sel.toggle_all(visible);
        assert_eq!(sel.to_vec(), vec!["3"]);
        assert!(!sel.covers(&[]));
    }

    #[test]
    fn test_selection_retain_existing() {
        let mut sel = Selection::default();
        sel.toggle("1");
        sel.toggle("gone");
        sel.retain_existing(&sample());
        assert_eq!(sel.to_vec(), vec!["1"]);
        sel.toggle("1");
        assert!(sel.is_empty());
    }

    #[test]
    fn test_selection_survives_filter_and_refresh() {
        let rows = sample();
        let mut sel = Selection::default();
        sel.toggle("1");
        sel.toggle("2");

        // Filtering hides row 1 but keeps it ticked
        let query = TableQuery { theme: Some(ColorTheme::Blue), ..TableQuery::default() };
        assert_eq!(ids(&query.apply(&rows)), vec!["2", "4"]);
        assert!(sel.contains("1"));

        // Failed delete: the refetched snapshot is unchanged
        sel.retain_existing(&rows);
        assert_eq!(sel.to_vec(), vec!["1", "2"]);

        // Row 2 deleted elsewhere
        let refreshed: Vec<Feedback> = rows.into_iter().filter(|fb| fb.id != "2").collect();
        sel.retain_existing(&refreshed);
        assert_eq!(sel.to_vec(), vec!["1"]);
    }
}
