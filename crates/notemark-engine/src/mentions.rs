//! # Mention Directory
//!
//! Users that can be tagged, and the completion state an editor keeps while
//! the caret sits inside a mention.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// How many matches a non-empty search shows.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// A taggable user as served by the user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            title: None,
        }
    }

    /// `first_name last_name`, the text a mention is filled with.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Plain substring match on full name or username.
    pub fn matches(&self, search: &str) -> bool {
        self.full_name().contains(search) || self.username.contains(search)
    }
}

/// A user directory file: a `[[users]]` array.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDirectory {
    #[serde(default)]
    pub users: Vec<User>,
}

/// Orders users by full name, case-insensitively first.
pub fn sort_users(users: &mut [User]) {
    users.sort_by(|a, b| compare_full_names(&a.full_name(), &b.full_name()));
}

fn compare_full_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Users of `directory` matching `search`; all of them when it is empty.
pub fn filter_users(directory: &[User], search: &str) -> Vec<User> {
    if search.is_empty() {
        return directory.to_vec();
    }
    directory
        .iter()
        .filter(|u| u.matches(search))
        .cloned()
        .collect()
}

/// Completion state while the caret is inside a mention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MentionSearch {
    active: bool,
    search: String,
    matches: Vec<User>,
    selected: usize,
    limit: usize,
}

impl Default for MentionSearch {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_LIMIT)
    }
}

impl MentionSearch {
    pub fn new(limit: usize) -> Self {
        Self {
            active: false,
            search: String::new(),
            matches: Vec::new(),
            selected: 0,
            limit,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn matches(&self) -> &[User] {
        &self.matches
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Re-runs the search and moves the highlight back to the first match.
    pub fn start_or_continue(&mut self, directory: &[User], search: &str) {
        self.active = true;
        self.search = search.to_string();
        self.matches = filter_users(directory, search);
        self.selected = 0;
    }

    pub fn stop(&mut self, directory: &[User]) {
        self.active = false;
        self.search.clear();
        self.matches = directory.to_vec();
        self.selected = 0;
    }

    /// Highlights `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.visible().len() {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected + 1)
    }

    pub fn select_previous(&mut self) -> bool {
        match self.selected.checked_sub(1) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn selected_user(&self) -> Option<&User> {
        self.visible().get(self.selected)
    }

    /// Matches to offer: everything for an empty search, else up to the limit.
    pub fn visible(&self) -> &[User] {
        if self.search.is_empty() {
            &self.matches
        } else {
            &self.matches[..self.matches.len().min(self.limit)]
        }
    }
}
