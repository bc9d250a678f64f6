use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::BoardError;

// The fixed set of board columns, in display order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Column {
    #[default]
    Todo,
    InProgress,
    Complete,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Todo, Column::InProgress, Column::Complete];

    pub fn id(&self) -> &'static str {
        match self {
            Column::Todo => "todo",
            Column::InProgress => "inProgress",
            Column::Complete => "complete",
        }
    }

    // Label shown in the add-task selector
    pub fn as_str(&self) -> &'static str {
        match self {
            Column::Todo => "To Do",
            Column::InProgress => "In Progress",
            Column::Complete => "Complete",
        }
    }

    // Column heading, derived from the id
    pub fn heading(&self) -> String {
        heading_from_id(self.id())
    }

    pub fn all() -> Vec<Column> {
        Self::ALL.to_vec()
    }

    pub(crate) fn slot(&self) -> usize {
        match self {
            Column::Todo => 0,
            Column::InProgress => 1,
            Column::Complete => 2,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Column {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Column::ALL
            .into_iter()
            .find(|column| column.id() == s)
            .ok_or_else(|| BoardError::UnknownColumn(s.to_string()))
    }
}

/// Splits a camelCase id into words: a space goes before every uppercase
/// letter and the result is trimmed, so `inProgress` becomes `in Progress`.
pub fn heading_from_id(id: &str) -> String {
    let mut heading = String::with_capacity(id.len() + 4);
    for ch in id.chars() {
        if ch.is_ascii_uppercase() {
            heading.push(' ');
        }
        heading.push(ch);
    }
    heading.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headings_split_camel_case_ids() {
        assert_eq!(Column::Todo.heading(), "todo");
        assert_eq!(Column::InProgress.heading(), "in Progress");
        assert_eq!(Column::Complete.heading(), "complete");
        assert_eq!(heading_from_id("AlreadyCapital"), "Already Capital");
    }

    #[test]
    fn ids_parse_back_to_columns() {
        for column in Column::all() {
            assert_eq!(column.id().parse::<Column>().unwrap(), column);
        }
        assert_eq!(
            "done".parse::<Column>(),
            Err(BoardError::UnknownColumn("done".to_string()))
        );
    }

    #[test]
    fn serde_uses_the_wire_ids() {
        let json = serde_json::to_string(&Column::InProgress).unwrap();
        assert_eq!(json, "\"inProgress\"");
    }
}
