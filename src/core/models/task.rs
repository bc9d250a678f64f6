use chrono::Utc;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub content: String,
}

impl Task {
    pub fn new(id: String, content: String) -> Self {
        Self { id, content }
    }
}

/// Issues task ids from the wall clock in Unix milliseconds.
///
/// Two tasks created inside the same millisecond (or after the clock steps
/// back) still get distinct ids: the generator never hands out a value less
/// than or equal to the last one it issued.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIdGenerator {
    last: i64,
}

impl TaskIdGenerator {
    pub fn next_id(&mut self) -> String {
        self.next_at(Utc::now().timestamp_millis())
    }

    pub(crate) fn next_at(&mut self, now_millis: i64) -> String {
        let id = now_millis.max(self.last + 1);
        self.last = id;
        id.to_string()
    }
}
