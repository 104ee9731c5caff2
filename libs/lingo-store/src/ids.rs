//! Entry id allocation.

use chrono::Utc;

/// Issues timestamp-based ids that are strictly increasing.
///
/// Ids are millisecond timestamps, bumped past every id seen so far, so two
/// entries added within the same millisecond still get distinct ids and a
/// deleted id is never handed out again.
#[derive(Debug, Default)]
pub struct IdGenerator {
    last: i64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure future ids sort after an id that already exists.
    ///
    /// `i64::MAX` cannot be stepped past and is ignored.
    pub fn observe(&mut self, id: &str) {
        match id.parse::<i64>() {
            Ok(n) if n < i64::MAX => self.last = self.last.max(n),
            _ => {}
        }
    }

    pub fn next_id(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = match self.last.checked_add(1) {
            Some(next) => now.max(next),
            None => now,
        };
        self.last.to_string()
    }
}
