//! History
//!
//! Session history stack with typed state payloads; pushState, back,
//! forward, go.

/// State payload attached to a history entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    /// Hash fragment, including the leading `#` (empty for none)
    pub hash: String,
}

/// History entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub url: String,
    pub state: Option<NavState>,
}

/// History manager
#[derive(Debug)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current: usize,
}

impl History {
    pub fn new(initial_url: &str) -> Self {
        Self {
            entries: vec![HistoryEntry {
                url: initial_url.to_string(),
                state: None,
            }],
            current: 0,
        }
    }

    /// Push a new entry, dropping any forward history
    pub fn push_state(&mut self, state: Option<NavState>, url: &str) {
        self.entries.truncate(self.current + 1);
        self.entries.push(HistoryEntry {
            url: url.to_string(),
            state,
        });
        self.current = self.entries.len() - 1;
    }

    /// Replace the current entry
    pub fn replace_state(&mut self, state: Option<NavState>, url: &str) {
        if let Some(entry) = self.entries.get_mut(self.current) {
            entry.url = url.to_string();
            entry.state = state;
        }
    }

    /// Go back one entry
    pub fn back(&mut self) -> Option<&HistoryEntry> {
        if self.current > 0 {
            self.current -= 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Go forward one entry
    pub fn forward(&mut self) -> Option<&HistoryEntry> {
        if self.current + 1 < self.entries.len() {
            self.current += 1;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Go to a relative offset
    pub fn go(&mut self, delta: i32) -> Option<&HistoryEntry> {
        let target = self.current as i64 + delta as i64;
        if (0..self.entries.len() as i64).contains(&target) {
            self.current = target as usize;
            Some(&self.entries[self.current])
        } else {
            None
        }
    }

    /// Current entry
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current]
    }

    /// Number of entries
    pub fn length(&self) -> usize {
        self.entries.len()
    }
}
