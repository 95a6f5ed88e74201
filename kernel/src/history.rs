extern crate alloc;

use alloc::vec::Vec;
use heapless::String;
use spin::Mutex;

const HISTORY_LIMIT: usize = 32;

struct History {
    entries: Vec<String<128>>,
}

impl History {
    const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn push(&mut self, cmd: &str) {
        if cmd.is_empty() {
            return;
        }
        // Re-entering a command moves it to the front instead of duplicating.
        if let Some(pos) = self.entries.iter().position(|h| h.as_str() == cmd) {
            self.entries.remove(pos);
        }
        if self.entries.len() >= HISTORY_LIMIT {
            self.entries.remove(0);
        }
        let mut s = String::new();
        let _ = s.push_str(cmd);
        self.entries.push(s);
    }
}

static HISTORY: Mutex<History> = Mutex::new(History::new());

pub fn push(cmd: &str) {
    HISTORY.lock().push(cmd);
}

pub fn len() -> usize {
    HISTORY.lock().entries.len()
}

pub fn entry(idx: usize) -> Option<String<128>> {
    HISTORY.lock().entries.get(idx).cloned()
}
