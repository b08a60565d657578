use {
    crate::{
        config::{DF, PERSISTENCE},
        domain::HistoryEntry,
    },
    anyhow::Result,
    serde::{Deserialize, Serialize},
    std::{cell::RefCell, rc::Rc},
};

/// Past forecasts, newest first, never longer than `PERSISTENCE.history.cap`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryLog {
    entries: Vec<HistoryEntry>,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert at the front and drop whatever falls past the cap.
    pub fn push_newest(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(PERSISTENCE.history.cap);
    }

    pub fn newest(&self) -> Option<&HistoryEntry> {
        self.entries.first()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<HistoryEntry>> for HistoryLog {
    /// Applies the cap, so an oversized file written by hand can't break the invariant.
    fn from(mut entries: Vec<HistoryEntry>) -> Self {
        entries.truncate(PERSISTENCE.history.cap);
        Self { entries }
    }
}

/// Persistence for the history log. The controller is the only writer.
pub trait HistoryStore {
    /// Never fails: absent or unreadable state comes back as an empty log.
    fn load(&self) -> HistoryLog;

    /// Overwrite the stored value with the full log.
    fn save(&mut self, log: &HistoryLog) -> Result<()>;
}

/// Parse a stored value. Corruption is logged and treated as "no history".
pub(crate) fn decode_history(raw: Option<&str>) -> HistoryLog {
    let Some(raw) = raw else {
        return HistoryLog::new();
    };
    match serde_json::from_str::<Vec<HistoryEntry>>(raw) {
        Ok(entries) => {
            let log = HistoryLog::from(entries);
            #[cfg(debug_assertions)]
            if DF.log_history {
                log::info!("Loaded {} history entries", log.len());
            }
            log
        }
        Err(e) => {
            log::error!("Failed to parse history, starting empty: {}", e);
            HistoryLog::new()
        }
    }
}

pub(crate) fn encode_history(log: &HistoryLog) -> Result<String> {
    Ok(serde_json::to_string(log)?)
}

/// Keeps the encoded value in memory. Used by tests and when no real storage is reachable.
/// Clones share the same slot.
#[derive(Debug, Default, Clone)]
pub struct MemoryHistoryStore {
    raw: Rc<RefCell<Option<String>>>,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an arbitrary stored value, e.g. something corrupt.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Rc::new(RefCell::new(Some(raw.into()))),
        }
    }

    pub fn raw(&self) -> Option<String> {
        self.raw.borrow().clone()
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn load(&self) -> HistoryLog {
        decode_history(self.raw.borrow().as_deref())
    }

    fn save(&mut self, log: &HistoryLog) -> Result<()> {
        *self.raw.borrow_mut() = Some(encode_history(log)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::domain::{Forecast, Profile},
    };

    fn entry(ts: i64) -> HistoryEntry {
        HistoryEntry::new(Forecast::default(), Profile::default(), ts)
    }

    #[test]
    fn push_keeps_newest_first_and_caps() {
        let mut log = HistoryLog::new();
        for ts in 0..60 {
            log.push_newest(entry(ts));
            assert!(log.len() <= PERSISTENCE.history.cap);
        }
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().unwrap().timestamp, 59);
        assert_eq!(log.get(49).unwrap().timestamp, 10);
    }

    #[test]
    fn absent_value_is_empty() {
        let store = MemoryHistoryStore::new();
        assert!(store.load().is_empty());
    }

    #[test]
    fn corrupt_value_is_empty() {
        let store = MemoryHistoryStore::with_raw("this is {not json");
        assert!(store.load().is_empty());

        let store = MemoryHistoryStore::with_raw(r#"{"an":"object"}"#);
        assert!(store.load().is_empty());
    }

    #[test]
    fn save_overwrites_with_full_log() {
        let mut store = MemoryHistoryStore::new();
        let mut log = HistoryLog::new();
        log.push_newest(entry(1));
        store.save(&log).unwrap();
        log.push_newest(entry(2));
        store.save(&log).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, log);
        assert!(store.raw().unwrap().starts_with('['));
    }

    #[test]
    fn oversized_stored_array_is_trimmed_on_load() {
        let entries: Vec<HistoryEntry> = (0..70).map(entry).collect();
        let store = MemoryHistoryStore::with_raw(serde_json::to_string(&entries).unwrap());
        let log = store.load();
        assert_eq!(log.len(), 50);
        assert_eq!(log.newest().unwrap().timestamp, 0);
    }
}
