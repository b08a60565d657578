use crate::{config::PERSISTENCE, data::history_store::HistoryStore};

#[cfg(not(target_arch = "wasm32"))]
pub use native::FileHistoryStore;

#[cfg(target_arch = "wasm32")]
pub use web::LocalStorageHistoryStore;

/// The store the running app uses on this platform.
pub fn default_history_store() -> Box<dyn HistoryStore> {
    #[cfg(not(target_arch = "wasm32"))]
    {
        Box::new(FileHistoryStore::from_env())
    }

    #[cfg(target_arch = "wasm32")]
    {
        match LocalStorageHistoryStore::open() {
            Some(store) => Box::new(store),
            None => {
                log::warn!(
                    "localStorage unavailable, history for key '{}' will not survive a reload",
                    PERSISTENCE.history.key
                );
                Box::new(crate::data::MemoryHistoryStore::new())
            }
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use {
        super::*,
        crate::{
            config::{DF, history_filename},
            data::history_store::{HistoryLog, decode_history, encode_history},
        },
        anyhow::{Context, Result},
        std::{
            fs::{self, File},
            io::{BufWriter, Write},
            path::{Path, PathBuf},
        },
    };

    /// JSON file holding the whole log. One file, rewritten on every save.
    #[derive(Debug, Clone)]
    pub struct FileHistoryStore {
        path: PathBuf,
    }

    impl FileHistoryStore {
        pub fn new(path: impl Into<PathBuf>) -> Self {
            Self { path: path.into() }
        }

        /// `$STAR_ORACLE_DATA_DIR/horoscope_history.json`, or the working directory.
        pub fn from_env() -> Self {
            let dir = std::env::var(PERSISTENCE.history.dir_env_var)
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            Self::new(dir.join(history_filename()))
        }

        pub fn path(&self) -> &Path {
            &self.path
        }

        fn tmp_path(&self) -> PathBuf {
            self.path.with_extension("json.tmp")
        }
    }

    impl HistoryStore for FileHistoryStore {
        fn load(&self) -> HistoryLog {
            if !self.path.exists() {
                return HistoryLog::new();
            }
            match fs::read_to_string(&self.path) {
                Ok(raw) => decode_history(Some(&raw)),
                Err(e) => {
                    log::error!("Failed to read history {}: {}", self.path.display(), e);
                    HistoryLog::new()
                }
            }
        }

        fn save(&mut self, log: &HistoryLog) -> Result<()> {
            if let Some(parent) = self.path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating {}", parent.display()))?;
            }
            // The target is only ever replaced by a complete file.
            let tmp = self.tmp_path();
            let file =
                File::create(&tmp).with_context(|| format!("creating {}", tmp.display()))?;
            let mut writer = BufWriter::new(file);
            writer.write_all(encode_history(log)?.as_bytes())?;
            writer.flush()?;
            writer.get_ref().sync_all()?;
            drop(writer);
            fs::rename(&tmp, &self.path).with_context(|| {
                format!("replacing {} with {}", self.path.display(), tmp.display())
            })?;

            #[cfg(debug_assertions)]
            if DF.log_history {
                log::info!("Saved {} history entries to {}", log.len(), self.path.display());
            }
            Ok(())
        }
    }

    #[cfg(test)]
    mod tests {
        use {
            super::*,
            crate::domain::{Forecast, HistoryEntry, Profile},
        };

        fn temp_path(tag: &str) -> PathBuf {
            std::env::temp_dir().join(format!(
                "star_oracle_{}_{}_{}.json",
                tag,
                std::process::id(),
                crate::utils::now_timestamp_ms()
            ))
        }

        #[test]
        fn missing_file_loads_empty() {
            let store = FileHistoryStore::new(temp_path("missing"));
            assert!(store.load().is_empty());
        }

        #[test]
        fn save_then_load_from_a_fresh_store() {
            let path = temp_path("roundtrip");
            let mut store = FileHistoryStore::new(&path);
            let mut log = HistoryLog::new();
            log.push_newest(HistoryEntry::new(Forecast::default(), Profile::default(), 42));
            store.save(&log).unwrap();

            let reopened = FileHistoryStore::new(&path);
            assert_eq!(reopened.load(), log);
            let _ = fs::remove_file(&path);
        }

        #[test]
        fn save_replaces_previous_file_and_leaves_no_temp() {
            let path = temp_path("replace");
            let mut store = FileHistoryStore::new(&path);
            let mut log = HistoryLog::new();
            log.push_newest(HistoryEntry::new(Forecast::default(), Profile::default(), 1));
            store.save(&log).unwrap();
            log.push_newest(HistoryEntry::new(Forecast::default(), Profile::default(), 2));
            store.save(&log).unwrap();

            assert!(!store.tmp_path().exists());
            assert_eq!(FileHistoryStore::new(&path).load().len(), 2);
            let _ = fs::remove_file(&path);
        }

        #[test]
        fn leftover_temp_file_does_not_touch_saved_history() {
            let path = temp_path("leftover");
            let mut store = FileHistoryStore::new(&path);
            let mut log = HistoryLog::new();
            log.push_newest(HistoryEntry::new(Forecast::default(), Profile::default(), 7));
            store.save(&log).unwrap();

            // An interrupted save only ever leaves a half-written temp file behind.
            fs::write(store.tmp_path(), "[{\"date\":").unwrap();
            assert_eq!(FileHistoryStore::new(&path).load(), log);

            store.save(&log).unwrap();
            assert!(!store.tmp_path().exists());
            let _ = fs::remove_file(&path);
        }

        #[test]
        fn garbage_file_loads_empty() {
            let path = temp_path("garbage");
            fs::write(&path, "<<<not json>>>").unwrap();
            let store = FileHistoryStore::new(&path);
            assert!(store.load().is_empty());
            let _ = fs::remove_file(&path);
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod web {
    use {
        super::*,
        crate::data::history_store::{HistoryLog, decode_history, encode_history},
        anyhow::{Result, anyhow},
    };

    /// `window.localStorage[PERSISTENCE.history.key]`
    pub struct LocalStorageHistoryStore {
        storage: web_sys::Storage,
    }

    impl LocalStorageHistoryStore {
        pub fn open() -> Option<Self> {
            let storage = web_sys::window()?.local_storage().ok()??;
            Some(Self { storage })
        }
    }

    impl HistoryStore for LocalStorageHistoryStore {
        fn load(&self) -> HistoryLog {
            match self.storage.get_item(PERSISTENCE.history.key) {
                Ok(raw) => decode_history(raw.as_deref()),
                Err(e) => {
                    log::error!("Failed to read history from localStorage: {:?}", e);
                    HistoryLog::new()
                }
            }
        }

        fn save(&mut self, log: &HistoryLog) -> Result<()> {
            self.storage
                .set_item(PERSISTENCE.history.key, &encode_history(log)?)
                .map_err(|e| anyhow!("localStorage write failed: {:?}", e))
        }
    }
}
