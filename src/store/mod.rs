use log::warn;

mod memory;

pub use memory::MemoryStore;

pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    /// Returns `default` when the key is missing or does not hold an integer.
    fn get_int(&self, key: &str, default: i64) -> i64 {
        let Some(raw) = self.get(key) else {
            return default;
        };
        match raw.trim().parse::<i64>() {
            Ok(value) => value,
            Err(err) => {
                warn!("Ignoring preference {}={:?}: {}", key, raw, err);
                default
            }
        }
    }

    fn set_int(&mut self, key: &str, value: i64) {
        self.set(key, value.to_string());
    }
}
