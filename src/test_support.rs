use std::env;
use std::ffi::OsString;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Overrides resource environment variables until dropped.
///
/// Holds a process-wide lock so tests touching `PERSIAN_WORDCLOUD_*`
/// never observe each other's values. Previous values come back on drop,
/// including when the test panics.
pub(crate) struct EnvOverride {
    saved: Vec<(String, Option<OsString>)>,
    _lock: MutexGuard<'static, ()>,
}

impl EnvOverride {
    /// Sets every `Some` value and unsets every `None`.
    pub(crate) fn apply(vars: &[(&str, Option<&str>)]) -> Self {
        let lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        let mut saved = Vec::with_capacity(vars.len());
        for &(key, value) in vars {
            saved.push((key.to_string(), env::var_os(key)));
            write_var(key, value.map(OsString::from));
        }
        Self { saved, _lock: lock }
    }

    /// Sets a single variable.
    pub(crate) fn set(key: &str, value: &str) -> Self {
        Self::apply(&[(key, Some(value))])
    }
}

impl Drop for EnvOverride {
    fn drop(&mut self) {
        while let Some((key, previous)) = self.saved.pop() {
            write_var(&key, previous);
        }
    }
}

#[allow(unused_unsafe)]
fn write_var(key: &str, value: Option<OsString>) {
    // Every caller holds ENV_LOCK.
    unsafe {
        match value {
            Some(value) => env::set_var(key, value),
            None => env::remove_var(key),
        }
    }
}

/// Writes `contents` to a fresh file under the system temp dir.
pub(crate) fn temp_resource(name: &str, contents: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let dir = env::temp_dir().join(format!(
        "persian-wordcloud-test-{}-{id}",
        std::process::id()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("write temp resource");
    path
}
