use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// 本地持久化键值存储
pub trait KeyValueStorage: Send + Sync {
    fn get_item(&self, key: &str) -> std::io::Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> std::io::Result<()>;
    fn remove_item(&self, key: &str) -> std::io::Result<()>;
}

/// 进程内存储，主要用于测试
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned() -> std::io::Error {
    std::io::Error::other("storage lock poisoned")
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> std::io::Result<Option<String>> {
        let items = self.items.read().map_err(|_| poisoned())?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> std::io::Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> std::io::Result<()> {
        let mut items = self.items.write().map_err(|_| poisoned())?;
        items.remove(key);
        Ok(())
    }
}

/// JSON 文件存储
///
/// 每次读取都重新加载文件，多个进程共用同一文件时能看到彼此的写入；
/// 并发写入不加锁，后写入者覆盖先写入者。
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    // 仅串行化本进程内的读改写
    write_lock: RwLock<()>,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: RwLock::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> std::io::Result<HashMap<String, String>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e),
        };

        if raw.trim().is_empty() {
            return Ok(HashMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| {
            tracing::warn!("存储文件损坏 {}: {}", self.path.display(), e);
            std::io::Error::new(ErrorKind::InvalidData, e)
        })
    }

    fn save(&self, items: &HashMap<String, String>) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(items)
            .map_err(|e| std::io::Error::new(ErrorKind::InvalidData, e))?;

        // 先写临时文件再替换，避免读到写了一半的内容
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }
}

impl KeyValueStorage for FileStorage {
    fn get_item(&self, key: &str) -> std::io::Result<Option<String>> {
        let _guard = self.write_lock.read().map_err(|_| poisoned())?;
        Ok(self.load()?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.write().map_err(|_| poisoned())?;
        let mut items = self.load()?;
        items.insert(key.to_string(), value.to_string());
        self.save(&items)
    }

    fn remove_item(&self, key: &str) -> std::io::Result<()> {
        let _guard = self.write_lock.write().map_err(|_| poisoned())?;
        let mut items = self.load()?;
        if items.remove(key).is_some() {
            self.save(&items)?;
        }
        Ok(())
    }
}
