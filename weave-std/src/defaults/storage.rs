//! In-process storage defaults: form data, bundle lookup, global context.

use parking_lot::Mutex;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use weave_core::contracts::{AppBundle, FormDataStore, GlobalContext};

/// Form data kept in memory for the lifetime of the container.
#[derive(Debug, Default)]
pub struct InMemoryFormDataStore {
    groups: Mutex<HashMap<String, BTreeMap<String, Value>>>,
}

impl InMemoryFormDataStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl FormDataStore for InMemoryFormDataStore {
    fn save(&self, group: &str, key: &str, value: Value) {
        self.groups
            .lock()
            .entry(group.to_owned())
            .or_default()
            .insert(key.to_owned(), value);
    }

    fn read(&self, group: &str) -> Option<BTreeMap<String, Value>> {
        self.groups.lock().get(group).cloned()
    }

    fn clear(&self, group: &str) {
        self.groups.lock().remove(group);
    }
}

/// Resources located next to the running executable.
#[derive(Debug, Clone)]
pub struct MainBundle {
    root: PathBuf,
}

impl MainBundle {
    /// A bundle rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory resources are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for MainBundle {
    fn default() -> Self {
        let root = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));
        Self { root }
    }
}

impl AppBundle for MainBundle {
    fn resource(&self, name: &str) -> Option<PathBuf> {
        let path = self.root.join(name);
        path.exists().then_some(path)
    }
}

/// A single shared [`Value`] tree addressed by dot-separated paths.
///
/// Numeric segments index into arrays; `"items.0"` is the first element of
/// `items`. Writes create missing objects along the way and may append one
/// element past the end of an array.
#[derive(Debug, Default)]
pub struct DefaultGlobalContext {
    root: Mutex<Value>,
}

impl DefaultGlobalContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }
}

/// `"user.name"` as the JSON pointer `"/user/name"`.
fn to_pointer(path: &str) -> String {
    path.split('.')
        .map(|segment| format!("/{}", segment.replace('~', "~0").replace('/', "~1")))
        .collect()
}

/// The slot at `path`, created if missing.
///
/// Scalars met along the way become empty objects. Returns `None` when an
/// array is addressed by a non-numeric or out-of-range segment.
fn slot_mut<'a>(mut current: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    for segment in path.split('.') {
        if !current.is_object() && !current.is_array() {
            *current = Value::Object(Map::new());
        }
        current = match current {
            Value::Array(items) => {
                let index: usize = segment.parse().ok()?;
                if index == items.len() {
                    items.push(Value::Null);
                }
                items.get_mut(index)?
            }
            Value::Object(map) => map.entry(segment).or_insert(Value::Null),
            _ => return None,
        };
    }
    Some(current)
}

impl GlobalContext for DefaultGlobalContext {
    fn get(&self, path: Option<&str>) -> Value {
        let root = self.root.lock();
        match path {
            None => root.clone(),
            Some(path) => root.pointer(&to_pointer(path)).cloned().unwrap_or_default(),
        }
    }

    fn set(&self, value: Value, path: Option<&str>) {
        let mut root = self.root.lock();
        match path {
            None => *root = value,
            Some(path) => match slot_mut(&mut root, path) {
                Some(slot) => *slot = value,
                None => {
                    #[cfg(feature = "tracing")]
                    tracing::warn!(path, "global context path does not address an array element");
                }
            },
        }
    }

    fn clear(&self, path: Option<&str>) {
        self.set(Value::Null, path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_groups_are_independent() {
        let store = InMemoryFormDataStore::new();
        store.save("signup", "email", "a@b.c".into());
        store.save("login", "email", "x@y.z".into());
        store.clear("login");

        let signup = store.read("signup").expect("group saved");
        assert_eq!(signup.get("email"), Some(&Value::from("a@b.c")));
        assert_eq!(store.read("login"), None);
    }

    #[test]
    fn test_bundle_resolves_existing_files_only() {
        let dir = std::env::temp_dir();
        let bundle = MainBundle::new(&dir);
        let name = "weave-bundle-resource.txt";
        std::fs::write(dir.join(name), b"x").unwrap();

        assert_eq!(bundle.resource(name), Some(dir.join(name)));
        assert_eq!(bundle.resource("weave-definitely-missing.bin"), None);
        std::fs::remove_file(dir.join(name)).unwrap();
    }

    #[test]
    fn test_global_context_paths() {
        let context = DefaultGlobalContext::new();
        context.set("ana".into(), Some("user.name"));
        context.set(3.into(), Some("cart.items"));

        assert_eq!(context.get(Some("user.name")), Value::from("ana"));
        context.clear(Some("user.name"));
        assert!(context.get(Some("user.name")).is_null());
        assert_eq!(context.get(Some("cart.items")), Value::from(3));

        context.clear(None);
        assert!(context.get(None).is_null());
    }

    #[test]
    fn test_global_context_writes_into_arrays() {
        let context = DefaultGlobalContext::new();
        context.set(json!([1, 2]), Some("items"));
        context.set(json!(9), Some("items.0"));

        assert_eq!(context.get(Some("items.0")), json!(9));
        assert_eq!(context.get(Some("items.1")), json!(2));
        assert_eq!(context.get(Some("items")), json!([9, 2]));

        context.set(json!(3), Some("items.2"));
        context.set(json!(7), Some("items.9"));
        context.set(json!(7), Some("items.name"));
        assert_eq!(context.get(Some("items")), json!([9, 2, 3]));
    }

    #[test]
    fn test_global_context_nested_objects_in_arrays() {
        let context = DefaultGlobalContext::new();
        context.set(json!([{ "qty": 1 }]), Some("cart.lines"));
        context.set(json!(4), Some("cart.lines.0.qty"));
        context.set(json!("a/b"), Some("odd/key"));

        assert_eq!(
            context.get(None),
            json!({ "cart": { "lines": [{ "qty": 4 }] }, "odd/key": "a/b" })
        );
        assert_eq!(context.get(Some("odd/key")), json!("a/b"));
    }
}
