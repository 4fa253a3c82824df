use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

/// Extracts the short type name from a full type path and caches it.
///
/// `alloc::string::String` becomes `String`, `i32` stays `i32`.
pub fn short_type_name<T: ?Sized + 'static>() -> &'static str {
    static CACHE: OnceLock<Mutex<HashMap<&'static str, &'static str>>> = OnceLock::new();

    let full: &'static str = std::any::type_name::<T>();

    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));
    // A poisoned cache only means another thread panicked mid-insert; the map is still usable.
    let mut guard = cache.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if let Some(&short) = guard.get(full) {
        return short;
    }

    let short_owned = shorten(full);
    let short: &'static str = Box::leak(short_owned.into_boxed_str());
    guard.insert(full, short);
    short
}

/// Strips module paths while keeping reference markers and generic arguments,
/// so `&alloc::string::String` reads `&String`.
fn shorten(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        match c {
            ':' => segment.clear(),
            '<' | '>' | ',' | ' ' | '&' | '[' | ']' | ';' | '(' | ')' => {
                out.push_str(&segment);
                segment.clear();
                out.push(c);
            }
            _ => segment.push(c),
        }
    }
    out.push_str(&segment);
    out
}
