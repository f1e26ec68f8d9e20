use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// 鍵不存在時才插入；回傳是否有插入
pub fn put_if_absent<K, V>(map: &mut HashMap<K, V>, key: K, value: V) -> bool
where
    K: Eq + Hash,
{
    match map.entry(key) {
        Entry::Occupied(_) => false,
        Entry::Vacant(entry) => {
            entry.insert(value);
            true
        }
    }
}

/// 鍵不存在時以 `mapping` 計算預設值；無論如何都回傳該鍵的值，可就地修改
pub fn compute_if_absent<K, V, F>(map: &mut HashMap<K, V>, key: K, mapping: F) -> &mut V
where
    K: Eq + Hash,
    F: FnOnce(&K) -> V,
{
    match map.entry(key) {
        Entry::Occupied(entry) => entry.into_mut(),
        Entry::Vacant(entry) => {
            let value = mapping(entry.key());
            entry.insert(value)
        }
    }
}

/// 鍵不存在時插入 `value`；已存在時存入 `remapping(existing, value)`
pub fn merge<K, V, F>(map: &mut HashMap<K, V>, key: K, value: V, remapping: F) -> &mut V
where
    K: Eq + Hash,
    F: FnOnce(V, V) -> V,
{
    let (key, merged) = match map.remove_entry(&key) {
        Some((existing_key, existing)) => (existing_key, remapping(existing, value)),
        None => (key, value),
    };
    map.entry(key).or_insert(merged)
}

/// 把 `source` 的每個項目合併進 `destination`
///
/// `remapping` 的參數順序固定為 `(destination 的值, source 的值)`。
/// 只在 `destination` 的鍵不受影響；只在 `source` 的鍵原樣帶入。
pub fn merge_all<K, V, F>(destination: &mut HashMap<K, V>, source: HashMap<K, V>, mut remapping: F)
where
    K: Eq + Hash,
    F: FnMut(V, V) -> V,
{
    for (key, value) in source {
        merge(destination, key, value, &mut remapping);
    }
}
