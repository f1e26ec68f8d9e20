use crate::core::comparator::Comparator;

/// 以 `operator` 的結果取代每個元素，長度與位置不變
pub fn replace_all<T, F>(items: &mut [T], mut operator: F)
where
    F: FnMut(&T) -> T,
{
    for item in items.iter_mut() {
        *item = operator(item);
    }
}

/// 就地穩定排序
pub fn sort<T>(items: &mut [T], comparator: &Comparator<'_, T>) {
    items.sort_by(|a, b| comparator.compare(a, b));
}

/// 先以 `comparator` 穩定排序，再把整個序列反轉；
/// 相等的元素因此以輸入順序的相反次序出現
pub fn sort_then_reverse<T>(items: &mut [T], comparator: &Comparator<'_, T>) {
    sort(items, comparator);
    items.reverse();
}
