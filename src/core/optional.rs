use crate::utils::error::{Result, TourError};

/// 讀取空結果標記（`Option`）的值；沒有值時回傳 `NoValuePresent`
///
/// 與 `unwrap_or` 不同，這裡不會以預設值代替，呼叫端必須處理錯誤。
pub trait Present<T> {
    fn present(self) -> Result<T>;
}

impl<T> Present<T> for Option<T> {
    fn present(self) -> Result<T> {
        self.ok_or(TourError::NoValuePresent)
    }
}
