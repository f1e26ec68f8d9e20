use crate::core::stream::Stream;
use crate::utils::error::{Result, TourError};

/// 逐一加入元素、最後 `build` 成 stream 的建構器
///
/// `build` 之後建構器即被凍結，任何 `add`、`accept` 或再次 `build` 都會回傳
/// `TourError::BuilderFinalized`。
#[derive(Debug)]
pub struct StreamBuilder<T> {
    items: Option<Vec<T>>,
}

impl<T> StreamBuilder<T> {
    pub fn new() -> Self {
        Self {
            items: Some(Vec::new()),
        }
    }

    /// 加入元素並回傳自身以便串接
    pub fn add(&mut self, item: T) -> Result<&mut Self> {
        self.accept(item)?;
        Ok(self)
    }

    pub fn accept(&mut self, item: T) -> Result<()> {
        match self.items.as_mut() {
            Some(items) => {
                items.push(item);
                Ok(())
            }
            None => Err(TourError::BuilderFinalized),
        }
    }

    pub fn build(&mut self) -> Result<Stream<std::vec::IntoIter<T>>> {
        let items = self.items.take().ok_or(TourError::BuilderFinalized)?;
        tracing::debug!("stream builder finalized with {} elements", items.len());
        Ok(Stream::new(items.into_iter()))
    }

    pub fn is_built(&self) -> bool {
        self.items.is_none()
    }
}

impl<T> Default for StreamBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
