use crate::common::error::{AppError, ServiceResult};

pub const fn ensure_valid(id: i64) -> ServiceResult<()> {
    if id > 0 {
        Ok(())
    } else {
        Err(AppError::InvalidId)
    }
}

pub const fn ensure_valid_pair(first: i64, second: i64) -> ServiceResult<()> {
    if first > 0 && second > 0 {
        Ok(())
    } else {
        Err(AppError::InvalidId)
    }
}
