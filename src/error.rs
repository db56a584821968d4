use thiserror::Error;

/// 계산 입력 검증 및 집계 과정에서 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// 범위를 벗어났거나 0 이하인 수치 입력. `field`는 `vehicle.base_price` 형식의 경로.
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        field: &'static str,
        reason: &'static str,
    },
    #[error("unsupported vehicle type: {0}")]
    UnsupportedVehicleType(String),
    #[error("unsupported partnership tier: {0}")]
    UnsupportedTier(String),
    /// 총 TCO가 0이라 ROI를 정의할 수 없음
    #[error("ROI is undefined when total TCO is zero")]
    DivisionByZero,
}

impl ProjectionError {
    pub(crate) fn invalid(field: &'static str, reason: &'static str) -> Self {
        ProjectionError::InvalidParameter { field, reason }
    }
}
