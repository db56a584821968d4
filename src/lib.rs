//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 외의 대시보드/내보내기 도구에서도 재사용한다.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod report;
pub mod tco;
pub mod ui_cli;

pub use error::ProjectionError;
pub use tco::{project, Projection, ProjectionInput, SummaryMetrics, YearlyResult};
