/// Crate-wide Result alias. Typed failures are carried as
/// [`ReportError`](crate::shared::error::ReportError) inside the `anyhow::Error`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
