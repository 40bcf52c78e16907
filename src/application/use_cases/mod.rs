/// Use cases module containing application business logic orchestration
mod check_current_build;
mod collect_reports;
mod map_warnings;

pub use check_current_build::CheckCurrentBuildUseCase;
pub use collect_reports::CollectReportsUseCase;
pub use map_warnings::MapWarningsUseCase;
