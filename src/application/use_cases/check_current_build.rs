use crate::ports::outbound::{BuildHistory, BuildIdentity};
use crate::shared::Result;

/// CheckCurrentBuildUseCase - tells whether results belong to the latest build
///
/// Results of an older build must not be re-published, so callers ask this
/// before collecting.
pub struct CheckCurrentBuildUseCase<BH> {
    build_history: BH,
}

impl<BH: BuildHistory> CheckCurrentBuildUseCase<BH> {
    pub fn new(build_history: BH) -> Self {
        Self { build_history }
    }

    pub fn is_current(&self, build: &BuildIdentity) -> Result<bool> {
        let latest = self.build_history.is_latest(build)?;
        if !latest {
            tracing::info!(
                project = %build.project,
                build = build.number,
                "Results belong to an outdated build"
            );
        }
        Ok(latest)
    }
}
