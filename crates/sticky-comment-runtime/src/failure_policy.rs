use sticky_comment_core::StickyCommentError;
use tracing::error;

use crate::pipeline::RunOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// How remote failures are surfaced at the outer boundary.
pub enum FailurePolicy {
    HardFail,
    /// Remote failures are logged and the run still succeeds.
    SoftFail,
}

impl FailurePolicy {
    pub fn from_allow_failure(allow_failure: bool) -> Self {
        if allow_failure {
            Self::SoftFail
        } else {
            Self::HardFail
        }
    }

    /// Configuration and attachment errors pass through under either policy.
    pub fn settle(
        self,
        result: Result<RunOutcome, StickyCommentError>,
    ) -> Result<RunOutcome, StickyCommentError> {
        match result {
            Err(failure) if failure.is_remote() && self == Self::SoftFail => {
                error!("{failure}");
                Ok(RunOutcome::FailureSuppressed {
                    message: failure.to_string(),
                })
            }
            other => other,
        }
    }
}
