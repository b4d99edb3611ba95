use std::future::Future;

use ironprime_models::contact::ContactSubmission;

/// Append-only plain text audit record of received submissions.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait BackupService: Send + Sync + 'static {
    fn append(
        &self,
        submission: ContactSubmission,
    ) -> impl Future<Output = anyhow::Result<()>> + Send;
}

#[cfg(feature = "mock")]
impl MockBackupService {
    pub fn with_append(mut self, submission: ContactSubmission) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));
        self
    }

    pub fn with_append_error(mut self, submission: ContactSubmission, error: anyhow::Error) -> Self {
        self.expect_append()
            .once()
            .with(mockall::predicate::eq(submission))
            .return_once(move |_| Box::pin(std::future::ready(Err(error))));
        self
    }
}
