use std::path::PathBuf;

use ironprime_backup_contracts::BackupService;
use ironprime_models::contact::ContactSubmission;
use tokio::{fs::OpenOptions, io::AsyncWriteExt};

/// Appends one human-readable block per submission to a text file, creating
/// the file on first write. Concurrent appends may interleave; strict ordering
/// of blocks is not required.
#[derive(Debug, Clone)]
pub struct FileBackupServiceImpl {
    path: PathBuf,
}

impl FileBackupServiceImpl {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl BackupService for FileBackupServiceImpl {
    async fn append(&self, submission: ContactSubmission) -> anyhow::Result<()> {
        let mut file = OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await?;
        file.write_all(format_block(&submission).as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}

fn format_block(submission: &ContactSubmission) -> String {
    format!(
        "\n{}\nFecha: {}\nNombre: {}\nEmail: {}\nTeléfono: {}\nProyecto: {}\nMensaje: {}\n",
        "=".repeat(60),
        submission.received_at.format("%Y-%m-%d %H:%M:%S"),
        *submission.name,
        *submission.email,
        submission.phone,
        submission.project_type,
        *submission.message,
    )
}
