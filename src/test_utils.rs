#[cfg(test)]
pub mod test_utils {
    use crate::report::{PdfReportRenderer, RenderError, ReportContent, ReportRenderer, ReportService};
    use crate::router::create_router;
    use crate::schemas::AppState;
    use crate::store::ScenarioStore;
    use axum::Router;
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};
    use std::io::Write;
    use std::path::Path;
    use std::sync::Arc;
    use std::time::Duration;
    use tempfile::TempDir;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Renderer that writes part of a document and then fails.
    #[derive(Debug)]
    pub struct FailingRenderer;

    impl ReportRenderer for FailingRenderer {
        fn render(&self, _: &ReportContent, out: &mut dyn Write) -> Result<(), RenderError> {
            out.write_all(b"%PDF-1.3\n")?;
            Err(RenderError::Pdf("font table exhausted".to_string()))
        }
    }

    /// An app wired to a fresh database and its own report scratch directory.
    ///
    /// Keep the context alive for the duration of the test; dropping it
    /// removes the scratch directory.
    pub struct TestContext {
        pub app: Router,
        pub scratch: TempDir,
    }

    impl TestContext {
        /// Number of files left behind in the scratch directory
        pub fn scratch_files(&self) -> usize {
            count_files(self.scratch.path())
        }
    }

    fn count_files(dir: &Path) -> usize {
        std::fs::read_dir(dir)
            .expect("Failed to read scratch directory")
            .count()
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG, defaulting to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create an app whose reports go through `renderer`
    pub async fn setup_test_context_with(renderer: Arc<dyn ReportRenderer>) -> TestContext {
        let _ = init_test_tracing();

        let scratch = tempfile::tempdir().expect("Failed to create scratch directory");
        let state = AppState {
            store: ScenarioStore::new(setup_test_db().await),
            reports: ReportService::new(renderer, scratch.path()),
            request_timeout: Duration::from_secs(30),
        };

        TestContext {
            app: create_router(state),
            scratch,
        }
    }

    /// Create an app with the PDF renderer
    pub async fn setup_test_context() -> TestContext {
        setup_test_context_with(Arc::new(PdfReportRenderer)).await
    }
}
