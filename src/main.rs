// --- Planejador Acadêmico - Archivo principal ---

use planejador::config::AppConfig;
use planejador::importer::import_file;
use planejador::store::JsonStore;
use planejador::{logging, run_server};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_format);

    let mut store = match JsonStore::open(&config.data_dir) {
        Ok(s) => s,
        Err(e) => {
            error!(error = %e, "failed to open data dir");
            return Err(std::io::Error::other(e.to_string()));
        }
    };

    // Importación opcional al arrancar (CSV o workbook)
    if let Some(path) = &config.import_file {
        match import_file(path) {
            Ok(report) => {
                for e in &report.errors {
                    warn!(file = %path.display(), "{}", e);
                }
                match store.bulk_create_disciplines(report.disciplines) {
                    Ok(count) => info!(file = %path.display(), count, "startup import done"),
                    Err(e) => error!(error = %e, "failed to save imported disciplines"),
                }
            }
            Err(e) => error!(file = %path.display(), error = %e, "startup import failed"),
        }
    }

    run_server(config, store).await
}
