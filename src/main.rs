use filmorate_service::api;
use filmorate_service::common::init;
use filmorate_service::settings::AppSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = AppSettings::get();
    init::initialize_logging(settings);
    api::serve(settings).await
}
