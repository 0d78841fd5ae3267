use std::process::ExitCode;

use bankdocs::app::PortalContext;
use bankdocs::config::PortalConfig;
use bankdocs::session::FixtureUserSource;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match PortalConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            return ExitCode::FAILURE;
        }
    };

    let ctx = PortalContext::new(config);
    ctx.session()
        .subscribe(|next, prev| {
            tracing::info!(
                user = %next.user.login,
                authenticated = next.is_authenticated,
                was_authenticated = prev.is_authenticated,
                "session changed"
            );
        })
        .detach();
    let menu = ctx.nav_menu();

    match ctx.config().user_fixture.clone() {
        Some(path) => {
            if ctx.load_dashboard(&FixtureUserSource::new(path)).await.is_err() {
                tracing::warn!("continuing without a signed-in user");
            }
        }
        None => tracing::info!("BANKDOCS_USER_FIXTURE not set; staying anonymous"),
    }

    let active = menu.active_href();
    for item in menu.visible() {
        let marker = if Some(item.href) == active { "*" } else { " " };
        println!("{marker} {:<10} {}", item.title, item.href);
        for child in &item.children {
            println!("    - {:<10} {}", child.title, child.href);
        }
    }

    if ctx.session().is_authenticated() {
        let form = ctx.new_document_form();
        form.edit(|draft| {
            draft.title = "Annual report draft".to_owned();
            draft.document_type = Some(bankdocs::documents::DocumentType::AnnualReport);
            draft.client = Some("internal".to_owned());
            draft.assigned_to = Some("emma-davis".to_owned());
        });
        match form.submit().await {
            Ok(receipt) => println!("submitted {} -> {}", receipt.id, receipt.redirect),
            Err(e) => tracing::warn!(error = %e, "document submission refused"),
        }
        ctx.logout();
    }

    ExitCode::SUCCESS
}
