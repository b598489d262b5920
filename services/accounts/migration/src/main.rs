use sea_orm_migration::prelude::*;

use portage_accounts_migration::Migrator;

#[tokio::main]
async fn main() {
    portage_core::tracing::init_tracing();
    cli::run_cli(Migrator).await;
}
