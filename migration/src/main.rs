//! 目录库迁移命令行，如 `cargo run -p migration -- up`
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(migration::Migrator).await;
}
