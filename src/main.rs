mod cli;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    mailgun_api::logger::init_logger(cli.global.verbose);

    cli::run(cli).await
}
