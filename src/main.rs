use anyhow::{Context, Result};
use clap::Parser;
use skim_submit::cli::Cli;
use skim_submit::{logger, App, AppError, Config};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("错误: {:#}", e);
            let code = e.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // 加载配置，此时配置里的日志开关还不可用，只看命令行
    let config = logger::scoped(cli.verbose, || Config::resolve(cli.config.as_deref()))
        .context("加载配置失败")?;

    // 初始化日志
    logger::init(cli.verbose || config.verbose_logging);

    App::new(config, cli.json).run(cli.command)?;

    Ok(())
}
