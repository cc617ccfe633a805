mod app;
mod cli;
mod completion;
mod config;
mod consts;
mod error;
mod output;
mod session;
mod syllabus;
mod utils;

use clap::Parser;

use cli::Cli;
use config::Config;
use utils::set_debug;

fn main() {
    let cli = Cli::parse();
    set_debug(cli.debug);

    let config = Config::load(cli.config.as_deref());
    let cli = cli.with_config(&config);
    set_debug(cli.debug);

    let code = app::run(cli, &config);
    std::process::exit(code);
}
