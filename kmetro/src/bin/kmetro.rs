use clap::Parser;
use kmetro::app::{KmetroApp, KmetroConfig};

fn main() {
    env_logger::init();
    let args = KmetroApp::parse();
    let result = KmetroConfig::load(args.config.as_deref())
        .and_then(|config| args.op.run(&config, &mut std::io::stdout().lock()));
    match result {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running kmetro: {e}");
            std::process::exit(1);
        }
    }
}
