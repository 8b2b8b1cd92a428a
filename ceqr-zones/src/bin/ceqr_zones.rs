use ceqr_zones::app::CeqrZonesApp;
use clap::Parser;

fn main() {
    env_logger::init();
    let args = CeqrZonesApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("ceqr-zones failed: {e}");
        std::process::exit(1);
    }
}
