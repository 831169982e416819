use clap::Parser;
use tubenet::TubenetCliArguments;
use tubenet_core::HttpFetcher;

fn main() {
    env_logger::init();
    let args = TubenetCliArguments::parse();
    match run(&args) {
        Ok(output) => {
            println!("{output}");
            log::info!("finished.");
        }
        Err(e) => {
            log::error!("failed running tubenet: {e}");
            std::process::exit(1);
        }
    }
}

fn run(args: &TubenetCliArguments) -> Result<String, String> {
    let config = args.load_config()?;
    let fetcher = HttpFetcher::new(&config).map_err(|e| e.to_string())?;
    let today = chrono::Local::now().date_naive();
    args.op.run(&fetcher, &config, today)
}
