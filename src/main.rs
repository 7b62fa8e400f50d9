use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use vmsim::common::{ReplacementPolicy, SimConfig, PAGES};
use vmsim::mmu::Translator;
use vmsim::storage::BackingStore;

#[derive(Parser)]
#[command(name = "vmsim")]
#[command(about = "Translate logical addresses through a TLB and page table")]
#[command(version)]
struct Cli {
    /// Backing store image (PAGES * PAGE_SIZE bytes)
    backing_store: PathBuf,

    /// File with one logical address per line
    input: PathBuf,

    /// Page replacement policy: 0 = FIFO, 1 = LRU
    #[arg(default_value = "0", value_parser = parse_policy)]
    policy: ReplacementPolicy,

    /// Number of physical frames
    #[arg(long, default_value_t = PAGES)]
    frames: usize,
}

fn parse_policy(s: &str) -> Result<ReplacementPolicy, String> {
    s.parse().map_err(|e: vmsim::VmsimError| e.to_string())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli.backing_store, &cli.input, cli.policy, cli.frames) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(backing: &Path, input: &Path, policy: ReplacementPolicy, frames: usize) -> vmsim::Result<()> {
    let config = SimConfig::new(policy).with_frames(frames);
    config.validate()?;

    let store = BackingStore::open(backing)?;
    let input = BufReader::new(File::open(input)?);

    let mut translator = Translator::new(config, store)?;
    let stdout = io::stdout();
    let stats = translator.run(input, stdout.lock())?;

    println!("{stats}");
    Ok(())
}
