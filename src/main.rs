use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use textgrab::pipeline::{run, ScanConfig};
use textgrab::recognize::{RecognitionMode, RecognizerBridge};

#[derive(Parser, Debug)]
#[command(name = "textgrab")]
#[command(version, about = "Detect text regions in an image and write them to a JSON sidecar", long_about = None)]
struct Cli {
    /// Input image file path
    input: PathBuf,

    /// Use the faster, lower-accuracy recognition mode
    #[arg(long)]
    fast: bool,

    /// Recognition engine script to invoke (default: bridge/recognize.py)
    #[arg(long)]
    engine: Option<PathBuf>,

    /// Disable progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn mode(&self) -> RecognitionMode {
        if self.fast {
            RecognitionMode::Fast
        } else {
            RecognitionMode::Accurate
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mode = cli.mode();

    // Existence of the input is deliberately left to the loader: it reports
    // open and decode failures the same way.
    let config = ScanConfig::new(cli.input, mode);

    if !cli.quiet {
        println!("[*] Input: {}", config.input.display());
        println!("[*] Output: {}", config.output_path().display());
        println!("[*] Mode: {}", mode.as_str());
    }

    let mut bridge = RecognizerBridge::new();
    if let Some(script) = cli.engine {
        bridge = bridge.with_script(script);
    }

    let report = run(&config, &bridge)?;

    if !cli.quiet {
        println!("[+] {} text region(s) detected", report.candidates);
        println!("[✓] Done! Results saved to: {}", report.output.display());
    }

    Ok(())
}
