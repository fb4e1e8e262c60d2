use anyhow::Context;
use clap::Parser;

use entrograph::cli::Args;
use entrograph::render::{chart, raster};
use entrograph::EntropyProfile;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Args::parse();

    if let Err(e) = args.validate() {
        eprintln!("Invalid arguments: {}", e);
        std::process::exit(2);
    }

    let profile = EntropyProfile::from_path(&args.filename, args.chunk_size)
        .with_context(|| format!("failed to profile {}", args.filename.display()))?;

    if profile.is_empty() {
        println!("{}: empty file, nothing to render", args.filename.display());
        return Ok(());
    }

    println!(
        "{}: {} bytes, {} chunks of {} bytes",
        args.filename.display(),
        profile.raw_bytes().len(),
        profile.len(),
        profile.chunk_size()
    );

    if args.image {
        // validate() guarantees an output path in image mode.
        let output = args
            .output
            .as_ref()
            .context("image mode requires an output path")?;
        raster::save_raster(profile.raw_bytes(), profile.chunk_size(), output)
            .with_context(|| format!("failed to write {}", output.display()))?;
        println!("Wrote raster image to {}", output.display());
    } else {
        match &args.output {
            Some(output) => {
                chart::save_chart(profile.values(), output)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                println!("Wrote entropy chart to {}", output.display());
            }
            None => chart::print_chart(profile.values(), profile.chunk_size()),
        }
    }

    Ok(())
}
