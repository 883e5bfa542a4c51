use std::env;
use std::path::PathBuf;

use census_core::{CompositionPolicy, GenerationRequest};
use census_generate::{BatchEngine, CancellationToken, DirectorySink, GenerateOptions};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    let mut out_dir = PathBuf::from("out");
    let mut policy = CompositionPolicy::EmployeeSpouseChild;
    let mut seed: Option<u64> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" => out_dir = args.next().map(PathBuf::from).ok_or("missing --out path")?,
            "--policy" => policy = args.next().ok_or("missing --policy value")?.parse()?,
            "--seed" => seed = Some(args.next().ok_or("missing --seed value")?.parse()?),
            _ => return Err(format!("unexpected argument '{arg}'").into()),
        }
    }

    let options = GenerateOptions {
        seed,
        ..GenerateOptions::default()
    };
    let request = GenerationRequest::new(2, 5, policy);
    let mut sink = DirectorySink::new(out_dir);

    let engine = BatchEngine::new(options);
    let report = engine.run(
        &request,
        chrono::Local::now().naive_local(),
        &mut sink,
        &CancellationToken::new(),
    )?;

    for file in &report.files {
        println!("file={}", file.location);
    }
    Ok(())
}
