use std::fs::File;
use std::io::BufReader;

use clap::Parser;

use cachesweep::config::SweepAxes;
use cachesweep::invoker::SimulatorInvoker;
use cachesweep::sweep::Sweep;

#[derive(Parser, Debug)]
#[command(about = String::from("Configuration sweep harness for the two-level cache simulator"))]
struct Args {
    /// Trace file fed unchanged to every simulator invocation
    #[arg(default_value = "traces/trace.txt")]
    trace: String,

    /// Path to the simulator executable
    #[arg(short, long, default_value = "./cache_sim")]
    simulator: String,

    /// JSON file overriding any subset of the sweep axes
    #[arg(short, long)]
    config: Option<String>,
}

fn main() -> Result<(), String> {
    let args = Args::parse();
    let axes = match &args.config {
        Some(path) => {
            let config_file = File::open(path)
                .map_err(|e| format!("Couldn't open the sweep config file at path {path}: {e}"))?;
            serde_json::from_reader(BufReader::new(config_file))
                .map_err(|e| format!("Couldn't parse the sweep config file: {e}"))?
        }
        None => SweepAxes::default(),
    };
    let mut invoker = SimulatorInvoker::new(&args.simulator, args.trace.as_str());
    let sweep = Sweep::new(axes, args.trace.as_str());
    let best = sweep.run(&mut invoker).map_err(|e| e.to_string())?;
    println!();
    println!("=== BEST CONFIG ===");
    println!("miss_rate={}", best.miss_rate);
    println!("cfg={}", best.point.render_flags(&args.trace));
    println!("{}", best.report);
    Ok(())
}
