use basket_harness::config::HarnessConfig;
use basket_harness::harness::{bootstrap, check_monotonic, CycleRunner};

fn parse_u64_env(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let rounds = parse_u64_env("CYCLE_REPORT_ROUNDS", 3);

    let deployment = match bootstrap(HarnessConfig::from_env()) {
        Ok(deployment) => deployment,
        Err(err) => {
            eprintln!("[CYCLE-REPORT] bootstrap failed: {err}");
            std::process::exit(2);
        }
    };
    let mut runner = CycleRunner::new(deployment)?;

    for round in 1..=rounds {
        match runner.run_cycle() {
            Ok((before, after)) => {
                println!(
                    "[CYCLE-REPORT] round={round} bear {}->{} bull {}->{} treasury {}->{}",
                    before.bear_value,
                    after.bear_value,
                    before.bull_value,
                    after.bull_value,
                    before.treasury_balance,
                    after.treasury_balance,
                );
            }
            Err(err) => {
                eprintln!("[CYCLE-REPORT] round {round} failed: {err}");
                std::process::exit(1);
            }
        }
    }

    println!("{}", serde_json::to_string_pretty(runner.snapshots())?);

    if let Err(err) = check_monotonic(runner.snapshots()) {
        eprintln!("[CYCLE-REPORT] invariant violated: {err}");
        std::process::exit(1);
    }
    println!(
        "[CYCLE-REPORT] pass: {} cycles, {} snapshots, all metrics strictly increasing",
        rounds,
        runner.snapshots().len()
    );
    Ok(())
}
