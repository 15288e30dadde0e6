use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, error};

use trafficgen::args::TrafficArgs;
use trafficgen::config::{apply_config, load_config};
use trafficgen::error::AppResult;
use trafficgen::http::HttpExecutor;
use trafficgen::runner::{TrafficConfig, TrafficGenerator};
use trafficgen::shutdown::shutdown_channel;
use trafficgen::targets::{Target, resolve_targets};

use crate::shutdown_handlers::setup_signal_shutdown_handler;
use crate::summary::print_summary;

/// Everything a run needs, validated before the runtime starts.
struct RunPlan {
    config: TrafficConfig,
    targets: Vec<Target>,
}

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;
    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::logger::init_logging(args.verbose, args.log_file.as_deref())?;

    let plan = build_plan(&args).inspect_err(|err| error!("{}", err))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime
        .block_on(run_async(plan))
        .inspect_err(|err| error!("{}", err))
}

fn parse_args() -> AppResult<(TrafficArgs, ArgMatches)> {
    let matches = TrafficArgs::command().get_matches();
    let args = TrafficArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

fn build_plan(args: &TrafficArgs) -> AppResult<RunPlan> {
    let config = TrafficConfig::from_args(args)?;
    let targets = resolve_targets(&args.urls, args.urls_file.as_deref())?;
    debug!("Loaded {} targets", targets.len());
    Ok(RunPlan { config, targets })
}

async fn run_async(plan: RunPlan) -> AppResult<()> {
    let executor = Arc::new(HttpExecutor::new(plan.config.timeout)?);

    let (shutdown_tx, mut shutdown_rx) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    let generator = TrafficGenerator::new(executor, plan.targets, plan.config);
    let mut rng = StdRng::from_entropy();
    let stats = generator.run(&mut shutdown_rx, &mut rng).await;

    print_summary(&stats.summarize());

    drop(shutdown_tx.send(()));
    signal_handle.await?;
    Ok(())
}
