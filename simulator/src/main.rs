use anyhow::Context;
use clap::Parser;
use game::script::run_demo_script;
use game::state::TheaterHandle;
use gui_bridge::bridge::GuiBridge;
use gui_bridge::model::ScenePayload;
use scenario::config::ScenarioConfig;
use scenario::demo::build_demo_scenario;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;
use theatercore::layers::LayerRegistry;
use theatercore::surface::SceneSurface;
use theatercore::sync::SyncEngine;
use tokio::runtime::Builder as TokioBuilder;
use tokio::signal;

mod game;
mod gui_bridge;
mod scenario;

#[derive(Parser)]
#[command(author, version, about = "Rust-facing theater map host shell")]
struct Args {
    /// Run the scripted demonstration once and emit a scene summary
    #[arg(long, default_value_t = false)]
    offline: bool,
    /// Load a theater scenario from YAML
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Seed for the built-in demonstration scenario
    #[arg(long, default_value_t = 7)]
    seed: u64,
    /// Keep the GUI bridge alive for the map visualizer
    #[arg(long, default_value_t = false)]
    serve: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = if let Some(path) = args.scenario {
        ScenarioConfig::load(path)?
    } else {
        build_demo_scenario(args.seed)
    };
    let scenario_name = scenario.name.clone();

    let (theater, mut events) = TheaterHandle::new(&scenario);
    let bridge = GuiBridge::new(theater.clone(), LayerRegistry::new().legend());
    let mut engine = SyncEngine::new(Arc::new(theater.clone()), SceneSurface::new());

    engine.connect().context("performing the initial draw")?;
    bridge.publish(&ScenePayload::compose(
        scenario_name.clone(),
        engine.surface().scene(),
        engine.metrics().snapshot(),
        &theater,
    ))?;

    if args.offline {
        let steps = run_demo_script(&theater);
        let handled = engine
            .drain(&mut events)
            .context("handling scripted notifications")?;

        let (passes, primitives, errors) = engine.metrics().snapshot();
        println!(
            "Offline run -> script steps {}, events handled {}, passes {}, primitives {}",
            steps, handled, passes, primitives
        );

        bridge.publish(&ScenePayload::compose(
            scenario_name.clone(),
            engine.surface().scene(),
            engine.metrics().snapshot(),
            &theater,
        ))?;
        bridge.publish_status("Offline scripted scene ready.");

        let report = format!(
            "scenario={:?} steps={} handled={} passes={} primitives={} errors={}\n",
            scenario_name.clone().unwrap_or_default(),
            steps,
            handled,
            passes,
            primitives,
            errors
        );
        let report_path = PathBuf::from("tools/data/offline_scene.log");
        if let Some(parent) = report_path.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(report_path)?;
        file.write_all(report.as_bytes())?;
    }

    if args.serve {
        bridge.publish_status("HTTP bridge running (Ctrl+C to stop)...");
        let runtime = TokioBuilder::new_current_thread()
            .enable_all()
            .build()
            .context("creating runtime for the notification loop")?;
        runtime.block_on(async {
            tokio::select! {
                result = engine.run(&mut events, |surface, metrics| {
                    let payload = ScenePayload::compose(
                        scenario_name.clone(),
                        surface.scene(),
                        metrics,
                        &theater,
                    );
                    if let Err(err) = bridge.publish(&payload) {
                        eprintln!("publish error: {}", err);
                    }
                }) => {
                    result.context("notification loop ended")?;
                }
                _ = signal::ctrl_c() => {}
            }
            Ok::<(), anyhow::Error>(())
        })?;
    }

    Ok(())
}
