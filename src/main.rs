//! Host binary: runs the gait engine with a logging actuator and reads
//! commands, one per line, from standard input.
//!
//! Usage: `hexapod_gait [settings.toml]`

use std::io::BufRead;
use std::path::PathBuf;

use anyhow::Context;
use embassy_executor::Spawner;
use log::{error, info, warn};

use hexapod_gait::kinematics::gait_engine::GaitEngine;
use hexapod_gait::robot::{commands::Command, servo::LogActuator, settings::Settings};
use hexapod_gait::tasks::motion_task::{motion_loop, Scheduler, COMMANDS};

const DEFAULT_SETTINGS_PATH: &str = "hexapod.toml";

fn read_commands() {
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                error!("[INPUT] stdin: {e}");
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        match Command::try_from(line.as_str()) {
            Ok(cmd) => {
                if COMMANDS.try_send(cmd).is_err() {
                    warn!("[INPUT] command queue full, dropped {line:?}");
                }
            }
            Err(e) => warn!("[INPUT] {line:?}: {e}"),
        }
    }
    info!("[INPUT] end of input");
}

#[embassy_executor::task]
async fn motion_task(settings: Settings, path: PathBuf) {
    let mut scheduler = Scheduler::new(GaitEngine::new(settings), LogActuator::default());
    let save = |settings: &Settings| {
        if let Err(e) = settings.save(&path) {
            warn!("[MOTION_TASK] could not save {}: {e}", path.display());
        }
    };

    match motion_loop(&mut scheduler, COMMANDS.receiver(), save).await {
        Ok(never) => match never {},
        Err(e) => {
            error!("[MOTION_TASK] stopped: {e}");
            std::process::exit(1);
        }
    }
}

fn setup() -> anyhow::Result<(Settings, PathBuf)> {
    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_PATH));
    let settings = Settings::load(&path)
        .with_context(|| format!("loading settings from {}", path.display()))?;

    std::thread::Builder::new()
        .name("stdin".into())
        .spawn(read_commands)
        .context("spawning the command reader")?;

    Ok((settings, path))
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let (settings, path) = match setup() {
        Ok(setup) => setup,
        Err(e) => {
            error!("[MAIN] {e:#}");
            std::process::exit(1);
        }
    };

    info!("[MAIN] starting hexapod gait engine");
    if let Err(e) = spawner.spawn(motion_task(settings, path)) {
        error!("[MAIN] spawning motion task: {e:?}");
        std::process::exit(1);
    }
}
