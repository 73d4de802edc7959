use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use anyhow::Result;
use chrono::Utc;
use clap::{App, load_yaml};
use env_logger::Builder;
use jemallocator::Jemalloc;
use log::{debug, info, warn};
use log::LevelFilter::*;
use signal_hook::consts::{SIGINT, SIGTERM};
use signal_hook::flag::{register, register_conditional_shutdown};
use sentinel::{Cache, Config, RawConnection, Resolve};
use sentinel::args::{millis, secs};
use sentinel::lsof::Samples;
use sentinel::resolve::{Never, System};

#[global_allocator]
static ALLOC: Jemalloc = Jemalloc;

fn main() -> Result<()> {
    let yaml = load_yaml!("args.yml");
    let ver  = env!("CARGO_PKG_VERSION");
    let args = App::from_yaml(&yaml).version(ver).get_matches();

    let default = Config::default();
    let window  = secs(&args, "seen-window")?.unwrap_or(default.seen_window);
    let ttl     = secs(&args, "dns-ttl")?.unwrap_or(default.dns_ttl);
    let timeout = millis(&args, "dns-timeout")?.unwrap_or(default.dns_timeout);

    let (module, level) = match args.occurrences_of("verbose") {
        0 => (Some(module_path!()), Info),
        1 => (Some(module_path!()), Debug),
        2 => (Some(module_path!()), Trace),
        _ => (None,                 Trace),
    };
    Builder::from_default_env().filter(module, level).init();

    info!("initializing sentinel {}", ver);

    let config = Config::new(window, ttl, timeout)?;

    let resolver: Box<dyn Resolve> = match args.is_present("no-resolve") {
        true  => Box::new(Never),
        false => Box::new(System::new()?),
    };

    let mut cache = Cache::new(config, resolver);
    debug!("{:?}", cache.config());

    let shutdown = Arc::new(AtomicBool::new(false));
    for signal in &[SIGTERM, SIGINT] {
        register_conditional_shutdown(*signal, 1, shutdown.clone())?;
        register(*signal, shutdown.clone())?;
    }

    let stdin   = io::stdin();
    let stdout  = io::stdout();
    let mut out = stdout.lock();

    let lsof = args.is_present("lsof");
    let mut samples = Samples::default();

    for line in stdin.lock().lines() {
        if shutdown.load(Ordering::Acquire) {
            break;
        }

        let line = line?;

        if lsof {
            if let Some(raw) = samples.push(&line) {
                emit(&mut cache, &mut out, &raw)?;
            }
            continue;
        }

        if line.trim().is_empty() {
            continue;
        }

        match serde_json::from_str::<Vec<RawConnection>>(&line) {
            Ok(raw) => emit(&mut cache, &mut out, &raw)?,
            Err(e)  => warn!("invalid sample: {}", e),
        }
    }

    if let Some(raw) = samples.finish() {
        emit(&mut cache, &mut out, &raw)?;
    }

    info!("finished, {:?}", cache.stats());

    Ok(())
}

fn emit<R: Resolve, W: Write>(cache: &mut Cache<R>, out: &mut W, raw: &[RawConnection]) -> Result<()> {
    let events = cache.observe(raw, Utc::now());
    serde_json::to_writer(&mut *out, &events)?;
    writeln!(out)?;
    out.flush()?;
    Ok(())
}
