use std::io;

use anyhow::Context;
use lotto::config::Config;
use lotto::events::EventLog;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    let mut picker = config.picker();
    let events = EventLog::new(config.emit_events);

    let stdin = io::stdin();
    let stdout = io::stdout();
    lotto::run(stdin.lock(), stdout.lock(), &mut picker, &events).context("lotto round failed")?;

    Ok(())
}
