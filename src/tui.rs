use anyhow::Result;

use crate::config::Config;

#[derive(Clone, Debug)]
pub struct TuiRunOptions {
    pub config: Config,
}

pub fn run_with_options(opts: TuiRunOptions) -> Result<()> {
    crate::tui_shell::run(opts)
}
