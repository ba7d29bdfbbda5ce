mod generate;
mod inspect;

use generate::run_generate;
use inspect::run_inspect;

use anyhow::Result;

use crate::cli::Command;
use crate::display::Context;

pub fn dispatch(command: Command, ctx: Context) -> Result<()> {
    match command {
        Command::Generate(args) => run_generate(args, ctx),
        Command::Inspect(args) => run_inspect(args, ctx),
    }
}
