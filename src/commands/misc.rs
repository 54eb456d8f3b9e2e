use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn generate_completions(shell: Shell) {
    let mut cmd = crate::Cli::command();
    generate(shell, &mut cmd, "gitdash", &mut io::stdout());
}
