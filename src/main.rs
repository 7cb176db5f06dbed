use clap::Parser;
use console::Term;
use miette::Result;

use invt::cli::{Cli, Session};
use invt::core::Config;

fn main() -> Result<()> {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    // Without this, piping `--help` to `head`, `grep -q`, etc. causes a panic on
    // broken pipe. This is standard practice for CLI tools that output to stdout.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    // Install miette's fancy error handler for beautiful diagnostics
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref());

    if cli.no_color || config.color == Some(false) {
        console::set_colors_enabled(false);
    }

    // The main screen is a prompt loop; it cannot run against a pipe.
    if !Term::stdout().is_term() {
        return Err(miette::miette!(
            help = "run invt from a terminal, or use --help for usage",
            "invt requires an interactive terminal"
        ));
    }

    let mut session = Session::new(&cli, config)?;
    session.run()
}
