use anyhow::Result;
use std::env;
use std::io;
use std::sync::Arc;
use tripdeck::cli::{self, Command};
use tripdeck::config::Config;
use tripdeck::context::{SharedContext, StandardContext};
use tripdeck::logging;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let parsed = match cli::parse_args(&args) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };

    if parsed.command == Command::Help {
        return cli::print_help("tripdeck", &mut io::stdout());
    }

    let ctx: SharedContext = Arc::new(StandardContext::new(parsed.root));

    let cfg = match Config::load_or_default(ctx.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            // Syntax or permission problem: report it instead of silently using defaults.
            let path = Config::get_path_string(ctx.as_ref()).unwrap_or_default();
            eprintln!("Error loading configuration {}:\n{}", path, e);
            std::process::exit(1);
        }
    };
    let level = logging::parse_level(&cfg.log_level);

    if parsed.command == Command::Tui {
        if let Err(e) = logging::init_file(ctx.as_ref(), level) {
            eprintln!("Warning: file logging disabled: {}", e);
        }
        return tripdeck::tui::run(ctx, cfg);
    }

    if let Err(e) = logging::init_term(level) {
        eprintln!("Warning: logging disabled: {}", e);
    }
    cli::run_command(&parsed.command, ctx, &cfg, &mut io::stdout())
}
