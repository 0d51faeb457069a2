use anyhow::Result;
use brandkit::commands::{
    build_script_command, export_command, install_command, list_brands_command, runtime_command,
    session_command,
};
use brandkit::logging::init_logging;
use clap::{ArgAction, Parser, Subcommand};

/// White-label brand configuration CLI.
///
/// This CLI is a thin wrapper around `brandkit-core` (exposed in code as
/// `brandkit_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "brandkit",
    version,
    about = "Define, export, and install white-label app brands",
    long_about = None
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, default_value_t = false)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start an interactive brand editing session.
    ///
    /// Commands are read one per line from stdin; type `help` for the list.
    Session {
        /// Brands document (.json/.yaml) to start from.
        #[arg(long)]
        load: Option<String>,

        /// Directory export commands write into. Defaults to the current directory.
        #[arg(long, default_value = ".")]
        out: String,
    },

    /// Install one brand from an exported configuration into an app checkout.
    ///
    /// This will:
    /// - Write `.env` with the brand's values.
    /// - Write `android/app/src/main/res/values/strings.xml` if that directory exists.
    /// - Set `name` in `package.json` if that file exists.
    Install {
        /// Exported configuration document (single brand mapping or list).
        config: Option<String>,

        /// Id of the brand to install.
        brand_id: Option<String>,

        /// App root directory. Defaults to the current working directory.
        #[arg(long, default_value = ".")]
        root: String,
    },

    /// Export build configurations from a saved brands document.
    Export {
        /// Saved brands document (.json/.yaml).
        #[arg(long)]
        brands: String,

        /// Export only this brand (as `<packageName>-config.json`).
        #[arg(long)]
        brand: Option<String>,

        /// Output directory. Defaults to the current directory.
        #[arg(long, default_value = ".")]
        out: String,
    },

    /// Write the generic `build-apk.sh` script for a saved brands document.
    BuildScript {
        /// Saved brands document (.json/.yaml).
        #[arg(long)]
        brands: String,

        /// Output directory. Defaults to the current directory.
        #[arg(long, default_value = ".")]
        out: String,
    },

    /// List brands in a saved brands document.
    ListBrands {
        /// Saved brands document (.json/.yaml).
        #[arg(long)]
        brands: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the runtime brand an app would resolve from an environment file.
    Runtime {
        /// Environment file written by `install`.
        #[arg(long, default_value = ".env")]
        env: String,

        /// File holding a stored theme preference (`dark` or `light`).
        #[arg(long)]
        theme_pref: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Command::Session { load, out } => session_command(load.as_deref(), &out)?,
        Command::Install { config, brand_id, root } => {
            install_command(config.as_deref(), brand_id.as_deref(), &root)?
        }
        Command::Export { brands, brand, out } => export_command(&brands, brand.as_deref(), &out)?,
        Command::BuildScript { brands, out } => build_script_command(&brands, &out)?,
        Command::ListBrands { brands, json } => list_brands_command(&brands, json)?,
        Command::Runtime { env, theme_pref, json } => {
            runtime_command(&env, theme_pref.as_deref(), json)?
        }
    }

    Ok(())
}
