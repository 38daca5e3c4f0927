use anyhow::Result;
use clap::Parser;

use crate::config::Config;
use crate::error::InstallError;
use crate::install::{self, Mode};
use crate::paths::{InstallPaths, StaticPath};

#[derive(Parser, Debug)]
#[command(
    name = "mzk-plugin-install",
    version,
    about = "Install MzkVisualizer assets into a ManaZeak static folder"
)]
pub struct Cli {
    /// The destination folder to install plugin assets in (must end with a separator)
    pub staticpath: String,

    /// Install plugin in given path
    #[arg(short, long)]
    pub install: bool,

    /// Uninstall plugin in given path
    #[arg(short, long)]
    pub uninstall: bool,

    /// Update plugin in given path from the bundled assets
    #[arg(short, long)]
    pub pull: bool,

    /// Override plugin settings from a TOML file
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,

    /// Print the filesystem actions without changing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// How a failed run is reported before exiting.
#[derive(Debug, PartialEq, Eq)]
pub enum Failure {
    /// Part of the installer transcript, printed after the banner.
    Stdout(String),
    Stderr(String),
}

impl Failure {
    pub fn from_error(e: &anyhow::Error) -> Self {
        match e.downcast_ref::<InstallError>() {
            Some(invalid @ InstallError::InvalidPath { .. }) => Failure::Stdout(invalid.to_string()),
            _ => Failure::Stderr(format!("{:#}", e)),
        }
    }
}

impl Cli {
    pub fn parse() -> Self {
        <Cli as Parser>::parse()
    }

    pub fn mode(&self) -> Option<Mode> {
        Mode::from_flags(self.install, self.uninstall, self.pull)
    }

    pub fn run(&self) -> Result<()> {
        let cfg = Config::load_or_default(self.config.as_deref())?;
        let plugin = cfg.plugin.name.as_str();
        println!("{}", cfg.banner());

        let static_path = StaticPath::parse(&self.staticpath)?;

        let Some(mode) = self.mode() else {
            println!("Missing arguments. See --help");
            return Ok(());
        };

        let paths = InstallPaths::resolve(&cfg, &static_path);
        if self.verbose {
            eprintln!("[mzk] Assets source : {}", paths.source_dir.display());
            eprintln!("[mzk] Plugins dir   : {}", paths.plugins_dir.display());
            eprintln!("[mzk] Assets target : {}", paths.target_dir.display());
        }

        match mode {
            Mode::Install => println!("Install {} plugin...", plugin),
            Mode::Uninstall => println!("Uninstall {} plugin...", plugin),
            Mode::Pull => println!("Update {} plugin...", plugin),
        }

        install::execute(mode, &paths, plugin, self.dry_run)?;
        if self.dry_run {
            return Ok(());
        }

        match mode {
            Mode::Install => println!("Installation complete in '{}'", paths.target_display),
            Mode::Uninstall => println!("Uninstallation complete in '{}'", static_path.as_str()),
            Mode::Pull => println!("Update complete in '{}'", static_path.as_str()),
        }
        Ok(())
    }
}
