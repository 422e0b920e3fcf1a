use android_icons::config::{self, IconConfig};
use android_icons::imaging::{ImageBackend, RustBackend};
use android_icons::{output, resize};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "android-icons")]
#[command(about = "Resize one image into Android launcher icons")]
#[command(long_about = "\
Resize one image into Android launcher icons

Every density bucket gets two files with the same pixels:

  android/app/src/main/res/
  ├── mipmap-mdpi/        ic_launcher.png, ic_launcher_round.png   48x48
  ├── mipmap-hdpi/        ...                                       72x72
  ├── mipmap-xhdpi/       ...                                       96x96
  ├── mipmap-xxhdpi/      ...                                      144x144
  └── mipmap-xxxhdpi/     ...                                      192x192

Settings come from icons.toml (optional) and the flags below.
Run 'android-icons gen-config' to generate a documented icons.toml.")]
#[command(version)]
struct Cli {
    /// Config file [default: icons.toml, if present]
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Source image (overrides `source` in the config)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Android resource directory (overrides `res_dir` in the config)
    #[arg(long, global = true)]
    res_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write every launcher icon
    Resize,
    /// Validate config and source without writing anything
    Check,
    /// Print a stock icons.toml with all options documented
    GenConfig,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_cli(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Command::Resize => {
            let config = load_config(&cli)?;
            let (tx, rx) = std::sync::mpsc::channel();
            let printer = std::thread::spawn(move || {
                for event in rx {
                    for line in output::format_resize_event(&event) {
                        println!("{}", line);
                    }
                }
            });
            let result = resize::run(&config, Some(tx));
            // The sender is dropped by now, so the printer drains and exits
            printer.join().ok();
            result?;
        }
        Command::Check => {
            let config = load_config(&cli)?;
            let backend = RustBackend::new();
            let source = resize::open_source(&backend, &config)?;
            output::print_check_output(
                &config.source,
                backend.identify(&source),
                &config.res_dir,
                &resize::plan_icons(&config),
            );
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Load the config file and apply CLI overrides.
///
/// An explicit `--config` must exist; the implicit `icons.toml` is optional.
fn load_config(cli: &Cli) -> Result<IconConfig, config::ConfigError> {
    let loaded = match &cli.config {
        Some(path) => config::load_required_config(path)?,
        None => config::load_config(std::path::Path::new(config::DEFAULT_CONFIG_FILE))?,
    };
    Ok(loaded.with_overrides(cli.source.clone(), cli.res_dir.clone()))
}
