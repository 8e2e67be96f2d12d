use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hyperion_settings::config::{Config, ConfigStore, ProjectSettings, SettingsStore};
use hyperion_settings::intervals::{Field, Interval};
use hyperion_settings::logging::init_tracing;
use hyperion_settings::panel::SettingsPanel;
use hyperion_settings::ui::settings::SettingsIntent;

#[derive(Debug, Parser)]
#[command(name = "hyperion-settings", version, about = "Edit Hyperion metric interval settings")]
struct Cli {
    /// Settings file (default: platform config dir / hyperion/settings.toml)
    #[arg(long, short = 'c', global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the stored settings
    Show,
    /// Append an interval given in seconds
    Add {
        #[arg(allow_negative_numbers = true)]
        seconds: i64,
    },
    /// Remove intervals by their position in `show`
    Remove {
        #[arg(required = true)]
        indices: Vec<usize>,
    },
    /// Set the metrics API address
    Address { value: String },
    /// Set the project name
    Project { value: String },
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let path = cli.config.unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path).context("Failed to load settings")?;
    let mut panel = SettingsPanel::new(store).context("Failed to read stored intervals")?;

    let intent = match cli.command {
        Command::Show => {
            print!("{}", render(panel.store().state()));
            return Ok(());
        }
        Command::Add { seconds } => {
            let Ok(seconds) = u64::try_from(seconds) else {
                anyhow::bail!("Interval must not be negative (got {})", seconds);
            };
            let interval = Interval::parse(seconds);
            let row = panel.state().intervals.len();
            panel.dispatch(SettingsIntent::AddRow);
            return edit_row(panel, row, interval);
        }
        Command::Remove { indices } => {
            let rows = panel.state().intervals.len();
            if let Some(missing) = indices.iter().find(|i| **i >= rows) {
                anyhow::bail!("No interval at index {} ({} configured)", missing, rows);
            }
            SettingsIntent::RemoveRows { indices }
        }
        Command::Address { value } => SettingsIntent::SetAddress(value),
        Command::Project { value } => SettingsIntent::SetProject(value),
    };

    panel.dispatch(intent);
    save(panel)
}

/// Fill a freshly added default row with `interval`, then save.
fn edit_row(mut panel: SettingsPanel<ConfigStore>, row: usize, interval: Interval) -> Result<()> {
    for field in Field::ALL {
        let Some(value) = interval.field(field) else {
            anyhow::bail!("Interval {} is too large to edit", interval);
        };
        panel.dispatch(SettingsIntent::EditCell { row, field, value });
    }
    save(panel)
}

fn save(mut panel: SettingsPanel<ConfigStore>) -> Result<()> {
    if !panel.is_modified() {
        println!("No changes");
        return Ok(());
    }

    panel.apply().context("Failed to save settings")?;
    print!("{}", render(panel.store().state()));
    Ok(())
}

fn render(settings: &ProjectSettings) -> String {
    let mut out = format!(
        "address: {}\nproject: {}\nintervals:\n",
        settings.address, settings.project
    );
    for (index, seconds) in settings.intervals.iter().enumerate() {
        let line = match u64::try_from(*seconds) {
            Ok(s) => format!("  {}: {} ({}s)\n", index, Interval::parse(s), s),
            Err(_) => format!("  {}: invalid ({}s)\n", index, seconds),
        };
        out.push_str(&line);
    }
    out
}
