use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use brandkit_core::document::{save_brands_document, BrandsDocument};
use brandkit_core::export::{export_all, export_build_script, export_one};
use brandkit_core::model::asset::{data_url_from_file, AssetSummary};
use brandkit_core::model::{AssetSlot, BrandConfig, BrandId, ColorKey, FeatureKey};
use brandkit_core::store::{BrandStore, FieldUpdate};
use chrono::Utc;
use tracing::debug;

use crate::canonicalize_or_current;
use crate::commands::{brand_summary_line, load_store, write_artifact};

const SESSION_HELP: &str = "\
Commands:
  add                        create a brand and select it
  list                       list brands (* marks the selection)
  select <id>                select a brand
  show                       show the selected brand
  set <path> <value>         set a field, e.g. `set colors.primary #ff0000`
  asset <slot> <file|none>   embed an image into icon, splash or logo
  delete <id>                delete a brand
  export                     write <packageName>-config.json for the selection
  export-all                 write white-label-configs.json
  build-script               write build-apk.sh
  save <file>                save brands to a .json/.yaml document
  load <file>                replace brands with a saved document
  help                       show this help
  quit                       leave the session";

/// Whether the session should keep reading commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive editing session over a brand store.
#[derive(Debug)]
pub struct Session {
    store: BrandStore,
    out_dir: PathBuf,
}

impl Session {
    pub fn new(store: BrandStore, out_dir: impl Into<PathBuf>) -> Self {
        Self { store, out_dir: out_dir.into() }
    }

    pub fn store(&self) -> &BrandStore {
        &self.store
    }

    /// Execute one command line, writing user-facing output to `out`.
    pub fn execute(&mut self, line: &str, out: &mut impl Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        let (command, args) = match line.split_once(char::is_whitespace) {
            Some((command, args)) => (command, args.trim()),
            None => (line, ""),
        };
        debug!(command, args, "Session command");

        match command {
            "add" => {
                let id = self.store.add_brand();
                let name = self.store.get(&id).map(|b| b.display_name.clone()).unwrap_or_default();
                writeln!(out, "Added brand {id} ({name})")?;
            }
            "list" => {
                if self.store.is_empty() {
                    writeln!(out, "(none)")?;
                }
                for brand in self.store.brands() {
                    let selected = self.store.selected_id() == Some(&brand.id);
                    writeln!(out, "{}", brand_summary_line(brand, selected))?;
                }
            }
            "select" => {
                let id = BrandId::from(required(args, "select <id>")?);
                if self.store.select_brand(&id) {
                    writeln!(out, "Selected {id}")?;
                } else {
                    writeln!(out, "No brand with id {id}; selection unchanged")?;
                }
            }
            "show" => match self.store.selected() {
                Some(brand) => write_brand_details(brand, out)?,
                None => writeln!(out, "No brand selected")?,
            },
            "set" => {
                let args = required(args, "set <path> <value>")?;
                let (path, value) = match args.split_once(char::is_whitespace) {
                    Some((path, value)) => (path, value.trim()),
                    None => (args, ""),
                };
                let update = FieldUpdate::parse(path, value)?;
                self.apply(update, out)?;
            }
            "asset" => {
                let args = required(args, "asset <slot> <file|none>")?;
                let (slot, source) = args
                    .split_once(char::is_whitespace)
                    .map(|(s, f)| (s, f.trim()))
                    .ok_or_else(|| anyhow!("Usage: asset <slot> <file|none>"))?;
                let slot = AssetSlot::parse(slot)
                    .ok_or_else(|| anyhow!("Unknown asset slot '{slot}' (icon, splash, logo)"))?;
                let data = match source {
                    "none" | "clear" => None,
                    file => Some(data_url_from_file(Path::new(file))?),
                };
                self.apply(FieldUpdate::Asset(slot, data), out)?;
            }
            "delete" => {
                let id = BrandId::from(required(args, "delete <id>")?);
                if self.store.delete_brand(&id) {
                    writeln!(out, "Deleted {id}")?;
                } else {
                    writeln!(out, "No brand with id {id}")?;
                }
            }
            "export" => match self.store.selected() {
                Some(brand) => {
                    let artifact = export_one(brand)?;
                    let path = write_artifact(&self.out_dir, &artifact)?;
                    writeln!(out, "Exported {}", path.display())?;
                }
                None => writeln!(out, "No brand selected")?,
            },
            "export-all" => {
                let artifact = export_all(self.store.brands())?;
                let path = write_artifact(&self.out_dir, &artifact)?;
                writeln!(out, "Exported {} brands to {}", self.store.len(), path.display())?;
            }
            "build-script" => {
                let artifact = export_build_script(self.store.brands(), Utc::now());
                let path = write_artifact(&self.out_dir, &artifact)?;
                writeln!(out, "Build script written to {}", path.display())?;
            }
            "save" => {
                let path = Path::new(required(args, "save <file>")?);
                save_brands_document(path, &BrandsDocument::from_store(&self.store))?;
                writeln!(out, "Saved {} brands to {}", self.store.len(), path.display())?;
            }
            "load" => {
                let path = Path::new(required(args, "load <file>")?);
                self.store = load_store(path)?;
                writeln!(out, "Loaded {} brands from {}", self.store.len(), path.display())?;
            }
            "help" => writeln!(out, "{SESSION_HELP}")?,
            "quit" | "exit" => return Ok(Flow::Quit),
            other => bail!("Unknown command '{other}' (type 'help')"),
        }

        Ok(Flow::Continue)
    }

    fn apply(&mut self, update: FieldUpdate, out: &mut impl Write) -> Result<()> {
        let path = update.path();
        if self.store.update_field(update) {
            writeln!(out, "Updated {path}")?;
        } else {
            writeln!(out, "No brand selected; nothing updated")?;
        }
        Ok(())
    }
}

fn required<'a>(args: &'a str, usage: &str) -> Result<&'a str> {
    if args.is_empty() {
        bail!("Usage: {usage}");
    }
    Ok(args)
}

fn write_brand_details(brand: &BrandConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Brand {}", brand.id)?;
    writeln!(out, "  appName:      {}", brand.app_name)?;
    writeln!(out, "  displayName:  {}", brand.display_name)?;
    writeln!(out, "  packageName:  {}", brand.package_name)?;
    writeln!(out, "  bundleId:     {}", brand.bundle_id)?;
    writeln!(out, "  version:      {} ({})", brand.version, brand.version_code)?;
    writeln!(out, "  apiBaseUrl:   {}", brand.api_base_url)?;
    writeln!(out, "  colors:")?;
    for key in ColorKey::ALL {
        writeln!(out, "    {:<14}{}", key.as_str(), brand.colors.get(key))?;
    }
    writeln!(out, "  features:")?;
    for key in FeatureKey::ALL {
        writeln!(out, "    {:<18}{}", key.as_str(), brand.features.get(key))?;
    }
    writeln!(out, "  assets:")?;
    for slot in AssetSlot::ALL {
        let summary = match brand.assets.get(slot) {
            None => "(none)".to_string(),
            Some(url) => match AssetSummary::from_data_url(url) {
                Ok(summary) => summary.to_string(),
                Err(_) => "(unrecognized data)".to_string(),
            },
        };
        writeln!(out, "    {:<8}{}", slot.as_str(), summary)?;
    }
    Ok(())
}

/// Feed `input` line by line into `session`. Command failures are reported
/// and do not end the session.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
) -> Result<()> {
    for line in input.lines() {
        let line = line.context("Failed to read session input")?;
        match session.execute(&line, out) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(err) => writeln!(out, "error: {err:#}")?,
        }
        out.flush()?;
    }
    Ok(())
}

/// Start an editing session on stdin/stdout.
pub fn session_command(load: Option<&str>, out: &str) -> Result<()> {
    let store = match load {
        Some(path) => load_store(Path::new(path))?,
        None => BrandStore::new(),
    };
    let out_dir = canonicalize_or_current(out)?;
    let mut session = Session::new(store, out_dir);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    if stdin.is_terminal() {
        writeln!(stdout, "brandkit {} session. Type 'help' for commands.", brandkit_core::version())?;
    }
    run_session(&mut session, stdin.lock(), &mut stdout)?;
    tracing::info!(brands = session.store().len(), "Session ended");
    Ok(())
}
