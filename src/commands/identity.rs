use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Result};
use colored::Colorize;

use crate::core::identity::IdentityStore;

fn shown(s: &str) -> String {
    if s.is_empty() { "(empty)".to_string() } else { s.to_string() }
}

/// Snapshot of what the settings surface shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub identity: String,
    pub stored: Option<String>,
    pub account: String,
    pub prefs: String,
    pub diagnostics: bool,
}

impl Status {
    pub fn collect(ids: &IdentityStore, prefs: &Path) -> Self {
        Self {
            identity: ids.get_identity(),
            stored: ids.stored_identity(),
            account: ids.default_identity(),
            prefs: prefs.display().to_string(),
            diagnostics: crate::ENABLED,
        }
    }

    pub fn render(&self) -> String {
        format!(
            "identity:    {}\nstored:      {}\naccount:     {}\nprefs:       {}\ndiagnostics: {}",
            shown(&self.identity),
            self.stored.as_deref().map(shown).unwrap_or_else(|| "(not set)".to_string()),
            shown(&self.account),
            self.prefs,
            if self.diagnostics { "enabled" } else { "disabled" },
        )
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "identity": self.identity,
            "stored": self.stored,
            "account": self.account,
            "prefs": self.prefs,
            "diagnostics": self.diagnostics,
        })
    }
}

pub fn whoami(ids: &IdentityStore) -> Result<()> {
    println!("{}", ids.get_identity());
    Ok(())
}

pub fn set(ids: &IdentityStore, name: &str) -> Result<()> {
    ids.set_identity(name);
    // The store swallows write errors, so confirm by reading back.
    if ids.stored_identity().as_deref() != Some(name) {
        bail!("identity could not be saved (set CUTEDEBUG_TRACE=1 for details)");
    }
    println!("identity set to {}", name.bold());
    Ok(())
}

pub fn clear(ids: &IdentityStore) -> Result<()> {
    ids.clear_identity();
    println!("identity cleared; using {}", shown(&ids.get_identity()));
    Ok(())
}

pub fn status(ids: &IdentityStore, prefs: &Path, json: bool) -> Result<()> {
    let st = Status::collect(ids, prefs);
    if json {
        println!("{}", serde_json::to_string_pretty(&st.to_json())?);
        return Ok(());
    }
    println!("{}", st.render());
    if ids.needs_setup() {
        eprintln!("{}", "no identity configured; run `cutedebug set <NAME>` or `cutedebug init`".yellow());
    }
    Ok(())
}

pub fn init(ids: &IdentityStore) -> Result<()> {
    init_from(ids, io::stdin().lock())
}

pub fn init_from(ids: &IdentityStore, mut input: impl BufRead) -> Result<()> {
    if !ids.needs_setup() {
        println!("identity already configured: {}", ids.get_identity().bold());
        return Ok(());
    }
    print!("Username: ");
    io::stdout().flush()?;
    let mut line = String::new();
    input.read_line(&mut line)?;
    let name = line.trim();
    if name.is_empty() {
        bail!("no identity entered");
    }
    set(ids, name)
}
