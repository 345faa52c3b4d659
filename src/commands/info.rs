//! sill info コマンド
//!
//! 1 件のソフトウェアの詳細情報を表示する。

use super::Context;
use crate::catalog::{CatalogEntry, Prerogative};
use crate::error::{Result, SillError};
use crate::view::project;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Debug, Parser)]
pub struct Args {
    /// ソフトウェアID
    pub id: u64,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,
}

pub async fn run(args: Args, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let entry = engine
        .snapshot()
        .get(args.id)
        .ok_or(SillError::SoftwareNotFound(args.id))?;

    match args.format {
        OutputFormat::Table => print_table(entry),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&project(entry))?),
    }

    Ok(())
}

fn print_table(entry: &CatalogEntry) {
    println!("Software Information");
    println!("====================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    for (field, value) in detail_rows(entry) {
        table.add_row(vec![field.to_string(), value]);
    }
    println!("{table}");
    println!();

    println!("Prerogatives");
    println!("------------");

    let mut prerogative_table = Table::new();
    prerogative_table.load_preset(UTF8_FULL);
    prerogative_table.set_header(vec!["Prerogative", "Value"]);
    for (name, mark) in prerogative_rows(entry) {
        prerogative_table.add_row(vec![name.to_string(), mark]);
    }
    println!("{prerogative_table}");
}

/// 導出特権は値の後ろに導出元を添える
fn prerogative_rows(entry: &CatalogEntry) -> Vec<(&'static str, String)> {
    Prerogative::all()
        .iter()
        .map(|prerogative| {
            let mark = if entry.has_prerogative(*prerogative) {
                "yes"
            } else {
                "no"
            };
            let value = if prerogative.is_derived() {
                format!("{mark} (from environments)")
            } else {
                mark.to_string()
            };
            (prerogative.display_name(), value)
        })
        .collect()
}

fn detail_rows(entry: &CatalogEntry) -> Vec<(&'static str, String)> {
    let dash = || "-".to_string();
    vec![
        ("ID", entry.software_id.to_string()),
        ("Name", entry.software_name.clone()),
        ("Description", non_empty(&entry.software_description).unwrap_or_else(dash)),
        (
            "Version",
            entry
                .last_version
                .as_ref()
                .map(|v| v.sem_ver.clone())
                .unwrap_or_else(dash),
        ),
        ("Categories", join_or_dash(&entry.categories)),
        ("Organizations", join_or_dash(&entry.organizations)),
        (
            "Environments",
            join_or_dash(
                &entry
                    .environments
                    .enabled()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>(),
            ),
        ),
        ("Users", entry.user_count.to_string()),
        ("Referents", entry.referent_count.to_string()),
        (
            "Parent",
            entry
                .parent_software
                .as_ref()
                .map(|p| p.software_name.clone())
                .unwrap_or_else(dash),
        ),
        ("Test URL", entry.test_url.clone().unwrap_or_else(dash)),
    ]
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}

fn join_or_dash(values: &[String]) -> String {
    if values.is_empty() {
        "-".to_string()
    } else {
        values.join(", ")
    }
}

#[cfg(test)]
#[path = "info_test.rs"]
mod tests;
