//! sill search コマンド
//!
//! 絞り込み・並べ替え済みのソフトウェア一覧を表示する。

use super::{Context, FilterArgs};
use crate::catalog::Prerogative;
use crate::error::Result;
use crate::output::MatchSummary;
use crate::view::ExternalSoftware;
use chrono::DateTime;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only software ids and names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<()> {
    let engine = ctx.engine()?;
    let state = args.filter.to_state(&ctx.config)?;
    let softwares = engine.softwares(&state);
    let total = engine.snapshot().len();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&softwares)?);
    } else if args.simple {
        for software in &softwares {
            println!("{}\t{}", software.software_id, software.software_name);
        }
    } else {
        print_table(&softwares, total, ctx.use_color());
    }

    Ok(())
}

fn print_table(softwares: &[ExternalSoftware], total: usize, color: bool) {
    if !softwares.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec![
            "ID",
            "Name",
            "Version",
            "Published",
            "Users",
            "Referents",
            "Prerogatives",
        ]);
        for software in softwares {
            table.add_row(table_row(software));
        }
        println!("{table}");
    }

    if color {
        println!("{}", MatchSummary::format(softwares.len(), total).line());
    } else {
        println!("{}", MatchSummary::plain(softwares.len(), total));
    }
}

fn table_row(software: &ExternalSoftware) -> Vec<String> {
    let (version, published) = match &software.last_version {
        Some(v) => (v.sem_ver.clone(), format_date(v.publication_time)),
        None => ("-".to_string(), "-".to_string()),
    };

    vec![
        software.software_id.to_string(),
        software.software_name.clone(),
        version,
        published,
        software.user_count.to_string(),
        software.referent_count.to_string(),
        format_prerogatives(software),
    ]
}

/// エポックミリ秒を日付に整形
fn format_date(millis: i64) -> String {
    DateTime::from_timestamp_millis(millis)
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

fn format_prerogatives(software: &ExternalSoftware) -> String {
    let names: Vec<&str> = Prerogative::all()
        .iter()
        .filter(|p| software.prerogatives.get(**p))
        .map(|p| p.display_name())
        .collect();
    if names.is_empty() {
        "-".to_string()
    } else {
        names.join(", ")
    }
}

#[cfg(test)]
#[path = "search_test.rs"]
mod tests;
