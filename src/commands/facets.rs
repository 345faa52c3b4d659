//! sill facets コマンド
//!
//! 現在の絞り込み条件での各ファセットの件数を表示する。

use super::{Context, FilterArgs};
use crate::error::{Result, SillError};
use crate::facet::{FacetOption, FacetOptions};
use crate::filter::Dimension;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};

#[derive(Debug, Parser)]
pub struct Args {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Show only one dimension (organization, category, environment, prerogatives)
    #[arg(long)]
    pub dimension: Option<String>,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: Args, ctx: &Context) -> Result<()> {
    let dimensions = selected_dimensions(args.dimension.as_deref())?;
    let engine = ctx.engine()?;
    let state = args.filter.to_state(&ctx.config)?;
    let options = engine.facet_options(&state);

    if args.json {
        let value = match args.dimension {
            Some(_) => dimension_json(dimensions[0], &options)?,
            None => serde_json::to_value(&options)?,
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        for (i, dimension) in dimensions.iter().enumerate() {
            if i > 0 {
                println!();
            }
            print_dimension(*dimension, &options);
        }
    }

    Ok(())
}

/// `--dimension` を検証（検索は集計対象外）
fn selected_dimensions(dimension: Option<&str>) -> Result<Vec<Dimension>> {
    match dimension {
        None => Ok(Dimension::faceted().to_vec()),
        Some(name) => {
            let dimension: Dimension = name.parse()?;
            if Dimension::faceted().contains(&dimension) {
                Ok(vec![dimension])
            } else {
                Err(SillError::UnknownDimension(name.to_string()))
            }
        }
    }
}

/// 1 次元分の JSON（検索は集計対象外なのでエラー）
fn dimension_json(dimension: Dimension, options: &FacetOptions) -> Result<serde_json::Value> {
    let value = match dimension {
        Dimension::Organization => serde_json::to_value(&options.organizations)?,
        Dimension::Category => serde_json::to_value(&options.categories)?,
        Dimension::Environment => serde_json::to_value(&options.environments)?,
        Dimension::Prerogatives => serde_json::to_value(&options.prerogatives)?,
        Dimension::Search => {
            return Err(SillError::UnknownDimension(dimension.as_str().to_string()))
        }
    };
    Ok(value)
}

fn print_dimension(dimension: Dimension, options: &FacetOptions) {
    let rows = match dimension {
        Dimension::Organization => rows(&options.organizations, |v| v.clone()),
        Dimension::Category => rows(&options.categories, |v| v.clone()),
        Dimension::Environment => rows(&options.environments, |v| v.to_string()),
        Dimension::Prerogatives => rows(&options.prerogatives, |v| v.to_string()),
        Dimension::Search => return,
    };

    let title = capitalize(dimension.as_str());
    println!("{title}");
    println!("{}", "-".repeat(title.len()));

    if rows.is_empty() {
        println!("(none)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Value", "Count"]);
    for (value, count) in rows {
        table.add_row(vec![value, count.to_string()]);
    }
    println!("{table}");
}

fn rows<T>(options: &[FacetOption<T>], label: impl Fn(&T) -> String) -> Vec<(String, usize)> {
    options
        .iter()
        .map(|o| (label(&o.value), o.software_count))
        .collect()
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
