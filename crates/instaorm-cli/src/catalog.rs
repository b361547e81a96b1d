use crate::cli::{ListArgs, RenderArgs};
use crate::config::{ConfigFile, Placeholders};
use colored::Colorize;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets::UTF8_FULL};
use instaorm::SqlTemplate;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct QueryView<'a> {
    name: &'a str,
    kind: String,
    sql: String,
    binds: Vec<String>,
}

impl<'a> QueryView<'a> {
    fn new(name: &'a str, template: &SqlTemplate, placeholders: Placeholders) -> Self {
        Self {
            name,
            kind: template.kind().to_string(),
            sql: match placeholders {
                Placeholders::Positional => template.sql().to_string(),
                Placeholders::Numbered => template.to_numbered(),
            },
            binds: template.binds().iter().map(|b| b.qualified_name()).collect(),
        }
    }
}

pub fn list(args: ListArgs) -> anyhow::Result<()> {
    let config = ConfigFile::load(args.common.config.as_deref())?;
    let placeholders = args.placeholders.unwrap_or(config.render.placeholders);

    let catalog = instaorm::injector::catalog()?;
    let views: Vec<QueryView<'_>> = catalog
        .iter()
        .filter(|(name, _)| {
            args.prefix
                .as_deref()
                .is_none_or(|prefix| name.starts_with(prefix))
        })
        .map(|(name, template)| QueryView::new(name, template, placeholders))
        .collect();

    if views.is_empty() {
        anyhow::bail!(
            "no query name starts with `{}`",
            args.prefix.as_deref().unwrap_or_default()
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            ["Query", "Kind", "Binds", "SQL"]
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold).fg(Color::Cyan)),
        );
    for view in &views {
        table.add_row(vec![
            Cell::new(view.name).fg(Color::Green),
            Cell::new(&view.kind),
            Cell::new(view.binds.join(", ")),
            Cell::new(&view.sql),
        ]);
    }
    println!("{table}");
    println!("{} queries", views.len().to_string().bold());
    Ok(())
}

pub fn render(args: RenderArgs) -> anyhow::Result<()> {
    let config = ConfigFile::load(args.common.config.as_deref())?;
    let placeholders = args.placeholders.unwrap_or(config.render.placeholders);

    let catalog = instaorm::injector::catalog()?;
    let Some((name, template)) = catalog.iter().find(|(name, _)| *name == args.name) else {
        anyhow::bail!("unknown query: {} (run `instaorm list`)", args.name);
    };
    let view = QueryView::new(name, template, placeholders);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{} {}", view.kind.bold().cyan(), view.name.bold());
    println!("  {}", view.sql);
    if view.binds.is_empty() {
        println!("  {}", "no bind values".bright_black());
    }
    for (idx, bind) in view.binds.iter().enumerate() {
        println!("  {} {}", format!("${}", idx + 1).yellow(), bind);
    }
    Ok(())
}
