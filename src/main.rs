mod catalog;
mod palette;
mod variants;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use variants::SvgName;

const MENU: &[(i64, &str)] = &[(0, "Get alternative color styles for an SVG")];

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[clap(short, default_value = "./public")]
    /// Directory the source SVG is read from and the variants are written to.
    dir: PathBuf,
    /// Source SVG to restyle, e.g. 'logo-black.svg'. Skips the menu.
    svg: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();

    match args.svg {
        Some(svg) => generate_alternate_styles(&args.dir, svg.trim()),
        None => run_menu(&args.dir),
    }
}

fn run_menu(dir: &Path) -> anyhow::Result<()> {
    println!("Welcome to the svgstylegen utility!");
    println!("{}", "-".repeat(20));
    for (id, name) in MENU {
        println!("{id} - {name}");
    }
    println!("{}", "-".repeat(20));

    let choice = prompt("Enter the number for a selection:")?;
    let choice: i64 = choice
        .trim()
        .parse()
        .with_context(|| format!("'{}' is not a selection number", choice.trim()))?;

    match choice {
        0 => {
            println!("Path should be ../public");
            let svg = prompt("Enter the SVG name:")?;
            generate_alternate_styles(dir, svg.trim())
        }
        // any other number silently does nothing
        _ => Ok(()),
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line)
}

fn generate_alternate_styles(dir: &Path, svg_name: &str) -> anyhow::Result<()> {
    let name = SvgName::parse(svg_name)?;
    println!("Using {} as base style to set others from", name.style);
    let source = palette::find(name.style)?;

    let source_path = dir.join(svg_name);
    let template = fs::read_to_string(&source_path)
        .with_context(|| format!("couldn't read {}", source_path.display()))?;

    let mut written = 0usize;
    for variant in variants::render(&template, source, name.base) {
        let path = dir.join(&variant.file_name);
        fs::write(&path, &variant.contents).with_context(|| {
            format!(
                "couldn't write {} ({written} variant(s) before it are already on disk)",
                path.display()
            )
        })?;
        written += 1;
        debug!(path = %path.display(), style = variant.style.name, "wrote variant");
        println!(
            "{}",
            catalog::entry(name.base, variant.style.name, &variant.file_name)
        );
    }

    Ok(())
}
