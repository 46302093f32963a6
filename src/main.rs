use anyhow::{bail, ensure, Context, Result};
use chrono::Local;
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{collections::HashSet, env, fs, path::PathBuf};

use kindle_clippings_html::clippings::{
    parser::parse_clippings,
    renderer::{output_file_name, render_book},
};

struct Args {
    clippings_path: String,
    output_path: String,
    dump_json: bool,
}

fn get_args() -> Result<Args> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optopt("o", "output", "path to the output directory", "DIR");
    opts.optflag("", "json", "also dump the parsed library as library.json");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let clippings_path = matches
        .free
        .get(0)
        .context("path to the clippings file is required")?
        .clone();
    let output_path = matches
        .opt_str("output")
        .unwrap_or_else(|| "./output".to_owned());

    Ok(Args {
        clippings_path,
        output_path,
        dump_json: matches.opt_present("json"),
    })
}

fn main() -> Result<()> {
    let args = get_args()?;

    let clippings_path = PathBuf::from(&args.clippings_path);
    ensure!(
        clippings_path.exists(),
        "File not found: {}",
        clippings_path.display()
    );

    // Kindle writes UTF-8 with a BOM; decode rather than assume clean UTF-8.
    let bytes = fs::read(&clippings_path)
        .with_context(|| format!("Failed to read {}", clippings_path.display()))?;
    let txt = encoding_rs::UTF_8.decode(&bytes).0.into_owned();

    let outcome = parse_clippings(&txt);

    let output_root = PathBuf::from(&args.output_path);
    fs::create_dir_all(&output_root).with_context(|| {
        format!(
            "Failed to create output directory: {}",
            output_root.display()
        )
    })?;

    println!("Processing books...");

    let generated_at = Local::now().format("%d/%m/%y %H:%M:%S").to_string();

    // Normalized titles are unique within a library, so file names are too;
    // the set still backs the duplicate notice of the old pipeline.
    let mut produced = HashSet::new();

    let pb = create_progress_bar(outcome.library.books().len() as u64);
    for book in outcome.library.books().iter().progress_with(pb.clone()) {
        // A details line like "(Jane Austen)" normalizes to an empty title;
        // such books are kept in the library but make no sense as a file.
        if book.title.is_empty() {
            continue;
        }

        let file_name = output_file_name(book);
        if !produced.insert(file_name.clone()) {
            pb.println(format!("HTML file already produced for: {}", book.title));
            continue;
        }

        let html = render_book(book, &generated_at);
        fs::write(output_root.join(&file_name), html)
            .with_context(|| format!("Failed to write {}", file_name))?;
        pb.println(format!("HTML file produced for: {}", book.title));
    }

    if args.dump_json {
        fs::write(
            output_root.join("library.json"),
            serde_json::to_string_pretty(&outcome.library)?,
        )
        .context("Failed to write library.json")?;
    }

    if outcome.skipped > 0 {
        println!("Skipped {} unparseable clippings", outcome.skipped);
    }

    println!("Finished.");

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
