// src/cli.rs
use std::{env, path::PathBuf};

use crate::charts;
use crate::config::consts::OFFICIAL_TOP;
use crate::config::options::{AppOptions, ExportFormat};
use crate::file;
use crate::official::Footywire;
use crate::report;
use crate::runner;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut opts = AppOptions::default();
    let mut out: Option<PathBuf> = None;
    parse_cli(env::args().skip(1), &mut opts, &mut out)?;

    let source = Footywire { fetch: opts.fetch.clone() };
    let (official, season) = runner::run(&opts, &source, None)?;

    println!("Official count, top {OFFICIAL_TOP}:");
    for line in report::official_lines(&official, OFFICIAL_TOP) {
        println!("{line}");
    }

    println!();
    println!("Rating votes, season {}:", opts.count.season);
    for line in report::tally_lines(&season) {
        println!("{line}");
    }

    let names = charts::present_in_official(&official, &opts.count.comparison);
    let rows = charts::comparison_rows(&official, &season.totals, &names)?;
    println!();
    println!("Official vs rating votes:");
    for line in report::comparison_lines(&rows) {
        println!("{line}");
    }

    if let Some(path) = out {
        opts.export.set_path(&path.to_string_lossy());
        let (headers, rows) = report::tally_dataset(&season);
        let written = file::write_export_single(&opts.export, &headers, &rows)?;
        println!();
        println!("Wrote {}", written.display());
    }

    Ok(())
}

fn parse_cli(
    mut args: impl Iterator<Item = String>,
    opts: &mut AppOptions,
    out: &mut Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    while let Some(a) = args.next() {
        match a.as_str()
        {
            "--season" => {
                let v: u16 = args.next().ok_or("Missing value for --season")?.parse()?;
                opts.count.season = v; }
            "--rounds" => {
                let v: usize = args.next().ok_or("Missing value for --rounds")?.parse()?;
                if v == 0 { return Err("--rounds must be at least 1".into()); }
                opts.count.rounds = v; }
            "-d" | "--data-dir" => {
                opts.count.data_dir = PathBuf::from(args.next().ok_or("Missing value for --data-dir")?); }
            "--compare" => {
                let v = args.next().ok_or("Missing value for --compare")?;
                let names = parse_name_list(&v);
                if names.is_empty() { return Err("Empty --compare list".into()); }
                opts.count.comparison = names; }
            "--refresh" => opts.fetch.refresh = true,
            "--insecure" => opts.fetch.accept_invalid_certs = true,
            "-o" | "--out" => *out = Some(PathBuf::from(args.next().ok_or("Missing output path")?)),
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                opts.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };}
            "--include-headers" => opts.export.include_headers = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    Ok(())
}

/// "A, B,C" -> ["A", "B", "C"]
fn parse_name_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<(AppOptions, Option<PathBuf>), Box<dyn std::error::Error>> {
        let mut opts = AppOptions::default();
        let mut out = None;
        parse_cli(args.iter().map(|a| s!(*a)), &mut opts, &mut out)?;
        Ok((opts, out))
    }

    #[test]
    fn defaults_without_args() {
        let (opts, out) = parse(&[]).unwrap();
        assert_eq!(opts.count.season, 2023);
        assert_eq!(opts.count.rounds, 24);
        assert!(!opts.fetch.refresh);
        assert!(!opts.fetch.accept_invalid_certs);
        assert!(out.is_none());
    }

    #[test]
    fn season_rounds_and_flags() {
        let (opts, out) = parse(&[
            "--season", "2024",
            "--rounds", "23",
            "-d", "data",
            "--refresh",
            "--insecure",
            "-o", "out/t.tsv",
            "--format", "tsv",
        ])
        .unwrap();
        assert_eq!(opts.count.season, 2024);
        assert_eq!(opts.count.rounds, 23);
        assert_eq!(opts.count.data_dir, PathBuf::from("data"));
        assert!(opts.fetch.refresh);
        assert!(opts.fetch.accept_invalid_certs);
        assert_eq!(out, Some(PathBuf::from("out/t.tsv")));
        assert_eq!(opts.export.format, ExportFormat::Tsv);
    }

    #[test]
    fn compare_list_splits_and_trims() {
        let (opts, _) = parse(&["--compare", "Nick Daicos, Errol Gulden ,Zak Butters"]).unwrap();
        assert_eq!(
            opts.count.comparison,
            vec![s!("Nick Daicos"), s!("Errol Gulden"), s!("Zak Butters")]
        );
    }

    #[test]
    fn bad_args_are_errors() {
        assert!(parse(&["--rounds", "0"]).is_err());
        assert!(parse(&["--format", "xlsx"]).is_err());
        assert!(parse(&["--compare", " , "]).is_err());
        assert!(parse(&["--wat"]).is_err());
    }
}
