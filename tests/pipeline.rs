//! End-to-end runs of the normalization pipeline against files on disk.

use anyhow::Result;
use hosps_norm::{process, Config, NormalizeError};
use std::{fs, path::Path};
use tempfile::tempdir;

const INPUT: &str = "\
season,location,season_week,value,population,source,week_end,imputed,share
2023-24,US,2,300,331000000,nhsn,2023-10-14 00:00:00,False,0.50
2022-23,US,10,200,2000000,nhsn,2022-12-10 00:00:00,True,1.250
2023-24,06,1,12.5,39000000,nhsn,2023-10-07 00:00:00,False,0.10
2022-23,US,9,0,0,nhsn,2022-12-03 00:00:00,True,2E3
2022-23,US,1,5,,nhsn,2022-10-08 00:00:00,False,
";

fn write_input(dir: &Path, contents: &str) -> Result<Config> {
    let data = dir.join("analysis_data");
    fs::create_dir_all(&data)?;
    let input = data.join("formatted_flu.csv");
    fs::write(&input, contents)?;
    Ok(Config::new(input, data.join("hosps_pop_norm.csv")))
}

fn output_rows(cfg: &Config) -> Result<Vec<Vec<String>>> {
    Ok(fs::read_to_string(&cfg.output)?
        .lines()
        .map(|l| l.split(',').map(str::to_string).collect())
        .collect())
}

#[test]
fn missing_input_fails_before_writing() -> Result<()> {
    let dir = tempdir()?;
    let cfg = Config::new(dir.path().join("nope.csv"), dir.path().join("out.csv"));

    let err = process::run(&cfg).unwrap_err();
    assert!(matches!(err, NormalizeError::NotFound { .. }));
    assert!(err.to_string().contains("nope.csv"));
    assert_eq!(fs::read_dir(dir.path())?.count(), 0);
    Ok(())
}

#[test]
fn missing_value_column_is_named() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), "season,location,season_week,population\na,b,1,10\n")?;

    let err = process::run(&cfg).unwrap_err();
    assert_eq!(err.to_string(), "missing required columns: {value}");
    assert!(!cfg.output.exists());
    Ok(())
}

#[test]
fn missing_sort_key_is_reported_after_validation() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), "season,value,population\na,1,100000\n")?;

    let err = process::run(&cfg).unwrap_err();
    assert!(matches!(err, NormalizeError::MissingSortKey { .. }));
    assert!(!cfg.output.exists());
    Ok(())
}

#[test]
fn columns_are_preserved_and_rate_appended() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), INPUT)?;

    let summary = process::run(&cfg)?;
    let rows = output_rows(&cfg)?;

    assert_eq!(
        rows[0],
        vec![
            "season",
            "location",
            "season_week",
            "value",
            "population",
            "source",
            "week_end",
            "imputed",
            "share",
            "hosps_pop_norm"
        ]
    );
    assert_eq!(rows.len() - 1, INPUT.lines().count() - 1);
    assert_eq!(summary.rows, 5);
    assert!(rows.iter().all(|r| r.len() == 10));
    Ok(())
}

#[test]
fn rows_are_sorted_and_edge_cases_flow_through() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), INPUT)?;

    let summary = process::run(&cfg)?;
    let rows = output_rows(&cfg)?;
    let keys: Vec<(&str, &str, &str)> = rows[1..]
        .iter()
        .map(|r| (r[0].as_str(), r[1].as_str(), r[2].as_str()))
        .collect();

    assert_eq!(
        keys,
        vec![
            ("2022-23", "US", "1"),
            ("2022-23", "US", "9"),
            ("2022-23", "US", "10"),
            ("2023-24", "06", "1"),
            ("2023-24", "US", "2"),
        ]
    );

    // null population and 0 / 0 → empty cell; 200 / 20 → 10
    assert_eq!(rows[1][9], "");
    assert_eq!(rows[2][9], "");
    let rate: f64 = rows[3][9].parse()?;
    assert!((rate - 10.0).abs() < 1e-9);

    assert_eq!(summary.max, Some(10.0));
    Ok(())
}

#[test]
fn extra_columns_round_trip_verbatim() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), INPUT)?;

    process::run(&cfg)?;
    let rows = output_rows(&cfg)?;
    let extras = |season: &str, location: &str, week: &str| -> Vec<String> {
        rows[1..]
            .iter()
            .find(|r| r[0] == season && r[1] == location && r[2] == week)
            .map(|r| r[5..9].to_vec())
            .unwrap_or_default()
    };

    // every extra cell is written back exactly as it was read
    for line in INPUT.lines().skip(1) {
        let input: Vec<&str> = line.split(',').collect();
        assert_eq!(
            extras(input[0], input[1], input[2]),
            input[5..9].to_vec(),
            "row {}",
            line
        );
    }
    assert_eq!(
        extras("2022-23", "US", "10"),
        vec!["nhsn", "2022-12-10 00:00:00", "True", "1.250"]
    );
    Ok(())
}

#[test]
fn zero_population_with_cases_is_infinite() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(
        dir.path(),
        "season,location,season_week,value,population\n2022-23,US,1,4,0\n",
    )?;

    let summary = process::run(&cfg)?;
    let rows = output_rows(&cfg)?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1][5], "inf");
    assert_eq!(summary.max, Some(f64::INFINITY));
    Ok(())
}

#[test]
fn rerun_is_byte_identical() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(dir.path(), INPUT)?;

    process::run(&cfg)?;
    let first = fs::read(&cfg.output)?;
    process::run(&cfg)?;
    assert_eq!(fs::read(&cfg.output)?, first);
    Ok(())
}

#[test]
fn tab_delimited_round_trip() -> Result<()> {
    let dir = tempdir()?;
    let cfg = write_input(
        dir.path(),
        "season\tlocation\tseason_week\tvalue\tpopulation\n2022-23\tUS\t1\t200\t2000000\n",
    )?
    .with_delimiter(b'\t');

    process::run(&cfg)?;
    let text = fs::read_to_string(&cfg.output)?;
    assert_eq!(
        text.lines().next(),
        Some("season\tlocation\tseason_week\tvalue\tpopulation\thosps_pop_norm")
    );
    assert_eq!(text.lines().nth(1), Some("2022-23\tUS\t1\t200\t2000000\t10.0"));
    Ok(())
}
