//! Command-line front-end for *heatpath*.
//!
//! Reads a digit grid, runs the run-constrained search from the top-left to
//! the bottom-right cell (or between `--start`/`--end`), and reports the
//! cheapest cost for each requested policy.

use std::fmt;
use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use heatpath_core::{Context, CostGrid, Point};
use heatpath_paths::{
    Frontier, Route, RunPolicy, RunSearch, SearchConfig, SearchOutcome, TotalCost, dijkstra_cost,
};
use log::info;
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "heatpath")]
#[command(about = "Cheapest route through a digit grid under straight-run limits")]
pub struct Cli {
    /// Grid of cell costs, one digit per cell and one row per line
    pub input: PathBuf,

    /// Minimum straight steps before a turn (runs a single custom policy)
    #[arg(long)]
    pub min_run: Option<u32>,

    /// Maximum straight steps before a forced turn (runs a single custom policy)
    #[arg(long)]
    pub max_run: Option<u32>,

    /// Start cell as "x,y"; defaults to the top-left corner
    #[arg(long)]
    pub start: Option<Point>,

    /// End cell as "x,y"; defaults to the bottom-right corner
    #[arg(long)]
    pub end: Option<Point>,

    /// Frontier discipline
    #[arg(long, value_enum)]
    pub frontier: Option<FrontierArg>,

    /// Count the start cell's cost in the total
    #[arg(long)]
    pub include_start_cost: bool,

    /// Give up after this many label updates
    #[arg(long)]
    pub max_updates: Option<u64>,

    /// Cancel each search after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// JSON search configuration; flags override its fields
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Draw each route over the grid
    #[arg(long)]
    pub show_path: bool,

    /// Also report the cheapest cost without run limits
    #[arg(long)]
    pub baseline: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrontierArg {
    Priority,
    Fifo,
}

impl From<FrontierArg> for Frontier {
    fn from(f: FrontierArg) -> Self {
        match f {
            FrontierArg::Priority => Frontier::Priority,
            FrontierArg::Fifo => Frontier::Fifo,
        }
    }
}

impl Cli {
    /// Apply command-line overrides on top of `base`.
    pub fn search_config(&self, base: SearchConfig) -> SearchConfig {
        let mut cfg = base;
        if let Some(f) = self.frontier {
            cfg.frontier = f.into();
        }
        if self.include_start_cost {
            cfg.include_start_cost = true;
        }
        if self.max_updates.is_some() {
            cfg.max_label_updates = self.max_updates;
        }
        if let Some(min_run) = self.min_run {
            cfg.policy.min_run = min_run;
        }
        if let Some(max_run) = self.max_run {
            cfg.policy.max_run = max_run;
        }
        cfg
    }

    /// Policies to search with. A config file or run flag selects a single
    /// policy; otherwise both classic policies are reported.
    pub fn policies(&self, cfg: &SearchConfig) -> Vec<RunPolicy> {
        if self.config.is_some() || self.min_run.is_some() || self.max_run.is_some() {
            vec![cfg.policy]
        } else {
            vec![RunPolicy::TURN_WITHIN_3, RunPolicy::STRAIGHT_4_TO_10]
        }
    }

    fn base_config(&self) -> Result<SearchConfig> {
        let Some(path) = &self.config else {
            return Ok(SearchConfig::default());
        };
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }
}

/// One policy's result.
#[derive(Serialize, Debug)]
pub struct Report {
    pub policy: RunPolicy,
    pub start: Point,
    pub end: Point,
    #[serde(flatten)]
    pub outcome: SearchOutcome,
}

/// Everything printed for one input.
#[derive(Serialize, Debug)]
pub struct Summary {
    pub reports: Vec<Report>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<TotalCost>,
}

/// Read the input named by `cli` and produce the text to print.
pub fn run(cli: &Cli) -> Result<String> {
    let text = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("reading grid {}", cli.input.display()))?;
    let grid = CostGrid::parse(&text)
        .with_context(|| format!("parsing grid {}", cli.input.display()))?;
    let base = cli.base_config()?;
    run_on(cli, &grid, base)
}

/// Search `grid` as requested by `cli`, starting from configuration `base`.
pub fn run_on(cli: &Cli, grid: &CostGrid, base: SearchConfig) -> Result<String> {
    let cfg = cli.search_config(base);
    let start = cli.start.unwrap_or(grid.bounds().top_left());
    let end = cli.end.unwrap_or(grid.bounds().bottom_right());
    info!(
        "grid {}x{}, {start} -> {end}",
        grid.width(),
        grid.height()
    );

    let mut reports = Vec::new();
    for policy in cli.policies(&cfg) {
        let mut search = RunSearch::new(cfg.with_policy(policy));
        if let Some(ms) = cli.timeout_ms {
            search = search.with_context(cancel_after(ms));
        }
        let outcome = search
            .run(grid, start, end)
            .with_context(|| format!("searching with {policy}"))?;
        reports.push(Report {
            policy,
            start,
            end,
            outcome,
        });
    }

    let baseline = if cli.baseline {
        dijkstra_cost(grid, start, end)
    } else {
        None
    };
    let summary = Summary { reports, baseline };

    if cli.json {
        return serde_json::to_string_pretty(&summary).context("encoding results");
    }
    Ok(format_summary(&summary, grid, cli.show_path))
}

/// A context that a timer thread cancels after `ms` milliseconds. A zero
/// timeout is cancelled before it is returned.
fn cancel_after(ms: u64) -> Context {
    let ctx = Context::new();
    if ms == 0 {
        ctx.cancel();
        return ctx;
    }
    let timer = ctx.clone();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(ms));
        timer.cancel();
    });
    ctx
}

/// Plain-text rendering of a [`Summary`].
pub fn format_summary(summary: &Summary, grid: &CostGrid, show_path: bool) -> String {
    let mut out = String::new();
    // Writing into a `String` never fails.
    if write_summary(&mut out, summary, grid, show_path).is_err() {
        out.clear();
    }
    out.trim_end().to_string()
}

fn write_summary(
    out: &mut impl fmt::Write,
    summary: &Summary,
    grid: &CostGrid,
    show_path: bool,
) -> fmt::Result {
    for r in &summary.reports {
        match &r.outcome {
            SearchOutcome::Reached { route, .. } => {
                writeln!(out, "{}: {}", r.policy, route.cost)?;
                if show_path {
                    writeln!(out, "{}", render_route(grid, route))?;
                }
            }
            SearchOutcome::Unreachable { .. } => {
                writeln!(out, "{}: unreachable", r.policy)?;
            }
        }
    }
    if let Some(b) = summary.baseline {
        writeln!(out, "unconstrained: {b}")?;
    }
    Ok(())
}

/// Draw `route` over the grid digits. Every entered cell shows the arrow of
/// the step that entered it.
pub fn render_route(grid: &CostGrid, route: &Route) -> String {
    let mut rows: Vec<Vec<char>> = grid.to_string().lines().map(|l| l.chars().collect()).collect();
    for (w, h) in route.path.windows(2).zip(route.headings()) {
        let p = w[1];
        if let Some(ch) = rows
            .get_mut(p.y as usize)
            .and_then(|row| row.get_mut(p.x as usize))
        {
            *ch = h.arrow();
        }
    }
    rows.into_iter()
        .map(|r| r.into_iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const EXAMPLE: &str = "\
2413432311323
3215453535623
3255245654254
3446585845452
4546657867536
1438598798454
4457876987766
3637877979653
4654967986887
4564679986453
1224686865563
2546548887735
4322674655533";

    fn cli(args: &[&str]) -> Cli {
        let mut full = vec!["heatpath", "input.txt"];
        full.extend_from_slice(args);
        Cli::try_parse_from(full).unwrap()
    }

    #[test]
    fn defaults_report_both_policies() {
        let grid = CostGrid::parse(EXAMPLE).unwrap();
        let out = run_on(&cli(&[]), &grid, SearchConfig::default()).unwrap();
        assert_eq!(out, "runs 1..=3: 102\nruns 4..=10: 94");
    }

    #[test]
    fn custom_policy_from_flags() {
        let c = cli(&["--min-run", "4", "--max-run", "10", "--frontier", "fifo"]);
        let cfg = c.search_config(SearchConfig::default());
        assert_eq!(cfg.policy, RunPolicy::STRAIGHT_4_TO_10);
        assert_eq!(cfg.frontier, Frontier::Fifo);
        assert_eq!(c.policies(&cfg), vec![RunPolicy::STRAIGHT_4_TO_10]);

        let grid = CostGrid::parse(EXAMPLE).unwrap();
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        assert_eq!(out, "runs 4..=10: 94");
    }

    #[test]
    fn flags_override_config() {
        let base = SearchConfig::new(RunPolicy::new(2, 5).unwrap()).with_label_limit(7);
        let c = cli(&["--max-run", "8", "--max-updates", "100", "--include-start-cost"]);
        let cfg = c.search_config(base);
        assert_eq!(cfg.policy, RunPolicy::new(2, 8).unwrap());
        assert_eq!(cfg.max_label_updates, Some(100));
        assert!(cfg.include_start_cost);
    }

    #[test]
    fn endpoints_parse_as_points() {
        let c = cli(&["--start", "1,2", "--end", "(4, 0)"]);
        assert_eq!(c.start, Some(Point::new(1, 2)));
        assert_eq!(c.end, Some(Point::new(4, 0)));
        assert!(Cli::try_parse_from(["heatpath", "in.txt", "--start", "nope"]).is_err());
    }

    #[test]
    fn invalid_policy_is_an_error() {
        let grid = CostGrid::parse(EXAMPLE).unwrap();
        let c = cli(&["--min-run", "5", "--max-run", "3"]);
        let err = run_on(&c, &grid, SearchConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("min_run 5 exceeds max_run 3"));
    }

    #[test]
    fn unreachable_is_reported() {
        let grid = CostGrid::uniform(5, 5, 1).unwrap();
        let c = cli(&["--min-run", "4", "--max-run", "10", "--end", "3,3"]);
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        assert_eq!(out, "runs 4..=10: unreachable");
    }

    #[test]
    fn baseline_and_json() {
        let grid = CostGrid::uniform(5, 2, 1).unwrap();
        let c = cli(&["--end", "4,0", "--baseline"]);
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        assert!(out.contains("runs 1..=3: 6"));
        assert!(out.ends_with("unconstrained: 4"));

        let c = cli(&["--end", "4,0", "--json", "--min-run", "1", "--max-run", "3"]);
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["reports"][0]["outcome"], "reached");
        assert_eq!(v["reports"][0]["route"]["cost"], 6);
        assert!(v.get("baseline").is_none());
    }

    #[test]
    fn render_marks_entered_cells() {
        let grid = CostGrid::parse("111\n111").unwrap();
        let route = Route {
            cost: 3,
            path: vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ],
        };
        assert_eq!(render_route(&grid, &route), "1>1\n1v>");
    }

    #[test]
    fn shown_path_follows_cost_line() {
        let grid = CostGrid::parse(EXAMPLE).unwrap();
        let c = cli(&["--min-run", "1", "--max-run", "3", "--show-path"]);
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        let mut lines = out.lines();
        assert_eq!(lines.next(), Some("runs 1..=3: 102"));
        let drawn: Vec<_> = lines.collect();
        assert_eq!(drawn.len(), 13);
        assert!(drawn.iter().all(|l| l.len() == 13));
        // Start cell is never overdrawn; the end always is.
        assert!(drawn[0].starts_with('2'));
        assert!(matches!(drawn[12].chars().last(), Some('>' | 'v')));
    }

    #[test]
    fn config_file_selects_single_policy() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("grid.txt");
        let config = dir.path().join("search.json");
        fs::write(&input, EXAMPLE).unwrap();
        fs::write(
            &config,
            r#"{"policy": {"min_run": 4, "max_run": 10}, "frontier": "fifo"}"#,
        )
        .unwrap();

        let c = Cli::try_parse_from([
            "heatpath",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .unwrap();
        assert_eq!(run(&c).unwrap(), "runs 4..=10: 94");
    }

    #[test]
    fn config_file_errors_name_the_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("grid.txt");
        fs::write(&input, "11\n11").unwrap();
        let with_config = |config: &std::path::Path| {
            Cli::try_parse_from([
                "heatpath",
                input.to_str().unwrap(),
                "--config",
                config.to_str().unwrap(),
            ])
            .unwrap()
        };

        let missing = dir.path().join("missing.json");
        let err = run(&with_config(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("reading config"));
        assert!(format!("{err:#}").contains("missing.json"));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let err = run(&with_config(&broken)).unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
        assert!(format!("{err:#}").contains("broken.json"));
    }

    #[test]
    fn expired_timeout_cancels_search() {
        let grid = CostGrid::parse(EXAMPLE).unwrap();
        let c = cli(&["--timeout-ms", "0"]);
        let err = run_on(&c, &grid, SearchConfig::default()).unwrap_err();
        assert!(format!("{err:#}").contains("search cancelled"));

        let c = cli(&["--timeout-ms", "60000"]);
        let out = run_on(&c, &grid, SearchConfig::default()).unwrap();
        assert_eq!(out, "runs 1..=3: 102\nruns 4..=10: 94");
    }

    #[test]
    fn baseline_uses_total_cost() {
        let summary = Summary {
            reports: Vec::new(),
            baseline: Some(TotalCost::from(u32::MAX) + 1),
        };
        let grid = CostGrid::uniform(1, 1, 0).unwrap();
        assert_eq!(
            format_summary(&summary, &grid, false),
            "unconstrained: 4294967296"
        );
    }
}
