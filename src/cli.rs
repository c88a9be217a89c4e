use clap::{CommandFactory, Parser};
use montyhall::*;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const PARADOX: &str = "The paradox, quoting from http://en.wikipedia.org/wiki/Monty_Hall_problem#The_paradox:\n\
Suppose you're on a game show, and you're given the choice of three doors: \
Behind one door is a car; behind the others, goats. You pick a door, say No. 1, \
and the host, who knows what's behind the doors, opens another door, say No. 3, \
which has a goat. He then says to you, \"Do you want to pick door No. 2?\" \
Is it to your advantage to switch your choice? (Whitaker, 1990, as quoted by vos Savant 1990a)";

/// Monty Hall simulator: runs the game first with the player switching doors, then without.
#[derive(Debug, Parser)]
#[command(name = "montyhall", after_long_help = PARADOX, disable_help_flag = true)]
struct Cli {
    /// Number of rounds to simulate for each strategy
    #[arg(short, long, env = "MONTY_HALL_COUNT", default_value_t = DEFAULT_TRIALS)]
    count: u64,

    /// Fixed random seed, drawn from the OS when omitted
    #[arg(short, long, env = "MONTY_HALL_SEED")]
    seed: Option<u64>,

    /// Number of independently seeded worker streams
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    jobs: u32,

    /// Print the results as JSON
    #[arg(long)]
    json: bool,

    /// Print this help and exit
    #[arg(short, long)]
    help: bool,
}

/// 输出 JSON 时每种策略的结果
#[derive(Debug, Serialize)]
struct ReportView {
    strategy: Strategy,
    trials: u64,
    success_count: u64,
    failure_count: u64,
    first_pick_wins: u64,
    /// 没有进行任何一轮时为 null
    win_rate: Option<f64>,
    loss_rate: Option<f64>,
}

impl From<&ExperimentReport> for ReportView {
    fn from(report: &ExperimentReport) -> Self {
        Self {
            strategy: report.strategy(),
            trials: report.trials(),
            success_count: report.success_count(),
            failure_count: report.failure_count(),
            first_pick_wins: report.first_pick_wins(),
            win_rate: report.win_rate(),
            loss_rate: report.loss_rate(),
        }
    }
}

#[derive(Debug, Serialize)]
struct SummaryView {
    seed: u64,
    jobs: u32,
    reports: Vec<ReportView>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.help {
        println!("{}", Cli::command().render_long_help());
        std::process::exit(1);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings {
        trials: cli.count,
        seed: cli.seed,
        jobs: cli.jobs,
    };
    let summary = simulate(&settings)?;

    if cli.json {
        let view = SummaryView {
            seed: summary.seed,
            jobs: summary.jobs,
            reports: summary.reports.iter().map(ReportView::from).collect(),
        };
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &Summary) {
    println!("**********蒙提霍尔问题模拟结果**********");
    println!("种子: {}，随机流: {}", summary.seed, summary.jobs);

    for report in &summary.reports {
        println!();
        println!("{}: 共进行 {} 轮游戏；", report.strategy().label(), report.trials());
        println!(
            "赢得奖品 {} 轮，未赢得奖品 {} 轮；",
            report.success_count(),
            report.failure_count()
        );
        println!(
            "第一次就选择正确 {} 轮；",
            report.first_pick_wins()
        );
        println!(
            "胜率 {}，败率 {}。",
            percent(report.win_rate()),
            percent(report.loss_rate())
        );
    }
}

/// 轮数为 0 时胜率没有定义
const UNDEFINED_RATE: &str = "未定义（未进行任何一轮）";

// 明确标出未定义的胜率，而不是输出 0 或 NaN
fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}%", rate * 100.0),
        None => UNDEFINED_RATE.to_string(),
    }
}
