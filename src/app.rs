use log::{debug, info, warn};

use roster_draw::builder::Builder;
use roster_draw::*;
use snafu::{prelude::*, Snafu};

use std::fs;
use std::io::BufRead;
use std::io::Write as IoWrite;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use serde::{Deserialize, Serialize};
use serde_json::json;
use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::app::plan_reader::*;
use crate::args::Args;

#[derive(Debug, Snafu)]
pub enum PlannerError {
    #[snafu(display("Error reading input file {path}"))]
    OpeningInput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing plan file"))]
    ParsingPlan { source: serde_json::Error },
    #[snafu(display("Error writing to {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type PlannerResult<T> = Result<T, PlannerError>;

pub mod plan_reader {
    use crate::app::*;

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct PlanDraws {
        #[serde(rename = "drawCount")]
        pub draw_count: Option<usize>,
        pub rounds: Option<usize>,
        #[serde(rename = "allowRepeat")]
        pub allow_repeat: Option<bool>,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct PlanGrouping {
        /// Either "count" or "size".
        pub mode: String,
        pub value: usize,
    }

    #[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
    pub struct PlanConfig {
        #[serde(rename = "sessionName")]
        pub session_name: String,
        #[serde(rename = "inputPath")]
        pub input_path: Option<String>,
        pub names: Option<Vec<String>>,
        #[serde(rename = "randomSeed")]
        pub random_seed: Option<u64>,
        pub draws: Option<PlanDraws>,
        pub grouping: Option<PlanGrouping>,
    }

    pub fn parse_plan(contents: &str) -> PlannerResult<PlanConfig> {
        serde_json::from_str(contents).context(ParsingPlanSnafu {})
    }

    pub fn read_plan(path: &str) -> PlannerResult<PlanConfig> {
        let contents = fs::read_to_string(path).context(OpeningInputSnafu { path })?;
        debug!("read_plan: read content: {:?}", contents);
        parse_plan(contents.as_str())
    }

    pub fn validate_grouping(plan: &PlanGrouping) -> PlannerResult<(GroupingMode, usize)> {
        let mode = match plan.mode.as_str() {
            "count" => GroupingMode::ByCount,
            "size" => GroupingMode::BySize,
            x => {
                whatever!("Cannot use grouping mode {:?}: expected 'count' or 'size'", x)
            }
        };
        Ok((mode, plan.value))
    }
}

/// The whole session state: roster, raffle history, latest grouping result.
///
/// Engine operations replace entire fields with fresh snapshots rather than
/// mutating them in place.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct AppState {
    pub roster: Roster,
    pub history: RoundHistory,
    pub groups: Vec<GroupResult>,
}

impl AppState {
    pub fn new() -> AppState {
        AppState {
            roster: Roster::new(),
            history: RoundHistory::new(),
            groups: Vec::new(),
        }
    }

    /// Clears the roster. The grouping result depends directly on the current
    /// roster, so it is dropped as well; the raffle history is kept.
    pub fn clear_roster(&mut self) {
        self.roster = self.roster.clear();
        self.groups = Vec::new();
    }

    /// Global reset: roster, raffle history and grouping result.
    pub fn reset_all(&mut self) {
        self.roster = self.roster.clear();
        self.history = self.history.clear();
        self.groups = Vec::new();
    }
}

impl Default for AppState {
    fn default() -> Self {
        AppState::new()
    }
}

pub fn demo_names() -> Vec<String> {
    [
        "Alice", "Bob", "Charlie", "Alice", "David", "Eva", "Frank", "Grace", "Henry", "Ivy",
        "Jack", "Bob",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn wall_clock_timestamp() -> String {
    chrono::Local::now().format("%H:%M:%S").to_string()
}

/// Runs `rounds` successive draws. Exhaustion of the pool is a user-visible
/// notice, not a failure: remaining rounds are skipped and no partial round
/// is written.
pub fn run_draws(
    state: &mut AppState,
    settings: &DrawSettings,
    rounds: usize,
    rng: &mut impl Rng,
) -> usize {
    let mut completed = 0;
    for _ in 0..rounds {
        match state.history.draw(
            &state.roster.names(),
            settings,
            wall_clock_timestamp(),
            rng,
        ) {
            Ok(history) => {
                state.history = history;
                completed += 1;
            }
            Err(e) => {
                warn!("run_draws: stopping after {} rounds: {}", completed, e);
                eprintln!("No round drawn: {}", e);
                break;
            }
        }
    }
    completed
}

pub fn run_one_grouping(
    state: &mut AppState,
    mode: GroupingMode,
    value: usize,
    rng: &mut impl Rng,
) {
    match run_grouping(&state.roster.names(), mode, value, rng) {
        Ok(groups) => {
            // The new result replaces the previous set in full.
            state.groups = groups;
        }
        Err(e) => {
            warn!("run_one_grouping: {}", e);
            eprintln!("No grouping produced: {}", e);
        }
    }
}

/// Renders the grouping result as the two-column export table.
///
/// Cells are written verbatim: an embedded comma in a name corrupts the row.
/// This is a known limitation of the format, kept as-is (see the manual).
pub fn grouping_to_csv(groups: &[GroupResult]) -> String {
    let mut rows: Vec<String> = vec!["Group,Member".to_string()];
    for g in groups.iter() {
        for m in g.members.iter() {
            rows.push(format!("{},{}", g.group_name, m));
        }
    }
    rows.join("\n")
}

#[derive(Eq, PartialEq, Debug, Clone, Serialize, Deserialize)]
pub struct SummaryConfig {
    pub session: String,
    pub participants: usize,
    pub duplicates: usize,
}

/// Assembles the session summary. Round timestamps are presentation-only and
/// deliberately left out so that seeded sessions compare bit-for-bit against
/// a reference summary.
pub fn build_summary_js(session_name: &str, state: &AppState) -> JSValue {
    let c = SummaryConfig {
        session: session_name.to_string(),
        participants: state.roster.len(),
        duplicates: state
            .roster
            .participants()
            .iter()
            .filter(|p| p.is_duplicate)
            .count(),
    };
    let participants: Vec<JSValue> = state
        .roster
        .participants()
        .iter()
        .map(|p| json!({"name": p.name, "isDuplicate": p.is_duplicate}))
        .collect();
    let rounds: Vec<JSValue> = state
        .history
        .rounds()
        .iter()
        .map(|r| json!({"round": r.round_number, "names": r.names}))
        .collect();
    let groups: Vec<JSValue> = state
        .groups
        .iter()
        .map(|g| json!({"groupName": g.group_name, "members": g.members}))
        .collect();
    json!({
        "config": c,
        "participants": participants,
        "rounds": rounds,
        "groups": groups })
}

fn write_text(path: &str, contents: &str) -> PlannerResult<()> {
    if path == "stdout" {
        println!("{}", contents);
        return Ok(());
    }
    fs::write(path, contents).context(WritingOutputSnafu { path })?;
    Ok(())
}

fn assemble_roster(args: &Args, plan: &Option<PlanConfig>) -> PlannerResult<Roster> {
    let mut builder = Builder::new();
    if let Some(plan) = plan {
        if let Some(path) = plan.input_path.clone() {
            let contents = fs::read_to_string(path.clone())
                .context(OpeningInputSnafu { path: path.clone() })?;
            builder = builder.text(contents.as_str());
        }
        if let Some(names) = plan.names.clone() {
            builder = builder.names(&names);
        }
    }
    if let Some(path) = args.input.clone() {
        let contents =
            fs::read_to_string(path.clone()).context(OpeningInputSnafu { path: path.clone() })?;
        builder = builder.text(contents.as_str());
    }
    if let Some(names) = args.names.clone() {
        builder = builder.text(names.as_str());
    }
    if args.demo {
        builder = builder.names(&demo_names());
    }
    Ok(builder.build())
}

pub fn run_session(args: &Args) -> PlannerResult<()> {
    let plan: Option<PlanConfig> = match args.config.clone() {
        Some(path) => Some(read_plan(path.as_str())?),
        None => None,
    };
    info!("run_session: plan: {:?}", plan);

    let session_name = plan
        .as_ref()
        .map(|p| p.session_name.clone())
        .unwrap_or_else(|| "session".to_string());

    let seed = args.seed.or(plan.as_ref().and_then(|p| p.random_seed));
    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut state = AppState::new();
    state.roster = assemble_roster(args, &plan)?;
    info!(
        "run_session: roster size {}, duplicates: {}",
        state.roster.len(),
        state.roster.has_duplicates()
    );

    if args.interactive {
        let stdin = std::io::stdin();
        let mut lock = stdin.lock();
        return run_interactive(&mut state, &mut rng, &mut lock);
    }

    // Raffle rounds.
    let plan_draws = plan.as_ref().and_then(|p| p.draws.clone());
    let draw_count = args
        .draw
        .or(plan_draws.as_ref().and_then(|d| d.draw_count));
    if let Some(count) = draw_count {
        let settings = DrawSettings {
            allow_repeat: args.allow_repeat
                || plan_draws
                    .as_ref()
                    .and_then(|d| d.allow_repeat)
                    .unwrap_or(false),
            draw_count: count,
        };
        let rounds = args
            .rounds
            .or(plan_draws.as_ref().and_then(|d| d.rounds))
            .unwrap_or(1);
        let completed = run_draws(&mut state, &settings, rounds, &mut rng);
        for round in state.history.rounds().iter().rev() {
            println!(
                "Round {} [{}]: {}",
                round.round_number,
                round.timestamp,
                round.names.join(", ")
            );
        }
        debug!("run_session: {} rounds completed", completed);
    }

    // Grouping.
    let grouping = match (args.group_count, args.group_size) {
        (Some(v), _) => Some((GroupingMode::ByCount, v)),
        (_, Some(v)) => Some((GroupingMode::BySize, v)),
        _ => match plan.as_ref().and_then(|p| p.grouping.clone()) {
            Some(g) => Some(validate_grouping(&g)?),
            None => None,
        },
    };
    if let Some((mode, value)) = grouping {
        run_one_grouping(&mut state, mode, value, &mut rng);
        for g in state.groups.iter() {
            println!("{}: {}", g.group_name, g.members.join(", "));
        }
    }

    if let Some(path) = args.csv.clone() {
        write_text(path.as_str(), grouping_to_csv(&state.groups).as_str())?;
    }

    let summary = build_summary_js(session_name.as_str(), &state);
    let pretty_summary = serde_json::to_string_pretty(&summary).context(ParsingPlanSnafu {})?;
    if let Some(path) = args.out.clone() {
        write_text(path.as_str(), pretty_summary.as_str())?;
    }

    // The reference summary, if provided for comparison.
    if let Some(reference_path) = args.reference.clone() {
        let contents = fs::read_to_string(reference_path.clone()).context(OpeningInputSnafu {
            path: reference_path,
        })?;
        let reference: JSValue =
            serde_json::from_str(contents.as_str()).context(ParsingPlanSnafu {})?;
        let pretty_reference =
            serde_json::to_string_pretty(&reference).context(ParsingPlanSnafu {})?;
        if pretty_reference != pretty_summary {
            warn!("Found differences with the reference summary");
            print_diff(pretty_reference.as_str(), pretty_summary.as_str(), "\n");
            whatever!("Difference detected between session summary and reference summary")
        }
    }

    Ok(())
}

// **** Interactive session ****

/// Purely cosmetic spin shown before a draw commits. It runs on its own
/// entropy so that it never perturbs the seeded session generator, and it
/// completes before the sampling below starts.
fn spin_preview(pool: &[String]) {
    let mut rng = rand::thread_rng();
    for _ in 0..8 {
        let idx = rng.gen_range(0..pool.len());
        print!("\r  ... {:<24}", pool[idx]);
        let _ = std::io::stdout().flush();
        std::thread::sleep(std::time::Duration::from_millis(80));
    }
    println!();
}

fn confirm(prompt: &str, reader: &mut impl BufRead) -> bool {
    print!("{} [y/N] ", prompt);
    let _ = std::io::stdout().flush();
    let mut line = String::new();
    if reader.read_line(&mut line).is_err() {
        return false;
    }
    matches!(line.trim(), "y" | "Y" | "yes")
}

fn print_roster(state: &AppState) {
    if state.roster.is_empty() {
        println!("(roster is empty)");
        return;
    }
    for p in state.roster.participants() {
        let marker = if p.is_duplicate { "  [duplicate]" } else { "" };
        println!("{:>4}  {}{}", p.id, p.name, marker);
    }
}

fn print_history(state: &AppState) {
    if state.history.is_empty() {
        println!("(no rounds drawn)");
        return;
    }
    for r in state.history.rounds() {
        println!(
            "#{:<3} round {} [{}]: {}",
            r.id,
            r.round_number,
            r.timestamp,
            r.names.join(", ")
        );
    }
}

const HELP: &str = "\
Commands:
  add NAMES...        add comma/newline-separated names to the roster
  load PATH           add names from a .csv/.txt file
  list                show the roster with duplicate markers
  remove ID           remove one participant by id
  dedup               keep the first occurrence of every duplicated name
  clear               clear the roster (asks for confirmation)
  reset               clear roster, rounds and groups (asks for confirmation)
  draw [N] [repeat]   draw N winners (default 1); 'repeat' allows past winners
  undraw ID           delete one round from the history
  history             show the draw history, most recent first
  group count N       partition into N groups
  group size N        partition into groups of at most N members
  export PATH         write the grouping result as CSV
  summary             print the session summary as JSON
  quit                leave the session";

pub fn run_interactive(
    state: &mut AppState,
    rng: &mut StdRng,
    reader: &mut impl BufRead,
) -> PlannerResult<()> {
    println!("plannerhub interactive session. Type 'help' for the command list.");
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        let mut line = String::new();
        let n = reader
            .read_line(&mut line)
            .context(OpeningInputSnafu { path: "stdin" })?;
        if n == 0 {
            return Ok(());
        }
        let mut parts = line.split_whitespace();
        let command = match parts.next() {
            Some(c) => c,
            None => continue,
        };
        let rest: Vec<&str> = parts.collect();
        match command {
            "help" => println!("{}", HELP),
            "add" => {
                let raw = rest.join(" ");
                let names = parse_names(raw.as_str());
                if names.is_empty() {
                    println!("Nothing to add.");
                    continue;
                }
                state.roster = state.roster.add_names(&names);
                println!("Added {} names ({} total).", names.len(), state.roster.len());
            }
            "load" => match rest.first() {
                Some(path) => match fs::read_to_string(path) {
                    Ok(contents) => {
                        let names = parse_names(contents.as_str());
                        state.roster = state.roster.add_names(&names);
                        println!("Added {} names ({} total).", names.len(), state.roster.len());
                    }
                    Err(e) => println!("Cannot read {}: {}", path, e),
                },
                None => println!("Usage: load PATH"),
            },
            "list" => print_roster(state),
            "remove" => match rest.first().and_then(|s| s.parse::<u64>().ok()) {
                Some(raw) => {
                    let target = state
                        .roster
                        .participants()
                        .iter()
                        .find(|p| p.id.value() == raw)
                        .map(|p| p.id);
                    match target {
                        Some(id) => {
                            state.roster = state.roster.remove(id);
                            println!("Removed. {} participants left.", state.roster.len());
                        }
                        None => println!("No participant with id {}.", raw),
                    }
                }
                None => println!("Usage: remove ID"),
            },
            "dedup" => {
                state.roster = state.roster.remove_all_duplicates();
                println!("{} participants left.", state.roster.len());
            }
            "clear" => {
                if confirm(
                    "This clears the roster and the grouping result. Continue?",
                    reader,
                ) {
                    state.clear_roster();
                    println!("Roster cleared.");
                }
            }
            "reset" => {
                if confirm(
                    "This clears the roster, the draw history and the grouping result. Continue?",
                    reader,
                ) {
                    state.reset_all();
                    println!("Session reset.");
                }
            }
            "draw" => {
                let count = rest
                    .first()
                    .and_then(|s| s.parse::<usize>().ok())
                    .unwrap_or(1);
                let allow_repeat = rest.iter().any(|s| *s == "repeat");
                let settings = DrawSettings {
                    allow_repeat,
                    draw_count: count,
                };
                let pool = state
                    .history
                    .eligible_pool(&state.roster.names(), allow_repeat);
                if !pool.is_empty() {
                    spin_preview(&pool);
                }
                match state.history.draw(
                    &state.roster.names(),
                    &settings,
                    wall_clock_timestamp(),
                    rng,
                ) {
                    Ok(history) => {
                        state.history = history;
                        let round = &state.history.rounds()[0];
                        println!(
                            "Round {}: {}",
                            round.round_number,
                            round.names.join(", ")
                        );
                    }
                    Err(e) => println!("No round drawn: {}", e),
                }
            }
            "undraw" => match rest.first().and_then(|s| s.parse::<u64>().ok()) {
                Some(raw) => {
                    let target = state
                        .history
                        .rounds()
                        .iter()
                        .find(|r| r.id.value() == raw)
                        .map(|r| r.id);
                    match target {
                        Some(id) => {
                            state.history = state.history.remove_round(id);
                            println!("Round deleted. {} rounds left.", state.history.len());
                        }
                        None => println!("No round with id {}.", raw),
                    }
                }
                None => println!("Usage: undraw ID"),
            },
            "history" => print_history(state),
            "group" => {
                let mode = match rest.first() {
                    Some(&"count") => Some(GroupingMode::ByCount),
                    Some(&"size") => Some(GroupingMode::BySize),
                    _ => None,
                };
                let value = rest.get(1).and_then(|s| s.parse::<usize>().ok());
                match (mode, value) {
                    (Some(mode), Some(value)) => {
                        run_one_grouping(state, mode, value, rng);
                        for g in state.groups.iter() {
                            println!("{}: {}", g.group_name, g.members.join(", "));
                        }
                    }
                    _ => println!("Usage: group count N | group size N"),
                }
            }
            "export" => match rest.first() {
                Some(path) => {
                    if state.groups.is_empty() {
                        println!("No grouping result to export.");
                    } else {
                        write_text(path, grouping_to_csv(&state.groups).as_str())?;
                        println!("Wrote {}.", path);
                    }
                }
                None => println!("Usage: export PATH"),
            },
            "summary" => {
                let summary = build_summary_js("session", state);
                let pretty =
                    serde_json::to_string_pretty(&summary).context(ParsingPlanSnafu {})?;
                println!("{}", pretty);
            }
            "quit" | "exit" => return Ok(()),
            x => println!("Unknown command {:?}. Type 'help'.", x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::BufReader;

    fn names(xs: &[&str]) -> Vec<String> {
        xs.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn demo_roster_has_the_expected_duplicates() {
        let roster = Roster::new().add_names(&demo_names());
        assert_eq!(roster.len(), 12);
        let flagged: Vec<&str> = roster
            .participants()
            .iter()
            .filter(|p| p.is_duplicate)
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(flagged, vec!["Alice", "Bob", "Alice", "Bob"]);
    }

    #[test]
    fn csv_export_is_one_row_per_member() {
        let groups = vec![
            GroupResult {
                group_name: "Group 1".to_string(),
                members: names(&["Anna", "Bob"]),
            },
            GroupResult {
                group_name: "Group 2".to_string(),
                members: names(&["Clara"]),
            },
        ];
        assert_eq!(
            grouping_to_csv(&groups),
            "Group,Member\nGroup 1,Anna\nGroup 1,Bob\nGroup 2,Clara"
        );
    }

    #[test]
    fn csv_export_does_not_escape_embedded_commas() {
        // Known limitation carried from the source format: the cell is
        // written verbatim.
        let groups = vec![GroupResult {
            group_name: "Group 1".to_string(),
            members: names(&["Doe, John"]),
        }];
        assert_eq!(grouping_to_csv(&groups), "Group,Member\nGroup 1,Doe, John");
    }

    #[test]
    fn plan_files_use_camel_case_keys() {
        let plan = parse_plan(
            r#"{
                "sessionName": "office party",
                "names": ["Anna", "Bob", "Clara"],
                "randomSeed": 42,
                "draws": {"drawCount": 2, "rounds": 1, "allowRepeat": false},
                "grouping": {"mode": "size", "value": 2}
            }"#,
        )
        .unwrap();
        assert_eq!(plan.session_name, "office party");
        assert_eq!(plan.random_seed, Some(42));
        let draws = plan.draws.unwrap();
        assert_eq!(draws.draw_count, Some(2));
        let (mode, value) = validate_grouping(&plan.grouping.unwrap()).unwrap();
        assert_eq!(mode, GroupingMode::BySize);
        assert_eq!(value, 2);
    }

    #[test]
    fn unknown_grouping_mode_is_rejected() {
        let plan = PlanGrouping {
            mode: "pairs".to_string(),
            value: 2,
        };
        assert!(validate_grouping(&plan).is_err());
    }

    #[test]
    fn draws_stop_at_pool_exhaustion_without_partial_rounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut state = AppState::new();
        state.roster = Roster::new().add_names(&names(&["A", "B", "C"]));
        let settings = DrawSettings {
            allow_repeat: false,
            draw_count: 2,
        };
        let completed = run_draws(&mut state, &settings, 5, &mut rng);
        // Rounds of 2 and 1 exhaust the pool; the remaining requests draw nothing.
        assert_eq!(completed, 2);
        assert_eq!(state.history.len(), 2);
        let total: usize = state
            .history
            .rounds()
            .iter()
            .map(|r| r.names.len())
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn grouping_failure_keeps_previous_result() {
        let mut rng = StdRng::seed_from_u64(22);
        let mut state = AppState::new();
        state.roster = Roster::new().add_names(&names(&["A", "B"]));
        run_one_grouping(&mut state, GroupingMode::ByCount, 2, &mut rng);
        assert_eq!(state.groups.len(), 2);

        state.clear_roster();
        // clear_roster drops the dependent grouping result.
        assert!(state.groups.is_empty());
        run_one_grouping(&mut state, GroupingMode::ByCount, 2, &mut rng);
        assert!(state.groups.is_empty());
    }

    #[test]
    fn summary_leaves_out_timestamps() {
        let mut rng = StdRng::seed_from_u64(23);
        let mut state = AppState::new();
        state.roster = Roster::new().add_names(&names(&["A", "B"]));
        run_draws(
            &mut state,
            &DrawSettings::DEFAULT_SETTINGS,
            1,
            &mut rng,
        );
        let js = build_summary_js("s", &state);
        assert_eq!(js["config"]["participants"], json!(2));
        assert_eq!(js["rounds"][0]["round"], json!(1));
        assert!(js["rounds"][0].get("timestamp").is_none());
    }

    #[test]
    fn seeded_sessions_are_reproducible() {
        let run = || {
            let mut rng = StdRng::seed_from_u64(99);
            let mut state = AppState::new();
            state.roster = Roster::new().add_names(&demo_names());
            let settings = DrawSettings {
                allow_repeat: false,
                draw_count: 3,
            };
            run_draws(&mut state, &settings, 2, &mut rng);
            run_one_grouping(&mut state, GroupingMode::ByCount, 3, &mut rng);
            build_summary_js("s", &state)
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn interactive_clear_requires_confirmation() {
        let mut rng = StdRng::seed_from_u64(24);
        let mut state = AppState::new();
        state.roster = Roster::new().add_names(&names(&["A", "B"]));
        let script = "clear\nn\nclear\ny\nquit\n";
        let mut reader = BufReader::new(script.as_bytes());
        run_interactive(&mut state, &mut rng, &mut reader).unwrap();
        assert!(state.roster.is_empty());
    }

    #[test]
    fn interactive_session_drives_the_engines() {
        let mut rng = StdRng::seed_from_u64(25);
        let mut state = AppState::new();
        let script = "add Anna, Bob, Clara, Anna\ndedup\ndraw 2\ngroup count 3\nquit\n";
        let mut reader = BufReader::new(script.as_bytes());
        run_interactive(&mut state, &mut rng, &mut reader).unwrap();
        assert_eq!(state.roster.len(), 3);
        assert_eq!(state.history.len(), 1);
        assert_eq!(state.history.rounds()[0].names.len(), 2);
        assert_eq!(state.groups.len(), 3);
    }
}
