mod config;
pub mod builder;
pub mod manual;

use log::{debug, info};

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{HashMap, HashSet};

pub use crate::config::*;

// **** Name parsing ****

/// Splits raw pasted or uploaded text into name tokens.
///
/// Newlines and commas both act as separators, runs of consecutive separators
/// collapse into one, and surrounding whitespace is trimmed from every token.
/// Empty tokens are discarded. The output order matches the order of
/// appearance in the input. This never fails: empty input yields an empty
/// sequence.
pub fn parse_names(raw: &str) -> Vec<String> {
    raw.split(|c| c == '\n' || c == ',')
        .map(|piece| piece.trim())
        .filter(|piece| !piece.is_empty())
        .map(|piece| piece.to_string())
        .collect()
}

// **** Roster store ****

/// The ordered collection of participants.
///
/// Every operation returns a fresh snapshot instead of mutating in place, so
/// the caller always holds a consistent roster. Identifier generation is
/// monotonic for the lifetime of the value, including across `clear`.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Roster {
    participants: Vec<Participant>,
    next_id: u64,
}

impl Default for Roster {
    fn default() -> Self {
        Roster::new()
    }
}

impl Roster {
    pub fn new() -> Roster {
        Roster {
            participants: Vec::new(),
            next_id: 1,
        }
    }

    /// The participants in insertion order.
    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// The current names in roster order, repeats included.
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    pub fn has_duplicates(&self) -> bool {
        self.participants.iter().any(|p| p.is_duplicate)
    }

    /// Appends one participant per name, repeats included, and recomputes the
    /// duplicate flags jointly over the old and new entries. An empty input
    /// is a no-op.
    pub fn add_names(&self, names: &[String]) -> Roster {
        if names.is_empty() {
            return self.clone();
        }
        let mut participants = self.participants.clone();
        let mut next_id = self.next_id;
        for name in names {
            participants.push(Participant {
                id: ParticipantId(next_id),
                name: name.clone(),
                is_duplicate: false,
            });
            next_id += 1;
        }
        debug!(
            "add_names: {} entries added, roster size {}",
            names.len(),
            participants.len()
        );
        let mut res = Roster {
            participants,
            next_id,
        };
        res.recompute_duplicates();
        res
    }

    /// Removes the participant with that identifier and recomputes the
    /// duplicate flags over the remainder. A no-op when the identifier is not
    /// present.
    pub fn remove(&self, id: ParticipantId) -> Roster {
        let participants: Vec<Participant> = self
            .participants
            .iter()
            .filter(|p| p.id != id)
            .cloned()
            .collect();
        let mut res = Roster {
            participants,
            next_id: self.next_id,
        };
        res.recompute_duplicates();
        res
    }

    /// Keeps, for each distinct name, only the first-encountered participant
    /// in roster order, with its flag cleared. This is lossy: later
    /// participants with a repeated name are discarded, not merely unflagged.
    /// Applying it twice yields the same roster as applying it once.
    pub fn remove_all_duplicates(&self) -> Roster {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut participants: Vec<Participant> = Vec::new();
        for p in self.participants.iter() {
            if seen.insert(p.name.as_str()) {
                participants.push(Participant {
                    is_duplicate: false,
                    ..p.clone()
                });
            }
        }
        Roster {
            participants,
            next_id: self.next_id,
        }
    }

    /// Removes all participants. The identifier counter is preserved so that
    /// identifiers are never reused within a session.
    pub fn clear(&self) -> Roster {
        Roster {
            participants: Vec::new(),
            next_id: self.next_id,
        }
    }

    // Invariant: p.is_duplicate == (count of participants with the same name > 1).
    fn recompute_duplicates(&mut self) {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for p in self.participants.iter() {
            *counts.entry(p.name.clone()).or_insert(0) += 1;
        }
        for p in self.participants.iter_mut() {
            p.is_duplicate = counts[&p.name] > 1;
        }
    }
}

// **** Raffle engine ****

/// The raffle history: completed rounds, most recent first.
///
/// One round fully completes before another may start. The history owns round
/// identifier generation and never renumbers rounds on deletion.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct RoundHistory {
    rounds: Vec<DrawRound>,
    next_id: u64,
}

impl Default for RoundHistory {
    fn default() -> Self {
        RoundHistory::new()
    }
}

impl RoundHistory {
    pub fn new() -> RoundHistory {
        RoundHistory {
            rounds: Vec::new(),
            next_id: 1,
        }
    }

    /// The completed rounds, most recent first. This is display order only:
    /// `round_number` reflects creation order.
    pub fn rounds(&self) -> &[DrawRound] {
        &self.rounds
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    /// The names still eligible for the next draw. Duplicate roster names
    /// remain duplicated slots in the pool unless excluded by a name match
    /// with a prior winner.
    pub fn eligible_pool(&self, roster_names: &[String], allow_repeat: bool) -> Vec<String> {
        if allow_repeat {
            return roster_names.to_vec();
        }
        let past_winners: HashSet<&str> = self
            .rounds
            .iter()
            .flat_map(|r| r.names.iter().map(|n| n.as_str()))
            .collect();
        roster_names
            .iter()
            .filter(|n| !past_winners.contains(n.as_str()))
            .cloned()
            .collect()
    }

    /// Draws the winners of a new round and returns the updated history with
    /// the new round prepended.
    ///
    /// `min(draw_count, pool size)` distinct pool slots are sampled without
    /// replacement, uniformly at random: each pick removes the chosen slot
    /// from a working copy of the pool before the next pick, so repeats
    /// within one round are impossible. The new round gets
    /// `round_number = current round count + 1`.
    pub fn draw(
        &self,
        roster_names: &[String],
        settings: &DrawSettings,
        timestamp: String,
        rng: &mut impl Rng,
    ) -> Result<RoundHistory, AllocationErrors> {
        if roster_names.is_empty() {
            return Err(AllocationErrors::EmptyRoster);
        }
        let mut working = self.eligible_pool(roster_names, settings.allow_repeat);
        if working.is_empty() {
            return Err(AllocationErrors::EmptyPool);
        }
        debug!(
            "draw: pool size {}, requested {}",
            working.len(),
            settings.draw_count
        );

        let count = settings.draw_count.max(1).min(working.len());
        let mut winners: Vec<String> = Vec::with_capacity(count);
        for _ in 0..count {
            let idx = rng.gen_range(0..working.len());
            winners.push(working.remove(idx));
        }

        let round = DrawRound {
            id: RoundId(self.next_id),
            round_number: (self.rounds.len() + 1) as u32,
            names: winners,
            timestamp,
        };
        info!(
            "draw: round {} winners: {:?}",
            round.round_number, round.names
        );

        let mut rounds: Vec<DrawRound> = Vec::with_capacity(self.rounds.len() + 1);
        rounds.push(round);
        rounds.extend(self.rounds.iter().cloned());
        Ok(RoundHistory {
            rounds,
            next_id: self.next_id + 1,
        })
    }

    /// Deletes that round from the history. Remaining rounds keep their
    /// `round_number`; eligibility is recomputed fresh from whatever rounds
    /// remain at the time of the next draw.
    pub fn remove_round(&self, id: RoundId) -> RoundHistory {
        RoundHistory {
            rounds: self
                .rounds
                .iter()
                .filter(|r| r.id != id)
                .cloned()
                .collect(),
            next_id: self.next_id,
        }
    }

    pub fn clear(&self) -> RoundHistory {
        RoundHistory {
            rounds: Vec::new(),
            next_id: self.next_id,
        }
    }
}

// **** Grouping engine ****

/// Partitions the full roster snapshot into groups, uniformly at random.
///
/// The names are shuffled with a full Fisher-Yates permutation and then
/// distributed round-robin: the name at shuffled position k goes to group
/// `k mod n`. Every input name lands in exactly one group. The result always
/// replaces any previous result set in full.
pub fn run_grouping(
    roster_names: &[String],
    mode: GroupingMode,
    value: usize,
    rng: &mut impl Rng,
) -> Result<Vec<GroupResult>, AllocationErrors> {
    if roster_names.is_empty() {
        return Err(AllocationErrors::EmptyRoster);
    }
    let value = value.max(1);
    let num_groups = match mode {
        GroupingMode::ByCount => value,
        GroupingMode::BySize => (roster_names.len() + value - 1) / value,
    }
    .max(1);
    info!(
        "run_grouping: {} names into {} groups ({:?}, value {})",
        roster_names.len(),
        num_groups,
        mode,
        value
    );

    let mut shuffled: Vec<String> = roster_names.to_vec();
    shuffled.shuffle(rng);

    let mut groups: Vec<GroupResult> = (1..=num_groups)
        .map(|i| GroupResult {
            group_name: format!("Group {}", i),
            members: Vec::new(),
        })
        .collect();
    for (idx, name) in shuffled.into_iter().enumerate() {
        groups[idx % num_groups].members.push(name);
    }
    Ok(groups)
}
