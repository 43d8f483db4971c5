// ********* Roster data structures ***********

use std::error::Error;
use std::fmt::Display;

/// Opaque identifier of a participant.
///
/// Identifiers are generated by the roster and are unique for the lifetime of
/// a session, including across clears. Identity is carried by the identifier,
/// not by the name: the same name may appear under several identifiers.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct ParticipantId(pub(crate) u64);

impl ParticipantId {
    /// The raw numeric value, for display at the presentation layer.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque identifier of a completed raffle round.
#[derive(Eq, PartialEq, Debug, Clone, Copy, Hash, Ord, PartialOrd)]
pub struct RoundId(pub(crate) u64);

impl RoundId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl Display for RoundId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One entry of the roster.
///
/// `is_duplicate` is derived, not authoritative: it always equals "another
/// participant currently shares this name" and is recomputed by the roster
/// after every insertion or removal. Matching is case-sensitive on the
/// already-trimmed name.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub is_duplicate: bool,
}

// ******** Output data structures *********

/// One completed raffle round.
///
/// `names` lists the winners in the exact order they were drawn.
/// `round_number` reflects creation order and is never renumbered, even when
/// earlier rounds are deleted from the history.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct DrawRound {
    pub id: RoundId,
    pub round_number: u32,
    pub names: Vec<String>,
    pub timestamp: String,
}

/// One group of a partition. A grouping run always produces a full set of
/// these, replacing any previous result set.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct GroupResult {
    pub group_name: String,
    pub members: Vec<String>,
}

/// Conditions that prevent a draw or grouping from producing a result.
///
/// All of them are non-fatal: no state is written when they are signaled and
/// the session remains fully usable.
#[derive(Eq, PartialEq, Debug, Clone)]
pub enum AllocationErrors {
    /// The roster holds no participant.
    EmptyRoster,
    /// Every eligible candidate has already won and repeats are disallowed.
    EmptyPool,
}

impl Error for AllocationErrors {}

impl Display for AllocationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AllocationErrors::EmptyRoster => write!(f, "the roster is empty"),
            AllocationErrors::EmptyPool => write!(f, "no eligible candidates are left to draw"),
        }
    }
}

// ********* Configuration **********

/// How the number of groups is derived from the requested value.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum GroupingMode {
    /// The value is the number of groups.
    ByCount,
    /// The value is the target group size; the number of groups is
    /// ceil(roster size / value).
    BySize,
}

/// Settings for one raffle round.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct DrawSettings {
    /// When set, names that already won in prior rounds stay eligible.
    pub allow_repeat: bool,
    /// Number of winners requested for the round. The effective number is
    /// clamped to the size of the eligible pool.
    pub draw_count: usize,
}

impl DrawSettings {
    pub const DEFAULT_SETTINGS: DrawSettings = DrawSettings {
        allow_repeat: false,
        draw_count: 1,
    };
}
