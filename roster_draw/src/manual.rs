/*!

This is the long-form manual for `roster_draw` and `plannerhub`.

## Input format

The roster is ingested as flat UTF-8 text, either pasted on the command line
or read from a `.csv` or `.txt` file. There is no header row handling and no
column awareness: a CSV file is treated as plain comma/newline-delimited
text. Names are split on commas and newlines, runs of separators collapse,
surrounding whitespace is trimmed and empty pieces are dropped.

Duplicate detection is name-based, case-sensitive and applied after
trimming. `Anna` and `anna` are two different participants; `Anna` pasted
twice is a flagged duplicate. Internal whitespace is not normalized.

## Raffle draws

Each draw samples winners uniformly without replacement from the eligible
pool. Unless repeats are allowed, every name that won in a prior round of the
current history is excluded from the pool. Deleting a round from the history
returns its winners to eligibility for future draws, but completed rounds are
never renumbered or rewritten.

When the same name appears several times in the roster, each occurrence is an
independent pool slot: the name can be drawn once per slot within a round,
and a single name match excludes all its slots once it has won.

## Grouping

A grouping run shuffles the full roster and distributes it round-robin into
`n` groups, where `n` is either the requested group count or
`ceil(roster size / requested group size)`. Group sizes therefore differ by
at most one member. Every run replaces the previous result set in full.

## CSV export

The grouping export is a two-column table:

```text
Group,Member
Group 1,Anna
Group 1,Bob
Group 2,Clara
```

Rows are comma-joined and the cells are written verbatim. A participant name
that itself contains a comma will corrupt the exported file. This is a known
limitation of the format produced here, kept for compatibility with the
consumers of the original export; quote your input names accordingly.

## Reproducibility

All randomized operations draw from a single session generator. Passing a
seed on the command line makes draw and grouping outcomes reproducible,
which is the intended way to use the reference-comparison flag. Round
timestamps are presentation-only and are not part of the exported summary.

*/
