//! Fixed console text and end-of-game reporting.

mod summary;

pub use summary::{GameSummary, QueenFate};

/// Prompt printed before each command is read.
pub const PROMPT: &str = "> ";

/// Banner printed once when a session starts.
pub const INTRO: &str = "\u{1F41D} Welcome to Bees In The Trap \u{1F41D}

The hive is restless, and you're standing right in the buzz zone.
Armed with nothing but courage and a sharp eye, you must take down the swarm before they sting you into oblivion.

Each turn, you can strike the hive... but beware:
- You might miss entirely.
- They might miss too.
- Every bee type fights differently. Watch out for the Queen.

\u{2694}\u{FE0F} OBJECTIVE:
Destroy the hive before it destroys you.

Commands:
> hit       \u{2014} Attempt a strike on the hive
> auto      \u{2014} Let fate decide and simulate the entire game

Let the stinger-slinging begin...";

/// Shown whenever the typed line is not a known command.
pub const INVALID_COMMAND: &str = "Invalid Command!

Commands:
> hit       \u{2014} Attempt a strike on the hive
> auto      \u{2014} Let fate decide and simulate the entire game";
