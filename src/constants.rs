//! Various constants, for use in various places. Mostly gameplay defaults, but there are a few for saving.

/// Constants with gameplay implications, albeit potentially minor.
pub mod gameplay {
    /// The lowest number the secret can be, unless overridden on the command line.
    pub const DEFAULT_MIN: i64 = 1;
    /// The highest number the secret can be, unless overridden on the command line.
    pub const DEFAULT_MAX: i64 = 100;
    /// How many past guesses are shown to the player.
    pub const HISTORY_LEN: usize = 5;
}

/// Constants relating to the save file.
pub mod saves {
    /// The key the best score is stored under.
    pub const BEST_SCORE_KEY: &str = "bestScore";
    /// Where the save file goes if nobody says otherwise.
    pub const DEFAULT_SAVE_FILE: &str = "numguess.sav";
}
