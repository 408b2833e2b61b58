/// External episode identifier used as the key of a fetched movie.
pub type EpisodeId = i64;
