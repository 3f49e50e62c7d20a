mod search;

pub use search::Search;
