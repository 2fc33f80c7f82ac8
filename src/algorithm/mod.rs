mod base;
mod route;
mod spf;

pub use base::dijkstra::{shortest_paths, ShortestPaths, Visit};
pub use route::Route;
pub use spf::SPF;
