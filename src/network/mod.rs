mod record;
mod topology;

pub use record::{Cell, EdgeRecord};
pub use topology::{EdgeIndex, Link, LinkIndex, Network, NodeIndex, Status};

pub type Path = Vec<EdgeIndex>;
